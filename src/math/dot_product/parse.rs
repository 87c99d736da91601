//! Text input for vectors.

use crate::error::{DotError, DotResult};

/// Parse a vector from comma separated or whitespace separated numbers.
///
/// With at least one comma, every comma-delimited field is one element, so an
/// empty field (`"1,,3"`, `"1,2,"`) is an error rather than being skipped.
/// Without commas, whitespace separates elements. `nan`, `inf` and `-inf`
/// are accepted. The first element that is not a number fails the whole
/// parse with [`DotError::NonNumeric`]. A blank string is the empty vector.
pub fn parse_vector(input: &str) -> DotResult<Vec<f64>> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    if input.contains(',') {
        parse_fields(input.split(',').map(str::trim))
    } else {
        parse_fields(input.split_whitespace())
    }
}

fn parse_fields<'a>(fields: impl Iterator<Item = &'a str>) -> DotResult<Vec<f64>> {
    fields
        .enumerate()
        .map(|(index, token)| {
            token.parse::<f64>().map_err(|_| DotError::NonNumeric {
                index,
                token: token.to_string(),
            })
        })
        .collect()
}
