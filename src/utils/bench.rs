//! Measurement primitives shared by the harness.
//!
//! By default (`cpu_cycles` feature), measurements use CPU cycle counters.
//! Use `--features use_time` or `--no-default-features` to use wall-clock
//! time instead. Either way a measurement reduces to an integer count of
//! [`unit_name`] units via [`to_units`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Cycles if: cpu_cycles is enabled AND use_time is NOT enabled.
// Wall-clock time if: use_time is enabled OR cpu_cycles is disabled.

/// Measurement value type - cycles (u64) or Duration depending on feature
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub type Measurement = u64;

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub type Measurement = std::time::Duration;

/// Starting point of a measurement, as returned by [`now`].
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub type Stamp = u64;

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub type Stamp = std::time::Instant;

#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
#[inline(always)]
pub fn now() -> Stamp {
    crate::utils::cycles::read_cycles()
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
#[inline(always)]
pub fn now() -> Stamp {
    std::time::Instant::now()
}

#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
#[inline(always)]
pub fn elapsed(start: Stamp) -> Measurement {
    crate::utils::cycles::cycles_since(start)
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
#[inline(always)]
pub fn elapsed(start: Stamp) -> Measurement {
    start.elapsed()
}

/// Reduce a measurement to raw units (cycles or nanoseconds)
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub fn to_units(m: Measurement) -> u64 {
    m
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub fn to_units(m: Measurement) -> u64 {
    u64::try_from(m.as_nanos()).unwrap_or(u64::MAX)
}

/// Get the measurement unit name
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub const fn unit_name() -> &'static str {
    #[cfg(target_arch = "aarch64")]
    {
        "ticks"
    }
    #[cfg(not(target_arch = "aarch64"))]
    {
        "cycles"
    }
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub const fn unit_name() -> &'static str {
    "ns"
}

/// Format a unit count for the results table
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub fn format_measurement(units: u64) -> String {
    units.to_string()
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub fn format_measurement(units: u64) -> String {
    format!("{:?}", std::time::Duration::from_nanos(units))
}

/// Time one expression, returning `(Measurement, value)`.
///
/// The value goes through `black_box` so the work cannot be optimised away.
#[macro_export]
macro_rules! measure {
    ($e:expr) => {{
        let start = $crate::utils::bench::now();
        let value = ::std::hint::black_box($e);
        ($crate::utils::bench::elapsed(start), value)
    }};
}

/// Get a seed from current time for randomization
pub fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x12345678)
}

/// Generate `len` values uniformly drawn from `[-1.0, 1.0)`.
pub fn random_vector(rng: &mut StdRng, len: usize) -> Vec<f64> {
    (0..len).map(|_| rng.random_range(-1.0..1.0)).collect()
}

/// Two independent random vectors of `len` elements from one seed.
pub fn random_pair(len: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let a = random_vector(&mut rng, len);
    let b = random_vector(&mut rng, len);
    (a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_pair_reproducible() {
        let (a1, b1) = random_pair(257, 42);
        let (a2, b2) = random_pair(257, 42);
        assert_eq!(a1, a2);
        assert_eq!(b1, b2);
        assert_ne!(a1, b1);
    }

    #[test]
    fn test_random_vector_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let v = random_vector(&mut rng, 10_000);
        assert!(v.iter().all(|x| (-1.0..1.0).contains(x)));
    }

    #[test]
    fn test_measure_macro_returns_value() {
        let (m, value) = crate::measure!(21 * 2);
        assert_eq!(value, 42);
        let _ = to_units(m);
    }
}
