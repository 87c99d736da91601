//! Tests for dot product implementations.

#[cfg(test)]
mod tests {
    use crate::error::DotError;
    use crate::math::dot_product::*;
    use crate::utils::bench::random_pair;

    fn all_results(a: &[f64], b: &[f64]) -> Vec<(Strategy, f64)> {
        Strategy::ALL
            .into_iter()
            .map(|s| (s, dot_with(s, a, b).unwrap()))
            .collect()
    }

    #[test]
    fn test_original_basic() {
        let a = [1.0, 2.0, 3.0, 4.0];
        let b = [5.0, 6.0, 7.0, 8.0];
        // 1*5 + 2*6 + 3*7 + 4*8 = 5 + 12 + 21 + 32 = 70
        assert_eq!(dot_product_original(&a, &b).unwrap(), 70.0);
    }

    #[test]
    fn test_every_strategy_exact_on_small_integers() {
        for (s, r) in all_results(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]) {
            assert_eq!(r, 32.0, "{}", s);
        }
        for (s, r) in all_results(&[1.0, 0.0], &[0.0, 1.0]) {
            assert_eq!(r, 0.0, "{}", s);
        }
    }

    #[test]
    fn test_every_strategy_empty() {
        for (s, r) in all_results(&[], &[]) {
            assert_eq!(r, 0.0, "{}", s);
        }
    }

    #[test]
    fn test_every_strategy_rejects_mismatch() {
        for s in Strategy::ALL {
            for _ in 0..3 {
                assert_eq!(
                    dot_with(s, &[1.0], &[1.0, 2.0]),
                    Err(DotError::LengthMismatch { left: 1, right: 2 }),
                    "{}",
                    s
                );
            }
        }
    }

    #[test]
    fn test_left_to_right_strategies_bit_identical() {
        for (size, seed) in [(1, 1), (7, 2), (1023, 3), (65_537, 4)] {
            let (a, b) = random_pair(size, seed);
            let reference = dot(&a, &b).unwrap();
            for s in Strategy::ALL.into_iter().filter(|s| s.is_left_to_right()) {
                let r = dot_with(s, &a, &b).unwrap();
                assert_eq!(r.to_bits(), reference.to_bits(), "{} at size {}", s, size);
            }
        }
    }

    #[test]
    fn test_summation_order_is_left_to_right() {
        // Exact answer is 2.0; left to right gives 1.0, pairwise gives 0.0.
        let a = [1e16, 1.0, -1e16, 1.0];
        let b = [1.0; 4];
        let expected = 1.0;
        for s in Strategy::ALL.into_iter().filter(|s| s.is_left_to_right()) {
            assert_eq!(dot_with(s, &a, &b).unwrap(), expected, "{}", s);
        }
    }

    #[test]
    fn test_ieee_values_pass_through() {
        let r = dot(&[f64::NAN, 1.0], &[1.0, 1.0]).unwrap();
        assert!(r.is_nan());
        assert_eq!(dot(&[f64::INFINITY], &[2.0]).unwrap(), f64::INFINITY);
        assert!(dot(&[f64::INFINITY, f64::NEG_INFINITY], &[1.0, 1.0]).unwrap().is_nan());
        assert_eq!(dot(&[-2.0, -3.0], &[4.0, -1.0]).unwrap(), -5.0);
    }

    #[test]
    fn test_inputs_untouched() {
        let (a, b) = random_pair(100, 11);
        let (a0, b0) = (a.clone(), b.clone());
        let _ = all_results(&a, &b);
        assert_eq!(a, a0);
        assert_eq!(b, b0);
    }

    #[test]
    fn test_strategy_names_round_trip() {
        for s in Strategy::ALL {
            assert_eq!(Strategy::from_name(s.name()), Some(s));
            assert_eq!(s.name().parse::<Strategy>(), Ok(s));
        }
        assert_eq!(
            "simd".parse::<Strategy>(),
            Err(DotError::UnknownStrategy {
                name: "simd".to_string()
            })
        );
        assert_eq!(available_variants()[0].name, "original");
        assert_eq!(available_variants().len(), Strategy::ALL.len());
    }

    #[test]
    fn test_verify_passes() {
        for (size, seed) in [(0, 1), (1023, 2), (100_000, 3)] {
            verify(size, seed).unwrap();
        }
    }
}
