//! Property-based tests for quantum generation and table rendering.

use proptest::prelude::*;

use libquanta::{generate_with, render, QuantaError, RateMode};

proptest! {
    // 1. Length always equals the level count
    #[test]
    fn length_matches_levels(
        levels in 1usize..40,
        start in 1u32..1000,
        rate in 0.5f64..2.0,
    ) {
        let seq = generate_with(levels, start as f64, RateMode::Fixed(rate)).unwrap();
        prop_assert_eq!(seq.len(), levels);
    }

    // 2. Non-decreasing for rate >= 1
    #[test]
    fn non_decreasing_when_growing(
        levels in 1usize..48,
        start in 1u32..1000,
        rate in 1.0f64..1.8,
    ) {
        let seq = generate_with(levels, start as f64, RateMode::Fixed(rate)).unwrap();
        for pair in seq.values().windows(2) {
            prop_assert!(pair[0] <= pair[1], "values={:?} rate={rate}", seq.values());
        }
    }

    // 3. Target-max: last raw value hits the target, rounded value within 0.5
    #[test]
    fn target_max_hits_target(
        levels in 2usize..32,
        start in 1u32..100,
        factor in 1.0f64..50.0,
    ) {
        let target = start as f64 * factor;
        let seq = generate_with(levels, start as f64, RateMode::TargetMax(target)).unwrap();
        let raw = seq.raw_values();
        let last_raw = raw[levels - 1];
        prop_assert!((last_raw - target).abs() < 1e-6 * target, "raw={last_raw} target={target}");
        let last = seq.last().unwrap() as f64;
        prop_assert!((last - target).abs() <= 0.5 + 1e-6 * target);
    }

    // 4. Rendering is a pure function and declares the true element count
    #[test]
    fn render_deterministic(
        values in proptest::collection::vec(0u64..100_000, 0..40),
        width in 1usize..12,
    ) {
        let a = render(&values, width);
        let b = render(&values, width);
        prop_assert_eq!(&a, &b);
        let header = format!("[{}] = {{", values.len());
        prop_assert!(a.lines().next().unwrap().contains(&header));
    }

    // 5. Rendered values read back in order, no trailing comma on the last row
    #[test]
    fn render_preserves_values(
        values in proptest::collection::vec(0u64..100_000, 1..40),
        width in 1usize..12,
    ) {
        let text = render(&values, width);
        let body: Vec<&str> = text.lines().skip(1).take_while(|l| *l != "};").collect();
        prop_assert_eq!(body.len(), values.len().div_ceil(width));
        prop_assert!(!body.last().unwrap().ends_with(','));
        let parsed: Vec<u64> = body
            .iter()
            .flat_map(|l| l.split(','))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| s.parse().unwrap())
            .collect();
        prop_assert_eq!(parsed, values);
    }

    // 6. Non-positive start quanta are always rejected
    #[test]
    fn non_positive_start_rejected(levels in 1usize..16, start in -1000.0f64..=0.0) {
        let err = generate_with(levels, start, RateMode::Default).unwrap_err();
        let is_start_error = matches!(err, QuantaError::InvalidParameter { name: "start_quantum", .. });
        prop_assert!(is_start_error);
    }
}

#[test]
fn single_level_target_max_is_an_error_not_a_panic() {
    let result = generate_with(1, 10.0, RateMode::TargetMax(10.0));
    assert!(matches!(result, Err(QuantaError::InvalidParameter { .. })));
}
