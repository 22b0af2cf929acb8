use proptest::prelude::*;
use sieve_analysis::{
    get_outliers, outlier_mask, standardize, Moments, OutlierDetector, OutlierMethod, Series,
};

fn method() -> impl Strategy<Value = OutlierMethod> {
    prop_oneof![
        Just(OutlierMethod::Iqr),
        Just(OutlierMethod::ZScore),
        Just(OutlierMethod::Percentile),
    ]
}

fn values() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e3..1.0e3f64, 2..60)
}

fn not_constant(v: &[f64]) -> bool {
    v.iter().any(|&x| x != v[0])
}

proptest! {
    #[test]
    fn outliers_are_an_ordered_subsequence(v in values(), m in method(), t in 0.0..1.0f64) {
        prop_assume!(not_constant(&v));
        let s = Series::from_values(v.clone());
        let out = get_outliers(&s, m, Some(t)).unwrap();
        prop_assert!(out.labels().windows(2).all(|w| w[0] < w[1]));
        for (&label, value) in out.iter() {
            prop_assert_eq!(v[label].to_bits(), value.to_bits());
        }
    }

    #[test]
    fn every_outlier_lies_outside_the_fences(v in values(), m in prop_oneof![Just(OutlierMethod::Iqr), Just(OutlierMethod::Percentile)]) {
        let s = Series::from_values(v);
        let detector = OutlierDetector::new();
        let fences = detector.fences(&s, m, None).unwrap();
        let mask = detector.mask(&s, m, None).unwrap();
        for (&flag, &x) in mask.iter().zip(s.values()) {
            prop_assert_eq!(flag, fences.flags(x));
        }
    }

    #[test]
    fn detection_is_idempotent(v in values(), m in method()) {
        prop_assume!(not_constant(&v));
        let s = Series::from_values(v);
        prop_assert_eq!(get_outliers(&s, m, None).unwrap(), get_outliers(&s, m, None).unwrap());
    }

    #[test]
    fn mask_count_matches_detection(v in values(), m in method()) {
        prop_assume!(not_constant(&v));
        let s = Series::from_values(v);
        let mask = outlier_mask(&s, m, None).unwrap();
        prop_assert_eq!(mask.len(), s.len());
        let flagged = mask.iter().filter(|&&f| f).count();
        prop_assert_eq!(flagged, get_outliers(&s, m, None).unwrap().len());
    }

    #[test]
    fn wider_iqr_fences_flag_a_subset(v in values(), k in 0.0..3.0f64, extra in 0.0..3.0f64) {
        let s = Series::from_values(v);
        let narrow = outlier_mask(&s, OutlierMethod::Iqr, Some(k)).unwrap();
        let wide = outlier_mask(&s, OutlierMethod::Iqr, Some(k + extra)).unwrap();
        for (n, w) in narrow.iter().zip(&wide) {
            prop_assert!(!w || *n);
        }
    }

    #[test]
    fn full_percentile_flags_nothing(v in values()) {
        let s = Series::from_values(v);
        prop_assert!(get_outliers(&s, OutlierMethod::Percentile, Some(1.0)).unwrap().is_empty());
    }

    #[test]
    fn standardized_moments(v in values()) {
        let spread = v.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
            - v.iter().cloned().fold(f64::INFINITY, f64::min);
        prop_assume!(spread > 1.0);
        let z = standardize(&Series::from_values(v)).unwrap();
        let m = Moments::of(&z);
        prop_assert!(m.mean.abs() < 1e-6, "mean = {}", m.mean);
        prop_assert!((m.std_dev - 1.0).abs() < 1e-6, "std_dev = {}", m.std_dev);
    }
}
