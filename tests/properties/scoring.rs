//! Property tests for the tiered quality score.

use proptest::prelude::*;

use aiml_validator::domain::entities::FindingCounts;
use aiml_validator::domain::services::quality_score;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every score lies in 0..=100.
    #[test]
    fn property_score_in_bounds(
        errors in 0usize..50,
        warnings in 0usize..50,
        suggestions in 0usize..50,
        completeness in 0u8..=100,
    ) {
        let score = quality_score(FindingCounts::new(errors, warnings, suggestions), completeness);
        prop_assert!(score <= 100);
        prop_assert!(score >= 25);
    }

    /// PROPERTY: Without errors or warnings the score stays in 90..=100 and
    /// never drops as completeness grows.
    #[test]
    fn property_excellent_zone_monotonic(
        suggestions in 0usize..20,
        a in 0u8..=100,
        b in 0u8..=100,
    ) {
        let counts = FindingCounts::new(0, 0, suggestions);
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let low_score = quality_score(counts, low);
        let high_score = quality_score(counts, high);

        prop_assert!((90..=100).contains(&low_score));
        prop_assert!((90..=100).contains(&high_score));
        prop_assert!(low_score <= high_score);
    }

    /// PROPERTY: More than three errors scores `max(25, base)` whatever the
    /// completeness.
    #[test]
    fn property_poor_zone_formula(
        errors in 4usize..30,
        warnings in 0usize..10,
        suggestions in 0usize..10,
        completeness in 0u8..=100,
    ) {
        let base = 100i64 - 30 * errors as i64 - 10 * warnings as i64 - 5 * suggestions as i64;
        let expected = base.max(25) as u8;
        let score = quality_score(FindingCounts::new(errors, warnings, suggestions), completeness);
        prop_assert_eq!(score, expected);
    }

    /// PROPERTY: In the good zone the score never drops below 50.
    #[test]
    fn property_good_zone_floor(
        errors in 0usize..=3,
        warnings in 1usize..20,
        suggestions in 0usize..20,
        completeness in 0u8..=100,
    ) {
        let score = quality_score(FindingCounts::new(errors, warnings, suggestions), completeness);
        prop_assert!(score >= 50);
    }
}
