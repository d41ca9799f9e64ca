// crosscheck-core/src/domain/threshold.rs
//
// Pure tolerance comparison. The null semantics are deliberate: two
// absent aggregates are vacuously consistent (PASS), a single absent
// one is a discrepancy (FAIL).

use crate::domain::rule::ThresholdType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail,
}

/// Judges coerced source/target values against a tolerance policy.
///
/// Checked in order:
/// 1. both null -> PASS, exactly one null -> FAIL
/// 2. EXACT / ABSOLUTE: |target - source| <= threshold
/// 3. PERCENTAGE: source 0 passes only against target 0,
///    otherwise |target - source| / |source| <= threshold
pub fn evaluate(
    source: Option<f64>,
    target: Option<f64>,
    threshold_type: ThresholdType,
    threshold_value: f64,
) -> Verdict {
    let (source, target) = match (source, target) {
        (None, None) => return Verdict::Pass,
        (Some(s), Some(t)) => (s, t),
        _ => return Verdict::Fail,
    };

    let within = |limit: f64| (target - source).abs() <= limit;

    match threshold_type {
        ThresholdType::Exact | ThresholdType::Absolute => {
            if within(threshold_value) {
                Verdict::Pass
            } else {
                Verdict::Fail
            }
        }
        ThresholdType::Percentage => {
            if source == 0.0 {
                // No ratio against a zero baseline
                return if target == 0.0 {
                    Verdict::Pass
                } else {
                    Verdict::Fail
                };
            }
            if (target - source).abs() / source.abs() <= threshold_value {
                Verdict::Pass
            } else {
                Verdict::Fail
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_null_pass() {
        assert_eq!(
            evaluate(None, None, ThresholdType::Exact, 0.0),
            Verdict::Pass
        );
    }

    #[test]
    fn test_single_null_fail() {
        assert_eq!(
            evaluate(Some(5.0), None, ThresholdType::Exact, 0.0),
            Verdict::Fail
        );
        assert_eq!(
            evaluate(None, Some(5.0), ThresholdType::Exact, 0.0),
            Verdict::Fail
        );
    }

    #[test]
    fn test_exact_zero_tolerance() {
        assert_eq!(
            evaluate(Some(10.0), Some(10.0), ThresholdType::Exact, 0.0),
            Verdict::Pass
        );
        assert_eq!(
            evaluate(Some(10.0), Some(10.5), ThresholdType::Exact, 0.0),
            Verdict::Fail
        );
    }

    #[test]
    fn test_percentage_boundary_inclusive() {
        // 1% difference, exactly at the limit
        assert_eq!(
            evaluate(Some(100.0), Some(101.0), ThresholdType::Percentage, 0.01),
            Verdict::Pass
        );
        assert_eq!(
            evaluate(Some(100.0), Some(102.0), ThresholdType::Percentage, 0.01),
            Verdict::Fail
        );
    }

    #[test]
    fn test_percentage_zero_source() {
        assert_eq!(
            evaluate(Some(0.0), Some(0.0), ThresholdType::Percentage, 0.01),
            Verdict::Pass
        );
        assert_eq!(
            evaluate(Some(0.0), Some(1.0), ThresholdType::Percentage, 0.01),
            Verdict::Fail
        );
    }

    #[test]
    fn test_percentage_negative_source_uses_magnitude() {
        assert_eq!(
            evaluate(Some(-100.0), Some(-101.0), ThresholdType::Percentage, 0.01),
            Verdict::Pass
        );
    }

    #[test]
    fn test_absolute_boundary_inclusive() {
        assert_eq!(
            evaluate(Some(10.0), Some(14.0), ThresholdType::Absolute, 5.0),
            Verdict::Pass
        );
        assert_eq!(
            evaluate(Some(10.0), Some(16.0), ThresholdType::Absolute, 5.0),
            Verdict::Fail
        );
    }
}
