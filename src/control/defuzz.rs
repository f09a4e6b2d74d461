//! Singleton defuzzification (weighted average of rule outputs).

use super::rules::Activation;

/// Lower bound of the heating output, percent.
pub const OUTPUT_MIN: f64 = 0.0;
/// Upper bound of the heating output, percent.
pub const OUTPUT_MAX: f64 = 100.0;

/// `Σ(strength·output) / Σ(strength)`, clamped to `[0, 100]`.
///
/// Returns 0 when no rule fires at all.  NaN strengths produce a NaN
/// result (`clamp` passes NaN through).
pub fn weighted_average(activations: &[Activation]) -> f64 {
    let (weighted, total) = activations
        .iter()
        .fold((0.0, 0.0), |(w, t), a| (w + a.strength * a.output, t + a.strength));

    if total == 0.0 {
        return 0.0;
    }
    (weighted / total).clamp(OUTPUT_MIN, OUTPUT_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn act(strength: f64, output: f64) -> Activation {
        Activation { strength, output }
    }

    #[test]
    fn single_rule_returns_its_output() {
        assert_eq!(weighted_average(&[act(0.3, 60.0), act(0.0, 100.0)]), 60.0);
    }

    #[test]
    fn zero_output_rules_pull_toward_zero() {
        let with_zero = weighted_average(&[act(0.5, 40.0), act(0.5, 0.0)]);
        assert_eq!(with_zero, 20.0);
    }

    #[test]
    fn no_strength_falls_back_to_zero() {
        assert_eq!(weighted_average(&[act(0.0, 100.0), act(0.0, 75.0)]), 0.0);
        assert_eq!(weighted_average(&[]), 0.0);
    }

    #[test]
    fn result_is_clamped() {
        assert_eq!(weighted_average(&[act(1.0, 150.0)]), OUTPUT_MAX);
        assert_eq!(weighted_average(&[act(1.0, -5.0)]), OUTPUT_MIN);
    }

    #[test]
    fn nan_strength_is_not_swallowed() {
        assert!(weighted_average(&[act(f64::NAN, 50.0)]).is_nan());
    }
}
