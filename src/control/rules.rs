//! Mamdani rule table and inference.
//!
//! Each rule ANDs (min) one error term with an optional rate term and
//! fires a crisp singleton heating output in percent.  The table is
//! fixed data; inference walks all of it on every call.

use log::trace;

use super::membership::{ErrorTerm, Fuzzified, RateTerm};

/// A single fuzzy rule: `IF error IS e [AND rate IS r] THEN output`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    pub error: ErrorTerm,
    pub rate: Option<RateTerm>,
    /// Singleton consequent, percent heating output.
    pub output: f64,
}

impl Rule {
    const fn new(error: ErrorTerm, rate: Option<RateTerm>, output: f64) -> Self {
        Self { error, rate, output }
    }

    /// Firing strength: min of the participating memberships.
    ///
    /// A NaN membership yields a NaN strength; `f64::min` alone would
    /// drop it in favour of the other operand.
    pub fn strength(&self, inputs: &Fuzzified) -> f64 {
        let e = inputs.error(self.error);
        match self.rate {
            Some(r) => {
                let r = inputs.rate(r);
                if e.is_nan() || r.is_nan() {
                    f64::NAN
                } else {
                    e.min(r)
                }
            }
            None => e,
        }
    }
}

/// Number of rules in [`RULES`].
pub const RULE_COUNT: usize = 11;

/// The heating rule base.
pub const RULES: [Rule; RULE_COUNT] = {
    use ErrorTerm as E;
    use RateTerm as R;
    [
        Rule::new(E::PositiveBig, None, 100.0),
        Rule::new(E::PositiveSmall, Some(R::Negative), 75.0),
        Rule::new(E::PositiveSmall, Some(R::Zero), 60.0),
        Rule::new(E::PositiveSmall, Some(R::Positive), 40.0),
        Rule::new(E::Zero, Some(R::Negative), 35.0),
        Rule::new(E::Zero, Some(R::Zero), 15.0),
        Rule::new(E::Zero, Some(R::Positive), 0.0),
        Rule::new(E::NegativeSmall, Some(R::Negative), 10.0),
        Rule::new(E::NegativeSmall, Some(R::Zero), 0.0),
        Rule::new(E::NegativeSmall, Some(R::Positive), 0.0),
        Rule::new(E::NegativeBig, None, 0.0),
    ]
};

/// A fired rule: how strongly it applies and what it asks for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Activation {
    pub strength: f64,
    pub output: f64,
}

/// Evaluate every rule in [`RULES`] against the fuzzified inputs.
///
/// Zero-output rules are kept: a nonzero strength still counts in the
/// defuzzifier's denominator and pulls the result toward 0.
pub fn fire(inputs: &Fuzzified) -> [Activation; RULE_COUNT] {
    fire_table(&RULES, inputs)
}

/// Evaluate an arbitrary rule table.
pub fn fire_table<const N: usize>(rules: &[Rule; N], inputs: &Fuzzified) -> [Activation; N] {
    rules.map(|rule| {
        let strength = rule.strength(inputs);
        if strength > 0.0 {
            trace!(
                "rule {:?}/{:?} -> {:.0}% at strength {:.3}",
                rule.error, rule.rate, rule.output, strength
            );
        }
        Activation {
            strength,
            output: rule.output,
        }
    })
}
