//! Fuzzification: crisp error / rate values → membership degrees.
//!
//! Two linguistic variables are partitioned into fixed terms:
//!
//! ```text
//!  Error (°C)   NB ────╲   ╱╲    ╱╲    ╱╲   ╱──── PB
//!                       ╲ ╱  ╲  ╱  ╲  ╱  ╲ ╱
//!                  NS    ╳  Z ╲╱    ╲╱ PS ╳
//!              -2.3   -1.2    0    1.2   2.3
//!
//!  Rate (°C/min)  Neg ──╲  ╱╲  ╱── Pos
//!                        ╲╱  ╲╱
//!                   -1.0   0   1.0
//! ```
//!
//! Adjacent terms share breakpoints: at a term's peak the neighbours
//! evaluate to exactly 0.  The shape functions compare against the
//! boundaries before dividing, so this holds bit-for-bit.

// ───────────────────────────────────────────────────────────────
// Shape functions
// ───────────────────────────────────────────────────────────────

/// Triangle rising on `(left, peak]` and falling on `(peak, right)`.
pub fn triangle(value: f64, left: f64, peak: f64, right: f64) -> f64 {
    if value <= left || value >= right {
        0.0
    } else if value <= peak {
        (value - left) / (peak - left)
    } else {
        (right - value) / (right - peak)
    }
}

/// Open-left shoulder: 1 at or below `min`, 0 at or above `peak`.
pub fn shoulder_low(value: f64, min: f64, peak: f64) -> f64 {
    if value <= min {
        1.0
    } else if value >= peak {
        0.0
    } else {
        (peak - value) / (peak - min)
    }
}

/// Open-right shoulder: 0 at or below `peak`, 1 at or above `max`.
pub fn shoulder_high(value: f64, peak: f64, max: f64) -> f64 {
    if value <= peak {
        0.0
    } else if value >= max {
        1.0
    } else {
        (value - peak) / (max - peak)
    }
}

/// A term's membership function, parameterised in the variable's unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MembershipShape {
    ShoulderLow { min: f64, peak: f64 },
    Triangle { left: f64, peak: f64, right: f64 },
    ShoulderHigh { peak: f64, max: f64 },
}

impl MembershipShape {
    /// Degree of membership of `value`, in `[0, 1]` for finite input.
    pub fn degree(&self, value: f64) -> f64 {
        match *self {
            Self::ShoulderLow { min, peak } => shoulder_low(value, min, peak),
            Self::Triangle { left, peak, right } => triangle(value, left, peak, right),
            Self::ShoulderHigh { peak, max } => shoulder_high(value, peak, max),
        }
    }

    /// The value at which this shape first reaches full membership.
    pub fn peak(&self) -> f64 {
        match *self {
            Self::ShoulderLow { min, .. } => min,
            Self::Triangle { peak, .. } => peak,
            Self::ShoulderHigh { max, .. } => max,
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Linguistic terms
// ───────────────────────────────────────────────────────────────

/// Terms of the `Error` variable (target − measured, °C).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorTerm {
    NegativeBig,
    NegativeSmall,
    Zero,
    PositiveSmall,
    PositiveBig,
}

impl ErrorTerm {
    /// All terms, ordered from most negative to most positive.
    pub const ALL: [Self; 5] = [
        Self::NegativeBig,
        Self::NegativeSmall,
        Self::Zero,
        Self::PositiveSmall,
        Self::PositiveBig,
    ];

    pub const fn shape(self) -> MembershipShape {
        match self {
            Self::NegativeBig => MembershipShape::ShoulderLow { min: -2.3, peak: -1.2 },
            Self::NegativeSmall => MembershipShape::Triangle { left: -2.3, peak: -1.2, right: 0.0 },
            Self::Zero => MembershipShape::Triangle { left: -1.2, peak: 0.0, right: 1.2 },
            Self::PositiveSmall => MembershipShape::Triangle { left: 0.0, peak: 1.2, right: 2.3 },
            Self::PositiveBig => MembershipShape::ShoulderHigh { peak: 1.2, max: 2.3 },
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// Terms of the `RateOfChange` variable (°C/min).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RateTerm {
    Negative,
    Zero,
    Positive,
}

impl RateTerm {
    pub const ALL: [Self; 3] = [Self::Negative, Self::Zero, Self::Positive];

    pub const fn shape(self) -> MembershipShape {
        match self {
            Self::Negative => MembershipShape::ShoulderLow { min: -1.0, peak: 0.0 },
            Self::Zero => MembershipShape::Triangle { left: -1.0, peak: 0.0, right: 1.0 },
            Self::Positive => MembershipShape::ShoulderHigh { peak: 0.0, max: 1.0 },
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

// ───────────────────────────────────────────────────────────────
// Fuzzified inputs
// ───────────────────────────────────────────────────────────────

/// Membership degrees of one (error, rate) pair in every term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fuzzified {
    error: [f64; 5],
    rate: [f64; 3],
}

impl Fuzzified {
    /// Fuzzify a crisp error (°C) and rate (°C/min).
    pub fn new(error: f64, rate: f64) -> Self {
        Self {
            error: ErrorTerm::ALL.map(|t| t.shape().degree(error)),
            rate: RateTerm::ALL.map(|t| t.shape().degree(rate)),
        }
    }

    pub fn error(&self, term: ErrorTerm) -> f64 {
        self.error[term.index()]
    }

    pub fn rate(&self, term: RateTerm) -> f64 {
        self.rate[term.index()]
    }

    /// Error-term degrees in [`ErrorTerm::ALL`] order.
    pub fn error_degrees(&self) -> &[f64; 5] {
        &self.error
    }

    /// Rate-term degrees in [`RateTerm::ALL`] order.
    pub fn rate_degrees(&self) -> &[f64; 3] {
        &self.rate
    }
}
