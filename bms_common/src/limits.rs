//! Limit pair and limit table types.
//!
//! A [`LimitPair`] is an inclusive `[lower, upper]` range for one
//! parameter. A [`LimitTable`] holds one pair per [`Parameter`] and is
//! handed to the battery aggregator at construction.

use thiserror::Error;

use crate::consts::{
    CHARGE_RATE_LIMITS, SOC_LIMITS, TEMPERATURE_LIMITS, WARNING_TOLERANCE_PERCENT,
};
use crate::parameter::Parameter;

/// Error returned when a limit pair cannot describe a valid range.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LimitError {
    /// A bound is NaN or infinite.
    #[error("limit bounds must be finite (lower={lower}, upper={upper})")]
    NonFinite { lower: f64, upper: f64 },

    /// `lower` is not strictly below `upper`.
    #[error("lower limit {lower} must be below upper limit {upper}")]
    Inverted { lower: f64, upper: f64 },
}

/// Inclusive `[lower, upper]` operating range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LimitPair {
    lower: f64,
    upper: f64,
}

impl LimitPair {
    /// Build a limit pair, rejecting non-finite or inverted bounds.
    pub fn new(lower: f64, upper: f64) -> Result<Self, LimitError> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(LimitError::NonFinite { lower, upper });
        }
        if lower >= upper {
            return Err(LimitError::Inverted { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    /// Build a limit pair without validation.
    ///
    /// Only for constants; the ordering of every constant pair is asserted
    /// at compile time in [`crate::consts`].
    pub const fn new_unchecked(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    #[inline]
    pub const fn lower(&self) -> f64 {
        self.lower
    }

    #[inline]
    pub const fn upper(&self) -> f64 {
        self.upper
    }

    /// Returns true if `value` lies within the range, bounds included.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Width of the early-warning band at either edge of the range.
    ///
    /// Derived from the upper limit and never negative.
    #[inline]
    pub fn warning_tolerance(&self) -> f64 {
        (self.upper * WARNING_TOLERANCE_PERCENT / 100.0).abs()
    }
}

/// One limit pair per monitored parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LimitTable {
    pub temperature: LimitPair,
    pub state_of_charge: LimitPair,
    pub charge_rate: LimitPair,
}

impl LimitTable {
    /// The fixed safe operating envelope.
    pub const STANDARD: Self = Self {
        temperature: TEMPERATURE_LIMITS,
        state_of_charge: SOC_LIMITS,
        charge_rate: CHARGE_RATE_LIMITS,
    };

    /// Limit pair for `parameter`.
    #[inline]
    pub const fn get(&self, parameter: Parameter) -> LimitPair {
        match parameter {
            Parameter::Temperature => self.temperature,
            Parameter::StateOfCharge => self.state_of_charge,
            Parameter::ChargeRate => self.charge_rate,
        }
    }
}

impl Default for LimitTable {
    fn default() -> Self {
        Self::STANDARD
    }
}
