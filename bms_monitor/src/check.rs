//! Single-parameter range check.
//!
//! A [`ParameterCheck`] holds one reading and the limit pair it must stay
//! within. Evaluation is a pure function of the construction inputs:
//!
//! - below `lower` → out of range (low)
//! - above `upper` → out of range (high)
//! - within `[lower, lower + tol]` → discharge warning
//! - within `[upper - tol, upper]` → charge-peak warning
//! - otherwise normal
//!
//! All bounds are inclusive. The discharge band is tested first, so it wins
//! when the two bands overlap.

use std::borrow::Cow;

use bms_common::limits::LimitPair;
use serde::Serialize;

/// Side of the range a reading left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Low,
    High,
}

/// Edge of the range a reading is approaching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningEdge {
    Discharge,
    ChargePeak,
}

/// Structured result of one check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    Normal,
    Warning(WarningEdge),
    OutOfRange(Direction),
}

impl CheckOutcome {
    /// Returns true unless the reading is out of range.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        !matches!(self, CheckOutcome::OutOfRange(_))
    }
}

/// Render the message for an out-of-range reading.
pub fn out_of_range_message(name: &str, direction: Direction) -> String {
    match direction {
        Direction::Low => format!("{name} is too low!"),
        Direction::High => format!("{name} is too high!"),
    }
}

/// Render the message for a reading inside a warning band.
pub fn warning_message(name: &str, edge: WarningEdge) -> String {
    match edge {
        WarningEdge::Discharge => format!("Warning: {name} approaching discharge!"),
        WarningEdge::ChargePeak => format!("Warning: {name} approaching charge-peak!"),
    }
}

/// One bounded scalar measurement.
///
/// Immutable after construction; the warning tolerance is derived once
/// from the upper limit.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterCheck {
    name: Cow<'static, str>,
    value: f64,
    limits: LimitPair,
    warning_enabled: bool,
    warning_tolerance: f64,
}

impl ParameterCheck {
    /// Create a check with warnings enabled.
    pub fn new(name: impl Into<Cow<'static, str>>, value: f64, limits: LimitPair) -> Self {
        Self {
            name: name.into(),
            value,
            limits,
            warning_enabled: true,
            warning_tolerance: limits.warning_tolerance(),
        }
    }

    /// Enable or disable warning-band evaluation.
    #[must_use]
    pub fn with_warning(mut self, enabled: bool) -> Self {
        self.warning_enabled = enabled;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn lower_limit(&self) -> f64 {
        self.limits.lower()
    }

    pub fn upper_limit(&self) -> f64 {
        self.limits.upper()
    }

    pub fn warning_enabled(&self) -> bool {
        self.warning_enabled
    }

    pub fn warning_tolerance(&self) -> f64 {
        self.warning_tolerance
    }

    /// Classify the reading.
    pub fn outcome(&self) -> CheckOutcome {
        let lower = self.limits.lower();
        let upper = self.limits.upper();

        if self.value < lower {
            return CheckOutcome::OutOfRange(Direction::Low);
        }
        if self.value > upper {
            return CheckOutcome::OutOfRange(Direction::High);
        }
        if !self.warning_enabled {
            return CheckOutcome::Normal;
        }

        // Discharge band first: it wins when the bands overlap.
        if self.value >= lower && self.value <= lower + self.warning_tolerance {
            CheckOutcome::Warning(WarningEdge::Discharge)
        } else if self.value >= upper - self.warning_tolerance && self.value <= upper {
            CheckOutcome::Warning(WarningEdge::ChargePeak)
        } else {
            CheckOutcome::Normal
        }
    }

    /// Evaluate as `(ok, message)`.
    ///
    /// `message` is the failure text when `ok` is false, the warning text
    /// when the reading is inside a warning band, and empty otherwise.
    pub fn evaluate(&self) -> (bool, String) {
        match self.outcome() {
            CheckOutcome::Normal => (true, String::new()),
            CheckOutcome::Warning(edge) => (true, warning_message(&self.name, edge)),
            CheckOutcome::OutOfRange(direction) => {
                (false, out_of_range_message(&self.name, direction))
            }
        }
    }
}
