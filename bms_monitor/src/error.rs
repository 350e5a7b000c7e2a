//! Error types for the battery monitor.
//!
//! Out-of-range readings are not errors: they are verdicts. The types here
//! cover inputs that cannot be evaluated at all and self-check mismatches.

use bms_common::parameter::Parameter;
use thiserror::Error;

/// A reading that cannot be turned into a battery snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum BatteryError {
    /// NaN or infinite reading. Comparisons against limits are meaningless.
    #[error("{parameter} reading must be finite, got {value}")]
    NonFiniteReading { parameter: Parameter, value: f64 },
}

/// A self-check scenario that did not produce its expected result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelfCheckError {
    #[error("scenario '{scenario}': {source}")]
    Construction {
        scenario: &'static str,
        #[source]
        source: BatteryError,
    },

    #[error(
        "scenario '{scenario}': expected ({expected_ok}, {expected_message:?}), \
         got ({actual_ok}, {actual_message:?})"
    )]
    VerdictMismatch {
        scenario: &'static str,
        expected_ok: bool,
        expected_message: &'static str,
        actual_ok: bool,
        actual_message: String,
    },

    #[error("scenario '{scenario}': expected warnings {expected:?}, got {actual:?}")]
    WarningMismatch {
        scenario: &'static str,
        expected: Vec<Parameter>,
        actual: Vec<Parameter>,
    },

    #[error("scenario '{scenario}': repeated evaluation changed the verdict")]
    NotRepeatable { scenario: &'static str },
}
