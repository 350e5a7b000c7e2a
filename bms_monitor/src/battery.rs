//! Battery snapshot aggregation.
//!
//! A [`Battery`] owns one [`ParameterCheck`] per [`Parameter`] and reduces
//! them to a single [`Verdict`]. The scan follows [`Parameter::ORDER`] and
//! stops at the first out-of-range reading. Warnings found along the way
//! never change the verdict.
//!
//! ```text
//! START → temperature → state_of_charge → charge_rate → OK
//!              │               │                │
//!              └───────────────┴────────────────┴──→ FAILED
//! ```

use std::io::{self, Write};

use bms_common::consts::{BATTERY_OK_MESSAGE, PARAMETER_COUNT};
use bms_common::limits::LimitTable;
use bms_common::parameter::Parameter;
use serde::{Deserialize, Serialize};
use static_assertions::assert_impl_all;

use crate::check::{out_of_range_message, CheckOutcome, ParameterCheck, WarningEdge};
use crate::error::BatteryError;
use crate::report;

/// Three simultaneous raw readings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Cell temperature [°C].
    pub temperature: f64,
    /// State of charge [%].
    pub state_of_charge: f64,
    /// Charge rate [C].
    pub charge_rate: f64,
}

impl Reading {
    pub const fn new(temperature: f64, state_of_charge: f64, charge_rate: f64) -> Self {
        Self {
            temperature,
            state_of_charge,
            charge_rate,
        }
    }

    #[inline]
    pub const fn get(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::Temperature => self.temperature,
            Parameter::StateOfCharge => self.state_of_charge,
            Parameter::ChargeRate => self.charge_rate,
        }
    }
}

/// A non-fatal early warning raised during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    pub parameter: Parameter,
    pub edge: WarningEdge,
    pub message: String,
}

/// At most one warning per parameter.
pub type Warnings = heapless::Vec<Warning, PARAMETER_COUNT>;

/// Final result of evaluating one battery snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    pub ok: bool,
    /// Failure message of the first out-of-range parameter, or
    /// [`BATTERY_OK_MESSAGE`].
    pub message: String,
    /// Parameter that ended the scan, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed: Option<Parameter>,
    /// Warnings in discovery order.
    pub warnings: Warnings,
}

impl Verdict {
    fn healthy(warnings: Warnings) -> Self {
        Self {
            ok: true,
            message: BATTERY_OK_MESSAGE.to_string(),
            failed: None,
            warnings,
        }
    }

    fn failure(parameter: Parameter, message: String, warnings: Warnings) -> Self {
        Self {
            ok: false,
            message,
            failed: Some(parameter),
            warnings,
        }
    }

    /// Borrowed `(ok, message)` view.
    pub fn as_tuple(&self) -> (bool, &str) {
        (self.ok, &self.message)
    }

    pub fn into_tuple(self) -> (bool, String) {
        (self.ok, self.message)
    }

    /// Parameters that raised a warning, in discovery order.
    pub fn warned_parameters(&self) -> Vec<Parameter> {
        self.warnings.iter().map(|w| w.parameter).collect()
    }
}

/// One snapshot of temperature, state of charge and charge rate.
///
/// Checks are built once at construction and never mutated, so repeated
/// evaluation yields identical verdicts.
#[derive(Debug, Clone, PartialEq)]
pub struct Battery {
    checks: [ParameterCheck; PARAMETER_COUNT],
}

assert_impl_all!(Battery: Send, Sync);
assert_impl_all!(Verdict: Send, Sync);

impl Battery {
    /// Build a snapshot against the standard operating envelope.
    pub fn new(
        temperature: f64,
        state_of_charge: f64,
        charge_rate: f64,
    ) -> Result<Self, BatteryError> {
        Self::with_limits(
            Reading::new(temperature, state_of_charge, charge_rate),
            &LimitTable::STANDARD,
        )
    }

    /// Build a snapshot against an explicit limit table.
    pub fn with_limits(reading: Reading, limits: &LimitTable) -> Result<Self, BatteryError> {
        for parameter in Parameter::ORDER {
            let value = reading.get(parameter);
            if !value.is_finite() {
                return Err(BatteryError::NonFiniteReading { parameter, value });
            }
        }

        let checks = Parameter::ORDER
            .map(|p| ParameterCheck::new(p.label(), reading.get(p), limits.get(p)));
        Ok(Self { checks })
    }

    /// Enable or disable warning bands on every parameter.
    #[must_use]
    pub fn with_warnings(self, enabled: bool) -> Self {
        Self {
            checks: self.checks.map(|c| c.with_warning(enabled)),
        }
    }

    /// Check for `parameter`.
    pub fn check(&self, parameter: Parameter) -> &ParameterCheck {
        &self.checks[parameter as usize]
    }

    /// Compute the verdict without any output.
    pub fn evaluate(&self) -> Verdict {
        let mut warnings = Warnings::new();

        for (parameter, check) in Parameter::ORDER.into_iter().zip(&self.checks) {
            match check.outcome() {
                CheckOutcome::OutOfRange(direction) => {
                    let message = out_of_range_message(check.name(), direction);
                    return Verdict::failure(parameter, message, warnings);
                }
                CheckOutcome::Warning(edge) => {
                    let (_, message) = check.evaluate();
                    // One warning per parameter, so capacity is never exceeded.
                    let _ = warnings.push(Warning {
                        parameter,
                        edge,
                        message,
                    });
                }
                CheckOutcome::Normal => {}
            }
        }

        Verdict::healthy(warnings)
    }

    /// Evaluate and print warnings to stdout.
    pub fn is_battery_ok(&self) -> (bool, String) {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.is_battery_ok_to(&mut out)
    }

    /// Evaluate and print warnings to `out`.
    ///
    /// A failing writer is logged and does not affect the verdict.
    pub fn is_battery_ok_to<W: Write>(&self, out: &mut W) -> (bool, String) {
        let verdict = self.evaluate();
        if let Err(e) = report::write_warnings(&verdict, out) {
            tracing::warn!(error = %e, "failed to write battery warnings");
        }
        report::trace_verdict(&verdict);
        verdict.into_tuple()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn battery(t: f64, soc: f64, rate: f64) -> Battery {
        Battery::new(t, soc, rate).unwrap()
    }

    #[test]
    fn nominal_reading_is_ok_without_warnings() {
        let verdict = battery(25.0, 70.0, 0.7).evaluate();
        assert_eq!(verdict.as_tuple(), (true, "Battery is OK"));
        assert!(verdict.warnings.is_empty());
        assert_eq!(verdict.failed, None);
    }

    #[test]
    fn first_failing_parameter_wins() {
        let verdict = battery(50.0, 85.0, 0.0).evaluate();
        assert_eq!(verdict.as_tuple(), (false, "Temperature is too high!"));
        assert_eq!(verdict.failed, Some(Parameter::Temperature));
    }

    #[test]
    fn later_parameters_are_not_scanned_after_failure() {
        // Charge rate sits in its discharge band but is never reached.
        let verdict = battery(25.0, 10.0, 0.0).evaluate();
        assert_eq!(verdict.as_tuple(), (false, "State of Charge is too low!"));
        assert!(verdict.warnings.is_empty());
    }

    #[test]
    fn warnings_before_failure_are_kept() {
        let verdict = battery(1.0, 50.0, 0.9).evaluate();
        assert_eq!(verdict.as_tuple(), (false, "Charge Rate is too high!"));
        assert_eq!(verdict.warned_parameters(), vec![Parameter::Temperature]);
    }

    #[test]
    fn discharge_warnings_on_every_lower_limit() {
        let verdict = battery(0.0, 20.0, 0.0).evaluate();
        assert!(verdict.ok);
        assert_eq!(verdict.warnings.len(), 3);
        assert!(verdict
            .warnings
            .iter()
            .all(|w| w.edge == WarningEdge::Discharge));
        assert_eq!(
            verdict.warnings[1].message,
            "Warning: State of Charge approaching discharge!"
        );
    }

    #[test]
    fn disabled_warnings_produce_none() {
        let verdict = battery(0.0, 20.0, 0.0).with_warnings(false).evaluate();
        assert_eq!(verdict.as_tuple(), (true, "Battery is OK"));
        assert!(verdict.warnings.is_empty());
    }

    #[test]
    fn check_lookup_matches_parameter() {
        let b = battery(25.0, 70.0, 0.7);
        assert_eq!(b.check(Parameter::Temperature).value(), 25.0);
        assert_eq!(b.check(Parameter::StateOfCharge).name(), "State of Charge");
        assert_eq!(b.check(Parameter::ChargeRate).upper_limit(), 0.8);
    }

    #[test]
    fn non_finite_reading_is_rejected() {
        let err = Battery::new(25.0, f64::NAN, 0.5).unwrap_err();
        assert!(matches!(
            err,
            BatteryError::NonFiniteReading {
                parameter: Parameter::StateOfCharge,
                ..
            }
        ));
        assert!(Battery::new(f64::INFINITY, 50.0, 0.5).is_err());
    }

    #[test]
    fn injected_limits_are_used() {
        let mut table = LimitTable::STANDARD;
        table.temperature = bms_common::limits::LimitPair::new(-20.0, 60.0).unwrap();
        let b = Battery::with_limits(Reading::new(50.0, 50.0, 0.5), &table).unwrap();
        assert_eq!(b.evaluate().as_tuple(), (true, "Battery is OK"));
    }

    #[test]
    fn printing_wrapper_writes_warnings_only() {
        let mut out = Vec::new();
        let result = battery(21.0, 78.0, 0.75).is_battery_ok_to(&mut out);
        assert_eq!(result, (true, "Battery is OK".to_string()));
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Warning: State of Charge approaching charge-peak!\n");
    }

    #[test]
    fn repeated_evaluation_is_identical() {
        let b = battery(44.0, 21.0, 0.1);
        assert_eq!(b.evaluate(), b.evaluate());
        let mut sink = io::sink();
        assert_eq!(b.is_battery_ok_to(&mut sink), b.is_battery_ok_to(&mut sink));
    }
}
