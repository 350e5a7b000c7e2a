//! Built-in self-check scenarios.
//!
//! The monitor binary runs these when invoked without a reading. Each
//! scenario pins the verdict and the set of warned parameters.

use bms_common::limits::LimitTable;
use bms_common::parameter::Parameter;
use tracing::{debug, info};

use crate::battery::{Battery, Reading};
use crate::error::SelfCheckError;

/// One fixed reading with its expected result.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub name: &'static str,
    pub reading: Reading,
    pub expected_ok: bool,
    pub expected_message: &'static str,
    pub expected_warnings: &'static [Parameter],
}

pub const SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "nominal",
        reading: Reading::new(25.0, 70.0, 0.7),
        expected_ok: true,
        expected_message: "Battery is OK",
        expected_warnings: &[],
    },
    Scenario {
        name: "first failure wins",
        reading: Reading::new(50.0, 85.0, 0.0),
        expected_ok: false,
        expected_message: "Temperature is too high!",
        expected_warnings: &[],
    },
    Scenario {
        name: "near charge peak",
        reading: Reading::new(21.0, 78.0, 0.75),
        expected_ok: true,
        expected_message: "Battery is OK",
        expected_warnings: &[Parameter::StateOfCharge],
    },
    Scenario {
        name: "all at lower limit",
        reading: Reading::new(0.0, 20.0, 0.0),
        expected_ok: true,
        expected_message: "Battery is OK",
        expected_warnings: &[
            Parameter::Temperature,
            Parameter::StateOfCharge,
            Parameter::ChargeRate,
        ],
    },
    Scenario {
        name: "too cold",
        reading: Reading::new(-1.0, 70.0, 0.5),
        expected_ok: false,
        expected_message: "Temperature is too low!",
        expected_warnings: &[],
    },
];

/// Evaluate one scenario against its expectation.
pub fn run_scenario(scenario: &Scenario) -> Result<(), SelfCheckError> {
    let battery = Battery::with_limits(scenario.reading, &LimitTable::STANDARD).map_err(|source| {
        SelfCheckError::Construction {
            scenario: scenario.name,
            source,
        }
    })?;

    let verdict = battery.evaluate();
    if verdict.as_tuple() != (scenario.expected_ok, scenario.expected_message) {
        return Err(SelfCheckError::VerdictMismatch {
            scenario: scenario.name,
            expected_ok: scenario.expected_ok,
            expected_message: scenario.expected_message,
            actual_ok: verdict.ok,
            actual_message: verdict.message,
        });
    }

    let warned = verdict.warned_parameters();
    if warned != scenario.expected_warnings {
        return Err(SelfCheckError::WarningMismatch {
            scenario: scenario.name,
            expected: scenario.expected_warnings.to_vec(),
            actual: warned,
        });
    }

    // Idempotence: a second pass must agree.
    if battery.evaluate() != verdict {
        return Err(SelfCheckError::NotRepeatable {
            scenario: scenario.name,
        });
    }

    debug!(scenario = scenario.name, "self-check scenario passed");
    Ok(())
}

/// Run every scenario, stopping at the first mismatch.
///
/// Returns the number of scenarios that passed.
pub fn run_self_check() -> Result<usize, SelfCheckError> {
    for scenario in SCENARIOS {
        run_scenario(scenario)?;
    }
    info!(scenarios = SCENARIOS.len(), "self-check passed");
    Ok(SCENARIOS.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_scenarios_pass() {
        assert_eq!(run_self_check(), Ok(SCENARIOS.len()));
    }

    #[test]
    fn wrong_expectation_is_reported() {
        let scenario = Scenario {
            expected_message: "Battery is OK",
            expected_ok: true,
            ..SCENARIOS[1]
        };
        assert!(matches!(
            run_scenario(&scenario),
            Err(SelfCheckError::VerdictMismatch {
                actual_ok: false,
                ..
            })
        ));
    }

    #[test]
    fn missing_warning_is_reported() {
        let scenario = Scenario {
            expected_warnings: &[],
            ..SCENARIOS[2]
        };
        let err = run_scenario(&scenario).unwrap_err();
        assert_eq!(
            err,
            SelfCheckError::WarningMismatch {
                scenario: "near charge peak",
                expected: vec![],
                actual: vec![Parameter::StateOfCharge],
            }
        );
    }

    #[test]
    fn non_finite_reading_is_reported() {
        let scenario = Scenario {
            reading: Reading::new(f64::NAN, 50.0, 0.5),
            ..SCENARIOS[0]
        };
        assert!(matches!(
            run_scenario(&scenario),
            Err(SelfCheckError::Construction { .. })
        ));
    }
}
