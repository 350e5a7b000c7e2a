//! The three monitored battery parameters.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::PARAMETER_COUNT;

/// One range-bounded battery reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    Temperature,
    StateOfCharge,
    ChargeRate,
}

impl Parameter {
    /// Scan order. The first failing parameter in this order is reported.
    pub const ORDER: [Parameter; PARAMETER_COUNT] = [
        Parameter::Temperature,
        Parameter::StateOfCharge,
        Parameter::ChargeRate,
    ];

    /// Human-readable label used in verdict and warning messages.
    pub const fn label(&self) -> &'static str {
        match self {
            Parameter::Temperature => "Temperature",
            Parameter::StateOfCharge => "State of Charge",
            Parameter::ChargeRate => "Charge Rate",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_is_temperature_soc_charge_rate() {
        assert_eq!(
            Parameter::ORDER,
            [
                Parameter::Temperature,
                Parameter::StateOfCharge,
                Parameter::ChargeRate
            ]
        );
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(Parameter::Temperature.to_string(), "Temperature");
        assert_eq!(Parameter::StateOfCharge.to_string(), "State of Charge");
        assert_eq!(Parameter::ChargeRate.to_string(), "Charge Rate");
    }

    #[test]
    fn serde_uses_snake_case() {
        #[derive(Debug, Serialize, Deserialize, PartialEq)]
        struct Wrapper {
            parameter: Parameter,
        }

        let text = toml::to_string(&Wrapper {
            parameter: Parameter::StateOfCharge,
        })
        .unwrap();
        assert!(text.contains("state_of_charge"));

        let parsed: Wrapper = toml::from_str("parameter = \"charge_rate\"").unwrap();
        assert_eq!(parsed.parameter, Parameter::ChargeRate);
    }
}
