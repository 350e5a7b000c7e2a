//! System-wide constants for the BMS workspace.
//!
//! Single source of truth for the safe operating limits. Limits are not
//! configurable at runtime; they are injected into checks as immutable
//! values built from these constants.

use static_assertions::const_assert;

use crate::limits::LimitPair;

/// Battery temperature limits [°C].
pub const TEMPERATURE_LIMITS: LimitPair = LimitPair::new_unchecked(0.0, 45.0);

/// State-of-charge limits [%].
pub const SOC_LIMITS: LimitPair = LimitPair::new_unchecked(20.0, 80.0);

/// Charge rate limits [C].
pub const CHARGE_RATE_LIMITS: LimitPair = LimitPair::new_unchecked(0.0, 0.8);

/// Width of the early-warning band, as a percentage of the upper limit.
pub const WARNING_TOLERANCE_PERCENT: f64 = 5.0;

/// Number of parameters in one battery snapshot.
pub const PARAMETER_COUNT: usize = 3;

/// Verdict message when every parameter is within limits.
pub const BATTERY_OK_MESSAGE: &str = "Battery is OK";

const_assert!(TEMPERATURE_LIMITS.lower() < TEMPERATURE_LIMITS.upper());
const_assert!(SOC_LIMITS.lower() < SOC_LIMITS.upper());
const_assert!(CHARGE_RATE_LIMITS.lower() < CHARGE_RATE_LIMITS.upper());
const_assert!(WARNING_TOLERANCE_PERCENT >= 0.0);
