//! # BMS Monitor Library
//!
//! Stateless validation of one battery telemetry snapshot against the
//! fixed safe operating envelope.
//!
//! ## Evaluation Levels
//!
//! 1. **ParameterCheck** — one reading against one limit pair, with an
//!    early-warning band near either limit
//! 2. **Battery** — temperature, state of charge and charge rate scanned in
//!    that order, stopping at the first out-of-range reading
//!
//! [`battery::Battery::evaluate`] is pure and returns warnings as data.
//! [`battery::Battery::is_battery_ok`] additionally prints them.
//!
//! ```rust
//! use bms_monitor::battery::Battery;
//!
//! let battery = Battery::new(25.0, 70.0, 0.7).unwrap();
//! assert_eq!(battery.evaluate().as_tuple(), (true, "Battery is OK"));
//! ```

pub mod battery;
pub mod check;
pub mod error;
pub mod report;
pub mod selfcheck;
