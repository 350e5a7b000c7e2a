//! BMS Common Library
//!
//! This crate provides the fixed safe operating limits, parameter
//! identities and configuration loading utilities shared by all BMS
//! workspace crates.
//!
//! # Module Structure
//!
//! - [`consts`] - Fixed limit pairs and warning tolerance
//! - [`limits`] - Limit pair and limit table types
//! - [`parameter`] - The three monitored battery parameters
//! - [`config`] - Configuration loading traits and types
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! ```rust
//! use bms_common::prelude::*;
//!
//! let soc = LimitTable::STANDARD.get(Parameter::StateOfCharge);
//! assert!(soc.contains(50.0));
//! ```

pub mod config;
pub mod consts;
pub mod limits;
pub mod parameter;
pub mod prelude;
