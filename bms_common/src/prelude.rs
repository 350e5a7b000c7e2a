//! Prelude module for common re-exports.
//!
//! ```rust
//! use bms_common::prelude::*;
//! ```

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::config::{ConfigError, ConfigLoader, LogLevel, MonitorConfig, OutputFormat};

// ─── Limits ─────────────────────────────────────────────────────────
pub use crate::consts::{BATTERY_OK_MESSAGE, PARAMETER_COUNT};
pub use crate::limits::{LimitError, LimitPair, LimitTable};
pub use crate::parameter::Parameter;
