//! Domain Services
//!
//! Stateless operations over domain values:
//!
//! - `canonical` - injective identifier encoding
//! - `trigger_calculator` - identifier set to trigger value

pub mod canonical;
mod trigger_calculator;

pub use trigger_calculator::{compute_trigger, TriggerCalculator};
