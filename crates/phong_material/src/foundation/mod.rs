//! Foundation module - Core utilities and types
//!
//! - Math types for colors and texture transforms
//! - Logging utilities

pub mod math;
pub mod logging;
