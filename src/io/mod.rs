//! Input/output utilities for triangulation data.
//!
//! Provides the plain-text section report the driver writes after
//! triangulating.

mod report;

pub use report::{save_report, write_report, Section};
