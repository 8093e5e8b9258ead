//!
//! The normalized gas report representation.
//!

pub mod method_key;
pub mod method_result;
pub mod run_report;
