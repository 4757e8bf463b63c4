//! Contract tests for the inspection engine
//!
//! These suites verify the externally observable rendering behavior: shape,
//! wrapping, truncation and marker output for every renderer kind.

mod inspect_tests;
mod layout_tests;
mod options_tests;
mod special_values_tests;
mod templating_tests;
