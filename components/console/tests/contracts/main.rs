//! Contract tests for the console surface

mod console_tests;
