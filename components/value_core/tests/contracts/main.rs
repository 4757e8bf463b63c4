//! Contract tests for the value model

mod value_tests;
