//! Unit test suite entry point.

mod config_tests;
mod extract_tests;
mod site_tests;
