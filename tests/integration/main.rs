//! Integration tests

mod config_test;
mod estimate_test;
mod extract_test;
