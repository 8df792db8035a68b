//! Shared helpers for integration tests.

pub mod test_data;
