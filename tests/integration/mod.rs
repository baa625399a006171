//! Integration tests for the cargo-skiff binary

mod helpers;

mod test_release;
mod test_summary;
mod test_version;
