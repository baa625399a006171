//! Core building blocks for cargo-skiff workflows
//!
//! - **context**: explicit workspace context (root dir + command runner)
//! - **error**: categorized error types with exit codes and help messages
//! - **exec**: external command abstraction (system runner, recording fake)

pub mod context;
pub mod error;
pub mod exec;
