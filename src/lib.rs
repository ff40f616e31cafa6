//! precheck library.
//!
//! Fail-fast pre-commit gate: runs `cargo fmt -- --check` and then
//! `cargo clippy --locked -- -D warnings`, stopping at the first failure.

pub mod cli;
pub mod config;
pub mod error;
pub mod runner;

pub use error::Error;
