//! revmark CLI library
//!
//! This library provides the command-line interface for reconciling change
//! records against revised documents and rendering the highlighted result.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
