//! tomesplit CLI library
//!
//! This library provides the command-line interface for splitting long
//! plain-text documents into books and chapters.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use commands::Cli;
pub use error::{CliError, CliResult};
