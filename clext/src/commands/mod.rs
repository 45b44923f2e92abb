//! Command modules for the clext CLI.
//!
//! Each subcommand is implemented in its own file following the same
//! pattern: an args struct, a command struct implementing the
//! [`traits::Command`] trait, and a `run_*` entry point.

pub mod traits;
pub mod common;

pub mod tokens;
pub mod keywords;
pub mod check;
pub mod init_config;

