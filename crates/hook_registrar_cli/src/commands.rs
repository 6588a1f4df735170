//! Command modules for the hook-registrar CLI.
//!
//! This module contains the command implementations for the CLI application:
//!
//! - `register_cmd`: Register or update the Jenkins webhook on a repository

pub mod register_cmd;
