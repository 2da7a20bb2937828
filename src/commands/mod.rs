//! CLI subcommand handlers for the qterm binary

pub mod config;
pub mod exec;
pub mod grammar;
