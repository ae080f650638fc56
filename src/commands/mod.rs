//! CLI subcommand handlers.

pub mod config;
pub mod export;
pub mod info;
pub mod play;
pub mod trim;
