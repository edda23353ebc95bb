//! Configuration management for relnotes.
//!
//! This crate handles loading and validating the optional `relnotes.toml`
//! configuration file.

mod error;
mod loader;
mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::{
    CONFIG_FILE_NAME, find_and_load_config, find_and_load_config_from, load_config,
};
pub use schema::{Config, GithubConfig, MAX_PAGE_SIZE, NotesConfig, OutputFormat};
