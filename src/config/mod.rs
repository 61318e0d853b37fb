//! Configuration module
//!
//! Parses, checks, validates and merges framework configuration files.

pub mod error;
pub mod loader;
pub mod schema;
pub mod source;
pub mod validate;

pub use error::{ConfigError, ErrorKind, ValidationIssue};
pub use loader::{find_config, find_config_from, load, load_file, ConfigLoader, LoadState, CONFIG_FILE_NAMES};
pub use schema::{Configuration, Content, DarkMode, Document, Important, PluginHandle};
pub use source::SourceFormat;
