//! windcfg - Loader and validator for utility-first CSS framework configuration
//!
//! This library provides functionality to:
//! - Parse configuration written as JSON5, TOML or a JS-style module export
//! - Check its shape and validate color literals, font stacks and content globs
//! - Merge `theme.extend` onto an explicit base theme
//! - Expand content globs into the files a stylesheet build should scan

pub mod cli;
pub mod color;
pub mod config;
pub mod content;
pub mod theme;
