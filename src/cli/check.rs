//! Check command implementation

use std::path::Path;
use std::process::ExitCode;

use crate::config::SourceFormat;

use super::{load_for_command, EXIT_SUCCESS};

/// Execute the check command
pub fn run_check(path: Option<&Path>, format: Option<SourceFormat>) -> ExitCode {
    let (path, config) = match load_for_command(path, format) {
        Ok(loaded) => loaded,
        Err(code) => return code,
    };

    println!(
        "ok: {} ({} colors, {} font families, {} content patterns, {} plugins)",
        path.display(),
        config.theme.colors.len(),
        config.theme.font_family.len(),
        config.content.files.len(),
        config.plugins.len()
    );
    if config.content.files.is_empty() {
        tracing::warn!("content is empty; no files will be scanned for classes");
    }
    ExitCode::from(EXIT_SUCCESS)
}
