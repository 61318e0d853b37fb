//! Files command implementation

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::config::SourceFormat;
use crate::content::ContentPatterns;

use super::{load_for_command, EXIT_ERROR, EXIT_SUCCESS};

/// Execute the files command
pub fn run_files(path: Option<&Path>, format: Option<SourceFormat>, root: Option<&Path>) -> ExitCode {
    let (config_path, config) = match load_for_command(path, format) {
        Ok(loaded) => loaded,
        Err(code) => return code,
    };

    let root = match root {
        Some(r) => r.to_path_buf(),
        None if config.content.relative => {
            config_path.parent().map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("."))
        }
        None => PathBuf::from("."),
    };

    // Syntax was already checked during load
    let patterns = match ContentPatterns::compile(config.content_patterns()) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let expansion = match patterns.expand(&root) {
        Ok(expansion) => expansion,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    for pattern in &expansion.unmatched {
        tracing::warn!(pattern = %pattern, root = %root.display(), "content pattern matched no files");
    }
    for file in &expansion.files {
        println!("{}", file.display());
    }
    ExitCode::from(EXIT_SUCCESS)
}
