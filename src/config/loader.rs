//! Configuration loading and discovery
//!
//! Provides the pure [`load`] function, the stateful [`ConfigLoader`] and
//! helpers to find and read configuration files.

use super::error::ConfigError;
use super::schema::{check_document, Configuration};
use super::source::{parse_source, SourceFormat};
use super::validate::validate_document;
use crate::theme::Theme;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// File names searched for in each directory, in priority order.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    "tailwind.config.js",
    "tailwind.config.cjs",
    "tailwind.config.mjs",
    "tailwind.config.json",
    "tailwind.config.json5",
    "tailwind.config.toml",
];

/// Load a configuration from raw text.
///
/// Parses `raw` in the given format, checks its shape, validates its values
/// and merges its theme onto `base`. Pure: the same input always yields an
/// equal result.
///
/// # Example
/// ```
/// use windcfg::config::{load, SourceFormat};
/// use windcfg::theme::base_theme;
///
/// let raw = r##"{
///     content: ["./index.html"],
///     theme: { extend: { colors: { accent: "#FF6B6B" } } },
///     plugins: [],
/// }"##;
/// let config = load(raw, SourceFormat::Json5, &base_theme()).unwrap();
/// assert_eq!(config.theme.color("accent"), Some("#FF6B6B"));
/// assert_eq!(config.theme.color("red-500"), Some("#ef4444"));
/// ```
pub fn load(raw: &str, format: SourceFormat, base: &Theme) -> Result<Configuration, ConfigError> {
    let value = parse_source(raw, format)?;
    let document = check_document(&value)?;

    let issues = validate_document(&document);
    if !issues.is_empty() {
        return Err(ConfigError::Validation(issues));
    }

    Ok(Configuration::from_document(document, base))
}

/// Read and load a configuration file, detecting its format from the extension.
pub fn load_file(path: &Path, base: &Theme) -> Result<Configuration, ConfigError> {
    let format = SourceFormat::from_path(path).ok_or_else(|| {
        ConfigError::parse(
            SourceFormat::Json5,
            format!("cannot tell the config format of {}", path.display()),
        )
    })?;
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
    tracing::debug!(path = %path.display(), %format, "loading config file");
    load(&contents, format, base)
}

/// Find a config file by walking up from a specific directory.
///
/// Within one directory the first existing name in [`CONFIG_FILE_NAMES`] wins.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        for name in CONFIG_FILE_NAMES {
            let config_path = current.join(name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Find a config file by walking up from the current working directory.
pub fn find_config() -> Option<PathBuf> {
    std::env::current_dir().ok().and_then(find_config_from)
}

/// Where a [`ConfigLoader`] is in its lifecycle.
#[derive(Debug, Clone, Default)]
pub enum LoadState {
    #[default]
    Unloaded,
    Loading,
    Loaded(Arc<Configuration>),
    Failed(ConfigError),
}

impl LoadState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, LoadState::Loaded(_) | LoadState::Failed(_))
    }
}

/// Loader holding a base theme and the outcome of its latest load.
///
/// Each call to [`ConfigLoader::load`] is a fresh attempt; the loader never
/// retries on its own.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    base: Theme,
    state: LoadState,
}

impl ConfigLoader {
    pub fn new(base: Theme) -> Self {
        Self { base, state: LoadState::Unloaded }
    }

    /// Loader over the built-in base theme.
    pub fn with_defaults() -> Self {
        Self::new(crate::theme::base_theme())
    }

    pub fn base(&self) -> &Theme {
        &self.base
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// The loaded configuration, if the latest attempt succeeded.
    pub fn config(&self) -> Option<Arc<Configuration>> {
        match &self.state {
            LoadState::Loaded(config) => Some(Arc::clone(config)),
            _ => None,
        }
    }

    /// Load raw text and record the outcome.
    pub fn load(&mut self, raw: &str, format: SourceFormat) -> Result<Arc<Configuration>, ConfigError> {
        self.state = LoadState::Loading;
        let outcome = load(raw, format, &self.base);
        self.finish(outcome)
    }

    /// Load a file and record the outcome.
    pub fn load_file(&mut self, path: &Path) -> Result<Arc<Configuration>, ConfigError> {
        self.state = LoadState::Loading;
        let outcome = load_file(path, &self.base);
        self.finish(outcome)
    }

    fn finish(
        &mut self,
        outcome: Result<Configuration, ConfigError>,
    ) -> Result<Arc<Configuration>, ConfigError> {
        match outcome {
            Ok(config) => {
                let config = Arc::new(config);
                tracing::debug!(
                    colors = config.theme.colors.len(),
                    fonts = config.theme.font_family.len(),
                    patterns = config.content.files.len(),
                    "config loaded"
                );
                self.state = LoadState::Loaded(Arc::clone(&config));
                Ok(config)
            }
            Err(e) => {
                tracing::debug!(kind = %e.kind(), "config load failed");
                self.state = LoadState::Failed(e.clone());
                Err(e)
            }
        }
    }
}
