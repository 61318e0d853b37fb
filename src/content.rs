//! Content glob patterns: syntax checking and file expansion.
//!
//! Patterns use the usual glob wildcards plus brace alternation
//! (`./src/**/*.{html,js}`). A leading `!` turns a pattern into an exclusion.
//! `*` never crosses a path separator; `**` does.

use globset::{GlobBuilder, GlobMatcher};
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Directories never descended into while expanding.
const SKIPPED_DIRS: &[&str] = &[".git", "node_modules"];

/// Error type for content pattern failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    /// Pattern is empty (or just `!`)
    #[error("glob pattern must not be empty")]
    Empty,
    /// Pattern does not compile
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },
    /// Directory traversal failed
    #[error("failed to scan {}: {}", .path.display(), .message)]
    Walk { path: PathBuf, message: String },
}

/// One compiled content pattern.
#[derive(Debug, Clone)]
pub struct ContentPattern {
    /// Pattern text as declared
    pub source: String,
    /// Declared with a leading `!`
    pub negated: bool,
    absolute: bool,
    matcher: GlobMatcher,
}

impl ContentPattern {
    pub fn compile(source: &str) -> Result<Self, ContentError> {
        let (negated, body) = match source.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, source),
        };
        let body = body.trim();
        if body.is_empty() {
            return Err(ContentError::Empty);
        }

        let absolute = Path::new(body).is_absolute();
        let normalized = body.strip_prefix("./").unwrap_or(body);
        let glob = GlobBuilder::new(normalized).literal_separator(true).build().map_err(|e| {
            ContentError::InvalidGlob { pattern: source.to_string(), message: e.kind().to_string() }
        })?;

        Ok(Self { source: source.to_string(), negated, absolute, matcher: glob.compile_matcher() })
    }

    /// Test a file path given both relative to the scan root and in full.
    fn is_match(&self, relative: &Path, full: &Path) -> bool {
        if self.absolute {
            self.matcher.is_match(full)
        } else {
            self.matcher.is_match(relative)
        }
    }
}

/// Check that a single pattern is syntactically valid.
pub fn check_pattern(pattern: &str) -> Result<(), ContentError> {
    ContentPattern::compile(pattern).map(|_| ())
}

/// Result of expanding content patterns against a directory tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expansion {
    /// Matched files, sorted and de-duplicated
    pub files: Vec<PathBuf>,
    /// Include patterns that matched no file
    pub unmatched: Vec<String>,
}

/// A compiled, ordered set of include and exclude patterns.
#[derive(Debug, Clone, Default)]
pub struct ContentPatterns {
    patterns: Vec<ContentPattern>,
}

impl ContentPatterns {
    pub fn compile<S: AsRef<str>>(patterns: &[S]) -> Result<Self, ContentError> {
        let patterns =
            patterns.iter().map(|p| ContentPattern::compile(p.as_ref())).collect::<Result<_, _>>()?;
        Ok(Self { patterns })
    }

    pub fn patterns(&self) -> &[ContentPattern] {
        &self.patterns
    }

    /// A path is selected when some include matches and no exclude does.
    pub fn is_match(&self, relative: &Path, full: &Path) -> bool {
        let mut included = false;
        for pattern in &self.patterns {
            if pattern.is_match(relative, full) {
                if pattern.negated {
                    return false;
                }
                included = true;
            }
        }
        included
    }

    /// Walk `root` and collect every file the patterns select.
    pub fn expand(&self, root: &Path) -> Result<Expansion, ContentError> {
        let includes: Vec<&ContentPattern> = self.patterns.iter().filter(|p| !p.negated).collect();
        let mut hits = vec![false; includes.len()];
        let mut files = Vec::new();

        let walker = WalkDir::new(root).follow_links(true).into_iter().filter_entry(|entry| {
            !(entry.file_type().is_dir()
                && entry.depth() > 0
                && entry.file_name().to_str().is_some_and(|name| SKIPPED_DIRS.contains(&name)))
        });

        for entry in walker {
            let entry = entry.map_err(|e| ContentError::Walk {
                path: e.path().map_or_else(|| root.to_path_buf(), Path::to_path_buf),
                message: e.to_string(),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let full = entry.path();
            let relative = full.strip_prefix(root).unwrap_or(full);
            if !self.is_match(relative, full) {
                continue;
            }
            for (hit, pattern) in hits.iter_mut().zip(&includes) {
                if pattern.is_match(relative, full) {
                    *hit = true;
                }
            }
            files.push(full.to_path_buf());
        }

        files.sort();
        files.dedup();
        let unmatched = includes
            .iter()
            .zip(&hits)
            .filter(|(_, hit)| !**hit)
            .map(|(p, _)| p.source.clone())
            .collect();

        tracing::debug!(root = %root.display(), files = files.len(), "expanded content patterns");
        Ok(Expansion { files, unmatched })
    }
}
