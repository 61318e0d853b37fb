//! Declaration formats and raw-text parsing.
//!
//! Every format is parsed into a generic `serde_json::Value` tree; shape
//! checking happens afterwards in [`super::schema`].

use super::error::ConfigError;
use clap::ValueEnum;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use std::sync::OnceLock;

/// Format the raw configuration text is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    /// JSON or JSON5 (comments, unquoted keys, trailing commas)
    Json5,
    /// TOML document
    Toml,
    /// JS-style module: `module.exports = { ... }` or `export default { ... }`
    Module,
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceFormat::Json5 => write!(f, "json5"),
            SourceFormat::Toml => write!(f, "toml"),
            SourceFormat::Module => write!(f, "module"),
        }
    }
}

impl SourceFormat {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") | Some("json5") => Some(SourceFormat::Json5),
            Some("toml") => Some(SourceFormat::Toml),
            Some("js") | Some("cjs") | Some("mjs") => Some(SourceFormat::Module),
            _ => None,
        }
    }
}

fn export_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?m)^[ \t]*(?:module\.exports\s*=|export\s+default)\s*")
            .expect("export pattern is valid")
    })
}

fn require_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"require\(\s*(?:'([^']*)'|"([^"]*)")\s*\)"#).expect("require pattern is valid")
    })
}

/// Parse raw configuration text into a generic value tree.
///
/// Duplicate keys within one object keep the last value.
pub fn parse_source(raw: &str, format: SourceFormat) -> Result<Value, ConfigError> {
    match format {
        SourceFormat::Json5 => {
            json5::from_str(raw).map_err(|e| ConfigError::parse(format, e.to_string()))
        }
        SourceFormat::Toml => {
            let doc: toml::Value =
                toml::from_str(raw).map_err(|e| ConfigError::parse(format, e.to_string()))?;
            serde_json::to_value(doc).map_err(|e| ConfigError::parse(format, e.to_string()))
        }
        SourceFormat::Module => {
            let body = module_body(raw)?;
            json5::from_str(&body).map_err(|e| ConfigError::parse(format, e.to_string()))
        }
    }
}

/// Extract the exported object literal from module text.
///
/// Comments are removed first, then everything before the export line is
/// dropped. The body ends at the object literal's closing brace and
/// `require('pkg')` becomes the string `"pkg"`.
fn module_body(raw: &str) -> Result<String, ConfigError> {
    let code = strip_comments(raw);
    let export = export_regex().find(&code).ok_or_else(|| {
        ConfigError::parse(
            SourceFormat::Module,
            "expected `module.exports =` or `export default` before the config object",
        )
    })?;

    let rest = code[export.end()..].trim();
    let body = match object_literal_len(rest) {
        Some(len) => {
            let trailing = rest[len..].trim_start_matches(|c: char| c == ';' || c.is_whitespace());
            if !trailing.is_empty() {
                tracing::debug!(bytes = trailing.len(), "ignoring code after the exported object");
            }
            &rest[..len]
        }
        None => rest.strip_suffix(';').unwrap_or(rest),
    };

    let body = require_regex().replace_all(body, |caps: &regex::Captures<'_>| {
        let name = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
        Value::String(name.to_string()).to_string()
    });
    Ok(body.into_owned())
}

/// Remove `//` and `/* */` comments outside string literals, keeping line breaks.
fn strip_comments(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    let mut quote: Option<char> = None;

    while let Some(c) = chars.next() {
        if let Some(q) = quote {
            out.push(c);
            if c == '\\' {
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            } else if c == q {
                quote = None;
            }
            continue;
        }

        match c {
            '"' | '\'' | '`' => {
                quote = Some(c);
                out.push(c);
            }
            '/' if chars.peek() == Some(&'/') => {
                while chars.next_if(|&next| next != '\n').is_some() {}
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                for next in chars.by_ref() {
                    if next == '\n' {
                        out.push('\n');
                    }
                    if prev == '*' && next == '/' {
                        break;
                    }
                    prev = next;
                }
            }
            _ => out.push(c),
        }
    }
    out
}

/// Byte length of the `{ ... }` literal at the start of `body`, through its
/// closing brace. `None` when `body` does not start with a balanced object.
fn object_literal_len(body: &str) -> Option<usize> {
    if !body.starts_with('{') {
        return None;
    }

    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    for (idx, c) in body.char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' | '`' => quote = Some(c),
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(idx + 1);
                }
            }
            _ => {}
        }
    }
    None
}
