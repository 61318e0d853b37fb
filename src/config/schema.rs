//! Configuration schema types and structural checking.
//!
//! Raw value trees from [`super::source`] are checked key by key and turned
//! into a typed [`Document`]. Shape problems stop the check at the first
//! offending key and name its path.

use super::error::ConfigError;
use crate::theme::{ColorValue, FontStack, Theme, ThemeLayer, TokenMap};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Top-level keys every configuration must declare.
pub const REQUIRED_KEYS: [&str; 3] = ["content", "theme", "plugins"];

/// Opaque reference to a plugin, passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PluginHandle(pub Value);

impl PluginHandle {
    /// Package name when the handle is a plain string.
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_str()
    }
}

/// Files to scan for class usage.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Content {
    /// Glob patterns in declaration order; `!` prefix negates
    pub files: Vec<String>,
    /// Resolve patterns against the config file's directory
    pub relative: bool,
}

impl Serialize for Content {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.relative {
            let mut map = serializer.serialize_map(Some(2))?;
            map.serialize_entry("files", &self.files)?;
            map.serialize_entry("relative", &true)?;
            map.end()
        } else {
            self.files.serialize(serializer)
        }
    }
}

/// `important` option: off, on, or scoped to a selector.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Important {
    #[default]
    Off,
    On,
    Selector(String),
}

impl Serialize for Important {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Important::Off => serializer.serialize_bool(false),
            Important::On => serializer.serialize_bool(true),
            Important::Selector(s) => serializer.serialize_str(s),
        }
    }
}

/// Strategy for dark-mode variants.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DarkMode {
    /// Follow `prefers-color-scheme`
    #[default]
    Media,
    /// Toggle with a class, optionally a custom one
    Class(Option<String>),
    /// Toggle with an arbitrary selector
    Selector(Option<String>),
}

impl Serialize for DarkMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let (name, custom) = match self {
            DarkMode::Media => return serializer.serialize_str("media"),
            DarkMode::Class(custom) => ("class", custom),
            DarkMode::Selector(custom) => ("selector", custom),
        };
        match custom {
            None => serializer.serialize_str(name),
            Some(custom) => {
                let mut seq = serializer.serialize_seq(Some(2))?;
                seq.serialize_element(name)?;
                seq.serialize_element(custom)?;
                seq.end()
            }
        }
    }
}

fn default_separator() -> String {
    ":".to_string()
}

/// Options outside content, theme and plugins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub prefix: Option<String>,
    pub important: Important,
    pub dark_mode: DarkMode,
    pub safelist: Vec<String>,
    pub separator: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            prefix: None,
            important: Important::Off,
            dark_mode: DarkMode::Media,
            safelist: Vec::new(),
            separator: default_separator(),
        }
    }
}

/// Configuration as declared, before merging with a base theme.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub content: Content,
    /// Categories given directly under `theme`
    pub overrides: ThemeLayer,
    /// Categories under `theme.extend`
    pub extend: ThemeLayer,
    pub plugins: Vec<PluginHandle>,
    pub options: Options,
}

/// Fully merged, validated configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    pub content: Content,
    pub theme: Theme,
    pub plugins: Vec<PluginHandle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    pub important: Important,
    pub dark_mode: DarkMode,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub safelist: Vec<String>,
    pub separator: String,
}

impl Configuration {
    /// Merge a checked document onto a base theme.
    pub fn from_document(document: Document, base: &Theme) -> Self {
        let theme = Theme::merged(base, &document.overrides, &document.extend);
        let Options { prefix, important, dark_mode, safelist, separator } = document.options;
        Self {
            content: document.content,
            theme,
            plugins: document.plugins,
            prefix,
            important,
            dark_mode,
            safelist,
            separator,
        }
    }

    /// Content glob patterns in declaration order.
    pub fn content_patterns(&self) -> &[String] {
        &self.content.files
    }

    /// Serialize to pretty JSON that loads back to an equal configuration.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

// ============================================================================
// Shape checking
// ============================================================================

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn expect_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>, ConfigError> {
    value
        .as_object()
        .ok_or_else(|| ConfigError::schema(path, format!("must be an object, found {}", type_name(value))))
}

fn expect_string(value: &Value, path: &str) -> Result<String, ConfigError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ConfigError::schema(path, format!("must be a string, found {}", type_name(value))))
}

fn string_list(value: &Value, path: &str) -> Result<Vec<String>, ConfigError> {
    let items = value.as_array().ok_or_else(|| {
        ConfigError::schema(path, format!("must be an array of strings, found {}", type_name(value)))
    })?;
    items
        .iter()
        .enumerate()
        .map(|(i, item)| expect_string(item, &format!("{}[{}]", path, i)))
        .collect()
}

/// Check a parsed value tree and convert it to a [`Document`].
pub fn check_document(value: &Value) -> Result<Document, ConfigError> {
    let root = expect_object(value, "<root>")?;

    for key in REQUIRED_KEYS {
        if !root.contains_key(key) {
            return Err(ConfigError::schema(key, "is required but missing"));
        }
    }

    let mut document = Document::default();
    for (key, value) in root {
        match key.as_str() {
            "content" => document.content = check_content(value)?,
            "theme" => {
                let (overrides, extend) = check_theme(value)?;
                document.overrides = overrides;
                document.extend = extend;
            }
            "plugins" => document.plugins = check_plugins(value)?,
            "prefix" => document.options.prefix = Some(expect_string(value, key)?),
            "important" => document.options.important = check_important(value)?,
            "darkMode" => document.options.dark_mode = check_dark_mode(value)?,
            "safelist" => document.options.safelist = string_list(value, key)?,
            "separator" => document.options.separator = expect_string(value, key)?,
            other => tracing::debug!(key = other, "ignoring unrecognized top-level key"),
        }
    }
    Ok(document)
}

fn check_content(value: &Value) -> Result<Content, ConfigError> {
    if value.is_array() {
        return Ok(Content { files: string_list(value, "content")?, relative: false });
    }

    let obj = value.as_object().ok_or_else(|| {
        ConfigError::schema(
            "content",
            format!("must be an array of glob patterns or an object, found {}", type_name(value)),
        )
    })?;
    let files = obj
        .get("files")
        .ok_or_else(|| ConfigError::schema("content.files", "is required but missing"))?;
    let relative = match obj.get("relative") {
        None => false,
        Some(Value::Bool(b)) => *b,
        Some(other) => {
            return Err(ConfigError::schema(
                "content.relative",
                format!("must be a boolean, found {}", type_name(other)),
            ))
        }
    };
    Ok(Content { files: string_list(files, "content.files")?, relative })
}

fn check_plugins(value: &Value) -> Result<Vec<PluginHandle>, ConfigError> {
    let items = value.as_array().ok_or_else(|| {
        ConfigError::schema("plugins", format!("must be an array, found {}", type_name(value)))
    })?;
    Ok(items.iter().cloned().map(PluginHandle).collect())
}

fn check_important(value: &Value) -> Result<Important, ConfigError> {
    match value {
        Value::Bool(false) => Ok(Important::Off),
        Value::Bool(true) => Ok(Important::On),
        Value::String(s) => Ok(Important::Selector(s.clone())),
        other => Err(ConfigError::schema(
            "important",
            format!("must be a boolean or a selector string, found {}", type_name(other)),
        )),
    }
}

fn check_dark_mode(value: &Value) -> Result<DarkMode, ConfigError> {
    let (name, custom) = match value {
        Value::String(s) => (s.as_str(), None),
        Value::Array(items) if matches!(items.len(), 1 | 2) => {
            let name = items[0]
                .as_str()
                .ok_or_else(|| ConfigError::schema("darkMode[0]", "must be a string"))?;
            let custom = match items.get(1) {
                Some(selector) => Some(expect_string(selector, "darkMode[1]")?),
                None => None,
            };
            (name, custom)
        }
        other => {
            return Err(ConfigError::schema(
                "darkMode",
                format!("must be a string, [strategy] or [strategy, selector], found {}", type_name(other)),
            ))
        }
    };

    match (name, custom) {
        ("media", None) => Ok(DarkMode::Media),
        ("media", Some(_)) => {
            Err(ConfigError::schema("darkMode", "strategy 'media' does not take a selector"))
        }
        ("class", custom) => Ok(DarkMode::Class(custom)),
        ("selector", custom) => Ok(DarkMode::Selector(custom)),
        (name, _) => Err(ConfigError::schema(
            "darkMode",
            format!("unknown strategy '{}', expected media, class or selector", name),
        )),
    }
}

fn check_theme(value: &Value) -> Result<(ThemeLayer, ThemeLayer), ConfigError> {
    let obj = expect_object(value, "theme")?;
    let mut overrides = ThemeLayer::default();
    let mut extend = ThemeLayer::default();

    for (key, value) in obj {
        if key == "extend" {
            let ext = expect_object(value, "theme.extend")?;
            for (category, tokens) in ext {
                if category == "extend" {
                    return Err(ConfigError::schema("theme.extend.extend", "extend cannot be nested"));
                }
                check_category(&mut extend, category, tokens, "theme.extend")?;
            }
        } else {
            check_category(&mut overrides, key, value, "theme")?;
        }
    }
    Ok((overrides, extend))
}

fn check_category(
    layer: &mut ThemeLayer,
    category: &str,
    value: &Value,
    parent: &str,
) -> Result<(), ConfigError> {
    let path = join(parent, category);
    match category {
        "colors" => layer.colors = Some(check_colors(value, &path)?),
        "fontFamily" => layer.font_family = Some(check_fonts(value, &path)?),
        _ => {
            let tokens = expect_object(value, &path)?;
            let tokens: TokenMap<Value> = tokens.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
            layer.categories.insert(category.to_string(), tokens);
        }
    }
    Ok(())
}

fn check_colors(value: &Value, path: &str) -> Result<TokenMap<ColorValue>, ConfigError> {
    let obj = expect_object(value, path)?;
    let mut colors = TokenMap::new();

    for (name, entry) in obj {
        let entry_path = join(path, name);
        let color = match entry {
            Value::String(s) => ColorValue::Literal(s.clone()),
            Value::Object(shades) => {
                let mut scale = TokenMap::new();
                for (shade, literal) in shades {
                    scale.insert(shade.clone(), expect_string(literal, &join(&entry_path, shade))?);
                }
                ColorValue::Scale(scale)
            }
            other => {
                return Err(ConfigError::schema(
                    entry_path,
                    format!("must be a color string or a map of shades, found {}", type_name(other)),
                ))
            }
        };
        colors.insert(name.clone(), color);
    }
    Ok(colors)
}

fn check_fonts(value: &Value, path: &str) -> Result<TokenMap<FontStack>, ConfigError> {
    let obj = expect_object(value, path)?;
    let mut fonts = TokenMap::new();

    for (alias, entry) in obj {
        let entry_path = join(path, alias);
        if !entry.is_array() {
            return Err(ConfigError::schema(
                entry_path,
                format!("must be a sequence of font names, found {}", type_name(entry)),
            ));
        }
        fonts.insert(alias.clone(), FontStack(string_list(entry, &entry_path)?));
    }
    Ok(fonts)
}
