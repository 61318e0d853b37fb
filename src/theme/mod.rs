//! Design-token theme and the extend/override merge.
//!
//! A [`Theme`] holds every token category after merging. Colors and font
//! families are typed; any other category (`screens`, `borderRadius`, ...)
//! is kept as opaque JSON values and merged with the same rule.

pub mod defaults;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

pub use defaults::base_theme;

/// Key-ordered token mapping. Ordering never depends on input order.
pub type TokenMap<V> = BTreeMap<String, V>;

/// Key used by a color scale for the unsuffixed name (`red` vs `red-500`).
pub const DEFAULT_SHADE: &str = "DEFAULT";

/// A value in the `colors` mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    /// A single color literal, e.g. `"#FF6B6B"`
    Literal(String),
    /// A shade scale, e.g. `{ "500": "#ef4444", "DEFAULT": "#ef4444" }`
    Scale(TokenMap<String>),
}

impl ColorValue {
    /// All literals held by this value, with the shade they belong to.
    pub fn literals(&self) -> Vec<(Option<&str>, &str)> {
        match self {
            ColorValue::Literal(s) => vec![(None, s.as_str())],
            ColorValue::Scale(shades) => {
                shades.iter().map(|(k, v)| (Some(k.as_str()), v.as_str())).collect()
            }
        }
    }
}

impl From<&str> for ColorValue {
    fn from(s: &str) -> Self {
        ColorValue::Literal(s.to_string())
    }
}

/// Ordered font fallback chain; the first available font wins at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FontStack(pub Vec<String>);

impl FontStack {
    pub fn new<I, S>(fonts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(fonts.into_iter().map(Into::into).collect())
    }

    pub fn fonts(&self) -> &[String] {
        &self.0
    }

    pub fn primary(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    /// CSS `font-family` declaration value, quoting names containing spaces.
    pub fn to_css(&self) -> String {
        self.0
            .iter()
            .map(|f| if f.contains(' ') { format!("\"{}\"", f) } else { f.clone() })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Fully merged theme.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub colors: TokenMap<ColorValue>,
    pub font_family: TokenMap<FontStack>,
    /// Other token categories, keyed by category name
    #[serde(flatten)]
    pub categories: BTreeMap<String, TokenMap<Value>>,
}

/// One layer of user-supplied theme data: either the direct `theme.<category>`
/// overrides or the `theme.extend` additions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ThemeLayer {
    pub colors: Option<TokenMap<ColorValue>>,
    pub font_family: Option<TokenMap<FontStack>>,
    pub categories: BTreeMap<String, TokenMap<Value>>,
}

impl ThemeLayer {
    pub fn is_empty(&self) -> bool {
        self.colors.is_none() && self.font_family.is_none() && self.categories.is_empty()
    }
}

/// Overlay `extend` onto `base` key by key.
///
/// Keys present in `extend` take the extension value whole; every other key
/// keeps its base value.
pub fn merge_tokens<V: Clone>(base: &TokenMap<V>, extend: &TokenMap<V>) -> TokenMap<V> {
    let mut merged = base.clone();
    for (key, value) in extend {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// Merge one category: an override replaces the base, then extend overlays it.
fn merge_category<V: Clone>(
    base: &TokenMap<V>,
    overrides: Option<&TokenMap<V>>,
    extend: Option<&TokenMap<V>>,
) -> TokenMap<V> {
    let start = overrides.unwrap_or(base);
    match extend {
        Some(extend) => merge_tokens(start, extend),
        None => start.clone(),
    }
}

impl Theme {
    /// Produce the merged theme from a base, direct overrides and extensions.
    pub fn merged(base: &Theme, overrides: &ThemeLayer, extend: &ThemeLayer) -> Theme {
        let colors =
            merge_category(&base.colors, overrides.colors.as_ref(), extend.colors.as_ref());
        let font_family = merge_category(
            &base.font_family,
            overrides.font_family.as_ref(),
            extend.font_family.as_ref(),
        );

        let names = base
            .categories
            .keys()
            .chain(overrides.categories.keys())
            .chain(extend.categories.keys());

        let mut categories: BTreeMap<String, TokenMap<Value>> = BTreeMap::new();
        let empty: TokenMap<Value> = TokenMap::new();
        for name in names {
            if categories.contains_key(name) {
                continue;
            }
            let merged = merge_category(
                base.categories.get(name).unwrap_or(&empty),
                overrides.categories.get(name),
                extend.categories.get(name),
            );
            categories.insert(name.clone(), merged);
        }

        Theme { colors, font_family, categories }
    }

    /// Resolve a color token name to its literal.
    ///
    /// Accepts plain names (`accent`), scale entries (`red-500`) and scale
    /// names alone, which resolve through the `DEFAULT` shade.
    pub fn color(&self, name: &str) -> Option<&str> {
        match self.colors.get(name) {
            Some(ColorValue::Literal(s)) => return Some(s.as_str()),
            Some(ColorValue::Scale(shades)) => {
                return shades.get(DEFAULT_SHADE).map(String::as_str)
            }
            None => {}
        }

        // Try every split point from the right: `brand-dark-100` -> `brand-dark` + `100`
        for (idx, _) in name.rmatch_indices('-') {
            let (group, shade) = (&name[..idx], &name[idx + 1..]);
            if let Some(ColorValue::Scale(shades)) = self.colors.get(group) {
                if let Some(value) = shades.get(shade) {
                    return Some(value.as_str());
                }
            }
        }
        None
    }

    /// Look up a font alias.
    pub fn font_family(&self, alias: &str) -> Option<&FontStack> {
        self.font_family.get(alias)
    }

    /// Look up a token in any other category.
    pub fn token(&self, category: &str, key: &str) -> Option<&Value> {
        self.categories.get(category)?.get(key)
    }

    /// Flattened color names as used in class names (`accent`, `red-500`, `red`).
    pub fn color_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        for (name, value) in &self.colors {
            match value {
                ColorValue::Literal(_) => names.push(name.clone()),
                ColorValue::Scale(shades) => {
                    for shade in shades.keys() {
                        if shade == DEFAULT_SHADE {
                            names.push(name.clone());
                        } else {
                            names.push(format!("{}-{}", name, shade));
                        }
                    }
                }
            }
        }
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn colors(pairs: &[(&str, &str)]) -> TokenMap<ColorValue> {
        pairs.iter().map(|(k, v)| (k.to_string(), ColorValue::from(*v))).collect()
    }

    #[test]
    fn test_merge_tokens_extension_wins() {
        let base = colors(&[("black", "#000"), ("white", "#fff")]);
        let extend = colors(&[("white", "#fafafa"), ("accent", "#FF6B6B")]);
        let merged = merge_tokens(&base, &extend);

        assert_eq!(merged.len(), 3);
        assert_eq!(merged["black"], ColorValue::from("#000"));
        assert_eq!(merged["white"], ColorValue::from("#fafafa"));
        assert_eq!(merged["accent"], ColorValue::from("#FF6B6B"));
    }

    #[test]
    fn test_extension_replaces_scale_whole() {
        let mut base = TokenMap::new();
        base.insert(
            "red".to_string(),
            ColorValue::Scale(TokenMap::from([
                ("100".to_string(), "#fee2e2".to_string()),
                ("500".to_string(), "#ef4444".to_string()),
            ])),
        );
        let extend = colors(&[("red", "#f00")]);
        let merged = merge_tokens(&base, &extend);
        assert_eq!(merged["red"], ColorValue::from("#f00"));
    }

    #[test]
    fn test_override_replaces_base_category() {
        let base = Theme { colors: colors(&[("black", "#000")]), ..Default::default() };
        let overrides = ThemeLayer { colors: Some(colors(&[("ink", "#111")])), ..Default::default() };
        let extend = ThemeLayer { colors: Some(colors(&[("accent", "#f00")])), ..Default::default() };

        let theme = Theme::merged(&base, &overrides, &extend);
        assert!(!theme.colors.contains_key("black"));
        assert_eq!(theme.color("ink"), Some("#111"));
        assert_eq!(theme.color("accent"), Some("#f00"));
    }

    #[test]
    fn test_merge_other_categories() {
        let mut base = Theme::default();
        base.categories.insert(
            "screens".to_string(),
            TokenMap::from([("sm".to_string(), json!("640px"))]),
        );
        let mut extend = ThemeLayer::default();
        extend.categories.insert(
            "screens".to_string(),
            TokenMap::from([("3xl".to_string(), json!("1920px"))]),
        );
        extend.categories.insert(
            "spacing".to_string(),
            TokenMap::from([("128".to_string(), json!("32rem"))]),
        );

        let theme = Theme::merged(&base, &ThemeLayer::default(), &extend);
        assert_eq!(theme.token("screens", "sm"), Some(&json!("640px")));
        assert_eq!(theme.token("screens", "3xl"), Some(&json!("1920px")));
        assert_eq!(theme.token("spacing", "128"), Some(&json!("32rem")));
    }

    #[test]
    fn test_color_lookup_through_scales() {
        let mut theme = Theme::default();
        theme.colors.insert(
            "brand-dark".to_string(),
            ColorValue::Scale(TokenMap::from([
                ("100".to_string(), "#111".to_string()),
                (DEFAULT_SHADE.to_string(), "#222".to_string()),
            ])),
        );
        theme.colors.insert("light-blue".to_string(), ColorValue::from("#0ff"));

        assert_eq!(theme.color("brand-dark-100"), Some("#111"));
        assert_eq!(theme.color("brand-dark"), Some("#222"));
        assert_eq!(theme.color("light-blue"), Some("#0ff"));
        assert_eq!(theme.color("brand-dark-900"), None);
        assert_eq!(theme.color("nope"), None);
    }

    #[test]
    fn test_color_names_flatten_scales() {
        let mut theme = Theme::default();
        theme.colors.insert("accent".to_string(), ColorValue::from("#f00"));
        theme.colors.insert(
            "red".to_string(),
            ColorValue::Scale(TokenMap::from([
                ("500".to_string(), "#ef4444".to_string()),
                (DEFAULT_SHADE.to_string(), "#ef4444".to_string()),
            ])),
        );
        assert_eq!(theme.color_names(), vec!["accent", "red-500", "red"]);
    }

    #[test]
    fn test_font_stack_css() {
        let stack = FontStack::new(["Poppins", "Segoe UI", "sans-serif"]);
        assert_eq!(stack.primary(), Some("Poppins"));
        assert_eq!(stack.to_css(), "Poppins, \"Segoe UI\", sans-serif");
    }

    #[test]
    fn test_theme_serializes_camel_case_flat() {
        let mut theme = Theme::default();
        theme.font_family.insert("sans".to_string(), FontStack::new(["Inter"]));
        theme.categories.insert(
            "borderRadius".to_string(),
            TokenMap::from([("lg".to_string(), json!("0.5rem"))]),
        );
        let value = serde_json::to_value(&theme).unwrap();
        assert_eq!(value["fontFamily"]["sans"], json!(["Inter"]));
        assert_eq!(value["borderRadius"]["lg"], json!("0.5rem"));
        assert!(value["colors"].as_object().unwrap().is_empty());
    }
}
