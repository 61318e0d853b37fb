//! Semantic validation of a checked [`Document`].
//!
//! Unlike shape checking, validation keeps going after the first problem so a
//! single load reports every bad value.

use super::error::ValidationIssue;
use super::schema::{DarkMode, Document, Important};
use crate::color::parse_color;
use crate::content::check_pattern;
use crate::theme::{ColorValue, FontStack, ThemeLayer, TokenMap};

/// Validate a document, returning every issue found.
pub fn validate_document(document: &Document) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for (i, pattern) in document.content.files.iter().enumerate() {
        if let Err(e) = check_pattern(pattern) {
            issues.push(ValidationIssue::new(format!("content[{}]", i), e.to_string()));
        }
    }

    validate_layer(&document.overrides, "theme", &mut issues);
    validate_layer(&document.extend, "theme.extend", &mut issues);

    let options = &document.options;
    if let Some(prefix) = &options.prefix {
        if prefix.is_empty() || prefix.chars().any(char::is_whitespace) {
            issues.push(ValidationIssue::new("prefix", "must be non-empty and contain no whitespace"));
        }
    }
    if options.separator.is_empty() {
        issues.push(ValidationIssue::new("separator", "must not be empty"));
    }
    if let Important::Selector(selector) = &options.important {
        if selector.trim().is_empty() {
            issues.push(ValidationIssue::new("important", "selector must not be empty"));
        }
    }
    match &options.dark_mode {
        DarkMode::Class(Some(custom)) | DarkMode::Selector(Some(custom)) if custom.trim().is_empty() => {
            issues.push(ValidationIssue::new("darkMode[1]", "selector must not be empty"));
        }
        _ => {}
    }
    for (i, class) in options.safelist.iter().enumerate() {
        if class.trim().is_empty() {
            issues.push(ValidationIssue::new(format!("safelist[{}]", i), "must not be empty"));
        }
    }

    issues
}

fn validate_layer(layer: &ThemeLayer, path: &str, issues: &mut Vec<ValidationIssue>) {
    if let Some(colors) = &layer.colors {
        validate_colors(colors, &format!("{}.colors", path), issues);
    }
    if let Some(fonts) = &layer.font_family {
        validate_fonts(fonts, &format!("{}.fontFamily", path), issues);
    }
}

fn validate_colors(colors: &TokenMap<ColorValue>, path: &str, issues: &mut Vec<ValidationIssue>) {
    for (name, value) in colors {
        if let ColorValue::Scale(shades) = value {
            if shades.is_empty() {
                issues.push(ValidationIssue::new(
                    format!("{}.{}", path, name),
                    "color scale must define at least one shade",
                ));
            }
        }
        for (shade, literal) in value.literals() {
            if let Err(e) = parse_color(literal) {
                let field = match shade {
                    Some(shade) => format!("{}.{}.{}", path, name, shade),
                    None => format!("{}.{}", path, name),
                };
                issues.push(ValidationIssue::new(
                    field,
                    format!("'{}' is not a valid color: {}", literal, e),
                ));
            }
        }
    }
}

fn validate_fonts(fonts: &TokenMap<FontStack>, path: &str, issues: &mut Vec<ValidationIssue>) {
    for (alias, stack) in fonts {
        let field = format!("{}.{}", path, alias);
        if stack.fonts().is_empty() {
            issues.push(ValidationIssue::new(field, "font fallback chain must contain at least one font"));
            continue;
        }
        for (i, font) in stack.fonts().iter().enumerate() {
            if font.trim().is_empty() {
                issues.push(ValidationIssue::new(format!("{}[{}]", field, i), "font name must not be blank"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::check_document;
    use serde_json::json;

    fn issues_for(value: serde_json::Value) -> Vec<ValidationIssue> {
        validate_document(&check_document(&value).expect("document should be well-formed"))
    }

    fn with_extend(extend: serde_json::Value) -> serde_json::Value {
        json!({ "content": ["./index.html"], "plugins": [], "theme": { "extend": extend } })
    }

    #[test]
    fn test_valid_document_has_no_issues() {
        let issues = issues_for(with_extend(json!({
            "colors": { "accent": "#FF6B6B", "ink": "rgb(10 20 30)", "sky2": "skyblue" },
            "fontFamily": { "poppins": ["Poppins", "sans-serif"] }
        })));
        assert!(issues.is_empty(), "unexpected issues: {:?}", issues);
    }

    #[test]
    fn test_malformed_colors_reported() {
        let issues = issues_for(with_extend(json!({
            "colors": { "bad": "#ZZZZZZ", "worse": "notacolor", "brand": { "500": "#12" } }
        })));
        let paths: Vec<&str> = issues.iter().map(|i| i.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["theme.extend.colors.bad", "theme.extend.colors.brand.500", "theme.extend.colors.worse"]
        );
    }

    #[test]
    fn test_empty_font_chain_rejected() {
        let issues = issues_for(with_extend(json!({ "fontFamily": { "display": [] } })));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path, "theme.extend.fontFamily.display");
    }

    #[test]
    fn test_blank_font_name_rejected() {
        let issues = issues_for(with_extend(json!({ "fontFamily": { "display": ["Oswald", "  "] } })));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path, "theme.extend.fontFamily.display[1]");
    }

    #[test]
    fn test_override_layer_validated() {
        let issues = issues_for(json!({
            "content": [], "plugins": [], "theme": { "colors": { "ink": "not a color" } }
        }));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path, "theme.colors.ink");
    }

    #[test]
    fn test_bad_glob_rejected() {
        let issues = issues_for(json!({
            "content": ["./src/**/*.{html,js}", "./src/[abc.html", ""], "plugins": [], "theme": {}
        }));
        let paths: Vec<&str> = issues.iter().map(|i| i.path.as_str()).collect();
        assert_eq!(paths, vec!["content[1]", "content[2]"]);
    }

    #[test]
    fn test_option_issues() {
        let issues = issues_for(json!({
            "content": [], "plugins": [], "theme": {},
            "prefix": "tw ", "separator": "", "safelist": ["ok", ""], "important": " "
        }));
        let paths: Vec<&str> = issues.iter().map(|i| i.path.as_str()).collect();
        assert_eq!(paths, vec!["prefix", "separator", "important", "safelist[1]"]);
    }
}
