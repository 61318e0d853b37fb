//! Show and defaults command implementations

use clap::ValueEnum;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::process::ExitCode;

use crate::color::{parse_color, ColorLiteral};
use crate::config::SourceFormat;
use crate::theme::{base_theme, Theme};

use super::{load_for_command, EXIT_ERROR, EXIT_SUCCESS};

/// Part of the merged configuration to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Section {
    /// Whole configuration
    All,
    /// Merged theme
    Theme,
    /// Merged colors
    Colors,
    /// Every color class name with its literal and normalized hex
    Palette,
    /// Merged font families
    Fonts,
    /// Font families as CSS `font-family` values
    FontCss,
    /// Content patterns
    Content,
    /// Plugin handles
    Plugins,
}

/// One row of the flattened palette.
#[derive(Debug, Serialize)]
struct PaletteEntry<'a> {
    name: String,
    value: &'a str,
    /// `None` for `inherit` and `currentColor`
    hex: Option<String>,
}

fn palette(theme: &Theme) -> Vec<PaletteEntry<'_>> {
    theme
        .color_names()
        .into_iter()
        .filter_map(|name| {
            let value = theme.color(&name)?;
            let hex = match parse_color(value) {
                Ok(ColorLiteral::Rgba(rgba)) => Some(rgba.to_hex()),
                _ => None,
            };
            Some(PaletteEntry { name, value, hex })
        })
        .collect()
}

fn font_css(theme: &Theme) -> BTreeMap<&str, String> {
    theme.font_family.iter().map(|(alias, stack)| (alias.as_str(), stack.to_css())).collect()
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: cannot serialize output: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Execute the show command
pub fn run_show(path: Option<&Path>, format: Option<SourceFormat>, section: Section) -> ExitCode {
    let (_, config) = match load_for_command(path, format) {
        Ok(loaded) => loaded,
        Err(code) => return code,
    };

    match section {
        Section::All => print_json(config.as_ref()),
        Section::Theme => print_json(&config.theme),
        Section::Colors => print_json(&config.theme.colors),
        Section::Palette => print_json(&palette(&config.theme)),
        Section::Fonts => print_json(&config.theme.font_family),
        Section::FontCss => print_json(&font_css(&config.theme)),
        Section::Content => print_json(&config.content),
        Section::Plugins => print_json(&config.plugins),
    }
}

/// Execute the defaults command
pub fn run_defaults() -> ExitCode {
    print_json(&base_theme())
}
