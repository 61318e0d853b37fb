//! CLI integration tests
//!
//! These tests run the `windcfg` binary against config files in temporary
//! directories and check exit codes and output.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Get the path to the windcfg binary
fn windcfg_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_windcfg"))
}

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, contents).unwrap();
    path
}

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(windcfg_binary())
        .current_dir(dir)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute windcfg")
}

fn run_with_log(dir: &Path, args: &[&str], rust_log: &str) -> Output {
    Command::new(windcfg_binary())
        .current_dir(dir)
        .args(args)
        .env("RUST_LOG", rust_log)
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute windcfg")
}

const VALID: &str = r##"/** @type {import('tailwindcss').Config} */
module.exports = {
  content: ["./index.html", "./src/**/*.{html,js}", "./missing/**/*.vue"],
  theme: {
    extend: {
      colors: { accent: "#FF6B6B" },
      fontFamily: { poppins: ["Poppins", "sans-serif"] },
    },
  },
  plugins: [],
};
"##;

#[test]
fn test_check_discovers_config() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "tailwind.config.js", VALID);
    let sub = temp.path().join("src");
    fs::create_dir_all(&sub).unwrap();

    let output = run(&sub, &["check"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("ok: "));
    assert!(stdout.contains("3 content patterns"));
}

#[test]
fn test_check_reports_schema_error() {
    let temp = TempDir::new().unwrap();
    let path = write(temp.path(), "bad.json", r#"{ "content": [], "plugins": [] }"#);

    let output = run(temp.path(), &["check", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error[schema]"));
    assert!(stderr.contains("'theme'"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_check_reports_validation_error() {
    let temp = TempDir::new().unwrap();
    let path = write(
        temp.path(),
        "tailwind.config.json5",
        r##"{ content: [], theme: { extend: { colors: { accent: "#ZZZZZZ" } } }, plugins: [] }"##,
    );

    let output = run(temp.path(), &["check", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error[validation]"));
    assert!(stderr.contains("theme.extend.colors.accent"));
}

#[test]
fn test_format_override() {
    let temp = TempDir::new().unwrap();
    let path = write(
        temp.path(),
        "config.txt",
        "content = []\nplugins = []\n[theme.extend.colors]\naccent = \"#FF6B6B\"\n",
    );

    let output = run(temp.path(), &["check", path.to_str().unwrap(), "--format", "toml"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
}

#[test]
fn test_show_colors_section() {
    let temp = TempDir::new().unwrap();
    let path = write(temp.path(), "tailwind.config.js", VALID);

    let output = run(temp.path(), &["show", path.to_str().unwrap(), "--section", "colors"]);
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["accent"], "#FF6B6B");
    assert_eq!(json["red"]["500"], "#ef4444");
}

#[test]
fn test_show_palette_and_font_css() {
    let temp = TempDir::new().unwrap();
    let path = write(temp.path(), "tailwind.config.js", VALID);

    let output = run(temp.path(), &["show", path.to_str().unwrap(), "--section", "palette"]);
    assert!(output.status.success());
    let rows: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    let accent = rows.iter().find(|row| row["name"] == "accent").unwrap();
    assert_eq!(accent["hex"], "#FF6B6B");
    let red = rows.iter().find(|row| row["name"] == "red-500").unwrap();
    assert_eq!(red["value"], "#ef4444");

    let output = run(temp.path(), &["show", path.to_str().unwrap(), "--section", "font-css"]);
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["poppins"], "Poppins, sans-serif");
}

#[test]
fn test_files_lists_matches_and_warns() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "tailwind.config.js", VALID);
    write(temp.path(), "index.html", "<h1 class=\"text-accent\"></h1>");
    write(temp.path(), "src/app.js", "export {}");
    write(temp.path(), "src/style.css", "");

    let output = run(temp.path(), &["files"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("index.html"));
    assert!(lines[1].ends_with("app.js"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("matched no files"));
}

#[test]
fn test_defaults_prints_base_theme() {
    let temp = TempDir::new().unwrap();
    let output = run(temp.path(), &["defaults"]);
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["fontFamily"]["mono"][0], "ui-monospace");
    assert_eq!(json["screens"]["lg"], "1024px");
}

#[test]
fn test_rust_log_enables_debug_output() {
    let temp = TempDir::new().unwrap();
    let path = write(temp.path(), "tailwind.config.json", r#"{ "content": [], "theme": {}, "plugins": [] }"#);

    let output = run_with_log(temp.path(), &["check", path.to_str().unwrap()], "debug");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("DEBUG"), "stderr: {}", stderr);
    assert!(stderr.contains("config loaded"));
}

#[test]
fn test_rust_log_overrides_verbose() {
    let temp = TempDir::new().unwrap();
    let path = write(temp.path(), "tailwind.config.json", r#"{ "content": [], "theme": {}, "plugins": [] }"#);

    let output = run_with_log(temp.path(), &["-v", "check", path.to_str().unwrap()], "error");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("DEBUG"), "stderr: {}", stderr);
    assert!(!stderr.contains("WARN"), "stderr: {}", stderr);

    let output = run(temp.path(), &["-v", "check", path.to_str().unwrap()]);
    assert!(String::from_utf8_lossy(&output.stderr).contains("config loaded"));
}
