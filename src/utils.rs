//! Utility functions for string formatting and path handling.
//!
//! This module provides helper functions used throughout the application:
//! - Slug titleizing for the university-name fallback
//! - String truncation for logging response bodies
//! - Output path resolution and normalization

use std::error::Error;
use std::path::{Component, Path, PathBuf};

/// Capitalize the first character of a word and lowercase the rest.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(upcase("hello"), "Hello");
/// assert_eq!(upcase("mCMASTER"), "Mcmaster");
/// assert_eq!(upcase(""), "");
/// ```
pub fn upcase(s: &str) -> String {
    let mut c = s.chars();
    match c.next() {
        None => String::new(),
        Some(f) => f.to_uppercase().collect::<String>() + &c.as_str().to_lowercase(),
    }
}

/// Turn a hyphenated slug into a display name.
///
/// Hyphens become spaces and each space-separated word is capitalized, so
/// `"new-college"` and `"new college"` both become `"New College"`. Proper
/// nouns with internal capitals (`McMaster`, `OCAD`) come out wrong; the
/// lookup table covers those.
pub fn titleize_slug(slug: &str) -> String {
    slug.replace('-', " ")
        .split(' ')
        .map(upcase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Truncate a string for logging purposes.
///
/// Long strings are truncated to at most `max` bytes (backing off to a char
/// boundary) with an ellipsis and byte count indicator appended.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…(+{} bytes)", &s[..end], s.len() - end)
}

/// Lexically normalize a path, folding `.` and `..` components.
///
/// No filesystem access happens here, so the path does not need to exist.
/// A `..` at the root stays at the root.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Make `path` absolute against the current directory, then normalize it.
pub fn resolve_output_path(path: &Path) -> Result<PathBuf, Box<dyn Error>> {
    let absolute = std::path::absolute(path)?;
    Ok(normalize_path(&absolute))
}

/// Default location of the programs file: `<crate root>/lib/etl/ouacPrograms.json`.
pub fn default_output_path() -> PathBuf {
    normalize_path(
        &Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("lib")
            .join("etl")
            .join("ouacPrograms.json"),
    )
}
