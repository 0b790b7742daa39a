//! `.env` file parsing.
//!
//! Connection strings usually live in a `.env` file next to the service
//! rather than in the shell profile, so the probe reads one before giving up.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;

use crate::error::Result;

/// Parses `.env` files into a map of variables.
///
/// # Supported Formats
///
/// - Simple: `KEY=value`
/// - Exported: `export KEY=value`
/// - Quoted: `KEY="value with spaces"` or `KEY='single quoted'`
/// - Empty: `KEY=`
/// - Comments: `# full line` and `KEY=value # trailing` (unquoted values only)
/// - Values with equals signs: `MONGO_URI=mongodb://host/db?w=majority`
///
/// # Example
///
/// ```
/// use envprobe::config::EnvFileParser;
///
/// let content = r#"
/// # Database
/// MONGO_URI="mongodb://localhost:27017/app"
/// export DEBUG=true
/// EMPTY=
/// "#;
///
/// let vars = EnvFileParser::parse(content);
/// assert_eq!(vars.get("MONGO_URI").map(String::as_str), Some("mongodb://localhost:27017/app"));
/// assert_eq!(vars.get("DEBUG").map(String::as_str), Some("true"));
/// assert_eq!(vars.get("EMPTY").map(String::as_str), Some(""));
/// ```
pub struct EnvFileParser;

impl EnvFileParser {
    /// Parse env file content into a map of variables. Later keys win.
    pub fn parse(content: &str) -> HashMap<String, String> {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(Self::parse_line)
            .collect()
    }

    fn parse_line(line: &str) -> Option<(String, String)> {
        let line = line.strip_prefix("export ").unwrap_or(line);
        let (key, value) = line.split_once('=')?;
        let key = key.trim();
        if key.is_empty() {
            return None;
        }
        Some((key.to_string(), Self::parse_value(value.trim())))
    }

    fn parse_value(value: &str) -> String {
        for quote in ['"', '\''] {
            if let Some(inner) = value.strip_prefix(quote) {
                if let Some(end) = inner.find(quote) {
                    return inner[..end].to_string();
                }
            }
        }

        // `#` only starts a comment after whitespace; URIs may contain `#`.
        match value.find(" #") {
            Some(pos) => value[..pos].trim_end().to_string(),
            None => value.to_string(),
        }
    }

    /// Load and parse an env file from a path.
    pub fn load(path: &Path) -> Result<HashMap<String, String>> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Self::parse(&content))
    }

    /// Load and parse an env file, returning an empty map if it doesn't exist.
    pub fn load_optional(path: &Path) -> Result<HashMap<String, String>> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(HashMap::new())
        }
    }
}
