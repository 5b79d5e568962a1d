use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{LiteralGuardError, Result};

/// Color mode used to pick which token subset seeds the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(format!("Unknown mode: {s} (expected light or dark)")),
        }
    }
}

/// Leaf literals extracted from a design-token document.
///
/// Expected shape:
/// `{ modes: { <mode>: { colors: { ... } } }, spacing: { ... }, effects: { radii: { ... } } }`.
/// Any nesting below those keys is flattened; only leaf strings and numbers matter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet {
    colors: BTreeMap<String, Vec<String>>,
    spacing: Vec<String>,
    radii: Vec<String>,
}

impl TokenSet {
    /// Reads and parses a JSON token file.
    ///
    /// # Errors
    /// Returns an error if the file is missing, unreadable, or not a JSON object.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| LiteralGuardError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content).map_err(|message| LiteralGuardError::Tokens {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Parses token JSON. The error is a human-readable reason.
    ///
    /// # Errors
    /// Returns an error if the text is not JSON or its root is not an object.
    pub fn from_json(content: &str) -> std::result::Result<Self, String> {
        let root: Value = serde_json::from_str(content).map_err(|e| e.to_string())?;
        let Value::Object(root) = root else {
            return Err("token document root must be an object".to_string());
        };

        let mut tokens = Self::default();

        if let Some(Value::Object(modes)) = root.get("modes") {
            for (mode, body) in modes {
                let mut leaves = Vec::new();
                if let Some(colors) = body.get("colors") {
                    collect_strings(colors, &mut leaves);
                }
                tokens.colors.insert(mode.to_lowercase(), leaves);
            }
        }

        if let Some(spacing) = root.get("spacing") {
            collect_scalars(spacing, &mut tokens.spacing);
        }

        let radii_sources = [
            root.get("effects").and_then(|e| e.get("radii")),
            root.get("radii"),
            root.get("borderRadius"),
        ];
        for source in radii_sources.into_iter().flatten() {
            collect_scalars(source, &mut tokens.radii);
        }

        Ok(tokens)
    }

    /// Color literals for `mode`, or for every mode when `mode` is `None`.
    pub fn colors(&self, mode: Option<ThemeMode>) -> impl Iterator<Item = &str> {
        self.colors
            .iter()
            .filter(move |(name, _)| mode.is_none_or(|m| name.as_str() == m.as_str()))
            .flat_map(|(_, values)| values.iter().map(String::as_str))
    }

    #[must_use]
    pub fn spacing(&self) -> &[String] {
        &self.spacing
    }

    #[must_use]
    pub fn radii(&self) -> &[String] {
        &self.radii
    }

    /// Names of the modes present in the document, sorted.
    pub fn modes(&self) -> impl Iterator<Item = &str> {
        self.colors.keys().map(String::as_str)
    }
}

fn collect_strings(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::String(s) => out.push(s.clone()),
        Value::Object(map) => map.values().for_each(|v| collect_strings(v, out)),
        Value::Array(items) => items.iter().for_each(|v| collect_strings(v, out)),
        _ => {}
    }
}

fn collect_scalars(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::String(s) => out.push(s.clone()),
        Value::Number(n) => out.push(n.to_string()),
        Value::Object(map) => map.values().for_each(|v| collect_scalars(v, out)),
        Value::Array(items) => items.iter().for_each(|v| collect_scalars(v, out)),
        _ => {}
    }
}

#[cfg(test)]
#[path = "tokens_tests.rs"]
mod tests;
