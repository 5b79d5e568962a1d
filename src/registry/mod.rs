//! Sanctioned literal values: design-system colors, spacing steps and radii.

mod tokens;

pub use tokens::{ThemeMode, TokenSet};

use std::collections::BTreeSet;
use std::path::Path;

use indexmap::IndexSet;

use crate::diagnostic::Category;
use crate::error::Result;

/// Colors allowed without a token file.
pub const DEFAULT_COLORS: &[&str] = &[
    "#ffffff", "#f4f6f8", "#eef4ff", "#e3f2fd", "#90caf9", "#d7f5e9", "#4caf50", "#e8f2ff",
    "#2196f3", "#e0f2f1", "#4db6ac", "#cbd7e0", "#cbd5e1", "#1a1a1a", "#2d3748", "#1e3a5f",
    "#1e3a8a", "#60a5fa", "#064e3b", "#10b981", "#1e40af", "#3b82f6", "#134e4a", "#14b8a6",
    "#4b5563", "#555d6f", "#000000", "#000", "#fff",
];

/// Spacing scale in pixels.
pub const DEFAULT_SPACING: &[u32] = &[4, 8, 12, 16, 20, 24, 32, 48, 64];

/// Values at or below this many pixels are hairlines and never flagged as spacing.
pub const HAIRLINE_MAX_PX: u32 = 3;

/// Border radius scale in pixels.
pub const DEFAULT_RADII: &[u32] = &[4, 8, 12, 16];

/// Lower-cased, trimmed form used for both stored colors and lookups.
#[must_use]
pub fn normalize_color(literal: &str) -> String {
    literal.trim().to_ascii_lowercase()
}

/// Parses `"16px"`, `"16"` or `" 16px "` into a pixel count.
#[must_use]
pub fn parse_pixels(literal: &str) -> Option<u32> {
    let trimmed = literal.trim();
    let digits = trimmed.strip_suffix("px").unwrap_or(trimmed).trim_end();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Allowed values per category, built once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedValues {
    colors: IndexSet<String>,
    spacing: BTreeSet<u32>,
    radii: BTreeSet<u32>,
}

impl Default for AllowedValues {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.iter().map(|c| normalize_color(c)).collect(),
            spacing: DEFAULT_SPACING.iter().copied().collect(),
            radii: DEFAULT_RADII.iter().copied().collect(),
        }
    }
}

impl AllowedValues {
    /// A registry with nothing sanctioned.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            colors: IndexSet::new(),
            spacing: BTreeSet::new(),
            radii: BTreeSet::new(),
        }
    }

    /// Defaults plus every value from `tokens` visible under `mode`.
    #[must_use]
    pub fn with_tokens(tokens: &TokenSet, mode: Option<ThemeMode>) -> Self {
        let mut allowed = Self::default();
        allowed.merge(tokens, mode);
        allowed
    }

    /// Loads a token file and merges it into the defaults.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a token document.
    pub fn from_token_file(path: &Path, mode: Option<ThemeMode>) -> Result<Self> {
        let tokens = TokenSet::load(path)?;
        Ok(Self::with_tokens(&tokens, mode))
    }

    /// Like [`Self::from_token_file`], but falls back to the defaults.
    ///
    /// The error, if any, is handed back so the caller can surface it as a notice.
    #[must_use]
    pub fn load_or_default(
        path: &Path,
        mode: Option<ThemeMode>,
    ) -> (Self, Option<crate::LiteralGuardError>) {
        match Self::from_token_file(path, mode) {
            Ok(allowed) => (allowed, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    fn merge(&mut self, tokens: &TokenSet, mode: Option<ThemeMode>) {
        self.colors
            .extend(tokens.colors(mode).map(|c| normalize_color(c)));
        self.spacing
            .extend(tokens.spacing().iter().filter_map(|s| parse_pixels(s)));
        self.radii
            .extend(tokens.radii().iter().filter_map(|r| parse_pixels(r)));
    }

    /// Membership test with the same normalization used when values were stored.
    ///
    /// Categories without a sanctioned set never allow anything.
    #[must_use]
    pub fn is_allowed(&self, category: Category, literal: &str) -> bool {
        match category {
            Category::HardcodedColor => self.colors.contains(&normalize_color(literal)),
            Category::NonStandardSpacing => parse_pixels(literal)
                .is_some_and(|px| px <= HAIRLINE_MAX_PX || self.spacing.contains(&px)),
            Category::NonStandardRadius => {
                parse_pixels(literal).is_some_and(|px| self.radii.contains(&px))
            }
            Category::ParseError | Category::LegacyPattern => false,
        }
    }

    #[must_use]
    pub fn colors(&self) -> &IndexSet<String> {
        &self.colors
    }

    #[must_use]
    pub const fn spacing(&self) -> &BTreeSet<u32> {
        &self.spacing
    }

    #[must_use]
    pub const fn radii(&self) -> &BTreeSet<u32> {
        &self.radii
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
