use std::ops::Range;

/// A closed predicate deciding whether a match at `span` in `line` is discarded.
///
/// Implementations only see one physical line. A full-parser backend can replace
/// these without touching the detector.
pub trait Suppressor: Send + Sync {
    fn suppress(&self, line: &str, span: Range<usize>) -> bool;
}

/// Suppresses matches preceded by an odd number of `'` or `"` characters.
///
/// Escaped quotes count like any other quote, so `"a \" b" yes` is treated as still
/// inside a string. The bias is toward reporting rather than missing.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuoteParity;

impl QuoteParity {
    /// Returns `(single, double)` quote counts before `offset`.
    #[must_use]
    pub fn count_before(line: &str, offset: usize) -> (usize, usize) {
        let before = line.get(..offset).unwrap_or(line);
        before.bytes().fold((0, 0), |(single, double), b| match b {
            b'\'' => (single + 1, double),
            b'"' => (single, double + 1),
            _ => (single, double),
        })
    }
}

impl Suppressor for QuoteParity {
    fn suppress(&self, line: &str, span: Range<usize>) -> bool {
        let (single, double) = Self::count_before(line, span.start);
        single % 2 == 1 || double % 2 == 1
    }
}

/// Suppresses matches followed (after optional whitespace) by `:`; keys are strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyContext;

impl Suppressor for KeyContext {
    fn suppress(&self, line: &str, span: Range<usize>) -> bool {
        line.get(span.end..)
            .is_some_and(|after| after.trim_start().starts_with(':'))
    }
}

/// Line-level activation: a rule only runs where one of its keywords appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordGate {
    keywords: &'static [&'static str],
}

impl KeywordGate {
    pub const SPACING: Self = Self::new(&["padding", "margin", "gap", "width", "height"]);
    pub const RADIUS: Self = Self::new(&["border-radius", "borderRadius"]);

    #[must_use]
    pub const fn new(keywords: &'static [&'static str]) -> Self {
        Self { keywords }
    }

    #[must_use]
    pub fn admits(&self, line: &str) -> bool {
        self.keywords.iter().any(|kw| line.contains(kw))
    }

    #[must_use]
    pub const fn keywords(&self) -> &'static [&'static str] {
        self.keywords
    }
}
