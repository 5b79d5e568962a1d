mod rule;

pub use rule::{
    LiteralKind, Rule, RuleId, Suppression, design_token_rules, legacy_yaml_rules,
};

use std::path::Path;

use crate::classifier::{KeyContext, QuoteParity, Suppressor};
use crate::diagnostic::Diagnostic;
use crate::registry::AllowedValues;

/// Runs a rule table over single lines.
pub struct PatternDetector {
    rules: Vec<Rule>,
    allowed: AllowedValues,
    quoted: Box<dyn Suppressor>,
    key: Box<dyn Suppressor>,
}

impl PatternDetector {
    /// Detector with the quote-parity and key-context heuristics and no allowed values.
    #[must_use]
    pub fn new(rules: Vec<Rule>) -> Self {
        Self {
            rules,
            allowed: AllowedValues::empty(),
            quoted: Box::new(QuoteParity),
            key: Box::new(KeyContext),
        }
    }

    #[must_use]
    pub fn legacy_yaml() -> Self {
        Self::new(legacy_yaml_rules().to_vec())
    }

    #[must_use]
    pub fn design_tokens(allowed: AllowedValues) -> Self {
        Self::new(design_token_rules().to_vec()).with_allowed(allowed)
    }

    #[must_use]
    pub fn with_allowed(mut self, allowed: AllowedValues) -> Self {
        self.allowed = allowed;
        self
    }

    /// Replace the in-string heuristic, e.g. with a lexer-backed predicate.
    #[must_use]
    pub fn with_quote_suppressor(mut self, suppressor: impl Suppressor + 'static) -> Self {
        self.quoted = Box::new(suppressor);
        self
    }

    /// Replace the mapping-key heuristic.
    #[must_use]
    pub fn with_key_suppressor(mut self, suppressor: impl Suppressor + 'static) -> Self {
        self.key = Box::new(suppressor);
        self
    }

    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    #[must_use]
    pub const fn allowed(&self) -> &AllowedValues {
        &self.allowed
    }

    /// All unsuppressed, disallowed matches on `line`, grouped by rule in table order.
    #[must_use]
    pub fn detect(&self, path: &Path, line: &str, lineno: usize) -> Vec<Diagnostic> {
        let mut found = Vec::new();

        for rule in &self.rules {
            if rule.gate.is_some_and(|gate| !gate.admits(line)) {
                continue;
            }

            for caps in rule.pattern.captures_iter(line) {
                let Some(m) = caps.get(rule.group) else {
                    continue;
                };
                let span = m.range();

                if rule.bare && touches_quote(line, span.start, span.end) {
                    continue;
                }
                if rule.suppression.skip_if_quoted && self.quoted.suppress(line, span.clone()) {
                    continue;
                }
                if rule.suppression.skip_if_key && self.key.suppress(line, span.clone()) {
                    continue;
                }

                let literal = match rule.literal {
                    LiteralKind::Verbatim => m.as_str().to_string(),
                    // Digit runs too long for u64 keep their text; no allowed set holds them.
                    LiteralKind::Pixels => m
                        .as_str()
                        .parse::<u64>()
                        .map_or_else(|_| format!("{}px", m.as_str()), |px| format!("{px}px")),
                };

                if rule.check_allowed && self.allowed.is_allowed(rule.category, &literal) {
                    continue;
                }

                let message = rule.render_message(&literal);
                found.push(Diagnostic::new(
                    path,
                    lineno,
                    rule.category,
                    literal,
                    line,
                    message,
                ));
            }
        }

        found
    }
}

fn touches_quote(line: &str, start: usize, end: usize) -> bool {
    let is_quote = |c: char| c == '\'' || c == '"';
    let before = line[..start].chars().next_back().is_some_and(is_quote);
    let after = line[end..].chars().next().is_some_and(is_quote);
    before || after
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
