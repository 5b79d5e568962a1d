use std::sync::LazyLock;

use regex::Regex;

use crate::classifier::KeywordGate;
use crate::diagnostic::Category;

/// Stable identifier of a detection rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RuleId {
    BareBoolean,
    UnprefixedOctal,
    HexColor,
    PixelSpacing,
    PixelRadius,
}

impl RuleId {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BareBoolean => "bare-boolean",
            Self::UnprefixedOctal => "unprefixed-octal",
            Self::HexColor => "hex-color",
            Self::PixelSpacing => "pixel-spacing",
            Self::PixelRadius => "pixel-radius",
        }
    }
}

/// Which contextual heuristics may discard a match of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Suppression {
    pub skip_if_quoted: bool,
    pub skip_if_key: bool,
}

impl Suppression {
    pub const NONE: Self = Self {
        skip_if_quoted: false,
        skip_if_key: false,
    };
    pub const VALUES_ONLY: Self = Self {
        skip_if_quoted: true,
        skip_if_key: true,
    };
}

/// How the captured text becomes the reported literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    /// Report the capture verbatim.
    Verbatim,
    /// Capture is a digit run; report it as `<n>px`.
    Pixels,
}

/// One detection rule. Rules are data: the detector interprets every field.
#[derive(Debug, Clone)]
pub struct Rule {
    pub id: RuleId,
    pub category: Category,
    pub pattern: Regex,
    /// Capture group holding the literal (0 = whole match).
    pub group: usize,
    pub suppression: Suppression,
    /// The rule only runs on lines this gate admits.
    pub gate: Option<KeywordGate>,
    /// Reject matches directly touching a quote character on either side.
    pub bare: bool,
    /// Consult the allowed-value registry before reporting.
    pub check_allowed: bool,
    pub literal: LiteralKind,
    /// Message with a single `{}` slot for the literal.
    pub message: &'static str,
}

impl Rule {
    #[must_use]
    pub fn render_message(&self, literal: &str) -> String {
        self.message.replacen("{}", literal, 1)
    }
}

fn compile(pattern: &str) -> Regex {
    // SAFETY: every pattern is a string literal in this module and covered by tests
    Regex::new(pattern).expect("valid rule pattern")
}

static LEGACY_YAML: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule {
            id: RuleId::BareBoolean,
            category: Category::LegacyPattern,
            pattern: compile(r"(?i)\b(?:yes|no|on|off|true|false)\b"),
            group: 0,
            suppression: Suppression::VALUES_ONLY,
            gate: None,
            bare: true,
            check_allowed: false,
            literal: LiteralKind::Verbatim,
            message: "Bare boolean-like value '{}': in YAML 1.2 only `true`/`false` are booleans. \
                      If you intend a boolean, use `true` or `false`. If a string, quote it.",
        },
        Rule {
            id: RuleId::UnprefixedOctal,
            category: Category::LegacyPattern,
            pattern: compile(r"\b0[0-7]+\b"),
            group: 0,
            suppression: Suppression::VALUES_ONLY,
            gate: None,
            bare: false,
            check_allowed: false,
            literal: LiteralKind::Verbatim,
            message: "Octal literal '{}': YAML 1.2 requires the `0o` prefix (e.g. `0o755`). \
                      YAML 1.1 style `0755` is parsed as decimal in 1.2.",
        },
    ]
});

static DESIGN_TOKENS: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule {
            id: RuleId::HexColor,
            category: Category::HardcodedColor,
            pattern: compile(r"#(?:[0-9a-fA-F]{6}|[0-9a-fA-F]{3})"),
            group: 0,
            suppression: Suppression::NONE,
            gate: None,
            bare: false,
            check_allowed: true,
            literal: LiteralKind::Verbatim,
            message: "Hardcoded color '{}': use a design token instead",
        },
        Rule {
            id: RuleId::PixelSpacing,
            category: Category::NonStandardSpacing,
            pattern: compile(r"([0-9]+)px"),
            group: 1,
            suppression: Suppression::NONE,
            gate: Some(KeywordGate::SPACING),
            bare: false,
            check_allowed: true,
            literal: LiteralKind::Pixels,
            message: "Non-standard spacing '{}': use a spacing token",
        },
        Rule {
            id: RuleId::PixelRadius,
            category: Category::NonStandardRadius,
            pattern: compile(r#"(?:border-radius|borderRadius)\s*:\s*['"]?([0-9]+)px"#),
            group: 1,
            suppression: Suppression::NONE,
            gate: Some(KeywordGate::RADIUS),
            bare: false,
            check_allowed: true,
            literal: LiteralKind::Pixels,
            message: "Non-standard border radius '{}': use a border radius token",
        },
    ]
});

/// Rules flagging YAML 1.1 constructs whose meaning changed in YAML 1.2.
#[must_use]
pub fn legacy_yaml_rules() -> &'static [Rule] {
    &LEGACY_YAML
}

/// Rules flagging hardcoded style values that should be design tokens.
#[must_use]
pub fn design_token_rules() -> &'static [Rule] {
    &DESIGN_TOKENS
}

#[cfg(test)]
#[path = "rule_tests.rs"]
mod tests;
