use std::path::Path;

use super::*;

fn diag(category: Category, line: usize) -> Diagnostic {
    Diagnostic::new(Path::new("f"), line, category, "x", "x", "m")
}

#[test]
fn empty_audit_is_clean() {
    let audit = FileAudit::default();
    assert!(audit.is_clean());
    assert_eq!(audit.total(), 0);
    assert!(audit.get(Category::HardcodedColor).is_empty());
    assert!(!audit.has_parse_error());
}

#[test]
fn push_groups_by_category_and_keeps_order() {
    let mut audit = FileAudit::default();
    audit.push(diag(Category::NonStandardSpacing, 4));
    audit.push(diag(Category::HardcodedColor, 1));
    audit.push(diag(Category::NonStandardSpacing, 9));

    assert_eq!(audit.total(), 3);
    let lines: Vec<_> = audit
        .get(Category::NonStandardSpacing)
        .iter()
        .map(|d| d.line)
        .collect();
    assert_eq!(lines, vec![4, 9]);

    let order: Vec<_> = audit.iter().map(|d| d.category).collect();
    assert_eq!(
        order,
        vec![
            Category::HardcodedColor,
            Category::NonStandardSpacing,
            Category::NonStandardSpacing
        ]
    );
}

#[test]
fn scan_lines_numbers_from_one_and_skips_comments() {
    let classifier = LineClassifier::yaml();
    let detector = PatternDetector::legacy_yaml();
    let content = "# debug: yes\nname: app\nenabled: on\n";

    let audit = scan_lines(&classifier, &detector, Path::new("a.yaml"), content);

    let found = audit.get(Category::LegacyPattern);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].line, 3);
    assert_eq!(found[0].literal, "on");
}

#[test]
fn scan_lines_handles_crlf() {
    let classifier = LineClassifier::yaml();
    let detector = PatternDetector::legacy_yaml();
    let audit = scan_lines(
        &classifier,
        &detector,
        Path::new("a.yaml"),
        "a: 1\r\nb: no\r\n",
    );
    let found = audit.get(Category::LegacyPattern);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].line, 2);
    assert_eq!(found[0].source_line, "b: no");
}

#[test]
fn scan_lines_treats_bare_cr_as_line_break() {
    let classifier = LineClassifier::yaml();
    let detector = PatternDetector::legacy_yaml();
    let audit = scan_lines(
        &classifier,
        &detector,
        Path::new("a.yaml"),
        "a: 1\rb: yes\r",
    );
    let found = audit.get(Category::LegacyPattern);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].line, 2);
    assert_eq!(found[0].source_line, "b: yes");
}

#[test]
fn split_lines_matches_every_line_ending() {
    let lines: Vec<&str> = split_lines("a\nb\r\nc\rd").collect();
    assert_eq!(lines, vec!["a", "b", "c", "d"]);
    assert_eq!(split_lines("").count(), 0);
    assert_eq!(split_lines("x\r\r\n").collect::<Vec<_>>(), vec!["x", ""]);
}
