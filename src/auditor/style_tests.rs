use std::fmt::Write;
use std::path::Path;

use super::*;
use crate::diagnostic::Category;

fn audit(content: &str) -> FileAudit {
    StyleAuditor::default().audit(Path::new("Button.tsx"), content)
}

#[test]
fn clean_component_has_no_issues() {
    let content = "\
import React from 'react';
export const Button = () => (
  <button style={{ padding: '8px 16px', color: '#ffffff' }} />
);
";
    assert!(audit(content).is_clean());
}

#[test]
fn reports_each_category() {
    let content = "\
.card {
  color: #ff0000;
  margin: 13px;
  border-radius: 6px;
}
";
    let result = audit(content);
    assert_eq!(result.get(Category::HardcodedColor).len(), 1);
    assert_eq!(result.get(Category::NonStandardSpacing).len(), 1);
    assert_eq!(result.get(Category::NonStandardRadius).len(), 1);
    assert_eq!(result.get(Category::HardcodedColor)[0].line, 2);
    assert_eq!(result.get(Category::NonStandardRadius)[0].line, 4);
}

#[test]
fn comment_and_import_lines_are_skipped() {
    let content = "\
// legacy: #123456
/* padding: 13px */
import '#abcdef';
require('#abcdef');
";
    assert!(audit(content).is_clean());
}

#[test]
fn trailing_comment_is_not_skipped() {
    let result = audit("const x = 1; // #123456\n");
    assert_eq!(result.get(Category::HardcodedColor).len(), 1);
}

#[test]
fn many_violations_in_one_file_are_all_kept() {
    let mut content = String::new();
    for i in 0..15 {
        let _ = writeln!(content, "  color: #a0a0{i:02x};");
    }
    assert_eq!(audit(&content).get(Category::HardcodedColor).len(), 15);
}

#[test]
fn custom_allowed_values_are_respected() {
    let auditor = StyleAuditor::new(AllowedValues::empty());
    let result = auditor.audit(Path::new("a.css"), "color: #ffffff;\n");
    assert_eq!(result.get(Category::HardcodedColor).len(), 1);
    assert!(auditor.allowed().colors().is_empty());
}

#[test]
fn auditing_is_deterministic() {
    let content = "color: #123456;\npadding: 7px;\n";
    assert_eq!(audit(content), audit(content));
}
