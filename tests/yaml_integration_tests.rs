//! Integration tests for the `yaml` command.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn yaml_clean_file_succeeds() {
    let fixture = TestFixture::new();
    fixture.create_file("app.yaml", "name: app\nreplicas: 3\n");

    literal_guard!()
        .current_dir(fixture.path())
        .args(["--no-config", "yaml", "app.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("YAML 1.2 Check: app.yaml"))
        .stdout(predicate::str::contains("✓ YAML syntax valid (1 document found)"))
        .stdout(predicate::str::contains("✓ No YAML 1.1 legacy patterns detected"));
}

#[test]
fn yaml_legacy_patterns_warn_but_succeed() {
    let fixture = TestFixture::new();
    fixture.create_file(
        "deploy.yaml",
        "# enabled: yes\nstatus: yes\nname: \"yes\"\nyes: \"some value\"\nmode: 0755\nother: 0o755\n",
    );

    let output = literal_guard!()
        .current_dir(fixture.path())
        .args(["--no-config", "yaml", "deploy.yaml"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("YAML 1.1 Legacy Patterns (2 found)"));
    assert!(stdout.contains("Line 2:"));
    assert!(stdout.contains("Line 5:"));
    assert!(stdout.contains("0755"));
    assert!(!stdout.contains("Line 3:"));
    assert!(!stdout.contains("Line 4:"));
    assert!(!stdout.contains("Line 6:"));
}

#[test]
fn yaml_parse_error_short_circuits_and_fails() {
    let fixture = TestFixture::new();
    fixture.create_file("bad.yaml", "enabled: yes\nlist: [1, 2\n");

    literal_guard!()
        .current_dir(fixture.path())
        .args(["--no-config", "yaml", "bad.yaml"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("✗ YAML parse failed"))
        .stdout(predicate::str::contains("Legacy Patterns").not());
}

#[test]
fn yaml_multiple_documents_are_counted() {
    let fixture = TestFixture::new();
    fixture.create_file("multi.yaml", "a: 1\n---\nb: 2\n---\nc: 3\n");

    literal_guard!()
        .current_dir(fixture.path())
        .args(["--no-config", "yaml", "multi.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(3 documents found)"));
}

#[test]
fn yaml_missing_file_fails_without_stopping_others() {
    let fixture = TestFixture::new();
    fixture.create_file("ok.yaml", "a: 1\n");

    literal_guard!()
        .current_dir(fixture.path())
        .args(["--no-config", "yaml", "missing.yaml", "ok.yaml"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("File not found: missing.yaml"))
        .stdout(predicate::str::contains("YAML 1.2 Check: ok.yaml"))
        .stdout(predicate::str::contains("2 files checked, 1 valid, 1 failed"));
}

#[test]
fn yaml_directory_argument_expands() {
    let fixture = TestFixture::new();
    fixture.create_file("k8s/a.yaml", "a: on\n");
    fixture.create_file("k8s/b.yml", "b: 1\n");
    fixture.create_file("k8s/notes.txt", "c: [\n");

    literal_guard!()
        .current_dir(fixture.path())
        .args(["--no-config", "yaml", "k8s"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 files checked"))
        .stdout(predicate::str::contains("1 legacy pattern warnings"));
}

#[test]
fn yaml_json_output() {
    let fixture = TestFixture::new();
    fixture.create_file("a.yaml", "flag: off\n");

    let output = literal_guard!()
        .current_dir(fixture.path())
        .args(["--no-config", "yaml", "a.yaml", "--format", "json"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["files"][0]["status"], "valid");
    assert_eq!(json["files"][0]["documents"], 1);
    assert_eq!(json["files"][0]["diagnostics"][0]["literal"], "off");
    assert_eq!(json["files"][0]["diagnostics"][0]["line"], 1);
}

#[test]
fn yaml_requires_a_file_argument() {
    literal_guard!().args(["yaml"]).assert().code(2);
}
