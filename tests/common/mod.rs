#![allow(dead_code)]

use std::fmt::Write;
use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the literal-guard binary.
#[macro_export]
macro_rules! literal_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("literal-guard"))
    };
}

/// A temporary project directory for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file, and its parent directories, relative to the fixture root.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn create_config(&self, content: &str) {
        self.create_file(".literal-guard.toml", content);
    }

    /// A stylesheet with one distinct hardcoded color per rule.
    pub fn create_stylesheet_with_colors(&self, relative_path: &str, count: usize) {
        let mut content = String::new();
        for i in 0..count {
            let _ = writeln!(content, ".c{i} {{ color: #{:06x}; }}", 0x10_0000 + i);
        }
        self.create_file(relative_path, &content);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Token document with one extra color per mode and extra spacing/radius values.
pub const TOKENS_JSON: &str = r##"{
  "modes": {
    "light": { "colors": { "brand": { "primary": "#0055FF" } } },
    "dark": { "colors": { "brand": { "primary": "#3377FF" } } }
  },
  "spacing": { "xs": "2px", "huge": "96px", "rem": "1rem" },
  "effects": { "radii": { "pill": "999px" } }
}"##;
