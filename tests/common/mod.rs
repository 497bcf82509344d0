//! Shared testing utilities for mkcol CLI tests.

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated property object location.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    location: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create an empty location without any of the expected folders.
    pub fn empty() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let location = root.path().join("test-properties");
        fs::create_dir_all(&location).expect("Failed to create property object location");
        Self { root, location }
    }

    /// Create a location with `Sales/`, `Lettings/`, the output folder and `domains.yml`.
    pub fn new(domains: &[&str]) -> Self {
        let ctx = Self::empty();
        ctx.create_dir("Sales");
        ctx.create_dir("Lettings");
        ctx.create_dir("generated-postman-collections");
        ctx.write_domains(domains);
        ctx
    }

    /// Path to the property object location.
    pub fn location(&self) -> &Path {
        &self.location
    }

    /// Path to the output directory.
    pub fn output_dir(&self) -> PathBuf {
        self.location.join("generated-postman-collections")
    }

    /// Build a command invoking the compiled `mkcol` binary against this location.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("mkcol").expect("Failed to locate mkcol binary");
        cmd.arg(&self.location).env_remove("RUST_LOG");
        cmd
    }

    pub fn create_dir(&self, relative: &str) {
        fs::create_dir_all(self.location.join(relative)).expect("Failed to create directory");
    }

    pub fn write_file(&self, relative: &str, content: &str) {
        let path = self.location.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(path, content).expect("Failed to write file");
    }

    pub fn write_domains(&self, domains: &[&str]) {
        let content: String = domains.iter().map(|d| format!("- {}\n", d)).collect();
        let content = if content.is_empty() { "[]\n".to_string() } else { content };
        self.write_file("domains.yml", &content);
    }

    /// Raw text of a generated collection.
    pub fn read_output(&self, file_name: &str) -> String {
        fs::read_to_string(self.output_dir().join(file_name))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", file_name, e))
    }

    /// Parsed generated collection.
    pub fn read_collection(&self, file_name: &str) -> Value {
        serde_json::from_str(&self.read_output(file_name)).expect("Output should be valid JSON")
    }

    /// Sorted names of all files in the output directory.
    pub fn output_files(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.output_dir())
            .expect("Failed to list output directory")
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }
}
