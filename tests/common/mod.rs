#![allow(dead_code)]

use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the bandchart binary.
#[macro_export]
macro_rules! bandchart {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("bandchart"))
    };
}

/// Two regions over three days, every band well formed.
pub const TWO_REGIONS: &str = r#"{ "series": [
    { "id": "CA", "label": "California", "observations": [
        { "date": "2020-03-02", "central": 1.2, "low": 0.9, "high": 1.5 },
        { "date": "2020-03-03", "central": 1.1, "low": 0.8, "high": 1.4 },
        { "date": "2020-03-04", "central": 0.9, "low": 0.7, "high": 1.2 }
    ] },
    { "id": "NY", "label": "New York", "observations": [
        { "date": "2020-03-02", "central": 2.0, "low": 1.6, "high": 2.4 },
        { "date": "2020-03-03", "central": 1.8, "low": 1.5, "high": 2.2 },
        { "date": "2020-03-04", "central": 1.5, "low": 1.2, "high": 1.9 }
    ] }
] }"#;

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates `.bandchart.toml` in the temp directory.
    pub fn create_config(&self, content: &str) {
        self.create_file(".bandchart.toml", content);
    }

    /// Writes `data.json` with the two-region dataset.
    pub fn create_two_regions(&self) {
        self.create_file("data.json", TWO_REGIONS);
    }

    /// Writes a list-form dataset where each entry is `(id, [(date, central, low, high)])`.
    pub fn create_dataset(&self, relative_path: &str, series: &[(&str, &[(&str, f64, f64, f64)])]) {
        let mut content = String::from("{ \"series\": [\n");
        for (i, (id, observations)) in series.iter().enumerate() {
            let entries: Vec<String> = observations
                .iter()
                .map(|(date, central, low, high)| {
                    format!(
                        r#"{{ "date": "{date}", "central": {central}, "low": {low}, "high": {high} }}"#
                    )
                })
                .collect();
            let separator = if i + 1 < series.len() { "," } else { "" };
            let _ = writeln!(
                content,
                r#"  {{ "id": "{id}", "observations": [{}] }}{separator}"#,
                entries.join(", ")
            );
        }
        content.push_str("] }\n");
        self.create_file(relative_path, &content);
    }

    /// Reads a file from the temp directory.
    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }

    pub fn join(&self, relative_path: &str) -> PathBuf {
        self.dir.path().join(relative_path)
    }
}
