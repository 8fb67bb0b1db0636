use std::collections::HashMap;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

use super::*;

struct MockFileSystem {
    files: HashMap<PathBuf, String>,
    current_dir: PathBuf,
}

impl MockFileSystem {
    fn new() -> Self {
        Self {
            files: HashMap::new(),
            current_dir: PathBuf::from("/project"),
        }
    }

    fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.insert(path.into(), content.to_string());
        self
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| Error::new(ErrorKind::NotFound, "file not found"))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        Ok(self.current_dir.clone())
    }
}

#[test]
fn returns_default_when_no_config_found() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let result = loader.load().unwrap();

    assert_eq!(result.config, Config::default());
    assert_eq!(result.source, None);
}

#[test]
fn discovers_local_config() {
    let fs = MockFileSystem::new().with_file("/project/.bandchart.toml", "[layout]\ncolumns = 4\n");
    let loader = FileConfigLoader::with_fs(fs);
    let result = loader.load().unwrap();

    assert_eq!(result.config.layout.columns, 4);
    assert_eq!(result.source, Some(PathBuf::from("/project/.bandchart.toml")));
}

#[test]
fn loads_explicit_path() {
    let fs = MockFileSystem::new().with_file("/etc/chart.toml", "order = \"label\"\n");
    let loader = FileConfigLoader::with_fs(fs);
    let result = loader.load_from_path(Path::new("/etc/chart.toml")).unwrap();

    assert_eq!(result.config.order, crate::dataset::SeriesOrder::Label);
}

#[test]
fn missing_explicit_path_is_a_read_error() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let err = loader.load_from_path(Path::new("/nope.toml")).unwrap_err();

    assert!(matches!(err, ChartError::FileRead { ref path, .. } if path == Path::new("/nope.toml")));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let fs = MockFileSystem::new().with_file("/project/.bandchart.toml", "[layout\n");
    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();
    assert!(matches!(err, ChartError::TomlParse(_)));
}

#[test]
fn invalid_values_fail_validation() {
    let fs = MockFileSystem::new().with_file("/project/.bandchart.toml", "[layout]\ncolumns = 0\n");
    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();
    assert!(matches!(err, ChartError::Config(_)));
}
