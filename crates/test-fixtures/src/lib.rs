//! Test fixtures for scdrift: JSON stream scenarios and scripted classifiers.
//!
//! Scenarios describe prediction outcomes segment by segment; the scripted
//! classifiers turn those outcomes into real instances so the trainer can be
//! driven through exact correct/incorrect sequences.

pub mod classifiers;
pub mod scenario;

use serde::de::DeserializeOwned;
use std::path::PathBuf;

pub use classifiers::{
    echo_instance, factory, CallCounts, ConstantClassifier, CountingClassifier, EchoClassifier,
    FailingClassifier, FailurePoint, MajorityClassifier,
};
pub use scenario::{Segment, StreamScenario};

/// Root directory of the fixture files.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a stream scenario by name from `fixtures/streams/`.
pub fn load_scenario(name: &str) -> StreamScenario {
    load_fixture(&format!("streams/{name}.json"))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read fixture dir {}: {}", dir.display(), e))
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    files
}
