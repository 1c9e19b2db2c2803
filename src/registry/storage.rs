// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::{BoardcoreError, Result};
use crate::registry::Registry;
use std::fs;
use std::path::Path;

/// Load a registry snapshot from a file
pub fn load_registry(path: &Path) -> Result<Registry> {
    if !path.exists() {
        return Err(BoardcoreError::RegistryNotFound(
            path.display().to_string(),
        ));
    }

    let contents = fs::read_to_string(path)?;
    let registry: Registry = serde_json::from_str(&contents)
        .map_err(|e| BoardcoreError::InvalidRegistry(e.to_string()))?;
    Ok(registry)
}

/// Save a registry snapshot to a file
pub fn save_registry(registry: &Registry, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(registry)?;

    // Write to temporary file first for atomic operation
    let temp_path = path.with_extension("tmp");
    if temp_path.exists() {
        fs::remove_file(&temp_path)?;
    }
    fs::write(&temp_path, json)?;
    fs::rename(&temp_path, path)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardcoreError;
    use crate::test::fixtures;
    use tempfile::TempDir;

    #[test]
    fn loading_a_missing_index_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("registry.json");
        let err = load_registry(&path).unwrap_err();
        assert!(matches!(err, BoardcoreError::RegistryNotFound(_)));
    }

    #[test]
    fn loading_a_corrupt_index_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("registry.json");
        fs::write(&path, "{ not json").unwrap();
        let err = load_registry(&path).unwrap_err();
        assert!(matches!(err, BoardcoreError::InvalidRegistry(_)));
    }

    #[test]
    fn snapshot_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("registry.json");

        let registry = fixtures::sample_registry();
        save_registry(&registry, &path).unwrap();

        let loaded = load_registry(&path).unwrap();
        assert_eq!(loaded.version, registry.version);
        assert_eq!(loaded.packages, registry.packages);
        assert_eq!(loaded.installed, registry.installed);
    }
}
