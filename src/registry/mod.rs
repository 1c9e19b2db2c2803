mod storage;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::package::Package;
use crate::models::platform::{Platform, PlatformRelease};
use crate::version::Version;

pub use storage::{load_registry, save_registry};

/// A loaded snapshot of the platform package index plus the derived
/// installed-release relation.
///
/// Read-only for the query layer; traversal order is stable within one
/// snapshot because packages are keyed in a BTreeMap.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Registry {
    pub version: u32,
    pub last_updated: DateTime<Utc>,
    pub packages: BTreeMap<String, Package>,
    /// Installed version per platform id (`vendor:architecture`).
    #[serde(default)]
    pub installed: BTreeMap<String, Version>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            version: 1,
            last_updated: Utc::now(),
            packages: BTreeMap::new(),
            installed: BTreeMap::new(),
        }
    }

    /// The installed release of a platform, absent when no version is
    /// installed. Never an error.
    pub fn installed_release<'a>(&self, platform: &'a Platform) -> Option<&'a PlatformRelease> {
        let version = self.installed.get(&platform.id())?;
        platform.release(version)
    }

    /// Platform releases whose boards manifest claims the given USB
    /// vendor/device id pair.
    ///
    /// Applies the same policy as the text search: manually installed
    /// platforms are not consulted, and only the latest release's
    /// manifest is checked.
    pub fn find_releases_with_vid_pid(&self, vid: &str, pid: &str) -> Vec<PlatformRelease> {
        let mut res = Vec::new();
        for package in self.packages.values() {
            for platform in &package.platforms {
                if platform.name.is_empty() || platform.manually_installed {
                    continue;
                }
                let Some(release) = platform.latest_release() else {
                    continue;
                };
                let provides = release
                    .boards
                    .iter()
                    .any(|board| board.usb_ids.iter().any(|id| id.matches(vid, pid)));
                if provides {
                    res.push(release.clone());
                }
            }
        }
        res
    }

    pub fn package_count(&self) -> usize {
        self.packages.len()
    }

    pub fn platform_count(&self) -> usize {
        self.packages
            .values()
            .map(|package| package.platforms.len())
            .sum()
    }

    pub fn installed_count(&self) -> usize {
        self.installed.len()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::fixtures;
    use std::str::FromStr;

    #[test]
    fn installed_release_resolves_the_recorded_version() {
        let registry = fixtures::sample_registry();
        let platform = &registry.packages["arduino"].platforms[0];
        let installed = registry.installed_release(platform).unwrap();
        assert_eq!(installed.version, Version::from_str("1.8.2").unwrap());
    }

    #[test]
    fn installed_release_is_absent_when_nothing_is_installed() {
        let registry = fixtures::sample_registry();
        let platform = &registry.packages["arduino"].platforms[1];
        assert!(registry.installed_release(platform).is_none());
    }

    #[test]
    fn vid_pid_lookup_finds_providing_release() {
        let registry = fixtures::sample_registry();
        let releases = registry.find_releases_with_vid_pid("2341", "0043");
        assert_eq!(releases.len(), 1);
        assert_eq!(releases[0].to_string(), "arduino:avr@1.8.3");
    }

    #[test]
    fn vid_pid_lookup_skips_manually_installed_platforms() {
        let registry = fixtures::sample_registry();
        // the sketchbook platform's board carries this id
        let releases = registry.find_releases_with_vid_pid("f055", "9800");
        assert!(releases.is_empty());
    }

    #[test]
    fn vid_pid_lookup_with_unknown_id_is_empty() {
        let registry = fixtures::sample_registry();
        assert!(registry.find_releases_with_vid_pid("dead", "beef").is_empty());
    }

    #[test]
    fn counts_cover_the_whole_snapshot() {
        let registry = fixtures::sample_registry();
        assert_eq!(registry.package_count(), 4);
        assert_eq!(registry.platform_count(), 5);
        assert_eq!(registry.installed_count(), 2);
    }
}
