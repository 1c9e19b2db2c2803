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

use crate::models::board::Board;
use crate::version::Version;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A vendor-specific hardware architecture offered by a package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    pub vendor: String,
    pub name: String,
    pub architecture: String,
    /// Placed directly into the user's hardware folder, bypassing the
    /// managed registry. Not searchable.
    #[serde(default)]
    pub manually_installed: bool,
    /// Release history in the order provided by the registry index.
    #[serde(default)]
    pub releases: Vec<PlatformRelease>,
}

impl Platform {
    /// Identity string shared with the installed relation, `vendor:architecture`.
    pub fn id(&self) -> String {
        self.to_string()
    }

    /// The highest release by version ordering, if any release exists.
    pub fn latest_release(&self) -> Option<&PlatformRelease> {
        self.releases
            .iter()
            .max_by(|a, b| a.version.cmp(&b.version))
    }

    pub fn release(&self, version: &Version) -> Option<&PlatformRelease> {
        self.releases.iter().find(|r| r.version == *version)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.vendor, self.architecture)
    }
}

/// One versioned, installable instance of a platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformRelease {
    pub vendor: String,
    pub architecture: String,
    pub name: String,
    pub version: Version,
    /// Boards declared by this release. Manifests belong to one release
    /// and may differ across the history.
    #[serde(default)]
    pub boards: Vec<Board>,
}

impl fmt::Display for PlatformRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}@{}", self.vendor, self.architecture, self.version)
    }
}
