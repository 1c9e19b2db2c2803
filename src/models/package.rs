use crate::models::platform::Platform;
use serde::{Deserialize, Serialize};

/// A vendor/maintainer grouping of one or more platforms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub name: String,
    #[serde(default)]
    pub maintainer: String,
    #[serde(default)]
    pub website_url: String,
    #[serde(default)]
    pub platforms: Vec<Platform>,
}
