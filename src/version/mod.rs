use crate::error::{BoardcoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A platform release version: dotted numeric components plus an
/// optional pre-release suffix (`1.8.3`, `2.0.0-rc.2`).
///
/// Ordering compares components left to right, then pre-release
/// suffixes. Serialized as the plain version string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    components: Vec<u32>,
    pre_release: Option<String>,
}

impl FromStr for Version {
    type Err = BoardcoreError;

    fn from_str(s: &str) -> Result<Self> {
        let (numeric, pre_release) = match s.split_once('-') {
            Some((numeric, pre)) if !numeric.is_empty() && !pre.is_empty() => {
                (numeric, Some(pre.to_string()))
            }
            Some(_) => return Err(BoardcoreError::InvalidVersionFormat(s.to_string())),
            None => (s, None),
        };

        if numeric.is_empty() {
            return Err(BoardcoreError::InvalidVersionFormat(s.to_string()));
        }

        let components = numeric
            .split('.')
            .map(|part| {
                part.parse::<u32>()
                    .map_err(|_| BoardcoreError::InvalidVersionFormat(s.to_string()))
            })
            .collect::<Result<Vec<u32>>>()?;

        Ok(Self {
            components,
            pre_release,
        })
    }
}

impl TryFrom<String> for Version {
    type Error = BoardcoreError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Version> for String {
    fn from(version: Version) -> Self {
        version.to_string()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let numeric = self
            .components
            .iter()
            .map(|component| component.to_string())
            .collect::<Vec<_>>()
            .join(".");
        match &self.pre_release {
            Some(pre) => write!(f, "{numeric}-{pre}"),
            None => write!(f, "{numeric}"),
        }
    }
}
