use serde::{Deserialize, Serialize};

/// One board declared by a release's boards manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub name: String,
    #[serde(default)]
    pub usb_ids: Vec<UsbId>,
}

/// USB vendor/product identifier pair, four hex digits each.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsbId {
    pub vid: String,
    pub pid: String,
}

impl UsbId {
    /// Registry indexes conventionally carry uppercase hex ids while
    /// queries arrive lowercase, so the comparison ignores case.
    pub fn matches(&self, vid: &str, pid: &str) -> bool {
        self.vid.eq_ignore_ascii_case(vid) && self.pid.eq_ignore_ascii_case(pid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usb_id_matching_ignores_case() {
        let id = UsbId {
            vid: "2341".to_string(),
            pid: "004D".to_string(),
        };
        assert!(id.matches("2341", "004d"));
        assert!(!id.matches("2341", "0043"));
    }
}
