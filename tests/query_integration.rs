use std::str::FromStr;

use boardcore::models::board::{Board, UsbId};
use boardcore::models::package::Package;
use boardcore::models::platform::{Platform, PlatformRelease};
use boardcore::query::{list_platforms, search_platforms};
use boardcore::registry::{Registry, load_registry, save_registry};
use boardcore::session::SessionManager;
use boardcore::version::Version;
use tempfile::TempDir;

fn release(vendor: &str, architecture: &str, name: &str, version: &str) -> PlatformRelease {
    PlatformRelease {
        vendor: vendor.to_string(),
        architecture: architecture.to_string(),
        name: name.to_string(),
        version: Version::from_str(version).unwrap(),
        boards: Vec::new(),
    }
}

fn sample_registry() -> Registry {
    let mut uno_release = release("arduino", "avr", "Arduino AVR Boards", "1.8.3");
    uno_release.boards.push(Board {
        name: "Arduino Uno".to_string(),
        usb_ids: vec![UsbId {
            vid: "2341".to_string(),
            pid: "0043".to_string(),
        }],
    });

    let avr = Platform {
        vendor: "arduino".to_string(),
        name: "Arduino AVR Boards".to_string(),
        architecture: "avr".to_string(),
        manually_installed: false,
        releases: vec![
            release("arduino", "avr", "Arduino AVR Boards", "1.8.2"),
            uno_release,
        ],
    };

    let mut registry = Registry::new();
    registry.packages.insert(
        "arduino".to_string(),
        Package {
            name: "arduino".to_string(),
            maintainer: "Arduino LLC".to_string(),
            website_url: "https://www.arduino.cc/".to_string(),
            platforms: vec![avr],
        },
    );
    registry
        .installed
        .insert("arduino:avr".to_string(), Version::from_str("1.8.2").unwrap());
    registry
}

#[test]
fn snapshot_round_trips_through_disk() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("registry.json");

    let registry = sample_registry();
    save_registry(&registry, &path).unwrap();
    let loaded = load_registry(&path).unwrap();

    assert_eq!(loaded.packages, registry.packages);
    assert_eq!(loaded.installed, registry.installed);
}

#[test]
fn queries_work_over_a_loaded_snapshot() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("registry.json");
    save_registry(&sample_registry(), &path).unwrap();

    let mut sessions = SessionManager::new();
    let session = sessions.create_session(load_registry(&path).unwrap());

    let installed = list_platforms(&sessions, session, false, false).unwrap();
    assert_eq!(installed.len(), 1);
    assert_eq!(installed[0].to_string(), "arduino:avr@1.8.2");

    let updatable = list_platforms(&sessions, session, true, false).unwrap();
    assert_eq!(updatable.len(), 1);

    let by_board = search_platforms(&sessions, session, "uno", false).unwrap();
    assert_eq!(by_board[0].to_string(), "arduino:avr@1.8.3");

    let by_usb_id = search_platforms(&sessions, session, "2341:0043", false).unwrap();
    assert_eq!(by_usb_id[0].to_string(), "arduino:avr@1.8.3");

    let history = search_platforms(&sessions, session, "avr", true).unwrap();
    assert_eq!(
        history
            .iter()
            .map(|release| release.version.to_string())
            .collect::<Vec<_>>(),
        vec!["1.8.2", "1.8.3"]
    );
}
