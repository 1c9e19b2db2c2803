use crate::error::{BoardcoreError, Result};
use crate::models::platform::PlatformRelease;
use crate::session::{SessionId, SessionManager};

use super::matcher::{contains_ci, equals_ci, parse_vid_pid};

/// Search platform releases matching a free-text query or a USB
/// `vid:pid` pair.
///
/// Returns the latest release of every matching platform, or each
/// match's full history in registry order with `all_versions`.
pub fn search_platforms(
    sessions: &SessionManager,
    session: SessionId,
    query: &str,
    all_versions: bool,
) -> Result<Vec<PlatformRelease>> {
    let registry = sessions
        .resolve(session)
        .ok_or(BoardcoreError::InvalidSession(session))?
        .registry();

    // USB id queries resolve through the boards manifest lookup and
    // never reach the text rules.
    if let Some((vid, pid)) = parse_vid_pid(query) {
        return Ok(registry.find_releases_with_vid_pid(vid, pid));
    }

    let mut res = Vec::new();
    for package in registry.packages.values() {
        for platform in &package.platforms {
            // Users can install platforms manually in the local
            // hardware folder; search operates only on platforms that
            // came through the managed registry.
            if platform.name.is_empty() || platform.manually_installed {
                continue;
            }

            let Some(latest) = platform.latest_release() else {
                continue;
            };

            let matched = contains_ci(&platform.name, query)
                || contains_ci(&platform.architecture, query)
                || equals_ci(&platform.to_string(), query)
                || contains_ci(&package.name, query)
                || contains_ci(&package.maintainer, query)
                || contains_ci(&package.website_url, query)
                // last resort: the latest release's boards manifest
                || latest.boards.iter().any(|board| contains_ci(&board.name, query));

            if matched {
                if all_versions {
                    res.extend(platform.releases.iter().cloned());
                } else {
                    res.push(latest.clone());
                }
            }
        }
    }

    Ok(res)
}
