use crate::error::{BoardcoreError, Result};
use crate::models::platform::PlatformRelease;
use crate::session::{SessionId, SessionManager};

/// List installed platform releases.
///
/// `updatable_only` keeps only platforms with a newer release than the
/// installed one; `all` switches to the latest release of every known
/// platform, installed or not. The two filters are mutually exclusive.
///
/// Output follows registry traversal order, one release per platform.
pub fn list_platforms(
    sessions: &SessionManager,
    session: SessionId,
    updatable_only: bool,
    all: bool,
) -> Result<Vec<PlatformRelease>> {
    let registry = sessions
        .resolve(session)
        .ok_or(BoardcoreError::InvalidSession(session))?
        .registry();

    if updatable_only && all {
        return Err(BoardcoreError::InvalidArgument(
            "can't use both updatable-only and all filters at the same time".to_string(),
        ));
    }

    let mut res = Vec::new();
    for package in registry.packages.values() {
        for platform in &package.platforms {
            if all {
                // A platform with an empty release history contributes
                // nothing, even here.
                if let Some(latest) = platform.latest_release() {
                    res.push(latest.clone());
                }
                continue;
            }

            let Some(installed) = registry.installed_release(platform) else {
                continue;
            };

            if updatable_only {
                // Updatable means a latest release exists and its
                // version differs from the installed one; no semantic
                // greater-than comparison.
                match platform.latest_release() {
                    None => continue,
                    Some(latest) if latest.version == installed.version => continue,
                    Some(_) => {}
                }
            }

            res.push(installed.clone());
        }
    }

    Ok(res)
}
