pub mod info;
pub mod list;
pub mod search;

use crate::models::platform::PlatformRelease;
use comfy_table::Table;

/// Render a release sequence as the shared ID / Version / Name table.
pub(crate) fn release_table(releases: &[PlatformRelease]) -> Table {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_BORDERS_ONLY);
    table.set_header(vec!["ID", "Version", "Name"]);

    for release in releases {
        table.add_row(vec![
            format!("{}:{}", release.vendor, release.architecture),
            release.version.to_string(),
            release.name.clone(),
        ]);
    }

    table
}
