use crate::commands::release_table;
use crate::config::BoardcoreConfig;
use crate::error::Result;
use crate::query;
use crate::registry;
use crate::session::SessionManager;
use colored::*;
use log::debug;

pub struct SearchCommand<'a> {
    config: &'a BoardcoreConfig,
}

impl<'a> SearchCommand<'a> {
    pub fn new(config: &'a BoardcoreConfig) -> Result<Self> {
        Ok(Self { config })
    }

    pub fn execute(&self, query: &str, all_versions: bool, json: bool) -> Result<()> {
        let registry = registry::load_registry(&self.config.registry_path())?;
        debug!(
            "searching {} platforms for {query:?}",
            registry.platform_count()
        );

        let mut sessions = SessionManager::new();
        let session = sessions.create_session(registry);
        let releases = query::search_platforms(&sessions, session, query, all_versions)?;

        if json {
            println!("{}", serde_json::to_string_pretty(&releases)?);
            return Ok(());
        }

        if releases.is_empty() {
            println!(
                "{} No platforms matching '{}'",
                "✗".red(),
                query.bright_blue()
            );
            println!("\n{}", "Try these:".yellow().bold());
            println!(
                "  - Search by board name, e.g. {}",
                "'boardcore search uno'".cyan()
            );
            println!(
                "  - Search by architecture, e.g. {}",
                "'boardcore search avr'".cyan()
            );
            println!(
                "  - Search by USB ids, e.g. {}",
                "'boardcore search 2341:0043'".cyan()
            );
            return Ok(());
        }

        let result_count = releases.len();
        println!(
            "Found {} platform release{} matching '{}':\n",
            result_count.to_string().cyan(),
            if result_count == 1 { "" } else { "s" },
            query.bright_blue()
        );
        println!("{}", release_table(&releases));
        Ok(())
    }
}
