use crate::commands::release_table;
use crate::config::BoardcoreConfig;
use crate::error::Result;
use crate::query;
use crate::registry;
use crate::session::SessionManager;
use log::debug;

pub struct ListCommand<'a> {
    config: &'a BoardcoreConfig,
}

impl<'a> ListCommand<'a> {
    pub fn new(config: &'a BoardcoreConfig) -> Result<Self> {
        Ok(Self { config })
    }

    pub fn execute(&self, updatable_only: bool, all: bool, json: bool) -> Result<()> {
        let registry = registry::load_registry(&self.config.registry_path())?;
        debug!(
            "loaded registry with {} packages, {} platforms",
            registry.package_count(),
            registry.platform_count()
        );

        let mut sessions = SessionManager::new();
        let session = sessions.create_session(registry);
        let releases = query::list_platforms(&sessions, session, updatable_only, all)?;

        if json {
            println!("{}", serde_json::to_string_pretty(&releases)?);
            return Ok(());
        }

        if releases.is_empty() {
            if all {
                println!("No platforms found in the registry");
            } else if updatable_only {
                println!("All installed platforms are up to date");
            } else {
                println!("No platforms installed");
                println!("Use 'boardcore search <query>' to find installable platforms");
            }
            return Ok(());
        }

        println!("{}", release_table(&releases));
        Ok(())
    }
}
