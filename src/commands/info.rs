use crate::config::BoardcoreConfig;
use crate::error::Result;
use crate::registry;
use chrono::Local;
use colored::*;

pub struct InfoCommand<'a> {
    config: &'a BoardcoreConfig,
}

impl<'a> InfoCommand<'a> {
    pub fn new(config: &'a BoardcoreConfig) -> Result<Self> {
        Ok(Self { config })
    }

    pub fn execute(&self) -> Result<()> {
        let registry_path = self.config.registry_path();

        if !registry_path.exists() {
            println!("{} No registry index found", "✗".red());
            println!(
                "\n{}: Place a registry snapshot at {}",
                "Solution".yellow().bold(),
                registry_path.display().to_string().cyan()
            );
            return Ok(());
        }

        let registry = registry::load_registry(&registry_path)?;
        let metadata = std::fs::metadata(&registry_path)?;

        println!("Registry Information:");
        println!("  Location: {}", registry_path.display());
        println!("  Size: {} KB", metadata.len() / 1024);
        println!(
            "  Last updated: {}",
            registry
                .last_updated
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
        );
        println!("  Packages: {}", registry.package_count());
        println!("  Platforms: {}", registry.platform_count());
        println!("  Installed platforms: {}", registry.installed_count());

        Ok(())
    }
}
