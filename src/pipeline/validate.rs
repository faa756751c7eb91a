// src/pipeline/validate.rs

use std::sync::Arc;

use crate::error::Result;
use crate::models::Config;
use crate::services::Fetcher;

use super::run_sections;

/// Validate configuration, then check the catalog can be loaded.
pub async fn run_validate(config: &Config, fetcher: Arc<dyn Fetcher>) -> Result<()> {
    log::info!("Validating configuration...");

    if let Err(e) = config.validate() {
        log::error!("Config validation failed: {e}");
        return Err(e);
    }
    log::info!("Config OK");
    log::info!("    base: {}", config.loader.base);
    log::info!("    candidates: {}", config.loader.candidates.len());
    log::info!(
        "    timeout: {}",
        config
            .loader
            .timeout_secs
            .map_or_else(|| "transport default".to_string(), |s| format!("{s}s"))
    );

    let sections = run_sections(config, fetcher).await?;
    let total: usize = sections.iter().map(|(_, count)| count).sum();
    log::info!("Catalog OK: {} sections, {} items", sections.len(), total);
    for (name, count) in &sections {
        log::info!("    {name}: {count}");
    }

    Ok(())
}
