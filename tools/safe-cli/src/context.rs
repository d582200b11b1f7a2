//! CLI execution context.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use safe_catalog::prelude::*;

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Where the configuration came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Catalog snapshot file.
    pub catalog_path: PathBuf,
    /// Compliance operations over the loaded catalog.
    pub service: ComplianceService,
    /// The catalog came from the built-in demo, not from the file.
    pub demo_seeded: bool,
    store: Arc<MemoryCatalog>,
}

impl Context {
    /// Load configuration, then the catalog it points at.
    pub fn load(
        config_path: Option<&str>,
        catalog_override: Option<&str>,
        output: Output,
    ) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => {
                let path = PathBuf::from(path);
                (CliConfig::load(&path)?, Some(path))
            }
            None => match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            },
        };
        output.set_color(config.output.color);

        let catalog_path =
            resolve_path(&cwd, catalog_override.unwrap_or(config.catalog.path.as_str()));
        let (store, demo_seeded) = load_catalog(&catalog_path, config.catalog.seed_demo)?;
        let service = ComplianceService::new(store.clone());

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
            catalog_path,
            service,
            demo_seeded,
            store,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    match CliConfig::load(&config_path) {
                        Ok(config) => return Some((config, config_path)),
                        Err(e) => tracing::warn!("ignoring {}: {:#}", config_path.display(), e),
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Write the current catalog back to its snapshot file.
    pub fn save_catalog(&self) -> Result<()> {
        save_catalog(&self.store, &self.catalog_path)
    }
}

/// Resolve a path relative to the working directory.
fn resolve_path(cwd: &Path, path: &str) -> PathBuf {
    if Path::new(path).is_absolute() {
        PathBuf::from(path)
    } else {
        cwd.join(path)
    }
}

/// Open the catalog file, falling back to the demo catalog when it holds no
/// products. Returns whether the demo was used.
pub fn load_catalog(path: &Path, seed_demo: bool) -> Result<(Arc<MemoryCatalog>, bool)> {
    let store = Arc::new(open_catalog(path)?);
    if !seed_demo {
        return Ok((store, false));
    }

    let report = CatalogSeed::demo()
        .apply_if_empty(&ComplianceService::new(store.clone()))
        .context("Failed to seed the demo catalog")?;
    if !report.skipped {
        tracing::debug!(products = report.products, "demo catalog loaded");
    }
    Ok((store, !report.skipped))
}

/// Read a catalog snapshot; a missing file is an empty catalog.
pub fn open_catalog(path: &Path) -> Result<MemoryCatalog> {
    if !path.exists() {
        return Ok(MemoryCatalog::new());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
    CatalogSnapshot::parse(&content, DocumentFormat::from_path(path))
        .and_then(CatalogSnapshot::restore)
        .with_context(|| format!("Failed to load catalog: {}", path.display()))
}

/// Write a catalog snapshot, creating parent directories as needed.
pub fn save_catalog(store: &MemoryCatalog, path: &Path) -> Result<()> {
    let content = CatalogSnapshot::capture(store)
        .render(DocumentFormat::from_path(path))
        .context("Failed to serialize catalog")?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write catalog file: {}", path.display()))
}
