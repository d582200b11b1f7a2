//! Load seed data into the catalog.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use safe_catalog::prelude::*;

use super::SeedArgs;
use crate::context::{save_catalog, Context};

/// Run the seed command.
pub fn run(args: SeedArgs, ctx: &Context) -> Result<()> {
    let seed = match args.from.as_deref() {
        Some(path) => read_seed(&ctx.cwd.join(path))?,
        None => CatalogSeed::demo(),
    };

    // A demo catalog loaded in place of the file was never saved, so start over.
    let report = if args.force || ctx.demo_seeded {
        let store = Arc::new(MemoryCatalog::new());
        let report = seed
            .apply(&ComplianceService::new(store.clone()))
            .context("Seed data rejected")?;
        save_catalog(&store, &ctx.catalog_path)?;
        report
    } else {
        let report = seed
            .apply_if_empty(&ctx.service)
            .context("Seed data rejected")?;
        if !report.skipped {
            ctx.save_catalog()?;
        }
        report
    };

    if ctx.output.is_json() {
        ctx.output.json(&report);
        return Ok(());
    }

    if report.skipped {
        ctx.output
            .warn("Catalog already has products. Use --force to replace it.");
    } else {
        ctx.output.success(&format!(
            "Seeded {} products and {} alternatives into {}",
            report.products,
            report.alternatives,
            ctx.catalog_path.display()
        ));
    }
    Ok(())
}

fn read_seed(path: &Path) -> Result<CatalogSeed> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file: {}", path.display()))?;
    CatalogSeed::parse(&content, DocumentFormat::from_path(path))
        .with_context(|| format!("Failed to parse seed file: {}", path.display()))
}
