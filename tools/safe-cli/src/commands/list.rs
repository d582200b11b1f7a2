//! Catalog listings.

use anyhow::{bail, Result};

use super::{ListArgs, ListCommand, ShowArgs};
use crate::context::Context;
use crate::output::format_price;

/// Run the list command.
pub fn run(args: ListArgs, ctx: &Context) -> Result<()> {
    let (title, products) = match args.command.unwrap_or(ListCommand::All) {
        ListCommand::All => ("All products".to_string(), ctx.service.list_products()?),
        ListCommand::Boycotted => (
            "Boycotted products".to_string(),
            ctx.service.list_boycotted()?,
        ),
        ListCommand::Tunisian { category: None } => (
            "Tunisian products".to_string(),
            ctx.service.list_tunisian()?,
        ),
        ListCommand::Tunisian {
            category: Some(category),
        } => {
            let products = ctx.service.list_tunisian_by_category(&category)?;
            (format!("Tunisian products in {}", category), products)
        }
    };

    ctx.output.header(&title);
    ctx.output.products(&products);
    Ok(())
}

/// Run the show command.
pub fn show(args: ShowArgs, ctx: &Context) -> Result<()> {
    let Some(product) = ctx.service.get_product(args.id)? else {
        bail!("No product with id {}", args.id);
    };

    if ctx.output.is_json() {
        ctx.output.json(&product);
        return Ok(());
    }

    ctx.output.header(&product.name);
    ctx.output.kv("id", &product.id.to_string());
    ctx.output.kv("boycotted", &product.boycotted.to_string());
    if let Some(ref reason) = product.boycott_reason {
        ctx.output.kv("reason", reason);
    }
    ctx.output.kv("tunisian", &product.tunisian.to_string());
    for (key, value) in [
        ("brand", &product.brand),
        ("category", &product.category),
        ("barcode", &product.barcode),
        ("description", &product.description),
        ("image", &product.image_url),
    ] {
        if let Some(value) = value {
            ctx.output.kv(key, value);
        }
    }
    if product.price.is_some() {
        ctx.output.kv("price", &format_price(product.price));
    }

    let edges = ctx.service.store().find_alternatives_for_boycotted(product.id)?;
    if !edges.is_empty() {
        ctx.output.header("Alternatives");
        for edge in edges {
            ctx.output.list_item(&format!(
                "#{} -> product {} ({:.2}): {}",
                edge.id, edge.alternative_product, edge.similarity_score, edge.reason
            ));
        }
    }
    Ok(())
}
