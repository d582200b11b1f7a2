//! Catalog edits. Each successful edit is written back to the catalog file.

use anyhow::{bail, Result};
use dialoguer::Confirm;
use safe_catalog::prelude::*;

use super::{AddArgs, AlternativeArgs, DeleteArgs};
use crate::context::Context;
use crate::output::format_score;

/// Run the add command.
pub fn add(args: AddArgs, ctx: &Context) -> Result<()> {
    let product = ctx.service.add_product(draft_from_args(args))?;
    ctx.save_catalog()?;

    if ctx.output.is_json() {
        ctx.output.json(&product);
        return Ok(());
    }
    ctx.output
        .success(&format!("Added '{}' with id {}", product.name, product.id));
    Ok(())
}

fn draft_from_args(args: AddArgs) -> NewProduct {
    let mut draft = NewProduct::new(args.name);
    if let Some(reason) = args.boycotted {
        draft = draft.boycotted(reason);
    }
    if args.tunisian {
        draft = draft.tunisian();
    }
    if let Some(description) = args.description {
        draft = draft.with_description(description);
    }
    if let Some(category) = args.category {
        draft = draft.with_category(category);
    }
    if let Some(brand) = args.brand {
        draft = draft.with_brand(brand);
    }
    if let Some(barcode) = args.barcode {
        draft = draft.with_barcode(barcode);
    }
    if let Some(image_url) = args.image_url {
        draft = draft.with_image_url(image_url);
    }
    if let Some(price) = args.price {
        draft = draft.with_price(price);
    }
    draft
}

/// Run the alternative command.
pub fn alternative(args: AlternativeArgs, ctx: &Context) -> Result<()> {
    let edge = ctx
        .service
        .add_alternative(args.boycotted, args.alternative, &args.reason, args.score)?;
    ctx.save_catalog()?;

    if ctx.output.is_json() {
        ctx.output.json(&edge);
        return Ok(());
    }
    ctx.output.success(&format!(
        "Product {} now recommended for {} ({})",
        edge.alternative_product,
        edge.boycotted_product,
        format_score(edge.similarity_score)
    ));
    Ok(())
}

/// Run the delete command.
pub fn delete(args: DeleteArgs, ctx: &Context) -> Result<()> {
    let Some(product) = ctx.service.get_product(args.id)? else {
        bail!("No product with id {}", args.id);
    };

    if !args.yes {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Delete '{}' and every alternative that references it?",
                product.name
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.info("Delete cancelled.");
            return Ok(());
        }
    }

    ctx.service.delete_product(product.id)?;
    ctx.save_catalog()?;

    if ctx.output.is_json() {
        ctx.output
            .json(&serde_json::json!({ "deleted": product.id, "name": product.name }));
        return Ok(());
    }
    ctx.output.success(&format!("Deleted '{}'", product.name));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn add_args(name: &str) -> AddArgs {
        AddArgs {
            name: name.to_string(),
            boycotted: None,
            tunisian: false,
            description: None,
            category: None,
            brand: None,
            barcode: None,
            image_url: None,
            price: None,
        }
    }

    #[test]
    fn test_draft_from_args() {
        let args = AddArgs {
            tunisian: true,
            category: Some("Food".to_string()),
            price: Some(4.5),
            ..add_args("Tunisian Olive Oil")
        };

        let expected = NewProduct::new("Tunisian Olive Oil")
            .tunisian()
            .with_category("Food")
            .with_price(4.5);
        assert_eq!(draft_from_args(args), expected);
    }

    #[test]
    fn test_boycott_reason_flag() {
        let args = AddArgs {
            boycotted: Some("reason".to_string()),
            ..add_args("Brand X")
        };

        let draft = draft_from_args(args);
        assert!(draft.boycotted);
        assert_eq!(draft.boycott_reason.as_deref(), Some("reason"));
    }
}
