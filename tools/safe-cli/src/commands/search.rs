//! Text search over the catalog.

use anyhow::Result;
use safe_catalog::prelude::SearchField;

use super::SearchArgs;
use crate::context::Context;

/// Run the search command.
pub fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let field = SearchField::from(args.field);
    let products = ctx.service.search(&args.term, field)?;

    ctx.output.header(&format!(
        "Products matching '{}' (name or {})",
        args.term,
        field.as_str()
    ));
    ctx.output.products(&products);
    Ok(())
}
