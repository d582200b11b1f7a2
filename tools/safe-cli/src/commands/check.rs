//! Compliance checks and name/barcode queries.

use anyhow::Result;
use safe_catalog::prelude::*;

use super::{CheckArgs, ExistsArgs, NameArgs};
use crate::context::Context;
use crate::output::{format_price, format_score, status_badge};

/// Run the check command.
pub fn run(args: CheckArgs, ctx: &Context) -> Result<()> {
    let response = match (args.barcode, args.name) {
        (Some(barcode), _) => ctx.service.check_by_barcode(&barcode)?,
        (None, Some(name)) => ctx.service.check_by_name(&name)?,
        (None, None) => ProductCheckResponse::not_found(),
    };

    if ctx.output.is_json() {
        ctx.output.json(&response);
        return Ok(());
    }

    print_response(&response, ctx);
    Ok(())
}

fn print_response(response: &ProductCheckResponse, ctx: &Context) {
    ctx.output.header(&format!(
        "{} {}",
        status_badge(response.status),
        response.product_name.as_deref().unwrap_or("Unknown product")
    ));

    match response.status {
        CheckStatus::Boycotted => ctx.output.warn(&response.message),
        CheckStatus::Safe => ctx.output.success(&response.message),
        CheckStatus::NotFound => ctx.output.info(&response.message),
    }

    if let Some(id) = response.product_id {
        ctx.output.kv("id", &id.to_string());
    }
    if let Some(ref brand) = response.brand {
        ctx.output.kv("brand", brand);
    }
    if let Some(ref reason) = response.boycott_reason {
        ctx.output.kv("reason", reason);
    }

    if response.suggestions.is_empty() {
        return;
    }

    ctx.output.header("Local alternatives");
    for suggestion in &response.suggestions {
        ctx.output.list_item(&format!(
            "{} [{}] {} ({})",
            suggestion.name,
            format_score(suggestion.similarity_score),
            format_price(suggestion.price),
            suggestion.reason
        ));
    }
}

/// Run the reason command.
pub fn reason(args: NameArgs, ctx: &Context) -> Result<()> {
    let reason = ctx.service.get_boycott_reason(&args.name)?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "name": args.name,
            "boycotted": reason.is_some(),
            "reason": reason,
        }));
        return Ok(());
    }

    match reason {
        Some(reason) => ctx.output.warn(&format!("{}: {}", args.name, reason)),
        None => ctx
            .output
            .info(&format!("{} is not on the boycott list", args.name)),
    }
    Ok(())
}

/// Run the exists command.
pub fn exists(args: ExistsArgs, ctx: &Context) -> Result<()> {
    let (key, value, exists) = match (args.barcode, args.name) {
        (Some(barcode), _) => {
            let exists = ctx.service.barcode_exists(&barcode)?;
            ("barcode", barcode, exists)
        }
        (None, Some(name)) => {
            let exists = ctx.service.product_exists(&name)?;
            ("name", name, exists)
        }
        (None, None) => return Ok(()),
    };

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ key: value, "exists": exists }));
        return Ok(());
    }

    if exists {
        ctx.output.success(&format!("{} '{}' is in the catalog", key, value));
    } else {
        ctx.output.info(&format!("{} '{}' is not in the catalog", key, value));
    }
    Ok(())
}
