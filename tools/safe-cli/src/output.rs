//! Output formatting for the CLI.

use console::style;
use safe_catalog::prelude::{CheckStatus, Product};

/// Output handler for CLI messages.
///
/// In JSON mode only [`Output::json`] and errors print anything.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Turn ANSI styling on or off for both streams.
    pub fn set_color(&self, enabled: bool) {
        console::set_colors_enabled(enabled);
        console::set_colors_enabled_stderr(enabled);
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Print a product listing, or JSON in JSON mode.
    pub fn products(&self, products: &[Product]) {
        if self.json {
            self.json(&products);
            return;
        }
        if products.is_empty() {
            self.info("No products found.");
            return;
        }

        let widths = [4, 28, 18, 14, 10, 8];
        self.table_row(&["ID", "NAME", "BRAND", "CATEGORY", "FLAG", "PRICE"], &widths);
        for product in products {
            let id = product.id.to_string();
            let price = format_price(product.price);
            self.table_row(
                &[
                    id.as_str(),
                    product.name.as_str(),
                    product.brand.as_deref().unwrap_or("-"),
                    product.category.as_deref().unwrap_or("-"),
                    product_flag(product),
                    price.as_str(),
                ],
                &widths,
            );
        }
        if self.verbose {
            self.info(&format!("{} product(s)", products.len()));
        }
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

fn product_flag(product: &Product) -> &'static str {
    if product.boycotted {
        "boycotted"
    } else if product.tunisian {
        "tunisian"
    } else {
        "-"
    }
}

/// Status badge for check outcomes.
pub fn status_badge(status: CheckStatus) -> String {
    match status {
        CheckStatus::Safe => style(status.as_str()).green().bold().to_string(),
        CheckStatus::Boycotted => style(status.as_str()).red().bold().to_string(),
        CheckStatus::NotFound => style(status.as_str()).dim().to_string(),
    }
}

/// Format an optional price.
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(price) => format!("{:.2} TND", price),
        None => "-".to_string(),
    }
}

/// Format a similarity score as a percentage.
pub fn format_score(score: f64) -> String {
    format!("{:.0}%", score * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(Some(2.5)), "2.50 TND");
        assert_eq!(format_price(None), "-");
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(0.85), "85%");
        assert_eq!(format_score(0.95), "95%");
    }
}
