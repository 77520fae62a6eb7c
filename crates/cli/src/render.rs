//! Plain-text rendering of dashboard, product, and sale output.

use std::fmt::Write;

use stockpilot_inventory::{DashboardMetrics, Product, ReorderSuggestion, SaleEvent, StockStatus};

pub const NO_SUGGESTIONS: &str = "No reorder suggestions at the moment. \
Your stock looks in order or sales history is limited.";

pub const NO_PRODUCTS: &str = "No products registered.";

pub fn dashboard(metrics: &DashboardMetrics, suggestions: &[ReorderSuggestion]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total products:        {}", metrics.total_products);
    let _ = writeln!(out, "Healthy stock:         {}", metrics.healthy_stock_count);
    let _ = writeln!(out, "Low stock:             {}", metrics.low_stock_count);
    let _ = writeln!(out, "Sales (last 30 days):  {}", metrics.last_30_day_sales);
    out.push('\n');
    out.push_str(&reorder_suggestions(suggestions));
    out
}

pub fn reorder_suggestions(suggestions: &[ReorderSuggestion]) -> String {
    if suggestions.is_empty() {
        return NO_SUGGESTIONS.to_string();
    }
    let mut out = String::from("Reorder suggestions:");
    for s in suggestions {
        let _ = write!(out, "\n- {}: {}", s.product_name, s.rationale);
    }
    out
}

pub fn products(products: &[Product], low_stock_threshold: u64) -> String {
    if products.is_empty() {
        return NO_PRODUCTS.to_string();
    }

    let name_width = products
        .iter()
        .map(|p| p.name().chars().count())
        .max()
        .unwrap_or(0)
        .max("Name".len());

    let mut out = format!(
        "{:<name_width$}  {:>8}  {:<7}  {:>10}  {:<10}  Description",
        "Name", "Quantity", "Status", "Price", "Last sold"
    );
    for p in products {
        let status = match p.stock_status(low_stock_threshold) {
            StockStatus::Low => "low",
            StockStatus::Healthy => "ok",
        };
        let last_sold = p
            .last_sold_date()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "Never".to_string());
        let _ = write!(
            out,
            "\n{:<name_width$}  {:>8}  {:<7}  {:>10.2}  {:<10}  {}",
            p.name(),
            p.quantity(),
            status,
            p.price(),
            last_sold,
            p.description().unwrap_or("-"),
        );
    }
    out
}

pub fn sale(sale: &SaleEvent, remaining: i64) -> String {
    format!(
        "Sold {} unit(s) of \"{}\". New stock: {remaining}.",
        sale.units(),
        sale.product_name()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use stockpilot_core::ProductId;

    fn product(id: &str, name: &str, quantity: i64) -> Product {
        Product::new(ProductId::new(id).unwrap(), name, quantity, 3.5).unwrap()
    }

    #[test]
    fn empty_suggestions_render_notice() {
        let text = dashboard(&DashboardMetrics::default(), &[]);
        assert!(text.starts_with("Total products:        0\n"));
        assert!(text.ends_with(NO_SUGGESTIONS));
    }

    #[test]
    fn suggestions_render_one_line_each() {
        let suggestion = ReorderSuggestion {
            product_id: ProductId::new("p1").unwrap(),
            product_name: "Widget".to_string(),
            current_quantity: 5,
            average_daily_consumption: 0.0,
            reorder_point: 0,
            suggested_reorder_quantity: None,
            is_critical: true,
            rationale: "Current stock: 5.".to_string(),
        };
        assert_eq!(
            reorder_suggestions(&[suggestion.clone(), suggestion]),
            "Reorder suggestions:\n- Widget: Current stock: 5.\n- Widget: Current stock: 5."
        );
    }

    #[test]
    fn product_listing_shows_status_price_and_last_sale() {
        let sold = product("p1", "Widget", 4)
            .with_description("Blue")
            .with_last_sold_date(Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap());
        let text = products(&[sold, product("p2", "Gadget", 40)], 10);

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("low"));
        assert!(lines[1].contains("3.50"));
        assert!(lines[1].contains("2024-06-01"));
        assert!(lines[1].ends_with("Blue"));
        assert!(lines[2].contains("ok"));
        assert!(lines[2].contains("Never"));
        assert!(lines[2].ends_with('-'));
    }

    #[test]
    fn empty_product_listing() {
        assert_eq!(products(&[], 10), NO_PRODUCTS);
    }
}
