//! Product output formatting.

use owo_colors::OwoColorize;
use partcat_api::models::{ProductKind, ProductRecord};
use serde::Serialize;

use super::helpers::truncate_str;

/// JSON output structure for the list command.
#[derive(Serialize)]
struct ListOutput<'a> {
    count: usize,
    products: &'a [&'a ProductRecord],
}

/// Formats products as JSON, full records included.
pub fn format_products_json(records: &[&ProductRecord]) -> Result<String, serde_json::Error> {
    let output = ListOutput {
        count: records.len(),
        products: records,
    };
    serde_json::to_string_pretty(&output)
}

/// Formats products as a table.
pub fn format_products_table(records: &[&ProductRecord], use_colors: bool) -> String {
    if records.is_empty() {
        return "No products found.\n".to_string();
    }

    let mut output = String::new();

    // Header
    let header = format!(
        "{:<14} {:<10} {:<16} {:<18} {}",
        "ID", "KIND", "PART NUMBER", "MANUFACTURER", "SUMMARY"
    );
    if use_colors {
        output.push_str(&format!("{}\n", header.dimmed()));
    } else {
        output.push_str(&header);
        output.push('\n');
    }

    // Rows
    for record in records {
        let part_number = attr_text(record, "part_number");
        let manufacturer = attr_text(record, "manufacturer");
        let line = format!(
            "{:<14} {:<10} {:<16} {:<18} {}",
            truncate_str(record.id(), 14),
            record.kind.as_str(),
            truncate_str(&part_number, 16),
            truncate_str(&manufacturer, 18),
            summary_line(record)
        );
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output
}

/// Formats one product as pretty JSON (show command).
pub fn format_product_details_json(record: &ProductRecord) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(record)
}

/// Formats one product as a human-readable block (show command).
pub fn format_product_details_table(record: &ProductRecord, use_colors: bool) -> String {
    let mut output = String::new();

    let title = if attr_text(record, "part_number").is_empty() {
        record.id().to_string()
    } else {
        attr_text(record, "part_number")
    };
    let label = if use_colors {
        "Product:".bold().to_string()
    } else {
        "Product:".to_string()
    };
    output.push_str(&format!("{label} {title}\n"));
    output.push_str(&format!("ID: {}\n", record.id()));
    output.push_str(&format!("Kind: {}\n", record.kind.label()));

    for (key, value) in &record.attrs {
        if key == "id" || key == "part_number" {
            continue;
        }
        output.push_str(&format!("{key}: {value}\n"));
    }

    output
}

/// A top-level attribute as display text, empty when absent.
fn attr_text(record: &ProductRecord, key: &str) -> String {
    record.get(key).map(|v| v.to_string()).unwrap_or_default()
}

/// The kind-appropriate headline attribute shown in the list table.
fn summary_line(record: &ProductRecord) -> String {
    let key = match record.kind {
        ProductKind::Motor => "rated_power",
        ProductKind::Drive => "output_power",
        ProductKind::RobotArm => "payload",
        ProductKind::Gearhead => "gear_ratio",
        ProductKind::Datasheet => "title",
        ProductKind::Unknown => return String::new(),
    };
    attr_text(record, key)
}
