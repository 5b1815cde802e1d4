//! Attribute catalog output formatting.

use owo_colors::OwoColorize;
use partcat_cache::view::AttrDescriptor;

/// Formats attribute descriptors as JSON.
pub fn format_attrs_json(descriptors: &[AttrDescriptor]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(descriptors)
}

/// Formats attribute descriptors as a table.
pub fn format_attrs_table(descriptors: &[AttrDescriptor], use_colors: bool) -> String {
    if descriptors.is_empty() {
        return "No attributes known for this kind.\n".to_string();
    }

    let mut output = String::new();

    let header = format!(
        "{:<26} {:<22} {:<8} {:<8} {}",
        "KEY", "DISPLAY NAME", "SHAPE", "UNIT", "KINDS"
    );
    if use_colors {
        output.push_str(&format!("{}\n", header.dimmed()));
    } else {
        output.push_str(&header);
        output.push('\n');
    }

    for descriptor in descriptors {
        let kinds: Vec<&str> = descriptor.kinds.iter().map(|k| k.as_str()).collect();
        let line = format!(
            "{:<26} {:<22} {:<8} {:<8} {}",
            descriptor.key,
            descriptor.display_name,
            descriptor.shape.as_str(),
            descriptor.unit.unwrap_or("-"),
            kinds.join(", ")
        );
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output
}
