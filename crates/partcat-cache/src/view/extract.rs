//! Dotted-path value extraction over semi-structured records.

use partcat_api::models::{AttrValue, ProductRecord};

/// Reads a possibly-nested attribute value out of a record.
///
/// The path is split on `.` and walked segment by segment. `None` is
/// returned as soon as any step is missing, explicitly null, or not a
/// nested mapping; malformed records therefore extract as absent rather
/// than failing.
///
/// The shape of the final value is not interpreted here. Filter evaluation
/// and sorting each apply their own shape-aware logic on top of the raw
/// extracted value.
pub fn extract<'a>(record: &'a ProductRecord, path: &str) -> Option<&'a AttrValue> {
    let mut segments = path.split('.');
    let mut current = record.get(segments.next()?)?;

    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }

    if current.is_null() {
        None
    } else {
        Some(current)
    }
}

/// Reduces a value to a comparable number, if it has one.
///
/// Plain numbers are themselves, quantities contribute their magnitude,
/// and ranges reduce to their midpoint. The midpoint reduction means two
/// ranges with the same midpoint are indistinguishable to numeric
/// comparison; that is intended. Everything else has no numeric reading.
pub fn numeric_value(value: &AttrValue) -> Option<f64> {
    match value {
        AttrValue::Number(n) => Some(*n),
        AttrValue::Quantity(q) => Some(q.value),
        AttrValue::Range(r) => Some(r.midpoint()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use partcat_api::models::{ProductKind, Quantity, QuantityRange};
    use std::collections::BTreeMap;

    fn motor() -> ProductRecord {
        let mut dims = BTreeMap::new();
        dims.insert("width".to_string(), AttrValue::Number(40.0));
        dims.insert(
            "weight".to_string(),
            AttrValue::Quantity(Quantity::new(1.2, "kg")),
        );

        ProductRecord::new("m-1", ProductKind::Motor)
            .with("manufacturer", "ACME")
            .with("rated_power", Quantity::new(100.0, "W"))
            .with("dimensions", AttrValue::Object(dims))
            .with("deprecated", AttrValue::Null)
    }

    #[test]
    fn test_extract_top_level() {
        let record = motor();
        assert_eq!(
            extract(&record, "manufacturer").and_then(AttrValue::as_str),
            Some("ACME")
        );
    }

    #[test]
    fn test_extract_nested() {
        let record = motor();
        assert_eq!(
            extract(&record, "dimensions.width"),
            Some(&AttrValue::Number(40.0))
        );
        assert_eq!(
            extract(&record, "dimensions.weight"),
            Some(&AttrValue::Quantity(Quantity::new(1.2, "kg")))
        );
    }

    #[test]
    fn test_extract_missing_segment() {
        let record = motor();
        assert_eq!(extract(&record, "dimensions.depth"), None);
        assert_eq!(extract(&record, "nope"), None);
        assert_eq!(extract(&record, "nope.deeper"), None);
    }

    #[test]
    fn test_extract_through_non_object() {
        // Walking "into" a scalar is absence, not an error.
        let record = motor();
        assert_eq!(extract(&record, "manufacturer.name"), None);
        assert_eq!(extract(&record, "rated_power.value.unit"), None);
    }

    #[test]
    fn test_extract_null_is_absent() {
        let record = motor();
        assert_eq!(extract(&record, "deprecated"), None);
    }

    #[test]
    fn test_numeric_value_shapes() {
        assert_eq!(numeric_value(&AttrValue::Number(42.0)), Some(42.0));
        assert_eq!(
            numeric_value(&AttrValue::Quantity(Quantity::new(150.0, "W"))),
            Some(150.0)
        );
        assert_eq!(
            numeric_value(&AttrValue::Range(QuantityRange::new(0.0, 1000.0, "V"))),
            Some(500.0)
        );
    }

    #[test]
    fn test_numeric_value_non_numeric() {
        assert_eq!(numeric_value(&AttrValue::String("IP54".to_string())), None);
        assert_eq!(numeric_value(&AttrValue::Bool(true)), None);
        assert_eq!(numeric_value(&AttrValue::List(vec![1.0.into()])), None);
        assert_eq!(numeric_value(&AttrValue::Null), None);
    }
}
