//! Attribute value shapes shared by every product kind.
//!
//! Catalog records are heterogeneous: a motor's `rated_power` is a
//! measurement with a unit, a drive's `fieldbus` is a list of protocol
//! names, and `dimensions` is a nested mapping. [`AttrValue`] models that
//! union; the cache crate's view engine dispatches on it.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single measurement with a unit label.
///
/// # Example
///
/// ```
/// use partcat_api::models::Quantity;
///
/// let power = Quantity::new(100.0, "W");
/// assert_eq!(power.value, 100.0);
/// assert_eq!(power.to_string(), "100 W");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    /// The numeric magnitude.
    pub value: f64,

    /// The unit label (e.g., "W", "Nm", "rpm").
    pub unit: String,
}

impl Quantity {
    /// Creates a new quantity.
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", format_number(self.value), self.unit)
    }
}

/// A bounded quantity with a unit label.
///
/// Ranges take part in numeric comparison and sorting through their
/// [`midpoint`](QuantityRange::midpoint); two ranges with the same midpoint
/// are indistinguishable to numeric comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantityRange {
    /// Lower bound.
    pub min: f64,

    /// Upper bound.
    pub max: f64,

    /// The unit label.
    pub unit: String,
}

impl QuantityRange {
    /// Creates a new range.
    pub fn new(min: f64, max: f64, unit: impl Into<String>) -> Self {
        Self {
            min,
            max,
            unit: unit.into(),
        }
    }

    /// Arithmetic mean of `min` and `max`.
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

impl fmt::Display for QuantityRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{} {}",
            format_number(self.min),
            format_number(self.max),
            self.unit
        )
    }
}

/// An attribute value as stored on a catalog record.
///
/// Deserialization is untagged, and the variant order encodes the
/// shape-dispatch priority: lists are recognized before quantity objects,
/// quantity objects before ranges, and ranges before plain nested objects.
/// An object carrying both `value` and `min` therefore resolves as a
/// [`Quantity`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// Explicit null. Treated as "absent" by the view engine, same as a
    /// missing key.
    Null,

    /// Plain boolean scalar.
    Bool(bool),

    /// Plain numeric scalar.
    Number(f64),

    /// Plain string scalar.
    String(String),

    /// Ordered sequence of values (e.g., supported fieldbus protocols).
    List(Vec<AttrValue>),

    /// A `{value, unit}` measurement.
    Quantity(Quantity),

    /// A `{min, max, unit}` bounded measurement.
    Range(QuantityRange),

    /// A nested mapping of sub-attributes (e.g., physical dimensions).
    Object(BTreeMap<String, AttrValue>),
}

impl AttrValue {
    /// Returns true for the explicit-null shape.
    pub fn is_null(&self) -> bool {
        matches!(self, AttrValue::Null)
    }

    /// Returns the string scalar, if this is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the plain numeric scalar, if this is one.
    ///
    /// Quantities and ranges are deliberately not coerced here; shape-aware
    /// callers handle those themselves.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttrValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the boolean scalar, if this is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the list elements, if this is a list.
    pub fn as_list(&self) -> Option<&[AttrValue]> {
        match self {
            AttrValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the nested mapping, if this is an object.
    pub fn as_object(&self) -> Option<&BTreeMap<String, AttrValue>> {
        match self {
            AttrValue::Object(map) => Some(map),
            _ => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Null => Ok(()),
            AttrValue::Bool(b) => write!(f, "{}", b),
            AttrValue::Number(n) => f.write_str(&format_number(*n)),
            AttrValue::String(s) => f.write_str(s),
            AttrValue::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
            AttrValue::Quantity(q) => write!(f, "{}", q),
            AttrValue::Range(r) => write!(f, "{}", r),
            AttrValue::Object(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Bool(b)
    }
}

impl From<f64> for AttrValue {
    fn from(n: f64) -> Self {
        AttrValue::Number(n)
    }
}

impl From<i64> for AttrValue {
    fn from(n: i64) -> Self {
        AttrValue::Number(n as f64)
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::String(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::String(s)
    }
}

impl From<Quantity> for AttrValue {
    fn from(q: Quantity) -> Self {
        AttrValue::Quantity(q)
    }
}

impl From<QuantityRange> for AttrValue {
    fn from(r: QuantityRange) -> Self {
        AttrValue::Range(r)
    }
}

impl From<Vec<AttrValue>> for AttrValue {
    fn from(items: Vec<AttrValue>) -> Self {
        AttrValue::List(items)
    }
}

impl From<BTreeMap<String, AttrValue>> for AttrValue {
    fn from(map: BTreeMap<String, AttrValue>) -> Self {
        AttrValue::Object(map)
    }
}

/// Formats a number the way record values are displayed and matched:
/// integral values without a trailing `.0`.
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_deserialize() {
        let json = r#"{"value": 100.0, "unit": "W"}"#;
        let value: AttrValue = serde_json::from_str(json).unwrap();
        assert_eq!(value, AttrValue::Quantity(Quantity::new(100.0, "W")));
    }

    #[test]
    fn test_range_deserialize() {
        let json = r#"{"min": 24.0, "max": 48.0, "unit": "V"}"#;
        let value: AttrValue = serde_json::from_str(json).unwrap();
        assert_eq!(value, AttrValue::Range(QuantityRange::new(24.0, 48.0, "V")));
    }

    #[test]
    fn test_quantity_wins_over_range_when_both_match() {
        // An object with both `value` and `min` resolves by guard priority:
        // the quantity shape is checked first.
        let json = r#"{"value": 10.0, "min": 0.0, "max": 20.0, "unit": "Nm"}"#;
        let value: AttrValue = serde_json::from_str(json).unwrap();
        assert!(matches!(value, AttrValue::Quantity(_)));
    }

    #[test]
    fn test_plain_object_deserialize() {
        let json = r#"{"width": 40.0, "height": 60.0}"#;
        let value: AttrValue = serde_json::from_str(json).unwrap();
        let map = value.as_object().expect("expected object shape");
        assert_eq!(map.get("width"), Some(&AttrValue::Number(40.0)));
    }

    #[test]
    fn test_list_deserialize() {
        let json = r#"["EtherCAT", "PROFINET"]"#;
        let value: AttrValue = serde_json::from_str(json).unwrap();
        let items = value.as_list().expect("expected list shape");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].as_str(), Some("EtherCAT"));
    }

    #[test]
    fn test_null_deserialize() {
        let value: AttrValue = serde_json::from_str("null").unwrap();
        assert!(value.is_null());
    }

    #[test]
    fn test_scalar_deserialize() {
        let n: AttrValue = serde_json::from_str("42").unwrap();
        assert_eq!(n.as_number(), Some(42.0));

        let b: AttrValue = serde_json::from_str("true").unwrap();
        assert_eq!(b.as_bool(), Some(true));

        let s: AttrValue = serde_json::from_str(r#""IP54""#).unwrap();
        assert_eq!(s.as_str(), Some("IP54"));
    }

    #[test]
    fn test_serde_roundtrip_nested() {
        let mut dims = BTreeMap::new();
        dims.insert("width".to_string(), AttrValue::Number(40.0));
        dims.insert(
            "weight".to_string(),
            AttrValue::Quantity(Quantity::new(1.2, "kg")),
        );
        let value = AttrValue::Object(dims);

        let json = serde_json::to_string(&value).unwrap();
        let back: AttrValue = serde_json::from_str(&json).unwrap();
        assert_eq!(value, back);
    }

    #[test]
    fn test_midpoint() {
        let range = QuantityRange::new(0.0, 1000.0, "V");
        assert_eq!(range.midpoint(), 500.0);

        let range = QuantityRange::new(-10.0, 10.0, "C");
        assert_eq!(range.midpoint(), 0.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(AttrValue::Number(2020.0).to_string(), "2020");
        assert_eq!(AttrValue::Number(0.97).to_string(), "0.97");
        assert_eq!(AttrValue::Bool(true).to_string(), "true");
        assert_eq!(AttrValue::Null.to_string(), "");
        assert_eq!(
            AttrValue::Quantity(Quantity::new(150.0, "W")).to_string(),
            "150 W"
        );
        assert_eq!(
            AttrValue::Range(QuantityRange::new(24.0, 48.0, "V")).to_string(),
            "24..48 V"
        );
        assert_eq!(
            AttrValue::List(vec!["a".into(), "b".into()]).to_string(),
            "a, b"
        );
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(10.0), "10");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(1.5), "1.5");
    }
}
