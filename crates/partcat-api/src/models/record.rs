//! Catalog product records and entity kinds.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::value::AttrValue;

/// The set of entity kinds the catalog serves.
///
/// `Unknown` absorbs product types introduced on the server before this
/// build learned their schema. Such records still deserialize and display,
/// but the attribute catalog reports no filterable attributes for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductKind {
    /// Servo and stepper motors.
    Motor,
    /// Servo drives and inverters.
    Drive,
    /// Collaborative robot arms.
    RobotArm,
    /// Planetary and harmonic gearheads.
    Gearhead,
    /// Datasheet documents.
    Datasheet,
    /// A product type without an authored attribute schema.
    #[serde(other)]
    Unknown,
}

impl ProductKind {
    /// All kinds with an authored attribute schema, in display order.
    pub const CONCRETE: [ProductKind; 5] = [
        ProductKind::Motor,
        ProductKind::Drive,
        ProductKind::RobotArm,
        ProductKind::Gearhead,
        ProductKind::Datasheet,
    ];

    /// The wire name of this kind (matches the `product_type` field).
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductKind::Motor => "motor",
            ProductKind::Drive => "drive",
            ProductKind::RobotArm => "robot_arm",
            ProductKind::Gearhead => "gearhead",
            ProductKind::Datasheet => "datasheet",
            ProductKind::Unknown => "unknown",
        }
    }

    /// Human-readable label for table output.
    pub fn label(&self) -> &'static str {
        match self {
            ProductKind::Motor => "Motor",
            ProductKind::Drive => "Drive",
            ProductKind::RobotArm => "Robot Arm",
            ProductKind::Gearhead => "Gearhead",
            ProductKind::Datasheet => "Datasheet",
            ProductKind::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One catalog entity as a flat-plus-nested attribute mapping.
///
/// The entity kind is kept as a typed discriminant; every other attribute,
/// including the identifier, lives in the flattened map. Records are
/// immutable inputs to the view engine, which only ever derives new
/// collections from them.
///
/// # Example
///
/// ```
/// use partcat_api::models::{ProductKind, ProductRecord, Quantity};
///
/// let record = ProductRecord::new("m-100", ProductKind::Motor)
///     .with("manufacturer", "ACME")
///     .with("rated_power", Quantity::new(100.0, "W"));
///
/// assert_eq!(record.id(), "m-100");
/// assert!(record.get("rated_power").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Entity-kind discriminant.
    #[serde(rename = "product_type")]
    pub kind: ProductKind,

    /// All remaining attributes, keyed by name.
    #[serde(flatten)]
    pub attrs: BTreeMap<String, AttrValue>,
}

impl ProductRecord {
    /// Creates a record with just an identifier and kind.
    pub fn new(id: impl Into<String>, kind: ProductKind) -> Self {
        let mut attrs = BTreeMap::new();
        attrs.insert("id".to_string(), AttrValue::String(id.into()));
        Self { kind, attrs }
    }

    /// The record identifier, or an empty string for malformed records.
    pub fn id(&self) -> &str {
        self.attrs
            .get("id")
            .and_then(AttrValue::as_str)
            .unwrap_or_default()
    }

    /// Looks up a top-level attribute by name.
    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.attrs.get(key)
    }

    /// Returns the record with the given attribute set.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }
}
