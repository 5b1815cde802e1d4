//! Static attribute metadata per entity kind.
//!
//! Descriptors are authored here, per kind, and never derived from
//! instance data. The one computed schema is the mixed view: the
//! intersection of every concrete kind's descriptor list, for the
//! "show everything" catalog page.

use std::collections::HashMap;

use partcat_api::models::ProductKind;
use serde::Serialize;
use strsim::levenshtein;

/// Maximum Levenshtein distance to consider an attribute key a suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// Value shape of an attribute, as presented to UI layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttrShape {
    /// Plain string.
    String,
    /// Plain number or `{value, unit}` measurement.
    Number,
    /// Plain boolean.
    Boolean,
    /// `{min, max, unit}` bounded measurement.
    Range,
    /// Ordered list of scalars.
    Array,
    /// Nested mapping of sub-attributes.
    Object,
}

impl AttrShape {
    /// The shape's lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            AttrShape::String => "string",
            AttrShape::Number => "number",
            AttrShape::Boolean => "boolean",
            AttrShape::Range => "range",
            AttrShape::Array => "array",
            AttrShape::Object => "object",
        }
    }
}

/// Describes one filterable/sortable attribute of an entity kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttrDescriptor {
    /// Dotted-path key into the record.
    pub key: &'static str,

    /// Human-readable name for presentation.
    pub display_name: &'static str,

    /// Value shape.
    pub shape: AttrShape,

    /// Kinds this attribute applies to.
    pub kinds: Vec<ProductKind>,

    /// Unit label, for shaped numerics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<&'static str>,
}

impl AttrDescriptor {
    fn new(key: &'static str, display_name: &'static str, shape: AttrShape) -> Self {
        Self {
            key,
            display_name,
            shape,
            kinds: Vec::new(),
            unit: None,
        }
    }

    fn with_unit(mut self, unit: &'static str) -> Self {
        self.unit = Some(unit);
        self
    }
}

/// Selects which attribute schema to load: one concrete kind, or the
/// mixed view across all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindSelector {
    /// The mixed view: attributes common to every concrete kind.
    All,
    /// One kind's declared schema.
    Only(ProductKind),
}

/// Returns the ordered attribute descriptors for a kind selection.
///
/// For a concrete kind this is its declared list in authored order. For
/// [`KindSelector::All`] it is the intersection of every concrete kind's
/// list by key, preserving the first kind's ordering among surviving keys,
/// with each descriptor's `kinds` widened to the kinds sharing that key.
/// Kinds without an authored schema yield an empty list; callers treat
/// that as "no known filterable attributes", not an error.
pub fn attributes_for(selector: KindSelector) -> Vec<AttrDescriptor> {
    match selector {
        KindSelector::All => mixed_attributes(),
        KindSelector::Only(kind) => {
            let mut list = declared_attributes(kind);
            for descriptor in &mut list {
                descriptor.kinds = vec![kind];
            }
            list
        }
    }
}

/// Looks up one descriptor by key.
pub fn find_attribute(selector: KindSelector, key: &str) -> Option<AttrDescriptor> {
    attributes_for(selector)
        .into_iter()
        .find(|descriptor| descriptor.key == key)
}

/// Finds the closest known attribute key to `query`, for "did you mean"
/// hints when a filter or sort references an unknown attribute.
///
/// Returns the best candidate if its edit distance is within the
/// threshold and it is not an exact match.
pub fn suggest_attribute(selector: KindSelector, query: &str) -> Option<String> {
    let query_lower = query.to_lowercase();

    let (best_match, best_distance) = attributes_for(selector)
        .into_iter()
        .map(|descriptor| {
            let distance = levenshtein(&query_lower, &descriptor.key.to_lowercase());
            (descriptor.key.to_string(), distance)
        })
        .min_by_key(|(_, distance)| *distance)?;

    if best_distance > 0 && best_distance <= MAX_SUGGESTION_DISTANCE {
        Some(best_match)
    } else {
        None
    }
}

/// The declared descriptor list for one kind, without `kinds` tagging.
fn declared_attributes(kind: ProductKind) -> Vec<AttrDescriptor> {
    match kind {
        ProductKind::Motor => motor_attributes(),
        ProductKind::Drive => drive_attributes(),
        ProductKind::RobotArm => robot_arm_attributes(),
        ProductKind::Gearhead => gearhead_attributes(),
        ProductKind::Datasheet => datasheet_attributes(),
        ProductKind::Unknown => Vec::new(),
    }
}

/// Intersection schema across all concrete kinds.
///
/// Built as a key-occurrence map over every kind's list, then a filter of
/// the first kind's list, so it stays linear in the total descriptor
/// count.
fn mixed_attributes() -> Vec<AttrDescriptor> {
    let mut kinds_by_key: HashMap<&'static str, Vec<ProductKind>> = HashMap::new();
    for kind in ProductKind::CONCRETE {
        for descriptor in declared_attributes(kind) {
            kinds_by_key.entry(descriptor.key).or_default().push(kind);
        }
    }

    let concrete_count = ProductKind::CONCRETE.len();
    let mut shared = declared_attributes(ProductKind::CONCRETE[0]);
    shared.retain(|descriptor| {
        kinds_by_key
            .get(descriptor.key)
            .is_some_and(|kinds| kinds.len() == concrete_count)
    });

    for descriptor in &mut shared {
        if let Some(kinds) = kinds_by_key.remove(descriptor.key) {
            descriptor.kinds = kinds;
        }
    }
    shared
}

fn motor_attributes() -> Vec<AttrDescriptor> {
    vec![
        AttrDescriptor::new("part_number", "Part Number", AttrShape::String),
        AttrDescriptor::new("manufacturer", "Manufacturer", AttrShape::String),
        AttrDescriptor::new("series", "Series", AttrShape::String),
        AttrDescriptor::new("release_year", "Release Year", AttrShape::Number),
        AttrDescriptor::new("rated_speed", "Rated Speed", AttrShape::Number).with_unit("rpm"),
        AttrDescriptor::new("rated_torque", "Rated Torque", AttrShape::Number).with_unit("Nm"),
        AttrDescriptor::new("peak_torque", "Peak Torque", AttrShape::Number).with_unit("Nm"),
        AttrDescriptor::new("rated_power", "Rated Power", AttrShape::Number).with_unit("W"),
        AttrDescriptor::new("rated_current", "Rated Current", AttrShape::Number).with_unit("A"),
        AttrDescriptor::new("peak_current", "Peak Current", AttrShape::Number).with_unit("A"),
        AttrDescriptor::new("input_voltage", "Input Voltage", AttrShape::Range).with_unit("V"),
        AttrDescriptor::new("poles", "Poles", AttrShape::Number),
        AttrDescriptor::new(
            "encoder_feedback_support",
            "Encoder Feedback",
            AttrShape::String,
        ),
        AttrDescriptor::new("ip_rating", "IP Rating", AttrShape::Number),
        AttrDescriptor::new("weight", "Weight", AttrShape::Number).with_unit("kg"),
        AttrDescriptor::new("dimensions.width", "Width", AttrShape::Number).with_unit("mm"),
        AttrDescriptor::new("dimensions.height", "Height", AttrShape::Number).with_unit("mm"),
        AttrDescriptor::new("dimensions.depth", "Depth", AttrShape::Number).with_unit("mm"),
    ]
}

fn drive_attributes() -> Vec<AttrDescriptor> {
    vec![
        AttrDescriptor::new("part_number", "Part Number", AttrShape::String),
        AttrDescriptor::new("manufacturer", "Manufacturer", AttrShape::String),
        AttrDescriptor::new("series", "Series", AttrShape::String),
        AttrDescriptor::new("release_year", "Release Year", AttrShape::Number),
        AttrDescriptor::new("input_voltage", "Input Voltage", AttrShape::Range).with_unit("V"),
        AttrDescriptor::new("output_power", "Output Power", AttrShape::Number).with_unit("W"),
        AttrDescriptor::new("rated_current", "Rated Current", AttrShape::Number).with_unit("A"),
        AttrDescriptor::new("peak_current", "Peak Current", AttrShape::Number).with_unit("A"),
        AttrDescriptor::new("fieldbus", "Fieldbus", AttrShape::Array),
        AttrDescriptor::new("control_modes", "Control Modes", AttrShape::Array),
        AttrDescriptor::new("ethernet_ports", "Ethernet Ports", AttrShape::Number),
        AttrDescriptor::new("digital_inputs", "Digital Inputs", AttrShape::Number),
        AttrDescriptor::new("digital_outputs", "Digital Outputs", AttrShape::Number),
        AttrDescriptor::new("safety_features", "Safety Features", AttrShape::Array),
        AttrDescriptor::new("approvals", "Approvals", AttrShape::Array),
        AttrDescriptor::new("ip_rating", "IP Rating", AttrShape::Number),
        AttrDescriptor::new("weight", "Weight", AttrShape::Number).with_unit("kg"),
        AttrDescriptor::new("dimensions.width", "Width", AttrShape::Number).with_unit("mm"),
        AttrDescriptor::new("dimensions.height", "Height", AttrShape::Number).with_unit("mm"),
        AttrDescriptor::new("dimensions.depth", "Depth", AttrShape::Number).with_unit("mm"),
    ]
}

fn robot_arm_attributes() -> Vec<AttrDescriptor> {
    vec![
        AttrDescriptor::new("part_number", "Part Number", AttrShape::String),
        AttrDescriptor::new("manufacturer", "Manufacturer", AttrShape::String),
        AttrDescriptor::new("product_family", "Product Family", AttrShape::String),
        AttrDescriptor::new("release_year", "Release Year", AttrShape::Number),
        AttrDescriptor::new("payload", "Payload", AttrShape::Number).with_unit("kg"),
        AttrDescriptor::new("reach", "Reach", AttrShape::Number).with_unit("mm"),
        AttrDescriptor::new("degrees_of_freedom", "Degrees of Freedom", AttrShape::Number),
        AttrDescriptor::new("pose_repeatability", "Pose Repeatability", AttrShape::Number)
            .with_unit("mm"),
        AttrDescriptor::new("max_tcp_speed", "Max TCP Speed", AttrShape::Number).with_unit("m/s"),
        AttrDescriptor::new("ip_rating", "IP Rating", AttrShape::String),
        AttrDescriptor::new("noise_level", "Noise Level", AttrShape::Number).with_unit("dB(A)"),
        AttrDescriptor::new("mounting_position", "Mounting Position", AttrShape::String),
        AttrDescriptor::new("operating_temp", "Operating Temperature", AttrShape::Range)
            .with_unit("C"),
        AttrDescriptor::new("materials", "Materials", AttrShape::Array),
        AttrDescriptor::new("weight", "Weight", AttrShape::Number).with_unit("kg"),
        AttrDescriptor::new("controller.ip_rating", "Controller IP Rating", AttrShape::String),
        AttrDescriptor::new("tool_io.digital_in", "Tool Digital Inputs", AttrShape::Number),
        AttrDescriptor::new(
            "safety_certifications",
            "Safety Certifications",
            AttrShape::Array,
        ),
    ]
}

fn gearhead_attributes() -> Vec<AttrDescriptor> {
    vec![
        AttrDescriptor::new("part_number", "Part Number", AttrShape::String),
        AttrDescriptor::new("manufacturer", "Manufacturer", AttrShape::String),
        AttrDescriptor::new("release_year", "Release Year", AttrShape::Number),
        AttrDescriptor::new("gear_ratio", "Gear Ratio", AttrShape::Number),
        AttrDescriptor::new("gear_type", "Gear Type", AttrShape::String),
        AttrDescriptor::new("stages", "Stages", AttrShape::Number),
        AttrDescriptor::new("nominal_input_speed", "Nominal Input Speed", AttrShape::Number)
            .with_unit("rpm"),
        AttrDescriptor::new("max_input_speed", "Max Input Speed", AttrShape::Number)
            .with_unit("rpm"),
        AttrDescriptor::new(
            "max_continuous_torque",
            "Max Continuous Torque",
            AttrShape::Number,
        )
        .with_unit("Nm"),
        AttrDescriptor::new("max_peak_torque", "Max Peak Torque", AttrShape::Number)
            .with_unit("Nm"),
        AttrDescriptor::new("backlash", "Backlash", AttrShape::Number).with_unit("arcmin"),
        AttrDescriptor::new("efficiency", "Efficiency", AttrShape::Number),
        AttrDescriptor::new("frame_size", "Frame Size", AttrShape::String),
        AttrDescriptor::new("max_radial_load", "Max Radial Load", AttrShape::Number)
            .with_unit("N"),
        AttrDescriptor::new("max_axial_load", "Max Axial Load", AttrShape::Number).with_unit("N"),
        AttrDescriptor::new("ip_rating", "IP Rating", AttrShape::String),
        AttrDescriptor::new("operating_temp", "Operating Temperature", AttrShape::Range)
            .with_unit("C"),
        AttrDescriptor::new("service_life", "Service Life", AttrShape::Number).with_unit("h"),
        AttrDescriptor::new("lubrication_type", "Lubrication Type", AttrShape::String),
        AttrDescriptor::new("weight", "Weight", AttrShape::Number).with_unit("kg"),
    ]
}

fn datasheet_attributes() -> Vec<AttrDescriptor> {
    vec![
        AttrDescriptor::new("part_number", "Part Number", AttrShape::String),
        AttrDescriptor::new("manufacturer", "Manufacturer", AttrShape::String),
        AttrDescriptor::new("title", "Title", AttrShape::String),
        AttrDescriptor::new("document_id", "Document ID", AttrShape::String),
        AttrDescriptor::new("version", "Version", AttrShape::String),
        AttrDescriptor::new("publication_date", "Publication Date", AttrShape::String),
        AttrDescriptor::new("publisher", "Publisher", AttrShape::String),
        AttrDescriptor::new("page_count", "Page Count", AttrShape::Number),
        AttrDescriptor::new("language", "Language", AttrShape::String),
        AttrDescriptor::new("source_url", "Source URL", AttrShape::String),
    ]
}
