//! Filter criteria and sort specifications.

use std::fmt;

use partcat_api::models::format_number;
use serde::{Deserialize, Serialize};

/// How a criterion participates in filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Matching records survive.
    Include,
    /// Matching records are dropped.
    Exclude,
    /// The criterion is parked: structurally present but contributing
    /// nothing, so a UI can keep it around without deleting it.
    Neutral,
}

/// Comparison operator applied to numeric readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CompareOp {
    /// Exact equality (the default).
    #[default]
    #[serde(rename = "=")]
    Eq,
    /// Inequality.
    #[serde(rename = "!=")]
    Ne,
    /// Strictly greater than.
    #[serde(rename = ">")]
    Gt,
    /// Strictly less than.
    #[serde(rename = "<")]
    Lt,
    /// Greater than or equal.
    #[serde(rename = ">=")]
    Ge,
    /// Less than or equal.
    #[serde(rename = "<=")]
    Le,
}

impl CompareOp {
    /// Parses an operator symbol. Anything unrecognized is silently
    /// treated as `=`.
    pub fn from_symbol(symbol: &str) -> Self {
        match symbol {
            "!=" => CompareOp::Ne,
            ">" => CompareOp::Gt,
            "<" => CompareOp::Lt,
            ">=" => CompareOp::Ge,
            "<=" => CompareOp::Le,
            _ => CompareOp::Eq,
        }
    }

    /// The operator's textual symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::Ne => "!=",
            CompareOp::Gt => ">",
            CompareOp::Lt => "<",
            CompareOp::Ge => ">=",
            CompareOp::Le => "<=",
        }
    }

    /// Applies the operator to two numbers.
    pub fn compare(&self, left: f64, right: f64) -> bool {
        match self {
            CompareOp::Eq => left == right,
            CompareOp::Ne => left != right,
            CompareOp::Gt => left > right,
            CompareOp::Lt => left < right,
            CompareOp::Ge => left >= right,
            CompareOp::Le => left <= right,
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A criterion's comparison value: a scalar, or a numeric pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CriterionValue {
    /// Boolean scalar.
    Flag(bool),
    /// Numeric scalar.
    Number(f64),
    /// Textual scalar.
    Text(String),
    /// A `[low, high]` numeric pair, kept for data-model fidelity; the
    /// evaluator routes it through the stringified fallback.
    Span([f64; 2]),
}

impl CriterionValue {
    /// The numeric reading, if this is a plain number.
    ///
    /// Text that happens to look numeric deliberately does not count;
    /// only a genuinely numeric criterion value triggers operator
    /// comparison.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CriterionValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The textual form used for substring matching.
    pub fn to_query_string(&self) -> String {
        match self {
            CriterionValue::Flag(b) => b.to_string(),
            CriterionValue::Number(n) => format_number(*n),
            CriterionValue::Text(s) => s.clone(),
            CriterionValue::Span([low, high]) => {
                format!("{},{}", format_number(*low), format_number(*high))
            }
        }
    }
}

impl From<bool> for CriterionValue {
    fn from(b: bool) -> Self {
        CriterionValue::Flag(b)
    }
}

impl From<f64> for CriterionValue {
    fn from(n: f64) -> Self {
        CriterionValue::Number(n)
    }
}

impl From<i64> for CriterionValue {
    fn from(n: i64) -> Self {
        CriterionValue::Number(n as f64)
    }
}

impl From<&str> for CriterionValue {
    fn from(s: &str) -> Self {
        CriterionValue::Text(s.to_string())
    }
}

impl From<String> for CriterionValue {
    fn from(s: String) -> Self {
        CriterionValue::Text(s)
    }
}

/// One filter rule: attribute + mode + optional value/operator.
///
/// A criterion with no value degenerates to an existence check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriterion {
    /// Dotted-path attribute key this criterion reads.
    pub attribute: String,

    /// Include/exclude/neutral participation.
    pub mode: FilterMode,

    /// Comparison value; absent means "attribute exists".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<CriterionValue>,

    /// Comparison operator for numeric readings.
    #[serde(default)]
    pub op: CompareOp,

    /// Human-readable name for presentation.
    pub display_name: String,
}

impl FilterCriterion {
    /// Creates a bare criterion for the given attribute and mode.
    pub fn new(attribute: impl Into<String>, mode: FilterMode) -> Self {
        let attribute = attribute.into();
        Self {
            display_name: attribute.clone(),
            attribute,
            mode,
            value: None,
            op: CompareOp::Eq,
        }
    }

    /// Include criterion matching `value`.
    pub fn include(attribute: impl Into<String>, value: impl Into<CriterionValue>) -> Self {
        let mut criterion = Self::new(attribute, FilterMode::Include);
        criterion.value = Some(value.into());
        criterion
    }

    /// Exclude criterion matching `value`.
    pub fn exclude(attribute: impl Into<String>, value: impl Into<CriterionValue>) -> Self {
        let mut criterion = Self::new(attribute, FilterMode::Exclude);
        criterion.value = Some(value.into());
        criterion
    }

    /// Existence check: keeps records that carry the attribute at all.
    pub fn exists(attribute: impl Into<String>) -> Self {
        Self::new(attribute, FilterMode::Include)
    }

    /// Returns the criterion with the given operator.
    pub fn with_op(mut self, op: CompareOp) -> Self {
        self.op = op;
        self
    }

    /// Returns the criterion with the given display name.
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }
}

/// Direction of one sort level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending (the default).
    #[default]
    Asc,
    /// Descending.
    Desc,
}

/// One (attribute, direction) pair within a multi-level sort
/// specification. Order within the specification is significant: it
/// defines major-to-minor key precedence. Any cap on the number of levels
/// is the caller's business, not this crate's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortLevel {
    /// Dotted-path attribute key to sort by.
    pub attribute: String,

    /// Sort direction.
    pub direction: SortDirection,
}

impl SortLevel {
    /// Creates a sort level.
    pub fn new(attribute: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            attribute: attribute.into(),
            direction,
        }
    }

    /// Ascending sort level.
    pub fn asc(attribute: impl Into<String>) -> Self {
        Self::new(attribute, SortDirection::Asc)
    }

    /// Descending sort level.
    pub fn desc(attribute: impl Into<String>) -> Self {
        Self::new(attribute, SortDirection::Desc)
    }
}
