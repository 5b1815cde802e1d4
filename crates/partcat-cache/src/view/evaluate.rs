//! Criterion evaluation against extracted attribute values.

use partcat_api::models::{format_number, AttrValue};

use super::criteria::{CriterionValue, FilterCriterion};

/// Decides whether an extracted value satisfies one criterion.
///
/// This is only called for criteria that actually participate (mode is not
/// neutral), and only with present values; absence handling lives in the
/// filter pipeline. Shape dispatch runs in a fixed priority order: lists
/// first, then shaped numerics, then plain scalars, then a stringified
/// containment fallback for every remaining combination. The fallback is
/// what keeps type mismatches from ever being an error.
pub fn matches(value: &AttrValue, criterion: &FilterCriterion) -> bool {
    // No comparison value: the criterion degenerates to an existence
    // check, and the value is known to be present here.
    let Some(needle) = &criterion.value else {
        return true;
    };

    match value {
        // List matching is always contains semantics, never exact,
        // regardless of the operator.
        AttrValue::List(items) => list_contains(items, needle),

        AttrValue::Quantity(quantity) => match needle.as_number() {
            Some(n) => criterion.op.compare(quantity.value, n),
            None => contains_ci(&format_number(quantity.value), &needle.to_query_string()),
        },

        AttrValue::Range(range) => match needle.as_number() {
            Some(n) => criterion.op.compare(range.midpoint(), n),
            None => fallback(value, needle),
        },

        AttrValue::String(s) => contains_ci(s, &needle.to_query_string()),

        AttrValue::Number(actual) => match needle.as_number() {
            Some(n) => criterion.op.compare(*actual, n),
            None => fallback(value, needle),
        },

        _ => fallback(value, needle),
    }
}

/// True when any element, stringified and lower-cased, contains the
/// stringified lower-cased needle.
fn list_contains(items: &[AttrValue], needle: &CriterionValue) -> bool {
    let needle = needle.to_query_string().to_lowercase();
    items
        .iter()
        .any(|item| item.to_string().to_lowercase().contains(&needle))
}

/// Case-insensitive substring containment.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Last resort: stringify both sides and look for containment.
fn fallback(value: &AttrValue, needle: &CriterionValue) -> bool {
    contains_ci(&value.to_string(), &needle.to_query_string())
}
