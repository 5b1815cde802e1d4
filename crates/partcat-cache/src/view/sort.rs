//! Sort pipeline: ordered (attribute, direction) levels over a record set.

use std::cmp::Ordering;

use partcat_api::models::{AttrValue, ProductRecord};

use super::criteria::{SortDirection, SortLevel};
use super::extract::{extract, numeric_value};
use super::natural::compare_natural;

/// Sorts a record set by the given levels, returning a new ordering and
/// leaving the input untouched.
///
/// Levels apply major to minor: the first level producing a non-equal
/// result decides a pair, adjusted for that level's direction. A record
/// missing a level's attribute sorts after one that has it regardless of
/// direction; two missing values tie at that level and fall through to
/// the next. Pairs equal under every level keep their input order (the
/// sort is stable). An empty level list returns the input order
/// unchanged.
pub fn sort_products<'a>(
    records: &[&'a ProductRecord],
    levels: &[SortLevel],
) -> Vec<&'a ProductRecord> {
    let mut sorted: Vec<&ProductRecord> = records.to_vec();
    if levels.is_empty() {
        return sorted;
    }

    sorted.sort_by(|a, b| compare_records(a, b, levels));
    sorted
}

/// Compares two records across the sort levels in declared order.
fn compare_records(a: &ProductRecord, b: &ProductRecord, levels: &[SortLevel]) -> Ordering {
    for level in levels {
        let value_a = extract(a, &level.attribute);
        let value_b = extract(b, &level.attribute);

        let ordering = match (value_a, value_b) {
            (None, None) => Ordering::Equal,
            // Absence sorts last no matter the direction, so it is decided
            // before the direction adjustment.
            (None, Some(_)) => return Ordering::Greater,
            (Some(_), None) => return Ordering::Less,
            (Some(value_a), Some(value_b)) => {
                let ordering = compare_values(value_a, value_b);
                match level.direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            }
        };

        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

/// Numeric comparison when both sides carry a numeric reading, natural
/// string comparison otherwise.
fn compare_values(a: &AttrValue, b: &AttrValue) -> Ordering {
    match (numeric_value(a), numeric_value(b)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => compare_natural(&a.to_string(), &b.to_string()),
    }
}
