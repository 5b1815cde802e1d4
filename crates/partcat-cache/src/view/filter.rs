//! Filter pipeline: an ordered criteria list with AND semantics.

use partcat_api::models::ProductRecord;

use super::criteria::{FilterCriterion, FilterMode};
use super::evaluate::matches;
use super::extract::extract;

/// Applies an ordered list of criteria to a record set.
///
/// A record survives when every participating criterion is satisfied:
/// for an `Include` criterion a present value must match and an absent
/// value rejects; for an `Exclude` criterion a present value must not
/// match and an absent value is trivially satisfied. `Neutral` criteria
/// contribute nothing.
///
/// The relative order of surviving records equals their order in the
/// input; this is a filter, never a sort. An empty criteria list keeps
/// everything. The input is never mutated.
pub fn apply_filters<'a>(
    records: &[&'a ProductRecord],
    criteria: &[FilterCriterion],
) -> Vec<&'a ProductRecord> {
    records
        .iter()
        .filter(|record| record_survives(record, criteria))
        .copied()
        .collect()
}

/// AND across criteria, rejecting on the first failing one.
fn record_survives(record: &ProductRecord, criteria: &[FilterCriterion]) -> bool {
    for criterion in criteria {
        let matched = extract(record, &criterion.attribute).map(|value| matches(value, criterion));

        let satisfied = match (criterion.mode, matched) {
            (FilterMode::Neutral, _) => true,
            (FilterMode::Include, Some(matched)) => matched,
            (FilterMode::Include, None) => false,
            (FilterMode::Exclude, Some(matched)) => !matched,
            (FilterMode::Exclude, None) => true,
        };

        if !satisfied {
            return false;
        }
    }
    true
}
