//! Cross-cutting tests for the view engine: the filter -> sort pipeline
//! as a whole, and the invariants the pipelines guarantee.

use partcat_api::models::{ProductKind, ProductRecord, Quantity};

use super::{
    apply_filters, sort_products, CompareOp, FilterCriterion, SortLevel,
};

fn power_set() -> Vec<ProductRecord> {
    vec![
        ProductRecord::new("1", ProductKind::Motor)
            .with("mfr", "ACME")
            .with("power", Quantity::new(100.0, "W")),
        ProductRecord::new("2", ProductKind::Motor)
            .with("mfr", "ACME")
            .with("power", Quantity::new(200.0, "W")),
        ProductRecord::new("3", ProductKind::Motor)
            .with("mfr", "Beta Corp")
            .with("power", Quantity::new(150.0, "W")),
    ]
}

fn refs(records: &[ProductRecord]) -> Vec<&ProductRecord> {
    records.iter().collect()
}

fn ids(records: &[&ProductRecord]) -> Vec<String> {
    records.iter().map(|r| r.id().to_string()).collect()
}

// ==================== End-to-end scenarios ====================

#[test]
fn test_include_by_manufacturer_lowercase() {
    let records = power_set();
    let criteria = vec![FilterCriterion::include("mfr", "acme")];

    let surviving = apply_filters(&refs(&records), &criteria);
    assert_eq!(ids(&surviving), vec!["1", "2"]);
}

#[test]
fn test_numeric_threshold_filter() {
    let records = power_set();
    let criteria = vec![FilterCriterion::include("power", 150.0).with_op(CompareOp::Gt)];

    let surviving = apply_filters(&refs(&records), &criteria);
    assert_eq!(ids(&surviving), vec!["2"]);
}

#[test]
fn test_two_criteria_are_anded() {
    let records = power_set();
    let criteria = vec![
        FilterCriterion::include("mfr", "ACME"),
        FilterCriterion::include("power", 150.0).with_op(CompareOp::Gt),
    ];

    let surviving = apply_filters(&refs(&records), &criteria);
    assert_eq!(ids(&surviving), vec!["2"]);
}

#[test]
fn test_natural_sort_by_id() {
    let records = vec![
        ProductRecord::new("abc10", ProductKind::Motor),
        ProductRecord::new("abc2", ProductKind::Motor),
        ProductRecord::new("abc3", ProductKind::Motor),
    ];

    let sorted = sort_products(&refs(&records), &[SortLevel::asc("id")]);
    assert_eq!(ids(&sorted), vec!["abc2", "abc3", "abc10"]);
}

#[test]
fn test_missing_attribute_sorts_last() {
    let records = vec![
        ProductRecord::new("1", ProductKind::Motor),
        ProductRecord::new("2", ProductKind::Motor).with("power", Quantity::new(150.0, "W")),
    ];

    let sorted = sort_products(&refs(&records), &[SortLevel::asc("power")]);
    assert_eq!(ids(&sorted), vec!["2", "1"]);
}

#[test]
fn test_multi_level_sort_groups_then_orders() {
    let records = vec![
        ProductRecord::new("1", ProductKind::Motor)
            .with("power", Quantity::new(100.0, "W"))
            .with("part_number", "AC-200"),
        ProductRecord::new("2", ProductKind::Motor)
            .with("power", Quantity::new(100.0, "W"))
            .with("part_number", "AC-100"),
        ProductRecord::new("3", ProductKind::Motor)
            .with("power", Quantity::new(200.0, "W"))
            .with("part_number", "BC-150"),
    ];
    let levels = vec![SortLevel::asc("power"), SortLevel::asc("part_number")];

    let sorted = sort_products(&refs(&records), &levels);
    assert_eq!(ids(&sorted), vec!["2", "1", "3"]);
}

#[test]
fn test_filter_then_sort_pipeline() {
    let records = power_set();
    let criteria = vec![FilterCriterion::include("mfr", "acme")];
    let levels = vec![SortLevel::desc("power")];

    let surviving = apply_filters(&refs(&records), &criteria);
    let sorted = sort_products(&surviving, &levels);
    assert_eq!(ids(&sorted), vec!["2", "1"]);
}

// ==================== Invariants ====================

#[test]
fn test_filter_idempotence() {
    let records = power_set();
    let criteria = vec![
        FilterCriterion::include("mfr", "acme"),
        FilterCriterion::exclude("power", 150.0),
    ];

    let once = apply_filters(&refs(&records), &criteria);
    let twice = apply_filters(&once, &criteria);
    assert_eq!(ids(&once), ids(&twice));
}

#[test]
fn test_filter_preserves_relative_order() {
    let records: Vec<ProductRecord> = (0..20)
        .map(|i| {
            ProductRecord::new(format!("r{}", i), ProductKind::Motor)
                .with("poles", f64::from(i % 3))
        })
        .collect();
    let criteria = vec![FilterCriterion::include("poles", 1.0)];

    let surviving = apply_filters(&refs(&records), &criteria);
    let positions: Vec<usize> = surviving
        .iter()
        .map(|r| records.iter().position(|x| x.id() == r.id()).unwrap())
        .collect();
    let mut sorted_positions = positions.clone();
    sorted_positions.sort_unstable();
    assert_eq!(positions, sorted_positions);
}

#[test]
fn test_pipelines_do_not_mutate_input() {
    let records = power_set();
    let before = records.clone();
    let criteria = vec![FilterCriterion::include("mfr", "acme")];
    let levels = vec![SortLevel::desc("power")];

    let record_refs = refs(&records);
    let _surviving = apply_filters(&record_refs, &criteria);
    let _sorted = sort_products(&record_refs, &levels);

    assert_eq!(records, before);
}

#[test]
fn test_sort_stability_under_equal_keys() {
    let records: Vec<ProductRecord> = (0..10)
        .map(|i| ProductRecord::new(format!("r{}", i), ProductKind::Motor).with("mfr", "ACME"))
        .collect();

    let sorted = sort_products(&refs(&records), &[SortLevel::asc("mfr")]);
    let expected: Vec<String> = records.iter().map(|r| r.id().to_string()).collect();
    assert_eq!(ids(&sorted), expected);
}

#[test]
fn test_nulls_last_in_both_directions() {
    let records = vec![
        ProductRecord::new("missing", ProductKind::Motor),
        ProductRecord::new("present", ProductKind::Motor).with("power", 1.0),
    ];

    for level in [SortLevel::asc("power"), SortLevel::desc("power")] {
        let sorted = sort_products(&refs(&records), &[level]);
        assert_eq!(ids(&sorted), vec!["present", "missing"]);
    }
}

#[test]
fn test_empty_record_set_is_fine() {
    let records: Vec<ProductRecord> = Vec::new();
    let criteria = vec![FilterCriterion::include("mfr", "acme")];
    let levels = vec![SortLevel::asc("id")];

    assert!(apply_filters(&refs(&records), &criteria).is_empty());
    assert!(sort_products(&refs(&records), &levels).is_empty());
}
