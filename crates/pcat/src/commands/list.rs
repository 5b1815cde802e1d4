//! List command implementation.
//!
//! Lists products from the local catalog, narrowed by kind and run
//! through the view engine's filter and sort pipelines.

use partcat_api::client::CatalogClient;
use partcat_api::models::ProductRecord;
use partcat_cache::view::{
    apply_filters, find_attribute, parse_criterion, parse_sort_level, sort_products,
    suggest_attribute, FilterCriterion, FilterMode, KindSelector, SortLevel,
};
use partcat_cache::{CatalogManager, CatalogStore};

use super::{CommandContext, CommandError, Result};
use crate::output::{format_products_json, format_products_table};

/// Maximum number of sort levels accepted from the command line. The
/// view engine itself takes any number; the cap is this caller's choice.
const MAX_SORT_LEVELS: usize = 3;

/// Attributes valid for any kind without appearing in its schema.
const IMPLICIT_ATTRIBUTES: &[&str] = &["id"];

/// Options for the list command.
#[derive(Debug)]
pub struct ListOptions {
    /// Kind selection.
    pub kind: KindSelector,
    /// Include criteria, textual form.
    pub include: Vec<String>,
    /// Exclude criteria, textual form.
    pub exclude: Vec<String>,
    /// Sort levels, textual form, major to minor.
    pub sort: Vec<String>,
    /// Maximum rows shown.
    pub limit: u32,
    /// Rows skipped before the first shown.
    pub offset: u32,
    /// Show all rows (ignore limit).
    pub all: bool,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            kind: KindSelector::All,
            include: Vec::new(),
            exclude: Vec::new(),
            sort: Vec::new(),
            limit: 50,
            offset: 0,
            all: false,
        }
    }
}

/// Executes the list command.
///
/// # Errors
///
/// Returns an error if a criterion or sort spec does not parse, if it
/// references an attribute the selected kind does not declare, or if a
/// requested refresh fails.
pub async fn execute(ctx: &CommandContext, opts: &ListOptions, server: &str) -> Result<()> {
    let client = CatalogClient::new(server)?;
    let store = CatalogStore::new()?;
    let mut manager = CatalogManager::new(client, store);

    if ctx.refresh_first {
        if ctx.verbose {
            eprintln!("Refreshing catalog from {server}...");
        }
        manager.refresh().await?;
    }

    let criteria = build_criteria(opts)?;
    let levels = build_sort_levels(opts)?;

    // Kind narrowing happens before the attribute pipelines run.
    let catalog = manager.catalog();
    let records: Vec<&ProductRecord> = catalog
        .products
        .iter()
        .filter(|record| match opts.kind {
            KindSelector::All => true,
            KindSelector::Only(kind) => record.kind == kind,
        })
        .collect();

    let surviving = apply_filters(&records, &criteria);
    let sorted = sort_products(&surviving, &levels);
    let page = paginate(sorted, opts);

    if ctx.json_output {
        println!("{}", format_products_json(&page)?);
    } else if !ctx.quiet {
        print!("{}", format_products_table(&page, ctx.use_colors));
    }

    Ok(())
}

/// Parses the textual criteria and validates their attributes against
/// the selected kind's schema.
fn build_criteria(opts: &ListOptions) -> Result<Vec<FilterCriterion>> {
    let mut criteria = Vec::new();
    for (texts, mode) in [
        (&opts.include, FilterMode::Include),
        (&opts.exclude, FilterMode::Exclude),
    ] {
        for text in texts {
            let criterion = parse_criterion(text, mode)?;
            criteria.push(resolve_criterion(criterion, opts.kind)?);
        }
    }
    Ok(criteria)
}

/// Checks the criterion's attribute against the kind's schema and adopts
/// the descriptor's display name.
fn resolve_criterion(
    mut criterion: FilterCriterion,
    kind: KindSelector,
) -> Result<FilterCriterion> {
    if IMPLICIT_ATTRIBUTES.contains(&criterion.attribute.as_str()) {
        return Ok(criterion);
    }
    match find_attribute(kind, &criterion.attribute) {
        Some(descriptor) => {
            criterion.display_name = descriptor.display_name.to_string();
            Ok(criterion)
        }
        None => Err(CommandError::unknown_attribute(
            &criterion.attribute,
            suggest_attribute(kind, &criterion.attribute),
        )),
    }
}

/// Parses sort levels, validates attributes, and enforces the level cap.
fn build_sort_levels(opts: &ListOptions) -> Result<Vec<SortLevel>> {
    if opts.sort.len() > MAX_SORT_LEVELS {
        return Err(CommandError::Usage(format!(
            "at most {MAX_SORT_LEVELS} sort levels are supported, got {}",
            opts.sort.len()
        )));
    }

    let mut levels = Vec::new();
    for text in &opts.sort {
        let level = parse_sort_level(text)?;
        let known = IMPLICIT_ATTRIBUTES.contains(&level.attribute.as_str())
            || find_attribute(opts.kind, &level.attribute).is_some();
        if !known {
            return Err(CommandError::unknown_attribute(
                &level.attribute,
                suggest_attribute(opts.kind, &level.attribute),
            ));
        }
        levels.push(level);
    }
    Ok(levels)
}

/// Applies offset and limit to the sorted rows.
fn paginate<'a>(records: Vec<&'a ProductRecord>, opts: &ListOptions) -> Vec<&'a ProductRecord> {
    let skipped = records.into_iter().skip(opts.offset as usize);
    if opts.all {
        skipped.collect()
    } else {
        skipped.take(opts.limit as usize).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use partcat_api::models::ProductKind;

    #[test]
    fn test_build_criteria_adopts_display_name() {
        let opts = ListOptions {
            kind: KindSelector::Only(ProductKind::Motor),
            include: vec!["rated_power>150".to_string()],
            ..ListOptions::default()
        };
        let criteria = build_criteria(&opts).unwrap();
        assert_eq!(criteria.len(), 1);
        assert_eq!(criteria[0].display_name, "Rated Power");
    }

    #[test]
    fn test_build_criteria_rejects_unknown_attribute() {
        let opts = ListOptions {
            kind: KindSelector::Only(ProductKind::Motor),
            include: vec!["rated_pwer>150".to_string()],
            ..ListOptions::default()
        };
        let error = build_criteria(&opts).unwrap_err();
        assert!(error.to_string().contains("Did you mean 'rated_power'?"));
    }

    #[test]
    fn test_id_is_always_valid() {
        let opts = ListOptions {
            kind: KindSelector::Only(ProductKind::Motor),
            include: vec!["id=m-1".to_string()],
            sort: vec!["id:desc".to_string()],
            ..ListOptions::default()
        };
        assert!(build_criteria(&opts).is_ok());
        assert!(build_sort_levels(&opts).is_ok());
    }

    #[test]
    fn test_sort_level_cap() {
        let opts = ListOptions {
            sort: vec![
                "part_number".to_string(),
                "manufacturer".to_string(),
                "id".to_string(),
                "id:desc".to_string(),
            ],
            ..ListOptions::default()
        };
        let error = build_sort_levels(&opts).unwrap_err();
        assert!(matches!(error, CommandError::Usage(_)));
    }

    #[test]
    fn test_paginate_offset_and_limit() {
        let records: Vec<ProductRecord> = (0..10)
            .map(|i| ProductRecord::new(format!("r{}", i), ProductKind::Motor))
            .collect();
        let refs: Vec<&ProductRecord> = records.iter().collect();

        let opts = ListOptions {
            offset: 2,
            limit: 3,
            ..ListOptions::default()
        };
        let page = paginate(refs.clone(), &opts);
        let ids: Vec<&str> = page.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec!["r2", "r3", "r4"]);

        let opts = ListOptions {
            offset: 2,
            all: true,
            ..ListOptions::default()
        };
        assert_eq!(paginate(refs, &opts).len(), 8);
    }
}
