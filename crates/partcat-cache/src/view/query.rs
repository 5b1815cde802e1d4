//! Parser for textual filter criteria and sort specifications.
//!
//! # Grammar
//!
//! ```text
//! criterion  ::= attribute | attribute op value
//! op         ::= "=" | "!=" | ">" | "<" | ">=" | "<="
//! value      ::= quoted string | number | "true" | "false" | bare word
//! sort_level ::= attribute [":" ("asc" | "desc")]
//! attribute  ::= segment ("." segment)*
//! segment    ::= [A-Za-z0-9_]+
//! ```
//!
//! A bare attribute parses to an existence check. An unrecognized operator
//! symbol degrades to `=` rather than failing.

use super::criteria::{
    CompareOp, CriterionValue, FilterCriterion, FilterMode, SortDirection, SortLevel,
};
use super::error::{QueryError, QueryResult};

/// Parses one textual criterion, e.g. `rated_power>=150`,
/// `manufacturer="Beta Corp"`, or a bare `payload` existence check.
pub fn parse_criterion(input: &str, mode: FilterMode) -> QueryResult<FilterCriterion> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(QueryError::EmptyExpression);
    }

    // The attribute is the leading run of path characters; everything
    // after it is operator and value.
    let split = trimmed
        .find(|c: char| !is_attribute_char(c))
        .unwrap_or(trimmed.len());
    let (attribute, rest) = trimmed.split_at(split);
    validate_attribute(attribute, trimmed)?;

    let mut criterion = FilterCriterion::new(attribute, mode);

    let rest = rest.trim_start();
    if rest.is_empty() {
        // Bare attribute: existence check.
        return Ok(criterion);
    }

    let (op_symbol, value_text) = split_operator(rest);
    let value_text = value_text.trim();
    if value_text.is_empty() {
        return Err(QueryError::missing_value(op_symbol));
    }

    criterion.op = CompareOp::from_symbol(op_symbol);
    criterion.value = Some(parse_value(value_text));
    Ok(criterion)
}

/// Parses one sort level, e.g. `rated_power`, `part_number:desc`.
pub fn parse_sort_level(input: &str) -> QueryResult<SortLevel> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(QueryError::EmptyExpression);
    }

    let (attribute, direction) = match trimmed.split_once(':') {
        Some((attribute, direction)) => {
            let direction = match direction.trim().to_lowercase().as_str() {
                "asc" => SortDirection::Asc,
                "desc" => SortDirection::Desc,
                other => return Err(QueryError::unknown_direction(other)),
            };
            (attribute.trim(), direction)
        }
        None => (trimmed, SortDirection::Asc),
    };

    if !attribute.chars().all(is_attribute_char) {
        return Err(QueryError::invalid_attribute(attribute));
    }
    validate_attribute(attribute, trimmed)?;

    Ok(SortLevel::new(attribute, direction))
}

/// Characters allowed inside a dotted attribute path.
fn is_attribute_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.'
}

/// Rejects empty attributes and empty path segments ("a..b", "a.").
fn validate_attribute(attribute: &str, context: &str) -> QueryResult<()> {
    if attribute.is_empty() || attribute.split('.').any(str::is_empty) {
        return Err(QueryError::invalid_attribute(context));
    }
    Ok(())
}

/// Splits the leading operator symbol from the value text.
///
/// The symbol is the maximal run of operator characters; unknown symbols
/// later degrade to `=` in [`CompareOp::from_symbol`].
fn split_operator(rest: &str) -> (&str, &str) {
    let end = rest
        .find(|c: char| !is_operator_char(c))
        .unwrap_or(rest.len());
    rest.split_at(end)
}

/// Characters that can form an operator symbol.
fn is_operator_char(c: char) -> bool {
    matches!(c, '=' | '!' | '<' | '>' | '~')
}

/// Types a criterion value: quoted text stays text, `true`/`false` become
/// flags, numeric text becomes a number, everything else is text.
fn parse_value(text: &str) -> CriterionValue {
    if let Some(inner) = strip_quotes(text) {
        return CriterionValue::Text(inner.to_string());
    }
    match text {
        "true" => return CriterionValue::Flag(true),
        "false" => return CriterionValue::Flag(false),
        _ => {}
    }
    if let Ok(n) = text.parse::<f64>() {
        return CriterionValue::Number(n);
    }
    CriterionValue::Text(text.to_string())
}

/// Strips one pair of matching single or double quotes, if present.
fn strip_quotes(text: &str) -> Option<&str> {
    for quote in ['"', '\''] {
        if text.len() >= 2 && text.starts_with(quote) && text.ends_with(quote) {
            return Some(&text[1..text.len() - 1]);
        }
    }
    None
}
