//! Natural alphanumeric string comparison.

use std::cmp::Ordering;

/// Compares two strings by alternating digit and non-digit runs, so that
/// numeric parts order numerically: "abc2" sorts before "abc10".
///
/// Both strings are split into maximal runs of digits or non-digits. Runs
/// are compared pairwise up to the longer run list, with a missing run
/// treated as an empty string. When both runs at a position are all
/// digits they compare as integers; otherwise they compare
/// case-insensitively as strings. The first non-equal position decides.
///
/// Digit runs are compared as unbounded non-negative integers (leading
/// zeros stripped, then length, then the digits themselves), so arbitrarily
/// long part numbers never overflow.
pub fn compare_natural(a: &str, b: &str) -> Ordering {
    let a_runs = tokenize(a);
    let b_runs = tokenize(b);
    let len = a_runs.len().max(b_runs.len());

    for i in 0..len {
        let run_a = a_runs.get(i).copied().unwrap_or("");
        let run_b = b_runs.get(i).copied().unwrap_or("");

        let ordering = if is_digit_run(run_a) && is_digit_run(run_b) {
            compare_digit_runs(run_a, run_b)
        } else {
            run_a.to_lowercase().cmp(&run_b.to_lowercase())
        };

        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    Ordering::Equal
}

/// Splits a string into maximal runs of digits or non-digits, in order.
fn tokenize(input: &str) -> Vec<&str> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut in_digits = None;

    for (idx, c) in input.char_indices() {
        let digit = c.is_ascii_digit();
        match in_digits {
            None => in_digits = Some(digit),
            Some(previous) if previous != digit => {
                runs.push(&input[start..idx]);
                start = idx;
                in_digits = Some(digit);
            }
            Some(_) => {}
        }
    }

    if start < input.len() {
        runs.push(&input[start..]);
    }
    runs
}

/// Returns true for a non-empty run consisting only of ASCII digits.
fn is_digit_run(run: &str) -> bool {
    !run.is_empty() && run.bytes().all(|b| b.is_ascii_digit())
}

/// Compares two digit runs as integers of unbounded length.
fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
