//! Display formatting shared by job cards and detail screens.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::net::types::Salary;

const DEFAULT_CURRENCY: &str = "USD";

/// Salary range label, or `None` when neither bound is set.
///
/// Bounds are in thousands and print as given (`85.5K`); zero counts as
/// unset. With `with_currency` the currency code (default USD) is appended:
/// `80K - 120K USD`, `80K+ USD`, `Up to 120K USD`.
#[must_use]
pub fn salary_range(salary: &Salary, with_currency: bool) -> Option<String> {
    let min = salary.min.filter(|v| *v > 0.0);
    let max = salary.max.filter(|v| *v > 0.0);
    let range = match (min, max) {
        (Some(min), Some(max)) => format!("{min}K - {max}K"),
        (Some(min), None) => format!("{min}K+"),
        (None, Some(max)) => format!("Up to {max}K"),
        (None, None) => return None,
    };
    if !with_currency {
        return Some(range);
    }
    let currency = salary.currency.as_deref().filter(|c| !c.is_empty()).unwrap_or(DEFAULT_CURRENCY);
    Some(format!("{range} {currency}"))
}

/// Date part of an ISO 8601 timestamp (`2024-05-01T10:00:00Z` -> `2024-05-01`).
#[must_use]
pub fn date_label(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}

/// First word of a display name, used in the navbar.
#[must_use]
pub fn first_name(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or(name)
}

/// `1 job` / `3 jobs`.
#[must_use]
pub fn count_label(count: usize, noun: &str) -> String {
    if count == 1 { format!("{count} {noun}") } else { format!("{count} {noun}s") }
}
