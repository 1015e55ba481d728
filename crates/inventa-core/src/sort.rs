//! Natural ("alphanumeric-aware") ordering of result rows

use std::cmp::Ordering;

use crate::types::AssetRow;

/// Run of a natural sort key
///
/// Keys alternate text and digit runs, always starting with a (possibly
/// empty) text run, so runs at the same index are of the same kind.
#[derive(Debug)]
enum Run<'a> {
    Text(String),
    Digits(&'a str),
}

impl PartialEq for Run<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Run<'_> {}

impl Ord for Run<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Run::Text(a), Run::Text(b)) => a.cmp(b),
            (Run::Digits(a), Run::Digits(b)) => cmp_digits(a, b),
            (Run::Text(_), Run::Digits(_)) => Ordering::Less,
            (Run::Digits(_), Run::Text(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Run<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compare two ASCII digit runs by numeric value, without overflow
fn cmp_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn runs(s: &str) -> Vec<Run<'_>> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut in_digits = false;

    for (i, c) in s.char_indices() {
        let digit = c.is_ascii_digit();
        if digit != in_digits {
            runs.push(run(&s[start..i], in_digits));
            start = i;
            in_digits = digit;
        }
    }
    runs.push(run(&s[start..], in_digits));

    runs
}

fn run(part: &str, digits: bool) -> Run<'_> {
    if digits {
        Run::Digits(part)
    } else {
        Run::Text(part.to_lowercase())
    }
}

/// Compare two strings naturally
///
/// Digit runs compare numerically, everything else case-insensitively.
#[must_use]
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    runs(a).cmp(&runs(b))
}

/// Order rows by path, or by a priority list of field values
///
/// With `keys`, rows are ordered by `keys[0]`, ties broken by `keys[1]` and
/// so on; remaining ties keep their input order. A missing field compares as
/// the empty string. `reverse` reverses the final order.
#[must_use]
pub fn sort(mut rows: Vec<AssetRow>, keys: &[String], reverse: bool) -> Vec<AssetRow> {
    if keys.is_empty() {
        rows.sort_by(|a, b| natural_cmp(&a.path.to_string_lossy(), &b.path.to_string_lossy()));
    } else {
        rows.sort_by(|a, b| {
            keys.iter()
                .map(|key| natural_cmp(a.get(key).unwrap_or(""), b.get(key).unwrap_or("")))
                .find(|ord| ord.is_ne())
                .unwrap_or(Ordering::Equal)
        });
    }

    if reverse {
        rows.reverse();
    }

    rows
}
