use crate::models::{ComparisonResult, UnitSet};

/// Units present in both sets, in sorted order
#[inline]
pub fn shared_units(a: &UnitSet, b: &UnitSet) -> Vec<String> {
    a.intersection(b).cloned().collect()
}

/// Jaccard similarity of two unit sets as a percentage (0-100)
///
/// Returns 0 when both sets are empty.
#[inline]
pub fn jaccard_percentage(a: &UnitSet, b: &UnitSet) -> f64 {
    let shared = a.intersection(b).count();
    let union = a.len() + b.len() - shared;
    if union == 0 {
        return 0.0;
    }

    100.0 * shared as f64 / union as f64
}

/// Compare two unit sets
///
/// `only_a` and `only_b` are the parts of each set not shared with the other.
pub fn compare_units(a: &UnitSet, b: &UnitSet) -> ComparisonResult {
    let shared: UnitSet = a.intersection(b).cloned().collect();
    let only_a: UnitSet = a.difference(&shared).cloned().collect();
    let only_b: UnitSet = b.difference(&shared).cloned().collect();
    let compatibility = jaccard_percentage(a, b);

    ComparisonResult {
        shared,
        only_a,
        only_b,
        compatibility,
    }
}

/// Normalize raw unit codes from an external source
///
/// Trims whitespace and drops blank entries; duplicates collapse.
pub fn normalize_units<I, S>(raw: I) -> UnitSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .map(|unit| unit.as_ref().trim().to_string())
        .filter(|unit| !unit.is_empty())
        .collect()
}
