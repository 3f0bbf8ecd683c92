use std::collections::BTreeMap;

/// Most frequent value together with how many times it occurs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mode<T> {
    pub value: T,
    pub count: usize,
}

/// Occurrences of each distinct value, most frequent first. Equal counts
/// are ordered by ascending value.
pub fn value_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts: BTreeMap<T, usize> = BTreeMap::new();
    for v in values {
        *counts.entry(v).or_insert(0) += 1;
    }

    let mut out: Vec<(T, usize)> = counts.into_iter().collect();
    // stable sort: ties stay in ascending value order
    out.sort_by(|a, b| b.1.cmp(&a.1));
    out
}

/// The most frequent value. On a tie the smallest value wins, so the
/// result does not depend on row order. `None` for an empty input.
pub fn mode<T, I>(values: I) -> Option<Mode<T>>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    value_counts(values)
        .into_iter()
        .next()
        .map(|(value, count)| Mode { value, count })
}
