//! Derived aggregates: counts, sums, means, distributions and top-N.

use serde::Serialize;

/// Share of records that fall into one category.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct DistributionEntry<K> {
    pub key: K,
    pub count: usize,
    pub percentage: f64,
}

/// Counts the records satisfying `predicate`.
pub fn count_where<T>(records: &[T], predicate: impl Fn(&T) -> bool) -> usize {
    records.iter().filter(|record| predicate(*record)).count()
}

pub fn sum_by<T>(records: &[T], value: impl Fn(&T) -> f64) -> f64 {
    records.iter().map(value).sum()
}

/// Arithmetic mean; an empty set averages to zero.
pub fn mean_by<T>(records: &[T], value: impl Fn(&T) -> f64) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    sum_by(records, value) / records.len() as f64
}

/// `100 * count / total`, with an empty total counting as zero percent.
pub fn percentage(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 * 100.0 / total as f64
    }
}

/// Rounds to one decimal place for display.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Rounds to cents.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Counts and percentages for each key in `categories`, in that order.
///
/// Records whose key is outside `categories` still count towards the total.
pub fn distribution<T, K>(
    records: &[T],
    categories: &[K],
    key: impl Fn(&T) -> K,
) -> Vec<DistributionEntry<K>>
where
    K: PartialEq + Clone,
{
    let total = records.len();
    categories
        .iter()
        .map(|category| {
            let count = count_where(records, |record| key(record) == *category);
            DistributionEntry {
                key: category.clone(),
                count,
                percentage: percentage(count as u64, total as u64),
            }
        })
        .collect()
}

/// The `n` records with the largest `key`, ties kept in input order.
pub fn top_n_by<T, K>(records: &[T], n: usize, key: impl Fn(&T) -> K) -> Vec<T>
where
    T: Clone,
    K: PartialOrd,
{
    let mut sorted: Vec<&T> = records.iter().collect();
    // `sort_by` is stable, so equal keys keep their original order.
    sorted.sort_by(|a, b| {
        key(b)
            .partial_cmp(&key(a))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    sorted.into_iter().take(n).cloned().collect()
}
