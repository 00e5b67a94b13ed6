//! Numeric reductions shared by the aggregators.

use std::collections::HashMap;
use std::hash::Hash;

/// Running arithmetic mean
#[derive(Debug, Clone, Copy, Default)]
pub struct Mean {
    sum: f64,
    count: usize,
}

impl Mean {
    pub fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// `None` when nothing was pushed
    pub fn value(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }

    /// Zero when nothing was pushed
    pub fn value_or_zero(&self) -> f64 {
        self.value().unwrap_or(0.0)
    }
}

/// Median of the finite values; even-length inputs average the middle pair
pub fn median(mut values: Vec<f64>) -> Option<f64> {
    values.retain(|v| v.is_finite());
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);

    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Some((values[mid - 1] + values[mid]) / 2.0)
    } else {
        Some(values[mid])
    }
}

/// Sample standard deviation (n - 1 denominator); undefined below two samples
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    Some(variance.sqrt())
}

/// Fold rows into per-key accumulators
///
/// Groups come back in the order their key first appears in `rows`, which
/// is what the ranked charts use as their tie-break.
pub fn group_fold<T, K, A, KF, F>(
    rows: impl IntoIterator<Item = T>,
    mut key: KF,
    mut fold: F,
) -> Vec<(K, A)>
where
    T: Copy,
    K: Eq + Hash + Clone,
    A: Default,
    KF: FnMut(T) -> K,
    F: FnMut(&mut A, T),
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, A)> = Vec::new();

    for row in rows {
        let k = key(row);
        let slot = match index.get(&k) {
            Some(&slot) => slot,
            None => {
                let slot = groups.len();
                index.insert(k.clone(), slot);
                groups.push((k, A::default()));
                slot
            }
        };
        fold(&mut groups[slot].1, row);
    }

    groups
}

/// Stable descending sort on `metric`, truncated to `limit`
///
/// Items whose metric is not finite are dropped.
pub fn rank_desc<T>(mut items: Vec<T>, metric: impl Fn(&T) -> f64, limit: usize) -> Vec<T> {
    items.retain(|i| metric(i).is_finite());
    items.sort_by(|a, b| metric(b).total_cmp(&metric(a)));
    items.truncate(limit);
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        let mut mean = Mean::default();
        assert_eq!(mean.value(), None);
        assert_eq!(mean.value_or_zero(), 0.0);

        for v in [1.0, 2.0, 6.0] {
            mean.push(v);
        }
        assert_eq!(mean.count(), 3);
        assert_eq!(mean.value(), Some(3.0));
    }

    #[test]
    fn test_median_odd_even_and_empty() {
        assert_eq!(median(vec![3.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(median(vec![4.0, 1.0, 3.0, 2.0]), Some(2.5));
        assert_eq!(median(vec![]), None);
        assert_eq!(median(vec![f64::NAN, 5.0]), Some(5.0));
    }

    #[test]
    fn test_sample_std_dev() {
        assert_eq!(sample_std_dev(&[7.0]), None);
        assert_eq!(sample_std_dev(&[]), None);

        let sd = sample_std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert!((sd - 2.138_089_935).abs() < 1e-6);
    }

    #[test]
    fn test_group_fold_keeps_first_appearance_order() {
        let rows = [("b", 1), ("a", 2), ("b", 3)];
        let groups = group_fold(rows.iter(), |r| r.0, |acc: &mut i32, r| *acc += r.1);
        assert_eq!(groups, vec![("b", 4), ("a", 2)]);
    }

    #[test]
    fn test_rank_desc_is_stable() {
        let items = vec![("x", 0.5), ("y", 0.9), ("z", 0.5), ("w", 0.1)];
        let ranked = rank_desc(items, |i| i.1, 3);
        assert_eq!(ranked, vec![("y", 0.9), ("x", 0.5), ("z", 0.5)]);
    }

    #[test]
    fn test_rank_desc_drops_nan() {
        let items = vec![("x", 0.5), ("nan", f64::NAN), ("y", 0.9)];
        let ranked = rank_desc(items, |i| i.1, 10);
        assert_eq!(ranked, vec![("y", 0.9), ("x", 0.5)]);
    }
}
