//! Order-preserving deduplication of generated values.

/// Keep the first occurrence of each value, preserving input order.
///
/// Equality is exact `PartialEq`. For floats this means values that differ only
/// by rounding noise are all kept; use [`unique_within`] to merge them instead.
#[must_use]
pub fn unique<T: PartialEq + Clone>(values: &[T]) -> Vec<T> {
    let mut kept: Vec<T> = Vec::with_capacity(values.len());
    for value in values {
        if !kept.contains(value) {
            kept.push(value.clone());
        }
    }
    kept
}

/// Keep the first of any run of values lying within `tolerance` of an earlier
/// kept value, preserving input order.
///
/// With `tolerance == 0.0` this behaves like [`unique`].
#[must_use]
pub fn unique_within(values: &[f64], tolerance: f64) -> Vec<f64> {
    let mut kept: Vec<f64> = Vec::with_capacity(values.len());
    for &value in values {
        if !kept.iter().any(|&k| (k - value).abs() <= tolerance) {
            kept.push(value);
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_occurrence_order() {
        assert_eq!(unique(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
    }

    #[test]
    fn idempotent_on_unique_input() {
        let values = [0.5, 0.1, 0.9, 0.3];
        let once = unique(&values);
        assert_eq!(once, values.to_vec());
        assert_eq!(unique(&once), once);
    }

    #[test]
    fn empty_input() {
        assert!(unique::<i64>(&[]).is_empty());
        assert!(unique_within(&[], 0.1).is_empty());
    }

    #[test]
    fn exact_equality_keeps_rounding_noise() {
        let values = [0.3, 0.1 + 0.2];
        assert_eq!(unique(&values).len(), 2);
    }

    #[test]
    fn tolerant_merges_rounding_noise() {
        let values = [0.3, 0.1 + 0.2, 0.4];
        assert_eq!(unique_within(&values, 1e-9), vec![0.3, 0.4]);
    }

    #[test]
    fn tolerant_zero_matches_exact() {
        let values = [1.0, 2.0, 1.0, 3.0];
        assert_eq!(unique_within(&values, 0.0), unique(&values));
    }
}
