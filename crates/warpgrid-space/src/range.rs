//! Numeric range generation for populating axes.
//!
//! Two discretisations are provided. The incremental ("V1") form adds a fixed
//! step of `(end - start) / count` to the previous value and therefore stops
//! one step short of `end`; it is kept as is so that grids built with it stay
//! reproducible. The linear ("V2")
//! form spaces `count` values evenly over `[start, end]`, both bounds included.
//!
//! All four functions share the same edge-case behaviour:
//!
//! | Input | Output |
//! |---|---|
//! | `count == 0` | empty |
//! | `count == 1` | `[start]` |
//! | `start == end` | `count` copies of `start` |
//! | `end < start` | descending sequence from `start` (negative step) |

/// `count` values from `start`, each the previous plus `(end - start) / count`.
///
/// The step is accumulated, not multiplied out, so values carry the same
/// rounding as grids generated before.
#[must_use]
pub fn incremental_range(start: f64, end: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    let step = (end - start) / count as f64;
    std::iter::successors(Some(start), |v| Some(v + step))
        .take(count)
        .collect()
}

/// Integer form of [`incremental_range`]. Each value is truncated toward zero.
#[must_use]
pub fn incremental_range_int(start: i64, end: i64, count: usize) -> Vec<i64> {
    incremental_range(start as f64, end as f64, count)
        .into_iter()
        .map(|v| v.trunc() as i64)
        .collect()
}

/// `count` evenly spaced values from `start` to `end` inclusive.
///
/// The last element is exactly `end` whenever `count >= 2`.
#[must_use]
pub fn linear_range(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let span = end - start;
            let last = (count - 1) as f64;
            let mut values: Vec<f64> = (0..count).map(|i| start + span * i as f64 / last).collect();
            values[count - 1] = end;
            values
        }
    }
}

/// Integer form of [`linear_range`]. Each value is rounded to the nearest integer.
#[must_use]
pub fn linear_range_int(start: i64, end: i64, count: usize) -> Vec<i64> {
    linear_range(start as f64, end as f64, count)
        .into_iter()
        .map(|v| v.round() as i64)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incremental_has_count_elements() {
        for count in [0, 1, 2, 10, 100] {
            assert_eq!(incremental_range(0.0, 7.0, count).len(), count);
            assert_eq!(incremental_range_int(0, 7, count).len(), count);
        }
    }

    #[test]
    fn incremental_excludes_upper_bound() {
        let values = incremental_range(0.0, 10.0, 10);
        assert_eq!(values, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
    }

    #[test]
    fn incremental_int_truncates() {
        let values = incremental_range_int(0, 4, 10);
        assert_eq!(values, vec![0, 0, 0, 1, 1, 2, 2, 2, 3, 3]);
    }

    #[test]
    fn incremental_real_bounds() {
        let values = incremental_range(1.0, 5.0, 10);
        assert_eq!(values.len(), 10);
        assert_eq!(values[0], 1.0);
        assert!((values[9] - 4.6).abs() < 1e-12, "got {}", values[9]);
    }

    #[test]
    fn incremental_accumulates_step() {
        let values = incremental_range(1.0, 5.0, 10);
        assert_eq!(
            values,
            vec![
                1.0,
                1.4,
                1.7999999999999998,
                2.1999999999999997,
                2.5999999999999996,
                2.9999999999999996,
                3.3999999999999995,
                3.7999999999999994,
                4.199999999999999,
                4.6,
            ]
        );
    }

    #[test]
    fn incremental_int_truncates_accumulated_values() {
        // 0.4 accumulated ten times lands just below 4.0.
        let values = incremental_range_int(0, 40, 100);
        assert_eq!(&values[..12], &[0, 0, 0, 1, 1, 2, 2, 2, 3, 3, 3, 4]);
    }

    #[test]
    fn single_value_is_start() {
        assert_eq!(incremental_range(3.0, 9.0, 1), vec![3.0]);
        assert_eq!(linear_range(3.0, 9.0, 1), vec![3.0]);
        assert_eq!(incremental_range_int(3, 9, 1), vec![3]);
        assert_eq!(linear_range_int(3, 9, 1), vec![3]);
    }

    #[test]
    fn equal_bounds_repeat() {
        assert_eq!(incremental_range_int(0, 0, 4), vec![0, 0, 0, 0]);
        assert_eq!(linear_range(2.5, 2.5, 3), vec![2.5, 2.5, 2.5]);
    }

    #[test]
    fn reversed_bounds_descend() {
        assert_eq!(incremental_range(4.0, 0.0, 4), vec![4.0, 3.0, 2.0, 1.0]);
        assert_eq!(linear_range(4.0, 0.0, 5), vec![4.0, 3.0, 2.0, 1.0, 0.0]);
        assert_eq!(linear_range_int(10, 0, 3), vec![10, 5, 0]);
    }

    #[test]
    fn linear_is_bound_inclusive() {
        let values = linear_range(0.0, 10.0, 11);
        assert_eq!(values.len(), 11);
        assert_eq!(values[0], 0.0);
        assert_eq!(values[10], 10.0);
    }

    #[test]
    fn linear_pins_last_value() {
        let values = linear_range(0.0, 0.3, 7);
        assert_eq!(values[6], 0.3);
    }

    #[test]
    fn linear_int_rounds() {
        assert_eq!(linear_range_int(0, 10, 4), vec![0, 3, 7, 10]);
    }

    #[test]
    fn zero_count_is_empty() {
        assert!(linear_range(0.0, 1.0, 0).is_empty());
        assert!(incremental_range_int(0, 1, 0).is_empty());
    }
}
