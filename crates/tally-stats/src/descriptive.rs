// Dweve Tally - Benchmarking and Sample Statistics
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Statistics over the raw values of a sample.
//!
//! Every function here treats each element as one observation. For the
//! bucket-weighted interpretation of a sample see [`crate::histogram`];
//! in particular [`average`] and `histogram::mean` are distinct operations
//! and must not be conflated.

use crate::error::{Result, StatsError};

/// Sorts a sample in place, ascending.
///
/// Comparison uses the IEEE 754 total order ([`f64::total_cmp`]), so every
/// pair of elements compares consistently and the result is totally
/// ordered; elements are never compared textually.
///
/// # Examples
///
/// ```
/// # use tally_stats::descriptive;
/// let mut values = [3.0, 1.0, 2.0];
/// descriptive::sort(&mut values);
/// assert_eq!(values, [1.0, 2.0, 3.0]);
/// ```
pub fn sort(values: &mut [f64]) {
    values.sort_unstable_by(f64::total_cmp);
}

/// Returns the smallest value in the sample.
///
/// # Errors
///
/// [`StatsError::EmptySample`] if the sample has no elements.
pub fn min(values: &[f64]) -> Result<f64> {
    values
        .iter()
        .copied()
        .reduce(f64::min)
        .ok_or(StatsError::EmptySample { operation: "min" })
}

/// Returns the largest value in the sample.
///
/// # Errors
///
/// [`StatsError::EmptySample`] if the sample has no elements.
pub fn max(values: &[f64]) -> Result<f64> {
    values
        .iter()
        .copied()
        .reduce(f64::max)
        .ok_or(StatsError::EmptySample { operation: "max" })
}

/// Returns the arithmetic sum of the sample, `0.0` when empty.
pub fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Returns the arithmetic mean of the raw values, `sum / len`.
///
/// # Errors
///
/// [`StatsError::EmptySample`] if the sample has no elements.
pub fn average(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(StatsError::EmptySample {
            operation: "average",
        });
    }
    Ok(sum(values) / values.len() as f64)
}

/// Returns the median of the sample.
///
/// Operates on a sorted copy; the caller's sample is left untouched. For an
/// even number of values the result is the mean of the two central values,
/// for an odd number the value at index `len / 2` of the sorted copy.
///
/// # Errors
///
/// [`StatsError::EmptySample`] if the sample has no elements.
///
/// # Examples
///
/// ```
/// # use tally_stats::descriptive;
/// assert_eq!(descriptive::median(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap(), 3.0);
/// assert_eq!(descriptive::median(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 2.5);
/// ```
pub fn median(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(StatsError::EmptySample { operation: "median" });
    }
    let mut sorted = values.to_vec();
    sort(&mut sorted);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Ok(sorted[mid])
    }
}

/// Returns the number of elements in the sample.
pub fn count(values: &[f64]) -> usize {
    values.len()
}

/// Returns the variance of the raw values around their [`average`].
///
/// Divides by the number of values, not `n - 1`, despite the name; callers
/// expecting the unbiased sample estimator must correct for that.
///
/// # Errors
///
/// [`StatsError::EmptySample`] if the sample has no elements.
pub fn sample_variance(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(StatsError::EmptySample {
            operation: "sample_variance",
        });
    }
    let avg = average(values)?;
    let sum_sq: f64 = values.iter().map(|x| (x - avg) * (x - avg)).sum();
    Ok(sum_sq / values.len() as f64)
}

/// Returns the square root of [`sample_variance`].
///
/// # Errors
///
/// [`StatsError::EmptySample`] if the sample has no elements.
pub fn sample_std_dev(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(StatsError::EmptySample {
            operation: "sample_std_dev",
        });
    }
    Ok(sample_variance(values)?.sqrt())
}

/// Returns `max - min` of the sample.
///
/// # Errors
///
/// [`StatsError::EmptySample`] if the sample has no elements.
pub fn range(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(StatsError::EmptySample { operation: "range" });
    }
    Ok(max(values)? - min(values)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn test_sort_ascending() {
        let mut values = [5.0, 1.0, 4.0, 1.0, 3.0, 2.0];
        sort(&mut values);
        assert_eq!(values, [1.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_sort_idempotent() {
        let mut once = [9.0, -2.0, 7.0, 0.5, 7.0];
        sort(&mut once);
        let mut twice = once;
        sort(&mut twice);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_sort_is_permutation() {
        let input = [3.0, 1.0, 2.0, 1.0];
        let mut sorted = input;
        sort(&mut sorted);
        // Non-decreasing output containing exactly the input values.
        assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
        for v in input {
            let before = input.iter().filter(|&&x| x == v).count();
            let after = sorted.iter().filter(|&&x| x == v).count();
            assert_eq!(before, after);
        }
    }

    #[test]
    fn test_min_max_bound_all_elements() {
        let values = [2.0, -7.5, 4.0, 0.0, 11.0];
        let lo = min(&values).unwrap();
        let hi = max(&values).unwrap();
        assert_eq!(lo, -7.5);
        assert_eq!(hi, 11.0);
        for v in values {
            assert!(lo <= v && v <= hi);
        }
    }

    #[test]
    fn test_sum_empty_is_zero() {
        assert_eq!(sum(&[]), 0.0);
    }

    #[test]
    fn test_sum_equals_average_times_count() {
        let values = [1.5, 2.5, 3.0, 10.0, -4.0];
        let lhs = sum(&values);
        let rhs = average(&values).unwrap() * count(&values) as f64;
        assert!((lhs - rhs).abs() < TOLERANCE);
    }

    #[test]
    fn test_median_odd() {
        assert_eq!(median(&[5.0, 1.0, 3.0, 2.0, 4.0]).unwrap(), 3.0);
    }

    #[test]
    fn test_median_even() {
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]).unwrap(), 2.5);
    }

    #[test]
    fn test_median_does_not_mutate_input() {
        let values = [3.0, 1.0, 2.0];
        let _ = median(&values).unwrap();
        assert_eq!(values, [3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_sample_variance_divides_by_n() {
        // Values 2, 4, 6: average 4, squared deviations 4 + 0 + 4 = 8.
        let values = [2.0, 4.0, 6.0];
        assert!((sample_variance(&values).unwrap() - 8.0 / 3.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_sample_std_dev_is_sqrt_of_variance() {
        let values = [2.0, 4.0, 6.0, 9.0];
        let variance = sample_variance(&values).unwrap();
        assert_eq!(sample_std_dev(&values).unwrap(), variance.sqrt());
    }

    #[test]
    fn test_range() {
        let values = [2.0, -7.5, 4.0, 0.0, 11.0];
        assert_eq!(range(&values).unwrap(), 18.5);
        assert_eq!(
            range(&values).unwrap(),
            max(&values).unwrap() - min(&values).unwrap()
        );
    }

    #[test]
    fn test_empty_sample_errors() {
        let empty: [f64; 0] = [];
        assert_eq!(
            min(&empty),
            Err(StatsError::EmptySample { operation: "min" })
        );
        assert_eq!(
            max(&empty),
            Err(StatsError::EmptySample { operation: "max" })
        );
        assert_eq!(
            average(&empty),
            Err(StatsError::EmptySample {
                operation: "average"
            })
        );
        assert_eq!(
            median(&empty),
            Err(StatsError::EmptySample {
                operation: "median"
            })
        );
        assert_eq!(
            sample_variance(&empty),
            Err(StatsError::EmptySample {
                operation: "sample_variance"
            })
        );
        assert_eq!(
            sample_std_dev(&empty),
            Err(StatsError::EmptySample {
                operation: "sample_std_dev"
            })
        );
        assert_eq!(
            range(&empty),
            Err(StatsError::EmptySample { operation: "range" })
        );
    }

    #[test]
    fn test_count() {
        assert_eq!(count(&[]), 0);
        assert_eq!(count(&[1.0, 2.0]), 2);
    }

    #[test]
    fn test_single_element_sample() {
        let values = [7.0];
        assert_eq!(min(&values).unwrap(), 7.0);
        assert_eq!(max(&values).unwrap(), 7.0);
        assert_eq!(average(&values).unwrap(), 7.0);
        assert_eq!(median(&values).unwrap(), 7.0);
        assert_eq!(sample_variance(&values).unwrap(), 0.0);
        assert_eq!(range(&values).unwrap(), 0.0);
    }
}
