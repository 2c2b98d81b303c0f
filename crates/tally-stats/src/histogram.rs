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

//! Bucket-weighted statistics over frequency counts.
//!
//! Functions here interpret a sample positionally: the index is the bucket
//! value and the element is the frequency count observed for that bucket,
//! as in a 0-255 pixel-intensity histogram. The same slice fed to
//! [`crate::descriptive`] is read as raw observations instead; which
//! interpretation applies is decided by the function invoked, not by the
//! data.

use crate::error::{Result, StatsError};

/// Returns the bucket-weighted mean of a histogram.
///
/// Computes `sum(i * h[i]) / sum(h[i])` over all bucket indices `i`. This
/// is the mean of the underlying observations the counts describe, not the
/// mean of the counts themselves; for the latter see
/// [`crate::descriptive::average`]. A histogram whose counts sum to zero
/// yields NaN.
///
/// # Errors
///
/// [`StatsError::EmptySample`] if the histogram has no buckets.
///
/// # Examples
///
/// ```
/// # use tally_stats::histogram;
/// // Four observations in bucket 2, four in bucket 0.
/// assert_eq!(histogram::mean(&[4.0, 0.0, 4.0]).unwrap(), 1.0);
/// ```
pub fn mean(histogram: &[f64]) -> Result<f64> {
    if histogram.is_empty() {
        return Err(StatsError::EmptySample { operation: "mean" });
    }
    let total: f64 = histogram.iter().sum();
    let weighted: f64 = histogram
        .iter()
        .enumerate()
        .map(|(bucket, count)| bucket as f64 * count)
        .sum();
    Ok(weighted / total)
}

/// Returns the bucket-weighted variance of a histogram.
///
/// Computes `sum((i - mean)^2 * h[i])` over all bucket indices, using the
/// bucket-weighted [`mean`]. The result is the raw weighted sum of squared
/// deviations; it is not divided by the total count. For the unweighted
/// variance of the counts themselves see
/// [`crate::descriptive::sample_variance`].
///
/// # Errors
///
/// [`StatsError::EmptySample`] if the histogram has no buckets.
pub fn population_variance(histogram: &[f64]) -> Result<f64> {
    if histogram.is_empty() {
        return Err(StatsError::EmptySample {
            operation: "population_variance",
        });
    }
    let m = mean(histogram)?;
    Ok(histogram
        .iter()
        .enumerate()
        .map(|(bucket, count)| {
            let deviation = bucket as f64 - m;
            deviation * deviation * count
        })
        .sum())
}

/// Returns the square root of [`population_variance`].
///
/// # Errors
///
/// [`StatsError::EmptySample`] if the histogram has no buckets.
pub fn population_std_dev(histogram: &[f64]) -> Result<f64> {
    if histogram.is_empty() {
        return Err(StatsError::EmptySample {
            operation: "population_std_dev",
        });
    }
    Ok(population_variance(histogram)?.sqrt())
}

/// Returns the mean absolute deviation of the elements from the
/// bucket-weighted [`mean`].
///
/// Computes `sum(|h[i] - mean|) / len`. Note the mixed interpretation:
/// deviations are taken for the raw element values while the center is the
/// bucket-weighted mean. This matches the index-based deviation measure
/// used for histogram summaries; it is not weighted by frequency.
///
/// # Errors
///
/// [`StatsError::EmptySample`] if the histogram has no buckets.
pub fn mean_abs_deviation(histogram: &[f64]) -> Result<f64> {
    if histogram.is_empty() {
        return Err(StatsError::EmptySample {
            operation: "mean_abs_deviation",
        });
    }
    let m = mean(histogram)?;
    let total: f64 = histogram.iter().map(|count| (count - m).abs()).sum();
    Ok(total / histogram.len() as f64)
}

/// Returns the smallest bucket index at which the cumulative count reaches
/// or exceeds `pixels`.
///
/// Scans buckets in ascending order, accumulating counts; the bucket whose
/// count carries the running total to at least `pixels` is returned. Used
/// to turn a target pixel count into the intensity value at that point of
/// the distribution.
///
/// # Errors
///
/// [`StatsError::ThresholdNotReached`] if the histogram's total count stays
/// below `pixels`.
///
/// # Examples
///
/// ```
/// # use tally_stats::histogram;
/// let counts = [10.0, 20.0, 30.0];
/// // After bucket 0 the total is 10, bucket 1 carries it to 30 >= 15.
/// assert_eq!(histogram::rgb_value(&counts, 15.0).unwrap(), 1);
/// ```
pub fn rgb_value(histogram: &[f64], pixels: f64) -> Result<usize> {
    let mut cumulative = 0.0;
    for (bucket, count) in histogram.iter().enumerate() {
        if cumulative + count >= pixels {
            return Ok(bucket);
        }
        cumulative += count;
    }
    Err(StatsError::ThresholdNotReached {
        threshold: pixels,
        total: cumulative,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn test_mean_weights_by_bucket() {
        // 3 observations in bucket 0, 1 in bucket 3: (0*3 + 3*1) / 4.
        let histogram = [3.0, 0.0, 0.0, 1.0];
        assert_eq!(mean(&histogram).unwrap(), 0.75);
    }

    #[test]
    fn test_mean_differs_from_average_of_counts() {
        let histogram = [3.0, 0.0, 0.0, 1.0];
        let average = crate::descriptive::average(&histogram).unwrap();
        assert_ne!(mean(&histogram).unwrap(), average);
    }

    #[test]
    fn test_mean_zero_total_is_nan() {
        assert!(mean(&[0.0, 0.0, 0.0]).unwrap().is_nan());
    }

    #[test]
    fn test_population_variance_is_weighted_sum() {
        // Mean of [2, 0, 2] is (0*2 + 2*2) / 4 = 1.
        // Deviations: (0-1)^2 * 2 + (1-1)^2 * 0 + (2-1)^2 * 2 = 4.
        let histogram = [2.0, 0.0, 2.0];
        assert!((population_variance(&histogram).unwrap() - 4.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_population_std_dev_is_sqrt_of_variance() {
        let histogram = [5.0, 1.0, 7.0, 3.0];
        let variance = population_variance(&histogram).unwrap();
        assert_eq!(population_std_dev(&histogram).unwrap(), variance.sqrt());
    }

    #[test]
    fn test_mean_abs_deviation_uses_raw_elements() {
        // Weighted mean of [2, 0, 2] is 1; |2-1| + |0-1| + |2-1| = 3.
        let histogram = [2.0, 0.0, 2.0];
        assert!((mean_abs_deviation(&histogram).unwrap() - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_rgb_value_reaches_threshold_mid_bucket() {
        assert_eq!(rgb_value(&[10.0, 20.0, 30.0], 15.0).unwrap(), 1);
    }

    #[test]
    fn test_rgb_value_first_bucket() {
        assert_eq!(rgb_value(&[10.0, 20.0, 30.0], 5.0).unwrap(), 0);
    }

    #[test]
    fn test_rgb_value_exact_total() {
        assert_eq!(rgb_value(&[10.0, 20.0, 30.0], 60.0).unwrap(), 2);
    }

    #[test]
    fn test_rgb_value_threshold_not_reached() {
        assert_eq!(
            rgb_value(&[10.0, 20.0, 30.0], 61.0),
            Err(StatsError::ThresholdNotReached {
                threshold: 61.0,
                total: 60.0,
            })
        );
    }

    #[test]
    fn test_empty_histogram_errors() {
        let empty: [f64; 0] = [];
        assert_eq!(
            mean(&empty),
            Err(StatsError::EmptySample { operation: "mean" })
        );
        assert_eq!(
            population_variance(&empty),
            Err(StatsError::EmptySample {
                operation: "population_variance"
            })
        );
        assert_eq!(
            population_std_dev(&empty),
            Err(StatsError::EmptySample {
                operation: "population_std_dev"
            })
        );
        assert_eq!(
            mean_abs_deviation(&empty),
            Err(StatsError::EmptySample {
                operation: "mean_abs_deviation"
            })
        );
        assert_eq!(
            rgb_value(&empty, 1.0),
            Err(StatsError::ThresholdNotReached {
                threshold: 1.0,
                total: 0.0,
            })
        );
    }
}
