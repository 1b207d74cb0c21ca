//! Parametric statistical tests for expression data.
//!
//! Two-sample t-tests comparing sample groups row by row across a dense expression
//! matrix. Rows are independent, so the matrix-wide variant tests them in parallel.

use crate::testing::{TTestType, TestResult};
use ndarray::{Array2, ArrayView1};
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use single_utilities::traits::FloatOps;
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Perform t-tests on all rows comparing two groups of columns.
///
/// # Arguments
///
/// * `matrix` - Dense expression matrix (rows × samples)
/// * `group1_indices` - Column indices for the first group of samples
/// * `group2_indices` - Column indices for the second group of samples
/// * `test_type` - Type of t-test to perform (Student's or Welch's)
///
/// # Returns
///
/// Vector of `TestResult` objects, one per row in row order, containing t-statistics
/// and two-sided p-values.
pub fn t_test_matrix_groups(
    matrix: &Array2<f64>,
    group1_indices: &[usize],
    group2_indices: &[usize],
    test_type: TTestType,
) -> anyhow::Result<Vec<TestResult<f64>>> {
    if group1_indices.is_empty() || group2_indices.is_empty() {
        return Err(anyhow::anyhow!("Group indices cannot be empty"));
    }

    let ncols = matrix.ncols();
    if let Some(&col) = group1_indices
        .iter()
        .chain(group2_indices)
        .find(|&&c| c >= ncols)
    {
        return Err(anyhow::anyhow!(
            "Column index {} out of bounds for matrix with {} columns",
            col,
            ncols
        ));
    }

    let results: Vec<TestResult<f64>> = (0..matrix.nrows())
        .into_par_iter()
        .map(|i| {
            let row = matrix.row(i);
            let group1_values = gather(row, group1_indices);
            let group2_values = gather(row, group2_indices);
            t_test(&group1_values, &group2_values, test_type)
        })
        .collect();

    Ok(results)
}

#[inline]
fn gather(row: ArrayView1<'_, f64>, indices: &[usize]) -> Vec<f64> {
    indices.iter().map(|&c| row[c]).collect()
}

/// Perform a t-test comparing two samples.
///
/// This function performs either Student's t-test (assuming equal variances) or
/// Welch's t-test (allowing unequal variances) on two samples. Samples with fewer
/// than two observations give a statistic of 0 and a p-value of 1.
pub fn t_test<T>(x: &[T], y: &[T], test_type: TTestType) -> TestResult<f64>
where
    T: FloatOps,
{
    let nx = x.len();
    let ny = y.len();

    if nx < 2 || ny < 2 {
        return TestResult::new(0.0, 1.0);
    }

    let (mean1, var1) = mean_and_variance(x);
    let (mean2, var2) = mean_and_variance(y);

    t_test_from_moments(mean1, var1, nx as f64, mean2, var2, ny as f64, test_type)
}

/// Sample mean and unbiased variance, computed in two passes.
fn mean_and_variance<T>(x: &[T]) -> (f64, f64)
where
    T: FloatOps,
{
    let n = x.len() as f64;

    let mut sum = 0.0;
    for &val in x {
        sum += val.to_f64().unwrap_or(f64::NAN);
    }
    let mean = sum / n;

    let mut sum_sq_dev = 0.0;
    for &val in x {
        let dev = val.to_f64().unwrap_or(f64::NAN) - mean;
        sum_sq_dev += dev * dev;
    }

    (mean, sum_sq_dev / (n - 1.0))
}

/// Perform a t-test using precomputed summary statistics.
///
/// Computes the t-test from per-group sum and sum-of-squares without the raw
/// observations.
///
/// # Arguments
///
/// * `sum1`, `sum_sq1`, `n1` - Sum, sum of squares, and count for group 1
/// * `sum2`, `sum_sq2`, `n2` - Sum, sum of squares, and count for group 2
/// * `test_type` - Type of t-test to perform (Student's or Welch's)
pub fn t_test_from_sums(
    sum1: f64,
    sum_sq1: f64,
    n1: f64,
    sum2: f64,
    sum_sq2: f64,
    n2: f64,
    test_type: TTestType,
) -> TestResult<f64> {
    if n1 < 2.0 || n2 < 2.0 {
        return TestResult::new(0.0, 1.0);
    }

    let mean1 = sum1 / n1;
    let mean2 = sum2 / n2;

    // Computational formula; clamp the rounding residue of constant groups
    let var1 = ((sum_sq1 - sum1 * sum1 / n1) / (n1 - 1.0)).max(0.0);
    let var2 = ((sum_sq2 - sum2 * sum2 / n2) / (n2 - 1.0)).max(0.0);

    t_test_from_moments(mean1, var1, n1, mean2, var2, n2, test_type)
}

/// Perform a t-test from group means, unbiased variances, and sizes.
pub fn t_test_from_moments(
    mean1: f64,
    var1: f64,
    n1: f64,
    mean2: f64,
    var2: f64,
    n2: f64,
    test_type: TTestType,
) -> TestResult<f64> {
    if n1 < 2.0 || n2 < 2.0 {
        return TestResult::new(0.0, 1.0);
    }

    let mean_diff = mean1 - mean2;

    let (t_stat, df, std_err) = match test_type {
        TTestType::Student => {
            // Student's t-test (pooled variance)
            let pooled_var = ((n1 - 1.0) * var1 + (n2 - 1.0) * var2) / (n1 + n2 - 2.0);
            let std_err = (pooled_var * (1.0 / n1 + 1.0 / n2)).sqrt();
            (mean_diff / std_err, n1 + n2 - 2.0, std_err)
        }
        TTestType::Welch => {
            // Welch's t-test (unequal variances)
            let term1 = var1 / n1;
            let term2 = var2 / n2;
            let combined_var = term1 + term2;
            let std_err = combined_var.sqrt();

            // Welch-Satterthwaite equation for degrees of freedom
            let df = combined_var * combined_var
                / (term1 * term1 / (n1 - 1.0) + term2 * term2 / (n2 - 1.0));
            (mean_diff / std_err, df, std_err)
        }
    };

    let p_value = two_sided_p_value(t_stat, df);
    TestResult::new(t_stat, p_value)
        .with_degrees_of_freedom(df)
        .with_standard_error(std_err)
}

/// Two-sided p-value of a t-statistic under Student's t distribution.
///
/// A NaN statistic (both groups constant and equal) maps to 1; an infinite one
/// (both groups constant and different) maps to 0.
fn two_sided_p_value(t_stat: f64, df: f64) -> f64 {
    if t_stat.is_nan() {
        return 1.0;
    }
    if t_stat.is_infinite() {
        return 0.0;
    }
    if df <= 0.0 || !df.is_finite() {
        return 1.0;
    }

    match StudentsT::new(0.0, 1.0, df) {
        Ok(t_dist) => (2.0 * t_dist.sf(t_stat.abs())).min(1.0),
        Err(_) => 1.0,
    }
}
