//! Bonferroni multiple testing correction, controlling the family-wise error rate
//! when one test is run per expression row.

use anyhow::{Result, anyhow};

/// Per-test significance threshold under Bonferroni correction.
///
/// Each of `n_tests` tests is judged against `alpha / n_tests`.
///
/// # Example
/// ```
/// use mirna_de::testing::correction::bonferroni_threshold;
/// let threshold = bonferroni_threshold(0.05, 2).unwrap();
/// assert_eq!(threshold, 0.025);
/// ```
pub fn bonferroni_threshold(alpha: f64, n_tests: usize) -> Result<f64> {
    if n_tests == 0 {
        return Err(anyhow!("Bonferroni threshold needs at least one test"));
    }
    if !(alpha > 0.0 && alpha <= 1.0) {
        return Err(anyhow!("Alpha must be in (0, 1], got {}", alpha));
    }
    Ok(alpha / n_tests as f64)
}

/// Apply Bonferroni correction to p-values
///
/// Bonferroni correction is a simple but conservative method that multiplies
/// each p-value by the number of tests.
///
/// # Arguments
/// * `p_values` - A slice of p-values to adjust
///
/// # Returns
/// * `Result<Vec<f64>>` - Vector of adjusted p-values
///
/// # Example
/// ```
/// use mirna_de::testing::correction::bonferroni_correction;
/// let p_values = vec![0.01, 0.03, 0.05];
/// let adjusted = bonferroni_correction(&p_values).unwrap();
/// assert_eq!(adjusted.len(), 3);
/// ```
pub fn bonferroni_correction(p_values: &[f64]) -> Result<Vec<f64>> {
    let n = p_values.len();

    if n == 0 {
        return Err(anyhow!("Empty p-value array"));
    }

    // Validate p-values
    for (i, &p) in p_values.iter().enumerate() {
        if !(0.0..=1.0).contains(&p) {
            return Err(anyhow!("Invalid p-value at index {}: {}", i, p));
        }
    }

    // Multiply each p-value by n, capping at 1.0
    let adjusted = p_values.iter().map(|&p| (p * n as f64).min(1.0)).collect();

    Ok(adjusted)
}
