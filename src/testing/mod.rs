use single_utilities::traits::FloatOps;

pub mod correction;
pub mod inference;

pub mod utils;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TTestType {
    #[default]
    Student, // Equal variance
    Welch, // Unequal variance
}

#[derive(Debug, Clone)]
pub struct TestResult<T> {
    /// The test statistic value (t-statistic)
    pub statistic: T,
    /// The two-sided p-value of the test
    pub p_value: T,
    /// Degrees of freedom (for parametric inference)
    pub degrees_of_freedom: Option<T>,
    /// Standard error of the mean difference
    pub standard_error: Option<T>,
}

impl<T> TestResult<T>
where
    T: FloatOps,
{
    /// Create a new test result with minimal information
    pub fn new(statistic: T, p_value: T) -> Self {
        TestResult {
            statistic,
            p_value,
            degrees_of_freedom: None,
            standard_error: None,
        }
    }

    /// Add degrees of freedom to the result
    pub fn with_degrees_of_freedom(mut self, df: T) -> Self {
        self.degrees_of_freedom = Some(df);
        self
    }

    /// Add standard error to the result
    pub fn with_standard_error(mut self, se: T) -> Self {
        self.standard_error = Some(se);
        self
    }

    /// Check if the result passes the given threshold (inclusive)
    pub fn is_significant(&self, threshold: T) -> bool {
        self.p_value <= threshold
    }
}

#[derive(Debug, Clone)]
pub struct MultipleTestResults<T> {
    /// Test statistics for each row
    pub statistics: Vec<T>,
    /// Raw (unadjusted) p-values
    pub p_values: Vec<T>,
    /// Bonferroni-adjusted p-values
    pub adjusted_p_values: Option<Vec<T>>,
}

impl<T> MultipleTestResults<T>
where
    T: FloatOps,
{
    /// Create a new results object from p-values
    pub fn new(statistics: Vec<T>, p_values: Vec<T>) -> Self {
        MultipleTestResults {
            statistics,
            p_values,
            adjusted_p_values: None,
        }
    }

    /// Add adjusted p-values to the results
    pub fn with_adjusted_p_values(mut self, adjusted_p_values: Vec<T>) -> Self {
        self.adjusted_p_values = Some(adjusted_p_values);
        self
    }

    pub fn len(&self) -> usize {
        self.p_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.p_values.is_empty()
    }

    /// Indices of rows whose raw p-value is at or below `threshold`, in row order.
    pub fn significant_indices(&self, threshold: T) -> Vec<usize> {
        self.p_values
            .iter()
            .enumerate()
            .filter_map(|(i, &p)| if p <= threshold { Some(i) } else { None })
            .collect()
    }

    /// Get top n rows by raw p-value
    pub fn top_features(&self, n: usize) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.p_values.len()).collect();
        indices.sort_by(|&a, &b| {
            self.p_values[a]
                .partial_cmp(&self.p_values[b])
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        indices.truncate(n);
        indices
    }
}

/// Outcome of comparing two sample groups across every row of an expression set.
#[derive(Debug, Clone)]
pub struct DifferentialExpression {
    /// Per-row statistics and p-values, in row order
    pub results: MultipleTestResults<f64>,
    /// Bonferroni-corrected per-row threshold (`alpha / rows`)
    pub threshold: f64,
    /// Identifiers of rows at or below the threshold, in row order
    pub identifiers: Vec<String>,
}

impl DifferentialExpression {
    pub fn num_tested(&self) -> usize {
        self.results.len()
    }

    pub fn num_significant(&self) -> usize {
        self.identifiers.len()
    }
}
