use crate::data::ExpressionSet;
use crate::testing::utils::{SampleGroup, validate_groups};
use crate::testing::{DifferentialExpression, MultipleTestResults, TTestType, TestResult, correction};

pub mod parametric;

pub trait ExpressionStatTests {
    fn t_test(
        &self,
        group1_indices: &[usize],
        group2_indices: &[usize],
        test_type: TTestType,
    ) -> anyhow::Result<Vec<TestResult<f64>>>;

    /// Test every row for a difference between two sample groups and keep the rows
    /// whose p-value is at or below the Bonferroni threshold `alpha / rows`.
    fn differential_expression(
        &self,
        group1: &SampleGroup,
        group2: &SampleGroup,
        test_type: TTestType,
        alpha: f64,
    ) -> anyhow::Result<DifferentialExpression>;
}

impl ExpressionStatTests for ExpressionSet {
    fn t_test(
        &self,
        group1_indices: &[usize],
        group2_indices: &[usize],
        test_type: TTestType,
    ) -> anyhow::Result<Vec<TestResult<f64>>> {
        parametric::t_test_matrix_groups(self.values(), group1_indices, group2_indices, test_type)
    }

    fn differential_expression(
        &self,
        group1: &SampleGroup,
        group2: &SampleGroup,
        test_type: TTestType,
        alpha: f64,
    ) -> anyhow::Result<DifferentialExpression> {
        validate_groups(&[group1, group2], self.ncols())?;

        if self.is_empty() {
            log::warn!("No rows to test; every row was filtered out or the input was empty");
            return Ok(DifferentialExpression {
                results: MultipleTestResults::new(Vec::new(), Vec::new()),
                threshold: alpha,
                identifiers: Vec::new(),
            });
        }

        let threshold = correction::bonferroni_threshold(alpha, self.nrows())?;
        log::info!(
            "Testing {} rows: {} ({} samples) vs {} ({} samples), threshold {:e}",
            self.nrows(),
            group1.label,
            group1.len(),
            group2.label,
            group2.len(),
            threshold
        );

        let results = self.t_test(&group1.indices, &group2.indices, test_type)?;

        let statistics: Vec<_> = results.iter().map(|r| r.statistic).collect();
        let p_values: Vec<_> = results.iter().map(|r| r.p_value).collect();
        let adjusted_p_values = correction::bonferroni_correction(&p_values)?;

        let results = MultipleTestResults::new(statistics, p_values)
            .with_adjusted_p_values(adjusted_p_values);

        let identifiers: Vec<String> = results
            .significant_indices(threshold)
            .into_iter()
            .map(|i| self.identifiers()[i].clone())
            .collect();

        for i in results.top_features(5) {
            log::debug!(
                "{}: t = {:.4}, p = {:e}",
                self.identifiers()[i],
                results.statistics[i],
                results.p_values[i]
            );
        }

        Ok(DifferentialExpression {
            results,
            threshold,
            identifiers,
        })
    }
}
