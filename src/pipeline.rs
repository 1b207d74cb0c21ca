//! End-to-end driver: load the three inputs, compare the two groups, write the hits.

use std::path::PathBuf;

use anyhow::Context;

use crate::data::ExpressionSet;
use crate::io;
use crate::testing::TTestType;
use crate::testing::inference::ExpressionStatTests;
use crate::testing::utils::SampleGroup;

pub const DEFAULT_EXPRESSION_FILE: &str = "miRNA_project_data.csv";
pub const DEFAULT_IDENTIFIER_FILE: &str = "soyars_project_data_rownames.csv";
pub const DEFAULT_HEADER_FILE: &str = "soyars_project_data.csv";
pub const DEFAULT_OUTPUT_FILE: &str = "differentially_expressed_miRNAs.txt";
pub const DEFAULT_GROUP1: &str = "AML";
pub const DEFAULT_GROUP2: &str = "Skin";

/// Family-wise significance level before Bonferroni correction.
pub const FAMILY_WISE_ALPHA: f64 = 0.05;

/// Input and output locations plus the two group labels to compare.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub expression_path: PathBuf,
    pub identifiers_path: PathBuf,
    pub header_path: PathBuf,
    pub output_path: PathBuf,
    pub group1: String,
    pub group2: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            expression_path: PathBuf::from(DEFAULT_EXPRESSION_FILE),
            identifiers_path: PathBuf::from(DEFAULT_IDENTIFIER_FILE),
            header_path: PathBuf::from(DEFAULT_HEADER_FILE),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            group1: DEFAULT_GROUP1.to_string(),
            group2: DEFAULT_GROUP2.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Summary {
    /// Differentially expressed identifiers, in row order
    pub identifiers: Vec<String>,
    pub rows_tested: usize,
    pub rows_dropped: usize,
    pub threshold: f64,
}

impl Summary {
    pub fn count(&self) -> usize {
        self.identifiers.len()
    }
}

pub fn run(config: &Config) -> anyhow::Result<Summary> {
    log::info!("Loading expression matrix from {}", config.expression_path.display());
    let matrix = io::read_expression_matrix(&config.expression_path).with_context(|| {
        format!(
            "failed to load expression matrix {}",
            config.expression_path.display()
        )
    })?;
    let rows_dropped = matrix.dropped_rows.len();

    let identifiers = io::read_identifiers(&config.identifiers_path).with_context(|| {
        format!(
            "failed to load identifiers {}",
            config.identifiers_path.display()
        )
    })?;

    let header = io::read_header(&config.header_path)
        .with_context(|| format!("failed to load header {}", config.header_path.display()))?;

    let set = ExpressionSet::new(matrix, identifiers, header)
        .context("expression inputs do not line up")?;
    log::info!(
        "{} rows x {} samples ({} all-zero rows dropped)",
        set.nrows(),
        set.ncols(),
        rows_dropped
    );

    let group1 = SampleGroup::from_header(&config.group1, set.header());
    let group2 = SampleGroup::from_header(&config.group2, set.header());

    let de = set.differential_expression(&group1, &group2, TTestType::Student, FAMILY_WISE_ALPHA)?;

    io::write_identifiers(&config.output_path, de.identifiers.as_slice()).with_context(|| {
        format!("failed to write results to {}", config.output_path.display())
    })?;
    log::info!(
        "Wrote {} identifiers to {}",
        de.num_significant(),
        config.output_path.display()
    );

    Ok(Summary {
        rows_tested: de.num_tested(),
        rows_dropped,
        threshold: de.threshold,
        identifiers: de.identifiers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_fixed_names() {
        let config = Config::default();
        assert_eq!(config.expression_path, PathBuf::from("miRNA_project_data.csv"));
        assert_eq!(
            config.identifiers_path,
            PathBuf::from("soyars_project_data_rownames.csv")
        );
        assert_eq!(config.header_path, PathBuf::from("soyars_project_data.csv"));
        assert_eq!(
            config.output_path,
            PathBuf::from("differentially_expressed_miRNAs.txt")
        );
        assert_eq!(config.group1, "AML");
        assert_eq!(config.group2, "Skin");
    }
}
