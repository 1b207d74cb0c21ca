// End-to-end tests for the mirna_de driver: files on disk in, result file out.

#[cfg(test)]
mod integration_tests {
    use mirna_de::pipeline::{self, Config};
    use mirna_de::ExpressionError;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_inputs(dir: &Path, matrix: &str, identifiers: &str, header: &str) -> Config {
        let config = Config {
            expression_path: dir.join("expression.csv"),
            identifiers_path: dir.join("rownames.csv"),
            header_path: dir.join("header.csv"),
            output_path: dir.join("differentially_expressed.txt"),
            ..Config::default()
        };
        fs::write(&config.expression_path, matrix).unwrap();
        fs::write(&config.identifiers_path, identifiers).unwrap();
        fs::write(&config.header_path, header).unwrap();
        config
    }

    const HEADER: &str = "\"AML\",\"AML\",\"AML\",\"Skin\",\"Skin\",\"Skin\"\n";

    // Six samples, five raw rows; mir-zero is dropped at load.
    const MATRIX: &str = "\
\"AML\",\"AML\",\"AML\",\"Skin\",\"Skin\",\"Skin\"
10.1,9.9,10.0,1.0,1.1,0.9
5.0,5.1,4.9,5.0,4.9,5.1
0,0,0,0,0,0
2.0,8.0,3.0,7.0,4.0,5.0
0.2,0.1,0.3,20.1,19.8,20.0
";

    const IDS: &str = "mir-high\nmir-flat\nmir-zero\nmir-noisy\nmir-up\n";

    #[test]
    fn test_concrete_scenario() {
        let dir = TempDir::new().unwrap();
        let config = write_inputs(
            dir.path(),
            "h1,h2,h3,h4\n1,1,2,2\n0,0,0,0\n5,1,5,1\n",
            "mir-a\nmir-b\nmir-c\n",
            "AML,AML,Skin,Skin\n",
        );

        let summary = pipeline::run(&config).unwrap();

        assert_eq!(summary.rows_dropped, 1);
        assert_eq!(summary.rows_tested, 2);
        assert_eq!(summary.threshold, 0.05 / 2.0);
        assert_eq!(summary.identifiers, vec!["mir-a"]);
        assert_eq!(fs::read_to_string(&config.output_path).unwrap(), "mir-a\n");
    }

    #[test]
    fn test_full_pipeline_writes_hits_in_row_order() {
        let dir = TempDir::new().unwrap();
        let config = write_inputs(dir.path(), MATRIX, IDS, HEADER);

        let summary = pipeline::run(&config).unwrap();
        assert_eq!(summary.rows_tested, 4);
        assert_eq!(summary.identifiers, vec!["mir-high", "mir-up"]);

        let written = fs::read_to_string(&config.output_path).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines, summary.identifiers);
        assert!(written.ends_with('\n'));
    }

    #[test]
    fn test_rerun_is_byte_identical() {
        let dir = TempDir::new().unwrap();
        let config = write_inputs(dir.path(), MATRIX, IDS, HEADER);

        pipeline::run(&config).unwrap();
        let first = fs::read(&config.output_path).unwrap();
        pipeline::run(&config).unwrap();
        let second = fs::read(&config.output_path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_identifiers_for_retained_rows_only() {
        let dir = TempDir::new().unwrap();
        let config = write_inputs(
            dir.path(),
            MATRIX,
            "mir-high\nmir-flat\nmir-noisy\nmir-up\n",
            HEADER,
        );
        let summary = pipeline::run(&config).unwrap();
        assert_eq!(summary.identifiers, vec!["mir-high", "mir-up"]);
    }

    #[test]
    fn test_swapped_groups_give_same_hits() {
        let dir = TempDir::new().unwrap();
        let mut config = write_inputs(dir.path(), MATRIX, IDS, HEADER);
        let forward = pipeline::run(&config).unwrap();

        std::mem::swap(&mut config.group1, &mut config.group2);
        let backward = pipeline::run(&config).unwrap();

        assert_eq!(forward.identifiers, backward.identifiers);
    }

    #[test]
    fn test_unknown_label_fails() {
        let dir = TempDir::new().unwrap();
        let mut config = write_inputs(dir.path(), MATRIX, IDS, HEADER);
        config.group2 = "Lung".to_string();

        let err = pipeline::run(&config).unwrap_err();
        match err.downcast_ref::<ExpressionError>() {
            Some(ExpressionError::EmptyGroup { label }) => assert_eq!(label, "Lung"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(!config.output_path.exists());
    }

    #[test]
    fn test_misaligned_identifiers_fail() {
        let dir = TempDir::new().unwrap();
        let config = write_inputs(dir.path(), MATRIX, "mir-high\nmir-flat\n", HEADER);

        let err = pipeline::run(&config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ExpressionError>(),
            Some(ExpressionError::IdentifierCountMismatch {
                identifiers: 2,
                retained: 4,
                dropped: 1
            })
        ));
    }

    #[test]
    fn test_blank_identifier_line_fails() {
        // without the check, csv would skip the gap and every later row would be mislabelled
        let dir = TempDir::new().unwrap();
        let ids = "mir-high\nmir-flat\n\nmir-noisy\nmir-up\n";
        let config = write_inputs(dir.path(), MATRIX, ids, HEADER);

        let err = pipeline::run(&config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ExpressionError>(),
            Some(ExpressionError::MissingIdentifier { line: 3, .. })
        ));
        assert!(!config.output_path.exists());
    }

    #[test]
    fn test_missing_input_fails_with_path() {
        let dir = TempDir::new().unwrap();
        let mut config = write_inputs(dir.path(), MATRIX, IDS, HEADER);
        config.expression_path = dir.path().join("absent.csv");

        let err = pipeline::run(&config).unwrap_err();
        assert!(format!("{:#}", err).contains("absent.csv"));
    }

    #[test]
    fn test_bad_number_fails() {
        let dir = TempDir::new().unwrap();
        let config = write_inputs(dir.path(), "a,b,c,d,e,f\n1,2,3,x,5,6\n", "mir-a\n", HEADER);

        let err = pipeline::run(&config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ExpressionError>(),
            Some(ExpressionError::ParseField { column: 3, .. })
        ));
    }
}
