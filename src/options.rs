use crate::error::ValidationErrors;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Generate the CSV files.
    Create,
    /// Load previously generated CSV files into the database.
    Insert,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub mode: Mode,
    pub records: usize,
    pub seed: Option<u64>,
}

impl Options {
    /// Checks the raw arguments, collecting every problem before giving up.
    pub fn build(
        mode: Option<Mode>,
        records: Option<i64>,
        seed: Option<u64>,
    ) -> Result<Options, ValidationErrors> {
        let mut errors = Vec::new();

        if mode.is_none() {
            errors.push("Execution mode (--mode) is required".to_string());
        }

        let mut count = 0;
        if mode != Some(Mode::Insert) {
            match records {
                None => errors.push("Number of records (--records) is required".to_string()),
                Some(n) if n <= 0 => errors.push(
                    "Number of records must be a positive integer bigger than zero".to_string(),
                ),
                Some(n) => match usize::try_from(n) {
                    Ok(n) => count = n,
                    Err(_) => errors.push(format!("Number of records {n} is too large")),
                },
            }
        }

        match mode {
            Some(mode) if errors.is_empty() => Ok(Options {
                mode,
                records: count,
                seed,
            }),
            _ => Err(ValidationErrors(errors)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn create_with_records() {
        let options = Options::build(Some(Mode::Create), Some(1000), Some(7)).unwrap();
        assert_eq!(
            options,
            Options {
                mode: Mode::Create,
                records: 1000,
                seed: Some(7)
            }
        );
    }

    #[test]
    fn insert_ignores_records() {
        let options = Options::build(Some(Mode::Insert), None, None).unwrap();
        assert_eq!(options.mode, Mode::Insert);
        assert_eq!(options.records, 0);
    }

    #[test_case(Some(Mode::Create), None, 1; "missing records")]
    #[test_case(Some(Mode::Create), Some(0), 1; "zero records")]
    #[test_case(Some(Mode::Create), Some(-5), 1; "negative records")]
    #[test_case(None, None, 2; "nothing given")]
    #[test_case(None, Some(-1), 2; "no mode and bad records")]
    fn problems_are_collected(mode: Option<Mode>, records: Option<i64>, expected: usize) {
        let errors = Options::build(mode, records, None).unwrap_err();
        assert_eq!(errors.0.len(), expected, "{errors}");
    }

    #[test]
    fn mode_parses_case_insensitively() {
        assert_eq!(Mode::from_str("CREATE", true).unwrap(), Mode::Create);
        assert_eq!(Mode::from_str("insert", true).unwrap(), Mode::Insert);
        assert!(Mode::from_str("update", true).is_err());
    }
}
