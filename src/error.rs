use std::fmt;
use thiserror::Error;

/// Every problem found in the command line arguments, reported together.
#[derive(Debug, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<String>);

impl std::error::Error for ValidationErrors {}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation errors:")?;
        for error in &self.0 {
            write!(f, "\n- {error}")?;
        }
        Ok(())
    }
}

/// A single CSV field that could not be converted to its column type.
#[derive(Debug, PartialEq, Eq, Error)]
#[error("invalid {column} value '{value}': {reason}")]
pub struct FieldError {
    pub column: &'static str,
    pub value: String,
    pub reason: String,
}

impl FieldError {
    pub fn new(column: &'static str, value: &str, reason: impl fmt::Display) -> FieldError {
        FieldError {
            column,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Data integrity failures while reading a generated CSV file. These abort the whole load.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("Invalid line data in {file} at line {line_number}: expected {expected} fields but found {found}: '{line}'")]
    FieldCount {
        file: String,
        line_number: usize,
        expected: usize,
        found: usize,
        line: String,
    },

    #[error("Invalid line data in {file} at line {line_number}: {source}")]
    InvalidField {
        file: String,
        line_number: usize,
        #[source]
        source: FieldError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_list_every_problem() {
        let errors = ValidationErrors(vec![
            "Execution mode (--mode) is required".to_string(),
            "Number of records must be a positive integer bigger than zero".to_string(),
        ]);
        assert_eq!(
            errors.to_string(),
            "Validation errors:\n- Execution mode (--mode) is required\n- Number of records must be a positive integer bigger than zero"
        );
    }

    #[test]
    fn field_count_names_the_line() {
        let error = LoadError::FieldCount {
            file: "_orders.csv".to_string(),
            line_number: 7,
            expected: 3,
            found: 2,
            line: "\"a\",\"b\"".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("_orders.csv"));
        assert!(message.contains("line 7"));
        assert!(message.contains("expected 3 fields but found 2"));
    }
}
