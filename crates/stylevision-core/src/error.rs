use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::field::Field;

#[derive(Debug, Error)]
pub enum StylevisionError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("conflict: {0}")]
    Conflict(String),
}

/// One or more required fields are missing. Lists all of them, not just the first.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("Please fill in all mandatory fields: {}", join_labels(.missing))]
pub struct ValidationError {
    pub missing: Vec<Field>,
}

impl ValidationError {
    pub fn labels(&self) -> Vec<&'static str> {
        self.missing.iter().map(Field::label).collect()
    }
}

fn join_labels(fields: &[Field]) -> String {
    fields
        .iter()
        .map(Field::label)
        .collect::<Vec<_>>()
        .join(", ")
}

/// The price text did not parse as a finite decimal. The price is cleared
/// instead of rejecting the whole update.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("Please enter a valid price, e.g., 808.08 (got {input:?})")]
pub struct PriceFormatError {
    pub input: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_lists_every_missing_label() {
        let err = ValidationError {
            missing: vec![Field::Name, Field::Image, Field::Care],
        };
        assert_eq!(
            err.to_string(),
            "Please fill in all mandatory fields: Product Name, Product Image, Care"
        );
        assert_eq!(err.labels(), vec!["Product Name", "Product Image", "Care"]);
    }

    #[test]
    fn validation_converts_into_stylevision_error() {
        let err: StylevisionError = ValidationError {
            missing: vec![Field::Fit],
        }
        .into();
        assert!(matches!(err, StylevisionError::Validation(_)));
        assert!(err.to_string().ends_with("Fit"));
    }
}
