use snafu::Snafu;
use validator::ValidationErrors;

#[derive(Debug, Snafu)]
#[snafu(visibility = "pub")]
pub enum ParkError {
    #[snafu(display("Invalid parameters: {}", errors))]
    InvalidParameters { errors: ValidationErrors },
    #[snafu(display("Invalid visitor: {}", reason))]
    InvalidVisitor { reason: String },
    #[snafu(display("Could not read ticket mapping: {}", source))]
    InvalidTickets { source: serde_json::Error },
}

impl ParkError {
    /// Field names that failed validation, empty for errors that are not field-level
    pub fn invalid_fields(&self) -> Vec<&'static str> {
        match self {
            ParkError::InvalidParameters { errors } => {
                let mut fields: Vec<&'static str> = errors.field_errors().keys().cloned().collect();
                fields.sort();
                fields
            }
            _ => Vec::new(),
        }
    }
}
