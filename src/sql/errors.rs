use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatementError {
    #[error("Unknown model: {0}")]
    UnknownModel(String),

    #[error("Model {model} has no property {property}")]
    UnknownProperty { model: String, property: String },

    #[error("Model {0} has no id property")]
    MissingId(String),

    #[error("No data to update for model {0}")]
    EmptyData(String),

    #[error("Invalid where filter: {0}")]
    InvalidWhere(String),

    #[error("Invalid filter: {0}")]
    InvalidFilter(String),
}
