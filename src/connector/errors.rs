use crate::connector::enums::transaction_state::TransactionState;
use crate::driver::errors::ExecutionError;
use crate::sql::errors::StatementError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConnectorError {
    /// Raised by the driver; passed through unmodified.
    #[error(transparent)]
    Execution(#[from] ExecutionError),

    #[error(transparent)]
    Statement(#[from] StatementError),

    #[error("No identifier returned for model {0}")]
    MissingIdentifier(String),

    #[error("Transaction {id} is already {state}")]
    TransactionFinished { id: u64, state: TransactionState },

    #[error("Invalid row: {0}")]
    InvalidRow(String),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Data source {0} has not been initialized")]
    NotInitialized(String),
}
