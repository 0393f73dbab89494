use thiserror::Error;

/// Failure reported by the native driver.
///
/// The connector never rewrites these; whatever the driver put in here is what
/// the caller sees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ExecutionError {
    pub message: String,
    pub sql_state: Option<String>,
    pub native_code: Option<i32>,
}

impl ExecutionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            sql_state: None,
            native_code: None,
        }
    }

    pub fn with_sql_state(mut self, sql_state: impl Into<String>) -> Self {
        self.sql_state = Some(sql_state.into());
        self
    }

    pub fn with_native_code(mut self, native_code: i32) -> Self {
        self.native_code = Some(native_code);
        self
    }

    /// SQLSTATE class 08 is "connection exception".
    pub fn is_connection_error(&self) -> bool {
        self.sql_state.as_deref().is_some_and(|state| state.starts_with("08"))
    }

    /// SQLSTATE class 23 is "integrity constraint violation".
    pub fn is_constraint_violation(&self) -> bool {
        self.sql_state.as_deref().is_some_and(|state| state.starts_with("23"))
    }
}
