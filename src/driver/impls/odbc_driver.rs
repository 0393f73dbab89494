use crate::config::structs::connection_settings::ConnectionSettings;
use crate::driver::enums::isolation_level::IsolationLevel;
use crate::driver::errors::ExecutionError;
use crate::driver::structs::execute_options::ExecuteOptions;
use crate::driver::structs::execution_result::ExecutionResult;
use crate::driver::structs::odbc_driver::{OdbcDriver, OdbcPool};
use crate::driver::structs::transaction_handle::TransactionHandle;
use crate::driver::traits::executor::Executor;
use crate::driver::types::Row;
use async_trait::async_trait;
use log::{debug, info, warn};
use odbc_api::parameter::InputParameter;
use odbc_api::{Connection, ConnectionOptions, Cursor, DataType, Environment, IntoParameter, ResultSetMetadata};
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

static ODBC_ENVIRONMENT: OnceCell<Environment> = OnceCell::new();

fn environment() -> Result<&'static Environment, ExecutionError> {
    ODBC_ENVIRONMENT
        .get_or_try_init(Environment::new)
        .map_err(|error| odbc_error(&error))
}

pub(crate) fn odbc_error(error: &odbc_api::Error) -> ExecutionError {
    match error {
        odbc_api::Error::Diagnostics { record, .. } => ExecutionError::new(error.to_string())
            .with_sql_state(record.state.as_str())
            .with_native_code(record.native_error),
        _ => ExecutionError::new(error.to_string()),
    }
}

async fn blocking<T, F>(task: F) -> Result<T, ExecutionError>
where
    F: FnOnce() -> Result<T, ExecutionError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|error| ExecutionError::new(format!("ODBC worker failed: {}", error)))?
}

fn into_parameter(value: &Value) -> Box<dyn InputParameter> {
    match value {
        Value::Null => {
            let none: Option<i64> = None;
            Box::new(none.into_parameter())
        }
        Value::Bool(flag) => Box::new(i64::from(*flag).into_parameter()),
        Value::Number(number) => match number.as_i64() {
            Some(integer) => Box::new(integer.into_parameter()),
            None => Box::new(number.as_f64().unwrap_or_default().into_parameter()),
        },
        Value::String(text) => Box::new(text.clone().into_parameter()),
        other => Box::new(other.to_string().into_parameter()),
    }
}

fn text_to_value(data_type: &DataType, text: &str) -> Value {
    match data_type {
        DataType::Integer
        | DataType::SmallInt
        | DataType::BigInt
        | DataType::TinyInt
        | DataType::Decimal { scale: 0, .. }
        | DataType::Numeric { scale: 0, .. } => text
            .trim()
            .parse::<i64>()
            .map(Value::from)
            .unwrap_or_else(|_| Value::String(text.to_string())),
        DataType::Decimal { .. }
        | DataType::Numeric { .. }
        | DataType::Double
        | DataType::Float { .. }
        | DataType::Real => text
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(serde_json::Number::from_f64)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(text.to_string())),
        DataType::Bit => Value::Bool(text.trim() == "1"),
        _ => Value::String(text.to_string()),
    }
}

fn read_rows(cursor: &mut impl Cursor) -> Result<Vec<Row>, odbc_api::Error> {
    let names = cursor.column_names()?.collect::<Result<Vec<String>, _>>()?;
    let mut types = Vec::with_capacity(names.len());
    for index in 1..=names.len() {
        types.push(cursor.col_data_type(index as u16)?);
    }

    let mut rows = Vec::new();
    let mut buffer = Vec::new();
    while let Some(mut cursor_row) = cursor.next_row()? {
        let mut row = Row::new();
        for (index, name) in names.iter().enumerate() {
            buffer.clear();
            let value = if cursor_row.get_text((index + 1) as u16, &mut buffer)? {
                text_to_value(&types[index], &String::from_utf8_lossy(&buffer))
            } else {
                Value::Null
            };
            row.insert(name.clone(), value);
        }
        rows.push(row);
    }
    Ok(rows)
}

fn run_statement(connection: &Connection<'_>, sql: &str, params: &[Value]) -> Result<ExecutionResult, ExecutionError> {
    let parameters: Vec<Box<dyn InputParameter>> = params.iter().map(into_parameter).collect();
    let mut prepared = connection.prepare(sql).map_err(|error| odbc_error(&error))?;
    let rows = match prepared.execute(&parameters[..]).map_err(|error| odbc_error(&error))? {
        Some(mut cursor) => Some(read_rows(&mut cursor).map_err(|error| odbc_error(&error))?),
        None => None,
    };
    match rows {
        Some(rows) => Ok(ExecutionResult::from_rows(rows)),
        None => {
            let affected = prepared.row_count().map_err(|error| odbc_error(&error))?;
            Ok(ExecutionResult::affected(affected.unwrap_or(0) as u64))
        }
    }
}

impl OdbcPool {
    fn acquire(&self) -> Result<Connection<'static>, ExecutionError> {
        if let Some(connection) = self.idle.lock().pop() {
            return Ok(connection);
        }
        debug!("[ODBC] Opening new connection");
        environment()?
            .connect_with_connection_string(&self.connection_string, ConnectionOptions::default())
            .map_err(|error| odbc_error(&error))
    }

    fn release(&self, connection: Connection<'static>) {
        let mut idle = self.idle.lock();
        if idle.len() < self.max_idle {
            idle.push(connection);
        }
    }

    fn run(&self, sql: &str, params: &[Value]) -> Result<ExecutionResult, ExecutionError> {
        let connection = self.acquire()?;
        let result = run_statement(&connection, sql, params);
        match &result {
            Err(error) if error.is_connection_error() => {
                warn!("[ODBC] Dropping broken connection: {}", error);
            }
            _ => self.release(connection),
        }
        result
    }
}

impl OdbcDriver {
    pub fn new(settings: &ConnectionSettings) -> Self {
        Self {
            pool: Arc::new(OdbcPool {
                connection_string: settings.connection_string(),
                max_idle: settings.max_pool_size.max(1) as usize,
                idle: Mutex::new(Vec::new()),
            }),
            transactions: Mutex::new(HashMap::new()),
            next_transaction: AtomicU64::new(1),
        }
    }

    fn pinned(&self, transaction: TransactionHandle) -> Result<Arc<Mutex<Connection<'static>>>, ExecutionError> {
        self.transactions
            .lock()
            .get(&transaction)
            .cloned()
            .ok_or_else(|| ExecutionError::new(format!("Unknown transaction {}", transaction.0)))
    }

    fn unpin(&self, transaction: TransactionHandle) -> Result<Arc<Mutex<Connection<'static>>>, ExecutionError> {
        self.transactions
            .lock()
            .remove(&transaction)
            .ok_or_else(|| ExecutionError::new(format!("Unknown transaction {}", transaction.0)))
    }

    async fn finish(&self, transaction: TransactionHandle, commit: bool) -> Result<(), ExecutionError> {
        let pinned = self.unpin(transaction)?;
        let pool = self.pool.clone();
        blocking(move || {
            {
                let connection = pinned.lock();
                let outcome = if commit { connection.commit() } else { connection.rollback() };
                outcome.map_err(|error| odbc_error(&error))?;
                connection.set_autocommit(true).map_err(|error| odbc_error(&error))?;
            }
            if let Ok(connection) = Arc::try_unwrap(pinned) {
                pool.release(connection.into_inner());
            }
            Ok(())
        }).await
    }
}

#[async_trait]
impl Executor for OdbcDriver {
    async fn connect(&self) -> Result<(), ExecutionError> {
        let pool = self.pool.clone();
        blocking(move || {
            let connection = pool.acquire()?;
            pool.release(connection);
            Ok(())
        }).await?;
        info!("[ODBC] Connected");
        Ok(())
    }

    async fn disconnect(&self) -> Result<(), ExecutionError> {
        let pool = self.pool.clone();
        blocking(move || {
            pool.idle.lock().clear();
            Ok(())
        }).await?;
        info!("[ODBC] Disconnected");
        Ok(())
    }

    async fn ping(&self) -> Result<(), ExecutionError> {
        self.execute("SELECT 1 FROM SYSIBM.SYSDUMMY1", &[], &ExecuteOptions::default()).await?;
        Ok(())
    }

    async fn execute(
        &self,
        sql: &str,
        params: &[Value],
        options: &ExecuteOptions,
    ) -> Result<ExecutionResult, ExecutionError> {
        let sql = sql.to_string();
        let params = params.to_vec();
        match options.transaction {
            Some(transaction) => {
                let pinned = self.pinned(transaction)?;
                blocking(move || run_statement(&pinned.lock(), &sql, &params)).await
            }
            None => {
                let pool = self.pool.clone();
                blocking(move || pool.run(&sql, &params)).await
            }
        }
    }

    async fn begin(&self, isolation: IsolationLevel) -> Result<TransactionHandle, ExecutionError> {
        let pool = self.pool.clone();
        let connection = blocking(move || {
            let connection = pool.acquire()?;
            connection.set_autocommit(false).map_err(|error| odbc_error(&error))?;
            run_statement(&connection, &isolation.set_transaction_sql(), &[])?;
            Ok(connection)
        }).await?;

        let transaction = TransactionHandle(self.next_transaction.fetch_add(1, Ordering::SeqCst));
        self.transactions.lock().insert(transaction, Arc::new(Mutex::new(connection)));
        debug!("[ODBC] Began transaction {} ({})", transaction.0, isolation);
        Ok(transaction)
    }

    async fn commit(&self, transaction: TransactionHandle) -> Result<(), ExecutionError> {
        self.finish(transaction, true).await
    }

    async fn rollback(&self, transaction: TransactionHandle) -> Result<(), ExecutionError> {
        self.finish(transaction, false).await
    }
}
