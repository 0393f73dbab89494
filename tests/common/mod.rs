#![allow(dead_code)]
use async_trait::async_trait;
use db2i_connector::config::structs::connection_settings::ConnectionSettings;
use db2i_connector::connector::structs::db2_connector::Db2Connector;
use db2i_connector::driver::enums::isolation_level::IsolationLevel;
use db2i_connector::driver::errors::ExecutionError;
use db2i_connector::driver::structs::execute_options::ExecuteOptions;
use db2i_connector::driver::structs::execution_result::ExecutionResult;
use db2i_connector::driver::structs::transaction_handle::TransactionHandle;
use db2i_connector::driver::traits::executor::Executor;
use db2i_connector::driver::types::Row;
use db2i_connector::model::enums::property_type::PropertyType;
use db2i_connector::model::structs::model_definition::ModelDefinition;
use db2i_connector::model::structs::property_definition::PropertyDefinition;
use parking_lot::Mutex;
use regex::Regex;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, AtomicU64, AtomicUsize, Ordering};

/// In-memory stand-in for a DB2 for i server holding a single table.
///
/// It understands exactly the statement shapes the connector generates for
/// one-column equality filters, which is enough to drive the CRUD paths end
/// to end. Column names are stored upper-cased, the way DB2 reports them.
#[derive(Default)]
pub struct FakeDb2 {
    pub rows: Mutex<BTreeMap<i64, Row>>,
    pub statements: Mutex<Vec<String>>,
    pub connects: AtomicUsize,
    pub commits: AtomicUsize,
    pub rollbacks: AtomicUsize,
    next_id: AtomicI64,
    next_transaction: AtomicU64,
    failure: Mutex<Option<ExecutionError>>,
}

impl FakeDb2 {
    pub fn new() -> Arc<FakeDb2> {
        Arc::new(FakeDb2::default())
    }

    /// The next `execute` fails with `error`.
    pub fn fail_next(&self, error: ExecutionError) {
        *self.failure.lock() = Some(error);
    }

    pub fn connect_count(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }

    pub fn last_statement(&self) -> Option<String> {
        self.statements.lock().last().cloned()
    }

    fn insert(&self, inner: &str, params: &[Value]) -> ExecutionResult {
        let columns = quoted_names(between(inner, "(", ")").unwrap_or_default());
        let mut row = Map::new();
        let mut values = params.iter();
        for column in columns.iter() {
            if inner.contains("VALUES (DEFAULT)") {
                break;
            }
            row.insert(column.to_uppercase(), values.next().cloned().unwrap_or(Value::Null));
        }
        let id = match row.get("ID").and_then(Value::as_i64) {
            Some(id) => id,
            None => self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
        };
        row.insert("ID".to_string(), Value::from(id));
        self.rows.lock().insert(id, row);
        ids(&[id])
    }

    fn update(&self, inner: &str, params: &[Value]) -> ExecutionResult {
        let set = inner
            .split_once(" SET ")
            .map(|(_, rest)| rest.split(" WHERE ").next().unwrap_or(rest))
            .unwrap_or_default();
        let columns = quoted_names(set);
        let filter = where_equals(inner, params.get(columns.len()));
        let mut touched = Vec::new();
        for (id, row) in self.rows.lock().iter_mut() {
            if !matches(row, &filter) {
                continue;
            }
            for (column, value) in columns.iter().zip(params.iter()) {
                row.insert(column.to_uppercase(), value.clone());
            }
            touched.push(*id);
        }
        ids(&touched)
    }

    fn delete(&self, inner: &str, params: &[Value]) -> ExecutionResult {
        let filter = where_equals(inner, params.first());
        let mut rows = self.rows.lock();
        let removed: Vec<i64> = rows
            .iter()
            .filter(|(_, row)| matches(row, &filter))
            .map(|(id, _)| *id)
            .collect();
        for id in &removed {
            rows.remove(id);
        }
        ids(&removed)
    }

    fn select(&self, sql: &str, params: &[Value]) -> ExecutionResult {
        let filter = where_equals(sql, params.first());
        let offset = capture(sql, r"OFFSET (\d+) ROWS").unwrap_or(0);
        let limit = capture(sql, r"FETCH FIRST (\d+) ROWS ONLY").unwrap_or(usize::MAX);
        let rows: Vec<Row> = self
            .rows
            .lock()
            .values()
            .filter(|row| matches(row, &filter))
            .skip(offset)
            .take(limit)
            .cloned()
            .collect();
        if sql.starts_with("SELECT COUNT(*)") {
            let mut count = Map::new();
            count.insert("CNT".to_string(), Value::from(rows.len() as u64));
            return ExecutionResult::from_rows(vec![count]);
        }
        ExecutionResult::from_rows(rows)
    }
}

#[async_trait]
impl Executor for FakeDb2 {
    async fn connect(&self) -> Result<(), ExecutionError> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn disconnect(&self) -> Result<(), ExecutionError> {
        Ok(())
    }

    async fn ping(&self) -> Result<(), ExecutionError> {
        Ok(())
    }

    async fn execute(&self, sql: &str, params: &[Value], _options: &ExecuteOptions) -> Result<ExecutionResult, ExecutionError> {
        self.statements.lock().push(sql.to_string());
        if let Some(error) = self.failure.lock().take() {
            return Err(error);
        }
        if let Some(inner) = unwrap_table(sql, "SELECT \"id\" FROM FINAL TABLE (") {
            if inner.starts_with("INSERT") {
                return Ok(self.insert(inner, params));
            }
            return Ok(self.update(inner, params));
        }
        if let Some(inner) = unwrap_table(sql, "SELECT \"id\" FROM OLD TABLE (") {
            return Ok(self.delete(inner, params));
        }
        if sql.starts_with("SELECT") {
            return Ok(self.select(sql, params));
        }
        Ok(ExecutionResult::affected(0))
    }

    async fn begin(&self, _isolation: IsolationLevel) -> Result<TransactionHandle, ExecutionError> {
        Ok(TransactionHandle(self.next_transaction.fetch_add(1, Ordering::SeqCst) + 1))
    }

    async fn commit(&self, _transaction: TransactionHandle) -> Result<(), ExecutionError> {
        self.commits.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn rollback(&self, _transaction: TransactionHandle) -> Result<(), ExecutionError> {
        self.rollbacks.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

pub fn customer_model() -> ModelDefinition {
    ModelDefinition::new("Customer")
        .with_property(PropertyDefinition::new("id", PropertyType::Integer).id().generated())
        .with_property(PropertyDefinition::new("name", PropertyType::String).length(64))
        .with_property(PropertyDefinition::new("active", PropertyType::Boolean))
}

pub fn test_settings(lazy_connect: bool) -> ConnectionSettings {
    ConnectionSettings {
        host: String::from("ibmi.test"),
        database: String::from("TESTDB"),
        username: String::from("QTEST"),
        password: String::from("secret"),
        lazy_connect,
        ..Default::default()
    }
}

pub fn create_test_connector(fake: Arc<FakeDb2>) -> Arc<Db2Connector> {
    let connector = Db2Connector::new(test_settings(true), fake).unwrap();
    connector.define_model(customer_model());
    Arc::new(connector)
}

pub fn record(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("records must be objects"),
    }
}

fn unwrap_table<'a>(sql: &'a str, prefix: &str) -> Option<&'a str> {
    sql.strip_prefix(prefix).and_then(|rest| rest.strip_suffix(')'))
}

fn between<'a>(text: &'a str, start: &str, end: &str) -> Option<&'a str> {
    let from = text.find(start)? + start.len();
    let to = text[from..].find(end)? + from;
    Some(&text[from..to])
}

fn quoted_names(text: &str) -> Vec<String> {
    text.split('"')
        .enumerate()
        .filter(|(index, _)| index % 2 == 1)
        .map(|(_, name)| name.to_string())
        .collect()
}

fn where_equals(sql: &str, value: Option<&Value>) -> Option<(String, Value)> {
    let column = between(sql, " WHERE \"", "\"=?")?;
    Some((column.to_uppercase(), value.cloned().unwrap_or(Value::Null)))
}

fn matches(row: &Row, filter: &Option<(String, Value)>) -> bool {
    match filter {
        None => true,
        Some((column, value)) => row.get(column) == Some(value),
    }
}

fn capture(sql: &str, pattern: &str) -> Option<usize> {
    Regex::new(pattern)
        .ok()?
        .captures(sql)?
        .get(1)?
        .as_str()
        .parse()
        .ok()
}

fn ids(ids: &[i64]) -> ExecutionResult {
    ExecutionResult::from_rows(
        ids.iter()
            .map(|id| {
                let mut row = Map::new();
                row.insert("id".to_string(), Value::from(*id));
                row
            })
            .collect(),
    )
}
