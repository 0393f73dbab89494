use crate::sql::structs::statement::Statement;
use serde_json::Value;

impl Statement {
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
            paging: None,
        }
    }

    pub fn with_params(sql: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            sql: sql.into(),
            params,
            paging: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }

    /// Appends `other` separated by a single space, keeping parameter order.
    pub fn merge(&mut self, other: Statement) -> &mut Self {
        if other.sql.is_empty() {
            return self;
        }
        if !self.sql.is_empty() {
            self.sql.push(' ');
        }
        self.sql.push_str(&other.sql);
        self.params.extend(other.params);
        if other.paging.is_some() {
            self.paging = other.paging;
        }
        self
    }
}
