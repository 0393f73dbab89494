use crate::sql::structs::paging::Paging;
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<Value>,
    pub paging: Option<Paging>,
}
