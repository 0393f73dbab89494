use crate::sql::enums::operator::Operator;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum WhereClause {
    And(Vec<WhereClause>),
    Or(Vec<WhereClause>),
    Condition {
        field: String,
        operator: Operator,
        value: Value,
    },
}
