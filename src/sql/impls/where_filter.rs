use crate::sql::enums::operator::Operator;
use crate::sql::enums::where_clause::WhereClause;
use crate::sql::errors::StatementError;
use crate::sql::structs::where_filter::Where;
use serde_json::{Map, Value};

impl Where {
    /// Matches every row.
    pub fn all() -> Self {
        Self { clause: None }
    }

    pub fn from_clause(clause: WhereClause) -> Self {
        Self { clause: Some(clause) }
    }

    pub fn eq(field: &str, value: impl Into<Value>) -> Self {
        Self::from_clause(WhereClause::Condition {
            field: field.to_string(),
            operator: Operator::Eq,
            value: value.into(),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.clause.is_none()
    }

    /// Parses the ORM's JSON where object, e.g.
    /// `{"name": "Bob", "age": {"gt": 21}, "or": [{"vip": true}, {"score": {"gte": 90}}]}`.
    pub fn from_value(value: &Value) -> Result<Where, StatementError> {
        match value {
            Value::Null => Ok(Where::all()),
            Value::Object(map) => Ok(Where { clause: combine(parse_object(map)?, WhereClause::And) }),
            other => Err(StatementError::InvalidWhere(format!("expected an object, got {}", other))),
        }
    }
}

impl TryFrom<Value> for Where {
    type Error = StatementError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Where::from_value(&value)
    }
}

fn combine(mut clauses: Vec<WhereClause>, wrap: fn(Vec<WhereClause>) -> WhereClause) -> Option<WhereClause> {
    match clauses.len() {
        0 => None,
        1 => clauses.pop(),
        _ => Some(wrap(clauses)),
    }
}

fn parse_object(map: &Map<String, Value>) -> Result<Vec<WhereClause>, StatementError> {
    let mut clauses = Vec::with_capacity(map.len());
    for (key, value) in map {
        match key.as_str() {
            "and" | "or" => {
                let branches = value
                    .as_array()
                    .ok_or_else(|| StatementError::InvalidWhere(format!("'{}' expects an array", key)))?;
                let mut parsed = Vec::with_capacity(branches.len());
                for branch in branches {
                    let branch = branch
                        .as_object()
                        .ok_or_else(|| StatementError::InvalidWhere(format!("'{}' entries must be objects", key)))?;
                    if let Some(clause) = combine(parse_object(branch)?, WhereClause::And) {
                        parsed.push(clause);
                    }
                }
                let wrap: fn(Vec<WhereClause>) -> WhereClause = if key == "and" { WhereClause::And } else { WhereClause::Or };
                if let Some(clause) = combine(parsed, wrap) {
                    clauses.push(clause);
                }
            }
            field => clauses.extend(parse_condition(field, value)?),
        }
    }
    Ok(clauses)
}

fn parse_condition(field: &str, value: &Value) -> Result<Vec<WhereClause>, StatementError> {
    let operators = match value {
        Value::Object(map) if !map.is_empty() => map,
        _ => {
            return Ok(vec![WhereClause::Condition {
                field: field.to_string(),
                operator: Operator::Eq,
                value: value.clone(),
            }]);
        }
    };

    let mut clauses = Vec::with_capacity(operators.len());
    for (key, operand) in operators {
        let operator = Operator::from_key(key)
            .ok_or_else(|| StatementError::InvalidWhere(format!("unsupported operator '{}' on {}", key, field)))?;
        match operator {
            Operator::Inq | Operator::Nin if !operand.is_array() => {
                return Err(StatementError::InvalidWhere(format!("'{}' on {} expects an array", key, field)));
            }
            Operator::Between if operand.as_array().map(Vec::len) != Some(2) => {
                return Err(StatementError::InvalidWhere(format!("'between' on {} expects two values", field)));
            }
            _ => {}
        }
        clauses.push(WhereClause::Condition {
            field: field.to_string(),
            operator,
            value: operand.clone(),
        });
    }
    Ok(clauses)
}
