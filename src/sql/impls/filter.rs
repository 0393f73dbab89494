use crate::sql::enums::order_direction::OrderDirection;
use crate::sql::errors::StatementError;
use crate::sql::structs::filter::Filter;
use crate::sql::structs::paging::Paging;
use crate::sql::structs::where_filter::Where;
use serde_json::Value;

impl Filter {
    pub fn new(where_filter: Where) -> Self {
        Self {
            where_filter,
            ..Default::default()
        }
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn skip(mut self, skip: u64) -> Self {
        self.skip = Some(skip);
        self
    }

    pub fn order_by(mut self, field: &str, direction: OrderDirection) -> Self {
        self.order.push((field.to_string(), direction));
        self
    }

    pub fn fields(mut self, fields: &[&str]) -> Self {
        self.fields = fields.iter().map(|field| field.to_string()).collect();
        self
    }

    pub fn paging(&self) -> Option<Paging> {
        if self.limit.is_none() && self.skip.is_none() {
            return None;
        }
        Some(Paging {
            limit: self.limit,
            offset: self.skip,
        })
    }

    /// Parses `{"where": {...}, "limit": 10, "skip": 20, "order": "name DESC", "fields": ["id", "name"]}`.
    pub fn from_value(value: &Value) -> Result<Filter, StatementError> {
        let map = match value {
            Value::Null => return Ok(Filter::default()),
            Value::Object(map) => map,
            other => return Err(StatementError::InvalidFilter(format!("expected an object, got {}", other))),
        };

        let mut filter = Filter::new(Where::from_value(map.get("where").unwrap_or(&Value::Null))?);
        filter.limit = parse_count(map.get("limit"), "limit")?;
        filter.skip = match parse_count(map.get("skip"), "skip")? {
            Some(skip) => Some(skip),
            None => parse_count(map.get("offset"), "offset")?,
        };

        match map.get("order") {
            None | Some(Value::Null) => {}
            Some(Value::String(order)) => filter.order.push(parse_order(order)?),
            Some(Value::Array(orders)) => {
                for order in orders {
                    let order = order
                        .as_str()
                        .ok_or_else(|| StatementError::InvalidFilter("order entries must be strings".to_string()))?;
                    filter.order.push(parse_order(order)?);
                }
            }
            Some(other) => return Err(StatementError::InvalidFilter(format!("invalid order {}", other))),
        }

        match map.get("fields") {
            None | Some(Value::Null) => {}
            Some(Value::Array(fields)) => {
                for field in fields {
                    let field = field
                        .as_str()
                        .ok_or_else(|| StatementError::InvalidFilter("fields entries must be strings".to_string()))?;
                    filter.fields.push(field.to_string());
                }
            }
            Some(Value::Object(fields)) => {
                filter.fields = fields
                    .iter()
                    .filter(|(_, included)| included.as_bool().unwrap_or(false))
                    .map(|(field, _)| field.clone())
                    .collect();
            }
            Some(other) => return Err(StatementError::InvalidFilter(format!("invalid fields {}", other))),
        }

        Ok(filter)
    }
}

fn parse_count(value: Option<&Value>, name: &str) -> Result<Option<u64>, StatementError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_u64()
            .map(Some)
            .ok_or_else(|| StatementError::InvalidFilter(format!("{} must be a non-negative integer", name))),
    }
}

fn parse_order(order: &str) -> Result<(String, OrderDirection), StatementError> {
    let mut parts = order.split_whitespace();
    let field = parts
        .next()
        .ok_or_else(|| StatementError::InvalidFilter("empty order".to_string()))?;
    let direction = match parts.next() {
        None => OrderDirection::Asc,
        Some(direction) => OrderDirection::parse(direction)
            .ok_or_else(|| StatementError::InvalidFilter(format!("invalid order direction '{}'", direction)))?,
    };
    Ok((field.to_string(), direction))
}
