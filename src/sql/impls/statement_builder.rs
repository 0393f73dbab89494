use crate::model::enums::property_type::PropertyType;
use crate::model::structs::model_definition::ModelDefinition;
use crate::model::structs::property_definition::PropertyDefinition;
use crate::sql::enums::operator::Operator;
use crate::sql::enums::sql_dialect::SqlDialect;
use crate::sql::enums::where_clause::WhereClause;
use crate::sql::errors::StatementError;
use crate::sql::structs::filter::Filter;
use crate::sql::structs::statement::Statement;
use crate::sql::structs::statement_builder::StatementBuilder;
use crate::sql::structs::where_filter::Where;
use serde_json::{Map, Value};

impl StatementBuilder {
    pub fn new(dialect: SqlDialect, default_schema: Option<String>) -> Self {
        Self {
            dialect,
            default_schema,
        }
    }

    /// Quotes an identifier, doubling embedded quotes.
    pub fn escape_name(name: &str) -> String {
        format!("\"{}\"", name.replace('"', "\"\""))
    }

    /// `"SCHEMA"."TABLE"`; the model's own schema wins over the connection default.
    pub fn table_name(&self, model: &ModelDefinition) -> String {
        let table = Self::escape_name(model.table_name());
        match model.schema.as_deref().or(self.default_schema.as_deref()) {
            Some(schema) if !schema.is_empty() => format!("{}.{}", Self::escape_name(schema), table),
            _ => table,
        }
    }

    /// Unquoted column name of the model identifier.
    pub fn id_name(&self, model: &ModelDefinition) -> Result<String, StatementError> {
        model
            .id_property()
            .map(|property| property.column_name().to_string())
            .ok_or_else(|| StatementError::MissingId(model.name.clone()))
    }

    pub fn to_column_value(property: &PropertyDefinition, value: &Value) -> Value {
        match (property.property_type, value) {
            (_, Value::Null) => Value::Null,
            (PropertyType::Boolean, Value::Bool(flag)) => Value::from(if *flag { 1 } else { 0 }),
            (PropertyType::Object, Value::Object(_) | Value::Array(_)) => Value::String(value.to_string()),
            _ => value.clone(),
        }
    }

    pub fn from_column_value(property: &PropertyDefinition, value: Value) -> Value {
        match (property.property_type, value) {
            (PropertyType::Boolean, Value::Number(number)) => Value::Bool(number.as_f64().unwrap_or(0.0) != 0.0),
            (PropertyType::Boolean, Value::String(text)) => {
                Value::Bool(matches!(text.trim(), "1" | "true" | "TRUE" | "Y"))
            }
            (PropertyType::Object, Value::String(text)) => {
                serde_json::from_str(&text).unwrap_or(Value::String(text))
            }
            (_, value) => value,
        }
    }

    /// Re-keys a driver row by property name, converting column values back.
    pub fn from_row(&self, model: &ModelDefinition, row: Map<String, Value>) -> Map<String, Value> {
        let mut record = Map::with_capacity(row.len());
        for (column, value) in row {
            match model.property_for_column(&column) {
                Some(property) => {
                    record.insert(property.name.clone(), Self::from_column_value(property, value));
                }
                None => {
                    record.insert(column, value);
                }
            }
        }
        record
    }

    pub fn build_insert(&self, model: &ModelDefinition, data: &Map<String, Value>) -> Result<Statement, StatementError> {
        let id = model.id_property().map(|property| property.name.as_str());
        let mut columns = Vec::new();
        let mut params = Vec::new();
        for property in &model.properties {
            let Some(value) = data.get(&property.name) else {
                continue;
            };
            if property.generated && Some(property.name.as_str()) == id && value.is_null() {
                continue;
            }
            columns.push(Self::escape_name(property.column_name()));
            params.push(Self::to_column_value(property, value));
        }

        if columns.is_empty() {
            let id = self.id_name(model)?;
            return Ok(Statement::new(format!(
                "INSERT INTO {} ({}) VALUES (DEFAULT)",
                self.table_name(model),
                Self::escape_name(&id)
            )));
        }

        let placeholders = vec!["?"; columns.len()].join(",");
        Ok(Statement::with_params(
            format!(
                "INSERT INTO {} ({}) VALUES ({})",
                self.table_name(model),
                columns.join(","),
                placeholders
            ),
            params,
        ))
    }

    pub fn build_update(
        &self,
        model: &ModelDefinition,
        where_filter: &Where,
        data: &Map<String, Value>,
    ) -> Result<Statement, StatementError> {
        let id = model.id_property().map(|property| property.name.as_str());
        let mut assignments = Vec::new();
        let mut params = Vec::new();
        for property in &model.properties {
            if Some(property.name.as_str()) == id {
                continue;
            }
            if let Some(value) = data.get(&property.name) {
                assignments.push(format!("{}=?", Self::escape_name(property.column_name())));
                params.push(Self::to_column_value(property, value));
            }
        }
        if assignments.is_empty() {
            return Err(StatementError::EmptyData(model.name.clone()));
        }

        let mut statement = Statement::with_params(
            format!("UPDATE {} SET {}", self.table_name(model), assignments.join(",")),
            params,
        );
        statement.merge(self.build_where(model, where_filter)?);
        Ok(statement)
    }

    pub fn build_delete(&self, model: &ModelDefinition, where_filter: &Where) -> Result<Statement, StatementError> {
        let mut statement = Statement::new(format!("DELETE FROM {}", self.table_name(model)));
        statement.merge(self.build_where(model, where_filter)?);
        Ok(statement)
    }

    pub fn build_select(&self, model: &ModelDefinition, filter: &Filter) -> Result<Statement, StatementError> {
        let columns = if filter.fields.is_empty() {
            model
                .properties
                .iter()
                .map(|property| Self::escape_name(property.column_name()))
                .collect::<Vec<String>>()
        } else {
            filter
                .fields
                .iter()
                .map(|field| self.column_for(model, field).map(|column| Self::escape_name(&column)))
                .collect::<Result<Vec<String>, StatementError>>()?
        };
        let columns = if columns.is_empty() { "*".to_string() } else { columns.join(",") };

        let mut statement = Statement::new(format!("SELECT {} FROM {}", columns, self.table_name(model)));
        statement.merge(self.build_where(model, &filter.where_filter)?);

        let order = if filter.order.is_empty() {
            match model.id_property() {
                Some(id) => vec![format!("{} ASC", Self::escape_name(id.column_name()))],
                None => Vec::new(),
            }
        } else {
            filter
                .order
                .iter()
                .map(|(field, direction)| {
                    self.column_for(model, field)
                        .map(|column| format!("{} {}", Self::escape_name(&column), direction.sql()))
                })
                .collect::<Result<Vec<String>, StatementError>>()?
        };
        if !order.is_empty() {
            statement.merge(Statement::new(format!("ORDER BY {}", order.join(","))));
        }

        statement.paging = filter.paging();
        Ok(statement)
    }

    pub fn build_count(&self, model: &ModelDefinition, where_filter: &Where) -> Result<Statement, StatementError> {
        let mut statement = Statement::new(format!("SELECT COUNT(*) AS \"cnt\" FROM {}", self.table_name(model)));
        statement.merge(self.build_where(model, where_filter)?);
        Ok(statement)
    }

    /// `WHERE ...` for a filter, or an empty statement when it matches everything.
    pub fn build_where(&self, model: &ModelDefinition, where_filter: &Where) -> Result<Statement, StatementError> {
        match &where_filter.clause {
            None => Ok(Statement::default()),
            Some(clause) => {
                let mut params = Vec::new();
                let sql = self.render_clause(model, clause, &mut params, false)?;
                Ok(Statement::with_params(format!("WHERE {}", sql), params))
            }
        }
    }

    /// Final SQL text, with structured paging rendered in this dialect.
    pub fn render(&self, statement: &Statement) -> String {
        let paging = statement
            .paging
            .map(|paging| self.dialect.paging_clause(paging.limit, paging.offset))
            .unwrap_or_default();
        if paging.is_empty() {
            statement.sql.clone()
        } else {
            format!("{} {}", statement.sql, paging)
        }
    }

    fn column_for(&self, model: &ModelDefinition, field: &str) -> Result<String, StatementError> {
        model
            .property(field)
            .map(|property| property.column_name().to_string())
            .ok_or_else(|| StatementError::UnknownProperty {
                model: model.name.clone(),
                property: field.to_string(),
            })
    }

    fn render_clause(
        &self,
        model: &ModelDefinition,
        clause: &WhereClause,
        params: &mut Vec<Value>,
        nested: bool,
    ) -> Result<String, StatementError> {
        let (clauses, joiner) = match clause {
            WhereClause::And(clauses) => (clauses, " AND "),
            WhereClause::Or(clauses) => (clauses, " OR "),
            WhereClause::Condition { field, operator, value } => {
                return self.render_condition(model, field, *operator, value, params);
            }
        };
        if clauses.is_empty() {
            return Ok("1=1".to_string());
        }
        let parts = clauses
            .iter()
            .map(|clause| self.render_clause(model, clause, params, true))
            .collect::<Result<Vec<String>, StatementError>>()?;
        if nested && parts.len() > 1 {
            Ok(format!("({})", parts.join(joiner)))
        } else {
            Ok(parts.join(joiner))
        }
    }

    fn render_condition(
        &self,
        model: &ModelDefinition,
        field: &str,
        operator: Operator,
        value: &Value,
        params: &mut Vec<Value>,
    ) -> Result<String, StatementError> {
        let property = model.property(field).ok_or_else(|| StatementError::UnknownProperty {
            model: model.name.clone(),
            property: field.to_string(),
        })?;
        let column = Self::escape_name(property.column_name());

        match operator {
            Operator::Eq | Operator::Neq if value.is_null() => Ok(format!(
                "{} {}",
                column,
                if operator == Operator::Eq { "IS NULL" } else { "IS NOT NULL" }
            )),
            Operator::Inq | Operator::Nin => {
                let values = value.as_array().ok_or_else(|| {
                    StatementError::InvalidWhere(format!("'{}' on {} expects an array", operator.sql(), field))
                })?;
                if values.is_empty() {
                    return Ok(if operator == Operator::Inq { "1=0" } else { "1=1" }.to_string());
                }
                params.extend(values.iter().map(|value| Self::to_column_value(property, value)));
                Ok(format!("{} {} ({})", column, operator.sql(), vec!["?"; values.len()].join(",")))
            }
            Operator::Between => match value.as_array().map(Vec::as_slice) {
                Some([low, high]) => {
                    params.push(Self::to_column_value(property, low));
                    params.push(Self::to_column_value(property, high));
                    Ok(format!("{} BETWEEN ? AND ?", column))
                }
                _ => Err(StatementError::InvalidWhere(format!("'between' on {} expects two values", field))),
            },
            Operator::Like | Operator::Nlike => {
                params.push(Self::to_column_value(property, value));
                Ok(format!("{} {} ?", column, operator.sql()))
            }
            _ => {
                params.push(Self::to_column_value(property, value));
                Ok(format!("{}{}?", column, operator.sql()))
            }
        }
    }
}
