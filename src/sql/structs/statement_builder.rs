use crate::sql::enums::sql_dialect::SqlDialect;

#[derive(Debug, Clone)]
pub struct StatementBuilder {
    pub dialect: SqlDialect,
    pub default_schema: Option<String>,
}
