use crate::sql::enums::where_clause::WhereClause;

/// A where filter; `clause: None` matches every row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Where {
    pub clause: Option<WhereClause>,
}
