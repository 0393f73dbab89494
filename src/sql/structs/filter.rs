use crate::sql::enums::order_direction::OrderDirection;
use crate::sql::structs::where_filter::Where;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    pub where_filter: Where,
    pub limit: Option<u64>,
    pub skip: Option<u64>,
    pub order: Vec<(String, OrderDirection)>,
    pub fields: Vec<String>,
}
