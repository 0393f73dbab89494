use crate::sql::enums::order_direction::OrderDirection;

impl OrderDirection {
    pub fn parse(value: &str) -> Option<OrderDirection> {
        match value.to_uppercase().as_str() {
            "ASC" => Some(OrderDirection::Asc),
            "DESC" => Some(OrderDirection::Desc),
            _ => None,
        }
    }

    pub fn sql(&self) -> &'static str {
        match self {
            OrderDirection::Asc => "ASC",
            OrderDirection::Desc => "DESC",
        }
    }
}
