use crate::sql::enums::operator::Operator;

impl Operator {
    /// Parses a filter operator key (`gt`, `inq`, ...). `eq` is accepted for symmetry.
    pub fn from_key(key: &str) -> Option<Operator> {
        match key {
            "eq" => Some(Operator::Eq),
            "neq" => Some(Operator::Neq),
            "gt" => Some(Operator::Gt),
            "gte" => Some(Operator::Gte),
            "lt" => Some(Operator::Lt),
            "lte" => Some(Operator::Lte),
            "inq" => Some(Operator::Inq),
            "nin" => Some(Operator::Nin),
            "between" => Some(Operator::Between),
            "like" => Some(Operator::Like),
            "nlike" => Some(Operator::Nlike),
            _ => None,
        }
    }

    pub fn sql(&self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Neq => "<>",
            Operator::Gt => ">",
            Operator::Gte => ">=",
            Operator::Lt => "<",
            Operator::Lte => "<=",
            Operator::Inq => "IN",
            Operator::Nin => "NOT IN",
            Operator::Between => "BETWEEN",
            Operator::Like => "LIKE",
            Operator::Nlike => "NOT LIKE",
        }
    }
}
