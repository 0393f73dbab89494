use crate::model::enums::property_type::PropertyType;
use std::fmt;

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyType::String => write!(f, "String"),
            PropertyType::Number => write!(f, "Number"),
            PropertyType::Integer => write!(f, "Integer"),
            PropertyType::Boolean => write!(f, "Boolean"),
            PropertyType::Date => write!(f, "Date"),
            PropertyType::Object => write!(f, "Object"),
            PropertyType::Buffer => write!(f, "Buffer"),
        }
    }
}

impl PropertyType {
    /// Maps a DB2 catalog `DATA_TYPE` onto the closest property type.
    pub fn from_db2_type(data_type: &str) -> PropertyType {
        match data_type.trim().to_uppercase().as_str() {
            "SMALLINT" | "INTEGER" | "INT" | "BIGINT" => PropertyType::Integer,
            "DECIMAL" | "NUMERIC" | "DOUBLE" | "FLOAT" | "REAL" | "DECFLOAT" => PropertyType::Number,
            "DATE" | "TIME" | "TIMESTMP" | "TIMESTAMP" => PropertyType::Date,
            "BLOB" | "BINARY" | "VARBIN" | "VARBINARY" => PropertyType::Buffer,
            _ => PropertyType::String,
        }
    }
}
