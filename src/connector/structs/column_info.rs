use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ColumnInfo {
    pub owner: String,
    pub table_name: String,
    pub column_name: String,
    pub data_type: String,
    #[serde(default)]
    pub data_length: Option<i64>,
    #[serde(default)]
    pub data_precision: Option<i64>,
    #[serde(default)]
    pub data_scale: Option<i64>,
    /// `Y` or `N`.
    pub nullable: String,
}
