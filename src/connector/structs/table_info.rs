use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TableInfo {
    #[serde(rename = "type")]
    pub table_type: String,
    pub name: String,
    pub owner: String,
}
