use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryKeyInfo {
    pub owner: String,
    pub table_name: String,
    pub column_name: String,
    pub key_seq: i64,
    pub pk_name: String,
}
