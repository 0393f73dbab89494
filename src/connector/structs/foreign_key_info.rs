use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ForeignKeyInfo {
    pub fk_owner: String,
    pub fk_name: String,
    pub fk_table_name: String,
    pub fk_column_name: String,
    pub key_seq: i64,
    pub pk_owner: String,
    pub pk_name: String,
    pub pk_table_name: String,
    pub pk_column_name: String,
}
