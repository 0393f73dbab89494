use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DiscoveryOptions {
    /// Schema (library) to search; `None` searches every schema.
    pub owner: Option<String>,
    /// Include views and logical files.
    pub views: bool,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}
