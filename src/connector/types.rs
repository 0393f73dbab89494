use serde_json::{Map, Value};

/// Property-keyed model instance data.
pub type Record = Map<String, Value>;
