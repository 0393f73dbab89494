use crate::model::structs::model_definition::ModelDefinition;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    pub(crate) models: BTreeMap<String, ModelDefinition>,
}
