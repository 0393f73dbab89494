use crate::model::structs::model_definition::ModelDefinition;
use crate::model::structs::model_registry::ModelRegistry;

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `definition`, replacing any earlier definition with the same name.
    pub fn define(&mut self, definition: ModelDefinition) -> Option<ModelDefinition> {
        self.models.insert(definition.name.clone(), definition)
    }

    pub fn get(&self, name: &str) -> Option<&ModelDefinition> {
        self.models.get(name)
    }

    pub fn names(&self) -> Vec<String> {
        self.models.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
