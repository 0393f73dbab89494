use crate::model::structs::model_definition::ModelDefinition;
use crate::model::structs::property_definition::PropertyDefinition;

impl ModelDefinition {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            table: None,
            schema: None,
            properties: Vec::new(),
        }
    }

    pub fn with_table(mut self, table: &str) -> Self {
        self.table = Some(table.to_string());
        self
    }

    pub fn with_schema(mut self, schema: &str) -> Self {
        self.schema = Some(schema.to_string());
        self
    }

    pub fn with_property(mut self, property: PropertyDefinition) -> Self {
        self.properties.push(property);
        self
    }

    pub fn table_name(&self) -> &str {
        self.table.as_deref().unwrap_or(&self.name)
    }

    pub fn property(&self, name: &str) -> Option<&PropertyDefinition> {
        self.properties.iter().find(|property| property.name == name)
    }

    /// The property flagged `id`, falling back to a property literally named `id`.
    pub fn id_property(&self) -> Option<&PropertyDefinition> {
        self.properties
            .iter()
            .find(|property| property.id)
            .or_else(|| self.property("id"))
    }

    /// Finds the property stored in `column`; DB2 may hand back column names in upper case.
    pub fn property_for_column(&self, column: &str) -> Option<&PropertyDefinition> {
        self.properties
            .iter()
            .find(|property| property.column_name() == column)
            .or_else(|| {
                self.properties
                    .iter()
                    .find(|property| property.column_name().eq_ignore_ascii_case(column))
            })
    }
}
