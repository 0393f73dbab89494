use crate::model::enums::property_type::PropertyType;
use crate::model::structs::property_definition::PropertyDefinition;

impl PropertyDefinition {
    pub fn new(name: &str, property_type: PropertyType) -> Self {
        Self {
            name: name.to_string(),
            property_type,
            column: None,
            length: None,
            precision: None,
            scale: None,
            required: false,
            id: false,
            generated: false,
        }
    }

    /// Marks the property as the model identifier.
    pub fn id(mut self) -> Self {
        self.id = true;
        self.required = true;
        self
    }

    /// The database assigns the value (identity column).
    pub fn generated(mut self) -> Self {
        self.generated = true;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn column(mut self, column: &str) -> Self {
        self.column = Some(column.to_string());
        self
    }

    pub fn length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }

    pub fn precision(mut self, precision: u8, scale: u8) -> Self {
        self.precision = Some(precision);
        self.scale = Some(scale);
        self
    }

    pub fn column_name(&self) -> &str {
        self.column.as_deref().unwrap_or(&self.name)
    }
}
