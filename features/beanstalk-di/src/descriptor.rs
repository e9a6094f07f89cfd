/// Blueprint of a single bean
///
/// A descriptor is built once by the caller (usually a configuration loader) and handed to
/// [crate::BeanContainerBuilder::build]. Only the container touches the `in_creation` flag.
#[derive(Debug, Clone, PartialEq)]
pub struct BeanDescriptor {
    id: String,
    type_name: String,
    properties: Vec<PropertyDescriptor>,
    in_creation: bool,
}

impl BeanDescriptor {
    pub fn new(id: impl Into<String>, type_name: impl Into<String>) -> Self {
        BeanDescriptor {
            id: id.into(),
            type_name: type_name.into(),
            properties: Vec::new(),
            in_creation: false,
        }
    }

    /// Appends a property - properties are injected in the order they were added
    pub fn with_property(mut self, property: PropertyDescriptor) -> Self {
        self.properties.push(property);
        self
    }

    /// Appends a literal property
    pub fn with_literal(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.with_property(PropertyDescriptor::literal(name, value))
    }

    /// Appends a reference to another bean
    pub fn with_reference(self, name: impl Into<String>, reference_id: impl Into<String>) -> Self {
        self.with_property(PropertyDescriptor::reference(name, reference_id))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Name the type was registered under in the [crate::TypeRegistry]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn properties(&self) -> &[PropertyDescriptor] {
        &self.properties
    }

    /// True between skeleton creation and the end of injection
    pub fn is_in_creation(&self) -> bool {
        self.in_creation
    }

    pub(crate) fn set_in_creation(&mut self, in_creation: bool) {
        self.in_creation = in_creation;
    }
}

/// A single property of a bean
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDescriptor {
    pub name: String,
    pub kind: PropertyKind,
}

/// What gets injected into a property
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyKind {
    /// Textual value, coerced into the field's declared type
    Literal(String),
    /// Id of another bean
    Reference(String),
}

impl PropertyDescriptor {
    pub fn literal(name: impl Into<String>, value: impl Into<String>) -> Self {
        PropertyDescriptor {
            name: name.into(),
            kind: PropertyKind::Literal(value.into()),
        }
    }

    pub fn reference(name: impl Into<String>, reference_id: impl Into<String>) -> Self {
        PropertyDescriptor {
            name: name.into(),
            kind: PropertyKind::Reference(reference_id.into()),
        }
    }

    /// Returns the literal value, if this is a literal property
    pub fn literal_value(&self) -> Option<&str> {
        match &self.kind {
            PropertyKind::Literal(value) => Some(value),
            PropertyKind::Reference(_) => None,
        }
    }

    /// Returns the referenced bean id, if this is a reference property
    pub fn reference_id(&self) -> Option<&str> {
        match &self.kind {
            PropertyKind::Reference(id) => Some(id),
            PropertyKind::Literal(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn properties_keep_declaration_order() {
        let descriptor = BeanDescriptor::new("company", "demo.Company")
            .with_literal("name", "Brothers")
            .with_reference("ceo", "peopleA")
            .with_literal("founded", "1999");

        let names: Vec<_> = descriptor.properties().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["name", "ceo", "founded"]);
        assert!(!descriptor.is_in_creation());
    }

    #[test]
    fn exactly_one_value_is_meaningful() {
        let literal = PropertyDescriptor::literal("age", "42");
        assert_eq!(literal.literal_value(), Some("42"));
        assert_eq!(literal.reference_id(), None);

        let reference = PropertyDescriptor::reference("partner", "peopleB");
        assert_eq!(reference.literal_value(), None);
        assert_eq!(reference.reference_id(), Some("peopleB"));
    }
}
