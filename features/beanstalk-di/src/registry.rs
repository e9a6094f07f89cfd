use std::{collections::HashMap, fmt::Debug};

use crate::factories::{DefaultFactory, DynFactory, InstanceFactory, Registered, Wireable};

/// Maps type names used in bean descriptors to the factories building them
#[derive(Default)]
pub struct TypeRegistry {
    factories: HashMap<String, Box<dyn DynFactory>>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a [Default] type under the given name
    pub fn register<T: Wireable + Default>(self, type_name: impl Into<String>) -> Self {
        self.register_factory(type_name, DefaultFactory::<T>::default())
    }

    /// Registers a custom factory under the given name
    ///
    /// A name registered twice keeps the later factory.
    pub fn register_factory<Factory: InstanceFactory + 'static>(
        mut self,
        type_name: impl Into<String>,
        factory: Factory,
    ) -> Self {
        let type_name = type_name.into();
        let registered = Registered::new(factory);

        tracing::debug!("Registered {} as '{}'", registered.supplies(), type_name);
        if let Some(previous) = self.factories.insert(type_name.clone(), Box::new(registered)) {
            tracing::warn!(
                "Type name '{}' was already registered for {} - replaced",
                type_name,
                previous.supplies()
            );
        }
        self
    }

    /// Returns the factory registered under the given name
    pub fn get(&self, type_name: &str) -> Option<&dyn DynFactory> {
        self.factories.get(type_name).map(Box::as_ref)
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.factories.contains_key(type_name)
    }
}

impl Debug for TypeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for (name, factory) in &self.factories {
            map.entry(name, &factory.supplies().type_name);
        }
        map.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{coercion::FieldType, factories::FieldTable};

    #[derive(Default)]
    struct First {
        value: i64,
    }
    impl Wireable for First {
        fn fields(fields: &mut FieldTable<Self>) {
            fields.field("value", |s, v| s.value = v);
        }
    }

    #[derive(Default)]
    struct Second {
        value: bool,
    }
    impl Wireable for Second {
        fn fields(fields: &mut FieldTable<Self>) {
            fields.field("value", |s, v| s.value = v);
        }
    }

    #[test]
    fn looks_up_by_name() {
        let registry = TypeRegistry::new().register::<First>("demo.First");

        assert!(registry.contains("demo.First"));
        assert!(registry.get("demo.Nope").is_none());
        let factory = registry.get("demo.First").unwrap();
        assert_eq!(factory.field_type("value"), Some(FieldType::I64));
    }

    #[test]
    fn later_registration_wins() {
        let registry = TypeRegistry::new()
            .register::<First>("demo.Thing")
            .register::<Second>("demo.Thing");

        let factory = registry.get("demo.Thing").unwrap();
        assert_eq!(factory.field_type("value"), Some(FieldType::Bool));
    }
}
