use std::{any::Any, convert::Infallible, marker::PhantomData};

use crate::{
    coercion::{FieldType, FieldValue, Value},
    errors::AssignError,
    types::{BeanRef, DynError, Injectable, TypeInfo},
};

/// A type whose fields can be injected by the container
///
/// ```ignore
/// #[derive(Default)]
/// struct People {
///     user_name: String,
///     partner: Option<BeanRef>,
/// }
///
/// impl Wireable for People {
///     fn fields(fields: &mut FieldTable<Self>) {
///         fields
///             .field("user_name", |p, v| p.user_name = v)
///             .field("partner", |p, v| p.partner = v);
///     }
/// }
/// ```
pub trait Wireable: Injectable + Sized {
    /// Registers every injectable field of the type
    fn fields(fields: &mut FieldTable<Self>);
}

type Setter<T> = Box<dyn Fn(&mut T, Value) -> Result<(), AssignError> + Send + Sync>;

struct Field<T> {
    name: &'static str,
    field_type: FieldType,
    set: Setter<T>,
}

/// Named, typed fields of `T`
pub struct FieldTable<T> {
    fields: Vec<Field<T>>,
}

impl<T: 'static> FieldTable<T> {
    fn new() -> Self {
        FieldTable { fields: Vec::new() }
    }

    /// Registers a field
    ///
    /// The declared type is taken from `V`, values of any other kind are rejected.
    pub fn field<V: FieldValue + 'static>(
        &mut self,
        name: &'static str,
        setter: impl Fn(&mut T, V) + Send + Sync + 'static,
    ) -> &mut Self {
        let set = move |instance: &mut T, value: Value| {
            let typed = V::from_value(value).map_err(|other| AssignError::TypeMismatch {
                field: name.to_string(),
                expected: V::FIELD_TYPE,
                found: other.field_type(),
            })?;
            setter(instance, typed);
            Ok(())
        };

        if self.fields.iter().any(|f| f.name == name) {
            tracing::warn!("Field '{name}' of {} registered twice", std::any::type_name::<T>());
            self.fields.retain(|f| f.name != name);
        }

        self.fields.push(Field {
            name,
            field_type: V::FIELD_TYPE,
            set: Box::new(set),
        });
        self
    }

    pub fn field_type(&self, name: &str) -> Option<FieldType> {
        self.find(name).map(|f| f.field_type)
    }

    pub fn assign(&self, instance: &mut T, name: &str, value: Value) -> Result<(), AssignError> {
        let field = self
            .find(name)
            .ok_or_else(|| AssignError::UnknownField(name.to_string()))?;
        (field.set)(instance, value)
    }

    fn find(&self, name: &str) -> Option<&Field<T>> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A Factory providing default instances of a given type
pub trait InstanceFactory: Send + Sync {
    type Provides: Wireable;

    /// Returns the typeinfo about the factory's provided type
    fn supplies() -> TypeInfo {
        TypeInfo::of::<Self::Provides>()
    }

    /// Constructs a new, not yet injected instance
    fn construct(&self) -> Result<Self::Provides, impl Into<DynError>>;
}

/// Factory for any type implementing [Default]
pub struct DefaultFactory<T>(PhantomData<fn() -> T>);

impl<T> Default for DefaultFactory<T> {
    fn default() -> Self {
        DefaultFactory(PhantomData)
    }
}

impl<T: Wireable + Default> InstanceFactory for DefaultFactory<T> {
    type Provides = T;

    fn construct(&self) -> Result<T, impl Into<DynError>> {
        Ok::<_, Infallible>(T::default())
    }
}

/// Wrapper Trait for factories, providing instances of Any
pub trait DynFactory: Send + Sync {
    fn supplies(&self) -> TypeInfo;

    /// Constructs a new instance of the factory's provided type as the bean `id`
    fn construct(&self, id: &str) -> Result<BeanRef, DynError>;

    /// Declared type of the named field, if it exists
    fn field_type(&self, name: &str) -> Option<FieldType>;

    /// Assigns a value to the named field of an instance built by this factory
    fn assign(&self, instance: &mut dyn Any, name: &str, value: Value) -> Result<(), AssignError>;
}

/// An [InstanceFactory] together with the field table of its product
pub(crate) struct Registered<Factory: InstanceFactory> {
    factory: Factory,
    fields: FieldTable<Factory::Provides>,
}

impl<Factory: InstanceFactory> Registered<Factory> {
    pub(crate) fn new(factory: Factory) -> Self {
        let mut fields = FieldTable::new();
        Factory::Provides::fields(&mut fields);
        Registered { factory, fields }
    }
}

// Impl DynFactory for any InstanceFactory
impl<Factory: InstanceFactory> DynFactory for Registered<Factory> {
    fn supplies(&self) -> TypeInfo {
        Factory::supplies()
    }

    fn construct(&self, id: &str) -> Result<BeanRef, DynError> {
        // Forward the call to the specific implementation
        self.factory
            .construct()
            .map(|instance| BeanRef::new(id, instance))
            .map_err(Into::into)
    }

    fn field_type(&self, name: &str) -> Option<FieldType> {
        self.fields.field_type(name)
    }

    fn assign(&self, instance: &mut dyn Any, name: &str, value: Value) -> Result<(), AssignError> {
        let instance = instance
            .downcast_mut::<Factory::Provides>()
            .ok_or(AssignError::WrongInstance(Factory::supplies().type_name))?;
        self.fields.assign(instance, name, value)
    }
}
