use std::{
    any::{Any, TypeId},
    fmt::Debug,
    sync::{Arc, PoisonError, RwLock},
};

/// Error type returned by user supplied factories
pub type DynError = Box<dyn std::error::Error + Send + Sync>;

/// A finished container may be shared across threads
/// So anything wireable needs to be Send + Sync + 'static
pub trait Injectable: Send + Sync + 'static {}
impl<T: Send + Sync + 'static> Injectable for T {}

/// Shared handle to a bean instance
///
/// Cloning a [BeanRef] never copies the bean, every clone points at the same instance.
/// Equality is identity: two handles are equal only if they point at the same bean.
///
/// Beans that reference each other form reference cycles and live as long as the cycle does,
/// which for singletons is the lifetime of the process.
#[derive(Clone)]
pub struct BeanRef {
    id: Arc<str>,
    info: TypeInfo,
    instance: Arc<RwLock<dyn Any + Send + Sync>>,
}

impl BeanRef {
    pub(crate) fn new<T: Injectable>(id: &str, instance: T) -> Self {
        BeanRef {
            id: Arc::from(id),
            info: TypeInfo::of::<T>(),
            instance: Arc::new(RwLock::new(instance)),
        }
    }

    /// Id of the bean this handle points at
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Rust type of the bean
    pub fn info(&self) -> TypeInfo {
        self.info
    }

    /// Returns true if both handles point at the same bean
    pub fn ptr_eq(&self, other: &BeanRef) -> bool {
        Arc::ptr_eq(&self.instance, &other.instance)
    }

    /// Returns true if the bean is of type `T`
    pub fn is<T: Injectable>(&self) -> bool {
        self.info.type_id == TypeId::of::<T>()
    }

    /// Reads the bean as `T`
    ///
    /// Returns None if the bean is not a `T`.
    pub fn read<T: Injectable, R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        let guard = self.instance.read().unwrap_or_else(PoisonError::into_inner);
        guard.downcast_ref::<T>().map(f)
    }

    /// Mutates the bean as `T`
    ///
    /// Returns None if the bean is not a `T`.
    pub fn write<T: Injectable, R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        let mut guard = self.instance.write().unwrap_or_else(PoisonError::into_inner);
        guard.downcast_mut::<T>().map(f)
    }

    /// Runs `f` on the untyped instance - used by the container for injection
    pub(crate) fn with_any_mut<R>(&self, f: impl FnOnce(&mut dyn Any) -> R) -> R {
        let mut guard = self.instance.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut *guard)
    }
}

impl PartialEq for BeanRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}
impl Eq for BeanRef {}

// Never print the instance itself - cyclic graphs would recurse forever
impl Debug for BeanRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BeanRef")
            .field("id", &self.id)
            .field("type", &self.info.type_name)
            .finish()
    }
}

/// Type Name and Type Id
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct TypeInfo {
    pub type_name: &'static str,
    pub type_id: TypeId,
}
impl std::fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name)
    }
}
impl TypeInfo {
    pub fn of<T: 'static + ?Sized>() -> TypeInfo {
        TypeInfo {
            type_name: std::any::type_name::<T>(),
            type_id: TypeId::of::<T>(),
        }
    }
}
