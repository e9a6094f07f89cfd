use std::{
    any::type_name,
    collections::{BTreeMap, HashMap},
    fmt::Debug,
    sync::Arc,
};

use crate::{
    descriptor::BeanDescriptor,
    errors::{BuildDiagnostic, BuildDiagnostics, RequireError},
    types::{BeanRef, Injectable},
};

/// The bean maps of one container
pub(crate) struct BeanCaches {
    /// Fully injected beans
    pub(crate) finalized: HashMap<String, BeanRef>,
    /// Beans which exist but may still be missing properties
    pub(crate) early_refs: HashMap<String, BeanRef>,
    /// All accepted descriptors
    pub(crate) descriptors: BTreeMap<String, BeanDescriptor>,
}

impl BeanCaches {
    pub(crate) fn new() -> Self {
        BeanCaches {
            finalized: HashMap::new(),
            early_refs: HashMap::new(),
            descriptors: BTreeMap::new(),
        }
    }

    /// Looks up a bean - finalized first, then the early cache if the bean is still in creation
    pub(crate) fn get_singleton(&self, id: &str) -> Option<BeanRef> {
        if let Some(bean) = self.finalized.get(id) {
            return Some(bean.clone());
        }

        if self.is_in_creation(id) {
            return self.early_refs.get(id).cloned();
        }

        None
    }

    fn is_in_creation(&self, id: &str) -> bool {
        self.descriptors
            .get(id)
            .is_some_and(BeanDescriptor::is_in_creation)
    }
}

/// Container holding all built beans
///
/// Read only - cloning shares the same beans.
#[derive(Clone)]
pub struct BeanContainer(Arc<BeanContainerInner>);
struct BeanContainerInner {
    caches: BeanCaches,
    diagnostics: BuildDiagnostics,
}
impl Debug for BeanContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_struct("BeanContainer");
        for (id, descriptor) in &self.0.caches.descriptors {
            let val = if self.0.caches.finalized.contains_key(id) {
                descriptor.type_name()
            } else {
                "missing"
            };
            map.field(id, &val);
        }
        map.finish()
    }
}

impl BeanContainer {
    pub(crate) fn new(caches: BeanCaches, diagnostics: Vec<BuildDiagnostic>) -> Self {
        Self(Arc::new(BeanContainerInner {
            caches,
            diagnostics: BuildDiagnostics { diagnostics },
        }))
    }

    /// Returns the singleton with the given id
    pub fn get_bean(&self, id: &str) -> Option<BeanRef> {
        self.0.caches.get_singleton(id)
    }

    /// Returns the bean with the given id, checking it is a `T`
    pub fn require<T: Injectable>(&self, id: &str) -> Result<BeanRef, RequireError> {
        let bean = self
            .get_bean(id)
            .ok_or_else(|| RequireError::Missing(id.to_string()))?;

        if !bean.is::<T>() {
            return Err(RequireError::WrongType {
                id: id.to_string(),
                required_type: type_name::<T>(),
                actual_type: bean.info().type_name,
            });
        }

        Ok(bean)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get_bean(id).is_some()
    }

    /// Number of built beans
    pub fn len(&self) -> usize {
        self.0.caches.finalized.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.caches.finalized.is_empty()
    }

    /// Ids of all built beans, sorted
    pub fn bean_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.0.caches.finalized.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    #[cfg(test)]
    pub(crate) fn caches(&self) -> &BeanCaches {
        &self.0.caches
    }

    /// Everything that was skipped while building
    pub fn diagnostics(&self) -> &BuildDiagnostics {
        &self.0.diagnostics
    }
}
