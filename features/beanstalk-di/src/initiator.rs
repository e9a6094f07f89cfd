use std::{
    collections::{btree_map::Entry, BTreeMap},
    sync::Arc,
};

use crate::{
    coercion::{coerce, Value},
    container::{BeanCaches, BeanContainer},
    descriptor::{BeanDescriptor, PropertyDescriptor, PropertyKind},
    errors::BuildDiagnostic,
    factories::DynFactory,
    registry::TypeRegistry,
    types::BeanRef,
};

/// Builds the beans of one container
///
/// Phase 1 creates a default instance of every bean and puts it in the early cache.
/// Phase 2 injects the properties of every bean and moves it to the finalized cache.
/// As every skeleton exists before the first property is injected, references resolve
/// no matter the order of beans, including circular ones.
pub(crate) struct BeanInitiator<'r> {
    registry: &'r TypeRegistry,
    caches: BeanCaches,
    diagnostics: Vec<BuildDiagnostic>,
}

impl<'r> BeanInitiator<'r> {
    pub(crate) fn new(registry: &'r TypeRegistry) -> Self {
        BeanInitiator {
            registry,
            caches: BeanCaches::new(),
            diagnostics: Vec::new(),
        }
    }

    pub(crate) fn initiate(
        mut self,
        descriptors: impl IntoIterator<Item = BeanDescriptor>,
    ) -> BeanContainer {
        self.accept_descriptors(descriptors);

        let ids: Vec<String> = self.caches.descriptors.keys().cloned().collect();
        tracing::debug!("Initializing container with {} beans", ids.len());

        for id in &ids {
            self.create_skeleton(id);
        }

        tracing::debug!(
            "Created {} of {} skeletons - injecting properties",
            self.caches.early_refs.len(),
            ids.len()
        );

        for id in &ids {
            self.inject_and_finalize(id);
        }

        tracing::debug!(
            "Container built with {} beans and {} problems",
            self.caches.finalized.len(),
            self.diagnostics.len()
        );

        BeanContainer::new(self.caches, self.diagnostics)
    }

    /// Stores the descriptors, rejecting every id declared more than once
    fn accept_descriptors(&mut self, descriptors: impl IntoIterator<Item = BeanDescriptor>) {
        let mut duplicates: BTreeMap<String, usize> = BTreeMap::new();

        for descriptor in descriptors {
            match self.caches.descriptors.entry(descriptor.id().to_string()) {
                Entry::Vacant(entry) => {
                    entry.insert(descriptor);
                }
                Entry::Occupied(entry) => {
                    *duplicates.entry(entry.key().clone()).or_insert(1) += 1;
                }
            }
        }

        for (id, count) in duplicates {
            self.caches.descriptors.remove(&id);
            report(&mut self.diagnostics, BuildDiagnostic::DuplicateId { id, count });
        }
    }

    /// Phase 1 - create the default instance and expose it through the early cache
    fn create_skeleton(&mut self, id: &str) {
        let Some(descriptor) = self.caches.descriptors.get_mut(id) else {
            return;
        };

        let Some(factory) = self.registry.get(descriptor.type_name()) else {
            report(
                &mut self.diagnostics,
                BuildDiagnostic::UnknownType {
                    id: id.to_string(),
                    type_name: descriptor.type_name().to_string(),
                },
            );
            return;
        };

        match factory.construct(id) {
            Ok(bean) => {
                tracing::debug!("Created skeleton of '{}' ({})", id, factory.supplies());
                self.caches.early_refs.insert(id.to_string(), bean);
                descriptor.set_in_creation(true);
            }
            Err(error) => report(
                &mut self.diagnostics,
                BuildDiagnostic::InstantiationFailed {
                    id: id.to_string(),
                    type_name: descriptor.type_name().to_string(),
                    error: Arc::new(error),
                },
            ),
        }
    }

    /// Phase 2 - inject all properties in declaration order, then finalize
    fn inject_and_finalize(&mut self, id: &str) {
        let Some(bean) = self.caches.early_refs.get(id).cloned() else {
            // Skeleton creation failed - already reported
            return;
        };
        let Some(descriptor) = self.caches.descriptors.get(id) else {
            return;
        };
        let Some(factory) = self.registry.get(descriptor.type_name()) else {
            return;
        };

        for property in descriptor.properties() {
            if let Err(diagnostic) = inject_property(&self.caches, factory, &bean, property) {
                report(&mut self.diagnostics, diagnostic);
            }
        }

        if let Some(descriptor) = self.caches.descriptors.get_mut(id) {
            descriptor.set_in_creation(false);
        }
        self.caches.early_refs.remove(id);
        self.caches.finalized.insert(id.to_string(), bean);

        tracing::debug!("Finalized '{}'", id);
    }
}

fn inject_property(
    caches: &BeanCaches,
    factory: &dyn DynFactory,
    bean: &BeanRef,
    property: &PropertyDescriptor,
) -> Result<(), BuildDiagnostic> {
    let id = bean.id();
    let field = property.name.as_str();

    let Some(field_type) = factory.field_type(field) else {
        return Err(BuildDiagnostic::UnknownField {
            id: id.to_string(),
            field: field.to_string(),
        });
    };

    let value = match &property.kind {
        PropertyKind::Literal(literal) => {
            coerce(field_type, literal).map_err(|error| BuildDiagnostic::Coercion {
                id: id.to_string(),
                field: field.to_string(),
                error,
            })?
        }
        PropertyKind::Reference(reference) => {
            let target = caches.get_singleton(reference).ok_or_else(|| {
                BuildDiagnostic::UnresolvedReference {
                    id: id.to_string(),
                    field: field.to_string(),
                    reference: reference.clone(),
                }
            })?;
            Value::Bean(target)
        }
    };

    bean.with_any_mut(|instance| factory.assign(instance, field, value))
        .map_err(|error| BuildDiagnostic::Assignment {
            id: id.to_string(),
            field: field.to_string(),
            error,
        })
}

fn report(diagnostics: &mut Vec<BuildDiagnostic>, diagnostic: BuildDiagnostic) {
    match &diagnostic {
        BuildDiagnostic::DuplicateId { .. }
        | BuildDiagnostic::UnknownType { .. }
        | BuildDiagnostic::InstantiationFailed { .. } => {
            tracing::error!("Skipped bean: {}", diagnostic)
        }
        _ => tracing::warn!("Skipped property: {}", diagnostic),
    }
    diagnostics.push(diagnostic);
}
