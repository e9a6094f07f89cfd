use crate::{
    container::BeanContainer, descriptor::BeanDescriptor, initiator::BeanInitiator,
    registry::TypeRegistry,
};

/// Builds a [BeanContainer] from bean descriptors
///
/// Building consumes the builder, a container is built exactly once.
/// Problems with single beans or properties never fail the build, they are
/// logged and collected in [BeanContainer::diagnostics].
pub struct BeanContainerBuilder {
    registry: TypeRegistry,
}

impl BeanContainerBuilder {
    pub fn new(registry: TypeRegistry) -> Self {
        BeanContainerBuilder { registry }
    }

    pub fn build(self, descriptors: impl IntoIterator<Item = BeanDescriptor>) -> BeanContainer {
        BeanInitiator::new(&self.registry).initiate(descriptors)
    }
}

impl From<TypeRegistry> for BeanContainerBuilder {
    fn from(registry: TypeRegistry) -> Self {
        Self::new(registry)
    }
}
