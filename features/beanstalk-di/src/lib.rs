//! Singleton bean container
//!
//! Beans are described by [BeanDescriptor]s: an id, the name of a registered type and a list of
//! properties, each either a literal or a reference to another bean. The container builds every
//! bean in two passes, so beans may reference each other in any order, cycles included.
//!
//! ```ignore
//! let registry = TypeRegistry::new().register::<People>("demo.People");
//!
//! let container = BeanContainerBuilder::new(registry).build([
//!     BeanDescriptor::new("a", "demo.People").with_reference("partner", "b"),
//!     BeanDescriptor::new("b", "demo.People").with_reference("partner", "a"),
//! ]);
//!
//! let a = container.get_bean("a").unwrap();
//! ```

pub mod builder;
pub mod coercion;
pub mod container;
pub mod descriptor;
pub mod errors;
pub mod factories;
mod initiator;
pub mod registry;
pub mod types;

pub use builder::BeanContainerBuilder;
pub use coercion::{coerce, FieldType, FieldValue, Value};
pub use container::BeanContainer;
pub use descriptor::{BeanDescriptor, PropertyDescriptor, PropertyKind};
pub use errors::{AssignError, BuildDiagnostic, BuildDiagnostics, CoercionError, RequireError};
pub use factories::{DefaultFactory, DynFactory, FieldTable, InstanceFactory, Wireable};
pub use registry::TypeRegistry;
pub use types::{BeanRef, DynError, Injectable, TypeInfo};
