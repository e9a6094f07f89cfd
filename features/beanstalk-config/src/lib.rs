//! Beanstalk Config loads bean definitions from YAML or JSON documents
//!
//! A document lists beans in declaration order. Each bean has an id, the name its type was
//! registered under (`class`), and properties holding either a literal `value` or a `ref`
//! to another bean.
//!
//! ```yaml
//! beans:
//!   - id: peopleA
//!     class: demo.People
//!     properties:
//!       - { name: user_name, value: Alice }
//!       - { name: age, value: 42 }
//!       - { name: partner, ref: peopleB }
//!   - id: peopleB
//!     class: demo.People
//!     properties:
//!       - { name: partner, ref: peopleA }
//! ```
//!
//! # Examples
//!
//! ```ignore
//! let definitions = BeanDefinitions::from_path("beans.yaml")?;
//! let container = definitions.build(registry);
//!
//! let people = container.get_bean("peopleA");
//! ```
//!
//! Beanstalk Config consists of the following components:
//!
//! 1. Document - the serde model of a definition document
//! 2. Definitions - for loading documents and turning them into descriptors
//! 3. Errors - for load errors

pub mod definitions;
pub mod document;
pub mod errors;

pub use definitions::{BeanDefinitions, DefinitionSource, Format};
pub use document::{BeanEntry, BeansDocument, PropertyEntry};
pub use errors::LoadError;
