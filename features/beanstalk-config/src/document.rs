use beanstalk_di::{BeanDescriptor, PropertyDescriptor};
use serde::{Deserialize, Serialize};

/// Root of a bean definition document
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BeansDocument {
    #[serde(default)]
    pub beans: Vec<BeanEntry>,
}

/// A single declared bean
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BeanEntry {
    pub id: String,
    /// Type name the bean's type was registered under
    pub class: String,
    #[serde(default)]
    pub properties: Vec<PropertyEntry>,
}

/// A single declared property
///
/// Either `value` or `ref` should be set. A property without a value is treated as a reference,
/// a property with neither references the empty id and fails to resolve.
///
/// `value` is kept exactly as written, unquoted YAML scalars included.
/// The container converts it to the field's type.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PropertyEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, rename = "ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

/// Rewrites unquoted JSON numbers and booleans in property values as strings
///
/// Numbers keep the text they were written with, so `1.50` stays `1.50` and integers
/// beyond 64 bits still reach the container, which reports them per property.
pub(crate) fn json_values_as_text(document: &mut serde_json::Value) {
    let Some(beans) = document.get_mut("beans").and_then(|b| b.as_array_mut()) else {
        return;
    };

    let properties = beans
        .iter_mut()
        .filter_map(|bean| bean.get_mut("properties"))
        .filter_map(|properties| properties.as_array_mut())
        .flatten();

    for property in properties {
        let Some(value) = property.get_mut("value") else {
            continue;
        };
        let text = match &*value {
            serde_json::Value::Number(number) => number.to_string(),
            serde_json::Value::Bool(flag) => flag.to_string(),
            _ => continue,
        };
        *value = serde_json::Value::String(text);
    }
}

impl BeanEntry {
    pub fn to_descriptor(&self) -> BeanDescriptor {
        self.properties
            .iter()
            .fold(BeanDescriptor::new(&self.id, &self.class), |descriptor, property| {
                descriptor.with_property(property.to_descriptor(&self.id))
            })
    }
}

impl PropertyEntry {
    fn to_descriptor(&self, bean_id: &str) -> PropertyDescriptor {
        let literal = self.value.as_deref().filter(|value| !value.is_empty());

        match (literal, &self.reference) {
            (Some(literal), reference) => {
                if reference.as_deref().is_some_and(|r| !r.is_empty()) {
                    tracing::warn!(
                        "Bean '{}' property '{}' has both value and ref - using the value",
                        bean_id,
                        self.name
                    );
                }
                PropertyDescriptor::literal(&self.name, literal)
            }
            (None, Some(reference)) => PropertyDescriptor::reference(&self.name, reference),
            (None, None) => {
                tracing::warn!(
                    "Bean '{}' property '{}' has neither value nor ref",
                    bean_id,
                    self.name
                );
                PropertyDescriptor::reference(&self.name, "")
            }
        }
    }
}
