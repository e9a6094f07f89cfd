use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

use beanstalk_di::{BeanContainer, BeanContainerBuilder, BeanDescriptor, TypeRegistry};

use crate::{
    document::{json_values_as_text, BeansDocument},
    errors::LoadError,
};

/// Document formats bean definitions can be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    /// Picks the format from a file extension
    pub fn from_path(path: &Path) -> Option<Format> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Some(Format::Yaml),
            "json" => Some(Format::Json),
            _ => None,
        }
    }
}

/// Where bean definitions were loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefinitionSource {
    /// Loaded from a file
    File(PathBuf),
    /// Parsed from a string
    Inline,
}

impl Display for DefinitionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DefinitionSource::File(path) => write!(f, "Bean definition file: {}", path.display()),
            DefinitionSource::Inline => f.write_str("Inline bean definitions"),
        }
    }
}

/// The beans declared in one document, in declaration order
#[derive(Debug, Clone)]
pub struct BeanDefinitions {
    source: DefinitionSource,
    document: BeansDocument,
}

impl BeanDefinitions {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, LoadError> {
        Self::parse(yaml, Format::Yaml, DefinitionSource::Inline)
    }

    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        Self::parse(json, Format::Json, DefinitionSource::Inline)
    }

    /// Reads a definition file, the format is picked from the extension
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let format =
            Format::from_path(path).ok_or_else(|| LoadError::UnknownFormat(path.to_path_buf()))?;
        let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content, format, DefinitionSource::File(path.to_path_buf()))
    }

    fn parse(content: &str, format: Format, source: DefinitionSource) -> Result<Self, LoadError> {
        let document: BeansDocument = match format {
            Format::Yaml => serde_yaml::from_str(content)?,
            Format::Json => {
                let mut raw: serde_json::Value = serde_json::from_str(content)?;
                json_values_as_text(&mut raw);
                serde_json::from_value(raw)?
            }
        };

        tracing::debug!("Loaded {} bean definitions - {}", document.beans.len(), source);
        Ok(BeanDefinitions { source, document })
    }

    pub fn source(&self) -> &DefinitionSource {
        &self.source
    }

    pub fn document(&self) -> &BeansDocument {
        &self.document
    }

    pub fn len(&self) -> usize {
        self.document.beans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.document.beans.is_empty()
    }

    /// The declared beans as descriptors, in declaration order
    pub fn descriptors(&self) -> Vec<BeanDescriptor> {
        self.document.beans.iter().map(|bean| bean.to_descriptor()).collect()
    }

    /// Builds a container holding the declared beans
    pub fn build(&self, registry: TypeRegistry) -> BeanContainer {
        BeanContainerBuilder::new(registry).build(self.descriptors())
    }
}
