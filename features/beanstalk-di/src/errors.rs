use std::sync::Arc;

use thiserror::Error;

use crate::{coercion::FieldType, types::DynError};

/// Errors when converting a literal into a field's type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoercionError {
    /// The literal does not parse as the field's type, or is out of range
    #[error("'{literal}' is not a valid {field_type}: {reason}")]
    Malformed {
        field_type: FieldType,
        literal: String,
        reason: String,
    },
    /// A char field was given an empty literal
    #[error("Cannot take a char from an empty literal")]
    EmptyChar,
    /// Literals cannot be converted into this type
    #[error("Literals cannot be converted into {0} fields")]
    Unsupported(FieldType),
}

/// Errors when assigning a value to a field
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssignError {
    /// The type has no injectable field with this name
    #[error("No field named '{0}'")]
    UnknownField(String),
    /// The value is of another kind than the field
    #[error("Field '{field}' holds {expected}, got {found}")]
    TypeMismatch {
        field: String,
        expected: FieldType,
        found: FieldType,
    },
    /// The instance handed in is not of the registered type
    #[error("Instance is not a '{0}'")]
    WrongInstance(&'static str),
}

/// A problem encountered while building the container
///
/// None of these abort the build, each one skips either a single bean or a single property.
#[derive(Error, Debug, Clone)]
pub enum BuildDiagnostic {
    /// More than one descriptor used the id, none of them was built
    #[error("Bean id '{id}' was declared {count} times - none of them was built")]
    DuplicateId { id: String, count: usize },
    /// No type was registered under the descriptor's type name
    #[error("Bean '{id}' has unknown type '{type_name}'")]
    UnknownType { id: String, type_name: String },
    /// The type's factory failed
    #[error("Factory for bean '{id}' ('{type_name}') failed - error: {error}")]
    InstantiationFailed {
        id: String,
        type_name: String,
        error: Arc<DynError>,
    },
    /// The bean's type has no field with the property's name
    #[error("Bean '{id}' has no field '{field}'")]
    UnknownField { id: String, field: String },
    /// A literal could not be converted
    #[error("Bean '{id}' field '{field}': {error}")]
    Coercion {
        id: String,
        field: String,
        error: CoercionError,
    },
    /// A converted value or reference did not fit the field
    #[error("Bean '{id}' field '{field}': {error}")]
    Assignment {
        id: String,
        field: String,
        error: AssignError,
    },
    /// The referenced bean does not exist
    #[error("Bean '{id}' field '{field}' references '{reference}' which does not exist")]
    UnresolvedReference {
        id: String,
        field: String,
        reference: String,
    },
}

impl BuildDiagnostic {
    /// Id of the bean the diagnostic is about
    pub fn bean_id(&self) -> &str {
        match self {
            BuildDiagnostic::DuplicateId { id, .. }
            | BuildDiagnostic::UnknownType { id, .. }
            | BuildDiagnostic::InstantiationFailed { id, .. }
            | BuildDiagnostic::UnknownField { id, .. }
            | BuildDiagnostic::Coercion { id, .. }
            | BuildDiagnostic::Assignment { id, .. }
            | BuildDiagnostic::UnresolvedReference { id, .. } => id,
        }
    }
}

/// All diagnostics of one build
#[derive(Debug, Clone, Default)]
pub struct BuildDiagnostics {
    pub diagnostics: Vec<BuildDiagnostic>,
}

impl BuildDiagnostics {
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Diagnostics concerning the given bean
    pub fn for_bean<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a BuildDiagnostic> {
        self.diagnostics.iter().filter(move |d| d.bean_id() == id)
    }
}

impl std::fmt::Display for BuildDiagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.diagnostics.is_empty() {
            return f.write_str("The container was built without problems");
        }

        let mut display = Vec::new();
        display.push("The container was built with one or more problems:".to_string());
        for diagnostic in &self.diagnostics {
            display.push(format!("- {}", diagnostic));
        }
        f.write_str(&display.join("\n"))
    }
}

/// Errors when requiring a bean of a certain type from a built container
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequireError {
    /// No bean with this id exists
    #[error("No bean with id '{0}' exists")]
    Missing(String),
    /// The bean exists, but is of another type
    #[error("Bean '{id}' is a '{actual_type}', not a '{required_type}'")]
    WrongType {
        id: String,
        required_type: &'static str,
        actual_type: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_says_so() {
        let report = BuildDiagnostics::default();

        assert_eq!(report.to_string(), "The container was built without problems");
    }

    #[test]
    fn report_lists_every_diagnostic() {
        let report = BuildDiagnostics {
            diagnostics: vec![
                BuildDiagnostic::UnknownField {
                    id: "p".into(),
                    field: "nickname".into(),
                },
                BuildDiagnostic::UnresolvedReference {
                    id: "p".into(),
                    field: "partner".into(),
                    reference: "q".into(),
                },
            ],
        };

        let lines: Vec<_> = report.to_string().lines().map(str::to_string).collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "The container was built with one or more problems:");
        assert_eq!(lines[1], "- Bean 'p' has no field 'nickname'");
        assert_eq!(
            lines[2],
            "- Bean 'p' field 'partner' references 'q' which does not exist"
        );
    }
}
