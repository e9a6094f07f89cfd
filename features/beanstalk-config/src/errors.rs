use std::path::PathBuf;

/// Errors when loading bean definitions
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    /// The definition file could not be read
    #[error("Could not read bean definitions from '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The document is not valid YAML, or does not describe beans
    #[error("Invalid YAML bean definitions: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// The document is not valid JSON, or does not describe beans
    #[error("Invalid JSON bean definitions: {0}")]
    Json(#[from] serde_json::Error),
    /// The file extension is neither yaml, yml nor json
    #[error("Unknown bean definition format for '{}' - expected .yaml, .yml or .json", .0.display())]
    UnknownFormat(PathBuf),
}
