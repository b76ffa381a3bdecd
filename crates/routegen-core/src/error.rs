use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("input does not begin with a recognized HTTP method: {0:?}")]
    InvalidMethod(String),
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("route error: {0}")]
    Route(#[from] RouteError),
}

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse YAML manifest: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("failed to parse JSON manifest: {0}")]
    Json(#[from] serde_json::Error),
}
