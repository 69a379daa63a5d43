use thiserror::Error;

/// Errors produced while reading panel inputs
#[derive(Debug, Error)]
pub enum PanelError {
    /// `extra` on the datasource is not a JSON object we understand
    #[error("invalid datasource extra: {0}")]
    InvalidExtra(#[source] serde_json::Error),

    /// Panel configuration could not be parsed
    #[error("invalid panel config: {0}")]
    InvalidConfig(#[from] toml::de::Error),

    /// Payload carried by a drag event is not a datasource item
    #[error("invalid drag payload: {0}")]
    InvalidDragPayload(#[source] serde_json::Error),
}

pub type PanelResult<T> = Result<T, PanelError>;
