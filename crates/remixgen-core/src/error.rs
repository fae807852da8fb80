use thiserror::Error;

#[derive(Debug, Error)]
pub enum SynthError {
    #[error("task already exists: {0}")]
    DuplicateTask(String),

    #[error("task not found: {0}")]
    MissingTask(String),

    #[error("template root required for scaffold copies")]
    MissingTemplateRoot,

    #[error("generator error: {0}")]
    Generator(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
