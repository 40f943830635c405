use thiserror::Error;

#[derive(Error, Debug)]
pub enum CareError {
    /// A caller broke a construction or call contract.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A recoverable failure whose message is shown to the user as-is.
    #[error("{0}")]
    Command(String),

    /// The registry itself refused to hold two patients with the same name.
    #[error("Duplicate patient: {0}")]
    DuplicatePatient(String),

    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl CareError {
    pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        CareError::Validation {
            field,
            reason: reason.into(),
        }
    }
}

impl From<confique::Error> for CareError {
    fn from(err: confique::Error) -> Self {
        CareError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CareError>;
