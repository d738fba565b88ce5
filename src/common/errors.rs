use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("credential error: {0}")]
    Credentials(String),
    #[error("remote call failed: {0}")]
    RemoteCall(String),
    #[error("tab missing after creation: {0}")]
    TabMissing(String),
    #[error("previous sequence cell is not numeric: {0}")]
    BadSequence(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("io error: {0}")]
    Io(String),
}

impl AppError {
    // The process exits with this code when the error reaches main.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Credentials(_) => 2,
            AppError::RemoteCall(_) => 3,
            AppError::TabMissing(_) => 4,
            AppError::BadSequence(_) => 5,
            AppError::InvalidInput(_) => 6,
            AppError::Io(_) => 7,
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value.to_string())
    }
}
