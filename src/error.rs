use thiserror::Error;
use tracing::{error, warn};

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("入力が不正です: {message}")]
    InvalidInput { message: String },

    #[error("シリアライズに失敗しました: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("ファイル操作に失敗しました: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl AppError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        let message = message.into();
        warn!(target: "app::validation", %message, "invalid input");
        AppError::InvalidInput { message }
    }

    pub fn other(message: impl Into<String>) -> Self {
        let message = message.into();
        error!(target: "app::other", %message, "other error");
        AppError::Other(message)
    }
}

impl From<tempfile::PersistError> for AppError {
    fn from(error: tempfile::PersistError) -> Self {
        error!(target: "app::store", error = %error.error, "atomic rename failed");
        AppError::Io(error.error)
    }
}
