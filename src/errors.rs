pub type DataResult<T> = Result<T, DataError>;

#[derive(thiserror::Error, Debug)]
pub enum DataError {
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("invalid id: {0}")]
    InvalidId(String),
    #[error("sync push error: {0}")]
    SyncPush(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl DataError {
    pub fn invalid_id(message: impl Into<String>) -> Self {
        Self::InvalidId(message.into())
    }

    pub fn sync_push(message: impl Into<String>) -> Self {
        Self::SyncPush(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl From<anyhow::Error> for DataError {
    fn from(value: anyhow::Error) -> Self {
        Self::Internal(value.to_string())
    }
}
