use thiserror::Error;

pub type Result<T> = std::result::Result<T, FloristError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FloristError {
    /// A value was rejected at construction time.
    #[error("{0}")]
    InvalidArgument(String),
}

impl FloristError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
