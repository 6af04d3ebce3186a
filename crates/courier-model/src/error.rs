use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid courier id: {0:?}")]
    InvalidCourierId(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
