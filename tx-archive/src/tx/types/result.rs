use thiserror::Error;

pub type TxResult<T> = Result<T, TxError>;

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum TxError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("i/o error: {0}")]
    IoError(String),
    #[error("decode error: {0}")]
    DecodeError(String),
    #[error("cancelled: {0}")]
    Cancelled(String),
}
