use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("dimensions or mine count out of range")]
    InvalidConfiguration,
    #[error("position outside the board")]
    OutOfBounds,
}

pub type Result<T> = core::result::Result<T, BoardError>;
