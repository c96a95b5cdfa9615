use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid Minkowski order: expected at least 1, got {0}")]
    InvalidOrder(i64),

    #[error("Logger can't be null")]
    MissingLogSink,

    #[error("Filename can not be empty")]
    EmptyLogPath,

    #[error("Unknown metric: {0}")]
    UnknownMetric(String),

    #[error("Unknown input field: {0}")]
    UnknownField(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
