use thiserror::Error;

/// Basic application errors: I/O, (de)serialization, and unexpected internal
/// states that indicate a programmer error rather than a bad input.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("invalid input: {details}")]
    InvalidInput { details: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("internal error: {message}")]
    Internal { message: String },
}
