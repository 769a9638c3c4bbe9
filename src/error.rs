use thiserror::Error;

pub type DirectoryResult<T> = Result<T, DirectoryError>;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// A character outside `0-9` at `position` (in chars).
    #[error("Invalid phone number {key:?}: non-digit character at position {position}")]
    InvalidKey { key: String, position: usize },

    #[error("Phone number has {len} digits, at most {max} allowed")]
    KeyTooLong { len: usize, max: usize },

    #[error("Unknown route: {method} {path}")]
    UnknownRoute { method: String, path: String },

    #[error("Request is not valid UTF-8")]
    InvalidEncoding(#[from] std::str::Utf8Error),

    #[error("Request line longer than {max} bytes")]
    RequestTooLong { max: usize },

    #[error("Malformed request body: {0}")]
    Json(#[from] serde_json::Error),
}

impl DirectoryError {
    /// Errors raised while validating caller input rather than routing.
    pub fn is_bad_request(&self) -> bool {
        !matches!(self, DirectoryError::UnknownRoute { .. })
    }
}
