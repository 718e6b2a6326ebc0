pub type Result<T> = std::result::Result<T, Error>;

/// Attribute validation failures.
///
/// `Display` is the exact user-facing message; callers surface it verbatim
/// (the original service returned these as plain-text 400 bodies).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{message}")]
    InvalidName { message: String },

    #[error("{message}")]
    InvalidNumber { message: String },

    #[error("{message}")]
    InvalidCategory { message: String },
}
