use std::io;

/// All errors that can occur while driving the cricket-connect state model.
#[derive(thiserror::Error, Debug)]
pub enum ConnectError {
    /// A required form field was empty, or two fields that must agree did not.
    #[error("{0}")]
    Validation(&'static str),

    /// Registration collided with an existing account's email.
    #[error("Email already registered")]
    DuplicateEmail { email: String },

    /// No registered account matched the submitted email and password.
    #[error("Invalid email or password. Please register first.")]
    InvalidCredentials,

    /// A configuration value is outside its accepted range.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),

    /// A booking referenced a ground id that is not in the catalog.
    #[error("no ground with id {id}")]
    GroundNotFound { id: String },

    /// Reading or writing a durable storage slot failed.
    #[error("storage access failed for {key}: {source}")]
    Storage { key: String, source: io::Error },

    /// Fixture data or a persisted account list could not be (de)serialized.
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),

    /// The password hasher rejected its input or parameters.
    #[error("password hashing failed: {0}")]
    PasswordHash(String),
}

impl From<argon2::password_hash::Error> for ConnectError {
    fn from(err: argon2::password_hash::Error) -> Self {
        ConnectError::PasswordHash(err.to_string())
    }
}

impl From<argon2::Error> for ConnectError {
    fn from(err: argon2::Error) -> Self {
        ConnectError::PasswordHash(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ConnectError>;
