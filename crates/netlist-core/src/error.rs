use thiserror::Error;

/// Result type alias for network list operations
pub type Result<T> = std::result::Result<T, NetlistError>;

/// Errors that can occur while managing network lists
#[derive(Error, Debug)]
pub enum NetlistError {
    /// A required parameter is missing or malformed
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The referenced list or list element does not exist
    #[error("not found: {resource}")]
    NotFound {
        /// Description of the resource that wasn't found
        resource: String,
    },

    /// The service rejected the submitted content
    #[error("validation failed: {0}")]
    Validation(String),

    /// Sync source list has nothing to copy
    #[error("source list {list_id} has no items to synchronize")]
    EmptySource {
        /// Unique id of the source list
        list_id: String,
    },

    /// Any other remote failure, including transport errors and timeouts
    #[error("service error{}: {message}", status.map(|s| format!(" ({s})")).unwrap_or_default())]
    Service {
        /// HTTP status code, when the service answered at all
        status: Option<u16>,
        /// Error message from the service or transport
        message: String,
    },

    /// Client configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Closed classification of [`NetlistError`] for callers that branch on kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`NetlistError::InvalidArgument`]
    InvalidArgument,
    /// See [`NetlistError::NotFound`]
    NotFound,
    /// See [`NetlistError::Validation`]
    Validation,
    /// See [`NetlistError::EmptySource`]
    EmptySource,
    /// See [`NetlistError::Service`]
    Service,
    /// See [`NetlistError::Config`]
    Config,
}

impl NetlistError {
    /// Build a not-found error for the given resource description
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Build a service error without an HTTP status (transport, decode, timeout)
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Service {
            status: None,
            message: message.into(),
        }
    }

    /// Returns the error classification
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Validation(_) => ErrorKind::Validation,
            Self::EmptySource { .. } => ErrorKind::EmptySource,
            Self::Service { .. } => ErrorKind::Service,
            Self::Config(_) => ErrorKind::Config,
        }
    }

    /// Returns true if the error is a missing list or element
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns the HTTP status code if the service answered
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::Service { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<serde_json::Error> for NetlistError {
    fn from(err: serde_json::Error) -> Self {
        Self::transport(format!("malformed response body: {err}"))
    }
}
