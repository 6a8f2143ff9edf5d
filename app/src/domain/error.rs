//! Domain-level error types.
//!
//! [`Error`] is the transport agnostic payload recorded in slice state and
//! carried by [`StoreError`], the error returned from every slice and auth
//! operation.

use std::fmt;

use super::slice::SliceOperation;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// Authentication failed or is missing.
    Unauthorized,
    /// The referenced record is unknown.
    NotFound,
    /// The backend could not be reached.
    ServiceUnavailable,
    /// An unexpected error occurred inside the domain.
    InternalError,
}

/// Domain error payload.
///
/// ## Invariants
/// - `message` must be non-empty once trimmed of whitespace.
///
/// # Examples
/// ```
/// use projectmate::domain::{Error, ErrorCode};
///
/// let err = Error::new(ErrorCode::NotFound, "missing");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(err.to_string(), "missing");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: String,
}

/// Validation errors emitted by the constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorValidationError {
    EmptyMessage,
}

impl fmt::Display for ErrorValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMessage => write!(f, "error message must not be empty"),
        }
    }
}

impl std::error::Error for ErrorValidationError {}

impl Error {
    /// Create a new error, panicking if validation fails.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        match Self::try_new(code, message) {
            Ok(value) => value,
            Err(err) => panic!("error messages must satisfy validation: {err}"),
        }
    }

    /// Fallible constructor that validates the message content.
    pub fn try_new(code: ErrorCode, message: impl Into<String>) -> Result<Self, ErrorValidationError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(ErrorValidationError::EmptyMessage);
        }
        Ok(Self { code, message })
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message recorded in state.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::Unauthorized`].
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthorized, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::ServiceUnavailable`].
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

/// Failure returned by slice and auth operations.
///
/// Every variant except [`StoreError::Cancelled`] wraps the domain [`Error`]
/// whose message is also recorded in the owning state's `error` field.
/// Validation failures are the exception: they are rejected before any state
/// change.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Input was rejected before any request was made.
    #[error("validation failed: {0}")]
    Validation(Error),
    /// A collection or profile could not be retrieved.
    #[error("fetch failed: {0}")]
    Fetch(Error),
    /// A record could not be created.
    #[error("create failed: {0}")]
    Create(Error),
    /// A record could not be updated.
    #[error("update failed: {0}")]
    Update(Error),
    /// Login, registration or provider login failed.
    #[error("authentication failed: {0}")]
    Auth(Error),
    /// The request was cancelled before it settled.
    #[error("request cancelled")]
    Cancelled,
}

impl StoreError {
    /// Wrap `error` in the variant matching the failed slice operation.
    pub fn for_operation(operation: SliceOperation, error: Error) -> Self {
        match operation {
            SliceOperation::Fetch => Self::Fetch(error),
            SliceOperation::Create => Self::Create(error),
            SliceOperation::Update => Self::Update(error),
        }
    }

    /// The wrapped domain error, if any.
    pub fn error(&self) -> Option<&Error> {
        match self {
            Self::Validation(error)
            | Self::Fetch(error)
            | Self::Create(error)
            | Self::Update(error)
            | Self::Auth(error) => Some(error),
            Self::Cancelled => None,
        }
    }

    /// Stable code of the wrapped error, if any.
    pub fn code(&self) -> Option<ErrorCode> {
        self.error().map(Error::code)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn rejects_blank_messages(#[case] message: &str) {
        let err = Error::try_new(ErrorCode::InternalError, message).expect_err("blank message");
        assert_eq!(err, ErrorValidationError::EmptyMessage);
    }

    #[rstest]
    #[case(SliceOperation::Fetch, "fetch failed: boom")]
    #[case(SliceOperation::Create, "create failed: boom")]
    #[case(SliceOperation::Update, "update failed: boom")]
    fn store_error_tracks_operation(#[case] operation: SliceOperation, #[case] expected: &str) {
        let err = StoreError::for_operation(operation, Error::internal("boom"));
        assert_eq!(err.to_string(), expected);
        assert_eq!(err.code(), Some(ErrorCode::InternalError));
    }

    #[test]
    fn cancelled_carries_no_domain_error() {
        assert_eq!(StoreError::Cancelled.error(), None);
        assert_eq!(StoreError::Cancelled.to_string(), "request cancelled");
    }
}
