use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum LibraryError {
    // Caller supplied data is malformed, or it refers to a missing or duplicate entity
    // in the simple lookups (borrow, return, add, register).
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    BookAlreadyBorrowed {
        message: String,
    },
    BookNotBorrowed {
        message: String,
    },
    BookNotFound {
        message: String,
    },
    UserNotRegistered {
        message: String,
    },
    NoReviewsFound {
        message: String,
    },
    ReviewServiceUnavailable {
        message: String,
    },
    // Raised by a notifier when delivery fails. The review notification workflow retries
    // delivery on this error before giving up.
    NotificationFailed {
        message: String,
    },
    Database {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    DuplicateKey {
        message: String,
    },
    Serialization {
        message: String,
    },
}

impl LibraryError {
    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    // shorthand for argument errors, all of them are reported as bad requests
    pub fn invalid_argument(message: &str) -> LibraryError {
        LibraryError::validation(message, Some("400".to_string()))
    }

    pub fn book_already_borrowed(message: &str) -> LibraryError {
        LibraryError::BookAlreadyBorrowed { message: message.to_string() }
    }

    pub fn book_not_borrowed(message: &str) -> LibraryError {
        LibraryError::BookNotBorrowed { message: message.to_string() }
    }

    pub fn book_not_found(message: &str) -> LibraryError {
        LibraryError::BookNotFound { message: message.to_string() }
    }

    pub fn user_not_registered(message: &str) -> LibraryError {
        LibraryError::UserNotRegistered { message: message.to_string() }
    }

    pub fn no_reviews_found(message: &str) -> LibraryError {
        LibraryError::NoReviewsFound { message: message.to_string() }
    }

    pub fn review_service_unavailable(message: &str) -> LibraryError {
        LibraryError::ReviewServiceUnavailable { message: message.to_string() }
    }

    pub fn notification_failed(message: &str) -> LibraryError {
        LibraryError::NotificationFailed { message: message.to_string() }
    }

    pub fn database(message: &str, reason_code: Option<String>, retryable: bool) -> LibraryError {
        LibraryError::Database { message: message.to_string(), reason_code, retryable }
    }

    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn message(&self) -> &str {
        match self {
            LibraryError::Validation { message, .. } => { message }
            LibraryError::BookAlreadyBorrowed { message } => { message }
            LibraryError::BookNotBorrowed { message } => { message }
            LibraryError::BookNotFound { message } => { message }
            LibraryError::UserNotRegistered { message } => { message }
            LibraryError::NoReviewsFound { message } => { message }
            LibraryError::ReviewServiceUnavailable { message } => { message }
            LibraryError::NotificationFailed { message } => { message }
            LibraryError::Database { message, .. } => { message }
            LibraryError::DuplicateKey { message } => { message }
            LibraryError::Serialization { message } => { message }
        }
    }

    pub fn retryable(&self) -> bool {
        match self {
            LibraryError::Validation { .. } => { false }
            LibraryError::BookAlreadyBorrowed { .. } => { false }
            LibraryError::BookNotBorrowed { .. } => { false }
            LibraryError::BookNotFound { .. } => { false }
            LibraryError::UserNotRegistered { .. } => { false }
            LibraryError::NoReviewsFound { .. } => { false }
            LibraryError::ReviewServiceUnavailable { .. } => { false }
            LibraryError::NotificationFailed { .. } => { true }
            LibraryError::Database { retryable, .. } => { *retryable }
            LibraryError::DuplicateKey { .. } => { false }
            LibraryError::Serialization { .. } => { false }
        }
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for library operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum BookStatus {
    Available,
    Borrowed,
}

impl From<String> for BookStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Borrowed" => BookStatus::Borrowed,
            _ => BookStatus::Available,
        }
    }
}

impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookStatus::Available => write!(f, "Available"),
            BookStatus::Borrowed => write!(f, "Borrowed"),
        }
    }
}
