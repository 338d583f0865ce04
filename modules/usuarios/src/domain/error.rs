use crate::domain::repo::RepoError;
use thiserror::Error;
use uuid::Uuid;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("User not found: {id}")]
    UserNotFound { id: Uuid },

    /// Email or RFC collides with another stored user.
    #[error("Email or RFC already registered")]
    Duplicate,

    #[error("{field}: {message}")]
    Validation { field: String, message: String },

    #[error("Cast to UUID failed for value \"{raw}\": {reason}")]
    InvalidId { raw: String, reason: String },

    #[error("Database error: {message}")]
    Database { message: String },
}

impl DomainError {
    pub fn user_not_found(id: Uuid) -> Self {
        Self::UserNotFound { id }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn required(field: impl Into<String>) -> Self {
        Self::validation(field, "is required")
    }

    pub fn invalid_id(raw: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidId {
            raw: raw.into(),
            reason: reason.to_string(),
        }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}

impl From<RepoError> for DomainError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::Duplicate => Self::Duplicate,
            RepoError::Other(e) => Self::database(format!("{e:#}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(DomainError::required("rfc").to_string(), "rfc: is required");
        assert_eq!(
            DomainError::Duplicate.to_string(),
            "Email or RFC already registered"
        );
        assert_eq!(
            DomainError::database("connection refused").to_string(),
            "Database error: connection refused"
        );

        let err = DomainError::invalid_id("abc", "invalid length");
        assert_eq!(
            err.to_string(),
            "Cast to UUID failed for value \"abc\": invalid length"
        );
    }
}
