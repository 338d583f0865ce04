use thiserror::Error;
use uuid::Uuid;

/// Errors that are safe to expose to other modules
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsuariosError {
    #[error("User not found: {id}")]
    NotFound { id: Uuid },

    #[error("Email or RFC already registered")]
    Conflict,

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Internal error")]
    Internal,
}

impl UsuariosError {
    pub fn not_found(id: Uuid) -> Self {
        Self::NotFound { id }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

impl From<crate::domain::error::DomainError> for UsuariosError {
    fn from(domain_error: crate::domain::error::DomainError) -> Self {
        use crate::domain::error::DomainError::*;
        match domain_error {
            UserNotFound { id } => Self::not_found(id),
            Duplicate => Self::Conflict,
            Validation { field, message } => Self::validation(format!("{field}: {message}")),
            InvalidId { raw, reason } => Self::validation(format!("invalid id '{raw}': {reason}")),
            Database { .. } => Self::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::DomainError;

    #[test]
    fn maps_domain_errors() {
        let id = Uuid::new_v4();
        assert_eq!(
            UsuariosError::from(DomainError::user_not_found(id)),
            UsuariosError::NotFound { id }
        );
        assert_eq!(
            UsuariosError::from(DomainError::Duplicate),
            UsuariosError::Conflict
        );
        assert_eq!(
            UsuariosError::from(DomainError::required("rfc")),
            UsuariosError::validation("rfc: is required")
        );
        assert_eq!(
            UsuariosError::from(DomainError::database("disk I/O error")),
            UsuariosError::Internal
        );
    }
}
