use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::error::DomainError;

pub const INVALID_DATA: &str = "Datos de usuario inválidos";

/// JSON error body returned by every failing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Status code plus body; what handlers return on the error path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorBody {
                message: message.into(),
                error: None,
            },
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.body.error = Some(error.into());
        self
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// The endpoint a failure happened in; selects the wording of the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    List,
    Get,
    Update,
    Delete,
}

impl Operation {
    fn failure_message(self) -> &'static str {
        match self {
            Operation::Create => "Error al registrar el usuario",
            Operation::List => "Error al obtener los usuarios",
            Operation::Get => "Error al obtener el usuario",
            Operation::Update => "Error al actualizar el usuario",
            Operation::Delete => "Error al eliminar el usuario",
        }
    }

    fn not_found_message(self) -> &'static str {
        match self {
            Operation::Update => "Usuario no encontrado para actualizar",
            Operation::Delete => "Usuario no encontrado para eliminar",
            _ => "Usuario no encontrado",
        }
    }

    fn duplicate_message(self) -> &'static str {
        match self {
            Operation::Update => "El correo o RFC ya están registrados en otro usuario.",
            _ => "El correo o RFC ya están registrados.",
        }
    }
}

/// Map a domain error to the status/body pair for `op`.
pub fn map_domain_error(e: &DomainError, op: Operation) -> ErrorResponse {
    match e {
        DomainError::UserNotFound { .. } => {
            ErrorResponse::new(StatusCode::NOT_FOUND, op.not_found_message())
        }
        DomainError::Duplicate => {
            ErrorResponse::new(StatusCode::BAD_REQUEST, op.duplicate_message())
        }
        DomainError::Validation { .. } => {
            ErrorResponse::new(StatusCode::BAD_REQUEST, INVALID_DATA).with_error(e.to_string())
        }
        DomainError::InvalidId { .. } | DomainError::Database { .. } => {
            tracing::error!(error = %e, operation = ?op, "Request failed");
            ErrorResponse::new(StatusCode::INTERNAL_SERVER_ERROR, op.failure_message())
                .with_error(e.to_string())
        }
    }
}

/// Body that could not be read as JSON, or whose fields have the wrong type.
/// A body over the size limit keeps its 413; everything else is a 400.
pub fn map_json_rejection(rejection: &JsonRejection) -> ErrorResponse {
    tracing::debug!(error = %rejection, "Rejected request body");
    let status = match rejection.status() {
        StatusCode::PAYLOAD_TOO_LARGE => StatusCode::PAYLOAD_TOO_LARGE,
        _ => StatusCode::BAD_REQUEST,
    };
    ErrorResponse::new(status, INVALID_DATA).with_error(rejection.body_text())
}
