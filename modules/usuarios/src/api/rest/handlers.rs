use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path},
    http::StatusCode,
    response::Json,
    Extension,
};
use tracing::{info, warn};

use crate::api::rest::dto::{CreateUserReq, MessageDto, UpdateUserReq, UserDto};
use crate::api::rest::error::{
    map_domain_error, map_json_rejection, ErrorBody, ErrorResponse, Operation,
};
use crate::contract::model::{NewUser, UserPatch};
use crate::domain::service::Service;

/// Create a new user
#[utoipa::path(
    post,
    path = "/api/usuarios",
    tag = "usuarios",
    request_body = CreateUserReq,
    responses(
        (status = 201, description = "Created user", body = UserDto),
        (status = 400, description = "Duplicate email/RFC or invalid data", body = ErrorBody),
        (status = 500, description = "Internal Server Error", body = ErrorBody),
    )
)]
pub async fn create_user(
    Extension(svc): Extension<Arc<Service>>,
    payload: Result<Json<CreateUserReq>, JsonRejection>,
) -> Result<(StatusCode, Json<UserDto>), ErrorResponse> {
    let Json(req_body) = payload.map_err(|e| map_json_rejection(&e))?;
    info!("Creating user: {:?}", req_body);

    let result = match NewUser::try_from(req_body) {
        Ok(new_user) => svc.create_user(new_user).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(user) => Ok((StatusCode::CREATED, Json(UserDto::from(user)))),
        Err(e) => {
            warn!("Failed to create user: {}", e);
            Err(map_domain_error(&e, Operation::Create))
        }
    }
}

/// List every stored user
#[utoipa::path(
    get,
    path = "/api/usuarios",
    tag = "usuarios",
    responses(
        (status = 200, description = "All users", body = Vec<UserDto>),
        (status = 500, description = "Internal Server Error", body = ErrorBody),
    )
)]
pub async fn list_users(
    Extension(svc): Extension<Arc<Service>>,
) -> Result<Json<Vec<UserDto>>, ErrorResponse> {
    info!("Listing users");

    match svc.list_users().await {
        Ok(users) => Ok(Json(users.into_iter().map(UserDto::from).collect())),
        Err(e) => {
            warn!("Failed to list users: {}", e);
            Err(map_domain_error(&e, Operation::List))
        }
    }
}

/// Get a specific user by ID
#[utoipa::path(
    get,
    path = "/api/usuarios/{id}",
    tag = "usuarios",
    params(("id" = String, Path, description = "User UUID")),
    responses(
        (status = 200, description = "User found", body = UserDto),
        (status = 404, description = "Not Found", body = ErrorBody),
        (status = 500, description = "Internal Server Error", body = ErrorBody),
    )
)]
pub async fn get_user(
    Extension(svc): Extension<Arc<Service>>,
    Path(raw_id): Path<String>,
) -> Result<Json<UserDto>, ErrorResponse> {
    info!("Getting user with id: {}", raw_id);

    let result = match Service::parse_id(&raw_id) {
        Ok(id) => svc.get_user(id).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(user) => Ok(Json(UserDto::from(user))),
        Err(e) => {
            warn!("Failed to get user {}: {}", raw_id, e);
            Err(map_domain_error(&e, Operation::Get))
        }
    }
}

/// Update an existing user
#[utoipa::path(
    put,
    path = "/api/usuarios/{id}",
    tag = "usuarios",
    params(("id" = String, Path, description = "User UUID")),
    request_body = UpdateUserReq,
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 400, description = "Duplicate email/RFC or invalid data", body = ErrorBody),
        (status = 404, description = "Not Found", body = ErrorBody),
        (status = 500, description = "Internal Server Error", body = ErrorBody),
    )
)]
pub async fn update_user(
    Extension(svc): Extension<Arc<Service>>,
    Path(raw_id): Path<String>,
    payload: Result<Json<UpdateUserReq>, JsonRejection>,
) -> Result<Json<UserDto>, ErrorResponse> {
    let id = Service::parse_id(&raw_id).map_err(|e| map_domain_error(&e, Operation::Update))?;
    let Json(req_body) = payload.map_err(|e| map_json_rejection(&e))?;
    info!("Updating user {} with: {:?}", id, req_body);

    let result = match UserPatch::try_from(req_body) {
        Ok(patch) => svc.update_user(id, patch).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(user) => Ok(Json(UserDto::from(user))),
        Err(e) => {
            warn!("Failed to update user {}: {}", id, e);
            Err(map_domain_error(&e, Operation::Update))
        }
    }
}

/// Delete a user by ID
#[utoipa::path(
    delete,
    path = "/api/usuarios/{id}",
    tag = "usuarios",
    params(("id" = String, Path, description = "User UUID")),
    responses(
        (status = 200, description = "User deleted", body = MessageDto),
        (status = 404, description = "Not Found", body = ErrorBody),
        (status = 500, description = "Internal Server Error", body = ErrorBody),
    )
)]
pub async fn delete_user(
    Extension(svc): Extension<Arc<Service>>,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageDto>, ErrorResponse> {
    info!("Deleting user: {}", raw_id);

    let result = match Service::parse_id(&raw_id) {
        Ok(id) => svc.delete_user(id).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => Ok(Json(MessageDto::new("Usuario eliminado con éxito"))),
        Err(e) => {
            warn!("Failed to delete user {}: {}", raw_id, e);
            Err(map_domain_error(&e, Operation::Delete))
        }
    }
}
