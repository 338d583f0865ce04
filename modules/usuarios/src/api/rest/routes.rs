use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Json, Router,
};
use utoipa::OpenApi;

use crate::api::rest::handlers;
use crate::api::rest::openapi::UsuariosApiDoc;
use crate::domain::service::Service;

pub const USERS_PATH: &str = "/api/usuarios";
pub const USER_PATH: &str = "/api/usuarios/{id}";
pub const OPENAPI_PATH: &str = "/openapi.json";

pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    // POST /api/usuarios - Create, GET /api/usuarios - List
    let users = Router::new()
        .route(
            USERS_PATH,
            post(handlers::create_user).get(handlers::list_users),
        )
        // GET/PUT/DELETE /api/usuarios/{id}
        .route(
            USER_PATH,
            get(handlers::get_user)
                .put(handlers::update_user)
                .delete(handlers::delete_user),
        )
        .layer(Extension(service));

    router
        .merge(users)
        .route(OPENAPI_PATH, get(openapi_json))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(UsuariosApiDoc::openapi())
}
