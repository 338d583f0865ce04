use utoipa::OpenApi;

use crate::api::rest::dto::{CreateUserReq, MessageDto, UpdateUserReq, UserDto};
use crate::api::rest::error::ErrorBody;
use crate::api::rest::handlers;

/// OpenAPI document for the `/api/usuarios` routes.
#[derive(OpenApi)]
#[openapi(
    info(title = "usuarios", description = "CRUD over user records"),
    tags((name = "usuarios", description = "User records")),
    paths(
        handlers::create_user,
        handlers::list_users,
        handlers::get_user,
        handlers::update_user,
        handlers::delete_user,
    ),
    components(schemas(UserDto, CreateUserReq, UpdateUserReq, MessageDto, ErrorBody))
)]
pub struct UsuariosApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = UsuariosApiDoc::openapi();
        let users = doc.paths.paths.get("/api/usuarios").expect("collection path");
        assert!(users.get.is_some());
        assert!(users.post.is_some());

        let user = doc.paths.paths.get("/api/usuarios/{id}").expect("item path");
        assert!(user.get.is_some());
        assert!(user.put.is_some());
        assert!(user.delete.is_some());

        let schemas = &doc.components.as_ref().expect("components").schemas;
        assert!(schemas.contains_key("UserDto"));
        assert!(schemas.contains_key("ErrorBody"));
    }
}
