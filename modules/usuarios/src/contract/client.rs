use async_trait::async_trait;
use uuid::Uuid;

use crate::contract::{
    error::UsuariosError,
    model::{NewUser, User, UserPatch},
};

/// Public API trait for the usuarios module that other in-process consumers can use
#[async_trait]
pub trait UsuariosApi: Send + Sync {
    /// Get a user by ID
    async fn get_user(&self, id: Uuid) -> Result<User, UsuariosError>;

    /// List every stored user
    async fn list_users(&self) -> Result<Vec<User>, UsuariosError>;

    /// Create a new user
    async fn create_user(&self, new_user: NewUser) -> Result<User, UsuariosError>;

    /// Update a user with partial data
    async fn update_user(&self, id: Uuid, patch: UserPatch) -> Result<User, UsuariosError>;

    /// Delete a user by ID
    async fn delete_user(&self, id: Uuid) -> Result<(), UsuariosError>;
}
