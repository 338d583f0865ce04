use crate::contract::model::User;
use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

/// Failure reported by a repository adapter.
#[derive(Debug, Error)]
pub enum RepoError {
    /// A unique index (email or RFC) rejected the write.
    #[error("unique constraint violated")]
    Duplicate,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Port for the domain layer: persistence operations the domain needs.
/// Object-safe and async-friendly via `async_trait`.
#[async_trait]
pub trait UsuariosRepository: Send + Sync {
    /// Load a user by id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError>;
    /// Every stored user, oldest first.
    async fn list_all(&self) -> Result<Vec<User>, RepoError>;
    /// Insert a fully-formed domain user.
    ///
    /// Service computes id/timestamps/validation; repo persists.
    async fn insert(&self, u: User) -> Result<(), RepoError>;
    /// Overwrite an existing user (by primary key in `u.id`).
    /// Returns false if no row matched.
    async fn update(&self, u: User) -> Result<bool, RepoError>;
    /// Delete by id. Returns true if a row was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, RepoError>;
}
