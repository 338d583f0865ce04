use std::sync::Arc;

use crate::contract::model::{NewUser, User, UserPatch};
use crate::domain::error::DomainError;
use crate::domain::repo::UsuariosRepository;
use chrono::Utc;
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// Domain service with business rules for user records.
/// Depends only on the repository port, not on infra types.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn UsuariosRepository>,
    config: ServiceConfig,
}

/// Configuration for the domain service
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub max_tax_id_length: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_tax_id_length: 13,
        }
    }
}

impl Service {
    /// Create a service with dependencies.
    pub fn new(repo: Arc<dyn UsuariosRepository>, config: ServiceConfig) -> Self {
        Self { repo, config }
    }

    /// Parse a path identifier.
    pub fn parse_id(raw: &str) -> Result<Uuid, DomainError> {
        Uuid::parse_str(raw.trim()).map_err(|e| DomainError::invalid_id(raw, e))
    }

    #[instrument(name = "usuarios.service.get_user", skip(self), fields(user_id = %id))]
    pub async fn get_user(&self, id: Uuid) -> Result<User, DomainError> {
        debug!("Getting user by id");

        let user = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::user_not_found(id))?;
        debug!("Successfully retrieved user");
        Ok(user)
    }

    /// List every stored user. Not paginated.
    #[instrument(name = "usuarios.service.list_users", skip(self))]
    pub async fn list_users(&self) -> Result<Vec<User>, DomainError> {
        debug!("Listing users");

        let users = self.repo.list_all().await?;

        debug!("Successfully listed {} users", users.len());
        Ok(users)
    }

    #[instrument(
        name = "usuarios.service.create_user",
        skip(self, new_user),
        fields(email = %new_user.email)
    )]
    pub async fn create_user(&self, new_user: NewUser) -> Result<User, DomainError> {
        info!("Creating new user");

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            name: new_user.name,
            email: new_user.email,
            phone: new_user.phone,
            birth_date: new_user.birth_date,
            gender: new_user.gender,
            tax_id: new_user.tax_id,
            created_at: now,
            updated_at: now,
        };
        self.validate_user(&user)?;

        // Uniqueness of email/RFC is decided by the store's unique indexes.
        self.repo.insert(user.clone()).await?;

        info!("Successfully created user with id={}", user.id);
        Ok(user)
    }

    #[instrument(
        name = "usuarios.service.update_user",
        skip(self, patch),
        fields(user_id = %id)
    )]
    pub async fn update_user(&self, id: Uuid, patch: UserPatch) -> Result<User, DomainError> {
        info!("Updating user");

        // Load current
        let mut current = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::user_not_found(id))?;

        // Apply patch and re-run validators on the merged record
        patch.apply_to(&mut current);
        self.validate_user(&current)?;
        current.updated_at = Utc::now();

        // Persist; the row may have been removed since it was loaded
        if !self.repo.update(current.clone()).await? {
            return Err(DomainError::user_not_found(id));
        }

        info!("Successfully updated user");
        Ok(current)
    }

    #[instrument(
        name = "usuarios.service.delete_user",
        skip(self),
        fields(user_id = %id)
    )]
    pub async fn delete_user(&self, id: Uuid) -> Result<(), DomainError> {
        info!("Deleting user");

        if !self.repo.delete(id).await? {
            return Err(DomainError::user_not_found(id));
        }

        info!("Successfully deleted user");
        Ok(())
    }

    // --- validation helpers ---

    fn validate_user(&self, user: &User) -> Result<(), DomainError> {
        Self::require("name", &user.name)?;
        Self::require("email", &user.email)?;
        Self::require("telefono", &user.phone)?;
        Self::require("genero", &user.gender)?;
        Self::require("rfc", &user.tax_id)?;
        self.validate_tax_id(&user.tax_id)
    }

    fn require(field: &str, value: &str) -> Result<(), DomainError> {
        if value.trim().is_empty() {
            return Err(DomainError::required(field));
        }
        Ok(())
    }

    fn validate_tax_id(&self, tax_id: &str) -> Result<(), DomainError> {
        let len = tax_id.chars().count();
        if len > self.config.max_tax_id_length {
            return Err(DomainError::validation(
                "rfc",
                format!(
                    "must be at most {} characters (got {})",
                    self.config.max_tax_id_length, len
                ),
            ));
        }
        Ok(())
    }
}
