//! SeaORM-backed repository implementation for the domain port.
//!
//! This struct is generic over `C: ConnectionTrait`, so you can construct it
//! with a `DatabaseConnection` **or** a transactional connection.

use anyhow::anyhow;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, QueryOrder, SqlErr};
use uuid::Uuid;

use crate::contract::User;
use crate::domain::repo::{RepoError, UsuariosRepository};
use crate::infra::storage::entity::{Column, Entity as UserEntity};
use crate::infra::storage::mapper::to_active_model;

/// SeaORM repository impl.
/// Holds a connection object; its lifetime/ownership is up to the caller.
pub struct SeaOrmUsuariosRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    conn: C,
}

impl<C> SeaOrmUsuariosRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: C) -> Self {
        Self { conn }
    }
}

/// Unique index hits become `RepoError::Duplicate`; everything else keeps the driver message.
fn classify(err: DbErr, op: &'static str) -> RepoError {
    if let Some(SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
        return RepoError::Duplicate;
    }
    RepoError::Other(anyhow!(err).context(format!("{op} failed")))
}

#[async_trait::async_trait]
impl<C> UsuariosRepository for SeaOrmUsuariosRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        let found = UserEntity::find_by_id(id)
            .one(&self.conn)
            .await
            .map_err(|e| classify(e, "find_by_id"))?;
        Ok(found.map(Into::into))
    }

    async fn list_all(&self) -> Result<Vec<User>, RepoError> {
        let rows = UserEntity::find()
            .order_by_asc(Column::CreatedAt)
            .all(&self.conn)
            .await
            .map_err(|e| classify(e, "list_all"))?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, u: User) -> Result<(), RepoError> {
        UserEntity::insert(to_active_model(u))
            .exec_without_returning(&self.conn)
            .await
            .map_err(|e| classify(e, "insert"))?;
        Ok(())
    }

    async fn update(&self, u: User) -> Result<bool, RepoError> {
        match to_active_model(u).update(&self.conn).await {
            Ok(_) => Ok(true),
            Err(DbErr::RecordNotUpdated) => Ok(false),
            Err(e) => Err(classify(e, "update")),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepoError> {
        let res = UserEntity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .map_err(|e| classify(e, "delete"))?;
        Ok(res.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::storage::migrations::Migrator;
    use chrono::{NaiveDate, Utc};
    use sea_orm::{Database, DatabaseConnection};
    use sea_orm_migration::MigratorTrait;

    async fn repo() -> SeaOrmUsuariosRepository<DatabaseConnection> {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to connect to test database");
        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");
        SeaOrmUsuariosRepository::new(db)
    }

    fn user(email: &str, tax_id: &str) -> User {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            name: "Carlos".into(),
            email: email.into(),
            phone: "5550001111".into(),
            birth_date: NaiveDate::from_ymd_opt(1985, 1, 31).unwrap(),
            gender: "M".into(),
            tax_id: tax_id.into(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn insert_then_find_roundtrips_all_columns() {
        let repo = repo().await;
        let u = user("carlos@example.com", "CAAC850131AA1");
        repo.insert(u.clone()).await.unwrap();

        let found = repo.find_by_id(u.id).await.unwrap().expect("row");
        assert_eq!(found.id, u.id);
        assert_eq!(found.birth_date, u.birth_date);
        assert_eq!(found.tax_id, u.tax_id);
        assert_eq!(found.created_at.timestamp(), u.created_at.timestamp());
    }

    #[tokio::test]
    async fn unique_indexes_report_duplicates() {
        let repo = repo().await;
        repo.insert(user("carlos@example.com", "CAAC850131AA1"))
            .await
            .unwrap();

        let dup_email = repo
            .insert(user("carlos@example.com", "ZZZZ850131AA1"))
            .await;
        assert!(matches!(dup_email, Err(RepoError::Duplicate)));

        let dup_rfc = repo
            .insert(user("otro@example.com", "CAAC850131AA1"))
            .await;
        assert!(matches!(dup_rfc, Err(RepoError::Duplicate)));
    }

    #[tokio::test]
    async fn update_and_delete_report_missing_rows() {
        let repo = repo().await;
        let ghost = user("ghost@example.com", "GHOS850131AA1");
        assert!(!repo.update(ghost.clone()).await.unwrap());
        assert!(!repo.delete(ghost.id).await.unwrap());

        repo.insert(ghost.clone()).await.unwrap();
        let mut changed = ghost.clone();
        changed.name = "Fantasma".into();
        assert!(repo.update(changed).await.unwrap());
        assert_eq!(repo.list_all().await.unwrap()[0].name, "Fantasma");
        assert!(repo.delete(ghost.id).await.unwrap());
        assert!(repo.list_all().await.unwrap().is_empty());
    }
}
