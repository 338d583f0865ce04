use std::sync::Arc;

use axum::Router;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::info;

use crate::api::rest::routes;
use crate::contract::client::UsuariosApi;
use crate::domain::service::{Service, ServiceConfig};
use crate::gateways::local::UsuariosLocalClient;
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::sea_orm_repo::SeaOrmUsuariosRepository;

/// The user-records module: owns the domain service built on top of an injected
/// database handle and hands out its REST routes and in-process client.
#[derive(Clone)]
pub struct Usuarios {
    db: DatabaseConnection,
    service: Arc<Service>,
}

impl Usuarios {
    pub fn new(db: DatabaseConnection) -> Self {
        Self::with_config(db, ServiceConfig::default())
    }

    pub fn with_config(db: DatabaseConnection, config: ServiceConfig) -> Self {
        info!("Initializing usuarios module");

        // Wire repository (infra) to domain service (port)
        let repo = SeaOrmUsuariosRepository::new(db.clone());
        let service = Arc::new(Service::new(Arc::new(repo), config));
        Self { db, service }
    }

    /// Create the `usuarios` table and its unique indexes if missing.
    pub async fn migrate(&self) -> anyhow::Result<()> {
        info!("Running usuarios database migrations");
        Migrator::up(&self.db, None).await?;
        info!("Usuarios database migrations completed successfully");
        Ok(())
    }

    /// Mount the `/api/usuarios` routes onto `router`.
    pub fn register_rest(&self, router: Router) -> Router {
        info!("Registering usuarios REST routes");
        routes::register_routes(router, self.service.clone())
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    pub fn client(&self) -> Arc<dyn UsuariosApi> {
        Arc::new(UsuariosLocalClient::new(self.service.clone()))
    }
}
