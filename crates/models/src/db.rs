use std::time::Duration;

use configs::DatabaseConfig;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::info;

use crate::errors::ModelError;
use crate::{car_service, order, product, user};

/// Open a pooled connection using the configured pool bounds and timeouts.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> Result<DatabaseConnection, ModelError> {
    let mut opts = ConnectOptions::new(cfg.url.clone());
    opts.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);
    let db = Database::connect(opts).await?;
    Ok(db)
}

/// Create the four collections if they do not exist yet. No versioning:
/// existing tables are left untouched.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), ModelError> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    let statements = [
        schema.create_table_from_entity(car_service::Entity).if_not_exists().to_owned(),
        schema.create_table_from_entity(product::Entity).if_not_exists().to_owned(),
        schema.create_table_from_entity(order::Entity).if_not_exists().to_owned(),
        schema.create_table_from_entity(user::Entity).if_not_exists().to_owned(),
    ];
    for stmt in statements.iter() {
        db.execute(backend.build(stmt)).await?;
    }
    info!(tables = statements.len(), "schema ensured");
    Ok(())
}
