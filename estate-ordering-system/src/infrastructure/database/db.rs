use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, ConnectionTrait, DatabaseConnection, DbBackend, Statement};

use crate::infrastructure::config::DatabaseConfig;

#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    pub async fn new(config: &DatabaseConfig) -> anyhow::Result<Self> {
        let mut options = ConnectOptions::new(config.url.to_owned());
        // Every connection to `sqlite::memory:` opens its own empty database.
        if config.url.starts_with("sqlite") && config.url.contains(":memory:") {
            options.max_connections(1).min_connections(1);
        } else {
            options.max_connections(config.max_connections);
        }
        let connection = sea_orm::Database::connect(options).await?;
        if connection.get_database_backend() == DbBackend::Sqlite {
            connection
                .execute(Statement::from_string(
                    DbBackend::Sqlite,
                    "PRAGMA foreign_keys = ON".to_owned(),
                ))
                .await?;
        }
        Ok(Database { connection })
    }

    pub fn get_connection(&self) -> &DatabaseConnection {
        &self.connection
    }

    pub async fn migrate(&self) -> anyhow::Result<()> {
        Migrator::up(&self.connection, None).await?;
        Ok(())
    }
}
