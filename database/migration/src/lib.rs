use sea_orm_migration::{sea_orm::Database, *};

pub use sea_orm_migration::MigratorTrait;

mod m20250401_0900_create_estate_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250401_0900_create_estate_tables::Migration)]
    }
}

impl Migrator {
    pub async fn migration_up(db_con: &str) -> anyhow::Result<()> {
        Migrator::up(&Database::connect(db_con).await?, None).await?;
        Ok(())
    }

    pub async fn migration_down(db_con: &str) -> anyhow::Result<()> {
        Migrator::down(&Database::connect(db_con).await?, None).await?;
        Ok(())
    }
}
