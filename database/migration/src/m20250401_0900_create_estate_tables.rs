use database_model::estate::prelude::*;
use sea_orm_migration::{
    prelude::*,
    sea_orm::{DbBackend, EntityTrait, Schema},
};

pub struct Migration;

fn get_seaorm_create_stmt<E: EntityTrait>(backend: DbBackend, e: E) -> TableCreateStatement {
    let schema = Schema::new(backend);
    schema.create_table_from_entity(e).if_not_exists().to_owned()
}

/// Written out by hand for the price column: SQLite gives a `decimal` column numeric
/// affinity and would hand whole prices back as integers.
fn create_replacement_option_stmt(backend: DbBackend) -> TableCreateStatement {
    let mut price = ColumnDef::new(ReplacementOptionColumn::Price);
    match backend {
        DbBackend::Sqlite => price.double(),
        _ => price.decimal_len(8, 2),
    };
    Table::create()
        .table(ReplacementOptionEntity)
        .if_not_exists()
        .col(
            ColumnDef::new(ReplacementOptionColumn::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(ReplacementOptionColumn::Name).string_len(100).not_null())
        .col(ColumnDef::new(ReplacementOptionColumn::Brand).string_len(100).not_null())
        .col(ColumnDef::new(ReplacementOptionColumn::ModelNumber).string_len(100).not_null())
        .col(price.not_null())
        .col(ColumnDef::new(ReplacementOptionColumn::Efficiency).string_len(100).null())
        .col(
            ColumnDef::new(ReplacementOptionColumn::MatchingScore)
                .integer()
                .not_null()
                .default(0),
        )
        .to_owned()
}

fn get_seaorm_drop_stmt<E: EntityTrait>(e: E) -> TableDropStatement {
    Table::drop().table(e).if_exists().to_owned()
}

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20250401_0900_create_estate_tables"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    /// Parents first: the cascading foreign keys are part of each create statement.
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();
        let stmts = vec![
            get_seaorm_create_stmt(backend, PropertyEntity),
            create_replacement_option_stmt(backend),
            get_seaorm_create_stmt(backend, ApplianceEntity),
            get_seaorm_create_stmt(backend, OrderEntity),
        ];
        for stmt in stmts {
            manager.create_table(stmt).await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let stmts = vec![
            get_seaorm_drop_stmt(OrderEntity),
            get_seaorm_drop_stmt(ApplianceEntity),
            get_seaorm_drop_stmt(ReplacementOptionEntity),
            get_seaorm_drop_stmt(PropertyEntity),
        ];
        for stmt in stmts {
            manager.drop_table(stmt).await?;
        }
        Ok(())
    }
}
