use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use domain_estate::exception::EstateException;
use sea_orm::{ConnectionTrait, DbErr, SqlErr, Statement, TransactionTrait};
use tokio::sync::Mutex;
use typed_builder::TypedBuilder;

use super::Database;

/// Request scoped repository.
///
/// Inserts run immediately so the caller gets the assigned id back. Updates and
/// deletes are buffered and run together in one transaction by `save_changed`.
#[derive(TypedBuilder)]
pub struct OrmRepo {
    pub db: Arc<Database>,
    #[builder(default)]
    pub statements: Arc<Mutex<Vec<Statement>>>,
    #[builder(default = AtomicBool::new(true))]
    pub can_drop: AtomicBool,
}

impl OrmRepo {
    pub async fn push_statement(&self, stmt: Statement) {
        let mut stmts = self.statements.lock().await;
        stmts.push(stmt);
        self.can_drop.store(false, Ordering::Relaxed);
    }

    pub async fn save_changed(&self) -> anyhow::Result<bool> {
        if !self.can_drop.load(Ordering::Relaxed) {
            let mut stmts = self.statements.lock().await;
            let trans = self.db.get_connection().begin().await?;
            for stmt in stmts.iter() {
                if let Err(e) = trans.execute(stmt.clone()).await {
                    trans.rollback().await?;
                    stmts.clear();
                    self.can_drop.store(true, Ordering::Relaxed);
                    return Err(store_error(e));
                }
            }
            trans.commit().await?;
            self.can_drop.store(true, Ordering::Relaxed);
            stmts.clear();
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

impl Drop for OrmRepo {
    fn drop(&mut self) {
        if !self.can_drop.load(Ordering::Relaxed) {
            if let Ok(stmts) = self.statements.try_lock() {
                let sqls = stmts.iter().map(|x| x.to_string()).collect::<Vec<String>>().join("\n");
                tracing::trace!("Unused sql statements:\n{sqls}")
            }
        }
    }
}

/// Lifts foreign key violations into the domain error so the caller can tell them
/// apart from other store failures.
pub fn store_error(e: DbErr) -> anyhow::Error {
    match e.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(reason)) => {
            EstateException::Reference { reason }.into()
        }
        _ => e.into(),
    }
}
