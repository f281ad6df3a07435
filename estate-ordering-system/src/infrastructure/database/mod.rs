mod db;
mod orm;

#[rustfmt::skip]
pub use {
    db::Database,
    orm::{store_error, OrmRepo},
};
