pub mod estate;

pub use sea_orm;
