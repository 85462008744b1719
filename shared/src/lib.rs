pub mod config;
pub mod database;
pub mod entity;
pub mod error;
pub mod models;
pub mod store;

pub use config::Config;
pub use database::{get_db_connection, DbConn};
pub use error::StoreError;
pub use models::*;
pub use store::WatchlistStore;
