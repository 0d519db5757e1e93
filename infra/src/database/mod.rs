//! Database access layer: connection pooling and MySQL repositories

pub mod connection;
pub mod mysql;

pub use connection::DatabasePool;
pub use mysql::{MySqlCategoryRepository, MySqlTokenRepository, MySqlUserRepository};
