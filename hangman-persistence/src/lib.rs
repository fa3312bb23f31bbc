pub mod connection;
pub mod credentials;
pub mod entities;
pub mod repositories;
pub mod store;

pub use store::SqliteStore;
