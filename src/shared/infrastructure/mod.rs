// Shared infrastructure: database connection management

pub mod database;

pub use database::Database;
