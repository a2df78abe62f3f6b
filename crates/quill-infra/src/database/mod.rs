//! Database connection management and repositories.

mod connection;
pub mod entity;
mod postgres_base;
pub mod postgres_repo;

pub use connection::{DatabaseConfig, connect};
pub use sea_orm::{DbConn, DbErr};
pub use postgres_repo::{PostgresPostRepository, PostgresUserRepository};

#[cfg(test)]
mod tests;
