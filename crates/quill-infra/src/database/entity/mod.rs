//! SeaORM entities for the blog schema.

pub mod post;
pub mod user;
