//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod repository;

pub use auth::{AuthError, PasswordService, TokenClaims, TokenService};
pub use repository::{
    AuthorFilter, BaseRepository, Page, PostRepository, PublishedFilter, SortKey, SortOrder,
    UserRepository,
};
