//! Domain entities and business rules.

mod post;
mod reading_time;
mod user;

pub use post::{Post, PostState, PostUpdate};
pub use reading_time::estimate_reading_time;
pub use user::User;
