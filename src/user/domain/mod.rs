//! Domain model for user accounts.

mod email;
mod entity;
mod error;
mod ids;

pub use email::Email;
pub use entity::User;
pub use error::UserDomainError;
pub use ids::UserId;
