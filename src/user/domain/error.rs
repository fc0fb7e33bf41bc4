//! Error types for user domain validation.

use thiserror::Error;

/// Errors returned while constructing or changing users.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserDomainError {
    /// The address is not a valid email address.
    #[error("Invalid email format")]
    InvalidEmail(String),

    /// The first name is empty on creation.
    #[error("First name is required")]
    MissingFirstName,

    /// The last name is empty on creation.
    #[error("Last name is required")]
    MissingLastName,

    /// A rename would leave the user without a first name.
    #[error("First name cannot be empty")]
    EmptyFirstName,

    /// A rename would leave the user without a last name.
    #[error("Last name cannot be empty")]
    EmptyLastName,
}
