//! User entity.

use super::{Email, UserDomainError, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    email: Email,
    first_name: String,
    last_name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a user with a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::MissingFirstName`] or
    /// [`UserDomainError::MissingLastName`] when either name is empty.
    pub fn new(
        email: Email,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, UserDomainError> {
        let first = first_name.into();
        let last = last_name.into();
        if first.is_empty() {
            return Err(UserDomainError::MissingFirstName);
        }
        if last.is_empty() {
            return Err(UserDomainError::MissingLastName);
        }
        let timestamp = clock.utc();
        Ok(Self {
            id: UserId::new(),
            email,
            first_name: first,
            last_name: last,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the email address.
    #[must_use]
    pub const fn email(&self) -> &Email {
        &self.email
    }

    /// Returns the first name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the last name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the timestamp of the latest change.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces the email address.
    pub fn update_email(&mut self, email: Email, clock: &impl Clock) {
        self.email = email;
        self.updated_at = clock.utc();
    }

    /// Replaces both names.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::EmptyFirstName`] or
    /// [`UserDomainError::EmptyLastName`] and leaves the user unchanged when
    /// either name is empty.
    pub fn update_name(
        &mut self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<(), UserDomainError> {
        let first = first_name.into();
        let last = last_name.into();
        if first.is_empty() {
            return Err(UserDomainError::EmptyFirstName);
        }
        if last.is_empty() {
            return Err(UserDomainError::EmptyLastName);
        }
        self.first_name = first;
        self.last_name = last;
        self.updated_at = clock.utc();
        Ok(())
    }
}
