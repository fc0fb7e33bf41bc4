//! User accounts.
//!
//! Only the domain layer exists so far: the [`domain::Email`] value object
//! and the [`domain::User`] entity.

pub mod domain;

#[cfg(test)]
mod tests;
