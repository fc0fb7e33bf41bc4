//! Bot model catalogue: storing bot model records behind ports.
//!
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]: the [`domain::BotModel`] aggregate and its
//!   value objects
//! - Port contracts in [`ports`]: payload types and the typed port handles
//!   adapters are bound to
//! - Input schemas in [`validation`]
//! - Use cases in [`services`]
//!
//! Persistence and notification adapters live outside this crate; they are
//! bound to the ports in a [`crate::di::PortRegistry`].

pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
