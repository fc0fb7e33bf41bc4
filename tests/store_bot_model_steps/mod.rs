//! Step definitions for bot model storage scenarios.

mod given;
mod then;
mod when;
pub mod world;
