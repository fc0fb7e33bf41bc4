//! Domain model for bot models.
//!
//! A [`BotModel`] describes a sellable bot: what it does, which [`Niche`]
//! it serves, and the [`TechnicalSpecification`] it is built on. All
//! constructors and actions enforce their invariants and leave values
//! unchanged on failure.

mod aggregate;
mod error;
mod ids;
mod niche;
mod pricing;
mod slug;
mod status;
mod technical_specification;

pub use aggregate::{BotModel, NewBotModel};
pub use error::{BotModelDomainError, ParseEnumError};
pub use ids::BotModelId;
pub use niche::Niche;
pub use pricing::PricingModel;
pub use slug::Slug;
pub use status::BotModelStatus;
pub use technical_specification::{PerformanceMetrics, Scalability, TechnicalSpecification};
