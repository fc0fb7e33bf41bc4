//! Port contracts for storing bot models.
//!
//! The store port is the data boundary; the stored and validation-failed
//! ports are output boundaries notified by the use cases. Each handle is
//! created once per process, so binding an adapter anywhere makes it
//! visible to every use case resolving through the same registry.

mod handles;
mod payload;

pub use handles::{
    BotModelStoredPort, BotModelValidationFailedPort, StoreBotModelPort, bot_model_stored_port,
    bot_model_validation_failed_port, store_bot_model_port,
};
pub use payload::{
    BotModelStoredOutput, BotModelValidationFailedOutput, NicheDto, PerformanceMetricsDto,
    StoreBotModelDto, StoredBotModel, TechnicalSpecificationDto,
};
