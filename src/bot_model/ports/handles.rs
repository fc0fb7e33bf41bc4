//! Process-wide port handles for the bot model use cases.

use super::{
    BotModelStoredOutput, BotModelValidationFailedOutput, StoreBotModelDto, StoredBotModel,
};
use crate::di::Port;
use std::sync::LazyLock;

/// Port persisting a bot model record.
pub type StoreBotModelPort = Port<StoreBotModelDto, StoredBotModel>;

/// Output port notified after a successful store.
pub type BotModelStoredPort = Port<BotModelStoredOutput, ()>;

/// Output port notified when input is rejected.
pub type BotModelValidationFailedPort = Port<BotModelValidationFailedOutput, ()>;

static STORE_BOT_MODEL: LazyLock<StoreBotModelPort> =
    LazyLock::new(|| Port::named("storeBotModel"));

static BOT_MODEL_STORED: LazyLock<BotModelStoredPort> =
    LazyLock::new(|| Port::named("botModelStoredOut"));

static BOT_MODEL_VALIDATION_FAILED: LazyLock<BotModelValidationFailedPort> =
    LazyLock::new(|| Port::named("botModelValidationFailedOut"));

/// Returns the store port.
#[must_use]
pub fn store_bot_model_port() -> &'static StoreBotModelPort {
    &STORE_BOT_MODEL
}

/// Returns the stored notification port.
#[must_use]
pub fn bot_model_stored_port() -> &'static BotModelStoredPort {
    &BOT_MODEL_STORED
}

/// Returns the validation-failed notification port.
#[must_use]
pub fn bot_model_validation_failed_port() -> &'static BotModelValidationFailedPort {
    &BOT_MODEL_VALIDATION_FAILED
}
