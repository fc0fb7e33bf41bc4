//! Shared world state for bot model storage BDD scenarios.

use std::sync::{Arc, Mutex, PoisonError};

use mockable::DefaultClock;
use portwire::bot_model::{
    ports::{
        BotModelStoredOutput, BotModelValidationFailedOutput, StoreBotModelDto, StoredBotModel,
        bot_model_stored_port, bot_model_validation_failed_port, store_bot_model_port,
    },
    services::{StoreBotModelError, StoreBotModelService},
};
use portwire::di::{Adapter, PortRegistry};
use rstest::fixture;
use serde_json::{Value, json};

/// Service type used by the BDD world.
pub type TestStoreService = StoreBotModelService<DefaultClock>;

/// Calls observed by a recording adapter.
pub type Recorded<T> = Arc<Mutex<Vec<T>>>;

/// Scenario world for bot model storage behaviour tests.
pub struct StoreWorld {
    /// Registry the service resolves ports from.
    pub registry: PortRegistry,
    /// The use case service under test.
    pub service: TestStoreService,
    /// Raw input handed to the use case.
    pub input: Value,
    /// Records received by the store adapter.
    pub stored_records: Recorded<StoreBotModelDto>,
    /// Notifications received by the stored port adapter.
    pub stored_notifications: Recorded<BotModelStoredOutput>,
    /// Notifications received by the validation-failed port adapter.
    pub rejections: Recorded<BotModelValidationFailedOutput>,
    /// Result of the last use case invocation.
    pub last_result: Option<Result<(), StoreBotModelError>>,
}

impl StoreWorld {
    /// Creates a world with an empty registry and no input.
    #[must_use]
    pub fn new() -> Self {
        let registry = PortRegistry::new();
        let service = StoreBotModelService::new(registry.clone(), Arc::new(DefaultClock));
        Self {
            registry,
            service,
            input: Value::Null,
            stored_records: Arc::default(),
            stored_notifications: Arc::default(),
            rejections: Arc::default(),
            last_result: None,
        }
    }

    /// Binds recording adapters to all three bot model ports.
    pub fn bind_recording_adapters(&self) {
        let records = Arc::clone(&self.stored_records);
        self.registry.bind(
            store_bot_model_port(),
            Adapter::from_fn(move |dto: StoreBotModelDto| {
                let id = format!("bot-model-{}", record(&records, dto));
                async move { Ok(StoredBotModel::new(id)) }
            }),
        );

        let notifications = Arc::clone(&self.stored_notifications);
        self.registry.bind(
            bot_model_stored_port(),
            Adapter::from_fn(move |output: BotModelStoredOutput| {
                record(&notifications, output);
                async { Ok(()) }
            }),
        );

        self.bind_validation_failed_recorder();
    }

    /// Binds a recording adapter to the validation-failed port only.
    pub fn bind_validation_failed_recorder(&self) {
        let rejections = Arc::clone(&self.rejections);
        self.registry.bind(
            bot_model_validation_failed_port(),
            Adapter::from_fn(move |output: BotModelValidationFailedOutput| {
                record(&rejections, output);
                async { Ok(()) }
            }),
        );
    }
}

impl Default for StoreWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> StoreWorld {
    StoreWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Returns a snapshot of the calls recorded so far.
pub fn snapshot<T: Clone>(recorded: &Recorded<T>) -> Vec<T> {
    recorded
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Builds a bot model input document accepted by both schemas.
pub fn bot_model_input(name: &str, niche: &str) -> Value {
    let slug = name.to_lowercase().replace(' ', "-");
    let niche_slug = niche.to_lowercase().replace(' ', "-");
    json!({
        "name": name,
        "description": format!("{name} handles routine conversations"),
        "slug": slug,
        "niche": { "name": niche, "slug": niche_slug },
        "technicalSpecification": {
            "platform": "Telegram",
            "technologyStack": ["Rust", "PostgreSQL"]
        },
        "keyFeatures": ["Real-time scoring"],
        "useCases": ["Qualifying inbound leads"],
        "tags": ["automation"]
    })
}

fn record<T>(recorded: &Recorded<T>, item: T) -> usize {
    let mut calls = recorded.lock().unwrap_or_else(PoisonError::into_inner);
    calls.push(item);
    calls.len()
}
