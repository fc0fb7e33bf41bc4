//! Application services for storing bot models.

mod store;

pub use store::{StoreBotModelError, StoreBotModelResult, StoreBotModelService};
