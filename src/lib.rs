//! Portwire: ports-and-adapters runtime with a bot model catalogue on top.
//!
//! Use cases in this crate never talk to infrastructure directly. They
//! resolve typed ports at call time and invoke whatever adapter is bound,
//! so storage, notification and test doubles are all wired the same way.
//!
//! # Architecture
//!
//! Portwire follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Typed capability slots adapters are bound to
//! - **Adapters**: Implementations supplied by the embedding application
//!
//! # Modules
//!
//! - [`di`]: Port identities, adapter handles and the registry binding them
//! - [`schema`]: Declarative validation of untyped JSON input
//! - [`bot_model`]: Bot model domain, ports and store use cases
//! - [`user`]: User accounts
//! - [`telemetry`]: Tracing subscriber configuration

pub mod bot_model;
pub mod di;
pub mod schema;
pub mod telemetry;
pub mod user;
