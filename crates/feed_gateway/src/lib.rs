//! Feed gateway: remote fact store access and effect execution.
mod gateway;
mod handle;
mod memory;
mod rest;
mod types;

pub use gateway::FactGateway;
pub use handle::GatewayHandle;
pub use memory::{sample_facts, MemoryGateway};
pub use rest::{GatewaySettings, RestGateway};
pub use types::{FailureKind, GatewayError, GatewayEvent};
