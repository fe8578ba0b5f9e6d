#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod infra;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
pub mod test_support;
pub mod trace_ctx;
pub mod utils;

// Re-exports for public API
pub use config::{StoreConfig, StoreKind};
pub use error::AppError;
pub use errors::ErrorCode;
pub use extractors::GameId;
pub use infra::build_state;
pub use middleware::{cors_middleware, RequestTrace};
pub use services::GameFlowService;
pub use state::AppState;
pub use store::{GameStore, MemoryGameStore, MongoGameStore};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_support::logging::init();
}
