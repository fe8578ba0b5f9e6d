//! Service layer orchestrating domain logic over the store.

pub mod game_flow;

pub use game_flow::GameFlowService;
