//! Runtime orchestration.
//!
//! - [`KitchenSystem`] - starts the order actor, feeds the board and routes commands
//! - [`setup_tracing`] - initializes the tracing/logging infrastructure

pub mod kitchen_system;
pub mod tracing;

pub use kitchen_system::*;
pub use self::tracing::setup_tracing;
