//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging for the binary. Library
//! code only emits events; installing the subscriber is the binary's job.
//!
//! ```bash
//! RUST_LOG=info cargo run                      # state changes and actor lifecycle
//! RUST_LOG=debug cargo run                     # plus payloads and grouping stats
//! RUST_LOG=order_board::board=debug cargo run  # board internals only
//! ```
//!
//! With `RUST_LOG=info`, moving an order through the kitchen reads:
//!
//! ```text
//! INFO Requesting state change order_id=order_1 from=confirmed to=in_preparation
//! INFO State changed order_id=order_1 from=confirmed to=in_preparation
//! INFO Action ok entity_type="Order" id=order_1
//! INFO state_change: State change applied previous=confirmed
//! ```

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
