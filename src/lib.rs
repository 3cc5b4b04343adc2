//! # Order Board
//!
//! > **The live order-status board of a restaurant kitchen.**
//!
//! Kitchen staff watch active orders move from confirmed, through preparation,
//! to ready for pickup or delivery. This crate holds the logic behind that
//! board and a small in-process authority to drive it.
//!
//! ## Module Tour
//!
//! ### 1. The Board ([`board`])
//! A pure view over an order snapshot.
//! - **Role**: decides which lane an order sits in, how urgent it is and which
//!   transitions staff may request. It never changes an order.
//! - **Key items**: [`OrderBoard`](board::OrderBoard), [`BoardView`](board::BoardView),
//!   [`StateChangeSink`](board::StateChangeSink).
//!
//! ### 2. The Authority ([`order_actor`], [`clients`])
//! Owns orders and applies state changes, validating each against the lifecycle.
//! - **Role**: the host side. The board's commands arrive here through
//!   [`OrderClient`](clients::OrderClient).
//!
//! ### 3. The Plumbing ([`framework`])
//! Generic actor + client over Tokio channels, with mocks for tests.
//!
//! ### 4. Wiring ([`runtime`], [`config`])
//! [`KitchenSystem`](runtime::KitchenSystem) starts the actor and feeds the
//! board; [`BoardConfig`](config::BoardConfig) carries the priority thresholds.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run -- --config board.toml
//! ```

pub mod board;
pub mod clients;
pub mod config;
pub mod framework;
pub mod model;
pub mod order_actor;
pub mod runtime;
