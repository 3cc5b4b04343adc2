//! # Order Actor
//!
//! The authority that owns orders and applies state changes requested by the
//! board.
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`]
//! - [`actions`] - [`OrderAction`] and [`OrderActionResult`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use order_board::clients::OrderClient;
//! use order_board::model::{DeliveryType, OrderCreate, OrderItem, OrderState};
//! use order_board::order_actor;
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = order_actor::new(32);
//!     let client = OrderClient::new(generic_client);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client
//!         .create_order(OrderCreate {
//!             created_at: chrono::Utc::now(),
//!             items: vec![OrderItem::new("Olla de carne", 1)],
//!             total: Decimal::new(5200, 0),
//!             delivery_type: DeliveryType::Delivery,
//!             branch: "Heredia".into(),
//!         })
//!         .await?;
//!
//!     client.change_state(id, OrderState::InPreparation).await?;
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::Order;

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(buffer_size)
}
