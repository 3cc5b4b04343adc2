//! [`ActorEntity`] implementation for [`Order`].
//!
//! The actor is the only place where an order's state actually changes. It
//! validates every requested change against [`lifecycle::is_legal`], so a stale
//! board that asks for a move the order has already made gets an error back
//! instead of corrupting the order.

use super::actions::{OrderAction, OrderActionResult};
use super::error::OrderError;
use crate::board::lifecycle;
use crate::framework::ActorEntity;
use crate::model::{Order, OrderCreate, OrderId};
use async_trait::async_trait;
use tracing::info;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = ();
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        if params.items.is_empty() {
            return Err(OrderError::ValidationError(
                "order must contain at least one item".to_string(),
            ));
        }
        if params.items.iter().any(|item| item.quantity == 0) {
            return Err(OrderError::ValidationError(
                "item quantity must be positive".to_string(),
            ));
        }
        if params.total.is_sign_negative() {
            return Err(OrderError::ValidationError(format!(
                "total cannot be negative: {}",
                params.total
            )));
        }
        Ok(Order::new(id, params))
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        _ctx: &Self::Context,
    ) -> Result<OrderActionResult, OrderError> {
        match action {
            OrderAction::ChangeState(next) => {
                let previous = self.state;
                if !lifecycle::is_legal(previous, next) {
                    return Err(OrderError::IllegalTransition {
                        from: previous,
                        to: next,
                    });
                }
                self.state = next;
                info!(order_id = %self.id, from = %previous, to = %next, "State changed");
                Ok(OrderActionResult::ChangeState { previous })
            }
        }
    }
}
