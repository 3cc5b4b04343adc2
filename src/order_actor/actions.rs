//! Custom actions for the Order actor.

use crate::model::OrderState;

/// Operations on an [`Order`](crate::model::Order) beyond create/get/list.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Moves the order to the given state.
    ///
    /// # Errors
    /// Fails with [`OrderError::IllegalTransition`](super::OrderError::IllegalTransition)
    /// unless the move is a legal lifecycle step.
    ChangeState(OrderState),
}

/// Results from OrderActions - variants match 1:1 with OrderAction
#[derive(Debug, Clone, PartialEq)]
pub enum OrderActionResult {
    /// The state the order held before the change.
    ChangeState { previous: OrderState },
}
