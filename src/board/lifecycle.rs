//! # Order Lifecycle Model
//!
//! ```text
//! confirmed --(start)--> in_preparation --(ready)--> ready --(complete)--> completed
//! confirmed | in_preparation | ready --(cancel)--> cancelled
//! ```
//!
//! The board does not own a state machine. It looks up what each state offers
//! ([`StateProfile`]) and emits a [`StateChangeRequest`] to a
//! [`StateChangeSink`] when staff pick a transition. The authority behind the
//! sink applies the change, and the new state is only observed once the host
//! supplies a fresh order snapshot.

use crate::model::{Order, OrderId, OrderState};
use tracing::{debug, info};

/// The single happy-path step offered for a live state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceAction {
    StartPreparation,
    MarkReady,
    Complete,
}

impl AdvanceAction {
    /// Button label shown to staff.
    pub fn label(&self) -> &'static str {
        match self {
            AdvanceAction::StartPreparation => "start preparation",
            AdvanceAction::MarkReady => "mark ready",
            AdvanceAction::Complete => "complete",
        }
    }

    /// Stable snake_case action name.
    pub fn name(&self) -> &'static str {
        match self {
            AdvanceAction::StartPreparation => "start_preparation",
            AdvanceAction::MarkReady => "mark_ready",
            AdvanceAction::Complete => "complete",
        }
    }

    pub fn target(&self) -> OrderState {
        match self {
            AdvanceAction::StartPreparation => OrderState::InPreparation,
            AdvanceAction::MarkReady => OrderState::Ready,
            AdvanceAction::Complete => OrderState::Completed,
        }
    }
}

/// What the board shows and offers for an order in a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateProfile {
    pub label: &'static str,
    pub advance: Option<AdvanceAction>,
    pub cancellable: bool,
}

const CONFIRMED: StateProfile = StateProfile {
    label: "Confirmed",
    advance: Some(AdvanceAction::StartPreparation),
    cancellable: true,
};

const IN_PREPARATION: StateProfile = StateProfile {
    label: "In preparation",
    advance: Some(AdvanceAction::MarkReady),
    cancellable: true,
};

const READY: StateProfile = StateProfile {
    label: "Ready",
    advance: Some(AdvanceAction::Complete),
    cancellable: true,
};

const COMPLETED: StateProfile = StateProfile {
    label: "Completed",
    advance: None,
    cancellable: false,
};

const CANCELLED: StateProfile = StateProfile {
    label: "Cancelled",
    advance: None,
    cancellable: false,
};

impl OrderState {
    /// Resolves the display and action profile for this state.
    ///
    /// [`OrderState::Unknown`] resolves to the confirmed profile so that a
    /// malformed order still shows up with usable actions.
    pub fn profile(&self) -> StateProfile {
        match self {
            OrderState::Confirmed | OrderState::Unknown => CONFIRMED,
            OrderState::InPreparation => IN_PREPARATION,
            OrderState::Ready => READY,
            OrderState::Completed => COMPLETED,
            OrderState::Cancelled => CANCELLED,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderState::Completed | OrderState::Cancelled)
    }

    /// States that have a lane on the board.
    pub fn is_live(&self) -> bool {
        matches!(
            self,
            OrderState::Confirmed | OrderState::InPreparation | OrderState::Ready
        )
    }
}

/// A transition staff can pick for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Advance,
    Cancel,
}

/// Command sent to the authority that owns the order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateChangeRequest {
    pub order_id: OrderId,
    pub next_state: OrderState,
}

/// Receiver of state-change commands.
///
/// The board calls [`change_state`](StateChangeSink::change_state) and moves
/// on: nothing is returned and nothing is awaited. Closures of the shape
/// `Fn(&OrderId, OrderState)` implement the trait.
pub trait StateChangeSink {
    fn change_state(&self, order_id: &OrderId, next_state: OrderState);
}

impl<F> StateChangeSink for F
where
    F: Fn(&OrderId, OrderState),
{
    fn change_state(&self, order_id: &OrderId, next_state: OrderState) {
        self(order_id, next_state)
    }
}

/// Builds the command for `transition`, or `None` when the order's state does
/// not offer it.
pub fn request_transition(order: &Order, transition: Transition) -> Option<StateChangeRequest> {
    let profile = order.state.profile();
    let next_state = match transition {
        Transition::Advance => profile.advance?.target(),
        Transition::Cancel if profile.cancellable => OrderState::Cancelled,
        Transition::Cancel => return None,
    };
    Some(StateChangeRequest {
        order_id: order.id.clone(),
        next_state,
    })
}

/// Hands the command for `transition` to `sink`.
///
/// Returns whether a command was emitted. The order itself is left untouched.
pub fn emit<S>(sink: &S, order: &Order, transition: Transition) -> bool
where
    S: StateChangeSink + ?Sized,
{
    match request_transition(order, transition) {
        Some(request) => {
            info!(
                order_id = %request.order_id,
                from = %order.state,
                to = %request.next_state,
                "Requesting state change"
            );
            sink.change_state(&request.order_id, request.next_state);
            true
        }
        None => {
            debug!(
                order_id = %order.id,
                state = %order.state,
                ?transition,
                "Transition not offered"
            );
            false
        }
    }
}

/// Whether the authority should accept a change from `from` to `to`.
///
/// Unlike [`OrderState::profile`], this does not apply the unknown-state
/// fallback: an order in an unrecognized state cannot be moved.
pub fn is_legal(from: OrderState, to: OrderState) -> bool {
    matches!(
        (from, to),
        (OrderState::Confirmed, OrderState::InPreparation)
            | (OrderState::InPreparation, OrderState::Ready)
            | (OrderState::Ready, OrderState::Completed)
            | (
                OrderState::Confirmed | OrderState::InPreparation | OrderState::Ready,
                OrderState::Cancelled
            )
    )
}
