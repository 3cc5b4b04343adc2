//! # Order Client
//!
//! High-level API for the Order actor. Besides the awaited operations it
//! implements [`StateChangeSink`], which is how the board hands over
//! state-change commands without waiting for them.
use crate::board::StateChangeSink;
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{Order, OrderCreate, OrderId, OrderState};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use async_trait::async_trait;
use tracing::{debug, info, instrument, warn, Instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        debug!("create_order called");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Snapshot of every order the actor holds, ordered by ID.
    pub async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        self.list().await
    }

    /// Applies a state change and waits for the outcome.
    ///
    /// Returns the state the order held before the change.
    #[instrument(skip(self))]
    pub async fn change_state(
        &self,
        id: OrderId,
        next_state: OrderState,
    ) -> Result<OrderState, OrderError> {
        debug!("Sending change_state to actor");
        match self
            .inner
            .perform_action(id, OrderAction::ChangeState(next_state))
            .await
            .map_err(Self::map_error)?
        {
            OrderActionResult::ChangeState { previous } => Ok(previous),
        }
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<OrderError>() {
                Ok(order_error) => *order_error,
                Err(other) => OrderError::ActorCommunicationError(other.to_string()),
            },
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

/// Fire-and-forget: the request is spawned on the current Tokio runtime and
/// its outcome is only logged.
impl StateChangeSink for OrderClient {
    fn change_state(&self, order_id: &OrderId, next_state: OrderState) {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!(%order_id, %next_state, "No runtime available, state change dropped");
            return;
        };
        let client = self.clone();
        let order_id = order_id.clone();
        let span = tracing::info_span!("state_change", %order_id, %next_state);
        runtime.spawn(
            async move {
                match OrderClient::change_state(&client, order_id, next_state).await {
                    Ok(previous) => info!(%previous, "State change applied"),
                    Err(e) => warn!(error = %e, "State change rejected"),
                }
            }
            .instrument(span),
        );
    }
}
