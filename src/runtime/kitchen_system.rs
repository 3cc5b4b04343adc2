use crate::board::{lifecycle, BoardView, OrderBoard, Transition};
use crate::clients::OrderClient;
use crate::config::BoardConfig;
use crate::model::OrderId;
use crate::order_actor::OrderError;
use chrono::{DateTime, Utc};
use tracing::{error, info, warn};

/// Wires the order actor to a board and plays the host's part.
///
/// `KitchenSystem` is responsible for:
/// - **Lifecycle Management**: starting the order actor and shutting it down
/// - **Snapshot Supply**: fetching the full order list and handing it to the board
/// - **Command Routing**: turning staff picks into state-change commands for the actor
///
/// # Example
///
/// ```ignore
/// let mut system = KitchenSystem::new(&BoardConfig::default());
/// system.order_client.create_order(order).await?;
///
/// system.refresh().await?;
/// println!("{}", system.render(Utc::now()));
/// system.request(&order_id, Transition::Advance);
///
/// system.shutdown().await?;
/// ```
pub struct KitchenSystem {
    /// Client for interacting with the Order actor
    pub order_client: OrderClient,

    board: OrderBoard,

    /// Task handles for running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl KitchenSystem {
    /// Starts the order actor and an empty board. Must be called inside a Tokio runtime.
    pub fn new(config: &BoardConfig) -> Self {
        let (order_actor, generic_client) = crate::order_actor::new(config.actor.buffer_size);
        let order_handle = tokio::spawn(order_actor.run(()));

        Self {
            order_client: OrderClient::new(generic_client),
            board: OrderBoard::new(config.priority, Utc::now()),
            handles: vec![order_handle],
        }
    }

    pub fn board(&self) -> &OrderBoard {
        &self.board
    }

    /// Fetches every order from the actor and replaces the board snapshot.
    pub async fn refresh(&mut self) -> Result<(), OrderError> {
        let orders = self.order_client.list_orders().await?;
        self.board.replace_orders(orders, Utc::now());
        Ok(())
    }

    pub fn render(&self, now: DateTime<Utc>) -> BoardView<'_> {
        self.board.render(now)
    }

    /// Issues `transition` for the order as it appears in the current snapshot.
    ///
    /// The command is not awaited; call [`refresh`](Self::refresh) to observe
    /// its effect. Returns whether a command was issued.
    pub fn request(&self, order_id: &OrderId, transition: Transition) -> bool {
        match self.board.orders().iter().find(|order| &order.id == order_id) {
            Some(order) => lifecycle::emit(&self.order_client, order, transition),
            None => {
                warn!(%order_id, "Order not in current snapshot");
                false
            }
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the client closes the actor's channel; the actor drains and
    /// exits. Commands still in flight on spawned tasks hold their own client
    /// clones and complete first.
    pub async fn shutdown(self) -> Result<(), tokio::task::JoinError> {
        info!("Shutting down system...");
        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(e);
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
