//! # Generic Messages
//!
//! Requests sent from a [`ResourceClient`](crate::framework::ResourceClient) to a
//! [`ResourceActor`](crate::framework::ResourceActor). Each carries a oneshot
//! sender the actor answers on.

use super::entity::ActorEntity;
use super::error::FrameworkError;
use tokio::sync::oneshot;

/// One-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Operations an actor supports.
///
/// - **Create**: builds an entity from [`ActorEntity::Create`] and stores it.
/// - **Get**: fetches one entity by ID.
/// - **List**: returns every stored entity, ordered by ID. This is how a host
///   obtains the wholesale snapshot it hands to the board.
/// - **Action**: runs an [`ActorEntity::Action`] against one entity.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
