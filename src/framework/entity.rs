//! # ActorEntity Trait
//!
//! The contract an entity must satisfy to be owned by a
//! [`ResourceActor`](crate::framework::ResourceActor).
//! Associated types pin down the ID, the creation payload, the custom actions
//! and the error type, so a request built for one entity cannot reach another.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any entity must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks are async so they may call other actors. The `Context` type is
/// injected into every hook when the actor is started with `run(context)`,
/// not when it is constructed.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Unique identifier. Generated by the actor from a `u32` counter.
    type Id: Eq + Hash + Ord + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Entity-specific operations (e.g. `ChangeState`).
    type Action: Send + Sync + Debug;

    /// Result returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected into the actor at start. `()` if none.
    type Context: Send + Sync;

    /// One error enum per entity, covering every action.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the entity from its generated ID and the creation payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after construction, before the entity is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a custom entity-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
