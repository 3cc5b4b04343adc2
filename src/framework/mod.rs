//! Generic in-process actor plumbing.
//!
//! An entity type implements [`ActorEntity`]; a [`ResourceActor`] owns every
//! instance of it inside one Tokio task and answers [`ResourceRequest`]s sent
//! through cloneable [`ResourceClient`]s. Domain clients wrap the generic
//! client and pick up `get`/`list` from [`ActorClient`].
//!
//! # Testing
//!
//! See [`mock`] for utilities to test clients without spawning an actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
