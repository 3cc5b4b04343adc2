//! Pure data structures (DTOs) exchanged with the ordering backend.

pub mod order;

pub use order::*;
