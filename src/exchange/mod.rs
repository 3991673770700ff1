//! The exchange orchestrator and its owned state.
//!
//! [`Exchange`] composes the pricing math, the supply rules, the
//! transaction guard, and the two ledger collaborators into the five
//! public trade operations. The supporting state types
//! ([`PoolState`], [`VolumeState`], [`LaunchState`]) are re-exported
//! for read access; all mutation goes through the engine.

mod engine;
mod events;
mod guard;
mod state;
mod supply;

#[cfg(test)]
mod proptest_properties;

pub use engine::Exchange;
pub use events::TradeEvent;
pub use state::{LaunchState, PoolState, VolumeState};
