//! Engine configuration.
//!
//! Configuration is programmatic: a validated struct built with
//! `new(…) -> Result<Self>`, consumed once by
//! [`Exchange::new`](crate::exchange::Exchange::new).

mod genesis;

pub use genesis::GenesisConfig;
