//! # ECL Exchange
//!
//! Pricing, supply-management, and accounting engine for a two-asset
//! exchange token: ECL, redeemable against two internally tracked
//! liquidity pools — a volatile-asset pool and a pool backed by an
//! externally issued stable asset.
//!
//! The engine decides, for every trade, how much of one asset a
//! counterparty receives for another, how the ECL supply grows or
//! shrinks, and how the two pools' balances rebalance against each
//! other over time. Everything is bit-exact integer arithmetic: no
//! floating point, all division floors, and every rounding choice
//! favors the pool.
//!
//! # Quick Start
//!
//! ```rust
//! use ecl_exchange::config::GenesisConfig;
//! use ecl_exchange::domain::{AccountId, Amount, Deadline, Timestamp};
//! use ecl_exchange::exchange::{Exchange, TradeEvent};
//! use ecl_exchange::ledger::{Ledger, StableLedger};
//!
//! let engine_acct = AccountId::from_bytes([0xec; 32]);
//! let treasury = AccountId::from_bytes([1u8; 32]);
//! let trader = AccountId::from_bytes([2u8; 32]);
//!
//! // 1. Build and fund the external stable-asset ledger.
//! let mut stable = StableLedger::new("DAI", treasury, Amount::new(1_000_000));
//! stable
//!     .transfer(treasury, engine_acct, Amount::new(500_000))
//!     .expect("funding transfer");
//!
//! // 2. Create the engine: the volatile endowment splits one third to
//! //    the primary pool, and the initial ECL supply is minted to the
//! //    engine's own account.
//! let genesis = GenesisConfig::new(
//!     engine_acct,
//!     Amount::new(300_000),
//!     Amount::new(1_000_000_000),
//! )
//! .expect("valid genesis");
//! let mut engine = Exchange::new(&genesis, stable).expect("engine created");
//!
//! // 3. Launch — possible only once the stable pool is funded.
//! engine.launch().expect("launched");
//!
//! // 4. Trade.
//! let event = engine
//!     .buy_primary(
//!         trader,
//!         Amount::new(1_000),
//!         Amount::ZERO,
//!         Deadline::new(60),
//!         Timestamp::new(0),
//!     )
//!     .expect("trade succeeded");
//! let TradeEvent::BuyPrimary { ecl_received, .. } = event else {
//!     panic!("unexpected event");
//! };
//! assert!(ecl_received.get() > 0);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Embedder    │  supplies GenesisConfig + funded StableLedger,
//! └──────┬───────┘  serializes calls, delivers volatile payouts
//!        │ trade operations
//!        ▼
//! ┌──────────────┐
//! │   Exchange    │  guard checks → pricing → supply → state updates
//! └──────┬───────┘
//!        │ composes
//!        ▼
//! ┌──────────────┐   ┌──────────────┐
//! │     math      │   │    ledger     │  NativeLedger (mint/burn),
//! │ swap_out, fee │   │  capability   │  StableLedger (fixed supply)
//! │  rebalancer   │   └──────────────┘
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │    domain     │  Amount, AccountId, Deadline, Timestamp
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`AccountId`](domain::AccountId), [`Deadline`](domain::Deadline) |
//! | [`math`] | Pure pricing formulas: [`swap_out`](math::swap_out), [`apply_fee`](math::apply_fee), [`transfer_to_other`](math::transfer_to_other) |
//! | [`ledger`] | The [`Ledger`](ledger::Ledger) capability and its two concrete variants |
//! | [`exchange`] | The [`Exchange`](exchange::Exchange) orchestrator, its state, and [`TradeEvent`](exchange::TradeEvent) |
//! | [`config`] | [`GenesisConfig`](config::GenesisConfig) validated engine parameters |
//! | [`error`] | [`ExchangeError`](error::ExchangeError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types |
//!
//! # Concurrency
//!
//! The engine is a pure state machine: synchronous, no locking, no
//! background work. The embedder must serialize operations against one
//! instance; each operation is an atomic transition that either fully
//! commits or leaves no trace.

pub mod config;
pub mod domain;
pub mod error;
pub mod exchange;
pub mod ledger;
pub mod math;
pub mod prelude;
