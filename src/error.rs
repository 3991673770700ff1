//! Unified error types for the exchange engine.
//!
//! All fallible operations across the crate return [`ExchangeError`] as
//! their error type. Every error is fatal to the single operation in
//! progress: the engine never partially applies a trade, never retries,
//! and never recovers internally — the caller must resubmit with
//! corrected parameters.

use thiserror::Error;

/// Convenience alias used by every fallible operation in the crate.
pub type Result<T> = core::result::Result<T, ExchangeError>;

/// Unified error enum for all engine operations.
///
/// Precondition violations abort before any state mutation
/// (checks-then-effects ordering is mandatory throughout the engine).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExchangeError {
    /// A trade or pool-balance view was invoked before
    /// [`launch`](crate::exchange::Exchange::launch).
    #[error("engine must be launched to invoke this operation")]
    NotLaunched,

    /// `launch` was called a second time after a successful launch.
    #[error("engine has already been launched")]
    AlreadyLaunched,

    /// `launch` was called while the stable pool holds nothing.
    #[error("stable pool balance must be greater than zero to launch")]
    NotFunded,

    /// The caller-supplied principal amount was zero.
    #[error("principal amount must be greater than zero")]
    ZeroAmount,

    /// The current time exceeds the caller-supplied deadline.
    #[error("transaction deadline has elapsed")]
    DeadlineElapsed,

    /// The amount sold exceeds the caller's balance of the asset sold.
    #[error("amount sold exceeds the seller's balance")]
    InsufficientBalance,

    /// A computed output fell below the caller-supplied minimum.
    /// Carries the asset the minimum applied to.
    #[error("unable to send the minimum quantity of {0} to receive")]
    Slippage(&'static str),

    /// The curve output would be negative. Rejected before state
    /// mutation; the result never wraps.
    #[error("curve output would be negative")]
    ArithmeticUnderflow,

    /// A stable-asset `transfer_from` lacked sufficient prior approval.
    #[error("stable-asset allowance is insufficient")]
    Allowance,

    /// The input-side reserve of a curve evaluation is zero.
    #[error("input-side reserve is zero")]
    ZeroReserve,

    /// Division by zero in an engine formula.
    #[error("division by zero")]
    DivisionByZero,

    /// Arithmetic overflow during calculation, with context.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// A genesis configuration parameter is out of range, with context.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}
