//! Per-trade supply arithmetic.
//!
//! Each trade type couples a mint or burn to the curve output so that
//! the pool's own ECL reserve grows and shrinks in proportion to the
//! outstanding claims against it:
//!
//! - a primary buy mints `floor(received/6) + 1` extra units to the
//!   pool (total minted `floor(received·7/6) + 1`);
//! - a primary sell burns `floor(sold/6)` from the pool's reserve on
//!   top of the seller's tokens (total burned `floor(sold·7/6)`);
//! - a soft sell burns a pro-rata slice of the pool reserve alongside
//!   the seller's tokens, mirroring the pro-rata payouts.

use crate::domain::Amount;
use crate::error::{ExchangeError, Result};
use crate::math::{apply_fee, mul_div};

/// Extra units minted to the pool's own reserve on a primary buy:
/// `floor(received/6) + 1`.
pub(crate) fn pool_mint_for_buy(received: Amount) -> Result<Amount> {
    Amount::new(received.get() / 6)
        .checked_add(&Amount::ONE)
        .ok_or(ExchangeError::Overflow("pool reserve mint"))
}

/// Units burned from the pool's own reserve on a primary sell:
/// `floor(sold/6)`.
pub(crate) const fn pool_burn_for_sell(amount_sold: Amount) -> Amount {
    Amount::new(amount_sold.get() / 6)
}

/// Fee-adjusted pro-rata share of a pool balance:
/// `apply_fee(floor(sold · balance / circulating))`.
///
/// Used for all three soft-sell payouts and for the soft-sell slice
/// burned from the pool's own ECL reserve.
pub(crate) fn pro_rata_share(
    amount_sold: Amount,
    pool_balance: Amount,
    circulating: Amount,
) -> Result<Amount> {
    apply_fee(mul_div(amount_sold, pool_balance, circulating)?)
}
