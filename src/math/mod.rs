//! Integer pricing formulas for the dual-pool engine.
//!
//! Everything here is bit-exact integer arithmetic: no floating point,
//! no approximation. All division truncates toward zero, and wherever a
//! rounding choice exists the pool keeps the remainder — never the
//! trader. These helpers are pure and callable whether or not the
//! engine has launched.
//!
//! | Helper | Formula |
//! |--------|---------|
//! | [`mul_div`] | `floor(a·b / d)` with a 256-bit intermediate |
//! | [`apply_fee`] | `floor(x·997 / 1000)` — fixed 0.3 % fee |
//! | [`swap_out`] | constant-product output with a pool-favoring `−1` |
//! | [`transfer_to_other`] | inter-pool rebalancing share of a payment |

mod curve;
mod fee;
mod rebalance;
mod wide;

pub use curve::swap_out;
pub use fee::{apply_fee, FEE_DENOMINATOR, FEE_NUMERATOR};
pub use rebalance::transfer_to_other;
pub use wide::mul_div;
