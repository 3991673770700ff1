//! Property-based tests using `proptest` for engine invariants.
//!
//! Covers the core guarantees of the pricing and accounting layer:
//!
//! 1. **Curve bounds** — `swap_out` stays strictly below the output
//!    reserve and is monotone in the input amount.
//! 2. **Fee bound** — `apply_fee` never exceeds its input.
//! 3. **Rebalancer bounds** — `transfer_to_other` stays in `[0, 3S/4]`.
//! 4. **No profitable cycle** — buy-then-sell never returns more
//!    volatile asset than was paid in.
//! 5. **Volatile conservation** — the pools' combined balance moves by
//!    exactly the payment in and the payout out.

use proptest::prelude::*;

use crate::config::GenesisConfig;
use crate::domain::{AccountId, Amount, Deadline, Timestamp};
use crate::exchange::{Exchange, TradeEvent};
use crate::ledger::{Ledger, StableLedger};
use crate::math::{apply_fee, swap_out, transfer_to_other};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn engine_acct() -> AccountId {
    AccountId::from_bytes([0xec; 32])
}

fn treasury() -> AccountId {
    AccountId::from_bytes([1u8; 32])
}

fn trader() -> AccountId {
    AccountId::from_bytes([2u8; 32])
}

fn far_deadline() -> Deadline {
    Deadline::new(u64::MAX)
}

fn now() -> Timestamp {
    Timestamp::new(0)
}

fn launched_engine(initial_volatile: u128, initial_supply: u128) -> Exchange {
    let mut stable = StableLedger::new("DAI", treasury(), Amount::new(u128::MAX / 2));
    let Ok(()) = stable.transfer(treasury(), engine_acct(), Amount::new(1_000_000)) else {
        panic!("funding transfer");
    };
    let Ok(genesis) = GenesisConfig::new(
        engine_acct(),
        Amount::new(initial_volatile),
        Amount::new(initial_supply),
    ) else {
        panic!("valid genesis");
    };
    let Ok(mut engine) = Exchange::new(&genesis, stable) else {
        panic!("valid engine");
    };
    let Ok(()) = engine.launch() else {
        panic!("launch");
    };
    engine
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values spanning dust to beyond 18-decimal whale balances.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    1u128..=10u128.pow(30)
}

/// Payment amounts kept below the reserve range so sums cannot overflow.
fn payment_strategy() -> impl Strategy<Value = u128> {
    1u128..=10u128.pow(27)
}

// ---------------------------------------------------------------------------
// Property 1: Curve bounds
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_swap_out_strictly_below_out_reserve(
        in_balance in reserve_strategy(),
        out_balance in reserve_strategy(),
        in_amount in payment_strategy(),
    ) {
        let Ok(out) = swap_out(
            Amount::new(in_balance),
            Amount::new(out_balance),
            Amount::new(in_amount),
        ) else {
            // Underflow on tiny output reserves is a legal rejection.
            return Ok(());
        };
        prop_assert!(out.get() < out_balance);
    }

    #[test]
    fn prop_swap_out_monotone_in_input(
        in_balance in reserve_strategy(),
        out_balance in reserve_strategy(),
        in_amount in payment_strategy(),
        extra in 1u128..=10u128.pow(27),
    ) {
        let Ok(small) = swap_out(
            Amount::new(in_balance),
            Amount::new(out_balance),
            Amount::new(in_amount),
        ) else {
            return Ok(());
        };
        let Ok(large) = swap_out(
            Amount::new(in_balance),
            Amount::new(out_balance),
            Amount::new(in_amount + extra),
        ) else {
            return Ok(());
        };
        prop_assert!(large >= small);
    }

    // -----------------------------------------------------------------------
    // Property 2: Fee bound
    // -----------------------------------------------------------------------

    #[test]
    fn prop_apply_fee_never_exceeds_input(amount in any::<u128>()) {
        let Ok(after) = apply_fee(Amount::new(amount)) else {
            panic!("apply_fee is infallible");
        };
        prop_assert!(after.get() <= amount);
        // And never takes more than the full 0.3 %.
        prop_assert!(amount - after.get() <= amount / 1_000 * 3 + 3);
    }

    // -----------------------------------------------------------------------
    // Property 3: Rebalancer bounds
    // -----------------------------------------------------------------------

    #[test]
    fn prop_rebalancer_bounded(
        primary in 0u128..=10u128.pow(30),
        secondary in 0u128..=10u128.pow(30),
        sent in 0u128..=10u128.pow(30),
    ) {
        let Ok(share) = transfer_to_other(
            Amount::new(primary),
            Amount::new(secondary),
            Amount::new(sent),
        ) else {
            panic!("inputs in this range cannot overflow");
        };
        prop_assert!(share.get() <= sent * 3 / 4);
    }

    // -----------------------------------------------------------------------
    // Property 4: No profitable cycle
    // -----------------------------------------------------------------------

    #[test]
    fn prop_buy_then_sell_never_profits(
        endowment in 3_000u128..=10u128.pow(24),
        supply in 1_000u128..=10u128.pow(24),
        sent in 1u128..=10u128.pow(22),
    ) {
        let mut engine = launched_engine(endowment, supply);

        let Ok(TradeEvent::BuyPrimary { ecl_received, .. }) =
            engine.buy_primary(trader(), Amount::new(sent), Amount::ZERO, far_deadline(), now())
        else {
            return Ok(());
        };
        if ecl_received.is_zero() {
            return Ok(());
        }

        let Ok(TradeEvent::SellPrimary { volatile_received, .. }) = engine.sell_primary(
            trader(),
            ecl_received,
            Amount::ZERO,
            far_deadline(),
            now(),
        ) else {
            return Ok(());
        };

        prop_assert!(
            volatile_received.get() <= sent,
            "round trip must not profit: got {} back for {}",
            volatile_received.get(),
            sent
        );
    }

    // -----------------------------------------------------------------------
    // Property 5: Volatile conservation
    // -----------------------------------------------------------------------

    #[test]
    fn prop_buy_primary_conserves_volatile(
        endowment in 3_000u128..=10u128.pow(24),
        supply in 1_000u128..=10u128.pow(24),
        sent in 1u128..=10u128.pow(22),
    ) {
        let mut engine = launched_engine(endowment, supply);
        let Ok(p0) = engine.volatile_of_primary_pool() else {
            panic!("launched view");
        };
        let Ok(s0) = engine.volatile_of_secondary_pool() else {
            panic!("launched view");
        };

        if engine
            .buy_primary(trader(), Amount::new(sent), Amount::ZERO, far_deadline(), now())
            .is_err()
        {
            return Ok(());
        }

        let Ok(p1) = engine.volatile_of_primary_pool() else {
            panic!("launched view");
        };
        let Ok(s1) = engine.volatile_of_secondary_pool() else {
            panic!("launched view");
        };
        prop_assert_eq!(p1.get() + s1.get(), p0.get() + s0.get() + sent);
    }

    #[test]
    fn prop_sell_primary_releases_exactly_the_payout(
        endowment in 3_000u128..=10u128.pow(24),
        supply in 1_000u128..=10u128.pow(24),
        sent in 1u128..=10u128.pow(22),
    ) {
        let mut engine = launched_engine(endowment, supply);
        let Ok(TradeEvent::BuyPrimary { ecl_received, .. }) =
            engine.buy_primary(trader(), Amount::new(sent), Amount::ZERO, far_deadline(), now())
        else {
            return Ok(());
        };
        if ecl_received.is_zero() {
            return Ok(());
        }

        let Ok(p0) = engine.volatile_of_primary_pool() else {
            panic!("launched view");
        };
        let Ok(s0) = engine.volatile_of_secondary_pool() else {
            panic!("launched view");
        };

        let Ok(TradeEvent::SellPrimary { volatile_received, .. }) = engine.sell_primary(
            trader(),
            ecl_received,
            Amount::ZERO,
            far_deadline(),
            now(),
        ) else {
            return Ok(());
        };

        let Ok(p1) = engine.volatile_of_primary_pool() else {
            panic!("launched view");
        };
        let Ok(s1) = engine.volatile_of_secondary_pool() else {
            panic!("launched view");
        };
        // The fee remainder stays behind in the primary pool's
        // accounted balance; only the paid amount leaves.
        prop_assert_eq!(p0.get() + s0.get() - (p1.get() + s1.get()), volatile_received.get());
        prop_assert_eq!(s1.get(), s0.get());
    }
}
