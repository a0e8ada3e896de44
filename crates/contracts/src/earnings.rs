//! Earnings computation rule.
//!
//! The single source of truth for how raw shift counters turn into derived
//! monetary figures. Both runtimes use this module: the frontend for the live
//! preview and pre-submit validation, the backend when a record is written.
//! Amounts are whole currency units (i64), never floats.

use serde::{Deserialize, Serialize};

/// Orders up to and including this count are paid at the base rate.
pub const TIER_THRESHOLD: i64 = 30;

/// Per-order rate for the first [`TIER_THRESHOLD`] orders.
pub const BASE_RATE: i64 = 55;

/// Per-order rate for every order beyond the threshold.
pub const RAISED_RATE: i64 = 75;

/// Flat bonus per order beyond the threshold, counted against the combined
/// order total across both channels.
pub const VOLUME_BONUS: i64 = 20;

/// Raw shift counters as entered by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftInput {
    pub total_orders: i64,
    pub cash_orders: i64,
    pub morning_cash: i64,
    pub evening_cash: i64,
}

/// The four derived monetary figures.
///
/// `cash_earnings` is signed: it can go negative when the drawer shrank by
/// more than the expected cash value of the cash orders. That is preserved
/// as-is, no clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EarningsBreakdown {
    pub cash_earnings: i64,
    pub online_earnings: i64,
    pub bonus_earnings: i64,
    pub total_earnings: i64,
}

/// Tiered per-order valuation: the first [`TIER_THRESHOLD`] orders are worth
/// [`BASE_RATE`] each, every order beyond that [`RAISED_RATE`].
pub fn tier(orders: i64) -> i64 {
    if orders <= TIER_THRESHOLD {
        orders * BASE_RATE
    } else {
        TIER_THRESHOLD * BASE_RATE + (orders - TIER_THRESHOLD) * RAISED_RATE
    }
}

/// Derives the four earnings figures from raw counters.
///
/// Pure and total. Preconditions (non-negative counters,
/// `cash_orders <= total_orders`) are the caller's contract, checked by
/// [`crate::records::ShiftRecordDraft::validate`]. Violated preconditions
/// still compute; the result is simply whatever the formula yields.
pub fn calculate(input: ShiftInput) -> EarningsBreakdown {
    let online_orders = input.total_orders - input.cash_orders;

    let expected_cash = tier(input.cash_orders);
    let cash_diff = input.evening_cash - input.morning_cash;
    // Net drawer change plus the order-derived cash value it should have
    // produced; tips and shortfalls embedded in the drawer delta land here.
    let cash_earnings = cash_diff + expected_cash;

    let online_earnings = tier(online_orders);
    let bonus_earnings = (input.total_orders - TIER_THRESHOLD).max(0) * VOLUME_BONUS;

    EarningsBreakdown {
        cash_earnings,
        online_earnings,
        bonus_earnings,
        total_earnings: cash_earnings + online_earnings + bonus_earnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_below_threshold_is_flat_base_rate() {
        assert_eq!(tier(0), 0);
        assert_eq!(tier(1), 55);
        assert_eq!(tier(10), 550);
        assert_eq!(tier(30), 1650);
    }

    #[test]
    fn tier_above_threshold_switches_to_raised_rate() {
        assert_eq!(tier(31), 1650 + 75);
        assert_eq!(tier(35), 1650 + 5 * 75);
        assert_eq!(tier(100), 1650 + 70 * 75);
    }

    #[test]
    fn bonus_is_zero_at_or_below_threshold() {
        for n in [0, 1, 15, 29, 30] {
            let out = calculate(ShiftInput {
                total_orders: n,
                cash_orders: 0,
                morning_cash: 0,
                evening_cash: 0,
            });
            assert_eq!(out.bonus_earnings, 0, "no bonus expected for {} orders", n);
        }
    }

    #[test]
    fn bonus_counts_orders_beyond_threshold_across_both_channels() {
        let out = calculate(ShiftInput {
            total_orders: 40,
            cash_orders: 12,
            morning_cash: 0,
            evening_cash: 0,
        });
        assert_eq!(out.bonus_earnings, 10 * 20);
    }

    #[test]
    fn quiet_day_example() {
        // 25 orders, 10 cash: tier(10)=550, drawer 200 -> 850 gives diff 650.
        let out = calculate(ShiftInput {
            total_orders: 25,
            cash_orders: 10,
            morning_cash: 200,
            evening_cash: 850,
        });
        assert_eq!(out.cash_earnings, 1200);
        assert_eq!(out.online_earnings, 825);
        assert_eq!(out.bonus_earnings, 0);
        assert_eq!(out.total_earnings, 2025);
    }

    #[test]
    fn busy_day_example() {
        // 40 orders, 35 cash: tier(35)=2025, drawer 100 -> 500 gives diff 400.
        let out = calculate(ShiftInput {
            total_orders: 40,
            cash_orders: 35,
            morning_cash: 100,
            evening_cash: 500,
        });
        assert_eq!(out.cash_earnings, 2425);
        assert_eq!(out.online_earnings, 275);
        assert_eq!(out.bonus_earnings, 200);
        assert_eq!(out.total_earnings, 2900);
    }

    #[test]
    fn total_is_always_the_sum_of_its_parts() {
        let inputs = [
            (0, 0, 0, 0),
            (25, 10, 200, 850),
            (40, 35, 100, 500),
            (31, 31, 5000, 100),
            (60, 0, 0, 0),
        ];
        for (t, c, m, e) in inputs {
            let out = calculate(ShiftInput {
                total_orders: t,
                cash_orders: c,
                morning_cash: m,
                evening_cash: e,
            });
            assert_eq!(
                out.total_earnings,
                out.cash_earnings + out.online_earnings + out.bonus_earnings
            );
        }
    }

    #[test]
    fn cash_earnings_may_go_negative_when_drawer_shrinks() {
        // Drawer lost more than the expected cash value; preserved unclamped.
        let out = calculate(ShiftInput {
            total_orders: 2,
            cash_orders: 2,
            morning_cash: 1000,
            evening_cash: 100,
        });
        assert_eq!(out.cash_earnings, -900 + 110);
        assert!(out.cash_earnings < 0);
    }

    #[test]
    fn identical_inputs_give_identical_outputs() {
        let input = ShiftInput {
            total_orders: 33,
            cash_orders: 20,
            morning_cash: 150,
            evening_cash: 900,
        };
        assert_eq!(calculate(input), calculate(input));
    }
}
