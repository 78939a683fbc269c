//! Low-stock alert computation tests
//!
//! Covers the report's filtering rules and the stockout estimate:
//! - a row qualifies only below threshold AND with nonzero recent sales
//! - days_until_stockout = floor(stock * window / sales_volume)

use proptest::prelude::*;

const SALES_WINDOW_DAYS: i64 = 30;
const NO_VELOCITY_SENTINEL: i64 = 999;

fn days_until_stockout(current_stock: i32, recent_sales_abs: i64) -> i64 {
    if recent_sales_abs == 0 {
        return NO_VELOCITY_SENTINEL;
    }
    i64::from(current_stock) * SALES_WINDOW_DAYS / recent_sales_abs
}

fn qualifies(current_stock: i32, threshold: i32, recent_sales_abs: i64) -> bool {
    current_stock < threshold && recent_sales_abs != 0
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Seed fixture scenario: stock 10, threshold 20, one sale of -5 in the
    /// window. Velocity is 5/30 per day, so stock runs out in 60 days.
    #[test]
    fn test_fixture_scenario_alerts() {
        assert!(qualifies(10, 20, 5));
        assert_eq!(days_until_stockout(10, 5), 60);
    }

    /// Plenty of stock: excluded regardless of sales history
    #[test]
    fn test_well_stocked_product_excluded() {
        assert!(!qualifies(100, 20, 5));
        assert!(!qualifies(100, 20, 0));
    }

    /// Below threshold but no recent sales: no forecast possible, excluded
    #[test]
    fn test_no_velocity_excluded() {
        assert!(!qualifies(10, 20, 0));
    }

    /// Boundary: stock exactly at threshold is not low
    #[test]
    fn test_stock_at_threshold_excluded() {
        assert!(!qualifies(20, 20, 5));
        assert!(qualifies(19, 20, 5));
    }

    #[test]
    fn test_stockout_estimate_rounds_down() {
        // 3 on hand, 7 sold over the window: 3*30/7 = 12.86 -> 12
        assert_eq!(days_until_stockout(3, 7), 12);
    }

    #[test]
    fn test_stockout_estimate_fast_mover() {
        // 2 per day against 10 on hand
        assert_eq!(days_until_stockout(10, 60), 5);
    }

    #[test]
    fn test_stockout_estimate_zero_stock() {
        assert_eq!(days_until_stockout(0, 5), 0);
    }

    #[test]
    fn test_zero_velocity_sentinel() {
        assert_eq!(days_until_stockout(10, 0), NO_VELOCITY_SENTINEL);
    }

    /// The sales sum arrives as a negative number (sales remove stock); the
    /// report uses its absolute value.
    #[test]
    fn test_sales_sum_sign_is_normalized() {
        let recent_sales_sum: i64 = -5;
        assert_eq!(recent_sales_sum.abs(), 5);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// The estimate is the exact floor of stock / daily velocity:
        /// days * volume <= stock * window < (days + 1) * volume
        #[test]
        fn stockout_estimate_is_exact_floor(
            stock in 0i32..=10_000,
            volume in 1i64..=10_000,
        ) {
            let days = days_until_stockout(stock, volume);
            let stock_days = i64::from(stock) * SALES_WINDOW_DAYS;
            prop_assert!(days * volume <= stock_days);
            prop_assert!(stock_days < (days + 1) * volume);
        }

        /// More stock never shortens the estimate
        #[test]
        fn stockout_estimate_monotonic_in_stock(
            stock in 0i32..=9_999,
            volume in 1i64..=10_000,
        ) {
            prop_assert!(
                days_until_stockout(stock + 1, volume) >= days_until_stockout(stock, volume)
            );
        }

        /// Faster sales never lengthen the estimate
        #[test]
        fn stockout_estimate_antitone_in_velocity(
            stock in 0i32..=10_000,
            volume in 1i64..=9_999,
        ) {
            prop_assert!(
                days_until_stockout(stock, volume + 1) <= days_until_stockout(stock, volume)
            );
        }

        /// Nonnegative stock never yields a negative estimate
        #[test]
        fn stockout_estimate_nonnegative(
            stock in 0i32..=10_000,
            volume in 0i64..=10_000,
        ) {
            prop_assert!(days_until_stockout(stock, volume) >= 0);
        }

        /// Qualification requires both conditions, independently
        #[test]
        fn qualification_needs_low_stock_and_velocity(
            stock in -100i32..=10_000,
            threshold in 0i32..=1_000,
            volume in 0i64..=10_000,
        ) {
            let q = qualifies(stock, threshold, volume);
            prop_assert_eq!(q, stock < threshold && volume != 0);
        }
    }
}
