//! Inventory movement tests
//!
//! Covers the stock movement sign conventions and the relationship between
//! the audit trail and the on-hand quantity.

use proptest::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MovementReason {
    Sale,
    Restock,
    Adjustment,
}

fn validate_change_amount(reason: MovementReason, change_amount: i32) -> Result<(), &'static str> {
    match reason {
        MovementReason::Sale if change_amount >= 0 => {
            Err("Sale movements must have a negative change_amount")
        }
        MovementReason::Restock if change_amount <= 0 => {
            Err("Restock movements must have a positive change_amount")
        }
        MovementReason::Adjustment if change_amount == 0 => {
            Err("Adjustment movements must have a nonzero change_amount")
        }
        _ => Ok(()),
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// The audit trail reasons on the wire
    #[test]
    fn test_movement_reasons() {
        let reasons = ["sale", "restock", "adjustment"];
        assert_eq!(reasons.len(), 3);

        // All reasons are lowercase identifiers
        for r in reasons {
            assert!(r.chars().all(|c| c.is_ascii_lowercase()));
        }
    }

    /// Negative = stock leaving, positive = stock arriving
    #[test]
    fn test_sign_conventions() {
        assert!(validate_change_amount(MovementReason::Sale, -5).is_ok());
        assert!(validate_change_amount(MovementReason::Sale, 5).is_err());
        assert!(validate_change_amount(MovementReason::Restock, 25).is_ok());
        assert!(validate_change_amount(MovementReason::Restock, -25).is_err());
    }

    /// Zero never changes anything and is rejected for every reason
    #[test]
    fn test_zero_change_rejected() {
        assert!(validate_change_amount(MovementReason::Sale, 0).is_err());
        assert!(validate_change_amount(MovementReason::Restock, 0).is_err());
        assert!(validate_change_amount(MovementReason::Adjustment, 0).is_err());
    }

    /// Adjustments may go either way
    #[test]
    fn test_adjustment_any_direction() {
        assert!(validate_change_amount(MovementReason::Adjustment, -3).is_ok());
        assert!(validate_change_amount(MovementReason::Adjustment, 3).is_ok());
    }

    /// Applying logged movements to the starting quantity reproduces the
    /// current quantity
    #[test]
    fn test_quantity_tracks_movements() {
        let movements = vec![50, -20, 10, -15];
        let quantity: i32 = movements.iter().sum::<i32>();

        // 50 - 20 + 10 - 15 = 25
        assert_eq!(quantity, 25);
    }

    /// Overselling is permitted: the quantity may go negative
    #[test]
    fn test_overselling_goes_negative() {
        let quantity = 5 + (-8);
        assert_eq!(quantity, -3);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    fn reason_strategy() -> impl Strategy<Value = MovementReason> {
        prop_oneof![
            Just(MovementReason::Sale),
            Just(MovementReason::Restock),
            Just(MovementReason::Adjustment),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// A valid movement is never zero
        #[test]
        fn valid_movements_are_nonzero(
            reason in reason_strategy(),
            change in -1_000i32..=1_000,
        ) {
            if validate_change_amount(reason, change).is_ok() {
                prop_assert!(change != 0);
            }
        }

        /// Sales only remove stock, restocks only add it
        #[test]
        fn sign_matches_reason(
            reason in reason_strategy(),
            change in -1_000i32..=1_000,
        ) {
            if validate_change_amount(reason, change).is_ok() {
                match reason {
                    MovementReason::Sale => prop_assert!(change < 0),
                    MovementReason::Restock => prop_assert!(change > 0),
                    MovementReason::Adjustment => prop_assert!(change != 0),
                }
            }
        }

        /// Movement application is order-independent for the final quantity
        #[test]
        fn final_quantity_is_order_independent(
            mut movements in proptest::collection::vec(-100i32..=100, 0..20),
        ) {
            let forward: i32 = movements.iter().sum();
            movements.reverse();
            let backward: i32 = movements.iter().sum();
            prop_assert_eq!(forward, backward);
        }
    }
}
