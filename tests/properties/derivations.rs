//! Property tests for financial derivations.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

use ferrypay::domain::entities::{Ledger, Payment, PaymentStatus, ProjectPatch};
use ferrypay::domain::services::derivations;
use ferrypay::{EntityId, Money};

fn ledger_with(total_value: u64, payments: &[(u64, bool)]) -> Ledger {
    let mut ledger = Ledger::with_default_project();
    ledger.update_project(ProjectPatch {
        total_value: Some(Money::from(total_value)),
        ..Default::default()
    });
    for (i, (amount, completed)) in payments.iter().enumerate() {
        let status = if *completed {
            PaymentStatus::Completed
        } else {
            PaymentStatus::Pending
        };
        ledger.add_payment(Payment::new(
            EntityId::new(format!("p{i}")),
            Money::from(*amount),
            Utc.timestamp_opt(1_700_000_000 + i as i64, 0).unwrap(),
            format!("pagamento {i}"),
            status,
        ));
    }
    ledger
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: totalPaid sums exactly the COMPLETED payments, pending
    /// entries never contribute.
    #[test]
    fn property_total_paid_sums_only_completed(
        payments in proptest::collection::vec((0u64..2_000_000, any::<bool>()), 0..24),
    ) {
        let ledger = ledger_with(1_250_000, &payments);

        let expected: u64 = payments
            .iter()
            .filter(|(_, completed)| *completed)
            .map(|(amount, _)| amount)
            .sum();

        prop_assert_eq!(derivations::total_paid(&ledger), Money::from(expected));
    }

    /// PROPERTY: balance + totalPaid always reconciles with totalValue.
    #[test]
    fn property_balance_reconciles(
        total_value in 0u64..10_000_000,
        payments in proptest::collection::vec((0u64..2_000_000, any::<bool>()), 0..24),
    ) {
        let ledger = ledger_with(total_value, &payments);

        let paid = derivations::total_paid(&ledger);
        let balance = derivations::balance(&ledger);

        prop_assert_eq!(balance + paid.amount(), Decimal::from(total_value));
    }

    /// PROPERTY: progress is clamped to 0..=100, even with overpayment
    /// or a zero-value contract.
    #[test]
    fn property_progress_is_clamped(
        total_value in 0u64..5_000_000,
        payments in proptest::collection::vec((0u64..2_000_000, any::<bool>()), 0..24),
    ) {
        let ledger = ledger_with(total_value, &payments);
        let progress = derivations::progress_percent(&ledger);

        prop_assert!(progress <= 100);
        if total_value == 0 {
            prop_assert_eq!(progress, 0);
        }
    }

    /// PROPERTY: derivations are order-insensitive - shuffling the
    /// payment list never changes the summary.
    #[test]
    fn property_derivations_ignore_insertion_order(
        payments in proptest::collection::vec((0u64..2_000_000, any::<bool>()), 0..16),
    ) {
        let forward = ledger_with(1_250_000, &payments);
        let mut reversed_input = payments.clone();
        reversed_input.reverse();
        let reversed = ledger_with(1_250_000, &reversed_input);

        prop_assert_eq!(
            derivations::financial_summary(&forward),
            derivations::financial_summary(&reversed)
        );
    }
}
