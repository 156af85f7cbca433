//! Property tests for lifecycle invariants and snapshot round-trips.

use chrono::{NaiveDate, TimeZone, Utc};
use proptest::prelude::*;
use tempfile::tempdir;

use ferrypay::domain::entities::{
    Ledger, MaterialRequest, MaterialStatus, Payment, PaymentStatus, PayrollRequest, Urgency,
    WorkLog,
};
use ferrypay::domain::ports::ledger_repository::LedgerRepository;
use ferrypay::infrastructure::JsonLedgerRepository;
use ferrypay::{EntityId, Money};

fn urgency_strategy() -> impl Strategy<Value = Urgency> {
    prop_oneof![
        Just(Urgency::Low),
        Just(Urgency::Medium),
        Just(Urgency::High),
    ]
}

fn material_status_strategy() -> impl Strategy<Value = MaterialStatus> {
    prop_oneof![
        Just(MaterialStatus::Pending),
        Just(MaterialStatus::Ordered),
        Just(MaterialStatus::Received),
    ]
}

fn text() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 çãéíõ]{1,32}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: material status never moves backwards, whatever the
    /// sequence of requested transitions.
    #[test]
    fn property_material_status_is_monotonic(
        transitions in proptest::collection::vec(material_status_strategy(), 0..12),
    ) {
        let mut ledger = Ledger::with_default_project();
        let id = EntityId::new("m1");
        ledger.add_material_request(MaterialRequest::new(
            id.clone(),
            "Aço naval",
            "20 chapas",
            Urgency::Medium,
            Utc::now(),
        ));

        let rank = |s: MaterialStatus| match s {
            MaterialStatus::Pending => 0,
            MaterialStatus::Ordered => 1,
            MaterialStatus::Received => 2,
        };

        let mut previous = MaterialStatus::Pending;
        for next in transitions {
            ledger.advance_material_request(&id, next);
            let current = ledger.material_request(&id).unwrap().status();
            prop_assert!(rank(current) >= rank(previous));
            // A single call may advance at most one step.
            prop_assert!(rank(current) - rank(previous) <= 1);
            previous = current;
        }
    }

    /// PROPERTY: settling an approved claim repeatedly yields exactly one
    /// payment, matching the claim amount.
    #[test]
    fn property_settlement_is_idempotent(
        amount in 1u64..1_000_000,
        attempts in 1usize..6,
    ) {
        let mut ledger = Ledger::with_default_project();
        let id = EntityId::new("pr1");
        ledger.add_payroll_request(PayrollRequest::new(
            id.clone(),
            NaiveDate::from_ymd_opt(2024, 6, 7).unwrap(),
            Money::from(amount),
            "equipe",
        ));
        ledger.approve_payroll_request(&id);

        for attempt in 0..attempts {
            ledger.settle_payroll_request(
                &id,
                EntityId::new(format!("pay{attempt}")),
                Utc::now(),
            );
        }

        prop_assert_eq!(ledger.payments().len(), 1);
        prop_assert_eq!(ledger.payments()[0].amount(), Money::from(amount));
        prop_assert!(ledger.payroll_request(&id).unwrap().is_paid());
    }

    /// PROPERTY: any populated ledger survives a save/load cycle
    /// field-for-field.
    #[test]
    fn property_snapshot_round_trips(
        payments in proptest::collection::vec((0u64..2_000_000, any::<bool>(), text()), 0..8),
        materials in proptest::collection::vec((text(), text(), urgency_strategy()), 0..8),
        logs in proptest::collection::vec(text(), 0..8),
    ) {
        let mut ledger = Ledger::with_default_project();
        for (i, (amount, completed, description)) in payments.iter().enumerate() {
            let status = if *completed {
                PaymentStatus::Completed
            } else {
                PaymentStatus::Pending
            };
            ledger.add_payment(Payment::new(
                EntityId::new(format!("p{i}")),
                Money::from(*amount),
                Utc.timestamp_opt(1_700_000_000 + i as i64, 0).unwrap(),
                description.clone(),
                status,
            ));
        }
        for (i, (item, quantity, urgency)) in materials.iter().enumerate() {
            ledger.add_material_request(MaterialRequest::new(
                EntityId::new(format!("m{i}")),
                item.clone(),
                quantity.clone(),
                *urgency,
                Utc.timestamp_opt(1_700_000_000 + i as i64, 0).unwrap(),
            ));
        }
        for (i, content) in logs.iter().enumerate() {
            ledger.add_work_log(WorkLog::new(
                EntityId::new(format!("w{i}")),
                content.clone(),
                Utc.timestamp_opt(1_700_000_000 + i as i64, 0).unwrap(),
                EntityId::new("contractor-1"),
                Vec::new(),
            ));
        }

        let dir = tempdir().unwrap();
        let repo = JsonLedgerRepository::new(dir.path().join("ledger.json"));
        repo.save(&ledger).unwrap();
        let loaded = repo.load().unwrap().unwrap();

        prop_assert_eq!(loaded, ledger);
    }
}
