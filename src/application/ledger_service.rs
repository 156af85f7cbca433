//! Ledger service - capability-gated command handlers
//!
//! One handler per action on the role table. Each handler authorizes the
//! actor, validates input before any entity exists, applies the mutation
//! to the in-memory ledger, and persists the snapshot before returning.
//! Lookup misses and ineligible transitions are outcomes, not errors.

use crate::domain::entities::{
    Ledger, MaterialRequest, MaterialStatus, Payment, PaymentStatus, PayrollRequest, ProjectPatch,
    Urgency, User, WorkLog,
};
use crate::domain::ports::{Clock, IdGenerator, LedgerRepository};
use crate::domain::services::capabilities::Action;
use crate::domain::value_objects::{EntityId, Money};
use crate::error::{FerrypayError, FerrypayResult};

/// Result of a status transition or delete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The mutation changed the store (and was persisted)
    Applied,
    /// No entity with that id; silently ignored
    NotFound,
    /// Entity exists but the transition is not a legal forward step
    NotEligible,
}

impl ApplyOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ApplyOutcome::Applied)
    }
}

/// Result of settling a payroll claim
#[derive(Debug, Clone, PartialEq)]
pub enum SettleOutcome {
    /// Claim is PAID and exactly one payment was synthesized
    Settled { payment_id: EntityId },
    NotFound,
    /// Claim is not APPROVED (either still pending, or already paid -
    /// re-settling never duplicates the payment)
    NotEligible,
}

/// Orchestrates mutations over the ledger with injected persistence,
/// id minting, and time
pub struct LedgerService<R, G, C>
where
    R: LedgerRepository,
    G: IdGenerator,
    C: Clock,
{
    repository: R,
    ids: G,
    clock: C,
    ledger: Ledger,
}

impl<R, G, C> LedgerService<R, G, C>
where
    R: LedgerRepository,
    G: IdGenerator,
    C: Clock,
{
    /// Load the persisted ledger (or the built-in default) and wrap it
    pub fn open(repository: R, ids: G, clock: C) -> FerrypayResult<Self> {
        let ledger = repository.load_or_default()?;
        Ok(Self {
            repository,
            ids,
            clock,
            ledger,
        })
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    fn authorize(&self, action: Action, actor: &User) -> FerrypayResult<()> {
        if action.permits(actor.role()) {
            Ok(())
        } else {
            Err(FerrypayError::Forbidden {
                action,
                role: actor.role(),
            })
        }
    }

    fn persist(&self) -> FerrypayResult<()> {
        self.repository.save(&self.ledger)?;
        Ok(())
    }

    // ---- project ----

    pub fn update_project(&mut self, actor: &User, patch: ProjectPatch) -> FerrypayResult<()> {
        self.authorize(Action::EditProject, actor)?;
        if patch.is_empty() {
            return Ok(());
        }
        self.ledger.update_project(patch);
        self.persist()
    }

    // ---- payments ----

    /// Manual ledger entry by the employer; starts PENDING
    pub fn create_payment(
        &mut self,
        actor: &User,
        amount: Money,
        description: &str,
    ) -> FerrypayResult<Payment> {
        self.authorize(Action::CreatePayment, actor)?;
        require_filled(description, "description")?;

        let payment = Payment::new(
            self.ids.next_id(),
            amount,
            self.clock.now(),
            description.trim(),
            PaymentStatus::Pending,
        );
        self.ledger.add_payment(payment.clone());
        self.persist()?;
        Ok(payment)
    }

    pub fn confirm_payment(&mut self, actor: &User, id: &EntityId) -> FerrypayResult<ApplyOutcome> {
        self.authorize(Action::ConfirmPayment, actor)?;
        if self.ledger.payment(id).is_none() {
            return Ok(ApplyOutcome::NotFound);
        }
        if !self.ledger.confirm_payment(id) {
            return Ok(ApplyOutcome::NotEligible);
        }
        self.persist()?;
        Ok(ApplyOutcome::Applied)
    }

    // ---- material requests ----

    pub fn create_material_request(
        &mut self,
        actor: &User,
        item_name: &str,
        quantity: &str,
        urgency: Urgency,
    ) -> FerrypayResult<MaterialRequest> {
        self.authorize(Action::CreateMaterialRequest, actor)?;
        require_filled(item_name, "item_name")?;
        require_filled(quantity, "quantity")?;

        let request = MaterialRequest::new(
            self.ids.next_id(),
            item_name.trim(),
            quantity.trim(),
            urgency,
            self.clock.now(),
        );
        self.ledger.add_material_request(request.clone());
        self.persist()?;
        Ok(request)
    }

    pub fn mark_material_ordered(
        &mut self,
        actor: &User,
        id: &EntityId,
    ) -> FerrypayResult<ApplyOutcome> {
        self.authorize(Action::MarkMaterialOrdered, actor)?;
        self.advance_material(id, MaterialStatus::Ordered)
    }

    pub fn mark_material_received(
        &mut self,
        actor: &User,
        id: &EntityId,
    ) -> FerrypayResult<ApplyOutcome> {
        self.authorize(Action::MarkMaterialReceived, actor)?;
        self.advance_material(id, MaterialStatus::Received)
    }

    fn advance_material(
        &mut self,
        id: &EntityId,
        next: MaterialStatus,
    ) -> FerrypayResult<ApplyOutcome> {
        if self.ledger.material_request(id).is_none() {
            return Ok(ApplyOutcome::NotFound);
        }
        if !self.ledger.advance_material_request(id, next) {
            return Ok(ApplyOutcome::NotEligible);
        }
        self.persist()?;
        Ok(ApplyOutcome::Applied)
    }

    // ---- work logs ----

    /// Append-only diary entry; author is the acting contractor
    pub fn create_work_log(
        &mut self,
        actor: &User,
        content: &str,
        photos: Vec<String>,
    ) -> FerrypayResult<WorkLog> {
        self.authorize(Action::CreateWorkLog, actor)?;
        if content.trim().is_empty() && photos.is_empty() {
            return Err(FerrypayError::EmptyField { field: "content" });
        }

        let log = WorkLog::new(
            self.ids.next_id(),
            content.trim(),
            self.clock.now(),
            actor.id().clone(),
            photos,
        );
        self.ledger.add_work_log(log.clone());
        self.persist()?;
        Ok(log)
    }

    // ---- payroll ----

    pub fn create_payroll_request(
        &mut self,
        actor: &User,
        week_ending: chrono::NaiveDate,
        amount: Money,
        details: &str,
    ) -> FerrypayResult<PayrollRequest> {
        self.authorize(Action::CreatePayrollRequest, actor)?;
        require_filled(details, "details")?;

        let request = PayrollRequest::new(self.ids.next_id(), week_ending, amount, details.trim());
        self.ledger.add_payroll_request(request.clone());
        self.persist()?;
        Ok(request)
    }

    pub fn approve_payroll_request(
        &mut self,
        actor: &User,
        id: &EntityId,
    ) -> FerrypayResult<ApplyOutcome> {
        self.authorize(Action::ApprovePayrollRequest, actor)?;
        if self.ledger.payroll_request(id).is_none() {
            return Ok(ApplyOutcome::NotFound);
        }
        if !self.ledger.approve_payroll_request(id) {
            return Ok(ApplyOutcome::NotEligible);
        }
        self.persist()?;
        Ok(ApplyOutcome::Applied)
    }

    /// Settle an approved claim: synthesizes the COMPLETED payment and
    /// marks the claim PAID atomically (see `Ledger::settle_payroll_request`)
    pub fn pay_payroll_request(
        &mut self,
        actor: &User,
        id: &EntityId,
    ) -> FerrypayResult<SettleOutcome> {
        self.authorize(Action::PayPayrollRequest, actor)?;
        if self.ledger.payroll_request(id).is_none() {
            return Ok(SettleOutcome::NotFound);
        }

        let payment_id = self.ids.next_id();
        match self
            .ledger
            .settle_payroll_request(id, payment_id, self.clock.now())
        {
            Some(payment_id) => {
                self.persist()?;
                Ok(SettleOutcome::Settled { payment_id })
            }
            None => Ok(SettleOutcome::NotEligible),
        }
    }

    pub fn delete_payroll_request(
        &mut self,
        actor: &User,
        id: &EntityId,
    ) -> FerrypayResult<ApplyOutcome> {
        self.authorize(Action::DeletePayrollRequest, actor)?;
        match self.ledger.payroll_request(id) {
            None => Ok(ApplyOutcome::NotFound),
            Some(request) if request.is_paid() => Ok(ApplyOutcome::NotEligible),
            Some(_) => {
                self.ledger.remove_payroll_request(id);
                self.persist()?;
                Ok(ApplyOutcome::Applied)
            }
        }
    }
}

fn require_filled(value: &str, field: &'static str) -> FerrypayResult<()> {
    if value.trim().is_empty() {
        Err(FerrypayError::EmptyField { field })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::auth::authenticate;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::id::SequentialIdGenerator;
    use crate::infrastructure::repositories::JsonLedgerRepository;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn employer() -> User {
        authenticate("admin", "admin").unwrap()
    }

    fn contractor() -> User {
        authenticate("empreiteiro", "obra2024").unwrap()
    }

    fn service_in(
        dir: &std::path::Path,
    ) -> LedgerService<JsonLedgerRepository, SequentialIdGenerator, FixedClock> {
        let repo = JsonLedgerRepository::new(dir.join("ledger.json"));
        LedgerService::open(repo, SequentialIdGenerator::new(), FixedClock::default()).unwrap()
    }

    #[test]
    fn payroll_lifecycle_reference_scenario() {
        let dir = tempdir().unwrap();
        let mut service = service_in(dir.path());
        let contractor = contractor();
        let employer = employer();

        let request = service
            .create_payroll_request(
                &contractor,
                NaiveDate::from_ymd_opt(2024, 6, 7).unwrap(),
                Money::from(5000),
                "3 welders",
            )
            .unwrap();
        assert!(request.is_pending());

        // Approval changes the claim but not the payment ledger.
        let outcome = service
            .approve_payroll_request(&employer, request.id())
            .unwrap();
        assert!(outcome.is_applied());
        assert!(service.ledger().payments().is_empty());

        // Settlement appends exactly one COMPLETED payment of 5000.
        let outcome = service.pay_payroll_request(&employer, request.id()).unwrap();
        let payment_id = match outcome {
            SettleOutcome::Settled { payment_id } => payment_id,
            other => panic!("expected settlement, got {other:?}"),
        };
        assert_eq!(service.ledger().payments().len(), 1);
        let payment = service.ledger().payment(&payment_id).unwrap();
        assert_eq!(payment.amount(), Money::from(5000));
        assert!(payment.is_completed());
        assert!(payment.description().contains("3 welders"));
        assert!(payment.description().contains("07/06/2024"));

        // Paying again is a guarded no-op.
        let again = service.pay_payroll_request(&employer, request.id()).unwrap();
        assert_eq!(again, SettleOutcome::NotEligible);
        assert_eq!(service.ledger().payments().len(), 1);
    }

    #[test]
    fn mutations_persist_across_reopen() {
        let dir = tempdir().unwrap();
        {
            let mut service = service_in(dir.path());
            service
                .create_payment(&employer(), Money::from(250_000), "Medição 1")
                .unwrap();
        }

        let reopened = service_in(dir.path());
        assert_eq!(reopened.ledger().payments().len(), 1);
        assert_eq!(
            reopened.ledger().payments()[0].description(),
            "Medição 1"
        );
    }

    #[test]
    fn contractor_cannot_create_payments() {
        let dir = tempdir().unwrap();
        let mut service = service_in(dir.path());

        let err = service
            .create_payment(&contractor(), Money::from(100), "tentativa")
            .unwrap_err();
        assert!(matches!(err, FerrypayError::Forbidden { .. }));
        assert!(service.ledger().payments().is_empty());
    }

    #[test]
    fn employer_cannot_create_payroll_requests() {
        let dir = tempdir().unwrap();
        let mut service = service_in(dir.path());

        let err = service
            .create_payroll_request(
                &employer(),
                NaiveDate::from_ymd_opt(2024, 6, 7).unwrap(),
                Money::from(5000),
                "3 welders",
            )
            .unwrap_err();
        assert!(matches!(err, FerrypayError::Forbidden { .. }));
    }

    #[test]
    fn empty_required_field_creates_no_partial_entity() {
        let dir = tempdir().unwrap();
        let mut service = service_in(dir.path());

        let err = service
            .create_material_request(&contractor(), "  ", "20 kg", Urgency::High)
            .unwrap_err();
        assert!(matches!(
            err,
            FerrypayError::EmptyField { field: "item_name" }
        ));
        assert!(service.ledger().material_requests().is_empty());
    }

    #[test]
    fn work_log_with_photos_only_is_allowed() {
        let dir = tempdir().unwrap();
        let mut service = service_in(dir.path());

        let log = service
            .create_work_log(&contractor(), "", vec!["aGVsbG8=".to_string()])
            .unwrap();
        assert_eq!(log.photos().len(), 1);
        assert_eq!(log.author_id(), &EntityId::new("contractor-1"));
    }

    #[test]
    fn deleting_approved_claim_then_repeat_is_noop() {
        let dir = tempdir().unwrap();
        let mut service = service_in(dir.path());
        let request = service
            .create_payroll_request(
                &contractor(),
                NaiveDate::from_ymd_opt(2024, 6, 7).unwrap(),
                Money::from(4200),
                "2 caldeireiros",
            )
            .unwrap();
        service
            .approve_payroll_request(&employer(), request.id())
            .unwrap();

        assert_eq!(
            service
                .delete_payroll_request(&contractor(), request.id())
                .unwrap(),
            ApplyOutcome::Applied
        );
        assert_eq!(
            service
                .delete_payroll_request(&contractor(), request.id())
                .unwrap(),
            ApplyOutcome::NotFound
        );
    }

    #[test]
    fn paid_claim_cannot_be_deleted_by_anyone() {
        let dir = tempdir().unwrap();
        let mut service = service_in(dir.path());
        let request = service
            .create_payroll_request(
                &contractor(),
                NaiveDate::from_ymd_opt(2024, 6, 7).unwrap(),
                Money::from(5000),
                "3 welders",
            )
            .unwrap();
        service
            .approve_payroll_request(&employer(), request.id())
            .unwrap();
        service.pay_payroll_request(&employer(), request.id()).unwrap();

        for actor in [employer(), contractor()] {
            assert_eq!(
                service.delete_payroll_request(&actor, request.id()).unwrap(),
                ApplyOutcome::NotEligible
            );
        }
        assert!(service.ledger().payroll_request(request.id()).is_some());
    }

    #[test]
    fn unknown_ids_surface_as_not_found() {
        let dir = tempdir().unwrap();
        let mut service = service_in(dir.path());
        let ghost = EntityId::new("ghost");

        assert_eq!(
            service.confirm_payment(&employer(), &ghost).unwrap(),
            ApplyOutcome::NotFound
        );
        assert_eq!(
            service.mark_material_ordered(&employer(), &ghost).unwrap(),
            ApplyOutcome::NotFound
        );
        assert_eq!(
            service.pay_payroll_request(&employer(), &ghost).unwrap(),
            SettleOutcome::NotFound
        );
    }

    #[test]
    fn material_chain_respects_role_split() {
        let dir = tempdir().unwrap();
        let mut service = service_in(dir.path());
        let request = service
            .create_material_request(&contractor(), "Eletrodo 7018", "40 kg", Urgency::High)
            .unwrap();

        // Contractor cannot order; employer cannot receive.
        assert!(matches!(
            service.mark_material_ordered(&contractor(), request.id()),
            Err(FerrypayError::Forbidden { .. })
        ));
        service.mark_material_ordered(&employer(), request.id()).unwrap();
        assert!(matches!(
            service.mark_material_received(&employer(), request.id()),
            Err(FerrypayError::Forbidden { .. })
        ));
        assert!(service
            .mark_material_received(&contractor(), request.id())
            .unwrap()
            .is_applied());
    }
}
