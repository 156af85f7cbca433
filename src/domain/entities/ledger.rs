//! Ledger entity - the in-memory store for the whole contract
//!
//! Holds the project singleton plus the four collections. It is a pure data
//! structure: no I/O and no authorization logic (capability checks live at
//! the command-dispatch boundary in the application layer). Operations are
//! total - an unknown id is a silent no-op, and illegal status transitions
//! leave the store untouched.
//!
//! Collections keep insertion order; newest-first ordering is applied at
//! the read boundary via the `*_newest_first` iterators, not in storage.

use chrono::{DateTime, Utc};

use crate::domain::entities::{
    MaterialRequest, MaterialStatus, Payment, PaymentStatus, PayrollRequest, PayrollStatus,
    Project, ProjectPatch, WorkLog,
};
use crate::domain::value_objects::EntityId;

/// The five mutually-referential collections under one aggregate
#[derive(Debug, Clone, PartialEq)]
pub struct Ledger {
    project: Project,
    payments: Vec<Payment>,
    material_requests: Vec<MaterialRequest>,
    work_logs: Vec<WorkLog>,
    payroll_requests: Vec<PayrollRequest>,
}

impl Ledger {
    /// Create an empty ledger around a project record
    pub fn new(project: Project) -> Self {
        Self {
            project,
            payments: Vec::new(),
            material_requests: Vec::new(),
            work_logs: Vec::new(),
            payroll_requests: Vec::new(),
        }
    }

    /// Empty ledger with the built-in default contract
    pub fn with_default_project() -> Self {
        Self::new(Project::default_contract())
    }

    /// Rehydrate a ledger from a persisted snapshot
    pub fn from_parts(
        project: Project,
        payments: Vec<Payment>,
        material_requests: Vec<MaterialRequest>,
        work_logs: Vec<WorkLog>,
        payroll_requests: Vec<PayrollRequest>,
    ) -> Self {
        Self {
            project,
            payments,
            material_requests,
            work_logs,
            payroll_requests,
        }
    }

    // ---- read boundary ----

    pub fn project(&self) -> &Project {
        &self.project
    }

    /// Payments in insertion order
    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    pub fn payments_newest_first(&self) -> impl Iterator<Item = &Payment> {
        self.payments.iter().rev()
    }

    pub fn material_requests(&self) -> &[MaterialRequest] {
        &self.material_requests
    }

    pub fn material_requests_newest_first(&self) -> impl Iterator<Item = &MaterialRequest> {
        self.material_requests.iter().rev()
    }

    pub fn work_logs(&self) -> &[WorkLog] {
        &self.work_logs
    }

    pub fn work_logs_newest_first(&self) -> impl Iterator<Item = &WorkLog> {
        self.work_logs.iter().rev()
    }

    pub fn payroll_requests(&self) -> &[PayrollRequest] {
        &self.payroll_requests
    }

    pub fn payroll_requests_newest_first(&self) -> impl Iterator<Item = &PayrollRequest> {
        self.payroll_requests.iter().rev()
    }

    pub fn payment(&self, id: &EntityId) -> Option<&Payment> {
        self.payments.iter().find(|p| p.id() == id)
    }

    pub fn material_request(&self, id: &EntityId) -> Option<&MaterialRequest> {
        self.material_requests.iter().find(|m| m.id() == id)
    }

    pub fn payroll_request(&self, id: &EntityId) -> Option<&PayrollRequest> {
        self.payroll_requests.iter().find(|r| r.id() == id)
    }

    // ---- mutation ----

    pub fn update_project(&mut self, patch: ProjectPatch) {
        self.project.apply(patch);
    }

    pub fn add_payment(&mut self, payment: Payment) {
        debug_assert!(self.payment(payment.id()).is_none(), "duplicate payment id");
        self.payments.push(payment);
    }

    /// PENDING -> COMPLETED. Returns whether anything changed.
    pub fn confirm_payment(&mut self, id: &EntityId) -> bool {
        match self.payments.iter_mut().find(|p| p.id() == id) {
            Some(payment) => payment.advance_status(PaymentStatus::Completed),
            None => false,
        }
    }

    pub fn add_material_request(&mut self, request: MaterialRequest) {
        debug_assert!(
            self.material_request(request.id()).is_none(),
            "duplicate material request id"
        );
        self.material_requests.push(request);
    }

    /// Advance a material request along PENDING -> ORDERED -> RECEIVED.
    /// Backward or skipping transitions are ignored.
    pub fn advance_material_request(&mut self, id: &EntityId, next: MaterialStatus) -> bool {
        match self.material_requests.iter_mut().find(|m| m.id() == id) {
            Some(request) => request.advance_status(next),
            None => false,
        }
    }

    pub fn add_work_log(&mut self, log: WorkLog) {
        self.work_logs.push(log);
    }

    pub fn add_payroll_request(&mut self, request: PayrollRequest) {
        debug_assert!(
            self.payroll_request(request.id()).is_none(),
            "duplicate payroll request id"
        );
        self.payroll_requests.push(request);
    }

    /// PENDING -> APPROVED. Returns whether anything changed.
    pub fn approve_payroll_request(&mut self, id: &EntityId) -> bool {
        match self.payroll_requests.iter_mut().find(|r| r.id() == id) {
            Some(request) => request.advance_status(PayrollStatus::Approved),
            None => false,
        }
    }

    /// Settle an APPROVED payroll request: synthesize exactly one COMPLETED
    /// payment carrying the claim's amount and apply APPROVED -> PAID, in a
    /// single call so no intermediate state is observable. Re-settling an
    /// already-PAID request is a no-op and creates no payment.
    ///
    /// Returns the id of the synthesized payment when the settlement applied.
    pub fn settle_payroll_request(
        &mut self,
        id: &EntityId,
        payment_id: EntityId,
        now: DateTime<Utc>,
    ) -> Option<EntityId> {
        let request = self.payroll_requests.iter_mut().find(|r| r.id() == id)?;
        if !request.status().can_advance_to(PayrollStatus::Paid) {
            return None;
        }

        let payment = Payment::new(
            payment_id.clone(),
            request.amount(),
            now,
            request.settlement_description(),
            PaymentStatus::Completed,
        );
        let advanced = request.advance_status(PayrollStatus::Paid);
        debug_assert!(advanced);

        self.payments.push(payment);
        Some(payment_id)
    }

    /// Remove a payroll request unless it is PAID (financial record
    /// integrity). Returns whether anything was removed.
    pub fn remove_payroll_request(&mut self, id: &EntityId) -> bool {
        let before = self.payroll_requests.len();
        self.payroll_requests.retain(|r| r.id() != id || r.is_paid());
        self.payroll_requests.len() != before
    }
}
