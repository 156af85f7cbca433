//! Capability table - which role may perform which action
//!
//! Centralizes the role gating that the original scattered across
//! conditional rendering. Each application handler declares its `Action`;
//! the check happens once, at the command-dispatch boundary.

use crate::domain::value_objects::Role;

/// Every mutating action on the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    EditProject,
    CreatePayment,
    ConfirmPayment,
    CreateMaterialRequest,
    MarkMaterialOrdered,
    MarkMaterialReceived,
    CreatePayrollRequest,
    ApprovePayrollRequest,
    PayPayrollRequest,
    DeletePayrollRequest,
    CreateWorkLog,
}

impl Action {
    /// Whether `role` is allowed to perform this action
    pub fn permits(self, role: Role) -> bool {
        match self {
            Action::EditProject
            | Action::CreatePayment
            | Action::ConfirmPayment
            | Action::MarkMaterialOrdered
            | Action::ApprovePayrollRequest
            | Action::PayPayrollRequest => role.is_employer(),

            Action::CreateMaterialRequest
            | Action::MarkMaterialReceived
            | Action::CreatePayrollRequest
            | Action::CreateWorkLog => role.is_contractor(),

            // Either party may withdraw an unsettled claim.
            Action::DeletePayrollRequest => true,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Action::EditProject => "edit project",
            Action::CreatePayment => "create payment",
            Action::ConfirmPayment => "confirm payment",
            Action::CreateMaterialRequest => "create material request",
            Action::MarkMaterialOrdered => "mark material ordered",
            Action::MarkMaterialReceived => "mark material received",
            Action::CreatePayrollRequest => "create payroll request",
            Action::ApprovePayrollRequest => "approve payroll request",
            Action::PayPayrollRequest => "pay payroll request",
            Action::DeletePayrollRequest => "delete payroll request",
            Action::CreateWorkLog => "create work log",
        };
        write!(f, "{name}")
    }
}
