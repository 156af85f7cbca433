//! Derivation engine - pure aggregates over a ledger snapshot
//!
//! Every value here is recomputed on demand from current collection state;
//! nothing is stored or cached, so derived figures can never drift from the
//! entities they summarize.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::domain::entities::{Ledger, MaterialRequest, PayrollRequest};
use crate::domain::value_objects::Money;

/// The financial aggregates shown on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinancialSummary {
    pub total_paid: Money,
    /// Signed: goes negative when payouts exceed the contract value
    pub balance: Decimal,
    /// Clamped to 0..=100
    pub progress_percent: u8,
}

/// Exact decimal sum of COMPLETED payment amounts
pub fn total_paid(ledger: &Ledger) -> Money {
    ledger
        .payments()
        .iter()
        .filter(|p| p.is_completed())
        .fold(Money::zero(), |acc, p| acc.plus(p.amount()))
}

/// Remaining contract value (total value minus what was paid)
pub fn balance(ledger: &Ledger) -> Decimal {
    ledger.project().total_value().amount() - total_paid(ledger).amount()
}

/// Percentage of the contract value already paid, rounded and clamped to
/// 0..=100. Defined as 0 when the contract value is zero.
pub fn progress_percent(ledger: &Ledger) -> u8 {
    let total_value = ledger.project().total_value().amount();
    if total_value.is_zero() {
        return 0;
    }
    let ratio = total_paid(ledger).amount() * Decimal::ONE_HUNDRED / total_value;
    let rounded = ratio.round().to_u8().unwrap_or(100);
    rounded.min(100)
}

pub fn financial_summary(ledger: &Ledger) -> FinancialSummary {
    FinancialSummary {
        total_paid: total_paid(ledger),
        balance: balance(ledger),
        progress_percent: progress_percent(ledger),
    }
}

/// Material requests still awaiting an order
pub fn pending_materials(ledger: &Ledger) -> Vec<&MaterialRequest> {
    ledger
        .material_requests()
        .iter()
        .filter(|m| m.is_pending())
        .collect()
}

/// Payroll claims still awaiting approval
pub fn pending_payroll(ledger: &Ledger) -> Vec<&PayrollRequest> {
    ledger
        .payroll_requests()
        .iter()
        .filter(|r| r.is_pending())
        .collect()
}

/// Count of items waiting on somebody's action
pub fn total_pending_actions(ledger: &Ledger) -> usize {
    pending_materials(ledger).len() + pending_payroll(ledger).len()
}
