//! Report assembly
//!
//! Builds the consolidated snapshot handed to the summarizer port and the
//! printable report. Read-only: derivations are recomputed here, never
//! taken from stored fields.

use crate::domain::entities::Ledger;
use crate::domain::ports::{ReportData, Summarizer};
use crate::domain::services::derivations;

/// Number of recent log entries fed to the summarizer, newest first
const RECENT_LOG_WINDOW: usize = 8;

/// The printable consolidated report
#[derive(Debug, Clone, PartialEq)]
pub struct ContractReport {
    pub data: ReportData,
    pub executive_summary: String,
}

/// One-line payroll situation for the report header
fn payroll_status_line(ledger: &Ledger) -> String {
    let pending = derivations::pending_payroll(ledger).len();
    let paid = ledger
        .payroll_requests()
        .iter()
        .filter(|r| r.is_paid())
        .count();
    format!("{pending} pendentes, {paid} pagas")
}

/// Assemble the report snapshot and ask the collaborator for the
/// executive text. The summarizer never fails; at worst it hands back its
/// fixed fallback string.
pub fn build_report(ledger: &Ledger, summarizer: &dyn Summarizer) -> ContractReport {
    let summary = derivations::financial_summary(ledger);
    let data = ReportData {
        project_title: ledger.project().title().to_string(),
        total_value: ledger.project().total_value(),
        paid_value: summary.total_paid,
        balance: summary.balance,
        progress_percent: summary.progress_percent,
        logs: recent_logs(ledger),
        pending_materials: derivations::pending_materials(ledger)
            .iter()
            .map(|m| m.item_name().to_string())
            .collect(),
        payroll_status: payroll_status_line(ledger),
    };
    let executive_summary = summarizer.summarize_report(&data);
    ContractReport {
        data,
        executive_summary,
    }
}

/// Summarize recent field logs (the dashboard's work-summary flow)
pub fn work_summary(ledger: &Ledger, summarizer: &dyn Summarizer) -> String {
    summarizer.summarize_logs(&recent_logs(ledger))
}

fn recent_logs(ledger: &Ledger) -> Vec<String> {
    ledger
        .work_logs_newest_first()
        .take(RECENT_LOG_WINDOW)
        .map(|l| l.content().to_string())
        .collect()
}
