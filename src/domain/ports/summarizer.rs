//! Summarizer port - the generative-text collaborator
//!
//! The contract is infallible on purpose: implementations must absorb
//! every failure (timeout, error response, missing backend) into the fixed
//! localized fallback strings below and never raise into caller code. The
//! remote generative API stays an opaque collaborator behind this trait.

use rust_decimal::Decimal;

use crate::domain::value_objects::Money;

/// Fallback when there are no log entries to analyze
pub const NO_LOGS_FALLBACK: &str = "Nenhum registro disponível para análise.";

/// Fallback when the work-summary generation fails
pub const SUMMARY_FALLBACK: &str = "Não foi possível gerar o resumo automático no momento.";

/// Fallback when the report-analysis generation fails
pub const REPORT_FALLBACK: &str = "Análise técnica indisponível temporariamente.";

/// Snapshot of project/financial/material/payroll state handed to the
/// report summarizer
#[derive(Debug, Clone, PartialEq)]
pub struct ReportData {
    pub project_title: String,
    pub total_value: Money,
    pub paid_value: Money,
    pub balance: Decimal,
    pub progress_percent: u8,
    /// Recent work-log contents, newest first
    pub logs: Vec<String>,
    /// Item names of materials still awaiting an order
    pub pending_materials: Vec<String>,
    /// One-line payroll situation ("2 pendentes, 1 paga")
    pub payroll_status: String,
}

/// Text-generation collaborator for executive summaries
pub trait Summarizer {
    /// Three-ish sentences over recent field logs
    fn summarize_logs(&self, logs: &[String]) -> String;

    /// Executive opinion over the consolidated report snapshot
    fn summarize_report(&self, data: &ReportData) -> String;
}
