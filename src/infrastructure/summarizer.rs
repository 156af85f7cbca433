//! Offline summarizer
//!
//! Deterministic local implementation of the Summarizer port. There is no
//! remote backend in this build; the adapter composes the executive text
//! from the snapshot itself and reaches for the fixed fallback strings
//! exactly where a failed remote call would.

use crate::domain::ports::{ReportData, Summarizer, NO_LOGS_FALLBACK};

/// Local, always-available summarizer
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineSummarizer;

impl OfflineSummarizer {
    pub fn new() -> Self {
        Self
    }
}

impl Summarizer for OfflineSummarizer {
    fn summarize_logs(&self, logs: &[String]) -> String {
        if logs.is_empty() {
            return NO_LOGS_FALLBACK.to_string();
        }
        let mut out = format!(
            "Resumo dos últimos {} registros de obra. Atividade mais recente: {}.",
            logs.len(),
            logs[0].trim_end_matches('.')
        );
        if logs.len() > 1 {
            out.push_str(&format!(
                " Demais frentes registradas: {}.",
                logs[1..]
                    .iter()
                    .map(|l| l.trim_end_matches('.'))
                    .collect::<Vec<_>>()
                    .join("; ")
            ));
        }
        out
    }

    fn summarize_report(&self, data: &ReportData) -> String {
        let mut out = format!(
            "Parecer executivo - {}: avanço físico-financeiro de {}%, com {} pagos de um contrato de {}.",
            data.project_title, data.progress_percent, data.paid_value, data.total_value
        );
        if data.pending_materials.is_empty() {
            out.push_str(" Nenhum material aguardando pedido.");
        } else {
            out.push_str(&format!(
                " Materiais aguardando pedido: {}.",
                data.pending_materials.join(", ")
            ));
        }
        out.push_str(&format!(" Folhas de pagamento: {}.", data.payroll_status));
        if data.logs.is_empty() {
            out.push(' ');
            out.push_str(NO_LOGS_FALLBACK);
        }
        out
    }
}
