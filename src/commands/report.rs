use anyhow::Result;

use ferrypay::application::build_report;
use ferrypay::infrastructure::OfflineSummarizer;

use crate::commands::Session;

pub fn cmd_report(session: &Session, json: bool) -> Result<()> {
    let report = build_report(session.service.ledger(), &OfflineSummarizer::new());
    let data = &report.data;

    if json {
        let output = serde_json::json!({
            "event": "report",
            "project": data.project_title,
            "totalValue": data.total_value,
            "paidValue": data.paid_value,
            "balance": data.balance,
            "progressPercent": data.progress_percent,
            "pendingMaterials": data.pending_materials,
            "payrollStatus": data.payroll_status,
            "recentLogs": data.logs.len(),
            "executiveSummary": report.executive_summary,
        });
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    println!("📊 Relatório Consolidado - {}", data.project_title);
    println!();
    println!("Financeiro:");
    println!("  Valor do contrato: {}", data.total_value);
    println!("  Total pago:        {}", data.paid_value);
    println!("  Saldo:             R$ {:.2}", data.balance);
    println!("  Avanço:            {}%", data.progress_percent);
    println!();
    if data.pending_materials.is_empty() {
        println!("Materiais: nenhum aguardando pedido");
    } else {
        println!("Materiais aguardando pedido:");
        for item in &data.pending_materials {
            println!("  - {}", item);
        }
    }
    println!("Folhas de pagamento: {}", data.payroll_status);
    println!();
    if !data.logs.is_empty() {
        println!("Registros recentes:");
        for log in &data.logs {
            println!("  - {}", log);
        }
        println!();
    }
    println!("Parecer:");
    println!("{}", report.executive_summary);

    Ok(())
}
