use anyhow::Result;

use ferrypay::domain::services::derivations;

use crate::commands::Session;

pub fn cmd_status(session: &Session, json: bool) -> Result<()> {
    let ledger = session.service.ledger();
    let summary = derivations::financial_summary(ledger);
    let pending_materials = derivations::pending_materials(ledger).len();
    let pending_payroll = derivations::pending_payroll(ledger).len();

    if json {
        let output = serde_json::json!({
            "event": "status",
            "project": ledger.project().title(),
            "totalValue": ledger.project().total_value(),
            "totalPaid": summary.total_paid,
            "balance": summary.balance,
            "progressPercent": summary.progress_percent,
            "pendingMaterials": pending_materials,
            "pendingPayroll": pending_payroll,
            "pendingActions": derivations::total_pending_actions(ledger),
        });
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    println!("🚢 {}", ledger.project().title());
    println!("Início: {}", ledger.project().start_date().format("%d/%m/%Y"));
    println!();
    println!("💰 Financeiro:");
    println!("  Valor do contrato: {}", ledger.project().total_value());
    println!("  Total pago:        {}", summary.total_paid);
    println!("  Saldo:             R$ {:.2}", summary.balance);
    println!("  Avanço:            {}%", summary.progress_percent);
    println!();
    println!("📋 Pendências:");
    println!("  Materiais aguardando pedido: {}", pending_materials);
    println!("  Folhas aguardando aprovação: {}", pending_payroll);

    Ok(())
}
