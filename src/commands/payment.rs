use anyhow::Result;

use ferrypay::application::ApplyOutcome;
use ferrypay::domain::value_objects::{EntityId, Money};

use crate::commands::Session;

pub fn cmd_add(session: &mut Session, amount: &str, description: &str, json: bool) -> Result<()> {
    let amount: Money = amount.parse()?;
    let actor = session.actor.clone();
    let payment = session.service.create_payment(&actor, amount, description)?;

    if json {
        let output = serde_json::json!({
            "event": "payment_created",
            "id": payment.id().as_str(),
            "amount": payment.amount(),
            "status": payment.status().to_string(),
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("✓ Pagamento registrado: {}", payment.id());
        println!("  {} - {} ({})", payment.amount(), payment.description(), payment.status());
    }

    Ok(())
}

pub fn cmd_confirm(session: &mut Session, id: &str, json: bool) -> Result<()> {
    let id = EntityId::from(id);
    let actor = session.actor.clone();
    let outcome = session.service.confirm_payment(&actor, &id)?;

    if json {
        let output = serde_json::json!({
            "event": "payment_confirmed",
            "id": id.as_str(),
            "applied": outcome.is_applied(),
        });
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    match outcome {
        ApplyOutcome::Applied => println!("✓ Pagamento {} confirmado", id),
        ApplyOutcome::NotFound => println!("⚠ Pagamento {} não encontrado", id),
        ApplyOutcome::NotEligible => println!("⚠ Pagamento {} já estava confirmado", id),
    }

    Ok(())
}

pub fn cmd_list(session: &Session, json: bool) -> Result<()> {
    let ledger = session.service.ledger();

    if json {
        for payment in ledger.payments_newest_first() {
            let output = serde_json::json!({
                "event": "payment",
                "id": payment.id().as_str(),
                "amount": payment.amount(),
                "date": payment.date().to_rfc3339(),
                "description": payment.description(),
                "status": payment.status().to_string(),
            });
            println!("{}", serde_json::to_string(&output)?);
        }
        return Ok(());
    }

    if ledger.payments().is_empty() {
        println!("Nenhum pagamento registrado.");
        return Ok(());
    }

    println!("💰 Pagamentos ({}):", ledger.payments().len());
    for payment in ledger.payments_newest_first() {
        println!(
            "  [{}] {} {} - {} ({})",
            payment.status(),
            payment.date().format("%d/%m/%Y"),
            payment.amount(),
            payment.description(),
            payment.id()
        );
    }

    Ok(())
}
