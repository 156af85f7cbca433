use anyhow::Result;

use ferrypay::application::{ApplyOutcome, SettleOutcome};
use ferrypay::domain::value_objects::{EntityId, Money};

use crate::commands::{parse_date, Session};

pub fn cmd_add(
    session: &mut Session,
    week_ending: &str,
    amount: &str,
    details: &str,
    json: bool,
) -> Result<()> {
    let week_ending = parse_date(week_ending)?;
    let amount: Money = amount.parse()?;
    let actor = session.actor.clone();
    let request = session
        .service
        .create_payroll_request(&actor, week_ending, amount, details)?;

    if json {
        let output = serde_json::json!({
            "event": "payroll_created",
            "id": request.id().as_str(),
            "weekEnding": request.week_ending().to_string(),
            "amount": request.amount(),
            "status": request.status().to_string(),
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("✓ Folha semanal solicitada: {}", request.id());
        println!(
            "  Semana {} - {} ({})",
            request.week_ending().format("%d/%m/%Y"),
            request.amount(),
            request.details()
        );
    }

    Ok(())
}

pub fn cmd_approve(session: &mut Session, id: &str, json: bool) -> Result<()> {
    let id = EntityId::from(id);
    let actor = session.actor.clone();
    let outcome = session.service.approve_payroll_request(&actor, &id)?;

    if json {
        let output = serde_json::json!({
            "event": "payroll_approved",
            "id": id.as_str(),
            "applied": outcome.is_applied(),
        });
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    match outcome {
        ApplyOutcome::Applied => println!("✓ Folha {} aprovada", id),
        ApplyOutcome::NotFound => println!("⚠ Folha {} não encontrada", id),
        ApplyOutcome::NotEligible => println!("⚠ Folha {} não está pendente", id),
    }

    Ok(())
}

pub fn cmd_pay(session: &mut Session, id: &str, json: bool) -> Result<()> {
    let id = EntityId::from(id);
    let actor = session.actor.clone();
    let outcome = session.service.pay_payroll_request(&actor, &id)?;

    if json {
        let (settled, payment_id) = match &outcome {
            SettleOutcome::Settled { payment_id } => (true, Some(payment_id.as_str())),
            _ => (false, None),
        };
        let output = serde_json::json!({
            "event": "payroll_paid",
            "id": id.as_str(),
            "settled": settled,
            "paymentId": payment_id,
        });
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    match outcome {
        SettleOutcome::Settled { payment_id } => {
            println!("✓ Folha {} paga", id);
            println!("  Pagamento gerado: {}", payment_id);
        }
        SettleOutcome::NotFound => println!("⚠ Folha {} não encontrada", id),
        SettleOutcome::NotEligible => println!("⚠ Folha {} não está aprovada", id),
    }

    Ok(())
}

pub fn cmd_remove(session: &mut Session, id: &str, json: bool) -> Result<()> {
    let id = EntityId::from(id);
    let actor = session.actor.clone();
    let outcome = session.service.delete_payroll_request(&actor, &id)?;

    if json {
        let output = serde_json::json!({
            "event": "payroll_removed",
            "id": id.as_str(),
            "applied": outcome.is_applied(),
        });
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    match outcome {
        ApplyOutcome::Applied => println!("✓ Folha {} removida", id),
        ApplyOutcome::NotFound => println!("⚠ Folha {} não encontrada", id),
        ApplyOutcome::NotEligible => println!("⚠ Folha {} já foi paga e não pode ser removida", id),
    }

    Ok(())
}

pub fn cmd_list(session: &Session, json: bool) -> Result<()> {
    let ledger = session.service.ledger();

    if json {
        for request in ledger.payroll_requests_newest_first() {
            let output = serde_json::json!({
                "event": "payroll",
                "id": request.id().as_str(),
                "weekEnding": request.week_ending().to_string(),
                "amount": request.amount(),
                "details": request.details(),
                "status": request.status().to_string(),
            });
            println!("{}", serde_json::to_string(&output)?);
        }
        return Ok(());
    }

    if ledger.payroll_requests().is_empty() {
        println!("Nenhuma folha de pagamento.");
        return Ok(());
    }

    println!("👷 Folhas de pagamento ({}):", ledger.payroll_requests().len());
    for request in ledger.payroll_requests_newest_first() {
        println!(
            "  [{}] Semana {} - {} - {} ({})",
            request.status(),
            request.week_ending().format("%d/%m/%Y"),
            request.amount(),
            request.details(),
            request.id()
        );
    }

    Ok(())
}
