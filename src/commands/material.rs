use anyhow::Result;

use ferrypay::application::ApplyOutcome;
use ferrypay::domain::entities::Urgency;
use ferrypay::domain::value_objects::EntityId;

use crate::commands::Session;

pub fn cmd_add(
    session: &mut Session,
    item: &str,
    quantity: &str,
    urgency: Urgency,
    json: bool,
) -> Result<()> {
    let actor = session.actor.clone();
    let request = session
        .service
        .create_material_request(&actor, item, quantity, urgency)?;

    if json {
        let output = serde_json::json!({
            "event": "material_created",
            "id": request.id().as_str(),
            "itemName": request.item_name(),
            "urgency": request.urgency().to_string(),
            "status": request.status().to_string(),
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("✓ Material solicitado: {}", request.id());
        println!(
            "  {} - {} (urgência {})",
            request.item_name(),
            request.quantity(),
            request.urgency()
        );
    }

    Ok(())
}

pub fn cmd_order(session: &mut Session, id: &str, json: bool) -> Result<()> {
    let id = EntityId::from(id);
    let actor = session.actor.clone();
    let outcome = session.service.mark_material_ordered(&actor, &id)?;
    report_transition(&id, "pedido", outcome, json)
}

pub fn cmd_receive(session: &mut Session, id: &str, json: bool) -> Result<()> {
    let id = EntityId::from(id);
    let actor = session.actor.clone();
    let outcome = session.service.mark_material_received(&actor, &id)?;
    report_transition(&id, "recebido", outcome, json)
}

fn report_transition(id: &EntityId, verb: &str, outcome: ApplyOutcome, json: bool) -> Result<()> {
    if json {
        let output = serde_json::json!({
            "event": "material_transition",
            "id": id.as_str(),
            "applied": outcome.is_applied(),
        });
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    match outcome {
        ApplyOutcome::Applied => println!("✓ Material {} marcado como {}", id, verb),
        ApplyOutcome::NotFound => println!("⚠ Solicitação {} não encontrada", id),
        ApplyOutcome::NotEligible => {
            println!("⚠ Solicitação {} não pode ser marcada como {}", id, verb)
        }
    }

    Ok(())
}

pub fn cmd_list(session: &Session, json: bool) -> Result<()> {
    let ledger = session.service.ledger();

    if json {
        for request in ledger.material_requests_newest_first() {
            let output = serde_json::json!({
                "event": "material",
                "id": request.id().as_str(),
                "itemName": request.item_name(),
                "quantity": request.quantity(),
                "urgency": request.urgency().to_string(),
                "status": request.status().to_string(),
                "requestDate": request.request_date().to_rfc3339(),
            });
            println!("{}", serde_json::to_string(&output)?);
        }
        return Ok(());
    }

    if ledger.material_requests().is_empty() {
        println!("Nenhuma solicitação de material.");
        return Ok(());
    }

    println!("🧱 Materiais ({}):", ledger.material_requests().len());
    for request in ledger.material_requests_newest_first() {
        println!(
            "  [{}] {} - {} (urgência {}, {})",
            request.status(),
            request.item_name(),
            request.quantity(),
            request.urgency(),
            request.id()
        );
    }

    Ok(())
}
