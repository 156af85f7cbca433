use anyhow::Result;

use ferrypay::domain::entities::ProjectPatch;

use crate::commands::{parse_date, Session};

pub fn cmd_show(session: &Session, json: bool) -> Result<()> {
    let project = session.service.ledger().project();

    if json {
        let output = serde_json::json!({
            "event": "project",
            "id": project.id().as_str(),
            "title": project.title(),
            "totalValue": project.total_value(),
            "contractorId": project.contractor_id().as_str(),
            "startDate": project.start_date().to_string(),
            "description": project.description(),
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("🚢 {}", project.title());
        println!("Valor: {}", project.total_value());
        println!("Início: {}", project.start_date().format("%d/%m/%Y"));
        println!("Empreiteiro: {}", project.contractor_id());
        println!("Escopo: {}", project.description());
    }

    Ok(())
}

pub fn cmd_set(
    session: &mut Session,
    title: Option<String>,
    total_value: Option<String>,
    start_date: Option<String>,
    description: Option<String>,
    json: bool,
) -> Result<()> {
    let patch = ProjectPatch {
        title,
        total_value: total_value.as_deref().map(str::parse).transpose()?,
        start_date: start_date.as_deref().map(parse_date).transpose()?,
        description,
    };

    let actor = session.actor.clone();
    session.service.update_project(&actor, patch)?;

    if json {
        let output = serde_json::json!({
            "event": "project_updated",
            "title": session.service.ledger().project().title(),
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("✓ Contrato atualizado");
        cmd_show(session, false)?;
    }

    Ok(())
}
