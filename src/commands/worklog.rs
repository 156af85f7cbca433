use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use ferrypay::application::work_summary;
use ferrypay::infrastructure::OfflineSummarizer;

use crate::commands::Session;

pub fn cmd_add(session: &mut Session, content: &str, photos: &[PathBuf], json: bool) -> Result<()> {
    let mut encoded = Vec::with_capacity(photos.len());
    for path in photos {
        let bytes =
            fs::read(path).with_context(|| format!("reading photo {}", path.display()))?;
        encoded.push(STANDARD.encode(bytes));
    }

    let actor = session.actor.clone();
    let log = session.service.create_work_log(&actor, content, encoded)?;

    if json {
        let output = serde_json::json!({
            "event": "worklog_created",
            "id": log.id().as_str(),
            "authorId": log.author_id().as_str(),
            "photos": log.photos().len(),
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("✓ Registro de obra criado: {}", log.id());
        if !log.photos().is_empty() {
            println!("  {} foto(s) anexada(s)", log.photos().len());
        }
    }

    Ok(())
}

pub fn cmd_list(session: &Session, json: bool) -> Result<()> {
    let ledger = session.service.ledger();

    if json {
        for log in ledger.work_logs_newest_first() {
            let output = serde_json::json!({
                "event": "worklog",
                "id": log.id().as_str(),
                "content": log.content(),
                "date": log.date().to_rfc3339(),
                "authorId": log.author_id().as_str(),
                "photos": log.photos().len(),
            });
            println!("{}", serde_json::to_string(&output)?);
        }
        return Ok(());
    }

    if ledger.work_logs().is_empty() {
        println!("Nenhum registro de obra.");
        return Ok(());
    }

    println!("📔 Diário de obra ({}):", ledger.work_logs().len());
    for log in ledger.work_logs_newest_first() {
        let photos = if log.photos().is_empty() {
            String::new()
        } else {
            format!(" [{} foto(s)]", log.photos().len())
        };
        println!(
            "  {} - {}{} ({})",
            log.date().format("%d/%m/%Y"),
            log.content(),
            photos,
            log.id()
        );
    }

    Ok(())
}

pub fn cmd_summarize(session: &Session, json: bool) -> Result<()> {
    let summary = work_summary(session.service.ledger(), &OfflineSummarizer::new());

    if json {
        let output = serde_json::json!({
            "event": "work_summary",
            "summary": summary,
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("📝 Resumo das atividades:");
        println!("{}", summary);
    }

    Ok(())
}
