use anyhow::Result;

use crate::commands::session::resolve_user;

pub fn cmd_login(user: Option<&str>, password: Option<&str>, json: bool) -> Result<()> {
    let user = resolve_user(user, password)?;

    if json {
        let output = serde_json::json!({
            "event": "login",
            "id": user.id().as_str(),
            "name": user.name(),
            "role": user.role().to_string(),
            "username": user.username(),
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("🔑 Acesso liberado");
        println!("Usuário: {} ({})", user.name(), user.role().label());
        println!("Id: {}", user.id());
    }

    Ok(())
}
