use std::path::PathBuf;

use anyhow::Result;

use ferrypay::application::LedgerService;
use ferrypay::domain::entities::User;
use ferrypay::domain::services::auth::authenticate;
use ferrypay::error::FerrypayError;
use ferrypay::infrastructure::{JsonLedgerRepository, SystemClock, UuidIdGenerator};

/// Service wired with the production adapters
pub type Service = LedgerService<JsonLedgerRepository, UuidIdGenerator, SystemClock>;

/// An authenticated user bound to an open ledger
pub struct Session {
    pub actor: User,
    pub service: Service,
}

impl Session {
    /// Authenticate the credentials and open the ledger at `ledger_path`
    pub fn open(
        user: Option<&str>,
        password: Option<&str>,
        ledger_path: PathBuf,
    ) -> Result<Self> {
        let actor = resolve_user(user, password)?;
        let repository = JsonLedgerRepository::new(ledger_path);
        let service = LedgerService::open(repository, UuidIdGenerator::new(), SystemClock::new())?;
        Ok(Self { actor, service })
    }
}

/// Resolve credentials from flags or FERRYPAY_USER / FERRYPAY_PASSWORD
pub fn resolve_user(user: Option<&str>, password: Option<&str>) -> Result<User> {
    let username = match user {
        Some(u) => u.to_string(),
        None => std::env::var("FERRYPAY_USER")
            .map_err(|_| anyhow::anyhow!("missing credentials: pass --user or set FERRYPAY_USER"))?,
    };
    let password = match password {
        Some(p) => p.to_string(),
        None => std::env::var("FERRYPAY_PASSWORD").map_err(|_| {
            anyhow::anyhow!("missing credentials: pass --password or set FERRYPAY_PASSWORD")
        })?,
    };
    authenticate(&username, &password).ok_or_else(|| FerrypayError::InvalidCredentials.into())
}
