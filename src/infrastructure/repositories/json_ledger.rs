//! JSON Ledger Repository
//!
//! Implements the LedgerRepository port as a single JSON document on disk,
//! mirroring the original persisted layout: one keyed record with
//! `project`, `payments`, `materialRequests`, `workLogs`,
//! `payrollRequests` in camelCase. The document must round-trip without
//! loss for every entity field.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{
    Ledger, MaterialRequest, MaterialStatus, Payment, PaymentStatus, PayrollRequest,
    PayrollStatus, Project, Urgency, WorkLog,
};
use crate::domain::ports::ledger_repository::{LedgerRepository, RepositoryError, RepositoryResult};
use crate::domain::value_objects::{EntityId, Money};

/// File-backed repository holding the single ledger snapshot
pub struct JsonLedgerRepository {
    path: PathBuf,
}

impl JsonLedgerRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// JSON representation of the project record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectDoc {
    id: EntityId,
    title: String,
    total_value: Money,
    contractor_id: EntityId,
    start_date: NaiveDate,
    description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PaymentDoc {
    id: EntityId,
    amount: Money,
    date: DateTime<Utc>,
    description: String,
    status: PaymentStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MaterialRequestDoc {
    id: EntityId,
    item_name: String,
    quantity: String,
    urgency: Urgency,
    status: MaterialStatus,
    request_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WorkLogDoc {
    id: EntityId,
    content: String,
    date: DateTime<Utc>,
    author_id: EntityId,
    #[serde(default)]
    photos: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PayrollRequestDoc {
    id: EntityId,
    week_ending: NaiveDate,
    amount: Money,
    details: String,
    status: PayrollStatus,
}

/// Top-level document. Every section is optional so a partially-shaped
/// snapshot still loads: missing collections default to empty, a missing
/// project falls back to the built-in default.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct LedgerDoc {
    #[serde(default)]
    project: Option<ProjectDoc>,
    #[serde(default)]
    payments: Vec<PaymentDoc>,
    #[serde(default)]
    material_requests: Vec<MaterialRequestDoc>,
    #[serde(default)]
    work_logs: Vec<WorkLogDoc>,
    #[serde(default)]
    payroll_requests: Vec<PayrollRequestDoc>,
}

impl From<&Ledger> for LedgerDoc {
    fn from(ledger: &Ledger) -> Self {
        let project = ledger.project();
        LedgerDoc {
            project: Some(ProjectDoc {
                id: project.id().clone(),
                title: project.title().to_string(),
                total_value: project.total_value(),
                contractor_id: project.contractor_id().clone(),
                start_date: project.start_date(),
                description: project.description().to_string(),
            }),
            payments: ledger
                .payments()
                .iter()
                .map(|p| PaymentDoc {
                    id: p.id().clone(),
                    amount: p.amount(),
                    date: p.date(),
                    description: p.description().to_string(),
                    status: p.status(),
                })
                .collect(),
            material_requests: ledger
                .material_requests()
                .iter()
                .map(|m| MaterialRequestDoc {
                    id: m.id().clone(),
                    item_name: m.item_name().to_string(),
                    quantity: m.quantity().to_string(),
                    urgency: m.urgency(),
                    status: m.status(),
                    request_date: m.request_date(),
                })
                .collect(),
            work_logs: ledger
                .work_logs()
                .iter()
                .map(|l| WorkLogDoc {
                    id: l.id().clone(),
                    content: l.content().to_string(),
                    date: l.date(),
                    author_id: l.author_id().clone(),
                    photos: l.photos().to_vec(),
                })
                .collect(),
            payroll_requests: ledger
                .payroll_requests()
                .iter()
                .map(|r| PayrollRequestDoc {
                    id: r.id().clone(),
                    week_ending: r.week_ending(),
                    amount: r.amount(),
                    details: r.details().to_string(),
                    status: r.status(),
                })
                .collect(),
        }
    }
}

impl LedgerDoc {
    fn into_ledger(self) -> Ledger {
        let project = match self.project {
            Some(doc) => Project::new(
                doc.id,
                doc.title,
                doc.total_value,
                doc.contractor_id,
                doc.start_date,
                doc.description,
            ),
            None => Project::default_contract(),
        };
        Ledger::from_parts(
            project,
            self.payments
                .into_iter()
                .map(|p| Payment::new(p.id, p.amount, p.date, p.description, p.status))
                .collect(),
            self.material_requests
                .into_iter()
                .map(|m| {
                    MaterialRequest::from_parts(
                        m.id,
                        m.item_name,
                        m.quantity,
                        m.urgency,
                        m.status,
                        m.request_date,
                    )
                })
                .collect(),
            self.work_logs
                .into_iter()
                .map(|l| WorkLog::new(l.id, l.content, l.date, l.author_id, l.photos))
                .collect(),
            self.payroll_requests
                .into_iter()
                .map(|r| {
                    PayrollRequest::from_parts(r.id, r.week_ending, r.amount, r.details, r.status)
                })
                .collect(),
        )
    }
}

impl LedgerRepository for JsonLedgerRepository {
    fn load(&self) -> RepositoryResult<Option<Ledger>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        let doc: LedgerDoc =
            serde_json::from_str(&content).map_err(|e| RepositoryError::Malformed {
                message: e.to_string(),
            })?;
        Ok(Some(doc.into_ledger()))
    }

    fn save(&self, ledger: &Ledger) -> RepositoryResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let doc = LedgerDoc::from(ledger);
        let content = serde_json::to_string_pretty(&doc).map_err(|e| {
            RepositoryError::Malformed {
                message: e.to_string(),
            }
        })?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn populated_ledger() -> Ledger {
        let mut ledger = Ledger::with_default_project();
        ledger.add_payment(Payment::new(
            EntityId::new("p1"),
            "250000.50".parse().unwrap(),
            Utc::now(),
            "Medição 1",
            PaymentStatus::Completed,
        ));
        ledger.add_material_request(MaterialRequest::new(
            EntityId::new("m1"),
            "Aço naval A36",
            "20 chapas",
            Urgency::High,
            Utc::now(),
        ));
        ledger.add_work_log(WorkLog::new(
            EntityId::new("w1"),
            "Solda do costado",
            Utc::now(),
            EntityId::new("contractor-1"),
            vec!["aGVsbG8=".to_string()],
        ));
        ledger.add_payroll_request(PayrollRequest::new(
            EntityId::new("pr1"),
            NaiveDate::from_ymd_opt(2024, 6, 7).unwrap(),
            Money::from(5000),
            "3 welders",
        ));
        ledger
    }

    #[test]
    fn load_nonexistent_returns_none() {
        let dir = tempdir().unwrap();
        let repo = JsonLedgerRepository::new(dir.path().join("missing.json"));
        assert!(repo.load().unwrap().is_none());
    }

    #[test]
    fn load_or_default_falls_back_to_seed_project() {
        let dir = tempdir().unwrap();
        let repo = JsonLedgerRepository::new(dir.path().join("missing.json"));
        let ledger = repo.load_or_default().unwrap();
        assert_eq!(ledger.project().title(), "Ferry Boat Manaus-Tabatinga II");
        assert!(ledger.payments().is_empty());
    }

    #[test]
    fn save_and_load_roundtrip_is_field_for_field() {
        let dir = tempdir().unwrap();
        let repo = JsonLedgerRepository::new(dir.path().join("ledger.json"));
        let ledger = populated_ledger();

        repo.save(&ledger).unwrap();
        let loaded = repo.load().unwrap().unwrap();

        assert_eq!(loaded, ledger);
    }

    #[test]
    fn save_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let repo = JsonLedgerRepository::new(dir.path().join("nested").join("dir").join("l.json"));
        repo.save(&Ledger::with_default_project()).unwrap();
        assert!(repo.path().exists());
    }

    #[test]
    fn document_uses_camel_case_keys() {
        let dir = tempdir().unwrap();
        let repo = JsonLedgerRepository::new(dir.path().join("ledger.json"));
        repo.save(&populated_ledger()).unwrap();

        let content = fs::read_to_string(repo.path()).unwrap();
        assert!(content.contains("\"materialRequests\""));
        assert!(content.contains("\"workLogs\""));
        assert!(content.contains("\"payrollRequests\""));
        assert!(content.contains("\"totalValue\""));
        assert!(content.contains("\"weekEnding\""));
        assert!(content.contains("\"status\": \"COMPLETED\""));
    }

    #[test]
    fn partially_shaped_snapshot_defaults_missing_sections() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ledger.json");
        fs::write(
            &path,
            r#"{ "payments": [ { "id": "p1", "amount": "100", "date": "2024-06-07T12:00:00Z",
                 "description": "Medição", "status": "PENDING" } ] }"#,
        )
        .unwrap();

        let repo = JsonLedgerRepository::new(&path);
        let ledger = repo.load().unwrap().unwrap();

        assert_eq!(ledger.payments().len(), 1);
        assert!(ledger.material_requests().is_empty());
        assert!(ledger.work_logs().is_empty());
        assert!(ledger.payroll_requests().is_empty());
        assert_eq!(ledger.project().title(), "Ferry Boat Manaus-Tabatinga II");
    }

    #[test]
    fn corrupt_snapshot_errors_instead_of_wiping() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ledger.json");
        fs::write(&path, "{ not json").unwrap();

        let repo = JsonLedgerRepository::new(&path);
        let err = repo.load().unwrap_err();
        assert!(matches!(err, RepositoryError::Malformed { .. }));
        // The broken file is untouched.
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
    }
}
