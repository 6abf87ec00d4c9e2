use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{AnswerSet, FamilyContact, RiskAdvice, RiskLevel, ScreeningSubmission};

/// Identifier wrapper for stored screenings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ScreeningId(pub String);

/// Persisted screening: the raw submission plus the computed risk level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningRecord {
    pub id: ScreeningId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bpjs_number: Option<String>,
    pub weight: f64,
    pub height: f64,
    pub education: String,
    pub family_contact: FamilyContact,
    pub health_questions: AnswerSet,
    pub risk_level: RiskLevel,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ScreeningRecord {
    pub fn new(
        id: ScreeningId,
        submission: ScreeningSubmission,
        risk_level: RiskLevel,
        now: DateTime<Utc>,
    ) -> Self {
        let ScreeningSubmission {
            bpjs_number,
            weight,
            height,
            education,
            family_contact,
            health_questions,
        } = submission;

        Self {
            id,
            bpjs_number,
            weight,
            height,
            education,
            family_contact,
            health_questions,
            risk_level,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn status_view(&self) -> ScreeningView {
        ScreeningView {
            id: self.id.clone(),
            risk_level: self.risk_level,
            advice: self.risk_level.advice(),
            contact_name: self.family_contact.name.clone(),
            contact_address: self.family_contact.address.clone(),
            screened_at: self.created_at,
        }
    }
}

/// Storage abstraction so the service can be exercised in isolation.
pub trait ScreeningRepository: Send + Sync {
    fn save(&self, record: ScreeningRecord) -> Result<ScreeningRecord, RepositoryError>;
    fn find_by_id(&self, id: &ScreeningId) -> Result<Option<ScreeningRecord>, RepositoryError>;
    fn find_all(&self) -> Result<Vec<ScreeningRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Result-screen projection of a stored screening.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningView {
    pub id: ScreeningId,
    pub risk_level: RiskLevel,
    pub advice: RiskAdvice,
    pub contact_name: String,
    pub contact_address: String,
    pub screened_at: DateTime<Utc>,
}
