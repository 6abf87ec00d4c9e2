use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::screening::domain::{
    Answer, AnswerSet, Category, FamilyContact, ScreeningSubmission,
};
use crate::screening::evaluation::RiskEvaluator;
use crate::screening::repository::{
    RepositoryError, ScreeningId, ScreeningRecord, ScreeningRepository,
};
use crate::screening::rules::{RuleTable, BLOOD_PRESSURE_PROMPT};
use crate::screening::{screening_router, ScreeningService};

pub(super) const AMNIOTIC_LEAK: &str = "Apakah Anda mengalami keluar cairan dari jalan lahir?";
pub(super) const EDEMA: &str =
    "Apakah Anda mengalami pembengkakan pada area telapak kaki atau wajah?";
pub(super) const SALTY_FOOD: &str =
    "Apakah anda mempunyai kebiasaan makan makanan yang berasa asin?";
pub(super) const FATTY_FOOD: &str =
    "Apakah anda sering mengkonsumsi makanan berlemak / bersantan sehari hari?";
pub(super) const FAMILY_HYPERTENSION: &str =
    "Apakah Ibu atau saudara perempuan anda mempunyai penyakit hipertensi/darah tinggi?";
pub(super) const KIDNEY_DISEASE: &str = "Apakah anda sedang/pernah mengidap penyakit ginjal?";

pub(super) fn evaluator() -> RiskEvaluator {
    RiskEvaluator::standard()
}

pub(super) fn yes(answers: AnswerSet, category: Category, question: &str) -> AnswerSet {
    answers.with(category, question, Answer::text("Ya"))
}

pub(super) fn no(answers: AnswerSet, category: Category, question: &str) -> AnswerSet {
    answers.with(category, question, Answer::text("Tidak"))
}

/// Every affirmative criterion answered "Tidak" and a normal blood pressure.
pub(super) fn all_negative_answers() -> AnswerSet {
    let table = RuleTable::standard();
    let mut answers = AnswerSet::new();
    for (category, criterion) in table.all_criteria() {
        if criterion.prompt == BLOOD_PRESSURE_PROMPT {
            answers.insert(category, &criterion.prompt, Answer::blood_pressure(110.0, 70.0));
        } else {
            answers.insert(category, &criterion.prompt, Answer::text("Tidak"));
        }
    }
    answers
}

pub(super) fn submission() -> ScreeningSubmission {
    ScreeningSubmission {
        bpjs_number: Some("0001234567890".to_string()),
        weight: 61.5,
        height: 157.0,
        education: "SMA".to_string(),
        family_contact: FamilyContact {
            name: "Siti Rahayu".to_string(),
            address: "Jl. Melati No. 4, Semarang".to_string(),
            phone: "081234567890".to_string(),
            email: "siti@example.com".to_string(),
        },
        health_questions: all_negative_answers(),
    }
}

pub(super) fn high_risk_submission() -> ScreeningSubmission {
    let mut submission = submission();
    submission.health_questions.insert(
        Category::ClinicalSigns,
        BLOOD_PRESSURE_PROMPT,
        Answer::blood_pressure(150.0, 95.0),
    );
    submission
}

pub(super) fn missing_contact_submission() -> ScreeningSubmission {
    let mut submission = submission();
    submission.family_contact.phone = "   ".to_string();
    submission
}

pub(super) fn build_service() -> (ScreeningService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = ScreeningService::new(repository.clone(), Arc::new(RuleTable::standard()));
    (service, repository)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<ScreeningId, ScreeningRecord>>>,
}

impl ScreeningRepository for MemoryRepository {
    fn save(&self, record: ScreeningRecord) -> Result<ScreeningRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn find_by_id(&self, id: &ScreeningId) -> Result<Option<ScreeningRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn find_all(&self) -> Result<Vec<ScreeningRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.values().cloned().collect())
    }
}

pub(super) struct ConflictRepository;

impl ScreeningRepository for ConflictRepository {
    fn save(&self, _record: ScreeningRecord) -> Result<ScreeningRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn find_by_id(&self, _id: &ScreeningId) -> Result<Option<ScreeningRecord>, RepositoryError> {
        Ok(None)
    }

    fn find_all(&self) -> Result<Vec<ScreeningRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl ScreeningRepository for UnavailableRepository {
    fn save(&self, _record: ScreeningRecord) -> Result<ScreeningRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn find_by_id(&self, _id: &ScreeningId) -> Result<Option<ScreeningRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn find_all(&self) -> Result<Vec<ScreeningRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn router_with_service(service: ScreeningService<MemoryRepository>) -> axum::Router {
    screening_router(Arc::new(service))
}
