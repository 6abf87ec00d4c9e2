use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::domain::{AnswerSet, ScreeningSubmission};
use super::evaluation::{RiskAssessment, RiskEvaluator};
use super::intake::{IntakeGuard, IntakeViolation};
use super::repository::{RepositoryError, ScreeningId, ScreeningRecord, ScreeningRepository};
use super::rules::RuleTable;

/// Service composing intake validation, risk evaluation, and persistence.
pub struct ScreeningService<R> {
    guard: IntakeGuard,
    evaluator: RiskEvaluator,
    repository: Arc<R>,
}

static SCREENING_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_screening_id() -> ScreeningId {
    let id = SCREENING_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ScreeningId(format!("scr-{id:06}"))
}

impl<R> ScreeningService<R>
where
    R: ScreeningRepository + 'static,
{
    pub fn new(repository: Arc<R>, table: Arc<RuleTable>) -> Self {
        Self {
            guard: IntakeGuard,
            evaluator: RiskEvaluator::new(table),
            repository,
        }
    }

    pub fn evaluator(&self) -> &RiskEvaluator {
        &self.evaluator
    }

    /// Validate, score, and store a new submission.
    pub fn submit(
        &self,
        submission: ScreeningSubmission,
    ) -> Result<ScreeningRecord, ScreeningServiceError> {
        self.guard.validate(&submission)?;

        let assessment = self.evaluator.assess(&submission.health_questions);
        let record = ScreeningRecord::new(
            next_screening_id(),
            submission,
            assessment.level,
            Utc::now(),
        );

        let stored = self.repository.save(record)?;
        info!(
            screening_id = %stored.id.0,
            risk_level = %assessment.level,
            high_count = assessment.high_count,
            medium_count = assessment.medium_count,
            "screening stored"
        );
        Ok(stored)
    }

    /// Score answers without storing anything.
    pub fn assess(&self, answers: &AnswerSet) -> RiskAssessment {
        self.evaluator.assess(answers)
    }

    pub fn get(&self, id: &ScreeningId) -> Result<ScreeningRecord, ScreeningServiceError> {
        let record = self
            .repository
            .find_by_id(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn list(&self) -> Result<Vec<ScreeningRecord>, ScreeningServiceError> {
        Ok(self.repository.find_all()?)
    }
}

/// Error raised by the screening service.
#[derive(Debug, thiserror::Error)]
pub enum ScreeningServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeViolation),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
