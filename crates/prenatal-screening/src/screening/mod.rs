//! Pregnancy risk screening: the rule table, the evaluator, and the intake pipeline
//! that stores scored submissions.

pub mod catalog;
pub mod domain;
pub mod evaluation;
pub(crate) mod intake;
pub mod repository;
pub mod router;
pub mod rules;
pub mod service;

#[cfg(test)]
mod tests;

pub use catalog::{QuestionCatalog, QuestionDefinition, QuestionInput};
pub use domain::{
    Answer, AnswerSet, BloodPressureReading, Category, FamilyContact, RiskAdvice, RiskLevel,
    RiskWeight, ScreeningSubmission, AFFIRMATIVE_MARKER,
};
pub use evaluation::{RiskAssessment, RiskEvaluator, TriggeredCriterion};
pub use intake::{IntakeGuard, IntakeViolation};
pub use repository::{
    RepositoryError, ScreeningId, ScreeningRecord, ScreeningRepository, ScreeningView,
};
pub use router::screening_router;
pub use rules::{CategoryRules, Criterion, CriterionId, CriterionKind, RuleTable, RuleTableError};
pub use service::{ScreeningService, ScreeningServiceError};
