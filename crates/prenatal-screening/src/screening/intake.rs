use super::domain::ScreeningSubmission;

/// Validation errors raised before a submission is scored.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum IntakeViolation {
    #[error("weight must be a positive number of kilograms (found {0})")]
    InvalidWeight(f64),
    #[error("height must be a positive number of centimetres (found {0})")]
    InvalidHeight(f64),
    #[error("education level is required")]
    MissingEducation,
    #[error("family contact name is required")]
    MissingContactName,
    #[error("family contact phone is required")]
    MissingContactPhone,
}

/// Guard applying the form's required-field rules to incoming submissions.
///
/// Only submitter metadata is checked. Health answers may be partial.
#[derive(Debug, Clone, Default)]
pub struct IntakeGuard;

impl IntakeGuard {
    pub fn validate(&self, submission: &ScreeningSubmission) -> Result<(), IntakeViolation> {
        if !is_positive(submission.weight) {
            return Err(IntakeViolation::InvalidWeight(submission.weight));
        }
        if !is_positive(submission.height) {
            return Err(IntakeViolation::InvalidHeight(submission.height));
        }
        if submission.education.trim().is_empty() {
            return Err(IntakeViolation::MissingEducation);
        }
        if submission.family_contact.name.trim().is_empty() {
            return Err(IntakeViolation::MissingContactName);
        }
        if submission.family_contact.phone.trim().is_empty() {
            return Err(IntakeViolation::MissingContactPhone);
        }
        Ok(())
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
