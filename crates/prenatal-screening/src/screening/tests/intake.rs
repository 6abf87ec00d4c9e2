use super::common::*;
use crate::screening::intake::{IntakeGuard, IntakeViolation};

#[test]
fn complete_submission_passes() {
    assert_eq!(IntakeGuard.validate(&submission()), Ok(()));
}

#[test]
fn partial_health_answers_are_not_an_intake_concern() {
    let mut submission = submission();
    submission.health_questions = Default::default();
    assert_eq!(IntakeGuard.validate(&submission), Ok(()));
}

#[test]
fn non_positive_measurements_are_rejected() {
    let mut submission = submission();
    submission.weight = 0.0;
    assert_eq!(
        IntakeGuard.validate(&submission),
        Err(IntakeViolation::InvalidWeight(0.0))
    );

    let mut submission = super::common::submission();
    submission.height = -150.0;
    assert_eq!(
        IntakeGuard.validate(&submission),
        Err(IntakeViolation::InvalidHeight(-150.0))
    );
}

#[test]
fn required_text_fields_are_checked() {
    let mut submission = submission();
    submission.education = " ".to_string();
    assert_eq!(
        IntakeGuard.validate(&submission),
        Err(IntakeViolation::MissingEducation)
    );

    let mut submission = super::common::submission();
    submission.family_contact.name.clear();
    assert_eq!(
        IntakeGuard.validate(&submission),
        Err(IntakeViolation::MissingContactName)
    );

    assert_eq!(
        IntakeGuard.validate(&missing_contact_submission()),
        Err(IntakeViolation::MissingContactPhone)
    );
}
