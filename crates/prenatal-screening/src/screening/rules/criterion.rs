use std::fmt;

use serde::{Deserialize, Serialize};

use super::super::domain::{Answer, RiskWeight, AFFIRMATIVE_MARKER};

/// Stable identifier for a criterion, independent of its prompt wording.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CriterionId(pub String);

impl CriterionId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CriterionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How an answer is tested against a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CriterionKind {
    /// Triggered by the literal affirmative marker.
    #[default]
    Affirmative,
    /// Triggered when either reading reaches its threshold.
    BloodPressureThreshold {
        systolic_at_least: f64,
        diastolic_at_least: f64,
    },
}

impl CriterionKind {
    /// `None` when the answer's shape does not fit this kind of criterion.
    pub fn check(&self, answer: &Answer) -> Option<bool> {
        match (self, answer) {
            (CriterionKind::Affirmative, Answer::Text(value)) => {
                Some(value == AFFIRMATIVE_MARKER)
            }
            (
                CriterionKind::BloodPressureThreshold {
                    systolic_at_least,
                    diastolic_at_least,
                },
                Answer::BloodPressure(reading),
            ) => Some(
                reading.systolic.is_some_and(|value| value >= *systolic_at_least)
                    || reading
                        .diastolic
                        .is_some_and(|value| value >= *diastolic_at_least),
            ),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CriterionKind::Affirmative => "affirmative",
            CriterionKind::BloodPressureThreshold { .. } => "blood_pressure_threshold",
        }
    }
}

/// A screening question paired with the weight it carries when triggered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub id: CriterionId,
    pub prompt: String,
    pub risk: RiskWeight,
    #[serde(default)]
    pub kind: CriterionKind,
}

impl Criterion {
    pub fn affirmative(id: &str, prompt: &str, risk: RiskWeight) -> Self {
        Self {
            id: CriterionId::new(id),
            prompt: prompt.to_string(),
            risk,
            kind: CriterionKind::Affirmative,
        }
    }

    pub fn blood_pressure(
        id: &str,
        prompt: &str,
        risk: RiskWeight,
        systolic_at_least: f64,
        diastolic_at_least: f64,
    ) -> Self {
        Self {
            id: CriterionId::new(id),
            prompt: prompt.to_string(),
            risk,
            kind: CriterionKind::BloodPressureThreshold {
                systolic_at_least,
                diastolic_at_least,
            },
        }
    }
}
