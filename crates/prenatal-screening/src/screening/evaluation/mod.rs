mod policy;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::domain::{Answer, AnswerSet, Category, RiskLevel, RiskWeight};
use super::rules::{Criterion, CriterionId, RuleTable};
use policy::decide_level;

/// Stateless evaluator that applies the rule table to an answer set.
#[derive(Debug, Clone)]
pub struct RiskEvaluator {
    table: Arc<RuleTable>,
}

impl RiskEvaluator {
    pub fn new(table: Arc<RuleTable>) -> Self {
        Self { table }
    }

    pub fn standard() -> Self {
        Self::new(Arc::new(RuleTable::standard()))
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    pub fn evaluate(&self, answers: &AnswerSet) -> RiskLevel {
        self.assess(answers).level
    }

    /// Evaluate and keep the trail of criteria that fired.
    pub fn assess(&self, answers: &AnswerSet) -> RiskAssessment {
        let mut high_count = 0;
        let mut medium_count = 0;
        let mut triggered = Vec::new();

        for (category, criterion) in self.table.all_criteria() {
            let Some(answer) = lookup(answers, category, criterion) else {
                continue;
            };

            match criterion.kind.check(answer) {
                Some(true) => {}
                Some(false) => continue,
                None => {
                    tracing::warn!(
                        criterion = %criterion.id,
                        %category,
                        kind = criterion.kind.label(),
                        answer = answer.shape(),
                        "answer shape does not match criterion; treating as unanswered"
                    );
                    continue;
                }
            }

            match criterion.risk {
                RiskWeight::High => high_count += 1,
                RiskWeight::Medium => medium_count += 1,
            }
            triggered.push(TriggeredCriterion {
                id: criterion.id.clone(),
                category,
                risk: criterion.risk,
            });
        }

        let level = decide_level(high_count, medium_count);
        tracing::debug!(%level, high_count, medium_count, "risk assessed");

        RiskAssessment {
            level,
            high_count,
            medium_count,
            triggered,
        }
    }
}

/// Prompt text is the primary join key; the stable id is accepted as a fallback.
fn lookup<'a>(
    answers: &'a AnswerSet,
    category: Category,
    criterion: &Criterion,
) -> Option<&'a Answer> {
    answers
        .answer(category, &criterion.prompt)
        .or_else(|| answers.answer(category, criterion.id.as_str()))
}

/// A criterion that contributed to the outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggeredCriterion {
    pub id: CriterionId,
    pub category: Category,
    pub risk: RiskWeight,
}

/// Evaluation output describing the level and how it was reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub level: RiskLevel,
    pub high_count: usize,
    pub medium_count: usize,
    pub triggered: Vec<TriggeredCriterion>,
}
