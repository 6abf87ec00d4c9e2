//! The rule table: which questions raise risk, and by how much.
//!
//! The table is immutable once built. It can come from the built-in
//! [`RuleTable::standard`] set or from a JSON document shaped like
//!
//! ```json
//! { "categories": [
//!     { "category": "klinis",
//!       "criteria": [ { "id": "klinis.x", "prompt": "...", "risk": "high" } ] } ] }
//! ```

mod criterion;
mod standard;

pub use criterion::{Criterion, CriterionId, CriterionKind};
pub(crate) use standard::BLOOD_PRESSURE_PROMPT;

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::domain::Category;

/// Criteria belonging to one category, in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRules {
    pub category: Category,
    pub criteria: Vec<Criterion>,
}

/// Validated, read-only collection of criteria.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleTable {
    categories: Vec<CategoryRules>,
}

#[derive(Deserialize)]
struct RuleTableDocument {
    categories: Vec<CategoryRules>,
}

impl RuleTable {
    pub fn standard() -> Self {
        Self {
            categories: standard::standard_rules(),
        }
    }

    pub fn from_criteria(categories: Vec<CategoryRules>) -> Result<Self, RuleTableError> {
        validate(&categories)?;
        Ok(Self { categories })
    }

    pub fn from_json_str(raw: &str) -> Result<Self, RuleTableError> {
        let document: RuleTableDocument = serde_json::from_str(raw)?;
        Self::from_criteria(document.categories)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, RuleTableError> {
        let document: RuleTableDocument = serde_json::from_reader(reader)?;
        Self::from_criteria(document.categories)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, RuleTableError> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    /// Every criterion with its category, in declaration order.
    pub fn all_criteria(&self) -> impl Iterator<Item = (Category, &Criterion)> + '_ {
        self.categories.iter().flat_map(|rules| {
            rules
                .criteria
                .iter()
                .map(move |criterion| (rules.category, criterion))
        })
    }

    pub fn criteria_for(&self, category: Category) -> impl Iterator<Item = &Criterion> + '_ {
        self.all_criteria()
            .filter(move |(owner, _)| *owner == category)
            .map(|(_, criterion)| criterion)
    }

    pub fn categories(&self) -> &[CategoryRules] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.iter().map(|rules| rules.criteria.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn validate(categories: &[CategoryRules]) -> Result<(), RuleTableError> {
    let mut ids = HashSet::new();
    let mut prompts = HashSet::new();
    let mut total = 0usize;

    for rules in categories {
        for criterion in &rules.criteria {
            total += 1;

            if criterion.id.as_str().trim().is_empty() {
                return Err(RuleTableError::BlankId {
                    category: rules.category,
                });
            }
            if criterion.prompt.trim().is_empty() {
                return Err(RuleTableError::BlankPrompt {
                    id: criterion.id.clone(),
                });
            }
            if !ids.insert(criterion.id.clone()) {
                return Err(RuleTableError::DuplicateId {
                    id: criterion.id.clone(),
                });
            }
            if !prompts.insert((rules.category, criterion.prompt.as_str())) {
                return Err(RuleTableError::DuplicatePrompt {
                    category: rules.category,
                    prompt: criterion.prompt.clone(),
                });
            }
            if let CriterionKind::BloodPressureThreshold {
                systolic_at_least,
                diastolic_at_least,
            } = criterion.kind
            {
                let valid = |value: f64| value.is_finite() && value > 0.0;
                if !valid(systolic_at_least) || !valid(diastolic_at_least) {
                    return Err(RuleTableError::InvalidThreshold {
                        id: criterion.id.clone(),
                    });
                }
            }
        }
    }

    if total == 0 {
        return Err(RuleTableError::Empty);
    }
    Ok(())
}

/// Reasons a rule table cannot be used. All of these are startup configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum RuleTableError {
    #[error("rule table contains no criteria")]
    Empty,
    #[error("criterion in category {category} has a blank id")]
    BlankId { category: Category },
    #[error("criterion {id} has a blank prompt")]
    BlankPrompt { id: CriterionId },
    #[error("criterion id {id} is declared more than once")]
    DuplicateId { id: CriterionId },
    #[error("prompt is declared more than once in category {category}: {prompt}")]
    DuplicatePrompt { category: Category, prompt: String },
    #[error("criterion {id} has a non-positive or non-finite threshold")]
    InvalidThreshold { id: CriterionId },
    #[error("rule table is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read rule table: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screening::domain::RiskWeight;

    #[test]
    fn standard_table_passes_validation() {
        let table = RuleTable::standard();
        let rebuilt = RuleTable::from_criteria(table.categories().to_vec())
            .expect("standard table validates");
        assert_eq!(rebuilt, table);
        assert_eq!(table.len(), 17);
    }

    #[test]
    fn all_criteria_is_restartable_and_ordered() {
        let table = RuleTable::standard();
        let first: Vec<_> = table
            .all_criteria()
            .map(|(category, criterion)| (category, criterion.id.clone()))
            .collect();
        let second: Vec<_> = table
            .all_criteria()
            .map(|(category, criterion)| (category, criterion.id.clone()))
            .collect();
        assert_eq!(first, second);

        let categories: Vec<_> = first.iter().map(|(category, _)| *category).collect();
        let mut sorted = categories.clone();
        sorted.sort();
        assert_eq!(categories, sorted, "declaration order groups categories");
    }

    #[test]
    fn criteria_for_filters_by_category() {
        let table = RuleTable::standard();
        assert_eq!(table.criteria_for(Category::FamilyHealthHistory).count(), 2);
        assert!(table
            .criteria_for(Category::DietaryHabits)
            .all(|criterion| criterion.risk == RiskWeight::Medium));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let criteria = vec![CategoryRules {
            category: Category::ClinicalSigns,
            criteria: vec![
                Criterion::affirmative("klinis.a", "A?", RiskWeight::High),
                Criterion::affirmative("klinis.a", "B?", RiskWeight::Medium),
            ],
        }];
        match RuleTable::from_criteria(criteria) {
            Err(RuleTableError::DuplicateId { id }) => assert_eq!(id.as_str(), "klinis.a"),
            other => panic!("expected duplicate id, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_prompts_are_rejected_within_a_category_only() {
        let shared = vec![
            CategoryRules {
                category: Category::ClinicalSigns,
                criteria: vec![Criterion::affirmative("klinis.a", "Same?", RiskWeight::High)],
            },
            CategoryRules {
                category: Category::DietaryHabits,
                criteria: vec![Criterion::affirmative(
                    "diet.a",
                    "Same?",
                    RiskWeight::Medium,
                )],
            },
        ];
        assert!(RuleTable::from_criteria(shared).is_ok());

        let clashing = vec![CategoryRules {
            category: Category::ClinicalSigns,
            criteria: vec![
                Criterion::affirmative("klinis.a", "Same?", RiskWeight::High),
                Criterion::affirmative("klinis.b", "Same?", RiskWeight::High),
            ],
        }];
        assert!(matches!(
            RuleTable::from_criteria(clashing),
            Err(RuleTableError::DuplicatePrompt { .. })
        ));
    }

    #[test]
    fn empty_tables_and_blank_fields_are_rejected() {
        assert!(matches!(
            RuleTable::from_criteria(Vec::new()),
            Err(RuleTableError::Empty)
        ));

        let blank_prompt = vec![CategoryRules {
            category: Category::ClinicalSigns,
            criteria: vec![Criterion::affirmative("klinis.a", "  ", RiskWeight::High)],
        }];
        assert!(matches!(
            RuleTable::from_criteria(blank_prompt),
            Err(RuleTableError::BlankPrompt { .. })
        ));

        let blank_id = vec![CategoryRules {
            category: Category::ClinicalSigns,
            criteria: vec![Criterion::affirmative("", "A?", RiskWeight::High)],
        }];
        assert!(matches!(
            RuleTable::from_criteria(blank_id),
            Err(RuleTableError::BlankId { .. })
        ));
    }

    #[test]
    fn invalid_thresholds_are_rejected() {
        let criteria = vec![CategoryRules {
            category: Category::ClinicalSigns,
            criteria: vec![Criterion::blood_pressure(
                "klinis.bp",
                "Tekanan darah?",
                RiskWeight::High,
                f64::NAN,
                90.0,
            )],
        }];
        assert!(matches!(
            RuleTable::from_criteria(criteria),
            Err(RuleTableError::InvalidThreshold { .. })
        ));
    }

    #[test]
    fn json_documents_load_with_default_kind() {
        let raw = r#"{
            "categories": [
                { "category": "klinis", "criteria": [
                    { "id": "klinis.leak", "prompt": "Keluar cairan?", "risk": "high" },
                    { "id": "klinis.bp", "prompt": "Tekanan darah?", "risk": "high",
                      "kind": { "type": "blood_pressure_threshold",
                                "systolic_at_least": 160, "diastolic_at_least": 110 } }
                ] }
            ]
        }"#;
        let table = RuleTable::from_json_str(raw).expect("table loads");
        let kinds: Vec<_> = table
            .all_criteria()
            .map(|(_, criterion)| criterion.kind.label())
            .collect();
        assert_eq!(kinds, vec!["affirmative", "blood_pressure_threshold"]);
    }

    #[test]
    fn unknown_weights_and_categories_fail_to_load() {
        let bad_weight = r#"{ "categories": [ { "category": "klinis", "criteria": [
            { "id": "a", "prompt": "A?", "risk": "critical" } ] } ] }"#;
        assert!(matches!(
            RuleTable::from_json_str(bad_weight),
            Err(RuleTableError::Parse(_))
        ));

        let bad_category = r#"{ "categories": [ { "category": "lifestyle", "criteria": [
            { "id": "a", "prompt": "A?", "risk": "high" } ] } ] }"#;
        assert!(matches!(
            RuleTable::from_json_str(bad_category),
            Err(RuleTableError::Parse(_))
        ));
    }

    #[test]
    fn missing_files_surface_io_errors() {
        assert!(matches!(
            RuleTable::from_path("/nonexistent/prenatal-rules.json"),
            Err(RuleTableError::Io(_))
        ));
    }
}
