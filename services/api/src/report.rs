use crate::infra::load_rule_table;
use clap::Args;
use prenatal_screening::config::AppConfig;
use prenatal_screening::error::AppError;
use prenatal_screening::screening::{
    AnswerSet, Category, CriterionKind, RiskAssessment, RiskEvaluator, RuleTable,
};
use prenatal_screening::telemetry;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// JSON file holding an answer set keyed by category, then question
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// JSON rule table to use instead of APP_RULE_TABLE or the built-in table
    #[arg(long)]
    pub(crate) rules: Option<PathBuf>,
    /// Print the assessment as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct RulesArgs {
    /// JSON rule table to validate and print instead of the configured one
    #[arg(long)]
    pub(crate) rules: Option<PathBuf>,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let EvaluateArgs {
        answers,
        rules,
        json,
    } = args;

    let table = resolve_rule_table(rules)?;
    let answers: AnswerSet = serde_json::from_reader(BufReader::new(File::open(answers)?))?;
    let assessment = RiskEvaluator::new(Arc::new(table)).assess(&answers);

    if json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    } else {
        for line in render_assessment(&assessment) {
            println!("{line}");
        }
    }
    Ok(())
}

pub(crate) fn run_rules(args: RulesArgs) -> Result<(), AppError> {
    let table = resolve_rule_table(args.rules)?;
    for line in render_rule_table(&table) {
        println!("{line}");
    }
    Ok(())
}

/// Load config, install stderr logging, and resolve the rule table for a one-shot command.
fn resolve_rule_table(explicit: Option<PathBuf>) -> Result<RuleTable, AppError> {
    let mut config = AppConfig::load()?;
    if let Some(path) = explicit {
        config.screening.rule_table_path = Some(path);
    }

    telemetry::init_stderr(&config.telemetry)?;
    load_rule_table(config.screening.rule_table_path.as_deref())
}

pub(crate) fn render_assessment(assessment: &RiskAssessment) -> Vec<String> {
    let advice = assessment.level.advice();
    let mut lines = vec![
        format!("Risk level: {}", assessment.level),
        format!(
            "Triggered criteria: {} high, {} medium",
            assessment.high_count, assessment.medium_count
        ),
    ];

    for triggered in &assessment.triggered {
        lines.push(format!(
            "  - [{:?}] {} ({})",
            triggered.risk,
            triggered.id,
            triggered.category.title()
        ));
    }

    lines.push(format!("{}: {}", advice.headline, advice.recommendation));
    lines
}

pub(crate) fn render_rule_table(table: &RuleTable) -> Vec<String> {
    let mut lines = vec![format!("Rule table ({} criteria)", table.len())];

    for category in Category::ALL {
        let criteria: Vec<_> = table.criteria_for(category).collect();
        if criteria.is_empty() {
            continue;
        }
        lines.push(format!("{} [{}]", category.title(), category.key()));
        for criterion in criteria {
            let rule = match criterion.kind {
                CriterionKind::Affirmative => "answered \"Ya\"".to_string(),
                CriterionKind::BloodPressureThreshold {
                    systolic_at_least,
                    diastolic_at_least,
                } => format!(
                    "systolic >= {systolic_at_least} or diastolic >= {diastolic_at_least} mmHg"
                ),
            };
            lines.push(format!(
                "  - {:?} {}: {} ({})",
                criterion.risk, criterion.id, criterion.prompt, rule
            ));
        }
    }

    lines
}
