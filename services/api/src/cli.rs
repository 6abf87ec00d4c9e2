use crate::report::{run_evaluate, run_rules, EvaluateArgs, RulesArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use prenatal_screening::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Prenatal Screening",
    about = "Serve and inspect the pregnancy risk screening service",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a JSON answer set and print the risk level
    Evaluate(EvaluateArgs),
    /// Print the active rule table grouped by category
    Rules(RulesArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// JSON rule table to load instead of APP_RULE_TABLE or the built-in table
    #[arg(long)]
    pub(crate) rules: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Evaluate(args) => run_evaluate(args),
        Command::Rules(args) => run_rules(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_is_optional() {
        let cli = Cli::try_parse_from(["prenatal-screening"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn evaluate_requires_answers() {
        assert!(Cli::try_parse_from(["prenatal-screening", "evaluate"]).is_err());

        let cli = Cli::try_parse_from([
            "prenatal-screening",
            "evaluate",
            "--answers",
            "answers.json",
            "--rules",
            "rules.json",
        ])
        .expect("parses");
        match cli.command {
            Some(Command::Evaluate(args)) => {
                assert_eq!(args.answers, PathBuf::from("answers.json"));
                assert_eq!(args.rules, Some(PathBuf::from("rules.json")));
            }
            other => panic!("expected evaluate command, got {other:?}"),
        }
    }
}
