use crate::demo::{run_analyze, run_catalog, run_demo, AnalyzeArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use decision_support::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Criminal Justice Decision Support",
    about = "Run the decision support demo service or explore case outcomes from the command line",
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
    /// Score a single case and print every outcome category
    Analyze(AnalyzeArgs),
    /// List the accepted values for each case parameter
    Catalog,
    /// Walk through the sign-in, case parameter, and results screens
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Analyze(args) => run_analyze(args),
        Command::Catalog => run_catalog(),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use decision_support::analysis::{County, PriorConvictions, TopCharge};

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn missing_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["decision-support-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn analyze_accepts_display_labels() {
        let cli = Cli::try_parse_from([
            "decision-support-api",
            "analyze",
            "--county",
            "New York",
            "--court-type",
            "Superior",
            "--top-charge",
            "PL 160.15 - Robbery 1st",
            "--pending-cases",
            "Open Misdemeanor",
            "--on-supervision",
            "Null",
            "--prior-convictions",
            "Prior VFO",
            "--json",
        ])
        .expect("parses");

        let Some(Command::Analyze(args)) = cli.command else {
            panic!("expected analyze command");
        };
        assert_eq!(args.county, County::NewYork);
        assert_eq!(args.top_charge, TopCharge::Robbery1st);
        assert_eq!(args.prior_convictions, PriorConvictions::ViolentFelony);
        assert!(args.json);
    }

    #[test]
    fn analyze_rejects_unknown_labels() {
        let err = Cli::try_parse_from([
            "decision-support-api",
            "analyze",
            "--county",
            "Albany",
            "--court-type",
            "Local",
            "--top-charge",
            "PL 120.00 - Assault 3rd",
            "--pending-cases",
            "No open cases",
            "--on-supervision",
            "No",
            "--prior-convictions",
            "No prior convictions",
        ])
        .expect_err("county outside the option list");

        assert!(err.to_string().contains("'Albany' is not a valid"));
    }
}
