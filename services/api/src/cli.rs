use crate::render::{run_repair_costs, run_valuate, RepairCostsArgs, ValuateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use mot_valuation::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "MOT Valuation",
    about = "Score used-vehicle purchases from MOT inspection history",
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
    /// Value a vehicle from a saved MOT history document
    Valuate(ValuateArgs),
    /// Print the repair-cost catalog, or the recurring issues in a history
    RepairCosts(RepairCostsArgs),
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
        Command::Valuate(args) => run_valuate(args),
        Command::RepairCosts(args) => run_repair_costs(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["mot-valuation"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn valuate_requires_positive_asking_price() {
        let parsed = Cli::try_parse_from([
            "mot-valuation",
            "valuate",
            "--history",
            "history.json",
            "--asking-price",
            "4995.50",
        ])
        .expect("parses");
        match parsed.command {
            Some(Command::Valuate(args)) => assert_eq!(args.asking_price, 4995.5),
            other => panic!("expected valuate command, got {other:?}"),
        }

        let rejected = Cli::try_parse_from([
            "mot-valuation",
            "valuate",
            "--history",
            "history.json",
            "--asking-price",
            "-10",
        ]);
        assert!(rejected.is_err());
    }
}
