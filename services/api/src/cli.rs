use crate::search::{run_college_search, run_pg_search, CollegeSearchArgs, PgSearchArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use univera::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "UNIVERA",
    about = "Search the college and PG directory or serve it over HTTP",
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
    /// Filter the college directory and print the matching cards
    Colleges(CollegeSearchArgs),
    /// Filter PG listings and print the matching cards
    Pgs(PgSearchArgs),
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
        Command::Colleges(args) => run_college_search(args).await,
        Command::Pgs(args) => run_pg_search(args).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_college_filters() {
        let cli = Cli::try_parse_from([
            "univera",
            "colleges",
            "--city",
            "Mumbai",
            "--type",
            "Engineering",
            "--min-rating",
            "4.5",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Colleges(args)) => {
                let criteria = args.criteria();
                assert_eq!(criteria.city(), "Mumbai");
                assert_eq!(criteria.kind(), "Engineering");
                assert_eq!(criteria.min_rating(), 4.5);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_budget_label() {
        let cli = Cli::try_parse_from(["univera", "pgs", "--budget", "Under ₹10k"])
            .expect("arguments parse");
        match cli.command {
            Some(Command::Pgs(args)) => {
                assert_eq!(args.criteria().max_fees(), 9_999);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
