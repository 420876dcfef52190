use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{
    ArgAction, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};
use tabled::Table;
use tokio_util::sync::CancellationToken;

use featurd::{cli, config, error, region::Region, success, utils, warning};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Extract featured playlist data of a region for one day
    Extract(ExtractArgs),

    /// List the markets of a region
    Markets(MarketsArgs),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ExtractArgs {
    /// Region to extract (AF, AS, EU, NASAOC)
    #[clap(value_parser = utils::parse_region)]
    region: Region,

    /// Day of the featured snapshots (YYYY-MM-DD)
    #[clap(value_parser = utils::parse_date_arg)]
    date: NaiveDate,

    /// Only extract these countries (ISO code); can be repeated
    #[clap(long = "country", action = ArgAction::Append, num_args = 1)]
    countries: Vec<String>,

    /// Directory receiving the featured/ tree
    #[clap(long, default_value = ".")]
    output_dir: PathBuf,

    /// Skip countries already stored for the date
    #[clap(long)]
    skip_existing: bool,

    /// JSON file replacing the built-in market tables
    #[clap(long)]
    markets: Option<PathBuf>,

    /// Hide progress bars
    #[clap(long)]
    quiet: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct MarketsArgs {
    #[clap(value_parser = utils::parse_region)]
    region: Region,

    /// JSON file replacing the built-in market tables
    #[clap(long)]
    markets: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Extract(args) => {
            let cancel = CancellationToken::new();
            let on_signal = cancel.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    warning!("Interrupted, cancelling extraction...");
                    on_signal.cancel();
                }
            });

            let region = args.region;
            let date = args.date;
            let opts = cli::ExtractOptions {
                region,
                date,
                countries: args.countries,
                output_dir: args.output_dir,
                skip_existing: args.skip_existing,
                markets_file: args.markets,
                quiet: args.quiet,
            };

            match cli::extract(opts, cancel).await {
                Ok(rows) => {
                    if !rows.is_empty() {
                        println!("{}", Table::new(rows));
                    }
                    success!(
                        "Extraction for region {} on date {} finished successfully.",
                        region,
                        date
                    );
                }
                Err(e) if e.is_configuration() => error!("Configuration error: {}", e),
                Err(e) => error!("Extraction for region {} aborted: {}", region, e),
            }
        }
        Command::Markets(args) => {
            if let Err(e) = cli::markets(args.region, args.markets.as_deref()).await {
                error!("{}", e);
            }
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
