use clap::{
    ArgAction, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use changecli::{cli, config, error, utils};

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
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Check connectivity to the coin-change service
    Health(HealthOptions),

    /// Calculate the minimum-coin breakdown for an amount
    Calculate(CalculateOptions),

    /// Manage the selected denominations
    Denominations(DenominationsOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct HealthOptions {
    /// Base URL of the coin-change service for this invocation
    #[clap(long)]
    pub api_url: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CalculateOptions {
    /// Amount to make change for (e.g. 0.41)
    pub amount: String,

    /// Denomination(s) to use instead of the stored selection; can be repeated
    #[clap(
        long = "denomination",
        short = 'd',
        value_parser = utils::parse_denomination,
        action = ArgAction::Append,
        num_args = 1
    )]
    pub denominations: Vec<utils::Denomination>,

    /// Use the whole denomination catalog
    #[clap(long, conflicts_with = "denominations")]
    pub all: bool,

    /// Base URL of the coin-change service for this invocation
    #[clap(long)]
    pub api_url: Option<String>,
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Manage the selected denominations")]
pub struct DenominationsOptions {
    /// Subcommands under `denominations` (e.g., `select`)
    #[command(subcommand)]
    pub command: Option<DenominationsSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum DenominationsSubcommand {
    /// Add denomination(s) to the selection
    Select(DenominationValuesOpts),

    /// Remove denomination(s) from the selection
    Deselect(DenominationValuesOpts),

    /// Select the whole catalog
    SelectAll,

    /// Empty the selection
    Clear,

    /// Show the denominations the service advertises as valid
    Remote(RemoteOpts),
}

#[derive(Parser, Debug, Clone)]
pub struct DenominationValuesOpts {
    /// Catalog value(s) such as 0.05 or 1000.00
    #[clap(value_parser = utils::parse_denomination, required = true)]
    pub values: Vec<utils::Denomination>,
}

#[derive(Parser, Debug, Clone)]
pub struct RemoteOpts {
    /// Base URL of the coin-change service for this invocation
    #[clap(long)]
    pub api_url: Option<String>,
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
        Command::Health(opt) => cli::health(opt.api_url).await,
        Command::Calculate(opt) => {
            cli::calculate(opt.amount, opt.denominations, opt.all, opt.api_url).await
        }
        Command::Denominations(opt) => match opt.command {
            Some(DenominationsSubcommand::Select(o)) => cli::select_denominations(o.values).await,
            Some(DenominationsSubcommand::Deselect(o)) => {
                cli::deselect_denominations(o.values).await
            }
            Some(DenominationsSubcommand::SelectAll) => cli::select_all_denominations().await,
            Some(DenominationsSubcommand::Clear) => cli::clear_denominations().await,
            Some(DenominationsSubcommand::Remote(o)) => cli::remote_denominations(o.api_url).await,
            None => cli::list_denominations().await,
        },
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
