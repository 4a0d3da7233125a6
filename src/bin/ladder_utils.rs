//! # Ladder Utils CLI
//!
//! Command-line front end for the address, explorer-link, slippage and gas helpers.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use ethers::types::U256;
use ladder_utils::application::services::slippage::{calculate_slippage_amount, SlippageTolerance};
use ladder_utils::config::AppConfig;
use ladder_utils::domain::value_objects::{
    is_address, shorten_address, ChainId, DEFAULT_SHORTEN_CHARS,
};
use ladder_utils::infrastructure::blockchain::{
    get_etherscan_link, install_global_registry, ExplorerRegistry, LinkKind,
};
use ladder_utils::telemetry;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "ladder-utils", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate an address and print its checksummed form.
    Address {
        /// Address to validate.
        input: String,
    },
    /// Shorten an address to `0x1234...abcd`.
    Shorten {
        /// Address to shorten.
        input: String,
        /// Hex digits kept on each side.
        #[arg(long, default_value_t = DEFAULT_SHORTEN_CHARS)]
        chars: usize,
    },
    /// Print a block explorer link.
    Link {
        /// Numeric chain ID.
        #[arg(long, default_value_t = 1)]
        chain: u64,
        /// transaction, token, address or block.
        #[arg(long, default_value = "transaction")]
        kind: String,
        /// Hash, address or block number.
        data: String,
    },
    /// Print the slippage bounds around a raw amount.
    Slippage {
        /// Raw integer amount.
        value: String,
        /// Tolerance in basis points; defaults to the configured value.
        #[arg(long)]
        bps: Option<u32>,
    },
    /// Print a gas estimate with the configured margin applied.
    Gas {
        /// Raw gas estimate.
        estimate: String,
    },
}

fn parse_amount(raw: &str) -> anyhow::Result<U256> {
    U256::from_dec_str(raw).with_context(|| format!("not a non-negative integer: {raw}"))
}

fn main() -> anyhow::Result<()> {
    // `--help` and usage errors exit here, before any config is read.
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = AppConfig::load()?;
    telemetry::init(&config.log)?;

    if install_global_registry(ExplorerRegistry::from_config(&config.explorers)).is_err() {
        bail!("explorer registry already installed");
    }

    run(cli.command, &config)
}

fn run(command: Command, config: &AppConfig) -> anyhow::Result<()> {
    info!(command = ?command, "running");

    match command {
        Command::Address { input } => match is_address(&input) {
            Some(address) => println!("{address}"),
            None => bail!("invalid address: {input}"),
        },
        Command::Shorten { input, chars } => println!("{}", shorten_address(&input, chars)?),
        Command::Link { chain, kind, data } => {
            let kind: LinkKind = kind.parse()?;
            println!("{}", get_etherscan_link(ChainId::new(chain), &data, kind)?);
        }
        Command::Slippage { value, bps } => {
            let tolerance = match bps {
                Some(bps) => SlippageTolerance::new(bps)?,
                None => SlippageTolerance::new(config.slippage.default_bps)?,
            };
            let bound = calculate_slippage_amount(parse_amount(&value)?, tolerance.bps())?;
            println!("tolerance: {tolerance}");
            println!("min: {}", bound.lower());
            println!("max: {}", bound.upper());
            println!("spread: {}", bound.width());
        }
        Command::Gas { estimate } => {
            let margin = config.gas.margin();
            println!("{}", margin.apply(parse_amount(&estimate)?));
        }
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn help_is_answered_by_the_parser() {
        let err = Cli::try_parse_from(["ladder-utils", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn parses_slippage_with_default_bps() {
        let cli = Cli::try_parse_from(["ladder-utils", "slippage", "1000"]).unwrap();
        assert!(matches!(cli.command, Command::Slippage { ref value, bps: None } if value == "1000"));
    }

    #[test]
    fn run_uses_configured_defaults() {
        let config = AppConfig::default();
        let command = Command::Gas {
            estimate: "100000".to_string(),
        };
        assert!(run(command, &config).is_ok());
        assert!(run(Command::Gas { estimate: "-1".to_string() }, &config).is_err());
    }
}
