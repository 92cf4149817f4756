use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use ethers_core::types::U256;
use hermes_sdk::config::global_config;
use hermes_sdk::utils::logging::LogLevel;
use hermes_sdk::{
    compute_vault_address, derive_address, parse_address, CurrencyBalances, RawBalances, SdkConfig, Token,
    TokenInfo,
};
use serde_json::json;

#[derive(Parser)]
#[command(name = "hermes-sdk", version, about = "Vault address derivation and balance aggregation")]
struct Cli {
    /// Minimum log level written to stderr
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Predict the CREATE2 address of the vault for an underlying token
    VaultAddress(VaultAddressArgs),
    /// Aggregate the balance slots of one asset
    Balances(BalancesArgs),
}

#[derive(Args)]
struct VaultAddressArgs {
    #[arg(long)]
    underlying: String,
    /// Factory address; requires --init-code-hash
    #[arg(long, requires = "init_code_hash")]
    factory: Option<String>,
    #[arg(long, requires = "factory")]
    init_code_hash: Option<String>,
    /// Look the factory up in the configured deployments instead
    #[arg(long, conflicts_with = "factory")]
    chain_id: Option<u64>,
}

#[derive(Args)]
struct BalancesArgs {
    /// Asset token address
    #[arg(long)]
    token: String,
    #[arg(long)]
    chain_id: u64,
    #[arg(long, default_value_t = 18)]
    decimals: u8,
    #[arg(long)]
    symbol: Option<String>,
    #[arg(long)]
    native: Option<String>,
    #[arg(long)]
    global: Option<String>,
    #[arg(long)]
    h_token: Option<String>,
    #[arg(long)]
    virtual_native: Option<String>,
    #[arg(long)]
    virtual_global: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(level) = cli.log_level {
        hermes_sdk::utils::logging::set_min_level(level);
    }

    let output = match cli.command {
        Command::VaultAddress(args) => {
            let config = global_config()?;
            // --log-level overrides the configured level
            if let Some(level) = cli.log_level {
                hermes_sdk::utils::logging::set_min_level(level);
            }
            vault_address(config, args)?
        }
        Command::Balances(args) => balances(args)?,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn vault_address(config: &SdkConfig, args: VaultAddressArgs) -> Result<serde_json::Value> {
    let address = match (args.factory, args.init_code_hash, args.chain_id) {
        (Some(factory), Some(hash), _) => derive_address(&factory, &args.underlying, &hash)?,
        (_, _, Some(chain_id)) => compute_vault_address(config, chain_id, &args.underlying)?,
        _ => return Err(anyhow!("pass either --factory and --init-code-hash, or --chain-id")),
    };

    Ok(json!({ "underlying": args.underlying, "vault": address }))
}

fn balances(args: BalancesArgs) -> Result<serde_json::Value> {
    let mut info = TokenInfo::new(args.chain_id, parse_address("token", &args.token)?, args.decimals);
    if let Some(symbol) = args.symbol {
        info = info.with_symbol(symbol);
    }

    let raw = RawBalances {
        native: parse_units("native", args.native)?,
        global: parse_units("global", args.global)?,
        h_token: parse_units("h-token", args.h_token)?,
        virtual_native: parse_units("virtual-native", args.virtual_native)?,
        virtual_global: parse_units("virtual-global", args.virtual_global)?,
    };

    let balances = CurrencyBalances::from_raw(Token::global(info), raw)?;
    Ok(serde_json::to_value(balances.summary())?)
}

fn parse_units(name: &str, value: Option<String>) -> Result<Option<U256>> {
    value
        .map(|v| U256::from_dec_str(v.trim()).with_context(|| format!("--{} must be a decimal integer", name)))
        .transpose()
}
