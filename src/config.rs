use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::address::AddressFormat;
use crate::network::{Network, NetworkRegistry};
use crate::resolution::ResolutionState;
use crate::size::AddressSize;

/// addrview - derive the display state of an EVM address
///
/// Prints what an address widget would show: checksummed or shortened
/// address, resolved name, placeholder state, element sizes, explorer link.
/// Configuration priority: CLI args > Environment variables > Defaults
#[derive(Parser, Debug)]
#[command(name = "addrview")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "EVM address display state", long_about = None)]
pub struct CliArgs {
    /// Address to display (0x followed by 40 hex digits)
    #[arg(env = "ADDRESS")]
    pub address: Option<String>,

    /// Address format: short or long
    #[arg(short, long, env = "ADDRESS_FORMAT", value_parser = clap::value_parser!(AddressFormat))]
    pub format: Option<AddressFormat>,

    /// Requested size: xs, sm, base, lg, xl, 2xl, 3xl
    #[arg(short, long, env = "ADDRESS_SIZE", value_parser = clap::value_parser!(AddressSize))]
    pub size: Option<AddressSize>,

    /// Show only the name or the address, never both
    #[arg(long, env = "ONLY_NAME_OR_ADDRESS")]
    pub only_name_or_address: bool,

    /// Target network name or chain id (used for the explorer link)
    #[arg(short, long, env = "TARGET_NETWORK")]
    pub network: Option<String>,

    /// Override the target network's block explorer URL
    #[arg(long, env = "BLOCK_EXPLORER_URL")]
    pub explorer_url: Option<String>,

    /// TOML file with additional [[network]] entries
    #[arg(long, env = "NETWORKS_FILE")]
    pub networks_file: Option<PathBuf>,

    /// Name reported by the resolver for the address
    #[arg(long, env = "RESOLVED_NAME")]
    pub name: Option<String>,

    /// Avatar URL reported by the resolver for the name
    #[arg(long, env = "RESOLVED_AVATAR")]
    pub avatar: Option<String>,

    /// Report the name lookup as still in flight
    #[arg(long, env = "NAME_LOADING")]
    pub loading: bool,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub address: Option<String>,
    pub format: AddressFormat,
    pub size: AddressSize,
    pub only_name_or_address: bool,
    pub network: Network,
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub loading: bool,
}

impl Config {
    /// Snapshot to use when the name lookup is reported as in flight.
    pub fn loading_snapshot(&self) -> Option<ResolutionState> {
        self.loading.then(ResolutionState::loading)
    }
}

/// Load configuration from CLI args and environment variables
pub fn load() -> Result<Config> {
    from_args(CliArgs::parse())
}

pub fn from_args(args: CliArgs) -> Result<Config> {
    let registry = match args.networks_file.as_deref() {
        Some(path) => NetworkRegistry::from_toml_file(path)?,
        None => NetworkRegistry::default(),
    };

    let network_key = args.network.as_deref().unwrap_or("mainnet");
    let mut network = registry
        .find(network_key)
        .context("Invalid TARGET_NETWORK")?
        .clone();

    if let Some(url) = args.explorer_url {
        validate_url(&url, "BLOCK_EXPLORER_URL")?;
        network = network.with_explorer_url(url);
    }
    log::debug!(
        "[config] network={} ({}) explorer={:?}",
        network.name,
        network.id,
        network.explorer_url
    );

    let address = args
        .address
        .map(|a| a.trim().to_string())
        .filter(|a| !a.is_empty());

    Ok(Config {
        address,
        format: args.format.unwrap_or_default(),
        size: args.size.unwrap_or_default(),
        only_name_or_address: args.only_name_or_address,
        network,
        name: args.name.filter(|n| !n.trim().is_empty()),
        avatar: args.avatar.filter(|u| !u.trim().is_empty()),
        loading: args.loading,
    })
}

/// Validate URL format (basic check)
fn validate_url(url: &str, name: &str) -> Result<()> {
    if url.is_empty() {
        return Err(anyhow!("{name} cannot be empty"));
    }

    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(anyhow!("{name} must start with http:// or https://"))
    }
}
