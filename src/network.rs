//! Network descriptors and block explorer links
//!
//! Built-in networks cover the chains the explorer links are usually built
//! for. Extra networks can be loaded from a TOML file:
//!
//! ```toml
//! [[network]]
//! id = 100
//! name = "gnosis"
//! explorer_url = "https://gnosisscan.io"
//! ```

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Chain id of a local hardhat node
pub const HARDHAT_CHAIN_ID: u64 = 31337;

/// Explorer used when a network has none configured
pub const FALLBACK_EXPLORER_URL: &str = "https://etherscan.io";

/// Route of the in-app explorer served for local chains
pub const LOCAL_EXPLORER_PATH: &str = "/blockexplorer";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    pub id: u64,
    pub name: String,
    /// Base URL of the network's block explorer
    #[serde(default)]
    pub explorer_url: Option<String>,
}

impl Network {
    pub fn new(id: u64, name: impl Into<String>, explorer_url: Option<&str>) -> Self {
        Self {
            id,
            name: name.into(),
            explorer_url: explorer_url.map(str::to_string),
        }
    }

    pub fn mainnet() -> Self {
        Self::new(1, "mainnet", Some("https://etherscan.io"))
    }

    pub fn sepolia() -> Self {
        Self::new(11_155_111, "sepolia", Some("https://sepolia.etherscan.io"))
    }

    pub fn optimism() -> Self {
        Self::new(10, "optimism", Some("https://optimistic.etherscan.io"))
    }

    pub fn arbitrum() -> Self {
        Self::new(42_161, "arbitrum", Some("https://arbiscan.io"))
    }

    pub fn base() -> Self {
        Self::new(8_453, "base", Some("https://basescan.org"))
    }

    pub fn polygon() -> Self {
        Self::new(137, "polygon", Some("https://polygonscan.com"))
    }

    pub fn hardhat() -> Self {
        Self::new(HARDHAT_CHAIN_ID, "hardhat", None)
    }

    pub fn builtin() -> Vec<Network> {
        vec![
            Network::mainnet(),
            Network::sepolia(),
            Network::optimism(),
            Network::arbitrum(),
            Network::base(),
            Network::polygon(),
            Network::hardhat(),
        ]
    }

    /// Replace the explorer base URL.
    pub fn with_explorer_url(mut self, url: impl Into<String>) -> Self {
        self.explorer_url = Some(url.into());
        self
    }

    pub fn is_local(&self) -> bool {
        self.id == HARDHAT_CHAIN_ID
    }

    /// Explorer page for `address` on this network.
    pub fn address_link(&self, address: &str) -> String {
        explorer_address_link(self, address)
    }
}

impl Default for Network {
    fn default() -> Self {
        Network::mainnet()
    }
}

/// Build the explorer URL for an address.
///
/// Local chains link to the in-app explorer; networks without an explorer
/// fall back to etherscan.
pub fn explorer_address_link(network: &Network, address: &str) -> String {
    if network.is_local() {
        return format!("{LOCAL_EXPLORER_PATH}/address/{address}");
    }
    let base = network
        .explorer_url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(FALLBACK_EXPLORER_URL);
    format!("{}/address/{address}", base.trim_end_matches('/'))
}

#[derive(Debug, Default, Deserialize)]
struct NetworksFile {
    #[serde(default, rename = "network")]
    networks: Vec<Network>,
}

/// Set of known networks, looked up by name or chain id.
#[derive(Clone, Debug)]
pub struct NetworkRegistry {
    networks: Vec<Network>,
}

impl Default for NetworkRegistry {
    fn default() -> Self {
        Self {
            networks: Network::builtin(),
        }
    }
}

impl NetworkRegistry {
    /// Built-in networks plus entries from a TOML string.
    ///
    /// An entry whose id matches a built-in network replaces it.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let file: NetworksFile = toml::from_str(s).context("Failed to parse networks TOML")?;
        let mut registry = Self::default();
        for network in file.networks {
            if network.name.trim().is_empty() {
                return Err(anyhow!("Network {} has an empty name", network.id));
            }
            registry.insert(network);
        }
        Ok(registry)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read networks file {}", path.display()))?;
        Self::from_toml_str(&text)
    }

    pub fn insert(&mut self, network: Network) {
        log::debug!("[network] registering {} ({})", network.name, network.id);
        match self.networks.iter_mut().find(|n| n.id == network.id) {
            Some(existing) => *existing = network,
            None => self.networks.push(network),
        }
    }

    pub fn networks(&self) -> &[Network] {
        &self.networks
    }

    pub fn by_id(&self, id: u64) -> Option<&Network> {
        self.networks.iter().find(|n| n.id == id)
    }

    /// Find a network by name (case-insensitive) or numeric chain id.
    pub fn find(&self, key: &str) -> Result<&Network> {
        let key = key.trim();
        if let Ok(id) = key.parse::<u64>() {
            return self
                .by_id(id)
                .ok_or_else(|| anyhow!("Unknown chain id {id}"));
        }
        self.networks
            .iter()
            .find(|n| n.name.eq_ignore_ascii_case(key))
            .ok_or_else(|| {
                let names: Vec<&str> = self.networks.iter().map(|n| n.name.as_str()).collect();
                anyhow!("Unknown network '{key}'. Available: {}", names.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";

    #[test]
    fn test_link_uses_explorer_url() {
        assert_eq!(
            explorer_address_link(&Network::sepolia(), ADDR),
            format!("https://sepolia.etherscan.io/address/{ADDR}")
        );
    }

    #[test]
    fn test_link_strips_trailing_slash() {
        let net = Network::mainnet().with_explorer_url("https://example.org/");
        assert_eq!(net.address_link(ADDR), format!("https://example.org/address/{ADDR}"));
    }

    #[test]
    fn test_link_for_local_chain() {
        assert_eq!(
            Network::hardhat().address_link(ADDR),
            format!("/blockexplorer/address/{ADDR}")
        );
    }

    #[test]
    fn test_link_without_explorer_falls_back() {
        let net = Network::new(999, "devnet", None);
        assert_eq!(
            net.address_link(ADDR),
            format!("https://etherscan.io/address/{ADDR}")
        );
    }

    #[test]
    fn test_registry_lookup() {
        let registry = NetworkRegistry::default();
        assert_eq!(registry.find("Sepolia").unwrap().id, 11_155_111);
        assert_eq!(registry.find("137").unwrap().name, "polygon");
        assert!(registry.find("nope").is_err());
        assert!(registry.find("424242").is_err());
    }

    #[test]
    fn test_registry_from_toml() {
        let registry = NetworkRegistry::from_toml_str(
            r#"
            [[network]]
            id = 100
            name = "gnosis"
            explorer_url = "https://gnosisscan.io"

            [[network]]
            id = 1
            name = "mainnet"
            explorer_url = "https://eth.blockscout.com"
            "#,
        )
        .unwrap();
        assert_eq!(
            registry.find("gnosis").unwrap().explorer_url.as_deref(),
            Some("https://gnosisscan.io")
        );
        assert_eq!(
            registry.by_id(1).unwrap().address_link(ADDR),
            format!("https://eth.blockscout.com/address/{ADDR}")
        );
        assert_eq!(registry.networks().len(), Network::builtin().len() + 1);
    }

    #[test]
    fn test_registry_rejects_bad_toml() {
        assert!(NetworkRegistry::from_toml_str("[[network]]\nid = \"x\"").is_err());
        assert!(NetworkRegistry::from_toml_str("[[network]]\nid = 5\nname = \"\"").is_err());
    }
}
