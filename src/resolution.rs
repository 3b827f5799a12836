//! Name/avatar resolution: snapshot type, lookup planning, resolver trait
//!
//! The lookups themselves belong to a collaborator behind [`NameResolver`].
//! This module decides which lookups should run, on which chain and for how
//! long results may be cached, and folds their results into the
//! [`ResolutionState`] snapshot the display reads.

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

use crate::address::is_valid_address;

/// Names are always resolved against mainnet, whatever the target network.
pub const NAME_RESOLUTION_CHAIN_ID: u64 = 1;

/// How long a resolved avatar may be kept by the collaborator's cache.
pub const AVATAR_CACHE_TTL: Duration = Duration::from_secs(30);

/// Latest result reported by the resolution collaborator.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionState {
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    /// Name lookup still in flight
    pub name_loading: bool,
}

impl ResolutionState {
    /// Nothing requested yet, or nothing found.
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn loading() -> Self {
        Self {
            name_loading: true,
            ..Self::default()
        }
    }

    pub fn resolved(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_avatar(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = Some(url.into());
        self
    }

    /// Resolved name, treating an empty string as no name.
    pub fn resolved_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }

    pub fn resolved_avatar(&self) -> Option<&str> {
        self.avatar_url.as_deref().filter(|u| !u.is_empty())
    }
}

/// Normalize a name before it is used as a lookup key.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Name lookup to issue for an address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameQuery {
    pub address: Option<String>,
    pub chain_id: u64,
    pub enabled: bool,
}

impl NameQuery {
    /// Plan the lookup for a canonical address; disabled unless it is valid.
    pub fn plan(canonical: Option<&str>) -> Self {
        let enabled = canonical.map(is_valid_address).unwrap_or(false);
        Self {
            address: canonical.map(str::to_string),
            chain_id: NAME_RESOLUTION_CHAIN_ID,
            enabled,
        }
    }
}

/// Avatar lookup to issue for a resolved name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AvatarQuery {
    /// Normalized name
    pub name: Option<String>,
    pub chain_id: u64,
    pub enabled: bool,
    pub cache_ttl: Duration,
}

impl AvatarQuery {
    pub fn plan(name: Option<&str>) -> Self {
        let name = name.filter(|n| !n.trim().is_empty()).map(normalize_name);
        Self {
            enabled: name.is_some(),
            name,
            chain_id: NAME_RESOLUTION_CHAIN_ID,
            cache_ttl: AVATAR_CACHE_TTL,
        }
    }
}

/// Collaborator performing the actual lookups.
#[async_trait]
pub trait NameResolver: Send + Sync {
    /// Reverse-resolve an address to its primary name.
    async fn resolve_name(&self, address: &str, chain_id: u64) -> Result<Option<String>>;

    /// Resolve the avatar URL for a normalized name.
    async fn resolve_avatar(&self, name: &str, chain_id: u64) -> Result<Option<String>>;
}

/// Run the enabled lookups once and return the settled snapshot.
///
/// Resolver failures are logged and reported as "nothing resolved".
pub async fn snapshot(resolver: &dyn NameResolver, canonical: Option<&str>) -> ResolutionState {
    let name_query = NameQuery::plan(canonical);
    let (Some(address), true) = (name_query.address.as_deref(), name_query.enabled) else {
        log::trace!("[resolution] name lookup disabled for {:?}", canonical);
        return ResolutionState::idle();
    };

    let name = match resolver.resolve_name(address, name_query.chain_id).await {
        Ok(name) => name.filter(|n| !n.is_empty()),
        Err(e) => {
            log::warn!("[resolution] name lookup for {address} failed: {e:#}");
            None
        }
    };

    let avatar_query = AvatarQuery::plan(name.as_deref());
    let avatar_url = match (avatar_query.name.as_deref(), avatar_query.enabled) {
        (Some(normalized), true) => {
            match resolver.resolve_avatar(normalized, avatar_query.chain_id).await {
                Ok(url) => url,
                Err(e) => {
                    log::warn!("[resolution] avatar lookup for {normalized} failed: {e:#}");
                    None
                }
            }
        }
        _ => None,
    };

    log::debug!(
        "[resolution] {address} -> name={:?} avatar={:?}",
        name,
        avatar_url
    );
    ResolutionState {
        name,
        avatar_url,
        name_loading: false,
    }
}

/// In-memory resolver backed by fixed tables.
#[derive(Clone, Debug, Default)]
pub struct StaticResolver {
    names: HashMap<String, String>,
    avatars: HashMap<String, String>,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a name for an address (matched case-insensitively).
    pub fn with_name(mut self, address: &str, name: impl Into<String>) -> Self {
        self.names.insert(address.to_ascii_lowercase(), name.into());
        self
    }

    /// Register an avatar for a name (matched after normalization).
    pub fn with_avatar(mut self, name: &str, url: impl Into<String>) -> Self {
        self.avatars.insert(normalize_name(name), url.into());
        self
    }
}

#[async_trait]
impl NameResolver for StaticResolver {
    async fn resolve_name(&self, address: &str, _chain_id: u64) -> Result<Option<String>> {
        Ok(self.names.get(&address.to_ascii_lowercase()).cloned())
    }

    async fn resolve_avatar(&self, name: &str, _chain_id: u64) -> Result<Option<String>> {
        Ok(self.avatars.get(&normalize_name(name)).cloned())
    }
}
