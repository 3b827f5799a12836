//! Resolution snapshot tests - lookup planning and collaborator failures

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use addrview::resolution::{snapshot, NameResolver, ResolutionState, StaticResolver};

const ADDR: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";

/// Resolver that counts calls and can be told to fail.
#[derive(Default)]
struct CountingResolver {
    fail_name: bool,
    fail_avatar: bool,
    name_calls: AtomicUsize,
    avatar_calls: AtomicUsize,
}

#[async_trait]
impl NameResolver for CountingResolver {
    async fn resolve_name(&self, _address: &str, chain_id: u64) -> Result<Option<String>> {
        self.name_calls.fetch_add(1, Ordering::SeqCst);
        assert_eq!(chain_id, 1);
        if self.fail_name {
            return Err(anyhow!("rpc unavailable"));
        }
        Ok(Some("Alice.eth".to_string()))
    }

    async fn resolve_avatar(&self, name: &str, chain_id: u64) -> Result<Option<String>> {
        self.avatar_calls.fetch_add(1, Ordering::SeqCst);
        assert_eq!(chain_id, 1);
        assert_eq!(name, "alice.eth");
        if self.fail_avatar {
            return Err(anyhow!("avatar gateway timeout"));
        }
        Ok(Some("https://avatars.example/alice.png".to_string()))
    }
}

#[tokio::test]
async fn resolves_name_then_avatar() {
    let resolver = StaticResolver::new()
        .with_name(ADDR, "alice.eth")
        .with_avatar("alice.eth", "ipfs://avatar");

    let state = snapshot(&resolver, Some(ADDR)).await;
    assert_eq!(
        state,
        ResolutionState::resolved("alice.eth").with_avatar("ipfs://avatar")
    );
    assert!(!state.name_loading);
}

#[tokio::test]
async fn unknown_address_settles_idle() {
    let resolver = StaticResolver::new();
    assert_eq!(snapshot(&resolver, Some(ADDR)).await, ResolutionState::idle());
}

#[tokio::test]
async fn invalid_or_missing_address_skips_lookups() {
    let resolver = CountingResolver::default();

    assert_eq!(snapshot(&resolver, None).await, ResolutionState::idle());
    // Broken checksum never reaches the collaborator
    let bad = "0x5AAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
    assert_eq!(snapshot(&resolver, Some(bad)).await, ResolutionState::idle());

    assert_eq!(resolver.name_calls.load(Ordering::SeqCst), 0);
    assert_eq!(resolver.avatar_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn avatar_lookup_uses_normalized_name() {
    let resolver = CountingResolver::default();
    let state = snapshot(&resolver, Some(ADDR)).await;

    assert_eq!(state.name.as_deref(), Some("Alice.eth"));
    assert_eq!(
        state.avatar_url.as_deref(),
        Some("https://avatars.example/alice.png")
    );
    assert_eq!(resolver.name_calls.load(Ordering::SeqCst), 1);
    assert_eq!(resolver.avatar_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn name_failure_reports_nothing_resolved() {
    let resolver = CountingResolver {
        fail_name: true,
        ..Default::default()
    };
    let state = snapshot(&resolver, Some(ADDR)).await;

    assert_eq!(state, ResolutionState::idle());
    assert_eq!(resolver.avatar_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn avatar_failure_keeps_name() {
    let resolver = CountingResolver {
        fail_avatar: true,
        ..Default::default()
    };
    let state = snapshot(&resolver, Some(ADDR)).await;

    assert_eq!(state.name.as_deref(), Some("Alice.eth"));
    assert_eq!(state.avatar_url, None);
}
