// Native binary for addrview - prints the derived display state as JSON

use anyhow::{Context, Result};
use serde_json::json;

use addrview::{
    address,
    config::load,
    display::{resolve_display, DisplayInput},
    resolution::{self, StaticResolver},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file if it exists (safe to ignore if not found)
    let _ = dotenvy::dotenv();
    env_logger::init();

    let cfg = load().context("Failed to load configuration")?;

    let canonical = cfg
        .address
        .as_deref()
        .and_then(|raw| address::canonicalize(raw).ok());

    let snapshot = match cfg.loading_snapshot() {
        Some(loading) => loading,
        None => {
            let mut resolver = StaticResolver::new();
            if let (Some(addr), Some(name)) = (canonical.as_deref(), cfg.name.as_deref()) {
                resolver = resolver.with_name(addr, name);
                if let Some(avatar) = cfg.avatar.as_deref() {
                    resolver = resolver.with_avatar(name, avatar);
                }
            }
            resolution::snapshot(&resolver, canonical.as_deref()).await
        }
    };

    let input = DisplayInput::new(cfg.address.as_deref())
        .format(cfg.format)
        .size(cfg.size)
        .only_name_or_address(cfg.only_name_or_address)
        .resolution(snapshot);
    let state = resolve_display(&input, &cfg.network);

    let out = json!({
        "network": cfg.network,
        "state": state,
        "render": {
            "address_text": state.address_text_class(),
            "name_text": state.name_text_class(),
            "blockie_scale": state.blockie_scale(),
            "copy_icon": state.copy_icon_class(),
        },
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
