//! Address display resolver
//!
//! Derives everything a view needs to render an address from the address
//! itself, the requested format and size, and the latest name-resolution
//! snapshot. The derivation is a pure function: hosts call
//! [`resolve_display`] again whenever any input changes and diff the result.
//!
//! While a name is loading (or known, when address and name are shown
//! together) the view renders a placeholder. The address text shrinks two
//! levels and the identicon grows four so the skeleton occupies the same
//! footprint as the settled layout.

use serde::Serialize;

use crate::address::{self, AddressFormat, AddressRecord};
use crate::network::Network;
use crate::resolution::ResolutionState;
use crate::size::{
    next_size, prev_size, AddressSize, SizeLevel, BLOCKIE_SIZES, COPY_ICON_SIZES, TEXT_SIZES,
};

/// Address validation and explorer-link building supplied by the host.
pub trait DisplayEnv {
    fn is_valid_address(&self, candidate: &str) -> bool;
    fn explorer_link(&self, address: &str) -> String;
}

impl DisplayEnv for Network {
    fn is_valid_address(&self, candidate: &str) -> bool {
        address::is_valid_address(candidate)
    }

    fn explorer_link(&self, address: &str) -> String {
        self.address_link(address)
    }
}

/// `(validator, link_builder)` closure pair.
impl<V, L> DisplayEnv for (V, L)
where
    V: Fn(&str) -> bool,
    L: Fn(&str) -> String,
{
    fn is_valid_address(&self, candidate: &str) -> bool {
        (self.0)(candidate)
    }

    fn explorer_link(&self, address: &str) -> String {
        (self.1)(address)
    }
}

/// Inputs of one display evaluation.
#[derive(Clone, Debug, Default)]
pub struct DisplayInput<'a> {
    pub address: Option<&'a str>,
    pub format: AddressFormat,
    pub size: AddressSize,
    /// Show only the name or the address, never both
    pub only_name_or_address: bool,
    pub resolution: ResolutionState,
}

impl<'a> DisplayInput<'a> {
    pub fn new(address: Option<&'a str>) -> Self {
        Self {
            address,
            ..Self::default()
        }
    }

    pub fn format(mut self, format: AddressFormat) -> Self {
        self.format = format;
        self
    }

    pub fn size(mut self, size: AddressSize) -> Self {
        self.size = size;
        self
    }

    pub fn only_name_or_address(mut self, on: bool) -> Self {
        self.only_name_or_address = on;
        self
    }

    pub fn resolution(mut self, resolution: ResolutionState) -> Self {
        self.resolution = resolution;
        self
    }
}

/// Derived display state (one-way: core -> view).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DisplayState {
    pub checksum_address: Option<String>,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub name_loading: bool,
    /// Address text in the requested format
    pub display_address: Option<String>,
    /// Resolved name, else the address text
    pub display_name_or_address: Option<String>,
    pub show_placeholder: bool,
    pub address_size: SizeLevel,
    pub name_size: SizeLevel,
    pub blockie_size: SizeLevel,
    pub explorer_link: String,
    pub is_valid: bool,
}

impl DisplayState {
    pub fn address_text_class(&self) -> &'static str {
        *TEXT_SIZES.value(self.address_size)
    }

    pub fn name_text_class(&self) -> &'static str {
        *TEXT_SIZES.value(self.name_size)
    }

    /// Identicon size in blockie scale units.
    pub fn blockie_scale(&self) -> u32 {
        *BLOCKIE_SIZES.value(self.blockie_size)
    }

    /// Copy icon class, sized after the address text.
    pub fn copy_icon_class(&self) -> &'static str {
        *COPY_ICON_SIZES.value(self.address_size)
    }
}

/// Derive the display state for one evaluation.
pub fn resolve_display(input: &DisplayInput<'_>, env: &impl DisplayEnv) -> DisplayState {
    let record = input
        .address
        .and_then(|raw| match AddressRecord::from_raw_with(raw, |a| env.is_valid_address(a)) {
            Ok(record) => Some(record),
            Err(e) => {
                log::debug!("[display] treating input as no address: {e:#}");
                None
            }
        });

    let resolution = &input.resolution;
    let name = resolution.resolved_name();

    let display_address = record
        .as_ref()
        .map(|r| r.display(input.format).to_string());
    let display_name_or_address = name.map(str::to_string).or_else(|| display_address.clone());

    let show_placeholder = record.is_none()
        || (!input.only_name_or_address && (name.is_some() || resolution.name_loading));

    let stepped = show_placeholder && !input.only_name_or_address;
    let requested = SizeLevel::from(input.size);
    let address_size = if stepped {
        prev_size(&TEXT_SIZES, requested, 2)
    } else {
        requested
    };
    let name_size = next_size(&TEXT_SIZES, address_size, 1);
    let blockie_size = if stepped {
        next_size(&BLOCKIE_SIZES, address_size, 4)
    } else {
        address_size
    };

    let is_valid = record.as_ref().map(|r| r.is_valid).unwrap_or(false);
    let explorer_link = record
        .as_ref()
        .map(|r| env.explorer_link(&r.checksum))
        .unwrap_or_default();

    log::trace!(
        "[display] {:?} placeholder={} sizes={}/{}/{}",
        display_name_or_address,
        show_placeholder,
        address_size,
        name_size,
        blockie_size
    );

    DisplayState {
        checksum_address: record.map(|r| r.checksum),
        name: name.map(str::to_string),
        avatar_url: resolution.resolved_avatar().map(str::to_string),
        name_loading: resolution.name_loading,
        display_address,
        display_name_or_address,
        show_placeholder,
        address_size,
        name_size,
        blockie_size,
        explorer_link,
        is_valid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";

    fn env() -> impl DisplayEnv {
        (|_: &str| true, |a: &str| format!("link:{a}"))
    }

    #[test]
    fn test_settled_address_keeps_requested_size() {
        let state = resolve_display(&DisplayInput::new(Some(ADDR)), &env());
        assert!(!state.show_placeholder);
        assert_eq!(state.address_size, SizeLevel::Base);
        assert_eq!(state.name_size, SizeLevel::Lg);
        assert_eq!(state.blockie_size, SizeLevel::Base);
        assert_eq!(state.address_text_class(), "text-base");
        assert_eq!(state.copy_icon_class(), "h-[18px] w-[18px]");
        assert_eq!(state.blockie_scale(), 8);
    }

    #[test]
    fn test_empty_name_does_not_trigger_placeholder() {
        let input = DisplayInput::new(Some(ADDR)).resolution(ResolutionState::resolved(""));
        let state = resolve_display(&input, &env());
        assert!(!state.show_placeholder);
        assert_eq!(state.name, None);
        assert_eq!(state.display_name_or_address.as_deref(), Some("0x5aAe...eAed"));
    }

    #[test]
    fn test_malformed_address_degrades() {
        let state = resolve_display(&DisplayInput::new(Some("not-an-address")), &env());
        assert_eq!(state.checksum_address, None);
        assert!(state.show_placeholder);
        assert!(!state.is_valid);
        assert_eq!(state.explorer_link, "");
    }

    #[test]
    fn test_validator_decides_validity() {
        let reject = (|_: &str| false, |a: &str| a.to_string());
        let state = resolve_display(&DisplayInput::new(Some(ADDR)), &reject);
        assert!(!state.is_valid);
        assert_eq!(state.explorer_link, ADDR);
    }
}
