//! Address primitives: EIP-55 canonicalization, strict validation, shortening

use alloy_primitives::Address;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Characters kept from the start of a shortened address (includes `0x`)
pub const SHORT_PREFIX_LEN: usize = 6;

/// Characters kept from the end of a shortened address
pub const SHORT_SUFFIX_LEN: usize = 4;

/// Full length of a `0x`-prefixed address string
pub const FULL_LEN: usize = 42;

const ELLIPSIS: &str = "...";

/// How an address should be printed when no name is available.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressFormat {
    /// `0x1234...abcd`
    #[default]
    Short,
    /// The full checksummed address
    Long,
}

impl std::str::FromStr for AddressFormat {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "short" => Ok(AddressFormat::Short),
            "long" | "full" => Ok(AddressFormat::Long),
            _ => Err(anyhow!("Invalid format '{s}'. Valid options: short, long")),
        }
    }
}

impl fmt::Display for AddressFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressFormat::Short => write!(f, "short"),
            AddressFormat::Long => write!(f, "long"),
        }
    }
}

/// `0x` followed by exactly 40 hex digits.
#[inline]
fn has_address_shape(s: &str) -> bool {
    s.len() == FULL_LEN
        && s.starts_with("0x")
        && s.as_bytes()[2..].iter().all(|b| b.is_ascii_hexdigit())
}

/// Convert a raw address into its EIP-55 checksummed form.
///
/// Surrounding whitespace is ignored. The checksum of mixed-case input is not
/// verified here; use [`is_valid_address`] for the strict check.
pub fn canonicalize(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if !has_address_shape(trimmed) {
        return Err(anyhow!(
            "Invalid address '{raw}': expected 0x followed by 40 hex digits"
        ));
    }
    let parsed: Address = trimmed
        .parse()
        .with_context(|| format!("Invalid address '{raw}'"))?;
    Ok(parsed.to_checksum(None))
}

/// Strict format predicate.
///
/// All-lowercase addresses are accepted as-is; anything with uppercase hex
/// digits must carry a correct checksum.
pub fn is_valid_address(candidate: &str) -> bool {
    if !has_address_shape(candidate) {
        return false;
    }
    if candidate.to_ascii_lowercase() == candidate {
        return true;
    }
    canonicalize(candidate)
        .map(|checksummed| checksummed == candidate)
        .unwrap_or(false)
}

/// `0x1234...abcd` form of an address.
///
/// Strings too short to abbreviate are returned unchanged.
pub fn shorten(address: &str) -> String {
    if !address.is_ascii() || address.len() <= SHORT_PREFIX_LEN + SHORT_SUFFIX_LEN {
        return address.to_string();
    }
    format!(
        "{}{ELLIPSIS}{}",
        &address[..SHORT_PREFIX_LEN],
        &address[address.len() - SHORT_SUFFIX_LEN..]
    )
}

/// An address in the forms the display needs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AddressRecord {
    /// EIP-55 checksummed address
    pub checksum: String,
    /// First 6 + last 4 characters of `checksum`
    pub short: String,
    pub is_valid: bool,
}

impl AddressRecord {
    /// Canonicalize `raw` and validate it with the strict predicate.
    pub fn from_raw(raw: &str) -> Result<Self> {
        Self::from_raw_with(raw, is_valid_address)
    }

    /// Canonicalize `raw` and validate it with a caller-supplied predicate.
    pub fn from_raw_with(raw: &str, validate: impl Fn(&str) -> bool) -> Result<Self> {
        let checksum = canonicalize(raw)?;
        let short = shorten(&checksum);
        let is_valid = validate(&checksum);
        Ok(Self {
            checksum,
            short,
            is_valid,
        })
    }

    pub fn display(&self, format: AddressFormat) -> &str {
        match format {
            AddressFormat::Long => &self.checksum,
            AddressFormat::Short => &self.short,
        }
    }
}
