//! addrview - display state for EVM addresses
//!
//! This library decides how an address widget renders: which text to show
//! (checksummed address, shortened form, or resolved name), whether to show a
//! loading placeholder, and how large each part of the widget should be while
//! name resolution is pending.
//!
//! ## Architecture
//!
//! - **Core** (pure, all targets): [`size`], [`address`], [`display`]
//! - **Collaborator seams**: [`resolution`] (name/avatar lookups) and
//!   [`network`] (explorer links)
//! - **Native host**: [`config`] and the `addrview` binary
//!
//! ## Usage
//!
//! ```rust
//! use addrview::{resolve_display, DisplayInput, Network, ResolutionState};
//!
//! let input = DisplayInput::new(Some("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed"))
//!     .resolution(ResolutionState::resolved("alice.eth"));
//! let state = resolve_display(&input, &Network::mainnet());
//! assert_eq!(state.display_name_or_address.as_deref(), Some("alice.eth"));
//! assert!(state.show_placeholder);
//! ```

// Core modules (available on all platforms)
pub mod address;
pub mod display;
pub mod network;
pub mod resolution;
pub mod size;

// CLI/env configuration (native host only)
#[cfg(feature = "native")]
pub mod config;

// Re-export commonly used types
pub use address::{AddressFormat, AddressRecord};
pub use display::{resolve_display, DisplayEnv, DisplayInput, DisplayState};
pub use network::{Network, NetworkRegistry};
pub use resolution::{NameResolver, ResolutionState};
pub use size::{step_size, AddressSize, Direction, SizeCatalog, SizeLevel};
