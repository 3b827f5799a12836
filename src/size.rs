//! Size catalogs and the size stepper
//!
//! Three independent catalogs describe how big each visual part of an
//! address renders: the address/name text, the blockie identicon, and the
//! copy icon. They share level names but not magnitudes, and their order is
//! the visual scale (smallest first).
//!
//! Stepping never fails: a level missing from a catalog counts as index 0
//! and every result is clamped to the catalog bounds.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named point on a visual scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SizeLevel {
    #[serde(rename = "3xs")]
    Xs3,
    #[serde(rename = "2xs")]
    Xs2,
    #[serde(rename = "xs")]
    Xs,
    #[serde(rename = "sm")]
    Sm,
    #[serde(rename = "base")]
    Base,
    #[serde(rename = "lg")]
    Lg,
    #[serde(rename = "xl")]
    Xl,
    #[serde(rename = "2xl")]
    Xl2,
    #[serde(rename = "3xl")]
    Xl3,
    #[serde(rename = "4xl")]
    Xl4,
    #[serde(rename = "5xl")]
    Xl5,
    #[serde(rename = "6xl")]
    Xl6,
    #[serde(rename = "7xl")]
    Xl7,
}

impl SizeLevel {
    pub const ALL: [SizeLevel; 13] = [
        SizeLevel::Xs3,
        SizeLevel::Xs2,
        SizeLevel::Xs,
        SizeLevel::Sm,
        SizeLevel::Base,
        SizeLevel::Lg,
        SizeLevel::Xl,
        SizeLevel::Xl2,
        SizeLevel::Xl3,
        SizeLevel::Xl4,
        SizeLevel::Xl5,
        SizeLevel::Xl6,
        SizeLevel::Xl7,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SizeLevel::Xs3 => "3xs",
            SizeLevel::Xs2 => "2xs",
            SizeLevel::Xs => "xs",
            SizeLevel::Sm => "sm",
            SizeLevel::Base => "base",
            SizeLevel::Lg => "lg",
            SizeLevel::Xl => "xl",
            SizeLevel::Xl2 => "2xl",
            SizeLevel::Xl3 => "3xl",
            SizeLevel::Xl4 => "4xl",
            SizeLevel::Xl5 => "5xl",
            SizeLevel::Xl6 => "6xl",
            SizeLevel::Xl7 => "7xl",
        }
    }
}

impl std::str::FromStr for SizeLevel {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        SizeLevel::ALL
            .iter()
            .copied()
            .find(|level| level.as_str() == wanted)
            .ok_or_else(|| anyhow!("Unknown size level '{s}'. Valid options: 3xs..7xl"))
    }
}

impl fmt::Display for SizeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sizes a caller may request for an address.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddressSize {
    #[serde(rename = "xs")]
    Xs,
    #[serde(rename = "sm")]
    Sm,
    #[default]
    #[serde(rename = "base")]
    Base,
    #[serde(rename = "lg")]
    Lg,
    #[serde(rename = "xl")]
    Xl,
    #[serde(rename = "2xl")]
    Xl2,
    #[serde(rename = "3xl")]
    Xl3,
}

impl From<AddressSize> for SizeLevel {
    fn from(size: AddressSize) -> Self {
        match size {
            AddressSize::Xs => SizeLevel::Xs,
            AddressSize::Sm => SizeLevel::Sm,
            AddressSize::Base => SizeLevel::Base,
            AddressSize::Lg => SizeLevel::Lg,
            AddressSize::Xl => SizeLevel::Xl,
            AddressSize::Xl2 => SizeLevel::Xl2,
            AddressSize::Xl3 => SizeLevel::Xl3,
        }
    }
}

impl std::str::FromStr for AddressSize {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "xs" => Ok(AddressSize::Xs),
            "sm" => Ok(AddressSize::Sm),
            "base" => Ok(AddressSize::Base),
            "lg" => Ok(AddressSize::Lg),
            "xl" => Ok(AddressSize::Xl),
            "2xl" => Ok(AddressSize::Xl2),
            "3xl" => Ok(AddressSize::Xl3),
            _ => Err(anyhow!(
                "Invalid size '{s}'. Valid options: xs, sm, base, lg, xl, 2xl, 3xl"
            )),
        }
    }
}

impl fmt::Display for AddressSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        SizeLevel::from(*self).fmt(f)
    }
}

/// Direction to step through a catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Towards larger levels
    Next,
    /// Towards smaller levels
    Prev,
}

/// Ordered table of size levels for one visual concern.
#[derive(Clone, Copy, Debug)]
pub struct SizeCatalog<V: 'static> {
    entries: &'static [(SizeLevel, V)],
}

impl<V: 'static> SizeCatalog<V> {
    /// Build a catalog from an ascending, non-empty table.
    pub const fn new(entries: &'static [(SizeLevel, V)]) -> Self {
        assert!(!entries.is_empty(), "size catalog must not be empty");
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn levels(&self) -> impl Iterator<Item = SizeLevel> + '_ {
        self.entries.iter().map(|(level, _)| *level)
    }

    pub fn position(&self, level: SizeLevel) -> Option<usize> {
        self.entries.iter().position(|(l, _)| *l == level)
    }

    pub fn contains(&self, level: SizeLevel) -> bool {
        self.position(level).is_some()
    }

    pub fn get(&self, level: SizeLevel) -> Option<&'static V> {
        self.entries.iter().find(|(l, _)| *l == level).map(|(_, v)| v)
    }

    /// Value for `level`, or the catalog's smallest value when absent.
    pub fn value(&self, level: SizeLevel) -> &'static V {
        let entries: &'static [(SizeLevel, V)] = self.entries;
        let idx = self.position(level).unwrap_or(0);
        &entries[idx].1
    }

    /// Move `step` levels from `current`, clamped to the catalog bounds.
    pub fn step(&self, current: SizeLevel, direction: Direction, step: usize) -> SizeLevel {
        let last = self.entries.len() - 1;
        let idx = self.position(current).unwrap_or(0);
        let target = match direction {
            Direction::Next => idx.saturating_add(step).min(last),
            Direction::Prev => idx.saturating_sub(step),
        };
        self.entries[target].0
    }
}

/// Move `step` levels through `catalog` from `current`.
pub fn step_size<V>(
    catalog: &SizeCatalog<V>,
    current: SizeLevel,
    direction: Direction,
    step: usize,
) -> SizeLevel {
    catalog.step(current, direction, step)
}

#[inline]
pub fn next_size<V>(catalog: &SizeCatalog<V>, current: SizeLevel, step: usize) -> SizeLevel {
    catalog.step(current, Direction::Next, step)
}

#[inline]
pub fn prev_size<V>(catalog: &SizeCatalog<V>, current: SizeLevel, step: usize) -> SizeLevel {
    catalog.step(current, Direction::Prev, step)
}

/// Text classes for the address and name labels.
pub const TEXT_SIZES: SizeCatalog<&str> = SizeCatalog::new(&[
    (SizeLevel::Xs3, "text-[10px]"),
    (SizeLevel::Xs2, "text-[11px]"),
    (SizeLevel::Xs, "text-xs"),
    (SizeLevel::Sm, "text-sm"),
    (SizeLevel::Base, "text-base"),
    (SizeLevel::Lg, "text-lg"),
    (SizeLevel::Xl, "text-xl"),
    (SizeLevel::Xl2, "text-2xl"),
    (SizeLevel::Xl3, "text-3xl"),
    (SizeLevel::Xl4, "text-4xl"),
]);

/// Blockie identicon sizes (blockie scale units, 1 unit = 4px).
pub const BLOCKIE_SIZES: SizeCatalog<u32> = SizeCatalog::new(&[
    (SizeLevel::Xs3, 4),
    (SizeLevel::Xs2, 5),
    (SizeLevel::Xs, 6),
    (SizeLevel::Sm, 7),
    (SizeLevel::Base, 8),
    (SizeLevel::Lg, 9),
    (SizeLevel::Xl, 10),
    (SizeLevel::Xl2, 12),
    (SizeLevel::Xl3, 15),
    (SizeLevel::Xl4, 17),
    (SizeLevel::Xl5, 19),
    (SizeLevel::Xl6, 21),
    (SizeLevel::Xl7, 23),
]);

/// Copy-to-clipboard icon classes.
pub const COPY_ICON_SIZES: SizeCatalog<&str> = SizeCatalog::new(&[
    (SizeLevel::Xs3, "h-2.5 w-2.5"),
    (SizeLevel::Xs2, "h-3 w-3"),
    (SizeLevel::Xs, "h-3.5 w-3.5"),
    (SizeLevel::Sm, "h-4 w-4"),
    (SizeLevel::Base, "h-[18px] w-[18px]"),
    (SizeLevel::Lg, "h-5 w-5"),
    (SizeLevel::Xl, "h-[22px] w-[22px]"),
    (SizeLevel::Xl2, "h-6 w-6"),
    (SizeLevel::Xl3, "h-[26px] w-[26px]"),
    (SizeLevel::Xl4, "h-7 w-7"),
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_step_is_identity() {
        for level in TEXT_SIZES.levels() {
            assert_eq!(TEXT_SIZES.step(level, Direction::Next, 0), level);
            assert_eq!(TEXT_SIZES.step(level, Direction::Prev, 0), level);
        }
        for level in BLOCKIE_SIZES.levels() {
            assert_eq!(BLOCKIE_SIZES.step(level, Direction::Next, 0), level);
            assert_eq!(BLOCKIE_SIZES.step(level, Direction::Prev, 0), level);
        }
    }

    #[test]
    fn test_step_clamps_to_bounds() {
        assert_eq!(next_size(&TEXT_SIZES, SizeLevel::Xl3, 5), SizeLevel::Xl4);
        assert_eq!(prev_size(&TEXT_SIZES, SizeLevel::Xs, 5), SizeLevel::Xs3);
        assert_eq!(
            next_size(&BLOCKIE_SIZES, SizeLevel::Base, usize::MAX),
            SizeLevel::Xl7
        );
        assert_eq!(
            prev_size(&COPY_ICON_SIZES, SizeLevel::Base, usize::MAX),
            SizeLevel::Xs3
        );
    }

    #[test]
    fn test_step_moves_by_index() {
        assert_eq!(prev_size(&TEXT_SIZES, SizeLevel::Base, 2), SizeLevel::Xs);
        assert_eq!(next_size(&TEXT_SIZES, SizeLevel::Xs, 1), SizeLevel::Sm);
        assert_eq!(next_size(&BLOCKIE_SIZES, SizeLevel::Xs, 4), SizeLevel::Xl);
    }

    #[test]
    fn test_missing_level_counts_as_first() {
        // 7xl only exists in the blockie catalog
        assert!(!TEXT_SIZES.contains(SizeLevel::Xl7));
        assert_eq!(next_size(&TEXT_SIZES, SizeLevel::Xl7, 1), SizeLevel::Xs2);
        assert_eq!(prev_size(&TEXT_SIZES, SizeLevel::Xl7, 1), SizeLevel::Xs3);
        assert_eq!(*TEXT_SIZES.value(SizeLevel::Xl7), "text-[10px]");
    }

    #[test]
    fn test_catalogs_are_ascending_without_duplicates() {
        for levels in [
            TEXT_SIZES.levels().collect::<Vec<_>>(),
            BLOCKIE_SIZES.levels().collect::<Vec<_>>(),
            COPY_ICON_SIZES.levels().collect::<Vec<_>>(),
        ] {
            assert!(levels.windows(2).all(|w| w[0] < w[1]), "{levels:?}");
        }
    }

    #[test]
    fn test_parse_levels() {
        assert_eq!("2xl".parse::<SizeLevel>().unwrap(), SizeLevel::Xl2);
        assert_eq!(" BASE ".parse::<AddressSize>().unwrap(), AddressSize::Base);
        assert!("4xl".parse::<AddressSize>().is_err());
        assert!("huge".parse::<SizeLevel>().is_err());
        assert_eq!(AddressSize::Xl3.to_string(), "3xl");
    }
}
