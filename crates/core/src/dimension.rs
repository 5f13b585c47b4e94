//! Dimension identifiers.
//!
//! Block lookups and range scans are always scoped to one dimension; the same
//! coordinates in the Nether and the Overworld are unrelated blocks.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// World partition a block position belongs to.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DimensionId {
    /// The Overworld dimension.
    #[default]
    Overworld,
    /// The Nether dimension.
    Nether,
    /// The End dimension.
    End,
}

/// Error returned for an unknown dimension name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown dimension `{0}` (expected overworld, nether or end)")]
pub struct UnknownDimension(pub String);

impl DimensionId {
    /// Canonical name used in fixtures, configs and logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Overworld => "overworld",
            Self::Nether => "nether",
            Self::End => "end",
        }
    }
}

impl fmt::Display for DimensionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DimensionId {
    type Err = UnknownDimension;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_start_matches("minecraft:") {
            "overworld" => Ok(Self::Overworld),
            "nether" | "the_nether" => Ok(Self::Nether),
            "end" | "the_end" => Ok(Self::End),
            other => Err(UnknownDimension(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_vanilla_aliases() {
        assert_eq!("overworld".parse(), Ok(DimensionId::Overworld));
        assert_eq!("minecraft:the_nether".parse(), Ok(DimensionId::Nether));
        assert_eq!("end".parse(), Ok(DimensionId::End));
        assert!("moon".parse::<DimensionId>().is_err());
    }

    #[test]
    fn display_matches_parse() {
        for dim in [DimensionId::Overworld, DimensionId::Nether, DimensionId::End] {
            assert_eq!(dim.to_string().parse(), Ok(dim));
        }
    }
}
