#![warn(missing_docs)]
//! Core primitives shared across the workspace.

pub mod dimension;
pub mod item;
pub mod position;
pub mod registry;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use dimension::{DimensionId, UnknownDimension};
pub use item::{Enchantment, ItemComponents, ItemStack, ItemStackError, DEFAULT_MAX_AMOUNT};
pub use position::{BlockPos, BlockPosParseError, Vec3};
pub use registry::{RegistryKey, RegistryKeyError, DEFAULT_NAMESPACE};

/// Host tick counter (20 TPS => 50 ms per tick).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SimTick(pub u64);

impl SimTick {
    /// First tick of any timeline.
    pub const ZERO: Self = Self(0);

    /// Advance by `delta` ticks.
    pub fn advance(self, delta: u64) -> Self {
        Self(self.0 + delta)
    }

    /// Ticks elapsed since `earlier` (zero if `earlier` is in the future).
    pub fn since(self, earlier: SimTick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}
