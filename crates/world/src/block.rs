//! Placed blocks and their optional inventories.

use crate::inventory::Inventory;
use serde::{Deserialize, Serialize};
use stash_core::{BlockPos, RegistryKey};

/// Number of slots in a single chest or barrel (3 rows × 9 columns).
pub const CHEST_SLOT_COUNT: usize = 27;

/// Number of slots in a hopper.
pub const HOPPER_SLOT_COUNT: usize = 5;

/// Block type ids the engine cares about.
pub mod block_types {
    /// Vanilla chest.
    pub const CHEST: &str = "minecraft:chest";
    /// Vanilla barrel.
    pub const BARREL: &str = "minecraft:barrel";
    /// Vanilla hopper.
    pub const HOPPER: &str = "minecraft:hopper";
    /// Passive sorter block.
    pub const SORTER: &str = "mypack:sorter";
    /// Shared chest block.
    pub const SHARED_CHEST: &str = "mypack:shared_chest";
    /// Combiner block.
    pub const COMBINER: &str = "mypack:combiner";
}

/// Direction a block faces, numbered like the host's `facing_direction` state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facing {
    /// Facing down (0).
    Down,
    /// Facing up (1).
    Up,
    /// Facing north, towards negative z (2).
    North,
    /// Facing south, towards positive z (3).
    South,
    /// Facing west, towards negative x (4).
    West,
    /// Facing east, towards positive x (5).
    East,
}

impl Facing {
    /// Host `facing_direction` state value.
    pub const fn state_value(self) -> u8 {
        match self {
            Facing::Down => 0,
            Facing::Up => 1,
            Facing::North => 2,
            Facing::South => 3,
            Facing::West => 4,
            Facing::East => 5,
        }
    }

    /// Inverse of [`Facing::state_value`].
    pub const fn from_state_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Facing::Down),
            1 => Some(Facing::Up),
            2 => Some(Facing::North),
            3 => Some(Facing::South),
            4 => Some(Facing::West),
            5 => Some(Facing::East),
            _ => None,
        }
    }

    /// Block this face points at, one step from `pos`.
    pub const fn step(self, pos: BlockPos) -> BlockPos {
        match self {
            Facing::Down => pos.offset(0, -1, 0),
            Facing::Up => pos.offset(0, 1, 0),
            Facing::North => pos.north(1),
            Facing::South => pos.south(1),
            Facing::West => pos.west(1),
            Facing::East => pos.east(1),
        }
    }
}

/// A placed block: its type, optional facing state and optional inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Block type id.
    pub type_id: RegistryKey,
    /// `facing_direction` state, for blocks that have one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facing: Option<Facing>,
    /// Inventory component, for container blocks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory: Option<Inventory>,
}

impl Block {
    /// Block without state or inventory.
    pub fn simple(type_id: RegistryKey) -> Self {
        Self {
            type_id,
            facing: None,
            inventory: None,
        }
    }

    /// Parse `type_id` and build a stateless block.
    ///
    /// # Panics
    ///
    /// Panics on an invalid key; intended for the constants in [`block_types`].
    pub fn of(type_id: &str) -> Self {
        match RegistryKey::parse(type_id) {
            Ok(key) => Self::simple(key),
            Err(err) => panic!("invalid block type `{type_id}`: {err}"),
        }
    }

    /// Empty 27-slot chest.
    pub fn chest() -> Self {
        Self::of(block_types::CHEST).with_inventory(Inventory::new(CHEST_SLOT_COUNT))
    }

    /// Empty 27-slot barrel.
    pub fn barrel() -> Self {
        Self::of(block_types::BARREL).with_inventory(Inventory::new(CHEST_SLOT_COUNT))
    }

    /// Empty 5-slot hopper pointing `facing`.
    pub fn hopper(facing: Facing) -> Self {
        Self::of(block_types::HOPPER)
            .with_facing(facing)
            .with_inventory(Inventory::new(HOPPER_SLOT_COUNT))
    }

    /// Attach an inventory component.
    #[must_use]
    pub fn with_inventory(mut self, inventory: Inventory) -> Self {
        self.inventory = Some(inventory);
        self
    }

    /// Set the facing state.
    #[must_use]
    pub fn with_facing(mut self, facing: Facing) -> Self {
        self.facing = Some(facing);
        self
    }

    /// Whether the block type equals `type_id` (string form).
    pub fn is(&self, type_id: &str) -> bool {
        self.type_id.to_string() == type_id
    }

    /// Translation key for chat messages, e.g. `tile.chest.name`.
    pub fn translation_key(&self) -> String {
        self.type_id.translation_key("tile")
    }
}
