//! The acting player as seen by triggers.

use serde::{Deserialize, Serialize};
use stash_core::{BlockPos, DimensionId, ItemStack, Vec3};
use stash_world::{Container, Inventory, HOTBAR_SIZE};

use crate::sort_rod::RodMode;

/// Per-player values that persist between trigger invocations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerProperties {
    /// Selected sort rod mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_rod_mode: Option<RodMode>,
    /// Container picked as the first half of a rod swap.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_container: Option<BlockPos>,
}

/// A player: inventory, held slot, stance and position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    pub name: String,
    /// 36-slot inventory, hotbar first.
    #[serde(default = "Inventory::player")]
    pub inventory: Inventory,
    /// Selected hotbar slot (main hand).
    #[serde(default)]
    pub selected_slot: usize,
    /// Whether the player is sneaking.
    #[serde(default)]
    pub sneaking: bool,
    /// Current dimension.
    #[serde(default)]
    pub dimension: DimensionId,
    /// Current location.
    #[serde(default)]
    pub location: Vec3,
    /// Persisted trigger state.
    #[serde(default)]
    pub properties: PlayerProperties,
}

impl Player {
    /// Player with an empty inventory at the overworld origin.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inventory: Inventory::player(),
            selected_slot: 0,
            sneaking: false,
            dimension: DimensionId::Overworld,
            location: Vec3::default(),
            properties: PlayerProperties::default(),
        }
    }

    /// Stack in the main hand.
    pub fn held_item(&self) -> Option<&ItemStack> {
        if self.selected_slot >= HOTBAR_SIZE {
            return None;
        }
        self.inventory.get(self.selected_slot)
    }

    /// Replace the main hand. Returns `false` when the selected slot is not a
    /// hotbar slot.
    pub fn set_held_item(&mut self, stack: Option<ItemStack>) -> bool {
        if self.selected_slot >= HOTBAR_SIZE {
            return false;
        }
        self.inventory.set(self.selected_slot, stack)
    }

    /// Whether the main hand holds an item of `type_id`.
    pub fn is_holding(&self, type_id: &str) -> bool {
        self.held_item()
            .is_some_and(|stack| stack.type_id.to_string() == type_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stash_core::RegistryKey;

    #[test]
    fn held_item_follows_selected_slot() {
        let mut player = Player::new("steve");
        player.selected_slot = 2;
        assert!(player.set_held_item(Some(ItemStack::new(RegistryKey::minecraft("stone"), 4))));
        assert!(player.is_holding("minecraft:stone"));
        assert_eq!(player.inventory.get(2).map(|s| s.amount), Some(4));

        player.selected_slot = HOTBAR_SIZE;
        assert!(player.held_item().is_none());
        assert!(!player.set_held_item(None));
    }

    #[test]
    fn deserializes_with_defaults() {
        let player: Player = serde_json::from_str(r#"{"name":"alex"}"#).unwrap();
        assert_eq!(player.inventory.size(), 36);
        assert_eq!(player.dimension, DimensionId::Overworld);
        assert_eq!(player.properties, PlayerProperties::default());
    }
}
