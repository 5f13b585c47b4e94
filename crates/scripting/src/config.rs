use serde::{Deserialize, Serialize};
use stash_core::{BlockPos, RegistryKey};

/// Trigger tuning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriggerConfig {
    /// Ticks that must elapse between two sort rod uses.
    pub sort_rod_cooldown_ticks: u64,
    /// Ticks that must elapse between two shared chest interactions.
    pub shared_chest_cooldown_ticks: u64,
    /// Item that links a combiner to the container above it.
    pub combiner_link_item: RegistryKey,
    /// Overworld position of the shared container.
    pub shared_container_pos: BlockPos,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            sort_rod_cooldown_ticks: 8,
            shared_chest_cooldown_ticks: 6,
            combiner_link_item: RegistryKey::new("mypack", "test"),
            shared_container_pos: BlockPos::new(0, -64, 0),
        }
    }
}
