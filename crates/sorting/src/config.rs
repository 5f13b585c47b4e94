use serde::{Deserialize, Serialize};
use stash_core::{RegistryKey, Vec3};
use stash_world::{block_types, Range3};

/// Search range and container filter for range transfers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortingConfig {
    /// Horizontal extent of the search box, centred on the origin.
    pub range_horizontal: u32,
    /// Vertical extent of the search box.
    pub range_vertical: u32,
    /// Offset of the box bottom from the origin's y.
    pub range_vertical_offset: i32,
    /// Containers visited per search before the scan stops.
    pub max_container_count: usize,
    /// Block types considered containers for range transfers.
    pub container_block_types: Vec<RegistryKey>,
}

impl Default for SortingConfig {
    fn default() -> Self {
        Self {
            range_horizontal: 15,
            range_vertical: 5,
            range_vertical_offset: -1,
            max_container_count: 50,
            container_block_types: [block_types::CHEST, block_types::BARREL]
                .into_iter()
                .filter_map(|id| RegistryKey::parse(id).ok())
                .collect(),
        }
    }
}

impl SortingConfig {
    /// Search box around `origin`.
    pub fn range_around(&self, origin: Vec3) -> Range3 {
        Range3::around(
            origin,
            self.range_horizontal,
            self.range_vertical,
            self.range_vertical_offset,
        )
    }
}
