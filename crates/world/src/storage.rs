use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use stash_core::{BlockPos, DimensionId, ItemStack, RegistryKey, Vec3};

use crate::{Block, Inventory, Range3};

/// Host world surface the sorting engine talks to.
///
/// Combines the inventory accessor (block position to container) with the
/// spatial query used by the range finder. Implementations must enumerate
/// [`World::blocks_in_box`] in an order that is stable for a fixed world state.
pub trait World {
    /// Block at `pos`, if one is placed there.
    fn block(&self, dimension: DimensionId, pos: BlockPos) -> Option<&Block>;

    /// Place (or replace) a block.
    fn set_block(&mut self, dimension: DimensionId, pos: BlockPos, block: Block);

    /// Inventory of the block at `pos`, if it has one.
    fn container(&self, dimension: DimensionId, pos: BlockPos) -> Option<&Inventory> {
        self.block(dimension, pos)?.inventory.as_ref()
    }

    /// Mutable inventory of the block at `pos`, if it has one.
    fn container_mut(&mut self, dimension: DimensionId, pos: BlockPos) -> Option<&mut Inventory>;

    /// Move the inventory out of the block at `pos`.
    ///
    /// Used when one operation needs two world containers at once; the caller
    /// must hand it back through [`World::attach_container`].
    fn detach_container(&mut self, dimension: DimensionId, pos: BlockPos) -> Option<Inventory>;

    /// Put an inventory back onto the block at `pos`. Returns `false` (and
    /// drops nothing) when no block is placed there.
    fn attach_container(
        &mut self,
        dimension: DimensionId,
        pos: BlockPos,
        inventory: Inventory,
    ) -> bool;

    /// Positions inside `range` whose block type is one of `types`.
    fn blocks_in_box(
        &self,
        dimension: DimensionId,
        range: &Range3,
        types: &[RegistryKey],
    ) -> Vec<BlockPos>;

    /// Spawn a dropped item entity at `location`.
    fn spawn_item(&mut self, dimension: DimensionId, location: Vec3, stack: ItemStack);
}

/// Dimension-scoped block address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockKey {
    /// Dimension the block lives in.
    pub dimension: DimensionId,
    /// Block coordinates.
    pub pos: BlockPos,
}

impl BlockKey {
    /// Build a key.
    pub const fn new(dimension: DimensionId, pos: BlockPos) -> Self {
        Self { dimension, pos }
    }
}

/// Item entity spawned into the world (shared chest drops).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DroppedStack {
    /// Dimension of the drop.
    #[serde(default)]
    pub dimension: DimensionId,
    /// Spawn location.
    pub location: Vec3,
    /// Dropped items.
    pub stack: ItemStack,
}

/// In-memory world keyed by `(dimension, x, y, z)`.
/// Uses BTreeMap so range scans come out in ascending x, then y, then z.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoreFixture", into = "StoreFixture")]
pub struct BlockStore {
    blocks: BTreeMap<BlockKey, Block>,
    dropped: Vec<DroppedStack>,
}

impl BlockStore {
    /// Empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of placed blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns true when no blocks are placed.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Remove the block at `pos`, returning it.
    pub fn remove_block(&mut self, dimension: DimensionId, pos: BlockPos) -> Option<Block> {
        self.blocks.remove(&BlockKey::new(dimension, pos))
    }

    /// Items dropped into the world so far.
    pub fn dropped(&self) -> &[DroppedStack] {
        &self.dropped
    }

    /// Iterate over all placed blocks in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&BlockKey, &Block)> {
        self.blocks.iter()
    }

    /// Parse a world from its JSON fixture form.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse world fixture")
    }

    /// Load a world fixture from disk.
    pub fn load_json(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read world fixture {}", path.display()))?;
        let store = Self::from_json_str(&json)
            .with_context(|| format!("Invalid world fixture {}", path.display()))?;
        debug!(blocks = store.len(), path = %path.display(), "loaded world fixture");
        Ok(store)
    }

    /// Write the world as pretty JSON, creating parent directories.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write world fixture {}", path.display()))
    }
}

impl World for BlockStore {
    fn block(&self, dimension: DimensionId, pos: BlockPos) -> Option<&Block> {
        self.blocks.get(&BlockKey::new(dimension, pos))
    }

    fn set_block(&mut self, dimension: DimensionId, pos: BlockPos, block: Block) {
        self.blocks.insert(BlockKey::new(dimension, pos), block);
    }

    fn container_mut(&mut self, dimension: DimensionId, pos: BlockPos) -> Option<&mut Inventory> {
        self.blocks
            .get_mut(&BlockKey::new(dimension, pos))?
            .inventory
            .as_mut()
    }

    fn detach_container(&mut self, dimension: DimensionId, pos: BlockPos) -> Option<Inventory> {
        self.blocks
            .get_mut(&BlockKey::new(dimension, pos))?
            .inventory
            .take()
    }

    fn attach_container(
        &mut self,
        dimension: DimensionId,
        pos: BlockPos,
        inventory: Inventory,
    ) -> bool {
        match self.blocks.get_mut(&BlockKey::new(dimension, pos)) {
            Some(block) => {
                block.inventory = Some(inventory);
                true
            }
            None => false,
        }
    }

    fn blocks_in_box(
        &self,
        dimension: DimensionId,
        range: &Range3,
        types: &[RegistryKey],
    ) -> Vec<BlockPos> {
        let start = BlockKey::new(dimension, range.min());
        let end = BlockKey::new(dimension, range.max());
        self.blocks
            .range(start..=end)
            .filter(|(key, block)| range.contains(key.pos) && types.contains(&block.type_id))
            .map(|(key, _)| key.pos)
            .collect()
    }

    fn spawn_item(&mut self, dimension: DimensionId, location: Vec3, stack: ItemStack) {
        self.dropped.push(DroppedStack {
            dimension,
            location,
            stack,
        });
    }
}

/// Serialized form: a flat list of placed blocks plus dropped items.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoreFixture {
    #[serde(default)]
    blocks: Vec<PlacedBlock>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    dropped: Vec<DroppedStack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PlacedBlock {
    #[serde(default)]
    dimension: DimensionId,
    pos: BlockPos,
    #[serde(flatten)]
    block: Block,
}

impl From<StoreFixture> for BlockStore {
    fn from(fixture: StoreFixture) -> Self {
        let blocks = fixture
            .blocks
            .into_iter()
            .map(|placed| (BlockKey::new(placed.dimension, placed.pos), placed.block))
            .collect();
        Self {
            blocks,
            dropped: fixture.dropped,
        }
    }
}

impl From<BlockStore> for StoreFixture {
    fn from(store: BlockStore) -> Self {
        let blocks = store
            .blocks
            .into_iter()
            .map(|(key, block)| PlacedBlock {
                dimension: key.dimension,
                pos: key.pos,
                block,
            })
            .collect();
        Self {
            blocks,
            dropped: store.dropped,
        }
    }
}
