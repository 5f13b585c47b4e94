//! Search volumes around an origin and the container scan inside them.

use crate::storage::World;
use serde::{Deserialize, Serialize};
use stash_core::{BlockPos, DimensionId, RegistryKey, Vec3};
use tracing::debug;

/// Axis-aligned inclusive block box between two corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range3 {
    /// First corner (minimum corner for boxes built by [`Range3::around`]).
    pub pos1: BlockPos,
    /// Second corner.
    pub pos2: BlockPos,
}

impl Range3 {
    /// Box spanning the two corners.
    pub fn new(pos1: BlockPos, pos2: BlockPos) -> Self {
        Self { pos1, pos2 }
    }

    /// Search box around `origin`.
    ///
    /// Horizontally the box spans `horizontal` blocks centred on the origin;
    /// vertically it spans `vertical` blocks starting at
    /// `origin.y + vertical_offset`. Corners are floored to block coordinates.
    pub fn around(origin: Vec3, horizontal: u32, vertical: u32, vertical_offset: i32) -> Self {
        let half = f64::from(horizontal) / 2.0;
        let bottom = origin.y + f64::from(vertical_offset);
        let pos1 = Vec3::new(origin.x - half, bottom, origin.z - half).floor();
        let top = bottom + f64::from(vertical);
        let pos2 = Vec3::new(origin.x + half, top, origin.z + half).floor();
        Self { pos1, pos2 }
    }

    /// Minimum corner.
    pub fn min(&self) -> BlockPos {
        BlockPos::new(
            self.pos1.x.min(self.pos2.x),
            self.pos1.y.min(self.pos2.y),
            self.pos1.z.min(self.pos2.z),
        )
    }

    /// Maximum corner.
    pub fn max(&self) -> BlockPos {
        BlockPos::new(
            self.pos1.x.max(self.pos2.x),
            self.pos1.y.max(self.pos2.y),
            self.pos1.z.max(self.pos2.z),
        )
    }

    /// Whether `pos` lies inside the box (bounds inclusive).
    pub fn contains(&self, pos: BlockPos) -> bool {
        let (min, max) = (self.min(), self.max());
        (min.x..=max.x).contains(&pos.x)
            && (min.y..=max.y).contains(&pos.y)
            && (min.z..=max.z).contains(&pos.z)
    }
}

/// A block in range that resolved to a container.
///
/// Only the address is kept; the inventory itself stays owned by the world and
/// is borrowed again when an operation needs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContainerBlock {
    /// Block position.
    pub pos: BlockPos,
    /// Block type (chest, barrel, ...).
    pub type_id: RegistryKey,
}

/// Containers inside `range` whose block type is in `types`.
///
/// Stops after `max_count` matches; later matches are dropped even when they
/// lie inside the box. Order follows [`World::blocks_in_box`].
pub fn containers_in_range<W>(
    world: &W,
    dimension: DimensionId,
    range: &Range3,
    types: &[RegistryKey],
    max_count: usize,
) -> Vec<ContainerBlock>
where
    W: World + ?Sized,
{
    let mut results = Vec::new();

    for pos in world.blocks_in_box(dimension, range, types) {
        if results.len() >= max_count {
            break;
        }
        let Some(block) = world.block(dimension, pos) else {
            continue;
        };
        if block.inventory.is_some() {
            results.push(ContainerBlock {
                pos,
                type_id: block.type_id.clone(),
            });
        }
    }

    debug!(
        dimension = %dimension,
        found = results.len(),
        max_count,
        "scanned sorting range"
    );
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::Block;
    use crate::storage::BlockStore;

    #[test]
    fn default_extents_around_block_origin() {
        let range = Range3::around(Vec3::new(10.0, 64.0, -3.0), 15, 5, -1);
        assert_eq!(range.pos1, BlockPos::new(2, 63, -11));
        assert_eq!(range.pos2, BlockPos::new(17, 68, 4));
    }

    #[test]
    fn contains_is_inclusive_and_corner_agnostic() {
        let range = Range3::new(BlockPos::new(5, 5, 5), BlockPos::new(0, 0, 0));
        assert!(range.contains(BlockPos::new(0, 0, 0)));
        assert!(range.contains(BlockPos::new(5, 5, 5)));
        assert!(!range.contains(BlockPos::new(6, 5, 5)));
        assert_eq!(range.min(), BlockPos::new(0, 0, 0));
    }

    #[test]
    fn scan_skips_blocks_without_inventory() {
        let mut world = BlockStore::new();
        let dim = DimensionId::Overworld;
        world.set_block(dim, BlockPos::new(0, 0, 0), Block::chest());
        world.set_block(dim, BlockPos::new(1, 0, 0), Block::of("minecraft:chest"));

        let range = Range3::new(BlockPos::new(-2, -2, -2), BlockPos::new(2, 2, 2));
        let types = [RegistryKey::minecraft("chest")];
        let found = containers_in_range(&world, dim, &range, &types, 50);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].pos, BlockPos::new(0, 0, 0));
    }

    #[test]
    fn scan_honours_max_count() {
        let mut world = BlockStore::new();
        let dim = DimensionId::Overworld;
        for x in 0..10 {
            world.set_block(dim, BlockPos::new(x, 0, 0), Block::barrel());
        }
        let range = Range3::new(BlockPos::new(0, 0, 0), BlockPos::new(9, 0, 0));
        let types = [RegistryKey::minecraft("barrel")];

        let found = containers_in_range(&world, dim, &range, &types, 4);
        let xs: Vec<_> = found.iter().map(|c| c.pos.x).collect();
        assert_eq!(xs, vec![0, 1, 2, 3]);
        assert!(containers_in_range(&world, dim, &range, &types, 0).is_empty());
    }
}
