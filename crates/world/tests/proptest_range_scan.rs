//! Property-based tests for the container scan
//!
//! Validates:
//! - Every container found lies inside the box and has a requested type
//! - The result never exceeds the cap
//! - Results come out in ascending position order
//! - Nothing outside the requested dimension is reported

use proptest::prelude::*;
use stash_core::{BlockPos, DimensionId, RegistryKey};
use stash_world::{block_types, containers_in_range, Block, BlockStore, Range3, World};

fn arb_pos() -> impl Strategy<Value = BlockPos> {
    (-12i32..=12, 58i32..=70, -12i32..=12).prop_map(|(x, y, z)| BlockPos::new(x, y, z))
}

fn arb_block() -> impl Strategy<Value = Block> {
    prop_oneof![
        Just(Block::chest()),
        Just(Block::barrel()),
        Just(Block::hopper(stash_world::Facing::Down)),
        Just(Block::of("minecraft:stone")),
        Just(Block::of(block_types::CHEST)),
    ]
}

fn arb_dimension() -> impl Strategy<Value = DimensionId> {
    prop_oneof![
        Just(DimensionId::Overworld),
        Just(DimensionId::Nether),
        Just(DimensionId::End),
    ]
}

fn chest_types() -> Vec<RegistryKey> {
    [block_types::CHEST, block_types::BARREL]
        .into_iter()
        .filter_map(|id| RegistryKey::parse(id).ok())
        .collect()
}

proptest! {
    /// Property: Scan results honour the box, the type filter and the cap
    #[test]
    fn scan_respects_box_types_and_cap(
        placed in prop::collection::vec((arb_dimension(), arb_pos(), arb_block()), 0..80),
        corner_a in arb_pos(),
        corner_b in arb_pos(),
        max_count in 0usize..20,
    ) {
        let mut world = BlockStore::new();
        for (dimension, pos, block) in placed {
            world.set_block(dimension, pos, block);
        }
        let range = Range3::new(corner_a, corner_b);
        let types = chest_types();

        let found = containers_in_range(&world, DimensionId::Overworld, &range, &types, max_count);

        prop_assert!(found.len() <= max_count);
        for entry in &found {
            prop_assert!(range.contains(entry.pos));
            prop_assert!(types.contains(&entry.type_id));
            let block = world.block(DimensionId::Overworld, entry.pos);
            prop_assert!(block.is_some_and(|b| b.inventory.is_some()));
        }
        prop_assert!(found.windows(2).all(|pair| pair[0].pos < pair[1].pos));
    }

    /// Property: An uncapped scan finds every matching container in the box
    #[test]
    fn uncapped_scan_is_complete(
        placed in prop::collection::vec((arb_pos(), arb_block()), 0..60),
        corner_a in arb_pos(),
        corner_b in arb_pos(),
    ) {
        let mut world = BlockStore::new();
        for (pos, block) in placed {
            world.set_block(DimensionId::Overworld, pos, block);
        }
        let range = Range3::new(corner_a, corner_b);
        let types = chest_types();

        let found = containers_in_range(&world, DimensionId::Overworld, &range, &types, usize::MAX);
        let expected = world
            .iter()
            .filter(|(key, block)| {
                key.dimension == DimensionId::Overworld
                    && range.contains(key.pos)
                    && types.contains(&block.type_id)
                    && block.inventory.is_some()
            })
            .count();
        prop_assert_eq!(found.len(), expected);
    }
}
