//! Seeded random containers and worlds for scenario tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use stash_core::{BlockPos, DimensionId, ItemStack, RegistryKey};
use stash_world::{BlockStore, Inventory, World, CHEST_SLOT_COUNT};

use crate::fixtures::chest_with;
use crate::strategies::ITEM_POOL;

/// Container of `size` slots, each filled with probability `fill`.
pub fn seeded_container(seed: u64, size: usize, fill: f64) -> Inventory {
    let mut rng = StdRng::seed_from_u64(seed);
    random_container(&mut rng, size, fill)
}

/// World with `count` chests in a row along +x starting at `start`, each half
/// full of random stacks.
pub fn seeded_world(seed: u64, start: BlockPos, count: i32) -> BlockStore {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut world = BlockStore::new();
    for offset in 0..count {
        let inventory = random_container(&mut rng, CHEST_SLOT_COUNT, 0.5);
        world.set_block(DimensionId::Overworld, start.east(offset), chest_with(inventory));
    }
    world
}

fn random_container(rng: &mut StdRng, size: usize, fill: f64) -> Inventory {
    let slots = (0..size)
        .map(|_| {
            if !rng.gen_bool(fill.clamp(0.0, 1.0)) {
                return None;
            }
            let (path, cap) = ITEM_POOL[rng.gen_range(0..ITEM_POOL.len())];
            let amount = rng.gen_range(1..=cap);
            Some(ItemStack::new(RegistryKey::minecraft(path), amount).with_max_amount(cap))
        })
        .collect();
    Inventory::from_slots(slots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stash_world::Container;

    #[test]
    fn same_seed_same_container() {
        assert_eq!(seeded_container(7, 27, 0.6), seeded_container(7, 27, 0.6));
        assert!(seeded_container(7, 27, 0.0).is_empty());
        assert_eq!(seeded_container(7, 9, 1.0).empty_slot_count(), 0);
    }

    #[test]
    fn seeded_world_places_chests() {
        let world = seeded_world(1, BlockPos::new(0, 64, 0), 3);
        assert_eq!(world.len(), 3);
        assert!(world
            .container(DimensionId::Overworld, BlockPos::new(2, 64, 0))
            .is_some());
    }
}
