//! Builders for stacks, containers and small worlds.

use stash_core::{ItemStack, RegistryKey};
use stash_world::{block_types, Block, Container, Inventory, CHEST_SLOT_COUNT};
use std::collections::BTreeMap;

/// Slot description used by the builders: `(path, amount)` in the vanilla
/// namespace, or `None` for an empty slot.
pub type SlotSpec<'a> = Option<(&'a str, u32)>;

/// Vanilla stack with the default cap.
pub fn stack(path: &str, amount: u32) -> ItemStack {
    ItemStack::new(RegistryKey::minecraft(path), amount)
}

/// Inventory with exactly the given slots.
pub fn container(slots: &[SlotSpec<'_>]) -> Inventory {
    Inventory::from_slots(
        slots
            .iter()
            .map(|slot| slot.map(|(path, amount)| stack(path, amount)))
            .collect(),
    )
}

/// Inventory of `size` slots whose leading slots are `slots`.
pub fn padded(slots: &[SlotSpec<'_>], size: usize) -> Inventory {
    let mut raw = container(slots).slots().to_vec();
    raw.resize(size, None);
    Inventory::from_slots(raw)
}

/// Chest block holding `inventory`.
pub fn chest_with(inventory: Inventory) -> Block {
    Block::of(block_types::CHEST).with_inventory(inventory)
}

/// 27-slot chest whose leading slots are `slots`.
pub fn chest(slots: &[SlotSpec<'_>]) -> Block {
    chest_with(padded(slots, CHEST_SLOT_COUNT))
}

/// `(path, amount)` per slot, for compact assertions.
pub fn layout<C>(container: &C) -> Vec<Option<(String, u32)>>
where
    C: Container + ?Sized,
{
    (0..container.size())
        .map(|slot| {
            container
                .get(slot)
                .map(|s| (s.type_id.path().to_string(), s.amount))
        })
        .collect()
}

/// Amount per item type across any number of containers.
pub fn totals_by_type<'a, C, I>(containers: I) -> BTreeMap<RegistryKey, u64>
where
    C: Container + ?Sized + 'a,
    I: IntoIterator<Item = &'a C>,
{
    let mut totals = BTreeMap::new();
    for container in containers {
        for slot in 0..container.size() {
            if let Some(stack) = container.get(slot) {
                *totals.entry(stack.type_id.clone()).or_insert(0) += u64::from(stack.amount);
            }
        }
    }
    totals
}

/// Whether every stack respects `1 <= amount <= max_amount`.
pub fn amounts_within_caps<C>(container: &C) -> bool
where
    C: Container + ?Sized,
{
    (0..container.size())
        .filter_map(|slot| container.get(slot))
        .all(|stack| stack.amount >= 1 && stack.amount <= stack.max_amount)
}
