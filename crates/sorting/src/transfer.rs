//! Moving stacks between containers.

use serde::{Deserialize, Serialize};
use stash_core::{ItemStack, RegistryKey};
use stash_world::{swap_between, Container};
use tracing::debug;

/// Which way a range transfer moves items, seen from the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferDirection {
    /// Player inventory into containers.
    Deposit,
    /// Containers into the player inventory.
    Take,
}

/// Units of one source stack that changed container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRecord {
    /// Item type moved.
    pub type_id: RegistryKey,
    /// Translation key used when reporting the move.
    pub translation_key: String,
    /// Units moved (always positive).
    pub amount: u32,
}

impl TransferRecord {
    fn new(stack: &ItemStack, amount: u32) -> Self {
        Self {
            type_id: stack.type_id.clone(),
            translation_key: stack.translation_key(),
            amount,
        }
    }
}

/// Everything one transfer call moved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferReport {
    /// One record per source or receiver stack that moved units.
    pub records: Vec<TransferRecord>,
}

impl TransferReport {
    /// Whether at least one unit moved.
    pub fn moved(&self) -> bool {
        self.records.iter().any(|record| record.amount > 0)
    }

    /// Units moved in total.
    pub fn total(&self) -> u64 {
        self.records
            .iter()
            .map(|record| u64::from(record.amount))
            .sum()
    }

    /// Append the records of another report.
    pub fn extend(&mut self, other: TransferReport) {
        self.records.extend(other.records);
    }
}

/// Move stackable stacks from `source` into `dest`.
///
/// Each source stack first tops up compatible stacks in `dest`. A remainder is
/// placed into the first empty slot of `dest` when something already matched,
/// or always when `matching_only` is false. Only one empty slot is used per
/// source stack; a partially drained stack is examined again before moving on.
pub fn deposit<S, D>(source: &mut S, dest: &mut D, matching_only: bool) -> TransferReport
where
    S: Container + ?Sized,
    D: Container + ?Sized,
{
    let mut report = TransferReport::default();
    let mut slot = 0;

    while slot < source.size() {
        let Some(stack) = source.get(slot).cloned() else {
            slot += 1;
            continue;
        };
        if !stack.is_stackable() {
            slot += 1;
            continue;
        }

        let mut left = stack.amount;
        let mut moved = 0;
        for dest_slot in 0..dest.size() {
            if left == 0 {
                break;
            }
            let Some(existing) = dest.get(dest_slot) else {
                continue;
            };
            if !existing.is_stackable_with(&stack) || existing.is_full() {
                continue;
            }
            let amount = existing.remaining_capacity().min(left);
            let merged = existing.with_amount(existing.amount + amount);
            dest.set(dest_slot, Some(merged));
            left -= amount;
            moved += amount;
        }

        if left > 0 && (moved > 0 || !matching_only) {
            if let Some(empty) = dest.first_empty_slot() {
                dest.set(empty, Some(stack.with_amount(left)));
                moved += left;
                left = 0;
            }
        }

        if moved == 0 {
            slot += 1;
            continue;
        }

        report.records.push(TransferRecord::new(&stack, moved));
        if left > 0 {
            source.set(slot, Some(stack.with_amount(left)));
        } else {
            source.set(slot, None);
            slot += 1;
        }
    }

    debug!(moved = report.total(), stacks = report.records.len(), "deposit");
    report
}

/// Top up the receiver's non-full stackable stacks from `container`.
///
/// Never places a stack into an empty receiver slot.
pub fn take<R, C>(receiver: &mut R, container: &mut C) -> TransferReport
where
    R: Container + ?Sized,
    C: Container + ?Sized,
{
    let mut report = TransferReport::default();

    for slot in 0..receiver.size() {
        let Some(stack) = receiver.get(slot).cloned() else {
            continue;
        };
        if !stack.is_stackable() || stack.is_full() {
            continue;
        }

        let mut room = stack.remaining_capacity();
        let mut taken = 0;
        for source_slot in 0..container.size() {
            if room == 0 {
                break;
            }
            let Some(candidate) = container.get(source_slot) else {
                continue;
            };
            if !candidate.is_stackable_with(&stack) {
                continue;
            }
            let amount = candidate.amount.min(room);
            let rest = candidate.amount - amount;
            let remainder = (rest > 0).then(|| candidate.with_amount(rest));
            container.set(source_slot, remainder);
            room -= amount;
            taken += amount;
        }

        if taken > 0 {
            receiver.set(slot, Some(stack.with_amount(stack.amount + taken)));
            report.records.push(TransferRecord::new(&stack, taken));
        }
    }

    debug!(moved = report.total(), stacks = report.records.len(), "take");
    report
}

/// Insert a whole stack: merge into compatible stacks, then the first empty
/// slot. Returns whatever did not fit.
pub fn insert_whole<D>(dest: &mut D, stack: ItemStack) -> Option<ItemStack>
where
    D: Container + ?Sized,
{
    let offered = stack.amount;
    let remainder = dest.add_item(stack);
    debug!(
        offered,
        rejected = remainder.as_ref().map_or(0, |s| s.amount),
        "insert"
    );
    remainder
}

/// Remove the stack in the highest occupied slot.
pub fn take_last<C>(container: &mut C) -> Option<(usize, ItemStack)>
where
    C: Container + ?Sized,
{
    let slot = (0..container.size())
        .rev()
        .find(|&slot| container.get(slot).is_some())?;
    container.take(slot).map(|stack| (slot, stack))
}

/// Swap slot `i` of `a` with slot `i` of `b` for every index both share.
/// Returns the number of slot pairs visited.
pub fn swap_contents<A, B>(a: &mut A, b: &mut B) -> usize
where
    A: Container,
    B: Container,
{
    let shared = a.size().min(b.size());
    for slot in 0..shared {
        swap_between(&mut *a, slot, &mut *b, slot);
    }
    shared
}

#[cfg(test)]
mod tests {
    use super::*;
    use stash_world::Inventory;

    fn stack(path: &str, amount: u32) -> Option<ItemStack> {
        Some(ItemStack::new(RegistryKey::minecraft(path), amount))
    }

    fn amounts(inv: &Inventory) -> Vec<Option<u32>> {
        inv.slots()
            .iter()
            .map(|slot| slot.as_ref().map(|s| s.amount))
            .collect()
    }

    #[test]
    fn deposit_tops_up_then_uses_one_empty_slot() {
        let mut player = Inventory::from_slots(vec![stack("stone", 40)]);
        let mut chest = Inventory::from_slots(vec![stack("stone", 60), None, None]);

        let report = deposit(&mut player, &mut chest, true);

        assert!(report.moved());
        assert_eq!(report.total(), 40);
        assert_eq!(amounts(&chest), vec![Some(64), Some(36), None]);
        assert!(player.is_empty());
    }

    #[test]
    fn deposit_matching_only_skips_unknown_types() {
        let mut player = Inventory::from_slots(vec![stack("dirt", 5), stack("stone", 3)]);
        let mut chest = Inventory::from_slots(vec![stack("stone", 1), None]);

        let report = deposit(&mut player, &mut chest, true);
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.records[0].type_id, RegistryKey::minecraft("stone"));
        assert_eq!(amounts(&player), vec![Some(5), None]);
        assert_eq!(amounts(&chest), vec![Some(4), None]);

        let report = deposit(&mut player, &mut chest, false);
        assert!(report.moved());
        assert_eq!(amounts(&chest), vec![Some(4), Some(5)]);
    }

    #[test]
    fn deposit_leaves_partial_remainder_in_source() {
        let mut player = Inventory::from_slots(vec![stack("stone", 10)]);
        let mut chest = Inventory::from_slots(vec![stack("stone", 60)]);

        let report = deposit(&mut player, &mut chest, true);
        assert_eq!(report.total(), 4);
        assert_eq!(amounts(&player), vec![Some(6)]);
        assert_eq!(amounts(&chest), vec![Some(64)]);
    }

    #[test]
    fn deposit_ignores_unstackables() {
        let sword = ItemStack::unstackable(RegistryKey::minecraft("iron_sword"));
        let mut player = Inventory::from_slots(vec![Some(sword)]);
        let mut chest = Inventory::new(3);
        assert!(!deposit(&mut player, &mut chest, false).moved());
        assert!(chest.is_empty());
    }

    #[test]
    fn take_fills_existing_stacks_only() {
        let mut player = Inventory::from_slots(vec![stack("stone", 60), None]);
        let mut chest =
            Inventory::from_slots(vec![stack("stone", 3), stack("stone", 5), stack("dirt", 9)]);

        let report = take(&mut player, &mut chest);
        assert_eq!(report.total(), 4);
        assert_eq!(amounts(&player), vec![Some(64), None]);
        assert_eq!(amounts(&chest), vec![None, Some(4), Some(9)]);
    }

    #[test]
    fn insert_whole_returns_remainder() {
        let mut hopper = Inventory::from_slots(vec![stack("stone", 60)]);
        let rest = insert_whole(&mut hopper, ItemStack::new(RegistryKey::minecraft("stone"), 10));
        assert_eq!(rest.map(|s| s.amount), Some(6));
        assert_eq!(amounts(&hopper), vec![Some(64)]);
    }

    #[test]
    fn take_last_scans_from_the_end() {
        let mut hopper = Inventory::from_slots(vec![stack("a", 1), stack("b", 2), None]);
        let (slot, stack) = take_last(&mut hopper).unwrap();
        assert_eq!((slot, stack.amount), (1, 2));
        assert_eq!(take_last(&mut hopper).map(|(slot, _)| slot), Some(0));
        assert!(take_last(&mut hopper).is_none());
    }

    #[test]
    fn swap_contents_stops_at_shorter_container() {
        let mut small = Inventory::from_slots(vec![stack("a", 1)]);
        let mut large = Inventory::from_slots(vec![None, stack("b", 2)]);
        assert_eq!(swap_contents(&mut small, &mut large), 1);
        assert_eq!(amounts(&small), vec![None]);
        assert_eq!(amounts(&large), vec![Some(1), Some(2)]);
    }
}
