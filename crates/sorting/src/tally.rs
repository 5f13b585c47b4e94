//! Per-type totals of a container.

use serde::{Deserialize, Serialize};
use stash_core::RegistryKey;
use stash_world::Container;

/// Re-sort direction for a [`Tally`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TallyOrder {
    /// Smallest total first.
    Ascending,
    /// Largest total first.
    Descending,
}

/// Total amount for one item type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyEntry {
    /// Item type.
    pub type_id: RegistryKey,
    /// Sum of all stack amounts of this type.
    pub amount: u64,
}

/// Ordered map from item type to total amount.
///
/// Without an explicit order entries keep first-seen slot order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tally {
    entries: Vec<TallyEntry>,
}

impl Tally {
    /// Total for `type_id`, if any stack of it was seen.
    pub fn get(&self, type_id: &RegistryKey) -> Option<u64> {
        self.entries
            .iter()
            .find(|entry| &entry.type_id == type_id)
            .map(|entry| entry.amount)
    }

    /// Entries in current order.
    pub fn iter(&self) -> impl Iterator<Item = &TallyEntry> {
        self.entries.iter()
    }

    /// Number of distinct types.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the container held nothing.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum over all types.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|entry| entry.amount).sum()
    }

    /// Stable re-sort by total; ties keep their relative order.
    #[must_use]
    pub fn sorted(mut self, order: TallyOrder) -> Self {
        match order {
            TallyOrder::Ascending => self.entries.sort_by(|a, b| a.amount.cmp(&b.amount)),
            TallyOrder::Descending => self.entries.sort_by(|a, b| b.amount.cmp(&a.amount)),
        }
        self
    }

    fn add(&mut self, type_id: &RegistryKey, amount: u32) {
        match self.entries.iter_mut().find(|entry| &entry.type_id == type_id) {
            Some(entry) => entry.amount += u64::from(amount),
            None => self.entries.push(TallyEntry {
                type_id: type_id.clone(),
                amount: u64::from(amount),
            }),
        }
    }
}

impl FromIterator<(RegistryKey, u64)> for Tally {
    fn from_iter<T: IntoIterator<Item = (RegistryKey, u64)>>(iter: T) -> Self {
        let mut result = Tally::default();
        for (type_id, amount) in iter {
            match result.entries.iter_mut().find(|entry| entry.type_id == type_id) {
                Some(entry) => entry.amount += amount,
                None => result.entries.push(TallyEntry { type_id, amount }),
            }
        }
        result
    }
}

/// Sum stack amounts per item type. Empty slots contribute nothing.
pub fn tally<C>(container: &C, order: Option<TallyOrder>) -> Tally
where
    C: Container + ?Sized,
{
    let mut result = Tally::default();
    for slot in 0..container.size() {
        if let Some(stack) = container.get(slot) {
            result.add(&stack.type_id, stack.amount);
        }
    }
    match order {
        Some(order) => result.sorted(order),
        None => result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stash_core::ItemStack;
    use stash_world::Inventory;

    fn stack(path: &str, amount: u32) -> Option<ItemStack> {
        Some(ItemStack::new(RegistryKey::minecraft(path), amount))
    }

    fn keys(tally: &Tally) -> Vec<String> {
        tally.iter().map(|entry| entry.type_id.path().to_string()).collect()
    }

    #[test]
    fn sums_per_type_in_first_seen_order() {
        let inv = Inventory::from_slots(vec![
            stack("oak_log", 3),
            stack("stone", 5),
            stack("oak_log", 2),
            None,
        ]);
        let result = tally(&inv, None);
        assert_eq!(keys(&result), vec!["oak_log", "stone"]);
        assert_eq!(result.get(&RegistryKey::minecraft("oak_log")), Some(5));
        assert_eq!(result.get(&RegistryKey::minecraft("stone")), Some(5));
        assert_eq!(result.total(), inv.total_amount());
    }

    #[test]
    fn ordering_is_stable() {
        let inv = Inventory::from_slots(vec![
            stack("a", 2),
            stack("b", 7),
            stack("c", 2),
            stack("d", 1),
        ]);
        assert_eq!(
            keys(&tally(&inv, Some(TallyOrder::Descending))),
            vec!["b", "a", "c", "d"]
        );
        assert_eq!(
            keys(&tally(&inv, Some(TallyOrder::Ascending))),
            vec!["d", "a", "c", "b"]
        );
    }

    #[test]
    fn empty_container_has_empty_tally() {
        let result = tally(&Inventory::new(27), Some(TallyOrder::Descending));
        assert!(result.is_empty());
        assert_eq!(result.total(), 0);
    }
}
