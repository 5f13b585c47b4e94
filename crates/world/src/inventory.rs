//! Slotted item storage.
//!
//! [`Container`] is the seam every sorting and transfer routine works
//! against: a fixed number of slots, each empty or holding one [`ItemStack`].
//! [`Inventory`] is the owned implementation used for chests, barrels,
//! hoppers and player inventories.

use serde::{Deserialize, Serialize};
use stash_core::ItemStack;

/// Number of slots in a player inventory (hotbar included).
pub const PLAYER_INVENTORY_SIZE: usize = 36;

/// Number of hotbar slots at the start of a player inventory.
pub const HOTBAR_SIZE: usize = 9;

/// Fixed-size sequence of optional item stacks.
///
/// Slot indices are `0..size()`. Implementations must never change their size
/// and must ignore (returning `false` / `None`) out-of-range indices.
pub trait Container {
    /// Number of slots.
    fn size(&self) -> usize;

    /// Stack in `slot`, if any.
    fn get(&self, slot: usize) -> Option<&ItemStack>;

    /// Replace the contents of `slot`. Returns `false` for an invalid index.
    fn set(&mut self, slot: usize, stack: Option<ItemStack>) -> bool;

    /// Remove and return the stack in `slot`.
    fn take(&mut self, slot: usize) -> Option<ItemStack> {
        let stack = self.get(slot).cloned();
        if stack.is_some() {
            self.set(slot, None);
        }
        stack
    }

    /// Exchange the contents of two slots of this container.
    fn swap(&mut self, a: usize, b: usize) {
        if a == b || a >= self.size() || b >= self.size() {
            return;
        }
        let first = self.take(a);
        let second = self.take(b);
        self.set(a, second);
        self.set(b, first);
    }

    /// Index of the first empty slot.
    fn first_empty_slot(&self) -> Option<usize> {
        (0..self.size()).find(|&slot| self.get(slot).is_none())
    }

    /// Number of empty slots.
    fn empty_slot_count(&self) -> usize {
        (0..self.size())
            .filter(|&slot| self.get(slot).is_none())
            .count()
    }

    /// Whether every slot is empty.
    fn is_empty(&self) -> bool {
        (0..self.size()).all(|slot| self.get(slot).is_none())
    }

    /// Sum of all stack amounts.
    fn total_amount(&self) -> u64 {
        (0..self.size())
            .filter_map(|slot| self.get(slot))
            .map(|stack| u64::from(stack.amount))
            .sum()
    }

    /// Add a stack, merging into compatible stacks first and then using the
    /// first empty slot. Returns whatever did not fit.
    fn add_item(&mut self, mut stack: ItemStack) -> Option<ItemStack> {
        for slot in 0..self.size() {
            let Some(existing) = self.get(slot) else {
                continue;
            };
            if !existing.is_stackable_with(&stack) || existing.is_full() {
                continue;
            }
            let moved = existing.remaining_capacity().min(stack.amount);
            let merged = existing.with_amount(existing.amount + moved);
            self.set(slot, Some(merged));
            stack.amount -= moved;
            if stack.amount == 0 {
                return None;
            }
        }

        match self.first_empty_slot() {
            Some(slot) => {
                self.set(slot, Some(stack));
                None
            }
            None => Some(stack),
        }
    }
}

/// Exchange slot `a` of `left` with slot `b` of `right`.
pub fn swap_between(left: &mut dyn Container, a: usize, right: &mut dyn Container, b: usize) {
    if a >= left.size() || b >= right.size() {
        return;
    }
    let from_left = left.take(a);
    let from_right = right.take(b);
    left.set(a, from_right);
    right.set(b, from_left);
}

/// Owned container backed by a vector whose length is fixed at creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    slots: Vec<Option<ItemStack>>,
}

impl Inventory {
    /// Create an empty inventory with `size` slots.
    pub fn new(size: usize) -> Self {
        Self {
            slots: vec![None; size],
        }
    }

    /// Create an empty 36-slot player inventory.
    pub fn player() -> Self {
        Self::new(PLAYER_INVENTORY_SIZE)
    }

    /// Wrap an explicit slot layout.
    pub fn from_slots(slots: Vec<Option<ItemStack>>) -> Self {
        Self { slots }
    }

    /// Raw slot view.
    pub fn slots(&self) -> &[Option<ItemStack>] {
        &self.slots
    }

    /// Iterate over occupied slots with their indices.
    pub fn stacks(&self) -> impl Iterator<Item = (usize, &ItemStack)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.as_ref().map(|stack| (idx, stack)))
    }
}

impl Container for Inventory {
    fn size(&self) -> usize {
        self.slots.len()
    }

    fn get(&self, slot: usize) -> Option<&ItemStack> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    fn set(&mut self, slot: usize, stack: Option<ItemStack>) -> bool {
        match self.slots.get_mut(slot) {
            Some(entry) => {
                *entry = stack;
                true
            }
            None => false,
        }
    }

    fn take(&mut self, slot: usize) -> Option<ItemStack> {
        self.slots.get_mut(slot).and_then(Option::take)
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a < self.slots.len() && b < self.slots.len() {
            self.slots.swap(a, b);
        }
    }
}
