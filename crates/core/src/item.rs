//! Item stacks as seen by container operations.

use crate::registry::RegistryKey;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stack cap used when a fixture or caller does not specify one.
pub const DEFAULT_MAX_AMOUNT: u32 = 64;

fn default_max_amount() -> u32 {
    DEFAULT_MAX_AMOUNT
}

/// A single enchantment entry (type + level).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Enchantment {
    /// Enchantment type, e.g. `minecraft:efficiency`.
    pub kind: RegistryKey,
    /// Enchantment level (1-based).
    pub level: u8,
}

/// Per-stack attributes that decide whether two stacks of the same type may
/// share a slot.
///
/// Container operations never look inside; they only compare whole component
/// sets through [`ItemStack::is_stackable_with`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemComponents {
    /// Remaining durability for damageable items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub durability: Option<u32>,
    /// Applied enchantments, in application order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub enchantments: Vec<Enchantment>,
    /// Raw lore lines shown under the item name.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub lore: Vec<String>,
    /// Custom display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_tag: Option<String>,
}

impl ItemComponents {
    /// True when no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.durability.is_none()
            && self.enchantments.is_empty()
            && self.lore.is_empty()
            && self.name_tag.is_none()
    }
}

/// Error returned when a deserialized stack breaks `1 <= amount <= max_amount`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemStackError {
    /// A present stack must hold at least one item.
    #[error("stack of {0} has amount 0")]
    Empty(RegistryKey),
    /// The amount exceeds the stack cap.
    #[error("stack of {type_id} holds {amount}, above its cap of {max_amount}")]
    OverCap {
        /// Item type of the stack.
        type_id: RegistryKey,
        /// Stored amount.
        amount: u32,
        /// Stack cap.
        max_amount: u32,
    },
}

/// A quantity of one item type occupying one container slot.
///
/// Invariant maintained by every container operation and checked on
/// deserialize: `1 <= amount <= max_amount`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawItemStack")]
pub struct ItemStack {
    /// Item type identifier.
    pub type_id: RegistryKey,
    /// Number of items in the stack.
    pub amount: u32,
    /// Stack cap for this item type.
    #[serde(default = "default_max_amount")]
    pub max_amount: u32,
    /// Compatibility attributes.
    #[serde(default, skip_serializing_if = "ItemComponents::is_empty")]
    pub components: ItemComponents,
}

#[derive(Deserialize)]
struct RawItemStack {
    type_id: RegistryKey,
    amount: u32,
    #[serde(default = "default_max_amount")]
    max_amount: u32,
    #[serde(default)]
    components: ItemComponents,
}

impl TryFrom<RawItemStack> for ItemStack {
    type Error = ItemStackError;

    fn try_from(raw: RawItemStack) -> Result<Self, Self::Error> {
        if raw.amount == 0 {
            return Err(ItemStackError::Empty(raw.type_id));
        }
        if raw.amount > raw.max_amount {
            return Err(ItemStackError::OverCap {
                type_id: raw.type_id,
                amount: raw.amount,
                max_amount: raw.max_amount,
            });
        }
        Ok(Self {
            type_id: raw.type_id,
            amount: raw.amount,
            max_amount: raw.max_amount,
            components: raw.components,
        })
    }
}

impl ItemStack {
    /// Create a plain stack with the default cap of 64.
    pub fn new(type_id: RegistryKey, amount: u32) -> Self {
        Self {
            type_id,
            amount,
            max_amount: DEFAULT_MAX_AMOUNT,
            components: ItemComponents::default(),
        }
    }

    /// Create a single, non-stackable item (tools, rods, ...).
    pub fn unstackable(type_id: RegistryKey) -> Self {
        Self::new(type_id, 1).with_max_amount(1)
    }

    /// Replace the stack cap.
    #[must_use]
    pub fn with_max_amount(mut self, max_amount: u32) -> Self {
        self.max_amount = max_amount;
        self
    }

    /// Replace the compatibility attributes.
    #[must_use]
    pub fn with_components(mut self, components: ItemComponents) -> Self {
        self.components = components;
        self
    }

    /// Clone of this stack carrying a different amount.
    #[must_use]
    pub fn with_amount(&self, amount: u32) -> Self {
        let mut stack = self.clone();
        stack.amount = amount;
        stack
    }

    /// Whether more than one item of this type fits in a slot.
    pub fn is_stackable(&self) -> bool {
        self.max_amount > 1
    }

    /// Whether `other` may be merged into the same slot as `self`.
    pub fn is_stackable_with(&self, other: &ItemStack) -> bool {
        self.is_stackable()
            && other.is_stackable()
            && self.type_id == other.type_id
            && self.components == other.components
    }

    /// Check if this stack is at max capacity.
    pub fn is_full(&self) -> bool {
        self.amount >= self.max_amount
    }

    /// Units that can still be added before the stack is full.
    pub fn remaining_capacity(&self) -> u32 {
        self.max_amount.saturating_sub(self.amount)
    }

    /// Translation key for chat messages, e.g. `item.iron_ingot.name`.
    pub fn translation_key(&self) -> String {
        self.type_id.translation_key("item")
    }
}
