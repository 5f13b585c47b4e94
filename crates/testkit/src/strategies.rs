//! Proptest strategies for containers.

use proptest::prelude::*;
use stash_core::{ItemComponents, ItemStack, RegistryKey};
use stash_world::Inventory;

/// Item types used by generated stacks with their stack caps. Few types so
/// merges actually happen.
pub const ITEM_POOL: [(&str, u32); 5] = [
    ("stone", 64),
    ("dirt", 64),
    ("oak_log", 64),
    ("ender_pearl", 16),
    ("iron_sword", 1),
];

/// A valid stack drawn from [`ITEM_POOL`] with an amount within its cap.
/// Some stacks carry a name tag so component-gated stacking is exercised.
pub fn arb_stack() -> impl Strategy<Value = ItemStack> {
    (prop::sample::select(ITEM_POOL.to_vec()), any::<bool>()).prop_flat_map(
        |((path, cap), named)| {
            (1..=cap).prop_map(move |amount| {
                let mut stack =
                    ItemStack::new(RegistryKey::minecraft(path), amount).with_max_amount(cap);
                if named {
                    stack = stack.with_components(ItemComponents {
                        name_tag: Some("tagged".into()),
                        ..ItemComponents::default()
                    });
                }
                stack
            })
        },
    )
}

/// A slot that is empty roughly a third of the time.
pub fn arb_slot() -> impl Strategy<Value = Option<ItemStack>> {
    prop_oneof![1 => Just(None), 2 => arb_stack().prop_map(Some)]
}

/// An inventory with a size in `sizes`.
pub fn arb_container(
    sizes: std::ops::RangeInclusive<usize>,
) -> impl Strategy<Value = Inventory> {
    prop::collection::vec(arb_slot(), sizes).prop_map(Inventory::from_slots)
}
