//! In-place container sorting and the comparison policies used with it.
//!
//! A policy answers "may `lhs` stay in front of `rhs`?". Returning `true` for
//! equal keys keeps the sort stable and makes a second run a no-op.

use stash_core::ItemStack;
use stash_world::Container;

use crate::tally::{tally, Tally, TallyOrder};

/// Bubble-sort `container` with `keep_order`, empty slots last.
///
/// At most `size` passes over the `size - 1` adjacent pairs; stops after the
/// first pass without a swap. Returns the number of swaps performed.
pub fn sort_container_by<C, P>(container: &mut C, mut keep_order: P) -> usize
where
    C: Container + ?Sized,
    P: FnMut(&ItemStack, &ItemStack) -> bool,
{
    let size = container.size();
    let mut swaps = 0;

    for _ in 0..size {
        let mut any_swapped = false;
        for slot in 0..size.saturating_sub(1) {
            let in_order = match (container.get(slot), container.get(slot + 1)) {
                (None, rhs) => rhs.is_none(),
                (Some(_), None) => true,
                (Some(lhs), Some(rhs)) => keep_order(lhs, rhs),
            };
            if !in_order {
                container.swap(slot, slot + 1);
                any_swapped = true;
                swaps += 1;
            }
        }
        if !any_swapped {
            break;
        }
    }

    swaps
}

/// Order by the weights in `weights`.
///
/// Heavier types first (types missing from the tally last), then larger
/// stacks within a type, then type id ascending.
pub fn by_weighting(weights: &Tally) -> impl Fn(&ItemStack, &ItemStack) -> bool + '_ {
    move |lhs, rhs| weighted_in_order(weights, lhs, rhs)
}

/// [`by_weighting`] over the container's own descending tally.
pub fn total_amount_desc<C>(container: &C) -> impl Fn(&ItemStack, &ItemStack) -> bool
where
    C: Container + ?Sized,
{
    let weights = tally(container, Some(TallyOrder::Descending));
    move |lhs, rhs| weighted_in_order(&weights, lhs, rhs)
}

/// Larger stack caps first.
pub fn stack_size_desc(lhs: &ItemStack, rhs: &ItemStack) -> bool {
    lhs.max_amount >= rhs.max_amount
}

fn weighted_in_order(weights: &Tally, lhs: &ItemStack, rhs: &ItemStack) -> bool {
    let weight_of = |stack: &ItemStack| weights.get(&stack.type_id).filter(|&total| total > 0);
    match (weight_of(lhs), weight_of(rhs)) {
        (None, None) => true,
        (None, Some(_)) => false,
        (Some(_), None) => true,
        (Some(left), Some(right)) if left != right => left > right,
        _ if lhs.type_id == rhs.type_id => lhs.amount >= rhs.amount,
        _ => lhs.type_id.to_string() <= rhs.type_id.to_string(),
    }
}
