//! Stack merging and left-compaction.

use stash_world::Container;

/// Merge partial stacks, then move stacks towards the front.
///
/// Merge pass: every non-full stack pulls compatible units from the slots
/// after it until it is full. Sources drained to zero are cleared, partial
/// sources stay where they are. This is a single forward pass.
///
/// Shift pass: scanning left to right, each stack is swapped once into the
/// first empty slot before it. Slot 0 is never a shift target, so an empty
/// slot 0 stays empty and leaves the later stacks where they are.
pub fn compact<C>(container: &mut C)
where
    C: Container + ?Sized,
{
    merge_stacks(container);
    shift_left(container);
}

/// Sources are only the slots after the target (`j > i`), never the ones
/// before it. A partial stack is never drained into a later slot, so
/// `[40, 64]` becomes `[64, 40]`.
fn merge_stacks<C>(container: &mut C)
where
    C: Container + ?Sized,
{
    let size = container.size();
    for target_slot in 0..size {
        let Some(mut target) = container.get(target_slot).cloned() else {
            continue;
        };
        if target.is_full() {
            continue;
        }

        let before = target.amount;
        for source_slot in (target_slot + 1)..size {
            let Some(source) = container.get(source_slot) else {
                continue;
            };
            if !source.is_stackable_with(&target) {
                continue;
            }
            let moved = target.remaining_capacity().min(source.amount);
            let left = source.amount - moved;
            let remainder = (left > 0).then(|| source.with_amount(left));
            container.set(source_slot, remainder);
            target.amount += moved;
            if target.is_full() {
                break;
            }
        }

        if target.amount != before {
            container.set(target_slot, Some(target));
        }
    }
}

fn shift_left<C>(container: &mut C)
where
    C: Container + ?Sized,
{
    for slot in 0..container.size() {
        if container.get(slot).is_none() {
            continue;
        }
        if let Some(empty) = (1..slot).find(|&idx| container.get(idx).is_none()) {
            container.swap(slot, empty);
        }
    }
}
