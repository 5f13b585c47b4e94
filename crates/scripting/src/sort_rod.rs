//! Hand-held rod that sorts, compacts, tallies or swaps the container it is
//! used on.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use stash_core::{BlockPos, DimensionId, RegistryKey};
use stash_sorting::{highlight, messages, swap_contents, FeedbackSink, Sorting, Tally};
use stash_world::block_types;
use tracing::debug;

use crate::context::TriggerContext;
use crate::cooldown::Cooldown;
use crate::player::Player;

/// Item id of the sort rod.
pub const SORT_ROD: &str = "mypack:sort_rod";

/// What the rod does to a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RodMode {
    /// Compact, then order by tally weight.
    Sort,
    /// Merge and shift stacks only.
    Compact,
    /// List totals per type.
    Tally,
    /// Exchange contents with a previously selected container.
    Swap,
}

impl RodMode {
    /// Every mode, in menu order.
    pub const ALL: [RodMode; 4] = [RodMode::Sort, RodMode::Compact, RodMode::Tally, RodMode::Swap];

    /// Name shown in the mode menu and the rod lore.
    pub const fn display_name(self) -> &'static str {
        match self {
            RodMode::Sort => "Sort Items",
            RodMode::Compact => "Compact Items",
            RodMode::Tally => "Tally Items",
            RodMode::Swap => "Swap Contents",
        }
    }

    /// Property value, e.g. `"sort"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            RodMode::Sort => "sort",
            RodMode::Compact => "compact",
            RodMode::Tally => "tally",
            RodMode::Swap => "swap",
        }
    }
}

impl fmt::Display for RodMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RodMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RodMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| format!("unknown rod mode `{s}`"))
    }
}

/// Result of one rod use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RodOutcome {
    /// Used again before the cooldown elapsed.
    CoolingDown,
    /// No mode selected yet.
    NoMode,
    /// Container sorted; carries the number of swaps.
    Sorted(usize),
    /// Container compacted.
    Compacted,
    /// Container tallied.
    Tallied(Tally),
    /// Container stored as the first half of a swap.
    Selected(BlockPos),
    /// Contents exchanged with the previously selected container.
    Swapped(BlockPos),
    /// Sorter range shown; carries the number of containers in it.
    HighlightedRange(usize),
    /// The host should present the mode menu.
    ModeMenu,
}

/// Sort rod trigger.
#[derive(Debug, Clone)]
pub struct SortRod {
    sorting: Sorting,
    cooldown: Cooldown,
}

impl SortRod {
    /// Rod using `sorting` for range lookups, limited to one use per
    /// `cooldown_ticks`.
    pub fn new(sorting: Sorting, cooldown_ticks: u64) -> Self {
        Self {
            sorting,
            cooldown: Cooldown::new(cooldown_ticks),
        }
    }

    /// The rod was used on the block at `pos`.
    pub fn on_use_on(
        &mut self,
        ctx: &mut TriggerContext<'_>,
        player: &mut Player,
        pos: BlockPos,
    ) -> RodOutcome {
        if !self.cooldown.try_start(ctx.tick) {
            return RodOutcome::CoolingDown;
        }
        let dimension = player.dimension;

        if ctx.world.container(dimension, pos).is_none() {
            let is_sorter = ctx
                .world
                .block(dimension, pos)
                .is_some_and(|block| block.is(block_types::SORTER));
            if is_sorter {
                let count = self.sorting.highlight_sorting_range(
                    &*ctx.world,
                    dimension,
                    pos.location(),
                    &mut *ctx.feedback,
                );
                return RodOutcome::HighlightedRange(count);
            }
            return RodOutcome::ModeMenu;
        }

        let Some(mode) = player.properties.sort_rod_mode else {
            return RodOutcome::NoMode;
        };
        debug!(player = %player.name, %mode, pos = %pos, "sort rod");

        match mode {
            RodMode::Sort => {
                let Some(container) = ctx.world.container_mut(dimension, pos) else {
                    return RodOutcome::NoMode;
                };
                let swaps = self.sorting.sort(container);
                highlight::highlight_container(&mut *ctx.feedback, dimension, pos);
                ctx.feedback.message(messages::sorted());
                RodOutcome::Sorted(swaps)
            }
            RodMode::Compact => {
                let Some(container) = ctx.world.container_mut(dimension, pos) else {
                    return RodOutcome::NoMode;
                };
                self.sorting.compact(container);
                highlight::highlight_container(&mut *ctx.feedback, dimension, pos);
                ctx.feedback.message(messages::compacted());
                RodOutcome::Compacted
            }
            RodMode::Tally => {
                let Some(container) = ctx.world.container(dimension, pos) else {
                    return RodOutcome::NoMode;
                };
                let tally = self.sorting.tally(container);
                ctx.feedback.message(messages::tally_header());
                for entry in tally.iter() {
                    ctx.feedback.message(messages::tally_line(entry));
                }
                RodOutcome::Tallied(tally)
            }
            RodMode::Swap => swap(ctx, player, dimension, pos),
        }
    }

    /// Store `mode` on the player, label the held rod and confirm in chat.
    pub fn select_mode(&self, player: &mut Player, mode: RodMode, sink: &mut dyn FeedbackSink) {
        player.properties.sort_rod_mode = Some(mode);
        if let Some(mut rod) = player.held_item().cloned() {
            rod.components.lore = vec![format!("§7Mode: §r§3'{}'§r", mode.display_name())];
            player.set_held_item(Some(rod));
        }
        sink.message(messages::mode_changed(mode.display_name()));
    }
}

fn block_type(ctx: &TriggerContext<'_>, dimension: DimensionId, pos: BlockPos) -> RegistryKey {
    ctx.world
        .block(dimension, pos)
        .map(|block| block.type_id.clone())
        .unwrap_or_else(|| RegistryKey::minecraft("air"))
}

fn swap(
    ctx: &mut TriggerContext<'_>,
    player: &mut Player,
    dimension: DimensionId,
    pos: BlockPos,
) -> RodOutcome {
    let selected = player
        .properties
        .selected_container
        .filter(|&selected| ctx.world.container(dimension, selected).is_some());

    let Some(selected) = selected else {
        player.properties.selected_container = Some(pos);
        highlight::highlight_container(&mut *ctx.feedback, dimension, pos);
        let selected_type = block_type(ctx, dimension, pos);
        ctx.feedback.message(messages::swap_selected(&selected_type));
        return RodOutcome::Selected(pos);
    };

    if selected != pos {
        if let Some(mut other) = ctx.world.detach_container(dimension, selected) {
            if let Some(container) = ctx.world.container_mut(dimension, pos) {
                swap_contents(container, &mut other);
            }
            ctx.world.attach_container(dimension, selected, other);
        }
    }

    highlight::highlight_container(&mut *ctx.feedback, dimension, selected);
    highlight::highlight_container(&mut *ctx.feedback, dimension, pos);
    let first = block_type(ctx, dimension, selected);
    let second = block_type(ctx, dimension, pos);
    ctx.feedback.message(messages::swapped(&first, &second));
    player.properties.selected_container = None;
    RodOutcome::Swapped(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stash_core::{ItemStack, SimTick};
    use stash_sorting::{RecordingFeedback, SortingConfig};
    use stash_world::{Block, BlockStore, Container, World};

    fn rod() -> SortRod {
        SortRod::new(Sorting::new(SortingConfig::default()), 8)
    }

    fn stone(amount: u32) -> ItemStack {
        ItemStack::new(RegistryKey::minecraft("stone"), amount)
    }

    #[test]
    fn mode_names_roundtrip() {
        for mode in RodMode::ALL {
            assert_eq!(mode.as_str().parse::<RodMode>(), Ok(mode));
        }
        assert!("smelt".parse::<RodMode>().is_err());
    }

    #[test]
    fn select_mode_labels_the_held_rod() {
        let mut player = Player::new("steve");
        player.set_held_item(Some(ItemStack::unstackable(RegistryKey::new("mypack", "sort_rod"))));
        let mut sink = RecordingFeedback::new();

        rod().select_mode(&mut player, RodMode::Tally, &mut sink);

        assert_eq!(player.properties.sort_rod_mode, Some(RodMode::Tally));
        let lore = &player.held_item().unwrap().components.lore;
        assert_eq!(lore, &vec!["§7Mode: §r§3'Tally Items'§r".to_string()]);
        assert_eq!(sink.plain_messages(), vec!["Set Mode 'Tally Items'"]);
    }

    #[test]
    fn cooldown_blocks_rapid_reuse() {
        let mut world = BlockStore::new();
        let pos = BlockPos::new(0, 64, 0);
        world.set_block(DimensionId::Overworld, pos, Block::chest());
        let mut player = Player::new("steve");
        player.properties.sort_rod_mode = Some(RodMode::Compact);
        let mut sink = RecordingFeedback::new();
        let mut rod = rod();

        let first = rod.on_use_on(
            &mut TriggerContext::new(&mut world, SimTick(10), &mut sink),
            &mut player,
            pos,
        );
        let second = rod.on_use_on(
            &mut TriggerContext::new(&mut world, SimTick(17), &mut sink),
            &mut player,
            pos,
        );
        let third = rod.on_use_on(
            &mut TriggerContext::new(&mut world, SimTick(18), &mut sink),
            &mut player,
            pos,
        );

        assert_eq!(first, RodOutcome::Compacted);
        assert_eq!(second, RodOutcome::CoolingDown);
        assert_eq!(third, RodOutcome::Compacted);
    }

    #[test]
    fn no_mode_leaves_container_untouched() {
        let mut world = BlockStore::new();
        let pos = BlockPos::new(0, 64, 0);
        let mut chest = Block::chest();
        if let Some(inv) = chest.inventory.as_mut() {
            inv.set(3, Some(stone(5)));
        }
        world.set_block(DimensionId::Overworld, pos, chest);
        let mut player = Player::new("steve");
        let mut sink = RecordingFeedback::new();

        let outcome = rod().on_use_on(
            &mut TriggerContext::new(&mut world, SimTick(0), &mut sink),
            &mut player,
            pos,
        );

        assert_eq!(outcome, RodOutcome::NoMode);
        assert!(world.container(DimensionId::Overworld, pos).unwrap().get(3).is_some());
        assert!(sink.events().is_empty());
    }

    #[test]
    fn plain_block_requests_mode_menu() {
        let mut world = BlockStore::new();
        let pos = BlockPos::new(0, 64, 0);
        world.set_block(DimensionId::Overworld, pos, Block::of("minecraft:stone"));
        let mut player = Player::new("steve");
        let mut sink = RecordingFeedback::new();

        let outcome = rod().on_use_on(
            &mut TriggerContext::new(&mut world, SimTick(0), &mut sink),
            &mut player,
            pos,
        );
        assert_eq!(outcome, RodOutcome::ModeMenu);
    }
}
