use stash_core::{BlockPos, DimensionId};
use stash_sorting::{Sorting, TransferDirection};
use stash_world::{block_types, Facing};

use crate::context::TriggerContext;
use crate::player::Player;
use crate::sort_rod::SORT_ROD;

/// Neighbour polled by [`Sorter::on_tick`] in `phase` (north, east, south,
/// west), with the facing a hopper there must have to point at the sorter.
const fn hopper_feed(phase: u64, pos: BlockPos) -> (BlockPos, Facing) {
    match phase % 4 {
        0 => (pos.north(1), Facing::South),
        1 => (pos.east(1), Facing::West),
        2 => (pos.south(1), Facing::North),
        _ => (pos.west(1), Facing::East),
    }
}

/// Passive sorter block: moves items between players or hoppers and the
/// containers around it.
#[derive(Debug, Clone, Default)]
pub struct Sorter {
    sorting: Sorting,
}

impl Sorter {
    /// Sorter using `sorting` for range lookups.
    pub fn new(sorting: Sorting) -> Self {
        Self { sorting }
    }

    /// A player interacted with the sorter at `pos`: sneaking takes,
    /// otherwise deposits. Returns whether anything moved.
    pub fn on_player_interact(
        &self,
        ctx: &mut TriggerContext<'_>,
        player: &mut Player,
        pos: BlockPos,
    ) -> bool {
        if player.is_holding(SORT_ROD) {
            return false;
        }
        let direction = if player.sneaking {
            TransferDirection::Take
        } else {
            TransferDirection::Deposit
        };
        self.sorting.transfer_to_containers(
            &mut *ctx.world,
            &mut player.inventory,
            player.dimension,
            pos.location(),
            direction,
            &mut *ctx.feedback,
        )
    }

    /// The sorter was placed at `pos`. Returns the number of containers in
    /// range.
    pub fn on_place(
        &self,
        ctx: &mut TriggerContext<'_>,
        dimension: DimensionId,
        pos: BlockPos,
    ) -> usize {
        let origin = pos.location();
        self.sorting
            .highlight_sorting_range(&*ctx.world, dimension, origin, &mut *ctx.feedback);
        self.sorting
            .list_containers_in_range(&*ctx.world, dimension, origin, &mut *ctx.feedback)
    }

    /// Poll one neighbour for a hopper feeding the sorter and empty it into
    /// the containers in range.
    pub fn on_tick(
        &self,
        ctx: &mut TriggerContext<'_>,
        dimension: DimensionId,
        pos: BlockPos,
    ) -> bool {
        let (hopper, facing) = hopper_feed(ctx.tick.0, pos);
        let feeds_sorter = ctx.world.block(dimension, hopper).is_some_and(|block| {
            block.is(block_types::HOPPER) && block.facing == Some(facing)
        });
        if !feeds_sorter {
            return false;
        }
        self.sorting
            .deposit_from_hopper(&mut *ctx.world, dimension, hopper, pos.location())
    }
}
