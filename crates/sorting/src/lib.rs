#![warn(missing_docs)]
//! Container sorting and range transfer engine.
//!
//! The free functions in [`compact`], [`order`], [`tally`] and [`transfer`]
//! work on any [`Container`]. [`Sorting`] wires them to a [`World`]: it finds
//! containers around an origin, moves items, and reports what happened to a
//! [`FeedbackSink`].

pub mod compact;
pub mod config;
pub mod feedback;
pub mod highlight;
pub mod messages;
pub mod order;
pub mod tally;
pub mod transfer;

pub use compact::compact;
pub use config::SortingConfig;
pub use feedback::{
    ChatMessage, FeedbackEvent, FeedbackSink, NullFeedback, Particle, ParticleKind,
    RecordingFeedback, Sound, SoundId, TextPart,
};
pub use order::{by_weighting, sort_container_by, stack_size_desc, total_amount_desc};
pub use tally::{tally, Tally, TallyEntry, TallyOrder};
pub use transfer::{
    deposit, insert_whole, swap_contents, take, take_last, TransferDirection, TransferRecord,
    TransferReport,
};

use stash_core::{BlockPos, DimensionId, Vec3};
use stash_world::{block_types, containers_in_range, Container, ContainerBlock, Range3, World};
use tracing::{debug, info};

/// Range transfer and container maintenance handler.
#[derive(Debug, Clone, Default)]
pub struct Sorting {
    config: SortingConfig,
}

impl Sorting {
    /// Handler with the given search settings.
    pub fn new(config: SortingConfig) -> Self {
        Self { config }
    }

    /// Active settings.
    pub fn config(&self) -> &SortingConfig {
        &self.config
    }

    /// Search box around `origin`.
    pub fn range_around(&self, origin: Vec3) -> Range3 {
        self.config.range_around(origin)
    }

    /// Containers of the configured types inside `range`, capped at
    /// `max_container_count`.
    pub fn containers_in_range<W>(
        &self,
        world: &W,
        dimension: DimensionId,
        range: &Range3,
    ) -> Vec<ContainerBlock>
    where
        W: World + ?Sized,
    {
        containers_in_range(
            world,
            dimension,
            range,
            &self.config.container_block_types,
            self.config.max_container_count,
        )
    }

    /// Deposit the inventory into, or top it up from, every container around
    /// `origin`. Returns whether anything moved in any container.
    pub fn transfer_to_containers<W, I, F>(
        &self,
        world: &mut W,
        inventory: &mut I,
        dimension: DimensionId,
        origin: Vec3,
        direction: TransferDirection,
        sink: &mut F,
    ) -> bool
    where
        W: World + ?Sized,
        I: Container + ?Sized,
        F: FeedbackSink + ?Sized,
    {
        sink.message(messages::transfer_begin(direction));

        let range = self.range_around(origin);
        let containers = self.containers_in_range(&*world, dimension, &range);

        let mut summary = TransferReport::default();
        for target in &containers {
            let Some(container) = world.container_mut(dimension, target.pos) else {
                continue;
            };
            let report = match direction {
                TransferDirection::Deposit => deposit(&mut *inventory, container, true),
                TransferDirection::Take => take(&mut *inventory, container),
            };
            for record in &report.records {
                sink.message(messages::transfer_line(record, direction));
            }
            summary.extend(report);
        }

        let moved = summary.moved();
        sink.sound(Sound::new(if moved {
            SoundId::Transfer
        } else {
            SoundId::NoTransfer
        }));
        info!(
            ?direction,
            dimension = %dimension,
            containers = containers.len(),
            moved = summary.total(),
            "range transfer"
        );
        moved
    }

    /// Empty the hopper at `hopper` into the containers around `origin`.
    ///
    /// Does nothing unless the block is a hopper with an inventory.
    pub fn deposit_from_hopper<W>(
        &self,
        world: &mut W,
        dimension: DimensionId,
        hopper: BlockPos,
        origin: Vec3,
    ) -> bool
    where
        W: World + ?Sized,
    {
        let is_hopper = world
            .block(dimension, hopper)
            .is_some_and(|block| block.is(block_types::HOPPER));
        if !is_hopper {
            return false;
        }
        let Some(mut source) = world.detach_container(dimension, hopper) else {
            return false;
        };

        let range = self.range_around(origin);
        let mut summary = TransferReport::default();
        for target in self.containers_in_range(&*world, dimension, &range) {
            if let Some(dest) = world.container_mut(dimension, target.pos) {
                summary.extend(deposit(&mut source, dest, true));
            }
        }
        world.attach_container(dimension, hopper, source);

        debug!(hopper = %hopper, moved = summary.total(), "hopper deposit");
        summary.moved()
    }

    /// Outline the search range around `origin` and mark every container in
    /// it. Returns the number of containers marked.
    pub fn highlight_sorting_range<W, F>(
        &self,
        world: &W,
        dimension: DimensionId,
        origin: Vec3,
        sink: &mut F,
    ) -> usize
    where
        W: World + ?Sized,
        F: FeedbackSink + ?Sized,
    {
        let range = self.range_around(origin);
        highlight::highlight_range(
            sink,
            dimension,
            range.pos1.location(),
            range.pos2.location(),
        );
        let containers = self.containers_in_range(world, dimension, &range);
        for target in &containers {
            highlight::highlight_container(sink, dimension, target.pos);
        }
        containers.len()
    }

    /// Report how many containers the search range around `origin` reaches.
    pub fn list_containers_in_range<W, F>(
        &self,
        world: &W,
        dimension: DimensionId,
        origin: Vec3,
        sink: &mut F,
    ) -> usize
    where
        W: World + ?Sized,
        F: FeedbackSink + ?Sized,
    {
        let range = self.range_around(origin);
        let count = self.containers_in_range(world, dimension, &range).len();
        sink.message(messages::container_count(count));
        count
    }

    /// Compact, then order by the container's own descending tally.
    pub fn sort<C>(&self, container: &mut C) -> usize
    where
        C: Container + ?Sized,
    {
        compact(container);
        let weights = tally(container, Some(TallyOrder::Descending));
        sort_container_by(container, by_weighting(&weights))
    }

    /// Merge partial stacks and shift them to the front.
    pub fn compact<C>(&self, container: &mut C)
    where
        C: Container + ?Sized,
    {
        compact(container);
    }

    /// Totals per type, largest first.
    pub fn tally<C>(&self, container: &C) -> Tally
    where
        C: Container + ?Sized,
    {
        tally(container, Some(TallyOrder::Descending))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stash_core::{ItemStack, RegistryKey};
    use stash_world::{Block, BlockStore, Facing, Inventory};

    const DIM: DimensionId = DimensionId::Overworld;

    fn stone(amount: u32) -> ItemStack {
        ItemStack::new(RegistryKey::minecraft("stone"), amount)
    }

    fn chest_with(stacks: Vec<Option<ItemStack>>) -> Block {
        let mut slots = stacks;
        slots.resize(27, None);
        Block::of(block_types::CHEST).with_inventory(Inventory::from_slots(slots))
    }

    #[test]
    fn success_is_any_container_not_the_last() {
        let mut world = BlockStore::new();
        world.set_block(DIM, BlockPos::new(0, 64, 0), chest_with(vec![Some(stone(1))]));
        world.set_block(DIM, BlockPos::new(1, 64, 0), Block::chest());

        let mut player = Inventory::player();
        player.set(0, Some(stone(10)));
        let mut sink = RecordingFeedback::new();

        let moved = Sorting::default().transfer_to_containers(
            &mut world,
            &mut player,
            DIM,
            Vec3::new(0.0, 64.0, 0.0),
            TransferDirection::Deposit,
            &mut sink,
        );

        assert!(moved);
        assert!(player.is_empty());
        assert_eq!(sink.sounds(), vec![SoundId::Transfer]);
        assert_eq!(
            sink.plain_messages(),
            vec!["Depositing".to_string(), "-10x item.stone.name".to_string()]
        );
    }

    #[test]
    fn nothing_to_move_plays_click() {
        let mut world = BlockStore::new();
        world.set_block(DIM, BlockPos::new(0, 64, 0), Block::chest());
        let mut player = Inventory::player();
        let mut sink = RecordingFeedback::new();

        let moved = Sorting::default().transfer_to_containers(
            &mut world,
            &mut player,
            DIM,
            Vec3::new(0.0, 64.0, 0.0),
            TransferDirection::Take,
            &mut sink,
        );
        assert!(!moved);
        assert_eq!(sink.sounds(), vec![SoundId::NoTransfer]);
    }

    #[test]
    fn hopper_is_emptied_into_matching_chests() {
        let mut world = BlockStore::new();
        let hopper_pos = BlockPos::new(0, 64, 1);
        world.set_block(DIM, BlockPos::new(0, 64, 0), chest_with(vec![Some(stone(1))]));
        let mut hopper = Block::hopper(Facing::North);
        if let Some(inv) = hopper.inventory.as_mut() {
            inv.set(0, Some(stone(5)));
        }
        world.set_block(DIM, hopper_pos, hopper);

        let sorting = Sorting::default();
        let origin = Vec3::new(0.0, 64.0, 0.0);
        assert!(sorting.deposit_from_hopper(&mut world, DIM, hopper_pos, origin));
        assert!(world.container(DIM, hopper_pos).is_some_and(|inv| inv.is_empty()));
        assert_eq!(
            world
                .container(DIM, BlockPos::new(0, 64, 0))
                .and_then(|inv| inv.get(0))
                .map(|s| s.amount),
            Some(6)
        );

        let chest_pos = BlockPos::new(0, 64, 0);
        assert!(!sorting.deposit_from_hopper(&mut world, DIM, chest_pos, origin));
    }

    #[test]
    fn listing_and_highlighting_count_containers() {
        let mut world = BlockStore::new();
        world.set_block(DIM, BlockPos::new(0, 64, 0), Block::chest());
        world.set_block(DIM, BlockPos::new(2, 64, 2), Block::barrel());
        world.set_block(DIM, BlockPos::new(40, 64, 0), Block::chest());

        let sorting = Sorting::default();
        let origin = Vec3::new(0.0, 64.0, 0.0);
        let mut sink = RecordingFeedback::new();
        assert_eq!(sorting.list_containers_in_range(&world, DIM, origin, &mut sink), 2);
        assert_eq!(sink.plain_messages(), vec!["Linked 2 Containers".to_string()]);

        let mut sink = RecordingFeedback::new();
        assert_eq!(sorting.highlight_sorting_range(&world, DIM, origin, &mut sink), 2);
        assert_eq!(sink.particle_count(ParticleKind::EndRod), 108);
        assert_eq!(sink.particle_count(ParticleKind::BlueFlame), 8);
    }
}
