use stash_core::{BlockPos, DimensionId, RegistryKey};
use stash_sorting::{insert_whole, take_last, ChatMessage};
use tracing::debug;
use stash_world::Container;

use crate::context::TriggerContext;
use crate::error::TriggerError;
use crate::player::Player;

/// Result of one combiner interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombinerOutcome {
    /// The container above the combiner is now linked.
    Linked(BlockPos),
    /// Nothing was linked or the linked container is gone.
    NotLinked,
    /// Link attempt on a block with no container above it.
    NothingToLink,
    /// The whole held stack went in.
    Inserted(u32),
    /// The container filled up; the hand keeps the remainder.
    Full {
        /// Items that still fit.
        inserted: u32,
    },
    /// A stack came out into the hand.
    Retrieved(u32),
    /// Nothing to retrieve.
    Empty,
}

/// Block that forwards the player's hand to a linked container.
#[derive(Debug, Clone)]
pub struct Combiner {
    link_item: RegistryKey,
    linked: Option<(DimensionId, BlockPos)>,
}

impl Combiner {
    /// Combiner linked by using `link_item` on it.
    pub fn new(link_item: RegistryKey) -> Self {
        Self {
            link_item,
            linked: None,
        }
    }

    /// Currently linked container.
    pub fn linked(&self) -> Option<(DimensionId, BlockPos)> {
        self.linked
    }

    /// A player interacted with the combiner at `pos`.
    pub fn on_player_interact(
        &mut self,
        ctx: &mut TriggerContext<'_>,
        player: &mut Player,
        pos: BlockPos,
    ) -> CombinerOutcome {
        let held = player.held_item().cloned();
        if held.as_ref().is_some_and(|stack| stack.type_id == self.link_item) {
            return self.link(ctx, player.dimension, pos.above(1));
        }

        let Some((dimension, linked)) = self.linked else {
            ctx.report(&TriggerError::NotLinked);
            return CombinerOutcome::NotLinked;
        };
        let Some(container) = ctx.world.container_mut(dimension, linked) else {
            ctx.report(&TriggerError::NoContainer(linked));
            self.linked = None;
            return CombinerOutcome::NotLinked;
        };

        match held {
            Some(stack) => {
                let offered = stack.amount;
                match insert_whole(container, stack) {
                    None => {
                        player.set_held_item(None);
                        CombinerOutcome::Inserted(offered)
                    }
                    Some(rest) => {
                        let inserted = offered - rest.amount;
                        player.set_held_item(Some(rest));
                        ctx.feedback.message(ChatMessage::plain("container is full!"));
                        CombinerOutcome::Full { inserted }
                    }
                }
            }
            None => {
                let Some((slot, stack)) = take_last(container) else {
                    return CombinerOutcome::Empty;
                };
                let amount = stack.amount;
                if player.set_held_item(Some(stack.clone())) {
                    CombinerOutcome::Retrieved(amount)
                } else {
                    container.set(slot, Some(stack));
                    CombinerOutcome::Empty
                }
            }
        }
    }

    fn link(
        &mut self,
        ctx: &mut TriggerContext<'_>,
        dimension: DimensionId,
        above: BlockPos,
    ) -> CombinerOutcome {
        let Some(container) = ctx.world.container(dimension, above) else {
            ctx.report(&TriggerError::NoContainer(above));
            return CombinerOutcome::NothingToLink;
        };
        let size = container.size();
        self.linked = Some((dimension, above));
        debug!(pos = %above, size, "combiner linked");
        ctx.feedback.message(ChatMessage::plain(format!(
            "linked container at {above} size: {size}"
        )));
        CombinerOutcome::Linked(above)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stash_core::{ItemStack, SimTick};
    use stash_sorting::RecordingFeedback;
    use stash_world::{Block, BlockStore, Container, World};

    const DIM: DimensionId = DimensionId::Overworld;

    fn link_item() -> RegistryKey {
        RegistryKey::new("mypack", "test")
    }

    #[test]
    fn links_container_above_and_forwards_hand() {
        let mut world = BlockStore::new();
        let combiner_pos = BlockPos::new(2, 64, 2);
        world.set_block(DIM, combiner_pos.above(1), Block::barrel());
        let mut combiner = Combiner::new(link_item());
        let mut player = Player::new("steve");
        player.set_held_item(Some(ItemStack::unstackable(link_item())));
        let mut sink = RecordingFeedback::new();

        let outcome = combiner.on_player_interact(
            &mut TriggerContext::new(&mut world, SimTick(0), &mut sink),
            &mut player,
            combiner_pos,
        );
        assert_eq!(outcome, CombinerOutcome::Linked(combiner_pos.above(1)));

        player.set_held_item(Some(ItemStack::new(RegistryKey::minecraft("dirt"), 12)));
        let outcome = combiner.on_player_interact(
            &mut TriggerContext::new(&mut world, SimTick(0), &mut sink),
            &mut player,
            combiner_pos,
        );
        assert_eq!(outcome, CombinerOutcome::Inserted(12));
        assert!(player.held_item().is_none());

        let outcome = combiner.on_player_interact(
            &mut TriggerContext::new(&mut world, SimTick(0), &mut sink),
            &mut player,
            combiner_pos,
        );
        assert_eq!(outcome, CombinerOutcome::Retrieved(12));
        assert!(world.container(DIM, combiner_pos.above(1)).unwrap().is_empty());
    }

    #[test]
    fn unlinked_use_reports_error() {
        let mut world = BlockStore::new();
        let mut combiner = Combiner::new(link_item());
        let mut player = Player::new("steve");
        let mut sink = RecordingFeedback::new();

        let outcome = combiner.on_player_interact(
            &mut TriggerContext::new(&mut world, SimTick(0), &mut sink),
            &mut player,
            BlockPos::new(0, 64, 0),
        );

        assert_eq!(outcome, CombinerOutcome::NotLinked);
        assert_eq!(sink.plain_messages(), vec!["error: no container linked"]);
    }

    #[test]
    fn link_needs_a_container_above() {
        let mut world = BlockStore::new();
        let mut combiner = Combiner::new(link_item());
        let mut player = Player::new("steve");
        player.set_held_item(Some(ItemStack::unstackable(link_item())));
        let mut sink = RecordingFeedback::new();

        let outcome = combiner.on_player_interact(
            &mut TriggerContext::new(&mut world, SimTick(0), &mut sink),
            &mut player,
            BlockPos::new(0, 64, 0),
        );

        assert_eq!(outcome, CombinerOutcome::NothingToLink);
        assert!(combiner.linked().is_none());
    }
}
