use stash_core::{BlockPos, DimensionId, Vec3};
use stash_sorting::{insert_whole, take_last, Sound, SoundId};
use stash_world::{Block, Container, Facing, World};
use tracing::info;

use crate::context::TriggerContext;
use crate::cooldown::Cooldown;
use crate::error::TriggerError;
use crate::player::Player;

/// Where a retrieved stack is dropped, relative to the block's corner.
const DROP_OFFSET: Vec3 = Vec3::new(0.5, 1.0, 0.5);

/// Result of one shared chest interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SharedChestOutcome {
    /// Used again before the cooldown elapsed.
    CoolingDown,
    /// The shared container could not be found or created.
    Unavailable,
    /// The whole held stack went in.
    Inserted(u32),
    /// The container filled up; the hand keeps the remainder.
    Full {
        /// Items that still fit.
        inserted: u32,
    },
    /// A stack came out into the hand.
    Retrieved(u32),
    /// A stack came out and was dropped above the block.
    Dropped(u32),
    /// Nothing to retrieve.
    Empty,
}

/// Every shared chest block opens the same container.
#[derive(Debug, Clone)]
pub struct SharedChest {
    location: BlockPos,
    cooldown: Cooldown,
}

impl SharedChest {
    /// Shared chest backed by the overworld container at `location`.
    pub fn new(location: BlockPos, cooldown_ticks: u64) -> Self {
        Self {
            location,
            cooldown: Cooldown::new(cooldown_ticks),
        }
    }

    /// Position of the backing container.
    pub fn location(&self) -> BlockPos {
        self.location
    }

    /// A player interacted with the shared chest block at `pos`.
    pub fn on_player_interact(
        &mut self,
        ctx: &mut TriggerContext<'_>,
        player: &mut Player,
        pos: BlockPos,
    ) -> SharedChestOutcome {
        if !self.cooldown.try_start(ctx.tick) {
            return SharedChestOutcome::CoolingDown;
        }
        if let Err(err) = self.ensure_container(&mut *ctx.world) {
            ctx.report(&err);
            return SharedChestOutcome::Unavailable;
        }
        let Some(container) = ctx.world.container_mut(DimensionId::Overworld, self.location) else {
            return SharedChestOutcome::Unavailable;
        };
        let at = pos.location();

        if let Some(held) = player.held_item().cloned() {
            let offered = held.amount;
            return match insert_whole(container, held) {
                None => {
                    let pitch = fill_pitch(container);
                    player.set_held_item(None);
                    ctx.feedback
                        .sound(Sound::new(SoundId::Insert).at(at).with_pitch(pitch));
                    SharedChestOutcome::Inserted(offered)
                }
                Some(rest) => {
                    let inserted = offered - rest.amount;
                    player.set_held_item(Some(rest));
                    ctx.feedback.sound(Sound::new(SoundId::InsertFail).at(at));
                    SharedChestOutcome::Full { inserted }
                }
            };
        }

        let Some((slot, stack)) = take_last(container) else {
            ctx.feedback.sound(Sound::new(SoundId::NoTransfer).at(at));
            return SharedChestOutcome::Empty;
        };
        let amount = stack.amount;
        let outcome = if player.sneaking {
            ctx.world.spawn_item(player.dimension, at + DROP_OFFSET, stack);
            SharedChestOutcome::Dropped(amount)
        } else if player.set_held_item(Some(stack.clone())) {
            SharedChestOutcome::Retrieved(amount)
        } else {
            // no hand to put it in
            if let Some(container) = ctx
                .world
                .container_mut(DimensionId::Overworld, self.location)
            {
                container.set(slot, Some(stack));
            }
            return SharedChestOutcome::Unavailable;
        };
        ctx.feedback.sound(Sound::new(SoundId::Remove).at(at));
        outcome
    }

    fn ensure_container(&self, world: &mut dyn World) -> Result<(), TriggerError> {
        if world.container(DimensionId::Overworld, self.location).is_some() {
            return Ok(());
        }
        info!(pos = %self.location, "creating shared container");
        world.set_block(DimensionId::Overworld, self.location, Block::hopper(Facing::Down));
        if world.container(DimensionId::Overworld, self.location).is_some() {
            Ok(())
        } else {
            Err(TriggerError::SharedContainerUnavailable(self.location))
        }
    }
}

/// Insert sound pitch: 0.5 when empty, rising to 1.0 as slots fill.
fn fill_pitch<C>(container: &C) -> f32
where
    C: Container + ?Sized,
{
    let size = container.size();
    if size == 0 {
        return 1.0;
    }
    let used = size - container.empty_slot_count();
    0.5 + 0.5 * (used as f32 / size as f32)
}
