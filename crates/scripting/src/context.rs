use stash_core::SimTick;
use stash_sorting::{messages, FeedbackSink};
use stash_world::World;
use tracing::warn;

use crate::error::TriggerError;

/// Everything a trigger needs from the host for one invocation.
pub struct TriggerContext<'a> {
    /// World the trigger acts on.
    pub world: &'a mut dyn World,
    /// Current host tick.
    pub tick: SimTick,
    /// Where player feedback goes.
    pub feedback: &'a mut dyn FeedbackSink,
}

impl<'a> TriggerContext<'a> {
    /// Bundle the host surfaces for one call.
    pub fn new(
        world: &'a mut dyn World,
        tick: SimTick,
        feedback: &'a mut dyn FeedbackSink,
    ) -> Self {
        Self {
            world,
            tick,
            feedback,
        }
    }

    /// Log a soft failure and tell the player.
    pub fn report(&mut self, err: &TriggerError) {
        warn!(tick = self.tick.0, "{err}");
        self.feedback.message(messages::error(err));
    }
}
