use stash_core::BlockPos;
use thiserror::Error;

/// Soft failures inside a trigger. Reported to the player and the log, never
/// propagated to the host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriggerError {
    /// The block at the position has no inventory.
    #[error("no container at {0}")]
    NoContainer(BlockPos),
    /// A combiner was used before anything was linked.
    #[error("no container linked")]
    NotLinked,
    /// The shared container could not be found or created.
    #[error("shared container unavailable at {0}")]
    SharedContainerUnavailable(BlockPos),
}
