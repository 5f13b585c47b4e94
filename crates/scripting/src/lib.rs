#![warn(missing_docs)]
//! Block and item triggers driving the sorting engine.
//!
//! Each trigger is a plain struct whose `on_*` methods the host calls with a
//! [`TriggerContext`] and the acting [`Player`]. Rate limits and links live
//! on the trigger instance; per-player state lives in [`PlayerProperties`].

mod combiner;
mod config;
mod context;
mod cooldown;
mod error;
mod player;
mod shared_chest;
mod sort_rod;
mod sorter;

pub use combiner::*;
pub use config::*;
pub use context::*;
pub use cooldown::*;
pub use error::*;
pub use player::*;
pub use shared_chest::*;
pub use sort_rod::*;
pub use sorter::*;

use stash_sorting::{Sorting, SortingConfig};

/// One instance of every trigger, sharing a sorting setup.
#[derive(Debug, Clone)]
pub struct Triggers {
    /// Sort rod item.
    pub sort_rod: SortRod,
    /// Sorter block.
    pub sorter: Sorter,
    /// Shared chest block.
    pub shared_chest: SharedChest,
    /// Combiner block.
    pub combiner: Combiner,
}

impl Triggers {
    /// Build every trigger from the two config sections.
    pub fn new(sorting: &SortingConfig, triggers: &TriggerConfig) -> Self {
        let engine = Sorting::new(sorting.clone());
        Self {
            sort_rod: SortRod::new(engine.clone(), triggers.sort_rod_cooldown_ticks),
            sorter: Sorter::new(engine),
            shared_chest: SharedChest::new(
                triggers.shared_container_pos,
                triggers.shared_chest_cooldown_ticks,
            ),
            combiner: Combiner::new(triggers.combiner_link_item.clone()),
        }
    }
}

impl Default for Triggers {
    fn default() -> Self {
        Self::new(&SortingConfig::default(), &TriggerConfig::default())
    }
}
