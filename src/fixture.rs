use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use stash_core::{BlockPos, DimensionId, SimTick};
use stash_scripting::Player;
use stash_world::{BlockStore, World};
use std::{fs, path::Path};
use thiserror::Error;
use tracing::debug;

/// Fixture contents that make a command impossible to run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixtureError {
    /// Nothing is placed at the position.
    #[error("no block at {pos} in {dimension}")]
    NoBlock {
        dimension: DimensionId,
        pos: BlockPos,
    },
    /// The block at the position has no inventory.
    #[error("{block} at {pos} in {dimension} has no container")]
    NoContainer {
        dimension: DimensionId,
        pos: BlockPos,
        block: String,
    },
}

fn zero_tick() -> SimTick {
    SimTick::ZERO
}

fn default_player() -> Player {
    Player::new("player")
}

/// A saved scene: the world, the acting player and the current tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fixture {
    #[serde(default = "zero_tick")]
    pub tick: SimTick,
    #[serde(default)]
    pub world: BlockStore,
    #[serde(default = "default_player")]
    pub player: Player,
}

impl Default for Fixture {
    fn default() -> Self {
        Self {
            tick: SimTick::ZERO,
            world: BlockStore::new(),
            player: default_player(),
        }
    }
}

impl Fixture {
    /// Read a JSON fixture.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read fixture {}", path.display()))?;
        let fixture: Fixture = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse fixture {}", path.display()))?;
        debug!(
            path = %path.display(),
            blocks = fixture.world.len(),
            tick = fixture.tick.0,
            "loaded fixture"
        );
        Ok(fixture)
    }

    /// Write the fixture back as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, json)
            .with_context(|| format!("Failed to write fixture {}", path.display()))?;
        Ok(())
    }

    /// Check that `pos` holds a container.
    pub fn require_container(
        &self,
        dimension: DimensionId,
        pos: BlockPos,
    ) -> Result<(), FixtureError> {
        let Some(block) = self.world.block(dimension, pos) else {
            return Err(FixtureError::NoBlock { dimension, pos });
        };
        if block.inventory.is_none() {
            return Err(FixtureError::NoContainer {
                dimension,
                pos,
                block: block.type_id.to_string(),
            });
        }
        Ok(())
    }
}
