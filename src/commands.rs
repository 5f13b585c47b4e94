use anyhow::Result;
use clap::Subcommand;
use stash_core::BlockPos;
use stash_scripting::{RodMode, RodOutcome, TriggerContext, Triggers};
use stash_sorting::{FeedbackSink, Sorting};
use tracing::info;

use crate::fixture::Fixture;

/// One action against the fixture, anchored at a block position `x,y,z`.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Deposit matching stacks from the player into containers around POS.
    Deposit {
        #[arg(allow_hyphen_values = true)]
        pos: BlockPos,
    },
    /// Top up the player's stacks from containers around POS.
    Take {
        #[arg(allow_hyphen_values = true)]
        pos: BlockPos,
    },
    /// Compact and sort the container at POS.
    Sort {
        #[arg(allow_hyphen_values = true)]
        pos: BlockPos,
    },
    /// Merge and shift stacks in the container at POS.
    Compact {
        #[arg(allow_hyphen_values = true)]
        pos: BlockPos,
    },
    /// List item totals in the container at POS.
    Tally {
        #[arg(allow_hyphen_values = true)]
        pos: BlockPos,
    },
    /// Outline the search range around POS and mark its containers.
    Highlight {
        #[arg(allow_hyphen_values = true)]
        pos: BlockPos,
    },
    /// Count the containers in range of POS.
    List {
        #[arg(allow_hyphen_values = true)]
        pos: BlockPos,
    },
    /// Run the sorter at POS for a number of ticks, draining feeding hoppers.
    Tick {
        #[arg(allow_hyphen_values = true)]
        pos: BlockPos,
        #[arg(long, default_value_t = 4)]
        ticks: u64,
    },
}

impl Command {
    /// Event log label.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Deposit { .. } => "deposit",
            Command::Take { .. } => "take",
            Command::Sort { .. } => "sort",
            Command::Compact { .. } => "compact",
            Command::Tally { .. } => "tally",
            Command::Highlight { .. } => "highlight",
            Command::List { .. } => "list",
            Command::Tick { .. } => "tick",
        }
    }

    fn rod_mode(&self) -> Option<(RodMode, BlockPos)> {
        match *self {
            Command::Sort { pos } => Some((RodMode::Sort, pos)),
            Command::Compact { pos } => Some((RodMode::Compact, pos)),
            Command::Tally { pos } => Some((RodMode::Tally, pos)),
            _ => None,
        }
    }
}

/// Run `command` against the fixture, advancing its tick. Returns a one-line
/// summary.
pub fn run(
    command: &Command,
    fixture: &mut Fixture,
    triggers: &mut Triggers,
    sorting: &Sorting,
    sink: &mut dyn FeedbackSink,
) -> Result<String> {
    let dimension = fixture.player.dimension;
    if let Some((_, pos)) = command.rod_mode() {
        fixture.require_container(dimension, pos)?;
    }

    let start = fixture.tick;
    let Fixture { world, player, .. } = fixture;
    let mut ctx = TriggerContext::new(world, start, sink);

    let (summary, elapsed) = match *command {
        Command::Deposit { pos } | Command::Take { pos } => {
            player.sneaking = matches!(command, Command::Take { .. });
            let moved = triggers.sorter.on_player_interact(&mut ctx, player, pos);
            let verdict = if moved { "moved items" } else { "nothing moved" };
            (format!("{}: {verdict}", command.name()), 1)
        }
        Command::Sort { pos } | Command::Compact { pos } | Command::Tally { pos } => {
            let mode = command.rod_mode().map_or(RodMode::Sort, |(mode, _)| mode);
            player.properties.sort_rod_mode = Some(mode);
            let summary = match triggers.sort_rod.on_use_on(&mut ctx, player, pos) {
                RodOutcome::Sorted(swaps) => format!("sort: {swaps} swaps"),
                RodOutcome::Compacted => "compact: done".to_string(),
                RodOutcome::Tallied(tally) => {
                    format!("tally: {} types, {} items", tally.len(), tally.total())
                }
                other => format!("{}: {other:?}", command.name()),
            };
            (summary, 1)
        }
        Command::Highlight { pos } => {
            let count = sorting.highlight_sorting_range(
                &*ctx.world,
                dimension,
                pos.location(),
                &mut *ctx.feedback,
            );
            (format!("highlight: {count} containers"), 1)
        }
        Command::List { pos } => {
            let count = sorting.list_containers_in_range(
                &*ctx.world,
                dimension,
                pos.location(),
                &mut *ctx.feedback,
            );
            (format!("list: {count} containers"), 1)
        }
        Command::Tick { pos, ticks } => {
            let mut drained = 0;
            for offset in 0..ticks {
                ctx.tick = start.advance(offset);
                if triggers.sorter.on_tick(&mut ctx, dimension, pos) {
                    drained += 1;
                }
            }
            (format!("tick: {ticks} ticks, {drained} hopper drains"), ticks)
        }
    };

    fixture.tick = start.advance(elapsed);
    info!(command = command.name(), tick = fixture.tick.0, "{summary}");
    Ok(summary)
}
