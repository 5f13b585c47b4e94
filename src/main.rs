//! stash - container sorting and range transfer engine
//!
//! Runs one sorter or sort rod action against a JSON world fixture and prints
//! the feedback a player would see.

mod commands;
mod config;
mod fixture;

use anyhow::Result;
use clap::Parser;
use commands::Command;
use config::StashConfig;
use fixture::Fixture;
use stash_core::DimensionId;
use stash_scripting::Triggers;
use stash_sorting::{FeedbackEvent, ParticleKind, RecordingFeedback, Sorting};
use stash_testkit::JsonlSink;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "stash", version, about = "Sort and move items between nearby containers")]
struct Cli {
    /// World fixture (JSON). Starts from an empty world when omitted.
    #[arg(long)]
    world: Option<PathBuf>,
    /// Configuration file (TOML).
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// Dimension to act in; defaults to the fixture player's.
    #[arg(long)]
    dimension: Option<DimensionId>,
    /// Write feedback events to this JSONL file.
    #[arg(long)]
    events: Option<PathBuf>,
    /// Write the updated fixture back to --world.
    #[arg(long, requires = "world")]
    save: bool,
    /// Write the effective configuration to --config before running.
    #[arg(long)]
    init_config: bool,
    #[command(subcommand)]
    command: Command,
}

fn main() -> Result<()> {
    // WARN by default, override with RUST_LOG
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    info!("Starting stash v{}", env!("CARGO_PKG_VERSION"));

    let config = StashConfig::load_from_path(&cli.config);
    if cli.init_config {
        config.save_to_path(&cli.config)?;
        info!(path = %cli.config.display(), "wrote configuration");
    }
    let mut fixture = match &cli.world {
        Some(path) => Fixture::load(path)?,
        None => Fixture::default(),
    };
    if let Some(dimension) = cli.dimension {
        fixture.player.dimension = dimension;
    }

    let mut triggers = Triggers::new(&config.sorting, &config.triggers);
    let sorting = Sorting::new(config.sorting.clone());
    let mut sink = RecordingFeedback::new();
    let tick = fixture.tick;

    let summary = commands::run(&cli.command, &mut fixture, &mut triggers, &sorting, &mut sink)?;
    let events = sink.drain();
    for line in render_events(&events) {
        println!("{line}");
    }
    println!("{summary}");

    if let Some(path) = &cli.events {
        let mut log = JsonlSink::create(path)?;
        log.write_all(tick, cli.command.name(), &events)?;
        log.flush()?;
        info!(path = %path.display(), lines = log.lines(), "wrote feedback events");
    }
    if cli.save {
        if let Some(path) = &cli.world {
            fixture.save(path)?;
            info!(path = %path.display(), tick = fixture.tick.0, "saved fixture");
        }
    }
    Ok(())
}

/// Chat lines and sounds in order, particles summarised per kind at the end.
fn render_events(events: &[FeedbackEvent]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut particles: BTreeMap<&'static str, usize> = BTreeMap::new();
    for event in events {
        match event {
            FeedbackEvent::Message(message) => lines.push(message.to_plain()),
            FeedbackEvent::Sound(sound) => match sound.pitch {
                Some(pitch) => {
                    lines.push(format!("[sound {} pitch {pitch:.2}]", sound.id.as_str()))
                }
                None => lines.push(format!("[sound {}]", sound.id.as_str())),
            },
            FeedbackEvent::Particle(particle) => {
                *particles.entry(particle_name(particle.kind)).or_default() += 1;
            }
        }
    }
    lines.extend(
        particles
            .into_iter()
            .map(|(kind, count)| format!("[particles {kind} x{count}]")),
    );
    lines
}

fn particle_name(kind: ParticleKind) -> &'static str {
    kind.as_str().trim_start_matches("minecraft:")
}

#[cfg(test)]
mod tests {
    use super::*;
    use stash_core::BlockPos;
    use stash_sorting::{ChatMessage, Particle, Sound, SoundId};

    #[test]
    fn parses_negative_positions_and_flags() {
        let cli = Cli::try_parse_from([
            "stash",
            "--world",
            "fixtures/base.json",
            "--dimension",
            "nether",
            "--save",
            "sort",
            "-3,64,-12",
        ])
        .expect("cli parses");
        assert_eq!(cli.dimension, Some(DimensionId::Nether));
        assert!(cli.save);
        assert_eq!(
            cli.command,
            Command::Sort {
                pos: BlockPos::new(-3, 64, -12)
            }
        );
        assert_eq!(cli.config, PathBuf::from(config::DEFAULT_CONFIG_PATH));
    }

    #[test]
    fn save_requires_world() {
        assert!(Cli::try_parse_from(["stash", "--save", "list", "0,64,0"]).is_err());
    }

    #[test]
    fn tick_accepts_tick_count() {
        let cli = Cli::try_parse_from(["stash", "tick", "1,2,3", "--ticks", "12"])
            .expect("cli parses");
        assert_eq!(
            cli.command,
            Command::Tick {
                pos: BlockPos::new(1, 2, 3),
                ticks: 12
            }
        );
    }

    #[test]
    fn render_groups_particles_after_messages() {
        let dim = DimensionId::Overworld;
        let origin = stash_core::Vec3::default();
        let events = vec![
            FeedbackEvent::Particle(Particle {
                kind: ParticleKind::EndRod,
                dimension: dim,
                location: origin,
            }),
            FeedbackEvent::Message(ChatMessage::plain("§7Depositing§r")),
            FeedbackEvent::Particle(Particle {
                kind: ParticleKind::EndRod,
                dimension: dim,
                location: origin,
            }),
            FeedbackEvent::Sound(Sound::new(SoundId::NoTransfer)),
        ];
        assert_eq!(
            render_events(&events),
            vec![
                "Depositing".to_string(),
                "[sound block.click]".to_string(),
                "[particles endrod x2]".to_string(),
            ]
        );
    }
}
