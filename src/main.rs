//! Headless runner
//!
//! Plays a session at fixed step without a window, logging gameplay events
//! and printing a JSON summary when the run ends.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use hu_shmup::Settings;
use hu_shmup::consts::{BULLET_SPAWN_OFFSET, ENTITY_MAX};
use hu_shmup::render::RenderSnapshot;
use hu_shmup::sim::{GameEvent, GameState, Key, PlayerInput, TickInput, tick};

#[derive(Parser, Debug)]
#[command(author, version, about = "Run the shooter simulation headlessly", long_about = None)]
struct Args {
    /// JSON settings file
    #[arg(long)]
    config: Option<PathBuf>,
    /// RNG seed (overrides the settings file)
    #[arg(long)]
    seed: Option<u64>,
    /// Maximum frames to simulate
    #[arg(long)]
    frames: Option<u64>,
    /// Leave the ship idle instead of using the autopilot
    #[arg(long)]
    no_autopilot: bool,
    /// Print a render snapshot every N frames
    #[arg(long)]
    snapshot_every: Option<u64>,
}

#[derive(Debug, Serialize)]
struct RunSummary {
    seed: u64,
    frames: u64,
    score: u64,
    lives: i32,
    game_over: bool,
    bosses_defeated: u32,
}

fn settings_from(args: &Args) -> Result<Settings> {
    let mut settings = match &args.config {
        Some(path) => Settings::load(path).context("loading settings")?,
        None => Settings::default(),
    };
    if let Some(seed) = args.seed {
        settings.seed = seed;
    }
    if let Some(frames) = args.frames {
        settings.max_frames = frames;
    }
    if args.no_autopilot {
        settings.autopilot = false;
    }
    if args.snapshot_every.is_some() {
        settings.snapshot_every = args.snapshot_every;
    }
    Ok(settings)
}

/// Sweep under the lowest enemy (or the boss) and keep firing
fn autopilot(state: &GameState) -> TickInput {
    let target = state
        .boss
        .as_ref()
        .map(|b| b.pos.x)
        .or_else(|| {
            state
                .swarm
                .enemies
                .iter()
                .max_by_key(|e| e.pos.y)
                .map(|e| e.pos.x)
        })
        .unwrap_or(ENTITY_MAX / 2);
    // Bullets leave from the ship's centre line
    let aim = (target + BULLET_SPAWN_OFFSET).clamp(0, ENTITY_MAX);
    let ship = state.player.pos.x + BULLET_SPAWN_OFFSET;

    let mut keys = vec![Key::Space];
    if aim < ship - 1 {
        keys.push(Key::Left);
    } else if aim > ship + 1 {
        keys.push(Key::Right);
    }
    if (aim - ship).abs() < 4 {
        keys.push(Key::Shift);
    }
    TickInput {
        player: PlayerInput::from_keys(&keys),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let settings = settings_from(&args)?;
    log::info!("Starting run with seed {:#x}", settings.seed);

    let mut state = GameState::new(settings.seed);
    let mut bosses_defeated = 0;

    while !state.is_over() && state.frame < settings.max_frames {
        let input = if settings.autopilot {
            autopilot(&state)
        } else {
            TickInput::default()
        };
        tick(&mut state, &input);

        for event in &state.events {
            match event {
                GameEvent::EnemyDestroyed { score } => log::debug!("+{} enemy", score),
                GameEvent::PlayerHit { lives_left } => {
                    log::info!("Frame {}: hit, {} lives left", state.frame, lives_left)
                }
                GameEvent::BossSpawned { variant } => {
                    log::info!("Frame {}: boss {} incoming", state.frame, variant)
                }
                GameEvent::BossDefeated { bonus } => {
                    bosses_defeated += 1;
                    log::info!("Frame {}: boss down (+{})", state.frame, bonus);
                }
                GameEvent::GameOver { score } => log::info!("Game over, score {}", score),
            }
        }

        if let Some(every) = settings.snapshot_every.filter(|n| *n > 0) {
            if state.frame % every == 0 {
                let snapshot = RenderSnapshot::capture(&state);
                println!("{}", serde_json::to_string(&snapshot)?);
            }
        }
    }

    let snapshot = RenderSnapshot::capture(&state);
    if let Some(banner) = snapshot.banner() {
        println!("{banner}");
    }

    let summary = RunSummary {
        seed: settings.seed,
        frames: state.frame,
        score: state.score,
        lives: state.player.lives.max(0),
        game_over: state.is_over(),
        bosses_defeated,
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&summary).context("serializing run summary")?
    );
    Ok(())
}
