//! Headless autoplay driver.
//!
//! Runs the engine under a fixed 16ms frame clock with randomly scripted
//! input until game-over or a time budget, logging events along the way.
//! Useful for smoke-testing the rules without any renderer attached.

use anyhow::{anyhow, Result};
use log::{debug, info};

use blockfall::core::{EventLog, GameEngine, GameEvent, SimpleRng};
use blockfall::types::{GameCommand, Phase};

/// Frame period of the driver loop (milliseconds)
const FRAME_MS: u32 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RunConfig {
    seed: u32,
    max_ms: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            max_ms: 5 * 60 * 1000,
        }
    }
}

fn parse_args(args: &[String]) -> Result<RunConfig> {
    let mut config = RunConfig::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                config.seed = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
            }
            "--max-ms" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --max-ms"))?;
                config.max_ms = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --max-ms value: {}", v))?;
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }
    Ok(config)
}

fn report(event: GameEvent) {
    match event {
        GameEvent::PieceSpawned { kind, col, row } => {
            debug!("spawned {} at ({}, {})", kind.as_str(), col, row);
        }
        GameEvent::PieceMoved { .. } => {}
        GameEvent::PieceLocked { kind, points } => {
            info!("locked {} for {} points", kind.as_str(), points);
        }
        GameEvent::ScoreChanged { score } => {
            debug!("score {}", score);
        }
        GameEvent::GameOver { score } => {
            info!("game over, final score {}", score);
        }
    }
}

fn run(config: RunConfig) -> Result<u32> {
    let log = EventLog::new();
    let mut engine = GameEngine::new(config.seed).with_event_sink(Box::new(log.clone()));
    let mut inputs = SimpleRng::new(config.seed ^ 0x9e37_79b9);

    engine.handle_input(GameCommand::StartIfIdle)?;

    let mut clock_ms = 0u32;
    while engine.phase() == Phase::Running && clock_ms < config.max_ms {
        engine.advance_time(FRAME_MS)?;
        clock_ms += FRAME_MS;

        // A command roughly every eighth frame, like a fidgety player
        if engine.phase() == Phase::Running && clock_ms % (8 * FRAME_MS) == 0 {
            let command = match inputs.next_range(4) {
                0 => GameCommand::MoveLeft,
                1 => GameCommand::MoveRight,
                2 => GameCommand::Rotate,
                _ => GameCommand::SoftDrop,
            };
            engine.handle_input(command)?;
        }

        for event in log.drain() {
            report(event);
        }
    }

    Ok(engine.score())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_args(&args)?;

    let score = run(config)?;
    println!("final score: {}", score);
    Ok(())
}
