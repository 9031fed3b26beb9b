use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

use crate::types::FRAME_MS;

pub const DEFAULT_AUTOPLAY_PIECES: u32 = 500;

/// Host settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    /// Piece randomizer seed
    pub seed: u32,
    /// Append JSON-lines journal here when set
    pub log_path: Option<String>,
    /// Input poll interval, 1..=100
    pub frame_ms: u32,
}

impl HostConfig {
    /// Create from `BLOCKFALL_SEED`, `BLOCKFALL_LOG_PATH` and `BLOCKFALL_FRAME_MS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("BLOCKFALL_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let log_path = lookup("BLOCKFALL_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let frame_ms = lookup("BLOCKFALL_FRAME_MS")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .unwrap_or(FRAME_MS)
            .clamp(1, 100);

        Self {
            seed,
            log_path,
            frame_ms,
        }
    }
}

/// Seed from the wall clock; sub-second nanos keep quick restarts distinct.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| (d.as_secs() as u32) ^ d.subsec_nanos())
        .unwrap_or(1)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Interactive terminal play
    Play { seed: Option<u32> },
    /// Headless play, printing a JSON summary
    Autoplay { seed: Option<u32>, pieces: u32 },
}

impl Command {
    /// Seed override given on the command line, if any.
    pub fn seed(&self) -> Option<u32> {
        match self {
            Command::Play { seed } | Command::Autoplay { seed, .. } => *seed,
        }
    }
}

/// Parse argv without the program name.
pub fn parse_args(args: &[String]) -> Result<Command> {
    let (name, rest) = match args.first().map(String::as_str) {
        None => return Ok(Command::Play { seed: None }),
        Some("autoplay") => ("autoplay", &args[1..]),
        Some("play") => ("play", &args[1..]),
        Some(a) if a.starts_with("--") => ("play", args),
        Some(other) => return Err(anyhow!("unknown command: {}", other)),
    };

    let mut seed = None;
    let mut pieces = DEFAULT_AUTOPLAY_PIECES;
    let mut i = 0usize;
    while i < rest.len() {
        match rest[i].as_str() {
            "--seed" => {
                i += 1;
                let v = rest
                    .get(i)
                    .ok_or_else(|| anyhow!("{}: missing value for --seed", name))?;
                seed = Some(
                    v.parse::<u32>()
                        .map_err(|_| anyhow!("{}: invalid --seed value: {}", name, v))?,
                );
            }
            "--pieces" if name == "autoplay" => {
                i += 1;
                let v = rest
                    .get(i)
                    .ok_or_else(|| anyhow!("{}: missing value for --pieces", name))?;
                pieces = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("{}: invalid --pieces value: {}", name, v))?;
            }
            other => {
                return Err(anyhow!("{}: unknown argument: {}", name, other));
            }
        }
        i += 1;
    }

    Ok(match name {
        "autoplay" => Command::Autoplay { seed, pieces },
        _ => Command::Play { seed },
    })
}
