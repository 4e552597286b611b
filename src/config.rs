//! Runtime configuration from environment variables and command-line args.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

pub const SEED_ENV: &str = "TUI_2048_SEED";

pub const USAGE: &str = "\
usage: tui-2048 [--seed <u32>]

keys:  arrows / wasd / hjkl   move
       q / Esc / Ctrl-C       quit

env:   TUI_2048_SEED   RNG seed (overridden by --seed)
       RUST_LOG        log filter, e.g. RUST_LOG=debug (stderr)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Explicit seed; None means "derive from the clock".
    pub seed: Option<u32>,
    pub show_help: bool,
}

impl Config {
    /// Build from `TUI_2048_SEED` and the process arguments (without argv[0]).
    pub fn load(args: &[String]) -> Result<Self> {
        let env_seed = std::env::var(SEED_ENV).ok();
        Self::from_parts(env_seed.as_deref(), args)
    }

    pub fn from_parts(env_seed: Option<&str>, args: &[String]) -> Result<Self> {
        let mut seed = match env_seed.map(str::trim).filter(|s| !s.is_empty()) {
            Some(s) => Some(parse_seed(s).map_err(|e| anyhow!("{}: {}", SEED_ENV, e))?),
            None => None,
        };
        let mut show_help = false;

        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "--seed" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --seed"))?;
                    seed = Some(parse_seed(v)?);
                }
                "-h" | "--help" => show_help = true,
                other => return Err(anyhow!("unknown argument: {}", other)),
            }
            i += 1;
        }

        Ok(Self { seed, show_help })
    }

    /// The seed to play with.
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(clock_seed)
    }
}

fn parse_seed(s: &str) -> Result<u32> {
    s.parse::<u32>()
        .map_err(|_| anyhow!("invalid seed value: {}", s))
}

fn clock_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(1);
    (nanos ^ (nanos >> 32)) as u32
}
