use std::env;
use std::time::Duration;

/// Settings for a simulated tournament run.
///
/// Defaults are overridden by `TOURNAMENT_*` environment variables, which
/// are in turn overridden by command-line flags.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Seed for the battle generator. A fresh seed is drawn when unset.
    pub seed: Option<u64>,
    /// Creatures entered at startup. Zero waits for the user to enter a number.
    pub creatures: usize,
    /// Time between two ticks.
    pub tick: Duration,
    /// Stop after this many ticks even if the tournament is undecided.
    pub max_ticks: Option<u64>,
    /// Switch to sudden death once a battle has lasted this many moves.
    pub sudden_death_after: Option<u32>,
    /// Print one JSON object per tick instead of text.
    pub json: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: None,
            creatures: 0,
            tick: Duration::from_millis(500),
            max_ticks: None,
            sudden_death_after: None,
            json: false,
        }
    }
}

impl SimulationConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(seed) = read_env::<u64>("TOURNAMENT_SEED") {
            config.seed = Some(seed);
        }
        if let Some(creatures) = read_env::<usize>("TOURNAMENT_CREATURES") {
            config.creatures = creatures;
        }
        if let Some(millis) = read_env::<u64>("TOURNAMENT_TICK_MS") {
            config.tick = Duration::from_millis(millis);
        }
        if let Some(max_ticks) = read_env::<u64>("TOURNAMENT_MAX_TICKS") {
            config.max_ticks = Some(max_ticks);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
