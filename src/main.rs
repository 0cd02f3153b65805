use anyhow::Result;
use clap::Parser;
use pokemon_tournament::config::SimulationConfig;
use pokemon_tournament::driver::{colored_life_bar, render_narrative, Simulation, TickReport};
use pokemon_tournament::{BattleOutcome, Engine, SeededRng};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

/// Runs a Pokémon knockout tournament in the terminal.
///
/// While it runs, type a name (or "all") to try to catch Pokémon, or "sd" for sudden death.
#[derive(Parser, Debug)]
#[command(name = "pokemon-tournament", version)]
struct Args {
    /// Seed for a reproducible tournament
    #[arg(long)]
    seed: Option<u64>,
    /// Pokémon to enter at startup; when omitted the count is read from stdin
    #[arg(long)]
    creatures: Option<usize>,
    /// Milliseconds between two moves
    #[arg(long)]
    tick_ms: Option<u64>,
    /// Stop after this many moves
    #[arg(long)]
    max_ticks: Option<u64>,
    /// Switch to sudden death once a battle lasts this many moves
    #[arg(long)]
    sudden_death_after: Option<u32>,
    /// Print each tick as a JSON object
    #[arg(long)]
    json: bool,
}

impl Args {
    fn apply(self, mut config: SimulationConfig) -> SimulationConfig {
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(creatures) = self.creatures {
            config.creatures = creatures;
        }
        if let Some(millis) = self.tick_ms {
            config.tick = Duration::from_millis(millis);
        }
        if self.max_ticks.is_some() {
            config.max_ticks = self.max_ticks;
        }
        if self.sudden_death_after.is_some() {
            config.sudden_death_after = self.sudden_death_after;
        }
        config.json |= self.json;
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Args::parse().apply(SimulationConfig::from_env());

    let rng = match config.seed {
        Some(seed) => SeededRng::new(seed),
        None => SeededRng::from_entropy(),
    };
    tracing::info!(seed = rng.seed(), "starting tournament");

    let engine = Engine::new(Box::new(rng))?;
    let mut simulation = Simulation::new(engine, config.sudden_death_after);
    if config.creatures > 0 {
        let message = simulation.enter(config.creatures)?;
        tracing::info!(%message, "roster ready");
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = tokio::time::interval(config.tick);
    let mut stdin_open = true;
    let mut ticks = 0u64;
    let mut last_prompt = None;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if let Some(report) = simulation.tick()? {
                    ticks += 1;
                    print_report(&report, config.json)?;
                    if matches!(report.outcome, Some(BattleOutcome::TournamentWon { .. })) {
                        break;
                    }
                }

                if config.max_ticks.is_some_and(|max| ticks >= max) {
                    tracing::info!(ticks, "tick limit reached");
                    break;
                }

                let prompt = simulation.prompt();
                if prompt != last_prompt && !config.json {
                    if let Some(prompt) = prompt {
                        println!("{}", prompt);
                    }
                }
                last_prompt = prompt;
            }
            line = lines.next_line(), if stdin_open => {
                match line? {
                    Some(input) => {
                        tracing::debug!(input, "command received");
                        if let Some(message) = simulation.apply(&input)? {
                            if !config.json {
                                println!("{}", message);
                            }
                        }
                    }
                    None => {
                        stdin_open = false;
                        if !simulation.is_running() {
                            break;
                        }
                    }
                }
            }
        }
    }

    Ok(())
}

fn print_report(report: &TickReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(report)?);
        return Ok(());
    }

    println!("{}", render_narrative(&report.narrative));
    for combatant in &report.combatants {
        println!("{} ({})", combatant.name, combatant.life);
        print!("{}", colored_life_bar(combatant.life));
    }
    if let Some(outcome) = &report.outcome {
        println!("{}", outcome);
    }
    Ok(())
}
