//! Tick-driven front end for the engine: command parsing, per-tick reports
//! and text rendering helpers used by the binary.

use crate::ability::Narrative;
use crate::errors::{BattleEngineError, BattleResult, BattleStateError};
use crate::tournament::{BattleMode, BattleOutcome, Engine};
use serde::{Deserialize, Serialize};

/// A line of user input, interpreted against the current roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddCreatures(usize),
    SuddenDeath,
    Catch(String),
}

impl Command {
    /// An empty roster accepts a creature count. A running tournament accepts
    /// "sd" or anything mentioning "sudden" or "death"; every other input is a
    /// capture query. Anything else is ignored.
    pub fn parse(input: &str, roster_size: usize) -> Option<Command> {
        let input = input.trim();
        if roster_size < 1 {
            return input.parse().ok().map(Command::AddCreatures);
        }
        if roster_size < 2 || input.is_empty() {
            return None;
        }

        let lower = input.to_lowercase();
        if lower.contains("sudden") || lower.contains("death") || lower == "sd" {
            Some(Command::SuddenDeath)
        } else {
            Some(Command::Catch(lower))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatantStatus {
    pub name: String,
    pub life: u8,
}

/// Everything that happened during one tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickReport {
    pub narrative: Narrative,
    /// The two combatants right after the move, before the win check.
    pub combatants: [CombatantStatus; 2],
    pub mode: BattleMode,
    pub outcome: Option<BattleOutcome>,
}

#[derive(Debug)]
pub struct Simulation {
    engine: Engine,
    sudden_death_after: Option<u32>,
    /// Roster move counter when the current battle started.
    battle_start: u32,
}

impl Simulation {
    pub fn new(engine: Engine, sudden_death_after: Option<u32>) -> Self {
        let battle_start = engine.roster().battle_moves();
        Self {
            engine,
            sudden_death_after,
            battle_start,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn is_running(&self) -> bool {
        self.engine.roster_size() > 1
    }

    /// Plays one move and checks for a winner. Does nothing without two combatants.
    pub fn tick(&mut self) -> BattleResult<Option<TickReport>> {
        if !self.is_running() {
            return Ok(None);
        }

        if let Some(limit) = self.sudden_death_after {
            if self.engine.mode() == BattleMode::NormalBattle && self.moves_this_battle() >= limit {
                tracing::info!(limit, "battle dragged on, switching to sudden death");
                self.engine.transition_mode(BattleMode::SuddenDeath);
            }
        }

        let narrative = self.engine.advance_one_move()?;
        let combatants = [self.status_of(1)?, self.status_of(2)?];
        let mode = self.engine.mode();
        let outcome = self.engine.check_win();
        if outcome.is_some() {
            self.battle_start = self.engine.roster().battle_moves();
        }

        Ok(Some(TickReport {
            narrative,
            combatants,
            mode,
            outcome,
        }))
    }

    /// Applies a line of user input. Returns the message to log, if any.
    pub fn apply(&mut self, input: &str) -> BattleResult<Option<String>> {
        match Command::parse(input, self.engine.roster_size()) {
            Some(Command::AddCreatures(count)) => match self.enter(count) {
                Ok(message) => Ok(Some(message)),
                Err(BattleEngineError::BattleState(err)) => {
                    tracing::warn!(%err, "creatures not entered");
                    Ok(Some(err.to_string()))
                }
                Err(err) => Err(err),
            },
            Some(Command::SuddenDeath) => {
                self.engine.transition_mode(BattleMode::SuddenDeath);
                Ok(Some("Sudden death!".to_string()))
            }
            Some(Command::Catch(query)) => Ok(Some(self.engine.catch(&query))),
            None => {
                tracing::warn!(input, size = self.engine.roster_size(), "input ignored");
                Ok(None)
            }
        }
    }

    /// Enters `count` random creatures. A tournament must start with at least two.
    pub fn enter(&mut self, count: usize) -> BattleResult<String> {
        if self.engine.roster_size().saturating_add(count) < 2 {
            return Err(BattleStateError::NotEnoughEntrants { requested: count }.into());
        }
        self.engine.add_random_creatures(count)?;
        Ok(format!("{} Pokémon entered the tournament", count))
    }

    /// What the user can type right now.
    pub fn prompt(&self) -> Option<&'static str> {
        match self.engine.roster_size() {
            0 => Some("Enter the amount of Pokémon you want in the tournament"),
            1 => None,
            _ => Some("Write name of Pokémon or 'all' to catch"),
        }
    }

    fn moves_this_battle(&self) -> u32 {
        self.engine
            .roster()
            .battle_moves()
            .saturating_sub(self.battle_start)
    }

    fn status_of(&self, position: usize) -> BattleResult<CombatantStatus> {
        Ok(CombatantStatus {
            name: self.engine.name_of(position)?.to_string(),
            life: self.engine.life_of(position)?,
        })
    }
}

/// Two-row box drawing bar, one cell per 8 points of life. Empty at 0 life.
pub fn life_bar(life: u8) -> String {
    if life == 0 {
        return String::new();
    }
    let middle = "═".repeat(usize::from(life / 8));
    format!("╔{middle}╗\n╚{middle}╝\n")
}

/// Bar colour for a life value: red when nearly out, fading to white at full life.
pub fn life_color(life: u8) -> (u8, u8, u8) {
    (255, life, life)
}

/// [`life_bar`] with each row painted in its [`life_color`].
pub fn colored_life_bar(life: u8) -> String {
    life_bar(life)
        .lines()
        .map(|row| format!("{}\n", paint(row, life_color(life))))
        .collect()
}

/// Wraps `text` in a 24-bit ANSI foreground colour.
pub fn paint(text: &str, (r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m{}\x1b[0m", r, g, b, text)
}

/// Narrative line for a terminal, with the ability name in its element's colour.
pub fn render_narrative(narrative: &Narrative) -> String {
    match narrative {
        Narrative::Used {
            actor,
            ability,
            element,
        } => format!("{} used {}", actor, paint(ability, element.color().rgb())),
        Narrative::Stunned { .. } => narrative.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tournament::tests::common::{blastoise, charizard, create_test_engine, pikachu};
    use crate::tournament::MAX_ROSTER_SIZE;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::Element;

    #[rstest]
    #[case("4", 0, Some(Command::AddCreatures(4)))]
    #[case(" 12 ", 0, Some(Command::AddCreatures(12)))]
    #[case("four", 0, None)]
    #[case("4", 1, None)]
    #[case("sd", 2, Some(Command::SuddenDeath))]
    #[case("SD", 2, Some(Command::SuddenDeath))]
    #[case("Sudden", 2, Some(Command::SuddenDeath))]
    #[case("death please", 2, Some(Command::SuddenDeath))]
    #[case("SUDDEN DEATH", 2, Some(Command::SuddenDeath))]
    #[case("Pikachu", 3, Some(Command::Catch("pikachu".to_string())))]
    #[case("4", 3, Some(Command::Catch("4".to_string())))]
    #[case("", 3, None)]
    fn test_parse(
        #[case] input: &str,
        #[case] roster_size: usize,
        #[case] expected: Option<Command>,
    ) {
        assert_eq!(Command::parse(input, roster_size), expected, "input {:?}", input);
    }

    #[rstest]
    #[case(0, "")]
    #[case(7, "╔╗\n╚╝\n")]
    #[case(16, "╔══╗\n╚══╝\n")]
    fn test_life_bar(#[case] life: u8, #[case] expected: &str) {
        assert_eq!(life_bar(life), expected);
    }

    #[test]
    fn test_full_life_bar_width() {
        assert_eq!(life_bar(255).lines().next().unwrap().chars().count(), 33);
    }

    #[test]
    fn test_colored_life_bar_fades_with_life() {
        assert_eq!(colored_life_bar(0), "");
        assert_eq!(
            colored_life_bar(16),
            "\x1b[38;2;255;16;16m╔══╗\x1b[0m\n\x1b[38;2;255;16;16m╚══╝\x1b[0m\n"
        );
        assert_eq!(life_color(255), (255, 255, 255));
    }

    #[test]
    fn test_paint_uses_element_color() {
        assert_eq!(
            paint("Water whip", Element::Water.color().rgb()),
            "\x1b[38;2;0;255;255mWater whip\x1b[0m"
        );
    }

    #[test]
    fn test_tick_reports_move_and_outcome() {
        let mut simulation = Simulation::new(create_test_engine(1, vec![blastoise(), charizard()]), None);

        let report = simulation.tick().unwrap().unwrap();

        assert_eq!(report.narrative.to_string(), "Blastoise used Water whip");
        assert_eq!(
            report.combatants[1],
            CombatantStatus {
                name: "Charizard".to_string(),
                life: 195
            }
        );
        assert_eq!(report.outcome, None);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["combatants"][1]["life"], 195);
        assert_eq!(json["mode"], "NormalBattle");
    }

    #[test]
    fn test_tick_without_combatants_does_nothing() {
        let mut simulation = Simulation::new(create_test_engine(1, vec![blastoise()]), None);

        assert_eq!(simulation.tick().unwrap(), None);
        assert_eq!(simulation.prompt(), None);
    }

    #[test]
    fn test_sudden_death_kicks_in_after_limit() {
        let mut simulation =
            Simulation::new(create_test_engine(1, vec![blastoise(), charizard()]), Some(1));

        let first = simulation.tick().unwrap().unwrap();
        assert_eq!(first.mode, BattleMode::NormalBattle);

        // Charizard now hits in sudden death and knocks Blastoise out.
        let second = simulation.tick().unwrap().unwrap();
        assert_eq!(second.combatants[0].life, 0);
        assert_eq!(
            second.outcome,
            Some(BattleOutcome::TournamentWon {
                winner: "Charizard".to_string()
            })
        );
    }

    #[test]
    fn test_sudden_death_limit_restarts_with_each_battle() {
        let mut simulation = Simulation::new(
            create_test_engine(1, vec![blastoise(), charizard(), pikachu()]),
            Some(3),
        );

        let mut reports = Vec::new();
        while let Some(report) = simulation.tick().unwrap() {
            reports.push(report);
            assert!(reports.len() < 20, "tournament did not finish");
        }

        // Battle one: three normal moves, then Charizard's sudden death hit.
        assert_eq!(reports.len(), 8);
        assert_eq!(
            reports[3].outcome,
            Some(BattleOutcome::BattleWon {
                winner: "Charizard".to_string()
            })
        );

        // Battle two opens with a normal move: -50 * 1.2 / 1.5 = -40.
        assert_eq!(reports[4].mode, BattleMode::NormalBattle);
        assert_eq!(
            reports[4].combatants,
            [
                CombatantStatus {
                    name: "Charizard".to_string(),
                    life: 215
                },
                CombatantStatus {
                    name: "Pikachu".to_string(),
                    life: 255
                },
            ]
        );
        assert_eq!(reports[4].outcome, None);
        // Pikachu is weak to Fire: -50 * 1.2 = -60.
        assert_eq!(reports[6].mode, BattleMode::NormalBattle);
        assert_eq!(reports[6].combatants[1].life, 195);

        // Its fourth move is the sudden death hit.
        assert_eq!(reports[7].combatants[1].life, 0);
        assert_eq!(
            reports[7].outcome,
            Some(BattleOutcome::TournamentWon {
                winner: "Charizard".to_string()
            })
        );
    }

    #[rstest]
    #[case("18446744073709551615")]
    #[case("1001")]
    fn test_entering_too_many_creatures_is_refused(#[case] input: &str) {
        let mut simulation = Simulation::new(create_test_engine(9, vec![]), None);

        let message = simulation.apply(input).unwrap().unwrap();

        assert_eq!(
            message,
            BattleStateError::TooManyCreatures {
                requested: input.parse().unwrap(),
                limit: MAX_ROSTER_SIZE
            }
            .to_string()
        );
        assert_eq!(simulation.engine().roster_size(), 0);
    }

    #[rstest]
    #[case("0")]
    #[case("1")]
    fn test_tournament_needs_two_entrants(#[case] input: &str) {
        let mut simulation = Simulation::new(create_test_engine(9, vec![]), None);

        let message = simulation.apply(input).unwrap();

        assert_eq!(
            message.as_deref(),
            Some(format!("a tournament needs at least two entrants, got {}", input).as_str())
        );
        assert_eq!(simulation.engine().roster_size(), 0);
        assert_eq!(
            simulation.prompt(),
            Some("Enter the amount of Pokémon you want in the tournament")
        );
    }

    #[test]
    fn test_enter_rejects_a_lone_creature() {
        let mut simulation = Simulation::new(create_test_engine(9, vec![]), None);

        assert_eq!(
            simulation.enter(1).unwrap_err(),
            BattleEngineError::from(BattleStateError::NotEnoughEntrants { requested: 1 })
        );
        assert_eq!(simulation.enter(2).unwrap(), "2 Pokémon entered the tournament");
        assert!(simulation.is_running());
    }

    #[test]
    fn test_apply_walks_through_a_session() {
        let mut simulation = Simulation::new(create_test_engine(9, vec![]), None);
        assert_eq!(
            simulation.prompt(),
            Some("Enter the amount of Pokémon you want in the tournament")
        );

        let added = simulation.apply("3").unwrap();
        assert_eq!(added.as_deref(), Some("3 Pokémon entered the tournament"));
        assert_eq!(simulation.engine().roster_size(), 3);
        assert_eq!(
            simulation.prompt(),
            Some("Write name of Pokémon or 'all' to catch")
        );

        simulation.apply("sd").unwrap();
        assert_eq!(simulation.engine().mode(), BattleMode::SuddenDeath);

        let report = simulation.apply("all").unwrap().unwrap();
        assert!(report.starts_with("You caught 0 Pokémon."));
    }
}
