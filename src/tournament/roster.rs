use crate::creature::Creature;
use crate::errors::{BattleResult, BattleStateError, IndexError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a win check ended. No outcome at all means the battle goes on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleOutcome {
    /// Both combatants were caught; every caught creature left the roster.
    Nullified,
    BattleWon { winner: String },
    TournamentWon { winner: String },
}

impl fmt::Display for BattleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleOutcome::Nullified => write!(f, "Battle nullified"),
            BattleOutcome::BattleWon { winner } => {
                write!(f, "{} has won the battle! Restoring stats...", winner)
            }
            BattleOutcome::TournamentWon { winner } => {
                write!(f, "{} has won the tournament", winner)
            }
        }
    }
}

/// The two creatures currently fighting, plus the shared move counter.
#[derive(Debug)]
pub struct Combatants<'a> {
    pub first: &'a mut Creature,
    pub second: &'a mut Creature,
    pub battle_moves: &'a mut u32,
}

/// Ordered creatures of a tournament. Positions 0 and 1 are fighting, the rest wait.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    creatures: Vec<Creature>,
    battle_moves: u32,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> usize {
        self.creatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }

    pub fn battle_moves(&self) -> u32 {
        self.battle_moves
    }

    pub fn creatures(&self) -> &[Creature] {
        &self.creatures
    }

    pub fn push(&mut self, creature: Creature) {
        self.creatures.push(creature);
    }

    /// Creature at a 1-indexed position.
    pub fn get(&self, position: usize) -> BattleResult<&Creature> {
        position
            .checked_sub(1)
            .and_then(|i| self.creatures.get(i))
            .ok_or_else(|| {
                IndexError::InvalidRosterPosition {
                    position,
                    size: self.creatures.len(),
                }
                .into()
            })
    }

    /// Mutable creature at a 1-indexed position.
    pub fn get_mut(&mut self, position: usize) -> BattleResult<&mut Creature> {
        let size = self.creatures.len();
        position
            .checked_sub(1)
            .and_then(|i| self.creatures.get_mut(i))
            .ok_or_else(|| IndexError::InvalidRosterPosition { position, size }.into())
    }

    pub fn life_of(&self, position: usize) -> BattleResult<u8> {
        self.get(position).map(|c| c.life)
    }

    pub fn name_of(&self, position: usize) -> BattleResult<&str> {
        self.get(position).map(|c| c.name.as_str())
    }

    pub fn combatants(&mut self) -> BattleResult<Combatants<'_>> {
        if self.creatures.len() < 2 {
            return Err(BattleStateError::NotEnoughCombatants {
                size: self.creatures.len(),
            }
            .into());
        }
        let (head, tail) = self.creatures.split_at_mut(1);
        Ok(Combatants {
            first: &mut head[0],
            second: &mut tail[0],
            battle_moves: &mut self.battle_moves,
        })
    }

    /// Flags every catchable creature matching `query` as caught.
    ///
    /// `"all"` (any case) matches every creature, anything else matches names
    /// case-insensitively. Caught creatures stay in the roster until the next
    /// win check.
    pub fn catch(&mut self, query: &str) -> String {
        let catch_all = query.eq_ignore_ascii_case("all");
        let query_lower = query.to_lowercase();

        let mut caught = 0;
        for creature in &mut self.creatures {
            let matches = catch_all || creature.name.to_lowercase() == query_lower;
            if matches && creature.is_catchable() {
                creature.caught = true;
                caught += 1;
            }
        }

        tracing::debug!(query, caught, "capture attempted");

        let mut report = if catch_all {
            format!("You caught {} Pokémon. ", caught)
        } else {
            format!("You caught {} Pokémon named {}. ", caught, query)
        };
        if caught == 0 {
            report.push_str("Try again when the Pokémon are weaker");
        }
        report
    }

    /// Settles the current battle after a move.
    ///
    /// Mutual capture is checked before single eliminations, so two caught
    /// combatants never produce a winner. When a single creature is left it
    /// wins the tournament and the roster is cleared; that outcome replaces
    /// any battle outcome of the same check.
    pub fn check_win(&mut self) -> Option<BattleOutcome> {
        let mut outcome = None;

        if self.creatures.len() >= 2 {
            let (first, second) = (&self.creatures[0], &self.creatures[1]);
            if first.caught && second.caught {
                self.creatures.retain(|c| !c.caught);
                outcome = Some(BattleOutcome::Nullified);
            } else if first.is_out() {
                outcome = Some(self.settle_battle(1, 0));
            } else if second.is_out() {
                outcome = Some(self.settle_battle(0, 1));
            }
        }

        if self.creatures.len() == 1 {
            let champion = self.creatures.remove(0);
            self.battle_moves = 0;
            outcome = Some(BattleOutcome::TournamentWon {
                winner: champion.name,
            });
        }

        if let Some(outcome) = &outcome {
            tracing::info!(%outcome, remaining = self.creatures.len(), "battle settled");
        }
        outcome
    }

    fn settle_battle(&mut self, winner: usize, loser: usize) -> BattleOutcome {
        self.creatures[winner].restore();
        let winner_name = self.creatures[winner].name.clone();
        self.creatures.remove(loser);
        BattleOutcome::BattleWon {
            winner: winner_name,
        }
    }
}
