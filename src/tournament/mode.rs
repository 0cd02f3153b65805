use crate::ability::Narrative;
use crate::errors::BattleResult;
use crate::rng::RandomSource;
use crate::tournament::roster::Combatants;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Rules deciding who acts next and when a battle ends.
///
/// The mode holds no turn state. Turn order comes from the roster's move
/// counter, so switching modes mid-battle loses nothing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum BattleMode {
    /// Creatures alternate random abilities until one is out.
    #[default]
    NormalBattle,
    /// The first damaging hit knocks the defender out.
    SuddenDeath,
}

/// Result of a single move: what happened and which mode applies next.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveResult {
    pub narrative: Narrative,
    pub next_mode: BattleMode,
}

impl BattleMode {
    /// Plays one move. An even move count lets the first combatant act, an odd one the second.
    pub fn next_move(
        self,
        combatants: Combatants<'_>,
        rng: &mut dyn RandomSource,
    ) -> BattleResult<MoveResult> {
        let Combatants {
            first,
            second,
            battle_moves,
        } = combatants;
        let (actor, defender) = if *battle_moves % 2 == 0 {
            (first, second)
        } else {
            (second, first)
        };

        match self {
            BattleMode::NormalBattle => {
                let narrative = actor.use_random_ability(defender, rng)?;
                *battle_moves += 1;
                Ok(MoveResult {
                    narrative,
                    next_mode: BattleMode::NormalBattle,
                })
            }
            BattleMode::SuddenDeath => {
                let before = defender.life;
                let narrative = actor.use_random_ability(defender, rng)?;

                if defender.life < before {
                    tracing::debug!(defender = %defender.name, "sudden death hit");
                    defender.life = 0;
                    Ok(MoveResult {
                        narrative,
                        next_mode: BattleMode::NormalBattle,
                    })
                } else {
                    *battle_moves += 1;
                    Ok(MoveResult {
                        narrative,
                        next_mode: BattleMode::SuddenDeath,
                    })
                }
            }
        }
    }
}
