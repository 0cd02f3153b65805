pub mod engine;
pub mod mode;
pub mod roster;

pub use engine::{Engine, MAX_ROSTER_SIZE};
pub use mode::{BattleMode, MoveResult};
pub use roster::{BattleOutcome, Combatants, Roster};

#[cfg(test)]
pub(crate) mod tests;
