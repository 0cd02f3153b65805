use crate::ability::Narrative;
use crate::creator::Catalog;
use crate::creature::Creature;
use crate::errors::{BattleResult, BattleStateError};
use crate::rng::RandomSource;
use crate::tournament::mode::BattleMode;
use crate::tournament::roster::{BattleOutcome, Roster};

/// Most creatures a tournament roster may hold.
pub const MAX_ROSTER_SIZE: usize = 1_000;

/// A tournament plus the mode its current battle is fought in.
///
/// The driver calls [`Engine::advance_one_move`] and then [`Engine::check_win`]
/// once per tick.
pub struct Engine {
    roster: Roster,
    mode: BattleMode,
    catalog: Catalog,
    rng: Box<dyn RandomSource>,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("roster", &self.roster)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

impl Engine {
    /// An engine using the built-in catalog. Tournaments start in normal battle mode.
    pub fn new(rng: Box<dyn RandomSource>) -> BattleResult<Self> {
        Ok(Self::with_catalog(Catalog::builtin()?, rng))
    }

    pub fn with_catalog(catalog: Catalog, rng: Box<dyn RandomSource>) -> Self {
        Self {
            roster: Roster::new(),
            mode: BattleMode::default(),
            catalog,
            rng,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }

    pub fn mode(&self) -> BattleMode {
        self.mode
    }

    pub fn roster_size(&self) -> usize {
        self.roster.size()
    }

    /// Life of the creature at a 1-indexed position.
    pub fn life_of(&self, position: usize) -> BattleResult<u8> {
        self.roster.life_of(position)
    }

    /// Name of the creature at a 1-indexed position.
    pub fn name_of(&self, position: usize) -> BattleResult<&str> {
        self.roster.name_of(position)
    }

    pub fn add_creature(&mut self, creature: Creature) {
        self.roster.push(creature);
    }

    /// Enters `count` freshly rolled creatures. Nothing is added if any creation
    /// fails or the roster would hold more than [`MAX_ROSTER_SIZE`].
    pub fn add_random_creatures(&mut self, count: usize) -> BattleResult<()> {
        let fits = self
            .roster
            .size()
            .checked_add(count)
            .is_some_and(|size| size <= MAX_ROSTER_SIZE);
        if !fits {
            return Err(BattleStateError::TooManyCreatures {
                requested: count,
                limit: MAX_ROSTER_SIZE,
            }
            .into());
        }

        let mut created = Vec::new();
        for _ in 0..count {
            created.push(self.catalog.create_creature(None, self.rng.as_mut())?);
        }
        for creature in created {
            self.roster.push(creature);
        }
        tracing::debug!(count, size = self.roster.size(), "creatures entered the tournament");
        Ok(())
    }

    pub fn catch(&mut self, query: &str) -> String {
        self.roster.catch(query)
    }

    pub fn transition_mode(&mut self, mode: BattleMode) {
        if mode != self.mode {
            tracing::debug!(from = %self.mode, to = %mode, "battle mode changed");
        }
        self.mode = mode;
    }

    /// Plays the next move of the current battle under the current mode.
    pub fn advance_one_move(&mut self) -> BattleResult<Narrative> {
        let combatants = self.roster.combatants()?;
        let result = self.mode.next_move(combatants, self.rng.as_mut())?;
        self.transition_mode(result.next_mode);
        tracing::debug!(narrative = %result.narrative, moves = self.roster.battle_moves(), "move played");
        Ok(result.narrative)
    }

    pub fn check_win(&mut self) -> Option<BattleOutcome> {
        self.roster.check_win()
    }
}
