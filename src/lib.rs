// In: src/lib.rs

//! Pokemon Tournament Battle Engine
//!
//! Simulates a knockout tournament of creatures that trade randomly chosen
//! attacks, heals and stuns until one is defeated or caught. The engine is
//! step driven: a driver calls it once per tick and renders what comes back.

// --- MODULE DECLARATIONS ---
pub mod ability;
pub mod config;
pub mod creator;
pub mod creature;
pub mod driver;
pub mod errors;
pub mod rng;
pub mod tournament;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{Color, Effect, Element};

// --- From this crate's modules (`src/`) ---

// Core data model.
pub use ability::{Ability, Narrative};
pub use creature::{Creature, CreatureBuilder, MAX_LIFE, MIN_STAT};

// Tournament engine and its state machine.
pub use tournament::{BattleMode, BattleOutcome, Engine, Roster, MAX_ROSTER_SIZE};

// Content and randomness collaborators.
pub use creator::Catalog;
pub use rng::{RandomSource, ScriptedRng, SeededRng};

// Crate-specific error and result types.
pub use errors::{
    BattleEngineError, BattleResult, BattleStateError, ConfigurationError, ConfigurationResult,
    IndexError,
};
