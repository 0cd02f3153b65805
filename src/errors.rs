use thiserror::Error;

/// Main error type for the tournament battle engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BattleEngineError {
    /// A caller asked for something outside the bounds of a list
    #[error("Index error: {0}")]
    Index(#[from] IndexError),
    /// The battle is not in a state where the operation makes sense
    #[error("Battle state error: {0}")]
    BattleState(#[from] BattleStateError),
    /// A creature or catalog entry breaks a construction invariant.
    /// Not recoverable at runtime: it points at a content bug.
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
}

/// Rejected lookups. Never silently clamped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    /// Ability index is out of bounds for the acting creature
    #[error("ability index {index} is out of range for {creature} ({len} abilities)")]
    InvalidAbilityIndex {
        creature: String,
        index: usize,
        len: usize,
    },
    /// 1-indexed roster position is out of bounds
    #[error("roster position {position} is out of range (roster holds {size})")]
    InvalidRosterPosition { position: usize, size: usize },
}

/// Errors related to battle state validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BattleStateError {
    /// A move was requested without two creatures to fight
    #[error("a battle needs two combatants, roster holds {size}")]
    NotEnoughCombatants { size: usize },
    /// Entering the creatures would grow the roster past its limit
    #[error("cannot enter {requested} creatures, a roster holds at most {limit}")]
    TooManyCreatures { requested: usize, limit: usize },
    /// A tournament was started with fewer than two entrants
    #[error("a tournament needs at least two entrants, got {requested}")]
    NotEnoughEntrants { requested: usize },
}

/// Broken invariants in creatures or the content catalog
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    /// Every creature must carry at least one ability that is not special
    #[error("{creature} has no regular ability to fall back on")]
    NoRegularAbility { creature: String },
    /// Ability names are unique per creature
    #[error("{creature} already knows {ability}")]
    DuplicateAbility { creature: String, ability: String },
    /// Defence and strength must stay above the positive minimum
    #[error("{creature} has {stat} {value}, minimum is {minimum}")]
    StatTooLow {
        creature: String,
        stat: &'static str,
        value: f32,
        minimum: f32,
    },
    /// A capture threshold of zero would make a creature uncatchable while alive
    #[error("{creature} has a capture threshold of 0")]
    ZeroCatchThreshold { creature: String },
    /// The catalog has no template with this name
    #[error("no creature named {0} in the catalog")]
    UnknownCreature(String),
    /// The catalog ran out of abilities to hand out
    #[error("no {kind} ability left for {creature}")]
    NoAbilityCandidates {
        creature: String,
        kind: &'static str,
    },
    /// The catalog data could not be parsed
    #[error("malformed catalog: {0}")]
    MalformedCatalog(String),
}

/// Type alias for Results using BattleEngineError
pub type BattleResult<T> = Result<T, BattleEngineError>;

/// Type alias for Results using ConfigurationError
pub type ConfigurationResult<T> = Result<T, ConfigurationError>;
