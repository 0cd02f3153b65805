use serde::{Deserialize, Serialize};

/// The consequence of an ability on one creature: a life delta and whether it stuns.
///
/// A positive `life_delta` heals, a negative one damages. Effects are immutable
/// once built; the fields are only reachable through accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Effect {
    life_delta: i8,
    stuns: bool,
}

impl Effect {
    pub const fn new(life_delta: i8, stuns: bool) -> Self {
        Self { life_delta, stuns }
    }

    /// No life change, no stun.
    pub const fn none() -> Self {
        Self::new(0, false)
    }

    pub const fn stun() -> Self {
        Self::new(0, true)
    }

    pub const fn life_delta(&self) -> i8 {
        self.life_delta
    }

    pub const fn stuns(&self) -> bool {
        self.stuns
    }

    pub const fn is_heal(&self) -> bool {
        self.life_delta > 0
    }
}
