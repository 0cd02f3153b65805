use crate::ability::{Ability, Narrative};
use crate::errors::{BattleResult, ConfigurationError, ConfigurationResult, IndexError};
use crate::rng::RandomSource;
use schema::Element;
use serde::{Deserialize, Serialize};

/// Life of a creature at full health.
pub const MAX_LIFE: u8 = u8::MAX;
/// Lowest defence or strength a creature may have.
pub const MIN_STAT: f32 = 0.1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    pub name: String,
    pub element: Element,
    pub weak_to: Element,
    pub abilities: Vec<Ability>,
    pub life: u8,
    pub defence: f32,
    pub strength: f32,
    /// The creature can be caught once its life is at or below this value.
    pub catchable_at: u8,
    pub caught: bool,
    pub stunned: bool,
    pub used_special_last_turn: bool,
}

impl Creature {
    pub fn builder(name: impl Into<String>, element: Element, weak_to: Element) -> CreatureBuilder {
        CreatureBuilder::new(name, element, weak_to)
    }

    /// Performs the ability at `index` on `target`.
    pub fn use_ability(&mut self, target: &mut Creature, index: usize) -> BattleResult<Narrative> {
        let ability = self
            .abilities
            .get(index)
            .cloned()
            .ok_or_else(|| IndexError::InvalidAbilityIndex {
                creature: self.name.clone(),
                index,
                len: self.abilities.len(),
            })?;

        Ok(ability.execute(self, target))
    }

    /// Performs a uniformly random ability on `target`.
    ///
    /// Right after a special ability only regular abilities are candidates, so
    /// heals and stuns can't be chained.
    pub fn use_random_ability(
        &mut self,
        target: &mut Creature,
        rng: &mut dyn RandomSource,
    ) -> BattleResult<Narrative> {
        let ability = if self.used_special_last_turn {
            let regular: Vec<&Ability> = self.abilities.iter().filter(|a| !a.is_special).collect();
            if regular.is_empty() {
                return Err(ConfigurationError::NoRegularAbility {
                    creature: self.name.clone(),
                }
                .into());
            }
            let chosen = regular[rng.next_index(regular.len())].clone();
            self.used_special_last_turn = false;
            chosen
        } else {
            if self.abilities.is_empty() {
                return Err(ConfigurationError::NoRegularAbility {
                    creature: self.name.clone(),
                }
                .into());
            }
            let chosen = self.abilities[rng.next_index(self.abilities.len())].clone();
            if chosen.is_special {
                self.used_special_last_turn = true;
            }
            chosen
        };

        Ok(ability.execute(self, target))
    }

    /// Back to full life with a clean status. Called on the winner of a battle.
    pub fn restore(&mut self) {
        self.life = MAX_LIFE;
        self.stunned = false;
        self.used_special_last_turn = false;
    }

    pub fn is_defeated(&self) -> bool {
        self.life == 0
    }

    /// Whether the creature is out of the battle, by defeat or capture.
    pub fn is_out(&self) -> bool {
        self.is_defeated() || self.caught
    }

    pub fn is_catchable(&self) -> bool {
        self.life <= self.catchable_at
    }

    pub fn knows(&self, ability_name: &str) -> bool {
        self.abilities.iter().any(|a| a.name == ability_name)
    }
}

/// Assembles a [`Creature`] and checks its construction invariants.
#[derive(Debug, Clone)]
pub struct CreatureBuilder {
    name: String,
    element: Element,
    weak_to: Element,
    abilities: Vec<Ability>,
    defence: f32,
    strength: f32,
    catchable_at: u8,
}

impl CreatureBuilder {
    pub fn new(name: impl Into<String>, element: Element, weak_to: Element) -> Self {
        Self {
            name: name.into(),
            element,
            weak_to,
            abilities: Vec::new(),
            defence: 1.0,
            strength: 1.0,
            catchable_at: 100,
        }
    }

    pub fn ability(mut self, ability: Ability) -> Self {
        self.abilities.push(ability);
        self
    }

    pub fn abilities(mut self, abilities: impl IntoIterator<Item = Ability>) -> Self {
        self.abilities.extend(abilities);
        self
    }

    pub fn defence(mut self, defence: f32) -> Self {
        self.defence = defence;
        self
    }

    pub fn strength(mut self, strength: f32) -> Self {
        self.strength = strength;
        self
    }

    pub fn catchable_at(mut self, catchable_at: u8) -> Self {
        self.catchable_at = catchable_at;
        self
    }

    pub fn build(self) -> ConfigurationResult<Creature> {
        for (stat, value) in [("defence", self.defence), ("strength", self.strength)] {
            // Also rejects NaN.
            if !(value >= MIN_STAT) {
                return Err(ConfigurationError::StatTooLow {
                    creature: self.name,
                    stat,
                    value,
                    minimum: MIN_STAT,
                });
            }
        }

        if self.catchable_at == 0 {
            return Err(ConfigurationError::ZeroCatchThreshold {
                creature: self.name,
            });
        }

        for (i, ability) in self.abilities.iter().enumerate() {
            if self.abilities[..i].iter().any(|a| a.name == ability.name) {
                return Err(ConfigurationError::DuplicateAbility {
                    creature: self.name.clone(),
                    ability: ability.name.clone(),
                });
            }
        }

        if self.abilities.iter().all(|a| a.is_special) {
            return Err(ConfigurationError::NoRegularAbility {
                creature: self.name,
            });
        }

        Ok(Creature {
            name: self.name,
            element: self.element,
            weak_to: self.weak_to,
            abilities: self.abilities,
            life: MAX_LIFE,
            defence: self.defence,
            strength: self.strength,
            catchable_at: self.catchable_at,
            caught: false,
            stunned: false,
            used_special_last_turn: false,
        })
    }
}
