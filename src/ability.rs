use crate::creature::Creature;
use schema::{Color, Effect, Element};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named action with one effect on its user and one on its target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    pub element: Element,
    pub effect_on_self: Effect,
    pub effect_on_target: Effect,
    /// Heals, stuns and mutual damage. The owning creature never uses two in a row.
    pub is_special: bool,
}

/// What happened when a creature took its turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Narrative {
    Used {
        actor: String,
        ability: String,
        element: Element,
    },
    Stunned {
        actor: String,
    },
}

impl Narrative {
    pub fn actor(&self) -> &str {
        match self {
            Narrative::Used { actor, .. } | Narrative::Stunned { actor } => actor,
        }
    }

    /// The ability used, if the actor was not stunned.
    pub fn ability(&self) -> Option<&str> {
        match self {
            Narrative::Used { ability, .. } => Some(ability),
            Narrative::Stunned { .. } => None,
        }
    }
}

impl fmt::Display for Narrative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Narrative::Used { actor, ability, .. } => write!(f, "{} used {}", actor, ability),
            Narrative::Stunned { actor } => write!(f, "{} is stunned", actor),
        }
    }
}

impl Ability {
    pub fn new(
        name: impl Into<String>,
        element: Element,
        effect_on_self: Effect,
        effect_on_target: Effect,
        is_special: bool,
    ) -> Self {
        Self {
            name: name.into(),
            element,
            effect_on_self,
            effect_on_target,
            is_special,
        }
    }

    /// A plain attack: no effect on the user, `damage` on the target.
    pub fn attack(name: impl Into<String>, element: Element, damage: i8) -> Self {
        Self::new(name, element, Effect::none(), Effect::new(damage, false), false)
    }

    pub fn color(&self) -> Color {
        self.element.color()
    }

    /// Life `target` ends up with after `effect` is applied by an actor of the given strength.
    ///
    /// Heals and hits on the ability's weakness bypass defence; everything else is
    /// divided by the target's defence. The fractional part is truncated toward zero
    /// and the result clamped to `0..=255`.
    pub fn new_life_value(&self, effect: &Effect, strength: f32, target: &Creature) -> u8 {
        let raw = f32::from(effect.life_delta()) * strength;
        let full_effect = if target.weak_to == self.element || effect.is_heal() {
            raw
        } else {
            raw / target.defence
        };

        let life_after_effect = i32::from(target.life) + full_effect as i32;
        life_after_effect.clamp(0, i32::from(u8::MAX)) as u8
    }

    /// Resolves this ability from `acting` onto `target`.
    ///
    /// A stunned actor loses the turn instead and shakes off the stun.
    pub fn execute(&self, acting: &mut Creature, target: &mut Creature) -> Narrative {
        if acting.stunned {
            acting.stunned = false;
            tracing::debug!(actor = %acting.name, "stunned, turn skipped");
            return Narrative::Stunned {
                actor: acting.name.clone(),
            };
        }

        let strength = acting.strength;

        acting.life = self.new_life_value(&self.effect_on_self, strength, acting);
        acting.stunned = self.effect_on_self.stuns();

        target.life = self.new_life_value(&self.effect_on_target, strength, target);
        target.stunned = self.effect_on_target.stuns();

        tracing::debug!(
            actor = %acting.name,
            ability = %self.name,
            target = %target.name,
            actor_life = acting.life,
            target_life = target.life,
            "ability resolved"
        );

        Narrative::Used {
            actor: acting.name.clone(),
            ability: self.name.clone(),
            element: self.element,
        }
    }
}
