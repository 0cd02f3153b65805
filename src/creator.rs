//! Creature factory.
//!
//! Turns the template table in `data/catalog.ron` into battle-ready creatures
//! with rolled stats and abilities. Every creature gets two attacks and one
//! special ability matching its element.

use crate::ability::Ability;
use crate::creature::{Creature, CreatureBuilder};
use crate::errors::{ConfigurationError, ConfigurationResult};
use crate::rng::RandomSource;
use schema::{
    AttackTemplate, CatalogData, CreatureTemplate, Effect, EffectTemplate, SpecialTemplate,
    HEAL_RANGE, HURT_RANGE,
};

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.ron");

/// Upper bound (inclusive) of a rolled capture threshold. Full-life creatures stay uncatchable.
pub const MAX_CATCHABLE_AT: u8 = 245;

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    data: CatalogData,
}

impl Catalog {
    /// The catalog shipped with the crate.
    pub fn builtin() -> ConfigurationResult<Self> {
        Self::from_ron(BUILTIN_CATALOG)
    }

    pub fn from_ron(source: &str) -> ConfigurationResult<Self> {
        let data: CatalogData = ron::from_str(source)
            .map_err(|e| ConfigurationError::MalformedCatalog(e.to_string()))?;
        if data.creatures.is_empty() {
            return Err(ConfigurationError::MalformedCatalog(
                "catalog lists no creatures".to_string(),
            ));
        }
        Ok(Self { data })
    }

    pub fn creature_names(&self) -> impl Iterator<Item = &str> {
        self.data.creatures.iter().map(|c| c.name.as_str())
    }

    /// Creates a creature from the template called `name`, or from a random template.
    pub fn create_creature(
        &self,
        name: Option<&str>,
        rng: &mut dyn RandomSource,
    ) -> ConfigurationResult<Creature> {
        let template = match name {
            None => &self.data.creatures[rng.next_index(self.data.creatures.len())],
            Some(name) => self
                .data
                .creatures
                .iter()
                .find(|t| t.name == name)
                .ok_or_else(|| ConfigurationError::UnknownCreature(name.to_string()))?,
        };

        let defence = 1.0 + rng.next_fraction();
        let strength = 1.0 + rng.next_fraction();
        let catchable_at = rng.next_in_range(1, i32::from(MAX_CATCHABLE_AT) + 1) as u8;

        let mut abilities = Vec::with_capacity(3);
        for _ in 0..2 {
            let attack = create_attack(&self.data.attacks, template, &abilities, rng)?;
            abilities.push(attack);
        }
        let special = create_special(&self.data.specials, template, &abilities, rng)?;
        abilities.push(special);

        let creature = CreatureBuilder::new(&template.name, template.element, template.weak_to)
            .abilities(abilities)
            .defence(defence)
            .strength(strength)
            .catchable_at(catchable_at)
            .build()?;

        tracing::debug!(
            name = %creature.name,
            defence = creature.defence,
            strength = creature.strength,
            catchable_at = creature.catchable_at,
            "created creature"
        );
        Ok(creature)
    }
}

/// Picks an attack the creature may learn and does not know yet, rolling its damage.
pub fn create_attack(
    templates: &[AttackTemplate],
    creature: &CreatureTemplate,
    known: &[Ability],
    rng: &mut dyn RandomSource,
) -> ConfigurationResult<Ability> {
    let candidates: Vec<&AttackTemplate> = templates
        .iter()
        .filter(|t| t.element.fits(creature.element) && !is_known(known, &t.name))
        .collect();
    if candidates.is_empty() {
        return Err(ConfigurationError::NoAbilityCandidates {
            creature: creature.name.clone(),
            kind: "attack",
        });
    }

    let template = candidates[rng.next_index(candidates.len())];
    Ok(Ability::new(
        &template.name,
        template.element,
        Effect::none(),
        roll_effect(EffectTemplate::Hurt, rng),
        false,
    ))
}

/// Picks a special ability the creature may learn and does not know yet.
pub fn create_special(
    templates: &[SpecialTemplate],
    creature: &CreatureTemplate,
    known: &[Ability],
    rng: &mut dyn RandomSource,
) -> ConfigurationResult<Ability> {
    let candidates: Vec<&SpecialTemplate> = templates
        .iter()
        .filter(|t| t.element.fits(creature.element) && !is_known(known, &t.name))
        .collect();
    if candidates.is_empty() {
        return Err(ConfigurationError::NoAbilityCandidates {
            creature: creature.name.clone(),
            kind: "special",
        });
    }

    let template = candidates[rng.next_index(candidates.len())];
    Ok(Ability::new(
        &template.name,
        template.element,
        roll_effect(template.on_self, rng),
        roll_effect(template.on_target, rng),
        true,
    ))
}

fn is_known(known: &[Ability], name: &str) -> bool {
    known.iter().any(|a| a.name == name)
}

fn roll_effect(template: EffectTemplate, rng: &mut dyn RandomSource) -> Effect {
    match template {
        EffectTemplate::NoEffect => Effect::none(),
        EffectTemplate::Stun => Effect::stun(),
        EffectTemplate::Heal => Effect::new(roll_delta(HEAL_RANGE, rng), false),
        EffectTemplate::Hurt => Effect::new(roll_delta(HURT_RANGE, rng), false),
    }
}

fn roll_delta((lo, hi): (i8, i8), rng: &mut dyn RandomSource) -> i8 {
    rng.next_in_range(i32::from(lo), i32::from(hi) + 1) as i8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{ScriptedRng, SeededRng};
    use pretty_assertions::assert_eq;
    use schema::Element;

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = Catalog::builtin().unwrap();
        let names: Vec<&str> = catalog.creature_names().collect();
        assert_eq!(names.len(), 9);
        assert!(names.contains(&"Blastoise"));
        assert_eq!(catalog.data.attacks.len(), 6);
        assert_eq!(catalog.data.specials.len(), 3);
    }

    #[test]
    fn test_created_creatures_follow_the_rules() {
        let catalog = Catalog::builtin().unwrap();
        let mut rng = SeededRng::new(2024);

        for _ in 0..200 {
            let creature = catalog.create_creature(None, &mut rng).unwrap();

            assert_eq!(creature.life, 255);
            assert!((1.0..2.0).contains(&creature.defence));
            assert!((1.0..2.0).contains(&creature.strength));
            assert!((1..=MAX_CATCHABLE_AT).contains(&creature.catchable_at));
            assert_eq!(creature.abilities.len(), 3);

            let (attacks, specials): (Vec<&Ability>, Vec<&Ability>) =
                creature.abilities.iter().partition(|a| !a.is_special);
            assert_eq!(attacks.len(), 2);
            assert_eq!(specials.len(), 1);
            assert_ne!(attacks[0].name, attacks[1].name);
            for attack in attacks {
                assert!(attack.element.fits(creature.element));
                assert!((-50..=-10).contains(&attack.effect_on_target.life_delta()));
                assert_eq!(attack.effect_on_self, Effect::none());
            }
        }
    }

    #[test]
    fn test_create_named_creature() {
        let catalog = Catalog::builtin().unwrap();
        let mut rng = SeededRng::new(1);

        let charizard = catalog.create_creature(Some("Charizard"), &mut rng).unwrap();

        assert_eq!(charizard.name, "Charizard");
        assert_eq!(charizard.element, Element::Fire);
        assert_eq!(charizard.weak_to, Element::Water);
    }

    #[test]
    fn test_unknown_creature_is_rejected() {
        let catalog = Catalog::builtin().unwrap();
        let mut rng = SeededRng::new(1);

        let err = catalog.create_creature(Some("Mewtwo"), &mut rng).unwrap_err();

        assert_eq!(err, ConfigurationError::UnknownCreature("Mewtwo".to_string()));
    }

    #[test]
    fn test_special_effects_are_rolled_from_their_templates() {
        let catalog = Catalog::builtin().unwrap();
        let template = CreatureTemplate {
            name: "Pikachu".to_string(),
            element: Element::Electric,
            weak_to: Element::Ground,
        };
        // Pick Heal (second special), roll +50 on self.
        let mut rng = ScriptedRng::new(vec![1, 40]);

        let heal = create_special(&catalog.data.specials, &template, &[], &mut rng).unwrap();

        assert_eq!(heal.name, "Heal");
        assert!(heal.is_special);
        assert_eq!(heal.effect_on_self, Effect::new(50, false));
        assert_eq!(heal.effect_on_target, Effect::none());
    }

    #[test]
    fn test_running_out_of_attacks_is_a_configuration_error() {
        let template = CreatureTemplate {
            name: "Diglett".to_string(),
            element: Element::Ground,
            weak_to: Element::Water,
        };
        let mut rng = SeededRng::new(3);

        let err = create_attack(&[], &template, &[], &mut rng).unwrap_err();

        assert!(matches!(err, ConfigurationError::NoAbilityCandidates { kind: "attack", .. }));
    }

    #[test]
    fn test_malformed_catalog_is_rejected() {
        assert!(matches!(
            Catalog::from_ron("CatalogData(creatures: oops)"),
            Err(ConfigurationError::MalformedCatalog(_))
        ));
    }
}
