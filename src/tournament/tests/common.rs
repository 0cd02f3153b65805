use crate::ability::Ability;
use crate::creature::{Creature, CreatureBuilder};
use crate::rng::{RandomSource, SeededRng};
use crate::tournament::Engine;
use schema::Element;

/// A builder for creating test creatures with common defaults.
///
/// Every test creature knows "Tackle" (elementless, -10) at index 0, so
/// extra abilities land at index 1 and up.
///
/// # Example
/// ```ignore
/// let squirtle = TestCreatureBuilder::new("Squirtle")
///     .with_stats(1.5, 1.2)
///     .with_life(100)
///     .build();
/// ```
pub struct TestCreatureBuilder {
    name: String,
    element: Element,
    weak_to: Element,
    abilities: Vec<Ability>,
    defence: f32,
    strength: f32,
    catchable_at: u8,
    life: Option<u8>,
}

impl TestCreatureBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            element: Element::Water,
            weak_to: Element::Electric,
            abilities: vec![Ability::attack("Tackle", Element::None, -10)],
            defence: 1.5,
            strength: 1.2,
            catchable_at: 255,
            life: None,
        }
    }

    pub fn with_element(mut self, element: Element) -> Self {
        self.element = element;
        self
    }

    pub fn with_weakness(mut self, weak_to: Element) -> Self {
        self.weak_to = weak_to;
        self
    }

    /// Replaces the default Tackle with the given abilities.
    pub fn with_only_abilities(mut self, abilities: Vec<Ability>) -> Self {
        self.abilities = abilities;
        self
    }

    pub fn with_ability(mut self, ability: Ability) -> Self {
        self.abilities.push(ability);
        self
    }

    pub fn with_stats(mut self, defence: f32, strength: f32) -> Self {
        self.defence = defence;
        self.strength = strength;
        self
    }

    pub fn with_catchable_at(mut self, catchable_at: u8) -> Self {
        self.catchable_at = catchable_at;
        self
    }

    /// Sets the current life. If not set, life is full.
    pub fn with_life(mut self, life: u8) -> Self {
        self.life = Some(life);
        self
    }

    pub fn build(self) -> Creature {
        let mut creature = match CreatureBuilder::new(&self.name, self.element, self.weak_to)
            .abilities(self.abilities)
            .defence(self.defence)
            .strength(self.strength)
            .catchable_at(self.catchable_at)
            .build()
        {
            Ok(creature) => creature,
            Err(err) => panic!("Failed to build test creature {}: {}", self.name, err),
        };

        if let Some(life) = self.life {
            creature.life = life;
        }
        creature
    }
}

/// Water creature with a single -50 Water attack. Defence 1.5, strength 1.2.
pub fn blastoise() -> Creature {
    TestCreatureBuilder::new("Blastoise")
        .with_element(Element::Water)
        .with_weakness(Element::Electric)
        .with_only_abilities(vec![Ability::attack("Water whip", Element::Water, -50)])
        .build()
}

/// Fire creature weak to Water with a single -50 Fire attack. Always catchable.
pub fn charizard() -> Creature {
    TestCreatureBuilder::new("Charizard")
        .with_element(Element::Fire)
        .with_weakness(Element::Water)
        .with_only_abilities(vec![Ability::attack("Fire breath", Element::Fire, -50)])
        .build()
}

/// Like [`charizard`], but only catchable at 1 life.
pub fn charizard_not_catchable() -> Creature {
    TestCreatureBuilder::new("Charizard")
        .with_element(Element::Fire)
        .with_weakness(Element::Water)
        .with_only_abilities(vec![Ability::attack("Fire breath", Element::Fire, -50)])
        .with_catchable_at(1)
        .build()
}

/// Electric creature, only catchable at 1 life.
pub fn pikachu() -> Creature {
    TestCreatureBuilder::new("Pikachu")
        .with_element(Element::Electric)
        .with_weakness(Element::Fire)
        .with_only_abilities(vec![Ability::attack("Thunder strike", Element::Electric, -50)])
        .with_catchable_at(1)
        .build()
}

/// An engine with a seeded generator and the given creatures, in order.
pub fn create_test_engine(seed: u64, creatures: Vec<Creature>) -> Engine {
    create_test_engine_with_rng(Box::new(SeededRng::new(seed)), creatures)
}

pub fn create_test_engine_with_rng(rng: Box<dyn RandomSource>, creatures: Vec<Creature>) -> Engine {
    let mut engine = match Engine::new(rng) {
        Ok(engine) => engine,
        Err(err) => panic!("Failed to create test engine: {}", err),
    };
    for creature in creatures {
        engine.add_creature(creature);
    }
    engine
}
