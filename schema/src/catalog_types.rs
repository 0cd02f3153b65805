use crate::Element;
use serde::{Deserialize, Serialize};

/// Inclusive bounds of the life delta rolled for a damaging effect.
pub const HURT_RANGE: (i8, i8) = (-50, -10);
/// Inclusive bounds of the life delta rolled for a healing effect.
pub const HEAL_RANGE: (i8, i8) = (10, 50);

/// A creature as listed in the catalog, before stats and abilities are rolled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureTemplate {
    pub name: String,
    pub element: Element,
    pub weak_to: Element,
}

/// The shape of an effect. Concrete values are rolled when an ability is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectTemplate {
    NoEffect,
    Stun,
    Heal,
    Hurt,
}

/// A plain attack: hurts the target, leaves the user alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackTemplate {
    pub name: String,
    pub element: Element,
}

/// A special ability (heal, stun, mutual damage). Never used twice in a row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialTemplate {
    pub name: String,
    pub element: Element,
    pub on_self: EffectTemplate,
    pub on_target: EffectTemplate,
}

/// Everything the creature factory can instantiate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogData {
    pub creatures: Vec<CreatureTemplate>,
    pub attacks: Vec<AttackTemplate>,
    pub specials: Vec<SpecialTemplate>,
}
