use serde::{Deserialize, Serialize};
use std::fmt;
use strum::EnumIter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, EnumIter)]
pub enum Element {
    Fire,
    Water,
    Electric,
    Ground,
    None,
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Display colour of an ability. Locked to the ability's element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub enum Color {
    OrangeRed,
    Aqua,
    Yellow,
    SaddleBrown,
    LawnGreen,
}

impl Color {
    /// 24-bit RGB value of the colour.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Color::OrangeRed => (255, 69, 0),
            Color::Aqua => (0, 255, 255),
            Color::Yellow => (255, 255, 0),
            Color::SaddleBrown => (139, 69, 19),
            Color::LawnGreen => (124, 252, 0),
        }
    }
}

impl Element {
    pub fn color(self) -> Color {
        match self {
            Element::Fire => Color::OrangeRed,
            Element::Water => Color::Aqua,
            Element::Electric => Color::Yellow,
            Element::Ground => Color::SaddleBrown,
            Element::None => Color::LawnGreen,
        }
    }

    /// Whether an ability of this element may be given to a creature of `creature_element`.
    /// Elementless abilities fit everyone.
    pub fn fits(self, creature_element: Element) -> bool {
        self == creature_element || self == Element::None
    }
}
