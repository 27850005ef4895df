//! Material and Color types for the simulation grid.

use std::fmt;

/// RGB display color of a material.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const BROWN: Color = Color::rgb(165, 42, 42);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const GRAY: Color = Color::rgb(190, 190, 190);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack as `0xRRGGBBAA` with full alpha.
    #[must_use]
    pub const fn to_rgba_u32(self) -> u32 {
        (self.r as u32) << 24 | (self.g as u32) << 16 | (self.b as u32) << 8 | 0xff
    }
}

/// Discriminant values are exposed to the browser as raw bytes; do not reorder.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Material {
    #[default]
    Empty = 0,
    Sand = 1,
    Earth = 2,
    Water = 3,
    Iron = 4,
}

impl Material {
    pub const ALL: [Material; 5] = [
        Material::Empty,
        Material::Sand,
        Material::Earth,
        Material::Water,
        Material::Iron,
    ];

    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Empty => Color::BLACK,
            Self::Sand => Color::YELLOW,
            Self::Earth => Color::BROWN,
            Self::Water => Color::BLUE,
            Self::Iron => Color::GRAY,
        }
    }

    /// Blocked cells never move and are never moved into by gravity.
    #[must_use]
    pub const fn is_blocked(self) -> bool {
        matches!(self, Self::Iron)
    }

    /// Materials the user can pick as the paint material.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "sand" => Some(Self::Sand),
            "water" => Some(Self::Water),
            "iron" => Some(Self::Iron),
            _ => None,
        }
    }

    #[must_use]
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            'w' => Some(Self::Water),
            's' => Some(Self::Sand),
            'i' => Some(Self::Iron),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Material {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL.get(usize::from(value)).copied().ok_or(value)
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty"),
            Self::Sand => write!(f, "Sand"),
            Self::Earth => write!(f, "Earth"),
            Self::Water => write!(f, "Water"),
            Self::Iron => write!(f, "Iron"),
        }
    }
}
