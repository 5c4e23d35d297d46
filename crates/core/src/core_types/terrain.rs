//! Terrain categories for grid cells
//!
//! Cells are binary with respect to fire: a `Tree` is the only flammable state
//! and `Burnt` is terminal. Every other category is inert.

use serde::{Deserialize, Serialize};

/// Category of a single grid cell
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum TerrainCategory {
    /// Bare ground, does not burn
    #[default]
    Empty,
    /// Flammable vegetation (the default generated fuel)
    Tree,
    /// Water body, never burns
    Water,
    /// Terminal state reached only through ignition
    Burnt,
}

impl TerrainCategory {
    /// All categories in declaration order
    pub const ALL: [TerrainCategory; 4] = [Self::Empty, Self::Tree, Self::Water, Self::Burnt];

    /// Whether fire can spread into this cell
    #[inline]
    pub const fn is_flammable(self) -> bool {
        matches!(self, Self::Tree)
    }

    /// ASCII symbol used by the text grid format
    pub const fn symbol(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Tree => 'T',
            Self::Water => 'W',
            Self::Burnt => 'X',
        }
    }

    /// Parse an ASCII symbol back into a category
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(Self::Empty),
            'T' => Some(Self::Tree),
            'W' => Some(Self::Water),
            'X' => Some(Self::Burnt),
            _ => None,
        }
    }

    /// Human-readable label for reports
    pub const fn label(self) -> &'static str {
        match self {
            Self::Empty => "Bare ground",
            Self::Tree => "Tree",
            Self::Water => "Water",
            Self::Burnt => "Burnt ground",
        }
    }

    /// Glyph used by the console and HTML renderers
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Empty => "⬜",
            Self::Tree => "🌳",
            Self::Water => "💧",
            Self::Burnt => "🔥",
        }
    }

    /// Glyph used inside HTML cells, where bare ground shows as leaf litter
    pub const fn html_glyph(self) -> &'static str {
        match self {
            Self::Empty => "🍂",
            Self::Tree | Self::Water | Self::Burnt => self.glyph(),
        }
    }

    /// Background colour used by the HTML renderer
    pub const fn html_color(self) -> &'static str {
        match self {
            Self::Empty => "#D2B48C",
            Self::Tree => "#228B22",
            Self::Water => "#4169E1",
            Self::Burnt => "#8B0000",
        }
    }
}

impl std::fmt::Display for TerrainCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
