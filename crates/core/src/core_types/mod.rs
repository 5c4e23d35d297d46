//! Core value types shared by the grid, the spread engine and the optimizer

pub mod coord;
pub mod terrain;

pub use coord::{Coord, MOORE_OFFSETS};
pub use terrain::TerrainCategory;
