//! Terrain grid storage and generation

pub mod generator;
pub mod terrain_grid;

// Re-export main types
pub use generator::{generate, generate_with_rng, GeneratorConfig};
pub use terrain_grid::{CategoryCounts, TerrainGrid};
