//! Random terrain generation
//!
//! Each cell is drawn independently from a categorical distribution over
//! `Water`, `Tree` and `Empty`. Water is tested first, so when
//! `water_fraction + tree_fraction > 1` trees only receive what is left.

use crate::core_types::TerrainCategory;
use crate::error::FireSimError;
use crate::grid::terrain_grid::{validate_dimensions, TerrainGrid};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Parameters for [`generate`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Grid width in cells
    pub width: i32,
    /// Grid height in cells
    pub height: i32,
    /// Probability that a cell becomes a tree (0-1)
    pub tree_fraction: f64,
    /// Probability that a cell becomes water (0-1)
    pub water_fraction: f64,
    /// Fixed RNG seed for reproducible grids, `None` draws from the OS
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 8,
            tree_fraction: 0.6,
            water_fraction: 0.1,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Default fractions on a `width × height` grid
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Open woodland: fires tend to stay small
    pub fn sparse() -> Self {
        Self {
            tree_fraction: 0.35,
            water_fraction: 0.1,
            ..Self::default()
        }
    }

    /// Closed forest: a single ignition usually reaches most of the grid
    pub fn dense() -> Self {
        Self {
            tree_fraction: 0.8,
            water_fraction: 0.05,
            ..Self::default()
        }
    }

    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_fractions(mut self, tree_fraction: f64, water_fraction: f64) -> Self {
        self.tree_fraction = tree_fraction;
        self.water_fraction = water_fraction;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check dimensions and fractions
    ///
    /// # Errors
    /// Returns [`FireSimError::InvalidDimension`] for non-positive dimensions and
    /// [`FireSimError::InvalidProbability`] for fractions outside `[0, 1]` or NaN.
    pub fn validate(&self) -> Result<(), FireSimError> {
        validate_dimensions(self.width, self.height)?;
        validate_fraction("tree_fraction", self.tree_fraction)?;
        validate_fraction("water_fraction", self.water_fraction)?;
        Ok(())
    }
}

fn validate_fraction(name: &'static str, value: f64) -> Result<(), FireSimError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(FireSimError::InvalidProbability { name, value })
    }
}

/// Generate a grid from `config`, seeding from `config.seed` when present
///
/// # Errors
/// Returns the errors of [`GeneratorConfig::validate`].
pub fn generate(config: &GeneratorConfig) -> Result<TerrainGrid, FireSimError> {
    config.validate()?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    generate_with_rng(config, &mut rng)
}

/// Generate a grid drawing from a caller-supplied RNG (`config.seed` is ignored)
///
/// # Errors
/// Returns the errors of [`GeneratorConfig::validate`].
pub fn generate_with_rng<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<TerrainGrid, FireSimError> {
    config.validate()?;

    let water = config.water_fraction;
    let tree_cutoff = water + config.tree_fraction;
    let total = config.width as usize * config.height as usize;

    let cells = (0..total)
        .map(|_| {
            let r: f64 = rng.random();
            if r < water {
                TerrainCategory::Water
            } else if r < tree_cutoff {
                TerrainCategory::Tree
            } else {
                TerrainCategory::Empty
            }
        })
        .collect();

    let grid = TerrainGrid::from_cells(config.width, config.height, cells)?;
    debug!(
        "Generated {}x{} grid: {} trees, {} water",
        grid.width(),
        grid.height(),
        grid.count(TerrainCategory::Tree),
        grid.count(TerrainCategory::Water)
    );
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_default_matches_demo_scenario() {
        let config = GeneratorConfig::default();
        assert_eq!((config.width, config.height), (10, 8));
        assert_eq!(config.tree_fraction, 0.6);
        assert_eq!(config.water_fraction, 0.1);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_dimensions_respected() {
        let grid = generate(&GeneratorConfig::new(15, 12).with_seed(7)).unwrap();
        assert_eq!(grid.width(), 15);
        assert_eq!(grid.height(), 12);
        assert_eq!(grid.len(), 180);
    }

    #[test]
    fn test_seed_is_reproducible() {
        let config = GeneratorConfig::dense().with_size(30, 20).with_seed(1234);
        assert_eq!(generate(&config).unwrap(), generate(&config).unwrap());
    }

    #[test]
    fn test_never_generates_burnt_cells() {
        let grid = generate(&GeneratorConfig::new(40, 40).with_seed(3)).unwrap();
        assert_eq!(grid.count(TerrainCategory::Burnt), 0);
    }

    #[test]
    fn test_fractions_are_approximately_honoured() {
        let config = GeneratorConfig::new(200, 200)
            .with_fractions(0.5, 0.2)
            .with_seed(42);
        let counts = generate(&config).unwrap().category_counts();
        assert_abs_diff_eq!(counts.fraction(TerrainCategory::Tree), 0.5, epsilon = 0.03);
        assert_abs_diff_eq!(counts.fraction(TerrainCategory::Water), 0.2, epsilon = 0.03);
        assert_abs_diff_eq!(counts.fraction(TerrainCategory::Empty), 0.3, epsilon = 0.03);
    }

    #[test]
    fn test_extreme_fractions() {
        let all_water = generate(&GeneratorConfig::new(6, 6).with_fractions(0.5, 1.0).with_seed(1))
            .unwrap();
        assert_eq!(all_water.count(TerrainCategory::Water), 36);

        let bare = generate(&GeneratorConfig::new(6, 6).with_fractions(0.0, 0.0).with_seed(1))
            .unwrap();
        assert_eq!(bare.count(TerrainCategory::Empty), 36);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = generate(&GeneratorConfig::default().with_fractions(1.5, 0.1)).unwrap_err();
        assert_eq!(
            err,
            FireSimError::InvalidProbability {
                name: "tree_fraction",
                value: 1.5,
            }
        );

        let err = generate(&GeneratorConfig::default().with_fractions(0.5, f64::NAN)).unwrap_err();
        assert!(matches!(
            err,
            FireSimError::InvalidProbability {
                name: "water_fraction",
                ..
            }
        ));

        let err = generate(&GeneratorConfig::new(0, 4)).unwrap_err();
        assert!(matches!(err, FireSimError::InvalidDimension { .. }));
    }
}
