//! Baseline and working grid pair
//!
//! A [`FireScenario`] keeps the authored terrain (`baseline`) apart from the
//! grid that fires actually burn (`working`). The working grid is only ever
//! replaced by a fresh copy of the baseline, and only the cut optimizer
//! writes to the baseline.

use crate::error::FireSimError;
use crate::grid::TerrainGrid;
use crate::optimizer::{best_n_cuts, best_single_cut, CutRecord};
use crate::simulation::simulate_fire;
use tracing::info;

/// Baseline terrain plus the working copy a fire mutates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FireScenario {
    baseline: TerrainGrid,
    working: TerrainGrid,
}

impl FireScenario {
    pub fn new(baseline: TerrainGrid) -> Self {
        let working = baseline.clone();
        Self { baseline, working }
    }

    /// Terrain as authored, plus any committed cuts
    pub fn baseline(&self) -> &TerrainGrid {
        &self.baseline
    }

    /// Grid as left by the most recent fire
    pub fn working(&self) -> &TerrainGrid {
        &self.working
    }

    pub fn into_baseline(self) -> TerrainGrid {
        self.baseline
    }

    /// Discard the working grid and start again from the baseline
    pub fn reset(&mut self) {
        self.working = self.baseline.clone();
    }

    /// Burn the working grid from `(x, y)`
    ///
    /// Cells burnt by earlier fires stay burnt until [`reset`](Self::reset).
    ///
    /// # Errors
    /// Returns [`FireSimError::InvalidOrigin`] if `(x, y)` is outside the grid.
    pub fn ignite(&mut self, x: i32, y: i32) -> Result<usize, FireSimError> {
        let burned = simulate_fire(&mut self.working, x, y)?;
        info!("Fire from ({}, {}) burned {} cells", x, y, burned);
        Ok(burned)
    }

    /// Commit the best single cut, then re-burn a fresh working grid from `(x, y)`
    ///
    /// When no cut helps, the baseline is unchanged and the working grid shows
    /// the uncut fire.
    ///
    /// # Errors
    /// Returns [`FireSimError::InvalidOrigin`] if `(x, y)` is outside the grid.
    pub fn apply_best_cut(&mut self, x: i32, y: i32) -> Result<Option<CutRecord>, FireSimError> {
        let record = best_single_cut(&mut self.baseline, x, y)?;
        self.reburn(x, y)?;
        Ok(record)
    }

    /// Commit up to `max_cuts` greedy cuts, then re-burn a fresh working grid from `(x, y)`
    ///
    /// # Errors
    /// Returns [`FireSimError::InvalidOrigin`] if `(x, y)` is outside the grid.
    pub fn apply_best_cuts(
        &mut self,
        x: i32,
        y: i32,
        max_cuts: usize,
    ) -> Result<Vec<CutRecord>, FireSimError> {
        let records = best_n_cuts(&mut self.baseline, x, y, max_cuts)?;
        self.reburn(x, y)?;
        Ok(records)
    }

    fn reburn(&mut self, x: i32, y: i32) -> Result<usize, FireSimError> {
        self.reset();
        simulate_fire(&mut self.working, x, y)
    }
}

impl From<TerrainGrid> for FireScenario {
    fn from(baseline: TerrainGrid) -> Self {
        Self::new(baseline)
    }
}
