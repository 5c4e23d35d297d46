//! Rectangular terrain grid with Moore adjacency
//!
//! The grid is pure storage: it knows its dimensions, the category of every
//! cell, and which cells touch which. Fire behaviour lives in
//! [`crate::simulation`], and cut decisions in [`crate::optimizer`].
//!
//! `Clone` is the copy operation. A clone shares nothing with its source, so
//! the spread engine can burn a working copy while the baseline stays intact.

use crate::core_types::{Coord, TerrainCategory};
use crate::error::FireSimError;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Terrain state container
///
/// Deserialization goes through [`TerrainGrid::from_cells`], so a decoded grid
/// obeys the same dimension checks as one built in code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTerrainGrid")]
pub struct TerrainGrid {
    /// Width in cells
    width: i32,
    /// Height in cells
    height: i32,
    /// Cells in row-major order: `[y * width + x]`
    cells: Vec<TerrainCategory>,
}

/// Unchecked wire form of [`TerrainGrid`]
#[derive(Deserialize)]
struct RawTerrainGrid {
    width: i32,
    height: i32,
    cells: Vec<TerrainCategory>,
}

impl TryFrom<RawTerrainGrid> for TerrainGrid {
    type Error = FireSimError;

    fn try_from(raw: RawTerrainGrid) -> Result<Self, Self::Error> {
        Self::from_cells(raw.width, raw.height, raw.cells)
    }
}

impl TerrainGrid {
    /// Create a grid with every cell `Empty`
    ///
    /// # Errors
    /// Returns [`FireSimError::InvalidDimension`] if `width` or `height` is not positive.
    pub fn new(width: i32, height: i32) -> Result<Self, FireSimError> {
        Self::filled(width, height, TerrainCategory::Empty)
    }

    /// Create a grid with every cell set to `category`
    ///
    /// # Errors
    /// Returns [`FireSimError::InvalidDimension`] if `width` or `height` is not positive.
    pub fn filled(width: i32, height: i32, category: TerrainCategory) -> Result<Self, FireSimError> {
        validate_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![category; width as usize * height as usize],
        })
    }

    /// Wrap an existing row-major cell buffer
    ///
    /// # Errors
    /// Returns [`FireSimError::InvalidDimension`] if the dimensions are not positive
    /// or `cells.len()` differs from `width * height`.
    pub fn from_cells(
        width: i32,
        height: i32,
        cells: Vec<TerrainCategory>,
    ) -> Result<Self, FireSimError> {
        validate_dimensions(width, height)?;
        if cells.len() != width as usize * height as usize {
            return Err(FireSimError::InvalidDimension {
                width: i64::from(width),
                height: i64::from(height),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of cells
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: every constructor rejects zero-sized grids
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `(x, y)` lies inside the grid
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        (0..self.width).contains(&x) && (0..self.height).contains(&y)
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.contains(x, y) {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    #[inline]
    fn coord_of(&self, index: usize) -> Coord {
        let width = self.width as usize;
        Coord::new((index % width) as i32, (index / width) as i32)
    }

    /// Category at `(x, y)`
    ///
    /// # Errors
    /// Returns [`FireSimError::OutOfBounds`] if the cell is outside the grid.
    pub fn get(&self, x: i32, y: i32) -> Result<TerrainCategory, FireSimError> {
        self.index(x, y)
            .map(|i| self.cells[i])
            .ok_or_else(|| self.out_of_bounds(x, y))
    }

    /// Overwrite the category at `(x, y)`
    ///
    /// # Errors
    /// Returns [`FireSimError::OutOfBounds`] if the cell is outside the grid.
    pub fn set(&mut self, x: i32, y: i32, category: TerrainCategory) -> Result<(), FireSimError> {
        let i = self.index(x, y).ok_or_else(|| self.out_of_bounds(x, y))?;
        self.cells[i] = category;
        Ok(())
    }

    /// Category at `coord`, or `None` outside the grid
    #[inline]
    pub fn category(&self, coord: Coord) -> Option<TerrainCategory> {
        self.index(coord.x, coord.y).map(|i| self.cells[i])
    }

    /// Mutable access for in-bounds coordinates produced by the grid itself
    #[inline]
    pub(crate) fn category_mut(&mut self, coord: Coord) -> Option<&mut TerrainCategory> {
        self.index(coord.x, coord.y).map(|i| &mut self.cells[i])
    }

    /// In-bounds Moore neighbors of `(x, y)`, excluding the cell itself
    ///
    /// Neighbors come back in raster offset order (see
    /// [`MOORE_OFFSETS`](crate::core_types::MOORE_OFFSETS)): 3 at a corner,
    /// 5 along an edge and 8 in the interior.
    ///
    /// # Errors
    /// Returns [`FireSimError::OutOfBounds`] if `(x, y)` is outside the grid.
    pub fn neighbors(&self, x: i32, y: i32) -> Result<Vec<Coord>, FireSimError> {
        if !self.contains(x, y) {
            return Err(self.out_of_bounds(x, y));
        }
        Ok(self.neighbors_of(Coord::new(x, y)).collect())
    }

    pub(crate) fn neighbors_of(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        coord.moore().filter(|c| self.contains(c.x, c.y))
    }

    /// Tree cells in row-major scan order (`y` outer, `x` inner)
    pub fn tree_positions(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_flammable())
            .map(|(i, _)| self.coord_of(i))
    }

    /// Number of cells of `category`
    pub fn count(&self, category: TerrainCategory) -> usize {
        self.cells.iter().filter(|&&c| c == category).count()
    }

    /// Cell count for every category
    pub fn category_counts(&self) -> CategoryCounts {
        let mut counts: FxHashMap<TerrainCategory, usize> = TerrainCategory::ALL
            .into_iter()
            .map(|c| (c, 0))
            .collect();
        for cell in &self.cells {
            *counts.entry(*cell).or_insert(0) += 1;
        }
        CategoryCounts {
            counts,
            total: self.cells.len(),
        }
    }

    /// Row slices from top (`y = 0`) to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[TerrainCategory]> {
        self.cells.chunks(self.width as usize)
    }

    /// Raw row-major cell buffer
    pub fn cells(&self) -> &[TerrainCategory] {
        &self.cells
    }

    fn out_of_bounds(&self, x: i32, y: i32) -> FireSimError {
        FireSimError::out_of_bounds(x, y, self.width, self.height)
    }
}

pub(crate) fn validate_dimensions(width: i32, height: i32) -> Result<(), FireSimError> {
    if width <= 0 || height <= 0 {
        return Err(FireSimError::InvalidDimension {
            width: i64::from(width),
            height: i64::from(height),
        });
    }
    Ok(())
}

/// Per-category cell counts for a grid
///
/// Every category is present, possibly with a zero count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCounts {
    counts: FxHashMap<TerrainCategory, usize>,
    total: usize,
}

impl CategoryCounts {
    pub fn count(&self, category: TerrainCategory) -> usize {
        self.counts.get(&category).copied().unwrap_or(0)
    }

    /// Total number of cells in the grid
    pub fn total(&self) -> usize {
        self.total
    }

    /// Share of the grid covered by `category`, in `[0, 1]`
    pub fn fraction(&self, category: TerrainCategory) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(category) as f64 / self.total as f64
    }

    /// Same as [`fraction`](Self::fraction), scaled to percent
    pub fn percentage(&self, category: TerrainCategory) -> f64 {
        self.fraction(category) * 100.0
    }

    /// `(category, count)` pairs in declaration order
    pub fn entries(&self) -> impl Iterator<Item = (TerrainCategory, usize)> + '_ {
        TerrainCategory::ALL
            .into_iter()
            .map(|c| (c, self.count(c)))
    }
}

impl std::fmt::Display for TerrainGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for TerrainGrid {
    type Err = FireSimError;

    /// Parse one row per line using `.`, `T`, `W` and `X`. Blank lines are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::new();
        let mut width = None;
        let mut height = 0;

        for (line_idx, line) in s.lines().enumerate() {
            let row = line.trim();
            if row.is_empty() {
                continue;
            }

            let mut row_len = 0;
            for (col_idx, symbol) in row.chars().enumerate() {
                let category =
                    TerrainCategory::from_symbol(symbol).ok_or(FireSimError::Parse {
                        line: line_idx + 1,
                        column: col_idx + 1,
                        symbol,
                    })?;
                cells.push(category);
                row_len += 1;
            }

            match width {
                None => width = Some(row_len),
                Some(expected) if expected != row_len => {
                    return Err(FireSimError::RaggedRow {
                        line: line_idx + 1,
                        expected,
                        found: row_len,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        let width = i32::try_from(width.unwrap_or(0)).unwrap_or(i32::MAX);
        let height = i32::try_from(height).unwrap_or(i32::MAX);
        Self::from_cells(width, height, cells)
    }
}
