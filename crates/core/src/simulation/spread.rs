//! Breadth-first fire spread over Moore neighbors
//!
//! Fire starts at a single tree and burns every tree reachable from it through
//! chains of the 8-connected neighborhood. There is no time dimension: one
//! queue pop burns one cell, and the run ends when the queue drains.
//!
//! Visitation order is FIFO with neighbors enqueued in
//! [`MOORE_OFFSETS`](crate::core_types::MOORE_OFFSETS) order, so identical
//! grids and origins always produce identical burn sequences.

use crate::core_types::{Coord, TerrainCategory};
use crate::error::FireSimError;
use crate::grid::TerrainGrid;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use tracing::{debug, trace};

/// Burn `grid` in place from `(x, y)` and return the number of cells ignited
///
/// A non-tree origin is a normal outcome: nothing burns and `0` is returned.
///
/// # Errors
/// Returns [`FireSimError::InvalidOrigin`] if `(x, y)` is outside the grid. The
/// grid is not touched in that case.
pub fn simulate_fire(grid: &mut TerrainGrid, x: i32, y: i32) -> Result<usize, FireSimError> {
    spread(grid, x, y, |_| {})
}

/// Burn `grid` in place from `(x, y)` and return the cells in the order they burnt
///
/// The sequence length equals what [`simulate_fire`] would return for the same
/// grid and origin.
///
/// # Errors
/// Returns [`FireSimError::InvalidOrigin`] if `(x, y)` is outside the grid.
pub fn burn_sequence(grid: &mut TerrainGrid, x: i32, y: i32) -> Result<Vec<Coord>, FireSimError> {
    let mut order = Vec::new();
    spread(grid, x, y, |coord| order.push(coord))?;
    Ok(order)
}

fn spread<F>(grid: &mut TerrainGrid, x: i32, y: i32, mut on_burn: F) -> Result<usize, FireSimError>
where
    F: FnMut(Coord),
{
    if !grid.contains(x, y) {
        return Err(FireSimError::invalid_origin(
            x,
            y,
            grid.width(),
            grid.height(),
        ));
    }

    let origin = Coord::new(x, y);
    if grid.category(origin) != Some(TerrainCategory::Tree) {
        debug!("No tree to burn at {}", origin);
        return Ok(0);
    }

    debug!("Fire started at {}", origin);

    let mut queue = VecDeque::from([origin]);
    // A tree that was ever queued is either still waiting or already burnt,
    // so this matches an "is it in the queue" check without scanning it.
    let mut queued: FxHashSet<Coord> = FxHashSet::default();
    queued.insert(origin);
    let mut burned = 0;

    while let Some(coord) = queue.pop_front() {
        match grid.category_mut(coord) {
            Some(cell) if cell.is_flammable() => *cell = TerrainCategory::Burnt,
            _ => continue,
        }
        burned += 1;
        on_burn(coord);
        trace!("Cell burnt: {} - total {}", coord, burned);

        for next in grid.neighbors_of(coord) {
            if grid.category(next) == Some(TerrainCategory::Tree) && queued.insert(next) {
                queue.push_back(next);
            }
        }
    }

    debug!("Fire at {} burned out: {} cells", origin, burned);
    Ok(burned)
}
