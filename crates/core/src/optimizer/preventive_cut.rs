//! Greedy preventive cut search
//!
//! A preventive cut turns one `Tree` into `Empty` before the fire starts. The
//! single-cut search tries every candidate tree against a fresh copy of the
//! baseline and keeps the one that leaves the fewest cells burnt. The
//! multi-cut search commits that cut and repeats.
//!
//! The multi-cut result is greedy: each step is the best single removal for
//! the grid as it stands, but the set of `n` cuts is not guaranteed to be the
//! best set of `n` cuts overall.

use crate::core_types::{Coord, TerrainCategory};
use crate::error::FireSimError;
use crate::grid::TerrainGrid;
use crate::simulation::{burn_sequence, simulate_fire};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// One committed preventive cut
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CutRecord {
    /// Column of the removed tree
    pub x: i32,
    /// Row of the removed tree
    pub y: i32,
    /// Cells burnt from the origin before the cut
    pub burned_before: usize,
    /// Cells burnt from the origin after the cut
    pub burned_after: usize,
}

impl CutRecord {
    pub fn coord(&self) -> Coord {
        Coord::new(self.x, self.y)
    }

    /// Cells saved by this cut, zero if the record shows no saving
    pub fn reduction(&self) -> usize {
        self.burned_before.saturating_sub(self.burned_after)
    }
}

impl std::fmt::Display for CutRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "cut ({}, {}): {} -> {} cells burned",
            self.x, self.y, self.burned_before, self.burned_after
        )
    }
}

/// Burn count from `origin` on a copy of `baseline` with `candidate` cleared
///
/// # Errors
/// Returns [`FireSimError::OutOfBounds`] if `candidate` is outside the grid and
/// [`FireSimError::InvalidOrigin`] if `origin` is.
pub fn evaluate_cut(
    baseline: &TerrainGrid,
    origin: Coord,
    candidate: Coord,
) -> Result<usize, FireSimError> {
    let mut hypothetical = baseline.clone();
    hypothetical.set(candidate.x, candidate.y, TerrainCategory::Empty)?;
    simulate_fire(&mut hypothetical, origin.x, origin.y)
}

/// Find and commit the single tree removal that most reduces the fire from `(x, y)`
///
/// Candidates are scanned in row-major order and only a strictly smaller burn
/// count replaces the current best, so the first of several equal cuts wins.
/// The origin itself is never a candidate. When no cut burns strictly fewer
/// cells than doing nothing, `None` is returned and `baseline` is unchanged.
///
/// # Errors
/// Returns [`FireSimError::InvalidOrigin`] if `(x, y)` is outside the grid.
pub fn best_single_cut(
    baseline: &mut TerrainGrid,
    x: i32,
    y: i32,
) -> Result<Option<CutRecord>, FireSimError> {
    let origin = Coord::new(x, y);
    let burnt: FxHashSet<Coord> = burn_sequence(&mut baseline.clone(), x, y)?
        .into_iter()
        .collect();
    let burned_before = burnt.len();

    let mut best = None;
    let mut min_burned = burned_before;

    // Trees the unmodified fire never reaches cannot change its extent, so
    // only burnt trees are tried. Scan order stays row-major.
    let candidates = baseline
        .tree_positions()
        .filter(|c| *c != origin && burnt.contains(c));

    for candidate in candidates {
        // The origin always burns
        if min_burned <= 1 {
            break;
        }
        let burned = evaluate_cut(baseline, origin, candidate)?;
        if burned < min_burned {
            min_burned = burned;
            best = Some(candidate);
        }
    }

    let Some(cut) = best else {
        debug!(
            "No cut improves on {} burnt cells from {}",
            burned_before, origin
        );
        return Ok(None);
    };

    baseline.set(cut.x, cut.y, TerrainCategory::Empty)?;
    let record = CutRecord {
        x: cut.x,
        y: cut.y,
        burned_before,
        burned_after: min_burned,
    };
    debug!("Best {} (fire from {})", record, origin);
    Ok(Some(record))
}

/// Commit up to `max_cuts` greedy cuts against the fire from `(x, y)`
///
/// Stops early as soon as a step finds no improving cut, so the result may be
/// shorter than `max_cuts`. Each record improves on the grid left by the
/// previous one.
///
/// # Errors
/// Returns [`FireSimError::InvalidOrigin`] if `(x, y)` is outside the grid.
pub fn best_n_cuts(
    baseline: &mut TerrainGrid,
    x: i32,
    y: i32,
    max_cuts: usize,
) -> Result<Vec<CutRecord>, FireSimError> {
    if !baseline.contains(x, y) {
        return Err(FireSimError::invalid_origin(
            x,
            y,
            baseline.width(),
            baseline.height(),
        ));
    }

    let mut records = Vec::with_capacity(max_cuts.min(baseline.count(TerrainCategory::Tree)));
    for step in 0..max_cuts {
        match best_single_cut(baseline, x, y)? {
            Some(record) => records.push(record),
            None => {
                debug!("Cut search exhausted after {} of {} cuts", step, max_cuts);
                break;
            }
        }
    }

    if let (Some(first), Some(last)) = (records.first(), records.last()) {
        info!(
            "Applied {} preventive cuts from ({}, {}): {} -> {} cells burned",
            records.len(),
            x,
            y,
            first.burned_before,
            last.burned_after
        );
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(text: &str) -> TerrainGrid {
        text.parse().unwrap()
    }

    #[test]
    fn test_single_cut_on_small_cluster() {
        let mut baseline = grid(".T..\nTT..\n....\n.T..");
        let record = best_single_cut(&mut baseline, 0, 1).unwrap().unwrap();
        assert_eq!(
            record,
            CutRecord {
                x: 1,
                y: 0,
                burned_before: 3,
                burned_after: 2,
            }
        );
        assert_eq!(record.reduction(), 1);
        assert_eq!(baseline.get(1, 0).unwrap(), TerrainCategory::Empty);
        // Only the cut cell changed; the baseline never burns
        assert_eq!(baseline.count(TerrainCategory::Burnt), 0);
        assert_eq!(baseline.count(TerrainCategory::Tree), 3);
    }

    #[test]
    fn test_first_equal_cut_wins() {
        let mut baseline = grid("TTT");
        let record = best_single_cut(&mut baseline, 1, 0).unwrap().unwrap();
        assert_eq!((record.x, record.y), (0, 0));
        assert_eq!(record.burned_after, 2);
    }

    #[test]
    fn test_cut_splits_a_line() {
        let mut baseline = grid("TTTTT");
        let record = best_single_cut(&mut baseline, 0, 0).unwrap().unwrap();
        assert_eq!(record.coord(), Coord::new(1, 0));
        assert_eq!((record.burned_before, record.burned_after), (5, 1));
    }

    #[test]
    fn test_origin_is_never_cut() {
        let mut baseline = grid("T.\n..");
        assert_eq!(best_single_cut(&mut baseline, 0, 0).unwrap(), None);
        assert_eq!(baseline.get(0, 0).unwrap(), TerrainCategory::Tree);
    }

    #[test]
    fn test_no_trees_means_no_cut() {
        let mut baseline = grid("..W\nW..");
        let before = baseline.clone();
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(best_single_cut(&mut baseline, x, y).unwrap(), None);
            }
        }
        assert_eq!(baseline, before);
    }

    #[test]
    fn test_invalid_origin() {
        let mut baseline = grid("TT");
        assert!(matches!(
            best_single_cut(&mut baseline, 5, 0),
            Err(FireSimError::InvalidOrigin { .. })
        ));
        assert!(matches!(
            best_n_cuts(&mut baseline, 0, 3, 2),
            Err(FireSimError::InvalidOrigin { .. })
        ));
    }

    #[test]
    fn test_evaluate_cut_does_not_touch_baseline() {
        let baseline = grid("TTT\nTTT");
        assert_eq!(
            evaluate_cut(&baseline, Coord::new(0, 0), Coord::new(2, 1)).unwrap(),
            5
        );
        assert_eq!(baseline.count(TerrainCategory::Tree), 6);
        assert!(matches!(
            evaluate_cut(&baseline, Coord::new(0, 0), Coord::new(3, 0)),
            Err(FireSimError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_n_cuts_stops_when_nothing_helps() {
        let mut baseline = grid(".T..\nTT..\n....\n.T..");
        let records = best_n_cuts(&mut baseline, 0, 1, 3).unwrap();
        assert_eq!(
            records,
            vec![
                CutRecord {
                    x: 1,
                    y: 0,
                    burned_before: 3,
                    burned_after: 2,
                },
                CutRecord {
                    x: 1,
                    y: 1,
                    burned_before: 2,
                    burned_after: 1,
                },
            ]
        );
        assert_eq!(baseline.count(TerrainCategory::Tree), 2);
    }

    #[test]
    fn test_zero_cuts_is_empty() {
        let mut baseline = grid("TTTTT");
        assert!(best_n_cuts(&mut baseline, 0, 0, 0).unwrap().is_empty());
        assert_eq!(baseline.count(TerrainCategory::Tree), 5);
    }

    #[test]
    fn test_reduction_never_underflows() {
        let record = CutRecord {
            x: 0,
            y: 0,
            burned_before: 1,
            burned_after: 2,
        };
        assert_eq!(record.reduction(), 0);
    }

    #[test]
    fn test_record_display() {
        let record = CutRecord {
            x: 2,
            y: 3,
            burned_before: 10,
            burned_after: 4,
        };
        assert_eq!(record.to_string(), "cut (2, 3): 10 -> 4 cells burned");
    }
}
