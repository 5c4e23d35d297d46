//! Property checks for the grid and the spread engine over generated terrain

use ctor::ctor;
use forest_fire_core::{
    burn_sequence, generate, simulate_fire, Coord, FireScenario, FireSimError, GeneratorConfig,
    TerrainCategory, TerrainGrid,
};

#[ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A spread of terrain densities, all reproducible
fn sample_grids() -> Vec<TerrainGrid> {
    let mut grids = Vec::new();
    for (seed, (trees, water)) in [(0.3, 0.1), (0.6, 0.1), (0.8, 0.05), (0.5, 0.4)]
        .into_iter()
        .enumerate()
    {
        let config = GeneratorConfig::new(12, 9)
            .with_fractions(trees, water)
            .with_seed(seed as u64 + 100);
        grids.push(generate(&config).unwrap());
    }
    grids
}

#[test]
fn test_neighborhood_sizes_everywhere() {
    for (w, h) in [(1, 1), (1, 4), (2, 2), (7, 3)] {
        let grid = TerrainGrid::new(w, h).unwrap();
        for y in 0..h {
            for x in 0..w {
                let neighbors = grid.neighbors(x, y).unwrap();
                assert!(neighbors.len() <= 8);
                assert!(!neighbors.contains(&Coord::new(x, y)));
                assert!(neighbors.iter().all(|c| grid.contains(c.x, c.y)));
                // Adjacency is symmetric
                for n in &neighbors {
                    assert!(grid.neighbors(n.x, n.y).unwrap().contains(&Coord::new(x, y)));
                }
            }
        }
    }
}

#[test]
fn test_spread_is_bounded_by_tree_count() {
    for grid in sample_grids() {
        let trees = grid.count(TerrainCategory::Tree);
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let mut working = grid.clone();
                let burned = simulate_fire(&mut working, x, y).unwrap();
                assert!(burned <= trees);
                assert_eq!(working.count(TerrainCategory::Burnt), burned);
                assert_eq!(working.count(TerrainCategory::Tree), trees - burned);
                if grid.get(x, y).unwrap() == TerrainCategory::Tree {
                    assert!(burned >= 1);
                } else {
                    assert_eq!(burned, 0);
                    assert_eq!(working, grid);
                }
            }
        }
    }
}

#[test]
fn test_burnt_region_is_connected_to_origin() {
    for grid in sample_grids() {
        let Some(origin) = grid.tree_positions().next() else {
            continue;
        };
        let mut working = grid.clone();
        let order = burn_sequence(&mut working, origin.x, origin.y).unwrap();
        assert_eq!(order[0], origin);
        // Every later cell touches some cell that burnt before it
        for (i, cell) in order.iter().enumerate().skip(1) {
            let neighbors = grid.neighbors(cell.x, cell.y).unwrap();
            assert!(order[..i].iter().any(|earlier| neighbors.contains(earlier)));
        }
        // No surviving tree touches the burnt region
        for cell in &order {
            for n in working.neighbors(cell.x, cell.y).unwrap() {
                assert_ne!(working.get(n.x, n.y).unwrap(), TerrainCategory::Tree);
            }
        }
    }
}

#[test]
fn test_reset_reproduces_first_run() {
    for grid in sample_grids() {
        let mut scenario = FireScenario::new(grid);
        for origin in scenario.baseline().tree_positions().take(5).collect::<Vec<_>>() {
            scenario.reset();
            let first = scenario.ignite(origin.x, origin.y).unwrap();
            let first_state = scenario.working().clone();

            scenario.reset();
            assert_eq!(scenario.ignite(origin.x, origin.y).unwrap(), first);
            assert_eq!(scenario.working(), &first_state);
        }
    }
}

#[test]
fn test_out_of_bounds_origins_rejected() {
    let mut grid = generate(&GeneratorConfig::default().with_seed(9)).unwrap();
    let before = grid.clone();
    for (x, y) in [(-1, 0), (0, -1), (10, 0), (0, 8), (i32::MAX, i32::MIN)] {
        assert!(matches!(
            simulate_fire(&mut grid, x, y),
            Err(FireSimError::InvalidOrigin { .. })
        ));
    }
    assert_eq!(grid, before);
}

#[test]
fn test_worked_example() {
    let mut grid = TerrainGrid::new(4, 4).unwrap();
    for (x, y) in [(1, 0), (0, 1), (1, 1), (1, 3)] {
        grid.set(x, y, TerrainCategory::Tree).unwrap();
    }

    let mut working = grid.clone();
    let mut burnt = burn_sequence(&mut working, 1, 1).unwrap();
    burnt.sort();
    assert_eq!(
        burnt,
        vec![Coord::new(0, 1), Coord::new(1, 0), Coord::new(1, 1)]
    );
    assert_eq!(working.get(1, 3).unwrap(), TerrainCategory::Tree);

    let mut working = grid.clone();
    assert_eq!(simulate_fire(&mut working, 0, 0).unwrap(), 0);
    assert_eq!(working, grid);
}
