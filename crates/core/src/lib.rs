//! Forest Fire Core Library
//!
//! Deterministic fire spread over a terrain grid, and a greedy search for
//! preventive tree cuts that shrink the area a fire ultimately burns.
//!
//! ## Overview
//!
//! - [`TerrainGrid`] stores one [`TerrainCategory`] per cell with 8-connected
//!   (Moore) adjacency.
//! - [`simulate_fire`] burns every tree reachable from an origin, breadth first.
//! - [`best_single_cut`] / [`best_n_cuts`] try every removable tree against a
//!   copy of the baseline and commit the most effective cut.
//! - [`FireScenario`] keeps the baseline and the burnt working copy apart.
//!
//! Grid generation and console/HTML rendering are thin consumers of the above.

// Core types and utilities
pub mod core_types;
pub mod error;

pub mod grid;
pub mod optimizer;
pub mod render;
pub mod simulation;

// Re-export core types
pub use core_types::{Coord, TerrainCategory, MOORE_OFFSETS};
pub use error::FireSimError;

pub use grid::{generate, CategoryCounts, GeneratorConfig, TerrainGrid};
pub use optimizer::{best_n_cuts, best_single_cut, evaluate_cut, CutRecord};
pub use render::{render_console, render_html};
pub use simulation::{burn_sequence, simulate_fire, FireScenario};
