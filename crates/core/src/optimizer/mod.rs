//! Preventive cut optimization

pub mod preventive_cut;

pub use preventive_cut::{best_n_cuts, best_single_cut, evaluate_cut, CutRecord};
