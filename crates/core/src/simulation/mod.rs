//! Fire spread engine and the baseline/working scenario built on it

pub mod scenario;
pub mod spread;

pub use scenario::FireScenario;
pub use spread::{burn_sequence, simulate_fire};
