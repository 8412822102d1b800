pub mod constants;
pub mod errors;
pub mod stats;
pub mod timeline;

pub use constants::{parse_selection, Policy, SimulationConfig};
pub use errors::SchedulingError;
pub use stats::Summary;
