pub mod core;
pub mod models;
pub mod utils;

pub use models::scheduler;
pub use models::{CompletedInterval, Job, JobSet, RuntimeJob, TimeStep};
pub use utils::{constants, errors, stats, timeline};
pub use utils::{parse_selection, Policy, SchedulingError, SimulationConfig, Summary};
