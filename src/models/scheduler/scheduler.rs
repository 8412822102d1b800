use crate::{CompletedInterval, JobSet, Policy, SimulationConfig};

use super::{
    Feedback, FirstComeFirstServed, HighestResponseRatioNext, RoundRobin, ShortestProcessNext,
    ShortestRemainingTime,
};

/// A scheduling discipline simulated over a complete, known job set.
///
/// Implementations never mutate `jobs` and keep no state between runs,
/// so the same instance can be run any number of times.
pub trait Scheduler {
    fn policy(&self) -> Policy;

    /// Returns the execution intervals in the order they were produced.
    fn schedule(&self, jobs: &JobSet) -> Vec<CompletedInterval>;
}

/// Builds the scheduler for `policy` with the quanta from `config`.
pub fn scheduler_for(policy: Policy, config: &SimulationConfig) -> Box<dyn Scheduler> {
    match policy {
        Policy::FirstComeFirstServed => Box::new(FirstComeFirstServed),
        Policy::RoundRobin => Box::new(RoundRobin::new(config.rr_quantum())),
        Policy::ShortestProcessNext => Box::new(ShortestProcessNext),
        Policy::ShortestRemainingTime => Box::new(ShortestRemainingTime),
        Policy::HighestResponseRatioNext => Box::new(HighestResponseRatioNext),
        Policy::Feedback => Box::new(Feedback::new(config.fb_quanta())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::scheduler::testing::{assert_valid_schedule, five_jobs, sparse_jobs};
    use crate::{Job, SimulationConfig};

    #[test]
    fn test_scheduler_for_every_policy() {
        let config = SimulationConfig::default();
        for policy in Policy::ALL {
            assert_eq!(scheduler_for(policy, &config).policy(), policy);
        }
    }

    #[test]
    fn test_every_policy_is_valid() {
        let configs = [
            SimulationConfig::default(),
            SimulationConfig::new(3, [1, 2, 4]).unwrap(),
        ];
        for config in configs.iter() {
            for jobs in [five_jobs(), sparse_jobs()] {
                for policy in Policy::ALL {
                    let intervals = scheduler_for(policy, config).schedule(&jobs);
                    assert_valid_schedule(&jobs, &intervals);
                }
            }
        }
    }

    #[test]
    fn test_runs_do_not_share_state() {
        let jobs = five_jobs();
        let config = SimulationConfig::default();
        for policy in Policy::ALL {
            let scheduler = scheduler_for(policy, &config);
            assert_eq!(scheduler.schedule(&jobs), scheduler.schedule(&jobs));
        }
    }

    #[test]
    fn test_single_job_fcfs_agrees_with_spn() {
        let jobs = JobSet::new(vec![Job::new("A", 2, 5)]).unwrap();
        let fcfs = FirstComeFirstServed.schedule(&jobs);
        let spn = ShortestProcessNext.schedule(&jobs);

        assert_eq!(fcfs, spn);
        assert_eq!(fcfs.last().map(|i| i.end_time()), Some(7));
    }
}
