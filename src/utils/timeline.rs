use crate::{CompletedInterval, JobSet, TimeStep};

/// Draws `intervals` as a vertical ASCII Gantt chart.
///
/// The first line lists the job names, one column per job in input order.
/// Each executed time unit is one line holding an `X` in its job's column,
/// and every idle time unit before a slice is an empty line.
pub fn render(intervals: &[CompletedInterval], jobs: &JobSet) -> String {
    let width = column_width(jobs);
    let mut out = String::new();

    for job in jobs {
        out.push_str(&format!("{:<width$}", job.name(), width = width));
    }
    out.push('\n');

    let mut current_time: TimeStep = 0;
    for interval in intervals {
        let offset_h = jobs.position(interval.name()).unwrap_or(0) * width;
        let offset_v = interval.start_time().saturating_sub(current_time);

        for _ in 0..offset_v {
            out.push('\n');
        }
        for _ in 0..interval.duration() {
            out.push_str(&" ".repeat(offset_h));
            out.push_str("X\n");
        }

        current_time = interval.end_time();
    }

    out
}

fn column_width(jobs: &JobSet) -> usize {
    jobs.iter()
        .map(|job| job.name().chars().count())
        .max()
        .unwrap_or(1)
        + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Job;

    #[test]
    fn test_render_offsets_and_idle_gap() {
        let jobs = JobSet::new(vec![Job::new("A", 0, 1), Job::new("B", 3, 2)]).unwrap();
        let intervals = vec![
            CompletedInterval::new("A", 0, 1),
            CompletedInterval::new("B", 3, 5),
        ];

        let chart = render(&intervals, &jobs);

        assert_eq!(chart, "A B \nX\n\n\n  X\n  X\n");
    }

    #[test]
    fn test_render_wide_names() {
        let jobs = JobSet::new(vec![Job::new("P1", 0, 1), Job::new("P10", 0, 1)]).unwrap();
        let intervals = vec![
            CompletedInterval::new("P1", 0, 1),
            CompletedInterval::new("P10", 1, 2),
        ];

        let chart = render(&intervals, &jobs);

        assert_eq!(chart, "P1  P10 \nX\n    X\n");
    }
}
