use std::fs;

use anyhow::{bail, Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use csv::ReaderBuilder;
use log::{info, warn};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

use cpusched::constants::{DEFAULT_JOB_FILE, FEEDBACK_LEVELS};
use cpusched::core::{report, simulation};
use cpusched::{parse_selection, Job, JobSet, SchedulingError, SimulationConfig, TimeStep};

/// Reads a job file and returns the sorted `JobSet`.
///
/// The first non-blank line is a header and is skipped. Every other non-blank
/// line holds `name arrival service`, separated by any run of whitespace.
pub fn read_job_file(file_path: &str) -> Result<JobSet> {
    let content = fs::read_to_string(file_path)
        .with_context(|| format!("Can not open the file {}", file_path))?;
    let jobs = parse_jobs(&content).with_context(|| format!("Can not read jobs from {}", file_path))?;
    Ok(jobs)
}

pub fn parse_jobs(content: &str) -> Result<JobSet> {
    // csv needs a single delimiter, so whitespace runs become tabs
    let mut line_numbers = Vec::new();
    let mut normalized = String::new();
    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        line_numbers.push(index as u64 + 1);
        normalized.push_str(&line.split_whitespace().collect::<Vec<_>>().join("\t"));
        normalized.push('\n');
    }

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .delimiter(b'\t')
        .from_reader(normalized.as_bytes());
    let mut jobs = Vec::new();

    for result in rdr.records() {
        let record = result?;
        let line = record
            .position()
            .and_then(|pos| (pos.line() as usize).checked_sub(1))
            .and_then(|index| line_numbers.get(index).copied())
            .unwrap_or(0);

        if record.len() != 3 {
            return Err(SchedulingError::MalformedRecord {
                line,
                reason: format!("expected 'name arrival service', found {} fields", record.len()),
            }
            .into());
        }

        let arrival_time = parse_time(&record[1], "arrival time", line)?;
        let service_time = parse_time(&record[2], "service time", line)?;
        jobs.push(Job::new(&record[0], arrival_time, service_time));
    }

    if jobs.is_empty() {
        return Err(SchedulingError::EmptyJobSet.into());
    }

    Ok(JobSet::new(jobs)?)
}

fn parse_time(field: &str, what: &str, line: u64) -> Result<TimeStep, SchedulingError> {
    field
        .parse::<TimeStep>()
        .map_err(|e| SchedulingError::MalformedRecord {
            line,
            reason: format!("{} '{}': {}", what, field, e),
        })
}

pub fn build_cli_command() -> Command {
    Command::new("cpusched")
        .version("0.1.0")
        .about("Simulates classical CPU scheduling disciplines over a job file")

        .arg(Arg::new("policy")
            .required(true)
            .help("Scheduling algorithm: FCFS, RR, SPN, SRT, HRRN, FB or ALL"))

        .arg(Arg::new("file")
            .short('f')
            .long("file")
            .default_value(DEFAULT_JOB_FILE)
            .help("Path to the job file"))

        .arg(Arg::new("quantum")
            .short('q')
            .long("quantum")
            .value_parser(value_parser!(u64).range(1..))
            .default_value("1")
            .help("Time slice for RR"))

        .arg(Arg::new("fb_quanta")
            .long("fb-quanta")
            .value_parser(value_parser!(u64).range(1..))
            .value_delimiter(',')
            .default_values(["1", "1", "1"])
            .help("Time slices for the three FB levels, comma separated"))

        .arg(Arg::new("stats")
            .short('s')
            .long("stats")
            .action(ArgAction::SetTrue)
            .help("Print finish and turnaround times after each timeline"))

        .arg(Arg::new("verbose")
            .short('v')
            .long("verbose")
            .action(ArgAction::Count)
            .help("Log more details to stderr (-v, -vv, -vvv)"))
}

/// Builds the simulation quanta from the parsed arguments.
pub fn read_config(matches: &ArgMatches) -> Result<SimulationConfig> {
    let rr_quantum = matches.get_one::<u64>("quantum").copied().unwrap_or(1) as TimeStep;

    let fb_quanta: Vec<TimeStep> = matches
        .get_many::<u64>("fb_quanta")
        .map(|values| values.map(|q| *q as TimeStep).collect())
        .unwrap_or_default();
    let fb_quanta: [TimeStep; FEEDBACK_LEVELS] = match fb_quanta.try_into() {
        Ok(quanta) => quanta,
        Err(values) => bail!(
            "--fb-quanta expects {} values, got {:?}",
            FEEDBACK_LEVELS,
            values
        ),
    };

    Ok(SimulationConfig::new(rr_quantum, fb_quanta)?)
}

fn init_logger(verbose: u8) -> Result<()> {
    let llv = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let mut lcfg = ConfigBuilder::new();
    lcfg.set_time_level(LevelFilter::Error)
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off);
    TermLogger::init(llv, lcfg.build(), TerminalMode::Stderr, ColorChoice::Auto)?;
    Ok(())
}

fn main() -> Result<()> {
    // cargo run -- <FCFS|RR|SPN|SRT|HRRN|FB|ALL> [-f jobs.txt] [-q 1] [--fb-quanta 1,1,1] [-s] [-v]
    let matches = build_cli_command().get_matches();
    init_logger(matches.get_count("verbose"))?;

    let selector = matches
        .get_one::<String>("policy")
        .context("missing scheduling algorithm")?;
    let policies = match parse_selection(selector) {
        Ok(policies) => policies,
        Err(e) => {
            warn!("Nothing simulated: {}", e);
            println!("{}", e);
            return Ok(());
        }
    };

    let config = read_config(&matches)?;
    let job_file = matches
        .get_one::<String>("file")
        .map(String::as_str)
        .unwrap_or(DEFAULT_JOB_FILE);
    let jobs = read_job_file(job_file)?;
    info!("Loaded {} jobs from {} ({:?})", jobs.len(), job_file, config);

    let with_stats = matches.get_flag("stats");
    for policy in policies {
        let intervals = simulation(policy, &jobs, &config);
        print!("{}", report(policy, &jobs, &intervals, with_stats));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> String {
        std::env::temp_dir()
            .join(format!("cpusched_{}_{}", std::process::id(), name))
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn test_read_job_file_valid() {
        let job_file_content = "\n\
            Process Arrival time Service (Burst) Time\n\
            C\t4\t4\n\
            A\t0\t3 \n\
            \n\
            B   2  6\n";
        let file_path = temp_path("valid.txt");

        std::fs::write(&file_path, job_file_content).expect("Unable to write test file");

        let jobset = read_job_file(&file_path).expect("Failed to read job set");
        let names: Vec<&str> = jobset.iter().map(|job| job.name()).collect();

        assert_eq!(jobset.len(), 3);
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(jobset.get_job(1).unwrap().arrival_time(), 2);
        assert_eq!(jobset.get_job(1).unwrap().service_time(), 6);

        std::fs::remove_file(&file_path).expect("Failed to clean up test file");
    }

    #[test]
    fn test_read_job_file_missing() {
        let result = read_job_file(&temp_path("does_not_exist.txt"));
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_jobs_invalid_format() {
        let result = parse_jobs("Process Arrival Service\nA 0\n");
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SchedulingError>(),
            Some(SchedulingError::MalformedRecord { line: 2, .. })
        ));

        assert!(parse_jobs("Process Arrival Service\nA x 3\n").is_err());
        assert!(parse_jobs("Process Arrival Service\nA 0 0\n").is_err());
    }

    #[test]
    fn test_parse_jobs_header_only() {
        let err = parse_jobs("Process Arrival Service\n").unwrap_err();
        assert_eq!(
            err.downcast_ref::<SchedulingError>(),
            Some(&SchedulingError::EmptyJobSet)
        );
    }

    #[test]
    fn test_command_line_arguments() {
        let matches = build_cli_command().try_get_matches_from(vec![
            "cpusched",
            "ALL",
            "-f",
            "tasks.txt",
            "-q",
            "2",
            "--fb-quanta",
            "1,2,4",
            "-s",
            "-vv",
        ]);

        assert!(matches.is_ok());
        let matches = matches.unwrap();

        assert_eq!(matches.get_one::<String>("policy").unwrap(), "ALL");
        assert_eq!(matches.get_one::<String>("file").unwrap(), "tasks.txt");
        assert!(matches.get_flag("stats"));
        assert_eq!(matches.get_count("verbose"), 2);

        let config = read_config(&matches).unwrap();
        assert_eq!(config.rr_quantum(), 2);
        assert_eq!(config.fb_quanta(), [1, 2, 4]);
    }

    #[test]
    fn test_command_line_defaults() {
        let matches = build_cli_command()
            .try_get_matches_from(vec!["cpusched", "FCFS"])
            .unwrap();

        assert_eq!(matches.get_one::<String>("file").unwrap(), DEFAULT_JOB_FILE);
        assert!(!matches.get_flag("stats"));
        assert_eq!(read_config(&matches).unwrap(), SimulationConfig::default());
    }

    #[test]
    fn test_command_line_rejects_bad_quanta() {
        let zero = build_cli_command().try_get_matches_from(vec!["cpusched", "RR", "-q", "0"]);
        assert!(zero.is_err());

        let matches = build_cli_command()
            .try_get_matches_from(vec!["cpusched", "FB", "--fb-quanta", "1,2"])
            .unwrap();
        assert!(read_config(&matches).is_err());
    }
}
