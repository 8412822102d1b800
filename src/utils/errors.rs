use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum SchedulingError {
    UnknownPolicy(String),
    MalformedRecord { line: u64, reason: String },
    InvalidJob { name: String, reason: String },
    DuplicateJob(String),
    EmptyJobSet,
    InvalidQuantum,
}

impl fmt::Display for SchedulingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchedulingError::UnknownPolicy(name) => {
                write!(f, "Unknown scheduling algorithm: {}", name)
            }
            SchedulingError::MalformedRecord { line, reason } => {
                write!(f, "malformed job record on line {}: {}", line, reason)
            }
            SchedulingError::InvalidJob { name, reason } => {
                write!(f, "invalid job '{}': {}", name, reason)
            }
            SchedulingError::DuplicateJob(name) => write!(f, "job '{}' is listed twice", name),
            SchedulingError::EmptyJobSet => write!(f, "the job file contains no jobs"),
            SchedulingError::InvalidQuantum => write!(f, "quantum must be at least 1"),
        }
    }
}

impl Error for SchedulingError {}
