//! Library error type.

pub type Result<T> = std::result::Result<T, Error>;

use thiserror::Error;

/// Failures that abort an evaluation.
///
/// An unsatisfied requirement is never one of these, it is reported as a warning or an empty solution list.
#[derive(Debug, Error)]
pub enum Error {
	#[error("IO error: {0}")]
	IO(#[from] std::io::Error),
	#[error("JSON error: {0}")]
	SerdeJSON(#[from] serde_json::Error),
	#[error("validation error: {0}")]
	Validation(String),
	/// A major lists a group name that has no entry in its group map.
	#[error("requirement group `{0}` is listed but not defined")]
	MissingRequirementGroup(String),
	/// A section must require at least one of its children.
	#[error("section `{title}` requirement count must be >= 1, got {count}")]
	InvalidSectionCount { title: String, count: i64 },
	/// The solver retained more candidate solutions than the configured cap.
	#[error("solution limit of {0} exceeded")]
	SolutionLimitExceeded(usize),
}
