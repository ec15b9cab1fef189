//! Warnings about a schedule's terms: unmet prerequisites and corequisites and heavy course loads.
//!
//! # Usage
//! [`produce_warnings()`] walks the schedule term by term in chronological order.
//! Prerequisites are checked against every course from earlier terms,
//! corequisites and credit loads only against the term itself.
//! Warnings come back in the order the terms were processed.

use serde::{Serialize, Deserialize};

use crate::config::AuditOptions;
use crate::course::*;
use crate::schedule::*;

mod checks;
pub use checks::*;

/// A problem found in a single term.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warning {
	pub message: String,
	pub term_id: i64,
}

impl Warning {
	pub(crate) fn new(message: String, term_id: i64) -> Self {
		Self { message, term_id }
	}
}

/// Produces warnings for a schedule using the default thresholds.
pub fn produce_warnings(schedule: &Schedule) -> crate::Result<Vec<Warning>> {
	produce_warnings_with(schedule, &AuditOptions::default())
}

/// Produces warnings for a schedule.
/// # Errors
/// - If the schedule lists a year it doesn't define.
pub fn produce_warnings_with(schedule: &Schedule, options: &AuditOptions) -> crate::Result<Vec<Warning>> {
	let mut tracker = CourseTakenTracker::new();
	let mut warnings = Vec::<Warning>::new();

	for term in schedule.terms()? {
		let term_warnings = produce_all_warnings(term, &tracker, options);
		log::trace!("Term {} produced {} warning(s)", term.term_id, term_warnings.len());
		warnings.extend(term_warnings);

		/* Added after checking so a term's courses only count as prerequisites for later terms */
		tracker.add_courses(term.classes.iter().map(|c| c.course_code()));
	}

	log::debug!("Produced {} schedule warning(s) over {} course(s)", warnings.len(), tracker.len());
	Ok(warnings)
}

/// Runs every check on a single term.
///
/// `tracker` must contain only courses from earlier terms.
pub fn produce_all_warnings(term: &ScheduleTerm, tracker: &CourseTakenTracker, options: &AuditOptions) -> Vec<Warning> {
	let mut warnings = check_prerequisites(&term.classes, tracker, term.term_id);
	warnings.extend(check_corequisites(&term.classes, term.term_id));
	warnings.extend(check_semester_credits(&term.classes, term.term_id, options));
	warnings.extend(check_semester_overload(&term.classes, term.term_id, options));
	warnings
}
