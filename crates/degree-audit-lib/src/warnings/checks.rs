//! The individual checks run on each term.

use super::*;

/// Checks each course's prerequisites against the courses taken in earlier terms.
pub fn check_prerequisites(to_check: &[ScheduledCourse], tracker: &CourseTakenTracker, term_id: i64) -> Vec<Warning> {
	to_check.iter()
		.filter_map(|course| {
			let missing = does_prereq_exist(course.prereqs.as_ref()?, tracker)?;
			Some(Warning::new(format!("{}: prereqs not satisfied: {}", course.course_code(), missing), term_id))
		})
		.collect()
}

/// Checks each course's corequisites against the other courses of the same term.
pub fn check_corequisites(to_check: &[ScheduledCourse], term_id: i64) -> Vec<Warning> {
	let mut coreq_tracker = CourseTakenTracker::new();
	coreq_tracker.add_courses(to_check.iter().map(|c| c.course_code()));

	to_check.iter()
		.filter_map(|course| {
			let missing = does_prereq_exist(course.coreqs.as_ref()?, &coreq_tracker)?;
			Some(Warning::new(format!("{}: coreqs not satisfied: {}", course.course_code(), missing), term_id))
		})
		.collect()
}

/// Warns when the summed maximum or minimum credits of a term reach [`AuditOptions::max_term_credits()`].
///
/// The two sums are checked independently so both warnings can be produced.
pub fn check_semester_credits(to_check: &[ScheduledCourse], term_id: i64, options: &AuditOptions) -> Vec<Warning> {
	let max_credits: u32 = to_check.iter().map(|c| c.num_credits_max).sum();
	let min_credits: u32 = to_check.iter().map(|c| c.num_credits_min).sum();

	let mut warnings = Vec::new();
	if max_credits >= options.max_term_credits() {
		warnings.push(Warning::new(format!("Enrolled in a max of {} credits. May be over-enrolled.", max_credits), term_id));
	}
	if min_credits >= options.max_term_credits() {
		warnings.push(Warning::new(format!("Enrolled in a min of {} credits. May be over-enrolled.", min_credits), term_id));
	}
	warnings
}

/// Warns when a term holds more than [`AuditOptions::max_four_credit_courses()`] heavy courses.
pub fn check_semester_overload(to_check: &[ScheduledCourse], term_id: i64, options: &AuditOptions) -> Vec<Warning> {
	let num_four_crediters = to_check.iter()
		.filter(|c| c.num_credits_min >= options.four_credit_threshold())
		.count();

	if num_four_crediters > options.max_four_credit_courses() {
		vec![Warning::new(format!("Overloaded: Enrolled in {} four-credit courses.", num_four_crediters), term_id)]
	} else {
		vec![]
	}
}
