use std::collections::HashSet;
use serde::{Serialize, Deserialize};

use super::*;
use crate::schedule::Schedule;

/// A requirement group the schedule doesn't satisfy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementGroupWarning {
	pub message: String,
	pub requirement_group: String,
}

/// Credits completed towards the top level group currently being evaluated.
#[derive(Debug, Default)]
struct CreditHourTracker {
	hours_completed: u32,
}

/// Names of the groups satisfied by the schedule, in the major's declared order.
pub fn produce_satisfied_requirement_groups(schedule: &Schedule, major: &Major) -> crate::Result<Vec<String>> {
	let unsatisfied = produce_requirement_group_warnings(schedule, major)?
		.into_iter()
		.map(|w| w.requirement_group)
		.collect::<HashSet<_>>();

	let mut seen = HashSet::<&String>::new();
	Ok(major.requirement_groups.iter()
		.filter(|name| !unsatisfied.contains(*name) && seen.insert(*name))
		.cloned()
		.collect())
}

/// Checks every requirement group of the major against the courses on the schedule.
///
/// Term order doesn't matter here, every course on the schedule is available.
/// # Errors
/// - [`crate::Error::MissingRequirementGroup`] if a listed group isn't in the group map.
/// - [`crate::Error::Validation`] if the schedule lists a year it doesn't define.
pub fn produce_requirement_group_warnings(schedule: &Schedule, major: &Major) -> crate::Result<Vec<RequirementGroupWarning>> {
	let taken: TakenCourses = schedule.all_courses()?.into_iter().collect();
	/* Shared by every group so courses claimed by one group stay claimed */
	let mut courses_used = HashSet::<String>::new();

	let mut warnings = Vec::<RequirementGroupWarning>::new();
	for name in &major.requirement_groups {
		let group = major.requirement_group_map.get(name)
			.ok_or_else(|| crate::Error::MissingRequirementGroup(name.clone()))?;

		/* XXX: Range groups can claim a course a more constrained group later needs, evaluating them last would avoid that */
		if let Some(warning) = produce_unsatisfied_requirement(group, &taken, &mut courses_used) {
			log::trace!("Requirement group `{}` not satisfied", name);
			warnings.push(warning);
		}
	}

	log::debug!(
		"{} of {} requirement group(s) unsatisfied, {} of {} course(s) used",
		warnings.len(), major.requirement_groups.len(), courses_used.len(), taken.len()
	);
	Ok(warnings)
}

fn produce_unsatisfied_requirement(group: &MajorRequirementGroup, taken: &TakenCourses, courses_used: &mut HashSet<String>) -> Option<RequirementGroupWarning> {
	let message = match group {
		MajorRequirementGroup::And(section) => process_and_section(section, taken, courses_used),
		MajorRequirementGroup::Or(section) => process_or_section(section, taken, courses_used),
		MajorRequirementGroup::Range(section) => process_range_section(section, taken, courses_used),
	}?;

	Some(RequirementGroupWarning {
		message,
		requirement_group: group.name().to_string(),
	})
}

fn process_and_section(section: &AndSection, taken: &TakenCourses, courses_used: &mut HashSet<String>) -> Option<String> {
	let mut satisfied = CreditHourTracker::default();
	let messages = section.requirements.iter()
		/* Zero because every requirement has to be met regardless of credits */
		.filter_map(|r| process_requirement(r, taken, &mut satisfied, courses_used, 0))
		.collect::<Vec<_>>();

	if messages.is_empty() {
		None
	} else {
		Some(format!("requirement not satisfied: {}", messages.join(" AND ")))
	}
}

fn process_or_section(section: &OrSection, taken: &TakenCourses, courses_used: &mut HashSet<String>) -> Option<String> {
	let mut satisfied = CreditHourTracker::default();
	let min_creds_required = section.num_credits_min;

	let mut messages = Vec::<String>::new();
	for requirement in &section.requirements {
		if let Some(m) = process_requirement(requirement, taken, &mut satisfied, courses_used, min_creds_required) {
			messages.push(m);
		}
		/* Enough credits, the remaining requirements aren't looked at */
		if satisfied.hours_completed >= min_creds_required {
			return None;
		}
	}

	if satisfied.hours_completed >= min_creds_required {
		return None;
	}
	Some(format!(
		"requirement not satisfied: need {} credits from: {}",
		min_creds_required - satisfied.hours_completed,
		messages.join(" OR ")
	))
}

fn process_range_section(section: &RangeSection, taken: &TakenCourses, courses_used: &mut HashSet<String>) -> Option<String> {
	let mut satisfied = CreditHourTracker::default();
	process_course_range(&section.requirements, taken, &mut satisfied, courses_used)
		.map(|m| format!("requirement not satisfied: {}", m))
}

/// Produces a message describing what is missing from `requirement`, `None` if it is met.
///
/// # Arguments
/// - `satisfied`: credits completed for the top level group.
/// - `courses_used`: courses already claimed by any group.
/// - `credit_hours_needed`: credits needed by the top level group, zero if credits don't matter.
fn process_requirement(
	requirement: &Requirement,
	taken: &TakenCourses,
	satisfied: &mut CreditHourTracker,
	courses_used: &mut HashSet<String>,
	credit_hours_needed: u32,
) -> Option<String> {
	match requirement {
		Requirement::And { courses } => {
			let messages = process_requirement_courses(courses, taken, satisfied, courses_used, credit_hours_needed);
			if messages.is_empty() {
				None
			} else {
				Some(format!("({})", messages.join(" and ")))
			}
		},
		Requirement::Or { courses } => {
			let messages = process_requirement_courses(courses, taken, satisfied, courses_used, credit_hours_needed);
			/* Only unsatisfied when nothing in the list was met */
			if messages.len() == courses.len() {
				Some(format!("({})", messages.join(" or ")))
			} else {
				None
			}
		},
		Requirement::Range(range) => process_course_range(range, taken, satisfied, courses_used),
		Requirement::Course(course) => {
			let code = course.course_code();
			match taken.get(&code) {
				Some(taken_course) => {
					satisfied.hours_completed += taken_course.credits;
					courses_used.insert(code);
					None
				},
				None => Some(code),
			}
		},
	}
}

/// Processes each requirement of a list, returning a message for every unmet one.
///
/// Stops early once the top level group has enough credits.
/* FIXME: Corequisites have zero credits on the schedule so a lecture alone can end the list before its lab is checked */
fn process_requirement_courses(
	requirements: &[Requirement],
	taken: &TakenCourses,
	satisfied: &mut CreditHourTracker,
	courses_used: &mut HashSet<String>,
	credit_hours_needed: u32,
) -> Vec<String> {
	let mut messages = Vec::<String>::new();
	for requirement in requirements {
		if let Some(m) = process_requirement(requirement, taken, satisfied, courses_used, credit_hours_needed) {
			messages.push(m);
		}
		if credit_hours_needed != 0 && satisfied.hours_completed >= credit_hours_needed {
			break;
		}
	}
	messages
}

/// Claims every unused course inside the range.
fn process_course_range(range: &CourseRange, taken: &TakenCourses, satisfied: &mut CreditHourTracker, courses_used: &mut HashSet<String>) -> Option<String> {
	let mut range_credits_completed = 0;

	for (code, course) in taken.iter() {
		if courses_used.contains(code) || !range.matches(course) {
			continue;
		}
		satisfied.hours_completed += course.credits;
		range_credits_completed += course.credits;
		courses_used.insert(code.clone());
	}

	if range_credits_completed >= range.credits_required {
		None
	} else {
		Some(format!(
			"(complete {} credits from {})",
			range.credits_required - range_credits_completed,
			range.describe_ranges()
		))
	}
}
