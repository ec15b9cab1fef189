use serde::{Serialize, Deserialize};

use super::*;
use crate::config::AuditOptions;
use crate::schedule::{Schedule, ScheduledCourse};

/// A major described as sections of [`Requirement2`] trees.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Major2 {
	#[serde(default)]
	pub name: String,
	pub requirement_sections: Vec<Section>,
	pub total_credits_required: u32,
}

impl Major2 {
	pub fn load_from_path(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
		let data = std::fs::read_to_string(path.as_ref())?;
		let major = serde_json::from_str(&data)?;
		log::debug!("Loaded major from {}", path.as_ref().display());
		Ok(major)
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionResult {
	pub title: String,
	/// Solutions for the section on its own, zero means it can't be satisfied.
	pub solution_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalCreditsShortfall {
	pub message: String,
	pub taken_credits: u32,
	pub required_credits: u32,
}

/// Outcome of checking a schedule against a [`Major2`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Major2Validation {
	pub sections: Vec<SectionResult>,
	/// Ways to satisfy every section at once without reusing a course between sections.
	pub solutions: Vec<Solution>,
	pub total_credits: Option<TotalCreditsShortfall>,
}

impl Major2Validation {
	pub fn is_satisfied(&self) -> bool {
		!self.solutions.is_empty() && self.total_credits.is_none()
	}

	pub fn unsatisfied_sections(&self) -> Vec<&str> {
		self.sections.iter()
			.filter(|s| s.solution_count == 0)
			.map(|s| s.title.as_str())
			.collect()
	}
}

/// Compares the summed maximum credits of the taken courses with the credits the major requires.
pub fn validate_total_credits_required<'a>(required_credits: u32, taken: impl IntoIterator<Item = &'a ScheduledCourse>) -> Option<TotalCreditsShortfall> {
	let taken_credits: u32 = taken.into_iter().map(|c| c.num_credits_max).sum();

	if taken_credits < required_credits {
		Some(TotalCreditsShortfall {
			message: format!("Total credits taken {} does not meet number of required credits {}", taken_credits, required_credits),
			taken_credits,
			required_credits,
		})
	} else {
		None
	}
}

/// Checks the taken courses against every section of the major.
///
/// Each section is solved on its own first, then the sections are combined as if they were
/// children of a single AND so no course counts towards two sections.
/// # Errors
/// - Any error from [`RequirementSolver::solve()`].
pub fn validate_major2<'a>(major: &Major2, taken: impl IntoIterator<Item = &'a ScheduledCourse>, options: &AuditOptions) -> crate::Result<Major2Validation> {
	let taken = taken.into_iter().collect::<Vec<_>>();
	let tracker = ScheduleTracker::new(taken.iter().copied());
	let solver = RequirementSolver::new(&tracker, options);

	let mut sections = Vec::<SectionResult>::with_capacity(major.requirement_sections.len());
	let mut section_solutions = Vec::<Vec<Solution>>::with_capacity(major.requirement_sections.len());
	for section in &major.requirement_sections {
		let solutions = solver.solve_section(section)?;
		log::debug!("Section `{}` has {} solution(s)", section.title, solutions.len());
		sections.push(SectionResult {
			title: section.title.clone(),
			solution_count: solutions.len(),
		});
		section_solutions.push(solutions);
	}

	let solutions = solver.combine_all(section_solutions)?;
	let total_credits = validate_total_credits_required(major.total_credits_required, taken.iter().copied());

	Ok(Major2Validation {
		sections,
		solutions,
		total_credits,
	})
}

/// [`validate_major2()`] with every course on the schedule.
pub fn validate_major2_schedule(major: &Major2, schedule: &Schedule, options: &AuditOptions) -> crate::Result<Major2Validation> {
	validate_major2(major, schedule.all_courses()?, options)
}
