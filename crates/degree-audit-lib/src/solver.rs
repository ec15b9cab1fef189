//! Finds every combination of taken courses that satisfies a requirement tree.
//!
//! Unlike [`crate::requirement`], which greedily claims courses and reports a single message,
//! the solver returns *all* [`Solution`]s for a requirement. A solution never contains the
//! same course twice, children are only combined when their course sets are disjoint.
//!
//! # Usage
//! 1. Wrap the taken courses in a [`ScheduleTracker`] (or implement [`CourseValidationTracker`]).
//! 1. Create a [`RequirementSolver`] with the tracker and [`crate::AuditOptions`].
//! 1. [`RequirementSolver::solve()`] a [`Requirement2`], an empty result means it can't be satisfied.
//!
//! [`validate_major2()`] does all of this for a whole [`Major2`].
//!
//! The number of solutions grows quickly with wide ranges, [`crate::AuditOptions::max_solutions()`]
//! bounds how many a single requirement may hold before the solve is abandoned.

use serde::{Serialize, Deserialize};

use crate::course::*;

mod solution;
pub use solution::Solution;

mod tracker;
pub use tracker::{CourseValidationTracker, ScheduleTracker};

mod requirement_solver;
pub use requirement_solver::*;

mod major;
pub use major::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum Requirement2 {
	Course(CourseRef),
	Range(CourseRange2),
	/// Every child must be satisfied by separate courses.
	And { courses: Vec<Requirement2> },
	/// Any one child.
	Or { courses: Vec<Requirement2> },
	/// "X of many", credits drawn from any children.
	Xom(XomRequirement),
	/// A number of children, regardless of credits.
	Section(Section),
}

impl Requirement2 {
	pub fn course(subject: impl Into<String>, class_id: impl Into<String>) -> Self {
		Requirement2::Course(CourseRef::new(subject, class_id))
	}
}

/// Courses of one subject with class ids between the bounds inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRange2 {
	pub subject: String,
	pub id_range_start: u32,
	pub id_range_end: u32,
	pub credits_required: u32,
	#[serde(default)]
	pub exceptions: Vec<CourseRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XomRequirement {
	pub num_credits_min: u32,
	pub courses: Vec<Requirement2>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
	pub title: String,
	pub requirements: Vec<Requirement2>,
	/// How many children must be satisfied, at least 1.
	pub min_requirement_count: i64,
}
