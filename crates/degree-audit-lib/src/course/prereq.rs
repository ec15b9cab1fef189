//! Prerequisite and corequisite expressions.
//!
//! An expression is an `and`/`or` tree whose leaves are courses. Evaluating one against a
//! [`CourseTakenTracker`] gives `None` when satisfied, or a short description of what is missing.

use serde::{Serialize, Deserialize};

use super::{CourseCode, CourseRef, CourseTakenTracker};

/// Rendered in place of a nested expression when an `or` fails.
const NESTED_PLACEHOLDER: &str = "{Object}";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PrereqExpr {
	/// Every value must be taken.
	And { values: Vec<PrereqItem> },
	/// At least one value must be taken.
	Or { values: Vec<PrereqItem> },
}

/// A single value inside a [`PrereqExpr`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrereqItem {
	/* Must come first, a course has no `type` field so it only matches the second variant */
	Expr(PrereqExpr),
	Course(CourseRef),
}

impl From<CourseRef> for PrereqItem {
	fn from(c: CourseRef) -> Self {
		PrereqItem::Course(c)
	}
}

impl From<PrereqExpr> for PrereqItem {
	fn from(e: PrereqExpr) -> Self {
		PrereqItem::Expr(e)
	}
}

impl PrereqExpr {
	pub fn and(values: impl IntoIterator<Item = PrereqItem>) -> Self {
		PrereqExpr::And { values: values.into_iter().collect() }
	}

	pub fn or(values: impl IntoIterator<Item = PrereqItem>) -> Self {
		PrereqExpr::Or { values: values.into_iter().collect() }
	}
}

/// Checks `prereq` against the tracker.
///
/// # Returns
/// - `None` when the expression is satisfied.
/// - The description of the first unmet branch otherwise.
pub fn does_prereq_exist(prereq: &PrereqExpr, tracker: &CourseTakenTracker) -> Option<String> {
	match prereq {
		PrereqExpr::And { values } => does_and_prereq_exist(values, tracker),
		PrereqExpr::Or { values } => does_or_prereq_exist(values, tracker),
	}
}

/// Stops at the first missing value and only reports that one.
fn does_and_prereq_exist(values: &[PrereqItem], tracker: &CourseTakenTracker) -> Option<String> {
	for item in values {
		match item {
			PrereqItem::Expr(nested) => {
				if let Some(missing) = does_prereq_exist(nested, tracker) {
					return Some(format!("AND: {{{}}}", missing));
				}
			},
			PrereqItem::Course(course) => {
				let code = course.course_code();
				if !tracker.contains(&code) {
					return Some(format!("AND: {}", code));
				}
			},
		}
	}
	None
}

/// Reports every value on failure, nested expressions are not expanded.
fn does_or_prereq_exist(values: &[PrereqItem], tracker: &CourseTakenTracker) -> Option<String> {
	let any_exists = values.iter().any(|item| match item {
		PrereqItem::Expr(nested) => does_prereq_exist(nested, tracker).is_none(),
		PrereqItem::Course(course) => tracker.contains(&course.course_code()),
	});
	if any_exists {
		return None;
	}

	let listed = values.iter()
		.map(|item| match item {
			PrereqItem::Expr(_) => NESTED_PLACEHOLDER.to_string(),
			PrereqItem::Course(course) => course.course_code(),
		})
		.collect::<Vec<_>>();
	Some(format!("OR: {}", listed.join(",")))
}
