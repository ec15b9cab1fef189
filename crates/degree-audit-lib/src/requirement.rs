//! Degree requirements of a major and the greedy check of a schedule against them.
//!
//! A [`Major`] declares an ordered list of named [`MajorRequirementGroup`]s.
//! [`produce_requirement_group_warnings()`] walks the groups in that order,
//! claiming courses from the schedule as it goes so a course matched by a range
//! in one group can't be matched again by a later group.
//!
//! # Known limitations
//! Corequisite labs usually carry zero credits on a schedule. Once the credits of a
//! lecture alone reach a group's threshold the remaining requirements in the list are
//! not looked at, so a missing zero-credit lab is not reported.

use std::collections::HashMap;
use serde::{Serialize, Deserialize};

use crate::course::*;

mod taken_courses;
pub(crate) use taken_courses::TakenCourses;

mod group_warnings;
pub use group_warnings::*;

/// A requirement inside a requirement group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum Requirement {
	/// Every requirement in the list must be met.
	And { courses: Vec<Requirement> },
	/// Any requirement in the list can be met.
	Or { courses: Vec<Requirement> },
	/// Credits from any course inside the subject ranges.
	Range(CourseRange),
	/// A single required course.
	Course(CourseRef),
}

impl Requirement {
	pub fn course(subject: impl Into<String>, class_id: impl Into<String>) -> Self {
		Requirement::Course(CourseRef::new(subject, class_id))
	}
}

/// An inclusive span of class ids within one subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectRange {
	pub subject: String,
	pub id_range_start: u32,
	pub id_range_end: u32,
}

impl SubjectRange {
	pub fn new(subject: impl Into<String>, id_range_start: u32, id_range_end: u32) -> Self {
		Self { subject: subject.into(), id_range_start, id_range_end }
	}

	pub fn contains(&self, course: &impl CourseCode) -> bool {
		if course.subject() != self.subject {
			return false
		}
		course.numeric_id()
			.map(|id| self.id_range_start <= id && id <= self.id_range_end)
			.unwrap_or(false)
	}
}

impl std::fmt::Display for SubjectRange {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{} {}-{}", self.subject, self.id_range_start, self.id_range_end)
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRange {
	pub credits_required: u32,
	pub ranges: Vec<SubjectRange>,
	/// Courses inside the ranges that still don't count.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub exceptions: Vec<CourseRef>,
}

impl CourseRange {
	/// Whether the course is inside one of the ranges and not an exception.
	pub fn matches(&self, course: &impl CourseCode) -> bool {
		self.ranges.iter().any(|r| r.contains(course))
			&& !self.exceptions.iter().any(|e| e.subject == course.subject() && e.class_id == course.class_id())
	}

	/// The ranges as displayed in messages, e.g. `CS 2500-5000 DS 2000-4999`
	pub fn describe_ranges(&self) -> String {
		self.ranges.iter().map(|r| r.to_string()).collect::<Vec<_>>().join(" ")
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AndSection {
	pub name: String,
	pub requirements: Vec<Requirement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrSection {
	pub name: String,
	pub num_credits_min: u32,
	#[serde(default)]
	pub num_credits_max: u32,
	pub requirements: Vec<Requirement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeSection {
	pub name: String,
	pub num_credits_min: u32,
	#[serde(default)]
	pub num_credits_max: u32,
	pub requirements: CourseRange,
}

/// A named, top level requirement of a major.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum MajorRequirementGroup {
	/// All requirements must be met, credits don't matter.
	And(AndSection),
	/// Requirements are taken in order until `num_credits_min` credits are met.
	Or(OrSection),
	/// `num_credits_min` credits from a single course range.
	Range(RangeSection),
}

impl MajorRequirementGroup {
	pub fn name(&self) -> &str {
		match self {
			MajorRequirementGroup::And(s) => &s.name,
			MajorRequirementGroup::Or(s) => &s.name,
			MajorRequirementGroup::Range(s) => &s.name,
		}
	}
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Major {
	#[serde(default)]
	pub name: String,
	/// Group names in the order they are evaluated.
	pub requirement_groups: Vec<String>,
	pub requirement_group_map: HashMap<String, MajorRequirementGroup>,
}

impl Major {
	pub fn load_from_path(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
		let data = std::fs::read_to_string(path.as_ref())?;
		let major = serde_json::from_str(&data)?;
		log::debug!("Loaded major from {}", path.as_ref().display());
		Ok(major)
	}

	/// Appends a group to the evaluation order, replacing any group with the same name.
	pub fn add_group(&mut self, group: MajorRequirementGroup) {
		let name = group.name().to_string();
		if !self.requirement_groups.contains(&name) {
			self.requirement_groups.push(name.clone());
		}
		self.requirement_group_map.insert(name, group);
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test] fn range_display() { assert_eq!(SubjectRange::new("CS", 2500, 5000).to_string(), "CS 2500-5000") }
	#[test] fn range_is_inclusive() { assert!(SubjectRange::new("CS", 2500, 5000).contains(&CourseRef::new("CS", "5000"))) }
	#[test] fn range_checks_subject() { assert!(!SubjectRange::new("CS", 2500, 5000).contains(&CourseRef::new("DS", "3000"))) }

	#[test]
	fn exceptions_are_excluded() {
		let r = CourseRange {
			credits_required: 4,
			ranges: vec![SubjectRange::new("CS", 2500, 5000)],
			exceptions: vec![CourseRef::new("CS", "4950")],
		};
		assert!(r.matches(&CourseRef::new("CS", "4500")));
		assert!(!r.matches(&CourseRef::new("CS", "4950")));
	}

	#[test]
	fn unknown_requirement_type_fails_to_parse() {
		let r = serde_json::from_str::<Requirement>(r#"{ "type": "MAYBE", "courses": [] }"#);
		assert!(r.is_err());
	}

	#[test]
	fn deserializes_group_json() {
		let g: MajorRequirementGroup = serde_json::from_str(r#"{
			"type": "OR",
			"name": "Capstone",
			"numCreditsMin": 4,
			"numCreditsMax": 4,
			"requirements": [
				{ "type": "COURSE", "subject": "CS", "classId": 4100 },
				{ "type": "AND", "courses": [
					{ "type": "COURSE", "subject": "CS", "classId": "4500" },
					{ "type": "RANGE", "creditsRequired": 4, "ranges": [ { "subject": "CS", "idRangeStart": 2500, "idRangeEnd": 5000 } ] }
				] }
			]
		}"#).expect("failed to parse group");
		assert_eq!(g.name(), "Capstone");
		if let MajorRequirementGroup::Or(s) = g {
			assert_eq!(s.requirements[0], Requirement::course("CS", "4100"));
		} else {
			panic!("wrong group kind");
		}
	}
}
