use std::collections::HashSet;
use serde::{Serialize, Deserialize};

use crate::course::CourseCode;
use crate::schedule::ScheduledCourse;

/// A set of courses satisfying a requirement, with their summed credits.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
	pub min_credits: u32,
	pub max_credits: u32,
	/// Course codes, never repeated.
	pub sol: Vec<String>,
}

impl Solution {
	pub fn from_course(course: &ScheduledCourse) -> Self {
		Self {
			min_credits: course.num_credits_min,
			max_credits: course.num_credits_max,
			sol: vec![course.course_code()],
		}
	}

	pub fn contains(&self, course_code: &str) -> bool {
		self.sol.iter().any(|c| c == course_code)
	}

	/// Whether the two solutions share no course.
	pub fn is_disjoint(&self, other: &Solution) -> bool {
		let (small, large) = if self.sol.len() < other.sol.len() { (self, other) } else { (other, self) };
		let courses = large.sol.iter().map(String::as_str).collect::<HashSet<_>>();
		!small.sol.iter().any(|c| courses.contains(c.as_str()))
	}

	/// Joins two solutions. Callers must check [`Solution::is_disjoint()`] first.
	pub fn combine(&self, other: &Solution) -> Solution {
		debug_assert!(self.is_disjoint(other), "combining solutions that share courses");
		Solution {
			min_credits: self.min_credits + other.min_credits,
			max_credits: self.max_credits + other.max_credits,
			sol: self.sol.iter().chain(other.sol.iter()).cloned().collect(),
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn sol(courses: &[&str], credits: u32) -> Solution {
		Solution { min_credits: credits, max_credits: credits, sol: courses.iter().map(|c| c.to_string()).collect() }
	}

	#[test] fn empty_is_disjoint() { assert!(Solution::default().is_disjoint(&sol(&["CS2500"], 4))) }
	#[test] fn shared_course_is_not_disjoint() { assert!(!sol(&["CS2500", "CS2510"], 8).is_disjoint(&sol(&["CS2510"], 4))) }

	#[test]
	fn combine_sums_credits_and_keeps_order() {
		let c = sol(&["CS2500"], 4).combine(&Solution { min_credits: 1, max_credits: 4, sol: vec!["CS1200".into()] });
		assert_eq!(c, Solution { min_credits: 5, max_credits: 8, sol: vec!["CS2500".into(), "CS1200".into()] });
	}
}
