use std::collections::HashMap;

use crate::course::CourseCode;
use crate::schedule::ScheduledCourse;

/// A course from the schedule reduced to what requirements care about.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TakenCourse {
	pub subject: String,
	pub class_id: String,
	/// The course's minimum credits.
	pub credits: u32,
}

impl CourseCode for TakenCourse {
	fn subject(&self) -> &str { &self.subject }
	fn class_id(&self) -> &str { &self.class_id }
}

/// Every course on a schedule keyed by course code, remembering insertion order.
///
/// Ranges claim courses in this order so it has to be stable between runs.
#[derive(Debug, Default)]
pub(crate) struct TakenCourses {
	order: Vec<String>,
	courses: HashMap<String, TakenCourse>,
}

impl TakenCourses {
	/// A course seen twice keeps its first position and the credits of the last occurrence.
	pub fn insert(&mut self, course: &ScheduledCourse) {
		let code = course.course_code();
		if !self.courses.contains_key(&code) {
			self.order.push(code.clone());
		}
		self.courses.insert(code, TakenCourse {
			subject: course.subject.clone(),
			class_id: course.class_id.clone(),
			credits: course.num_credits_min,
		});
	}

	pub fn get(&self, code: &str) -> Option<&TakenCourse> {
		self.courses.get(code)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&String, &TakenCourse)> {
		self.order.iter().filter_map(|code| self.courses.get(code).map(|c| (code, c)))
	}

	pub fn len(&self) -> usize {
		self.order.len()
	}
}

impl<'a> FromIterator<&'a ScheduledCourse> for TakenCourses {
	fn from_iter<T: IntoIterator<Item = &'a ScheduledCourse>>(iter: T) -> Self {
		let mut taken = TakenCourses::default();
		for course in iter {
			taken.insert(course);
		}
		taken
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn repeated_course_keeps_first_position() {
		let courses = [
			ScheduledCourse::new("CS", "2500", 4, 4),
			ScheduledCourse::new("CS", "2510", 4, 4),
			ScheduledCourse::new("CS", "2500", 2, 2),
		];
		let taken: TakenCourses = courses.iter().collect();
		assert_eq!(taken.len(), 2);
		assert_eq!(taken.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>(), vec!["CS2500", "CS2510"]);
		assert_eq!(taken.get("CS2500").map(|c| c.credits), Some(2));
	}
}
