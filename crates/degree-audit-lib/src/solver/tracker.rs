use std::collections::HashMap;

use crate::course::*;
use crate::schedule::ScheduledCourse;

/// Read only view of the courses a student has taken, as needed by the solver.
pub trait CourseValidationTracker {
	fn contains(&self, course: &CourseRef) -> bool;

	fn get(&self, course: &CourseRef) -> Option<&ScheduledCourse>;

	/// Every taken course of `subject` with a numeric class id between `start` and `end` inclusive.
	fn get_all(&self, subject: &str, start: u32, end: u32) -> Vec<&ScheduledCourse>;
}

/// [`CourseValidationTracker`] over a list of scheduled courses.
#[derive(Debug, Default)]
pub struct ScheduleTracker<'a> {
	taken: Vec<&'a ScheduledCourse>,
	current_courses: HashMap<String, &'a ScheduledCourse>,
}

impl<'a> ScheduleTracker<'a> {
	pub fn new(taken: impl IntoIterator<Item = &'a ScheduledCourse>) -> Self {
		let taken = taken.into_iter().collect::<Vec<_>>();
		/* Later entries of the same course win, as with a map built from the list */
		let current_courses = taken.iter().map(|c| (c.course_code(), *c)).collect();
		Self { taken, current_courses }
	}

	pub fn len(&self) -> usize {
		self.taken.len()
	}

	pub fn is_empty(&self) -> bool {
		self.taken.is_empty()
	}
}

impl<'a> CourseValidationTracker for ScheduleTracker<'a> {
	fn contains(&self, course: &CourseRef) -> bool {
		self.current_courses.contains_key(&course.course_code())
	}

	fn get(&self, course: &CourseRef) -> Option<&ScheduledCourse> {
		self.current_courses.get(&course.course_code()).copied()
	}

	fn get_all(&self, subject: &str, start: u32, end: u32) -> Vec<&ScheduledCourse> {
		self.taken.iter()
			.filter(|c| c.subject == subject)
			.filter(|c| c.numeric_id().map(|id| start <= id && id <= end).unwrap_or(false))
			.copied()
			.collect()
	}
}
