use std::collections::HashSet;

/// Set of course codes a student has taken, or is taking, at some point in a schedule.
///
/// Prerequisite and corequisite checks each own a separate tracker.
#[derive(Debug, Default, Clone)]
pub struct CourseTakenTracker {
	taken: HashSet<String>,
}

impl CourseTakenTracker {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn contains(&self, course_code: &str) -> bool {
		self.taken.contains(course_code)
	}

	pub fn add_course(&mut self, course_code: impl Into<String>) {
		self.taken.insert(course_code.into());
	}

	pub fn add_courses<S: Into<String>>(&mut self, course_codes: impl IntoIterator<Item = S>) {
		for code in course_codes {
			self.add_course(code);
		}
	}

	pub fn len(&self) -> usize {
		self.taken.len()
	}

	pub fn is_empty(&self) -> bool {
		self.taken.is_empty()
	}
}
