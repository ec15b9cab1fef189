use serde::{Serialize, Deserialize};

/// Thresholds used by the schedule checks and limits placed on the solver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuditOptions {
	max_term_credits: u32,
	four_credit_threshold: u32,
	max_four_credit_courses: usize,
	max_solutions: Option<usize>,
}

impl Default for AuditOptions {
	fn default() -> Self {
		Self {
			max_term_credits: 19,
			four_credit_threshold: 4,
			max_four_credit_courses: 4,
			max_solutions: Some(100_000),
		}
	}
}

impl AuditOptions {
	/// Reads options from a JSON file. Fields missing from the file keep their default value.
	/// # Errors
	/// - [`crate::Error::Validation`] if the file sets a solution limit of zero.
	pub fn load_from_path(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
		let data = std::fs::read_to_string(path.as_ref())?;
		let options: AuditOptions = serde_json::from_str(&data)?;
		if options.max_solutions == Some(0) {
			return Err(crate::Error::Validation("maxSolutions must be at least 1".to_string()));
		}
		log::debug!("Loaded audit options from {}", path.as_ref().display());
		Ok(options)
	}

	/// A term at or above this many credits is reported as over-enrolled.
	pub fn max_term_credits(&self) -> u32 {
		self.max_term_credits
	}
	pub fn set_max_term_credits(&mut self, max_term_credits: u32) {
		self.max_term_credits = max_term_credits;
	}

	/// Courses with at least this many minimum credits count towards the overload check.
	pub fn four_credit_threshold(&self) -> u32 {
		self.four_credit_threshold
	}
	pub fn set_four_credit_threshold(&mut self, four_credit_threshold: u32) {
		self.four_credit_threshold = four_credit_threshold;
	}

	/// A term with more heavy courses than this is overloaded.
	pub fn max_four_credit_courses(&self) -> usize {
		self.max_four_credit_courses
	}
	pub fn set_max_four_credit_courses(&mut self, max_four_credit_courses: usize) {
		self.max_four_credit_courses = max_four_credit_courses;
	}

	/// Upper bound on solutions the solver may hold for a single requirement, `None` is unbounded.
	pub fn max_solutions(&self) -> Option<usize> {
		self.max_solutions
	}
	/// returns false if the limit is zero, which would reject every requirement.
	pub fn set_max_solutions(&mut self, max_solutions: Option<usize>) -> bool {
		if max_solutions == Some(0) {
			false
		} else {
			self.max_solutions = max_solutions;
			true
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test] fn default_thresholds() { assert_eq!(AuditOptions::default().max_term_credits(), 19) }
	#[test] fn zero_solution_limit_is_rejected() { assert!(!AuditOptions::default().set_max_solutions(Some(0))) }

	#[test]
	fn partial_json_keeps_defaults() {
		let options: AuditOptions = serde_json::from_str(r#"{ "maxTermCredits": 21 }"#).expect("failed to parse options");
		assert_eq!(options.max_term_credits(), 21);
		assert_eq!(options.max_four_credit_courses(), 4);
		assert_eq!(options.max_solutions(), Some(100_000));
	}
}
