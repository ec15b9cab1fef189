use std::collections::HashSet;

use super::*;
use crate::config::AuditOptions;

/// Solves requirements using the default options.
pub fn validate_requirement(requirement: &Requirement2, tracker: &impl CourseValidationTracker) -> crate::Result<Vec<Solution>> {
	RequirementSolver::new(tracker, &AuditOptions::default()).solve(requirement)
}

/// Computes the solutions of requirement trees against a tracker.
///
/// The solver holds no state between calls, the same solver can be reused for many requirements.
#[derive(Debug)]
pub struct RequirementSolver<'t, T: CourseValidationTracker> {
	tracker: &'t T,
	max_solutions: Option<usize>,
}

impl<'t, T: CourseValidationTracker> RequirementSolver<'t, T> {
	pub fn new(tracker: &'t T, options: &AuditOptions) -> Self {
		Self {
			tracker,
			max_solutions: options.max_solutions(),
		}
	}

	/// Every solution of `requirement`, empty if it can't be satisfied.
	/// # Errors
	/// - [`crate::Error::InvalidSectionCount`] for a section requiring fewer than one child.
	/// - [`crate::Error::SolutionLimitExceeded`] if any requirement in the tree holds too many solutions.
	pub fn solve(&self, requirement: &Requirement2) -> crate::Result<Vec<Solution>> {
		match requirement {
			Requirement2::Course(r) => Ok(self.solve_course(r)),
			Requirement2::Range(r) => self.solve_range(r),
			Requirement2::And { courses } => {
				let children = self.solve_children(courses)?;
				self.combine_all(children)
			},
			Requirement2::Or { courses } => {
				let solutions = self.solve_children(courses)?.into_iter().flatten().collect::<Vec<_>>();
				self.check_limit(solutions.len())?;
				Ok(solutions)
			},
			Requirement2::Xom(r) => self.solve_xom(r),
			Requirement2::Section(r) => self.solve_section(r),
		}
	}

	fn solve_children(&self, requirements: &[Requirement2]) -> crate::Result<Vec<Vec<Solution>>> {
		requirements.iter().map(|r| self.solve(r)).collect()
	}

	fn check_limit(&self, held: usize) -> crate::Result<()> {
		match self.max_solutions {
			Some(max) if held > max => {
				log::debug!("Solver holding {} solutions, limit is {}", held, max);
				Err(crate::Error::SolutionLimitExceeded(max))
			},
			_ => Ok(()),
		}
	}

	fn solve_course(&self, requirement: &CourseRef) -> Vec<Solution> {
		self.tracker.get(requirement)
			.map(|c| vec![Solution::from_course(c)])
			.unwrap_or_default()
	}

	/// Builds every combination of courses in range that reaches the required credits.
	///
	/// Combinations short of the credits are kept and extended by later courses,
	/// those still short at the end are dropped.
	fn solve_range(&self, requirement: &CourseRange2) -> crate::Result<Vec<Solution>> {
		let exceptions = requirement.exceptions.iter().map(|c| c.course_code()).collect::<HashSet<_>>();
		let courses = self.tracker.get_all(&requirement.subject, requirement.id_range_start, requirement.id_range_end)
			.into_iter()
			.filter(|c| !exceptions.contains(&c.course_code()));

		let mut unfinished = Vec::<Solution>::new();
		let mut finished = Vec::<Solution>::new();

		for course in courses {
			let code = course.course_code();
			let course_solution = Solution::from_course(course);

			let mut unfinished_with_course = Vec::<Solution>::new();
			for so_far in unfinished.iter().filter(|s| !s.contains(&code)) {
				let current = so_far.combine(&course_solution);
				if current.min_credits >= requirement.credits_required {
					finished.push(current);
				} else {
					unfinished_with_course.push(current);
				}
				self.check_limit(unfinished.len() + unfinished_with_course.len() + finished.len())?;
			}

			if course_solution.min_credits >= requirement.credits_required {
				finished.push(course_solution);
			} else {
				unfinished_with_course.push(course_solution);
			}
			unfinished.extend(unfinished_with_course);
			self.check_limit(unfinished.len() + finished.len())?;
		}

		log::trace!("Range {} {}-{} has {} solution(s)", requirement.subject, requirement.id_range_start, requirement.id_range_end, finished.len());
		Ok(finished)
	}

	/// Combines one solution from every child, children must use separate courses.
	///
	/// Fails as soon as a child has nothing combinable with the solutions so far.
	pub(super) fn combine_all(&self, children: Vec<Vec<Solution>>) -> crate::Result<Vec<Solution>> {
		let mut solutions_so_far = vec![Solution::default()];

		for child_solutions in children {
			let mut solutions_with_child = Vec::<Solution>::new();
			for so_far in &solutions_so_far {
				for child in &child_solutions {
					if so_far.is_disjoint(child) {
						solutions_with_child.push(so_far.combine(child));
						self.check_limit(solutions_with_child.len())?;
					}
				}
			}

			if solutions_with_child.is_empty() {
				return Ok(vec![]);
			}
			solutions_so_far = solutions_with_child;
		}
		Ok(solutions_so_far)
	}

	/// Like a range but combining the children's solutions instead of single courses.
	fn solve_xom(&self, requirement: &XomRequirement) -> crate::Result<Vec<Solution>> {
		let children = self.solve_children(&requirement.courses)?;

		let mut unfinished = Vec::<Solution>::new();
		let mut finished = Vec::<Solution>::new();

		for child_solutions in children {
			let mut unfinished_with_child = Vec::<Solution>::new();
			for child in child_solutions {
				for so_far in unfinished.iter().filter(|s| s.is_disjoint(&child)) {
					let current = so_far.combine(&child);
					if current.min_credits >= requirement.num_credits_min {
						finished.push(current);
					} else {
						unfinished_with_child.push(current);
					}
					self.check_limit(unfinished.len() + unfinished_with_child.len() + finished.len())?;
				}

				if child.min_credits >= requirement.num_credits_min {
					finished.push(child);
				} else {
					unfinished_with_child.push(child);
				}
			}
			unfinished.extend(unfinished_with_child);
			self.check_limit(unfinished.len() + finished.len())?;
		}
		Ok(finished)
	}

	/// Combines solutions from `min_requirement_count` different children.
	pub(super) fn solve_section(&self, requirement: &Section) -> crate::Result<Vec<Solution>> {
		if requirement.min_requirement_count < 1 {
			return Err(crate::Error::InvalidSectionCount {
				title: requirement.title.clone(),
				count: requirement.min_requirement_count,
			});
		}
		let min_count = requirement.min_requirement_count as usize;

		let children = self.solve_children(&requirement.requirements)?;

		/* Unfinished solutions always have fewer than `min_count` children */
		let mut unfinished = Vec::<(Solution, usize)>::new();
		let mut finished = Vec::<Solution>::new();

		for child_solutions in children {
			let mut unfinished_with_child = Vec::<(Solution, usize)>::new();
			for child in child_solutions {
				for (so_far, count) in unfinished.iter().filter(|(s, _)| s.is_disjoint(&child)) {
					let current = so_far.combine(&child);
					if count + 1 == min_count {
						finished.push(current);
					} else {
						unfinished_with_child.push((current, count + 1));
					}
					self.check_limit(unfinished.len() + unfinished_with_child.len() + finished.len())?;
				}

				if min_count == 1 {
					finished.push(child);
				} else {
					unfinished_with_child.push((child, 1));
				}
			}
			unfinished.extend(unfinished_with_child);
			self.check_limit(unfinished.len() + finished.len())?;
		}

		log::trace!("Section `{}` has {} solution(s)", requirement.title, finished.len());
		Ok(finished)
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::schedule::ScheduledCourse;

	fn taken() -> Vec<ScheduledCourse> {
		vec![
			ScheduledCourse::new("CS", "2500", 4, 4),
			ScheduledCourse::new("CS", "2510", 4, 4),
			ScheduledCourse::new("CS", "3500", 4, 4),
			ScheduledCourse::new("CS", "1210", 1, 1),
		]
	}

	fn codes(solutions: &[Solution]) -> Vec<Vec<&str>> {
		solutions.iter().map(|s| s.sol.iter().map(String::as_str).collect()).collect()
	}

	#[test]
	fn missing_course_has_no_solution() {
		let t = taken();
		let tracker = ScheduleTracker::new(t.iter());
		assert!(validate_requirement(&Requirement2::course("CS", "4500"), &tracker).expect("solve failed").is_empty());
	}

	#[test]
	fn range_combines_courses_until_credits_met() {
		let t = taken();
		let tracker = ScheduleTracker::new(t.iter());
		let r = Requirement2::Range(CourseRange2 {
			subject: "CS".into(),
			id_range_start: 1000,
			id_range_end: 2999,
			credits_required: 5,
			exceptions: vec![],
		});
		let s = validate_requirement(&r, &tracker).expect("solve failed");
		assert_eq!(codes(&s), vec![vec!["CS2500", "CS2510"], vec!["CS2500", "CS1210"], vec!["CS2510", "CS1210"]]);
	}

	#[test]
	fn range_respects_exceptions() {
		let t = taken();
		let tracker = ScheduleTracker::new(t.iter());
		let r = Requirement2::Range(CourseRange2 {
			subject: "CS".into(),
			id_range_start: 2000,
			id_range_end: 3999,
			credits_required: 4,
			exceptions: vec![CourseRef::new("CS", "2510")],
		});
		let s = validate_requirement(&r, &tracker).expect("solve failed");
		/* A finished solution is never extended further */
		assert_eq!(codes(&s), vec![vec!["CS2500"], vec!["CS3500"]]);
	}

	#[test]
	fn xom_needs_credits_from_disjoint_children() {
		let t = taken();
		let tracker = ScheduleTracker::new(t.iter());
		let r = Requirement2::Xom(XomRequirement {
			num_credits_min: 8,
			courses: vec![
				Requirement2::course("CS", "2500"),
				Requirement2::Or { courses: vec![Requirement2::course("CS", "2500"), Requirement2::course("CS", "2510")] },
			],
		});
		let s = validate_requirement(&r, &tracker).expect("solve failed");
		assert_eq!(codes(&s), vec![vec!["CS2500", "CS2510"]]);
	}

	#[test]
	fn section_with_zero_count_is_an_error() {
		let tracker = ScheduleTracker::default();
		let r = Requirement2::Section(Section { title: "Broken".into(), requirements: vec![], min_requirement_count: 0 });
		assert!(matches!(validate_requirement(&r, &tracker), Err(crate::Error::InvalidSectionCount { count: 0, .. })));
	}

	#[test]
	fn solution_limit_is_enforced() {
		let t = taken();
		let tracker = ScheduleTracker::new(t.iter());
		let mut options = AuditOptions::default();
		options.set_max_solutions(Some(2));
		let r = Requirement2::Range(CourseRange2 {
			subject: "CS".into(),
			id_range_start: 1000,
			id_range_end: 9999,
			credits_required: 100,
			exceptions: vec![],
		});
		let result = RequirementSolver::new(&tracker, &options).solve(&r);
		assert!(matches!(result, Err(crate::Error::SolutionLimitExceeded(2))));
	}

	#[test]
	fn and_stops_once_product_exceeds_limit() {
		let t = taken();
		let tracker = ScheduleTracker::new(t.iter());
		let mut options = AuditOptions::default();
		options.set_max_solutions(Some(3));
		let either = |a: &str, b: &str| Requirement2::Or { courses: vec![Requirement2::course("CS", a), Requirement2::course("CS", b)] };
		let r = Requirement2::And { courses: vec![either("2500", "2510"), either("3500", "1210")] };

		let result = RequirementSolver::new(&tracker, &options).solve(&r);
		assert!(matches!(result, Err(crate::Error::SolutionLimitExceeded(3))));
	}

	#[test]
	fn xom_stops_once_partial_solutions_exceed_limit() {
		let t = taken();
		let tracker = ScheduleTracker::new(t.iter());
		let mut options = AuditOptions::default();
		options.set_max_solutions(Some(5));
		let r = Requirement2::Xom(XomRequirement {
			num_credits_min: 100,
			courses: t.iter().map(|c| Requirement2::course(c.subject.clone(), c.class_id.clone())).collect(),
		});

		let result = RequirementSolver::new(&tracker, &options).solve(&r);
		assert!(matches!(result, Err(crate::Error::SolutionLimitExceeded(5))));
	}
}
