//! A student's plan of courses, grouped into years and terms.

use std::collections::HashMap;
use serde::{Serialize, Deserialize};

use crate::course::*;

/// A course placed in a term of a schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledCourse {
	pub subject: String,
	#[serde(deserialize_with = "crate::course::class_id_from_string_or_number")]
	pub class_id: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/* Some courses have a variable credit value */
	pub num_credits_min: u32,
	pub num_credits_max: u32,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub prereqs: Option<PrereqExpr>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub coreqs: Option<PrereqExpr>,
}

impl ScheduledCourse {
	pub fn new(subject: impl Into<String>, class_id: impl Into<String>, num_credits_min: u32, num_credits_max: u32) -> Self {
		Self {
			subject: subject.into(),
			class_id: class_id.into(),
			name: None,
			num_credits_min,
			num_credits_max,
			prereqs: None,
			coreqs: None,
		}
	}

	pub fn with_prereqs(mut self, prereqs: PrereqExpr) -> Self {
		self.prereqs = Some(prereqs);
		self
	}

	pub fn with_coreqs(mut self, coreqs: PrereqExpr) -> Self {
		self.coreqs = Some(coreqs);
		self
	}
}

impl CourseCode for ScheduledCourse {
	fn subject(&self) -> &str { &self.subject }
	fn class_id(&self) -> &str { &self.class_id }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleTerm {
	/// Encodes the academic year and season, e.g. `201910`.
	pub term_id: i64,
	#[serde(default)]
	pub classes: Vec<ScheduledCourse>,
}

impl ScheduleTerm {
	pub fn new(term_id: i64, classes: Vec<ScheduledCourse>) -> Self {
		Self { term_id, classes }
	}
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleYear {
	#[serde(default)]
	pub year: i32,
	#[serde(default)]
	pub fall: ScheduleTerm,
	#[serde(default)]
	pub spring: ScheduleTerm,
	#[serde(default)]
	pub summer1: ScheduleTerm,
	#[serde(default)]
	pub summer2: ScheduleTerm,
	/// When set summer is a single full session held in `summer1`.
	#[serde(default)]
	pub is_summer_full: bool,
}

impl ScheduleYear {
	/// Terms of the year in the order they are taken.
	pub fn terms(&self) -> Vec<&ScheduleTerm> {
		if self.is_summer_full {
			vec![&self.fall, &self.spring, &self.summer1]
		} else {
			vec![&self.fall, &self.spring, &self.summer1, &self.summer2]
		}
	}
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
	pub years: Vec<i32>,
	pub year_map: HashMap<i32, ScheduleYear>,
}

impl Schedule {
	pub fn load_from_path(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
		let data = std::fs::read_to_string(path.as_ref())?;
		let schedule = serde_json::from_str(&data)?;
		log::debug!("Loaded schedule from {}", path.as_ref().display());
		Ok(schedule)
	}

	/// Appends a year, replacing any existing year with the same number.
	pub fn add_year(&mut self, year: ScheduleYear) {
		if !self.years.contains(&year.year) {
			self.years.push(year.year);
		}
		self.year_map.insert(year.year, year);
	}

	/// Every term in chronological order: years ascending, then fall, spring and the summer sessions.
	///
	/// The schedule itself is left untouched.
	/// # Errors
	/// - [`crate::Error::Validation`] if a listed year is missing from the year map.
	pub fn terms(&self) -> crate::Result<Vec<&ScheduleTerm>> {
		let mut years = self.years.clone();
		years.sort_unstable();

		let mut terms = Vec::with_capacity(years.len() * 4);
		for year_num in years {
			let year = self.year_map.get(&year_num)
				.ok_or_else(|| crate::Error::Validation(format!("year {} is listed but missing from the year map", year_num)))?;
			terms.extend(year.terms());
		}
		Ok(terms)
	}

	/// Every scheduled course in term order.
	pub fn all_courses(&self) -> crate::Result<Vec<&ScheduledCourse>> {
		Ok(self.terms()?.into_iter().flat_map(|t| t.classes.iter()).collect())
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn year(year: i32, base: i64, is_summer_full: bool) -> ScheduleYear {
		ScheduleYear {
			year,
			fall: ScheduleTerm::new(base + 10, vec![]),
			spring: ScheduleTerm::new(base + 30, vec![]),
			summer1: ScheduleTerm::new(base + 40, vec![]),
			summer2: ScheduleTerm::new(base + 60, vec![]),
			is_summer_full,
		}
	}

	#[test]
	fn terms_are_ordered_by_year_then_season() {
		let mut s = Schedule::default();
		s.add_year(year(2020, 202000, true));
		s.add_year(year(2019, 201900, false));
		let ids = s.terms().expect("failed to get terms").iter().map(|t| t.term_id).collect::<Vec<_>>();
		assert_eq!(ids, vec![201910, 201930, 201940, 201960, 202010, 202030, 202040]);
		/* The schedule's own year list is not reordered */
		assert_eq!(s.years, vec![2020, 2019]);
	}

	#[test]
	fn missing_year_is_an_error() {
		let s = Schedule { years: vec![2019], year_map: HashMap::new() };
		assert!(matches!(s.terms(), Err(crate::Error::Validation(_))));
	}

	#[test]
	fn deserializes_camel_case_json() {
		let s: Schedule = serde_json::from_str(r#"{
			"years": [2019],
			"yearMap": {
				"2019": {
					"year": 2019,
					"isSummerFull": true,
					"fall": { "termId": 201910, "classes": [
						{ "subject": "CS", "classId": "2500", "numCreditsMin": 4, "numCreditsMax": 4 }
					] },
					"spring": { "termId": 201930, "classes": [] },
					"summer1": { "termId": 201940, "classes": [] },
					"summer2": { "termId": 201960, "classes": [] }
				}
			}
		}"#).expect("failed to parse schedule");
		let courses = s.all_courses().expect("failed to list courses");
		assert_eq!(courses.len(), 1);
		assert_eq!(courses[0].course_code(), "CS2500");
	}
}
