//! Various helper functions for testing
//!
//! functions in this module should use results and not use any panics to avoid confusion in callers

use std::io::Write;

use degree_audit::requirement::*;
use degree_audit::{Major, Schedule, ScheduleTerm, ScheduleYear, ScheduledCourse};

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
	#[error("IO error: {0}")]
	IO(#[from] std::io::Error),
	#[error("JSON error: {0}")]
	SerdeJSON(#[from] serde_json::Error),
}

/// Season offsets added to `year * 100` to make a term id.
pub const FALL: i64 = 10;
pub const SPRING: i64 = 30;
pub const SUMMER1: i64 = 40;
pub const SUMMER2: i64 = 60;

pub fn term_id(year: i32, season: i64) -> i64 {
	year as i64 * 100 + season
}

/// A course with a fixed credit value.
pub fn course(subject: &str, class_id: &str, credits: u32) -> ScheduledCourse {
	ScheduledCourse::new(subject, class_id, credits, credits)
}

/// A year with every term filled in, summer split into two sessions.
pub fn year(year: i32, fall: Vec<ScheduledCourse>, spring: Vec<ScheduledCourse>, summer1: Vec<ScheduledCourse>, summer2: Vec<ScheduledCourse>) -> ScheduleYear {
	ScheduleYear {
		year,
		fall: ScheduleTerm::new(term_id(year, FALL), fall),
		spring: ScheduleTerm::new(term_id(year, SPRING), spring),
		summer1: ScheduleTerm::new(term_id(year, SUMMER1), summer1),
		summer2: ScheduleTerm::new(term_id(year, SUMMER2), summer2),
		is_summer_full: false,
	}
}

pub fn schedule(years: impl IntoIterator<Item = ScheduleYear>) -> Schedule {
	let mut s = Schedule::default();
	for y in years {
		s.add_year(y);
	}
	s
}

/// A schedule with a single year holding `courses` in the fall.
pub fn single_term_schedule(year_num: i32, courses: Vec<ScheduledCourse>) -> Schedule {
	schedule([year(year_num, courses, vec![], vec![], vec![])])
}

pub fn and_group(name: &str, requirements: Vec<Requirement>) -> MajorRequirementGroup {
	MajorRequirementGroup::And(AndSection { name: name.to_string(), requirements })
}

pub fn or_group(name: &str, num_credits_min: u32, requirements: Vec<Requirement>) -> MajorRequirementGroup {
	MajorRequirementGroup::Or(OrSection { name: name.to_string(), num_credits_min, num_credits_max: num_credits_min, requirements })
}

pub fn range_group(name: &str, num_credits_min: u32, ranges: Vec<SubjectRange>) -> MajorRequirementGroup {
	MajorRequirementGroup::Range(RangeSection {
		name: name.to_string(),
		num_credits_min,
		num_credits_max: num_credits_min,
		requirements: CourseRange { credits_required: num_credits_min, ranges, exceptions: vec![] },
	})
}

pub fn major(name: &str, groups: impl IntoIterator<Item = MajorRequirementGroup>) -> Major {
	let mut m = Major { name: name.to_string(), ..Default::default() };
	for g in groups {
		m.add_group(g);
	}
	m
}

/// Writes `value` as JSON to a temporary file which is removed when dropped.
pub fn write_json_fixture<T: serde::Serialize>(value: &T) -> Result<tempfile::NamedTempFile, FixtureError> {
	let mut f = tempfile::NamedTempFile::new()?;
	serde_json::to_writer_pretty(&mut f, value)?;
	f.flush()?;
	Ok(f)
}

/// Writes raw text to a temporary file, for inputs that shouldn't parse.
pub fn write_text_fixture(text: &str) -> Result<tempfile::NamedTempFile, FixtureError> {
	let mut f = tempfile::NamedTempFile::new()?;
	f.write_all(text.as_bytes())?;
	f.flush()?;
	Ok(f)
}
