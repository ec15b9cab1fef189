pub mod error;
pub use error::Result;
pub use error::Error;

pub mod config;
pub use config::AuditOptions;

pub mod course;
pub use course::{CourseCode, CourseRef, CourseTakenTracker};

pub mod schedule;
pub use schedule::{Schedule, ScheduleYear, ScheduleTerm, ScheduledCourse};

pub mod warnings;
pub use warnings::{Warning, produce_warnings, produce_warnings_with};

pub mod requirement;
pub use requirement::{Major, RequirementGroupWarning, produce_requirement_group_warnings, produce_satisfied_requirement_groups};

pub mod solver;
pub use solver::{Major2, Solution, validate_major2, validate_requirement};
