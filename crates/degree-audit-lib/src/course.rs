//! Course references, the sets used to track which courses have been taken,
//! and the prerequisite expressions evaluated against them.

mod code;
pub use code::*;
pub(crate) use code::class_id_from_string_or_number;

mod tracker;
pub use tracker::CourseTakenTracker;

pub mod prereq;
pub use prereq::{PrereqExpr, PrereqItem, does_prereq_exist};
