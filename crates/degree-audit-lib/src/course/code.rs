use serde::{Serialize, Deserialize, Deserializer};

/// Anything that names a single course by subject and class id.
pub trait CourseCode {
	fn subject(&self) -> &str;
	fn class_id(&self) -> &str;

	/// The identity key of the course, subject followed by class id. e.g. `CS2500`
	fn course_code(&self) -> String {
		format!("{}{}", self.subject(), self.class_id())
	}

	/// The class id read as a number, `None` when it isn't one.
	///
	/// The whole id must be numeric, a suffixed id such as `3500L` is `None` rather than `3500`
	/// and so never falls inside a range.
	fn numeric_id(&self) -> Option<u32> {
		self.class_id().trim().parse::<u32>().ok()
	}
}

/// A reference to a course in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRef {
	pub subject: String,
	#[serde(deserialize_with = "class_id_from_string_or_number")]
	pub class_id: String,
}

impl CourseRef {
	pub fn new(subject: impl Into<String>, class_id: impl Into<String>) -> Self {
		Self {
			subject: subject.into(),
			class_id: class_id.into(),
		}
	}
}

impl CourseCode for CourseRef {
	fn subject(&self) -> &str { &self.subject }
	fn class_id(&self) -> &str { &self.class_id }
}

impl std::fmt::Display for CourseRef {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}{}", self.subject, self.class_id)
	}
}

/// Requirement files store class ids as numbers while schedules store them as strings.
pub(crate) fn class_id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where D: Deserializer<'de>,
{
	#[derive(Deserialize)]
	#[serde(untagged)]
	enum ClassId {
		Text(String),
		Number(u64),
	}

	Ok(match ClassId::deserialize(deserializer)? {
		ClassId::Text(s) => s,
		ClassId::Number(n) => n.to_string(),
	})
}

#[cfg(test)]
mod test {
	use super::*;

	#[test] fn course_code_concatenates() { assert_eq!(CourseRef::new("CS", "2500").course_code(), "CS2500") }
	#[test] fn numeric_id_parses() { assert_eq!(CourseRef::new("CS", "2500").numeric_id(), Some(2500)) }
	#[test] fn non_numeric_id_is_none() { assert_eq!(CourseRef::new("CS", "25XX").numeric_id(), None) }
	#[test] fn suffixed_id_is_none() { assert_eq!(CourseRef::new("CS", "3500L").numeric_id(), None) }

	#[test]
	fn class_id_accepts_numbers() {
		let c: CourseRef = serde_json::from_str(r#"{ "subject": "MATH", "classId": 1341 }"#).expect("failed to parse course");
		assert_eq!(c, CourseRef::new("MATH", "1341"));
	}
}
