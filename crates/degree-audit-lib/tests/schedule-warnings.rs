use degree_audit::*;
use degree_audit::course::{PrereqExpr, PrereqItem};
use degree_audit_test_utils::*;

fn load_schedule() -> Schedule {
	Schedule::load_from_path(concat!(env!("CARGO_MANIFEST_DIR"), "/test-data/schedule.json")).expect("failed to load schedule")
}

fn warning(message: &str, term_id: i64) -> Warning {
	Warning { message: message.to_string(), term_id }
}

#[test]
fn schedule_fixture_warnings() {
	let _ = env_logger::builder().is_test(true).try_init();
	let schedule = load_schedule();

	let warnings = produce_warnings(&schedule).expect("failed to produce warnings");
	assert_eq!(warnings, vec![
		warning("BIOL1112: prereqs not satisfied: AND: BIOL1111", 201860),
		warning("BIOL1113: prereqs not satisfied: OR: BIOL1101,BIOL1107,BIOL1111,BIOL1115", 201860),
		warning("PHYS1151: prereqs not satisfied: OR: MATH1241,MATH1251", 201860),
		/* CS3500 is in the same term so it doesn't count yet */
		warning("CS4400: prereqs not satisfied: AND: CS3500", 201860),
		warning("Enrolled in a max of 40 credits. May be over-enrolled.", 201860),
		warning("Enrolled in a min of 40 credits. May be over-enrolled.", 201860),
		warning("Overloaded: Enrolled in 10 four-credit courses.", 201860),
		warning("Enrolled in a max of 20 credits. May be over-enrolled.", 201910),
		warning("Enrolled in a min of 20 credits. May be over-enrolled.", 201910),
	]);
}

#[test]
fn full_summer_skips_second_session() {
	let schedule = load_schedule();
	let terms = schedule.terms().expect("failed to list terms").into_iter().map(|t| t.term_id).collect::<Vec<_>>();
	assert_eq!(terms, vec![201810, 201830, 201840, 201860, 201910, 201930, 201940]);

	let warnings = produce_warnings(&schedule).expect("failed to produce warnings");
	assert!(warnings.iter().all(|w| w.term_id != 201960));
}

#[test]
fn producing_warnings_is_idempotent() {
	let schedule = load_schedule();
	let before = schedule.clone();
	let first = produce_warnings(&schedule).expect("failed to produce warnings");
	let second = produce_warnings(&schedule).expect("failed to produce warnings");
	assert_eq!(first, second);
	assert_eq!(schedule, before);
}

#[test]
fn prerequisites_only_count_earlier_terms() {
	let schedule = schedule([
		year(2019,
			vec![course("CS", "2510", 4).with_prereqs(PrereqExpr::and([PrereqItem::from(CourseRef::new("CS", "2500"))]))],
			vec![course("CS", "2500", 4)],
			vec![], vec![],
		),
	]);
	let warnings = produce_warnings(&schedule).expect("failed to produce warnings");
	assert_eq!(warnings, vec![warning("CS2510: prereqs not satisfied: AND: CS2500", term_id(2019, FALL))]);
}

#[test]
fn years_are_processed_in_ascending_order() {
	/* Listed out of order, the prerequisite is still taken first */
	let mut s = Schedule::default();
	s.add_year(year(2020, vec![course("CS", "2510", 4).with_prereqs(PrereqExpr::and([PrereqItem::from(CourseRef::new("CS", "2500"))]))], vec![], vec![], vec![]));
	s.add_year(year(2019, vec![course("CS", "2500", 4)], vec![], vec![], vec![]));
	assert!(produce_warnings(&s).expect("failed to produce warnings").is_empty());
}

#[test]
fn exactly_twenty_credits_warns_both_ways() {
	let schedule = single_term_schedule(2019, vec![course("CS", "4950", 8), course("CS", "4970", 12)]);
	let warnings = produce_warnings(&schedule).expect("failed to produce warnings");
	assert_eq!(warnings, vec![
		warning("Enrolled in a max of 20 credits. May be over-enrolled.", 201910),
		warning("Enrolled in a min of 20 credits. May be over-enrolled.", 201910),
	]);
}

#[test]
fn custom_thresholds_are_used() {
	let schedule = single_term_schedule(2019, vec![course("CS", "2500", 4), course("CS", "2510", 4), course("CS", "2800", 4)]);
	let mut options = AuditOptions::default();
	options.set_max_term_credits(12);
	options.set_max_four_credit_courses(2);

	let messages = produce_warnings_with(&schedule, &options).expect("failed to produce warnings")
		.into_iter()
		.map(|w| w.message)
		.collect::<Vec<_>>();
	assert_eq!(messages, vec![
		"Enrolled in a max of 12 credits. May be over-enrolled.",
		"Enrolled in a min of 12 credits. May be over-enrolled.",
		"Overloaded: Enrolled in 3 four-credit courses.",
	]);
}

#[test]
fn missing_year_is_an_error() {
	let mut schedule = single_term_schedule(2019, vec![]);
	schedule.years.push(2020);
	assert!(matches!(produce_warnings(&schedule), Err(Error::Validation(_))));
}
