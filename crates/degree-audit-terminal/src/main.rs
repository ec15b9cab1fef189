use degree_audit::solver::Major2Validation;
use degree_audit::{AuditOptions, Major, Major2, RequirementGroupWarning, Schedule, Warning};

fn main() {
	let mut opts;

	/* Parse console input */
	let parsed_options = {
		let args: Vec<String> = std::env::args().collect();

		opts = getopts::Options::new();
		opts.optflag( "h", "help",       "Show help");
		opts.optflag( "v", "verbose",    "Increased verbosity");
		opts.optopt(  "s", "schedule",   "Schedule to audit", "FILE");
		opts.optopt(  "m", "major",      "Major to check requirement groups against", "FILE");
		opts.optopt(  "n", "major2",     "Major to solve requirement sections for", "FILE");
		opts.optopt(  "c", "config",     "Audit options", "FILE");
		opts.parsing_style(getopts::ParsingStyle::FloatingFrees);

		let parsed_options = match opts.parse(&args[1..]) {
			Ok(m)  => { m }
			Err(e) => { eprintln!("Unable to parse options: {}", e); std::process::exit(2) }
		};

		if parsed_options.opt_present("h") {
			eprintln!("{}", opts.usage("Usage: degree-audit -s SCHEDULE [-m MAJOR] [-n MAJOR2] [-c CONFIG]"));
			return;
		}

		parsed_options
	};

	let mut logger = env_logger::Builder::from_default_env();
	if parsed_options.opt_present("v") {
		logger.filter_level(log::LevelFilter::Debug);
	}
	logger.init();

	match run(&parsed_options) {
		Ok(report) => match serde_json::to_string_pretty(&report) {
			Ok(s) => println!("{}", s),
			Err(e) => {
				log::error!("Failed to serialize report: {}", e);
				std::process::exit(1);
			},
		},
		Err(e) => {
			log::error!("{}", e);
			std::process::exit(1);
		},
	}
}

/// Everything computed for a single invocation.
#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct AuditReport {
	warnings: Vec<Warning>,
	#[serde(skip_serializing_if = "Option::is_none")]
	requirement_group_warnings: Option<Vec<RequirementGroupWarning>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	satisfied_requirement_groups: Option<Vec<String>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	major2: Option<Major2Validation>,
}

fn run(parsed_options: &getopts::Matches) -> Result<AuditReport, Error> {
	let options = match parsed_options.opt_str("c") {
		Some(path) => AuditOptions::load_from_path(&path).map_err(|e| Error::Load(path, e))?,
		None => AuditOptions::default(),
	};

	let schedule_path = parsed_options.opt_str("s").ok_or(Error::MissingArgument("schedule"))?;
	let schedule = Schedule::load_from_path(&schedule_path).map_err(|e| Error::Load(schedule_path, e))?;

	log::debug!("Producing schedule warnings");
	let warnings = degree_audit::produce_warnings_with(&schedule, &options)?;

	let (requirement_group_warnings, satisfied_requirement_groups) = match parsed_options.opt_str("m") {
		Some(path) => {
			let major = Major::load_from_path(&path).map_err(|e| Error::Load(path, e))?;
			log::debug!("Checking requirement groups of `{}`", major.name);
			(
				Some(degree_audit::produce_requirement_group_warnings(&schedule, &major)?),
				Some(degree_audit::produce_satisfied_requirement_groups(&schedule, &major)?),
			)
		},
		None => (None, None),
	};

	let major2 = match parsed_options.opt_str("n") {
		Some(path) => {
			let major = Major2::load_from_path(&path).map_err(|e| Error::Load(path, e))?;
			log::debug!("Solving requirement sections of `{}`", major.name);
			let validation = degree_audit::solver::validate_major2_schedule(&major, &schedule, &options)?;
			for title in validation.unsatisfied_sections() {
				log::info!("Section `{}` can't be satisfied", title);
			}
			Some(validation)
		},
		None => None,
	};

	Ok(AuditReport {
		warnings,
		requirement_group_warnings,
		satisfied_requirement_groups,
		major2,
	})
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Degree audit error: {0}")]
	DegreeAudit(#[from] degree_audit::Error),
	#[error("Failed to load {0}: {1}")]
	Load(String, degree_audit::Error),
	#[error("Missing argument: {0}")]
	MissingArgument(&'static str),
}
