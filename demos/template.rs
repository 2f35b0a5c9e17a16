/*!
# Getopt: Template

A starting point for a command-line program.
*/

use std::process::ExitCode;

/// # Usage.
fn usage() {
	eprintln!(
		"Usage: {} [-h]",
		std::env::args().next().unwrap_or_else(|| "template".to_owned()),
	);
}

/// # Help.
fn help() {
	usage();
	eprintln!("CHANGEME: This is a template for a command-line program.
Options:
    -h, --help  Show this help and exit");
}

fn main() -> ExitCode {
	let parsed = match getopt::Getopt::new("h").with_long("help").parse_env() {
		Ok(parsed) if parsed.args().is_empty() => parsed,
		Ok(parsed) => {
			eprintln!("Unexpected arguments: {:?}", parsed.args());
			usage();
			return ExitCode::FAILURE;
		},
		Err(e) => {
			eprintln!("{e}");
			usage();
			return ExitCode::FAILURE;
		},
	};

	for opt in parsed.opts() {
		match opt.opt() {
			"-h" | "--help" => {
				help();
				return ExitCode::SUCCESS;
			},
			_ => unreachable!("unexpected option {opt}"),
		}
	}

	// Your program goes here.
	ExitCode::SUCCESS
}
