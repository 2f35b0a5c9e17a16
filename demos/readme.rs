/*!
# Getopt: Readme

A minimal program supporting `-h` and `-v`.
*/

/// # Usage.
const USAGE: &str = "Usage: program [-hv]";

fn main() {
	let args = std::env::args().skip(1);
	let parsed = match getopt::getopt_strict(args, "hv", None::<&str>) {
		Ok(parsed) if parsed.args().is_empty() => parsed,
		_ => {
			eprintln!("{USAGE}");
			std::process::exit(1);
		},
	};

	for opt in parsed.opts() {
		match opt.opt() {
			"-v" => {
				println!("Version 0.1");
				return;
			},
			"-h" => {
				println!("{USAGE}");
				return;
			},
			_ => unreachable!("unexpected option {opt}"),
		}
	}
}
