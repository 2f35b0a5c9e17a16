/*!
# Benchmark: `getopt`
*/

use brunch::{
	Bench,
	benches,
};
use getopt::{
	compile_long,
	compile_short,
	Getopt,
};

/// # Short Descriptor (GNU ls).
const SHORT: &str = "aAbBcCdDfF:gGhHI:klLmnNopqQrRsStT:uUvw:xXZ1";

/// # Long Descriptor.
const LONG: [&str; 8] = ["all", "block-size=", "color=", "format=", "help", "recursive", "sort=", "version"];

/// # Arguments.
fn arguments() -> Vec<String> {
	[
		"-la",
		"--sort=time",
		"-w",
		"80",
		"--recursive",
		"-hF",
		"classify",
		"/foo/bar",
		"/bar/baz",
	].into_iter().map(String::from).collect()
}

benches!(
	Bench::new("getopt::compile_short(ls)")
		.run(|| compile_short(SHORT)),

	Bench::new("getopt::compile_long(8)")
		.run(|| compile_long(LONG)),

	Bench::spacer(),

	Bench::new("getopt::getopt(9)")
		.run_seeded_with(arguments, |a| getopt::getopt(a, SHORT, LONG)),

	Bench::new("getopt::Getopt::parse(9)")
		.run_seeded_with(arguments, |a| Getopt::new(SHORT).with_longs(LONG).parse(a)),
);
