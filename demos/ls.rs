/*!
# Getopt: ls

This example parses (only parses!) every option supported by GNU ls and
prints the results.
*/

/// # Short Options.
const SHORT: &str = "aAbBcCdDfF:gGhHI:klLmnNopqQrRsStT:uUvw:xXZ1";

/// # Long Options.
const LONG: &[&str] = &[
	"all",
	"almost-all",
	"author",
	"escape",
	"block-size=",
	"ignore-backups",
	"color=",
	"directory",
	"dired",
	"classify=",
	"file-type",
	"format=",
	"full-time",
	"group-directories-first",
	"no-group",
	"human-readable",
	"si",
	"dereference-command-line",
	"dereference-command-line-symlink-to-dir",
	"hide=",
	"hyperlink=",
	"indicator-style=",
	"inode",
	"ignore=",
	"kibibytes",
	"dereference",
	"numeric-uid-gid",
	"literal",
	"hide-control-chars",
	"show-control-chars",
	"quote-name",
	"quoting-style=",
	"reverse",
	"recursive",
	"size",
	"sort=",
	"time=",
	"time-style=",
	"tabsize=",
	"width=",
	"context",
	"zero",
	"help",
	"version",
];

fn main() {
	match getopt::Getopt::new(SHORT).with_longs(LONG.iter().copied()).parse_env() {
		Ok(parsed) => {
			println!("\x1b[2mOptions:\x1b[0m");
			for opt in parsed.opts() { println!("  {opt}"); }

			println!("\x1b[2mArguments:\x1b[0m");
			for arg in parsed.args() { println!("  {arg:?}"); }
		},
		Err(e) => {
			println!("\x1b[1;91mError:\x1b[0m {e}");
			println!("\x1b[1;91mError:\x1b[0m {e:?}");
		},
	}
}
