/*!
# Getopt: Scanner.

A single left-to-right pass over the arguments. Option recognition stops at
the first `--` or at the first argument that is neither an option nor an
option's argument; everything from there on is returned as-is.
*/

use crate::{
	Found,
	GetoptError,
	OptArg,
	OptTable,
	Parsed,
};
use tracing::{
	debug,
	trace,
};



/// # Scanner.
pub(crate) struct Scanner<'a> {
	/// # Short Options.
	shorts: &'a OptTable,

	/// # Long Options.
	longs: &'a OptTable,

	/// # Flag Awaiting an Argument.
	pending: Option<String>,

	/// # Options Found So Far.
	opts: Vec<OptArg>,
}

impl<'a> Scanner<'a> {
	/// # New.
	pub(crate) const fn new(shorts: &'a OptTable, longs: &'a OptTable) -> Self {
		Self {
			shorts,
			longs,
			pending: None,
			opts: Vec::new(),
		}
	}

	/// # Scan.
	///
	/// Consume the scanner, sorting `args` into options and leftovers.
	///
	/// ## Errors
	///
	/// Returns an error on unknown options or missing/unexpected arguments.
	pub(crate) fn scan<I>(self, args: I) -> Result<Parsed, GetoptError>
	where I: IntoIterator<Item=String> {
		self.scan_inner(args.into_iter()).inspect_err(|e| {
			debug!(kind = %e.kind(), error = %e, "parse failed");
		})
	}

	/// # Scan (Inner).
	fn scan_inner<I>(mut self, mut args: I) -> Result<Parsed, GetoptError>
	where I: Iterator<Item=String> {
		while let Some(arg) = args.next() {
			// The separator ends everything, but can't stand in for an
			// argument.
			if arg == "--" {
				if let Some(option) = self.pending.take() {
					return Err(GetoptError::MissingArgument { option, found: Found::Separator });
				}
				trace!("found separator");
				return Ok(self.finish(args.collect()));
			}

			// Fill in the blank from last time.
			if let Some(option) = self.pending.take() {
				if arg.starts_with('-') {
					return Err(GetoptError::MissingArgument { option, found: Found::Token(arg) });
				}
				self.push(option, arg);
				continue;
			}

			// Short cluster?
			if let Some(cluster) = short_cluster(&arg) {
				self.short(cluster)?;
			}
			// Long option?
			else if ! self.long(&arg)? {
				// Something else.
				if arg.starts_with('-') { return Err(GetoptError::UnknownOption(arg)); }

				let rest = std::iter::once(arg).chain(args).collect();
				return Ok(self.finish(rest));
			}
		}

		if let Some(option) = self.pending.take() {
			return Err(GetoptError::MissingArgument { option, found: Found::End });
		}

		Ok(self.finish(Vec::new()))
	}

	/// # Short Options.
	///
	/// Handle each flag in a cluster like `-abc`. Only the last flag may take
	/// an argument, which must then come from the next argument.
	fn short(&mut self, cluster: &str) -> Result<(), GetoptError> {
		let mut chars = cluster.chars();
		while let Some(c) = chars.next() {
			let option = format!("-{c}");
			match self.shorts.takes_argument(&option) {
				None => return Err(GetoptError::UnknownOption(option)),
				Some(false) => { self.push(option, String::new()); },
				Some(true) => {
					let rest = chars.as_str();
					if ! rest.is_empty() {
						return Err(GetoptError::MissingArgument {
							option,
							found: Found::Stacked(rest.to_owned()),
						});
					}
					self.pending = Some(option);
				},
			}
		}

		Ok(())
	}

	/// # Long Option.
	///
	/// Returns `false` if `arg` isn't a declared long option.
	fn long(&mut self, arg: &str) -> Result<bool, GetoptError> {
		let (option, argument) = arg.split_once('=').unwrap_or((arg, ""));
		let Some(wants) = self.longs.takes_argument(option) else { return Ok(false); };

		if argument.is_empty() {
			if wants { self.pending = Some(option.to_owned()); }
			else { self.push(option.to_owned(), String::new()); }
		}
		else if wants { self.push(option.to_owned(), argument.to_owned()); }
		else {
			return Err(GetoptError::UnexpectedArgument {
				option: option.to_owned(),
				argument: argument.to_owned(),
			});
		}

		Ok(true)
	}

	/// # Push Option.
	fn push(&mut self, option: String, argument: String) {
		trace!(option = %option, argument = %argument, "found option");
		self.opts.push(OptArg { option, argument });
	}

	/// # Finish.
	fn finish(self, args: Vec<String>) -> Parsed {
		trace!(options = self.opts.len(), leftovers = args.len(), "scan finished");
		Parsed { args, opts: self.opts }
	}
}



/// # Short Cluster.
///
/// Return the flag characters if `arg` looks like `-abc`, i.e. a single dash
/// followed by anything other than a second dash.
fn short_cluster(arg: &str) -> Option<&str> {
	let rest = arg.strip_prefix('-')?;
	if rest.is_empty() || rest.starts_with('-') { None }
	else { Some(rest) }
}



#[cfg(test)]
mod test {
	use super::*;
	use crate::{
		compile_long,
		compile_short,
		ErrorKind,
	};

	/// # Scan Helper.
	fn scan(args: &[&str], short: &str, long: &[&str]) -> Result<Parsed, GetoptError> {
		let shorts = compile_short(short).expect("Short descriptor failed.");
		let longs = compile_long(long).expect("Long descriptor failed.");
		Scanner::new(&shorts, &longs).scan(args.iter().map(|&s| s.to_owned()))
	}

	/// # Options Helper.
	fn opts(raw: &[(&str, &str)]) -> Vec<OptArg> {
		raw.iter().map(|&(o, a)| OptArg::new(o, a)).collect()
	}

	#[test]
	fn t_short_cluster() {
		assert_eq!(short_cluster("-a"), Some("a"));
		assert_eq!(short_cluster("-abc"), Some("abc"));
		assert_eq!(short_cluster("-"), None);
		assert_eq!(short_cluster("--"), None);
		assert_eq!(short_cluster("--abc"), None);
		assert_eq!(short_cluster("abc"), None);
		assert_eq!(short_cluster(""), None);
	}

	#[test]
	fn t_scan() {
		let parsed = scan(
			&["-h", "-v", "-x", "asdf", "-r", "--flag=arg", "--", "-x", "qwe"],
			"hvx:r",
			&["help", "flag="],
		).expect("Scan failed.");

		assert_eq!(parsed.args, ["-x", "qwe"]);
		assert_eq!(parsed.opts, opts(&[
			("-h", ""),
			("-v", ""),
			("-x", "asdf"),
			("-r", ""),
			("--flag", "arg"),
		]));
	}

	#[test]
	fn t_scan_stacked() {
		let parsed = scan(&["-ab"], "ab", &[]).expect("Scan failed.");
		assert!(parsed.args.is_empty());
		assert_eq!(parsed.opts, opts(&[("-a", ""), ("-b", "")]));

		// The last one can take an argument.
		let parsed = scan(&["-abx", "val", "rest"], "abx:", &[]).expect("Scan failed.");
		assert_eq!(parsed.args, ["rest"]);
		assert_eq!(parsed.opts, opts(&[("-a", ""), ("-b", ""), ("-x", "val")]));

		// But no others.
		assert_eq!(
			scan(&["-xab"], "abx:", &[]),
			Err(GetoptError::MissingArgument {
				option: "-x".to_owned(),
				found: Found::Stacked("ab".to_owned()),
			}),
		);

		// Repeats are kept.
		let parsed = scan(&["-vv", "-v"], "v", &[]).expect("Scan failed.");
		assert_eq!(parsed.opts, opts(&[("-v", ""), ("-v", ""), ("-v", "")]));
	}

	#[test]
	fn t_scan_leftovers() {
		// The first positional stops everything.
		let parsed = scan(&["foo", "-x"], "x", &[]).expect("Scan failed.");
		assert_eq!(parsed.args, ["foo", "-x"]);
		assert!(parsed.opts.is_empty());

		let parsed = scan(&["-x", "foo", "--", "bar"], "x", &[]).expect("Scan failed.");
		assert_eq!(parsed.args, ["foo", "--", "bar"]);
		assert_eq!(parsed.opts, opts(&[("-x", "")]));

		// The separator itself is dropped.
		let parsed = scan(&["--"], "x", &[]).expect("Scan failed.");
		assert!(parsed.args.is_empty());
		let parsed = scan(&["--", "--", "-x"], "x", &[]).expect("Scan failed.");
		assert_eq!(parsed.args, ["--", "-x"]);

		// Empty input is fine.
		assert_eq!(scan(&[], "", &[]), Ok(Parsed::default()));

		// An empty string counts as positional.
		let parsed = scan(&["", "-x"], "x", &[]).expect("Scan failed.");
		assert_eq!(parsed.args, ["", "-x"]);
	}

	#[test]
	fn t_scan_long() {
		let long = ["help", "flag="];

		let parsed = scan(&["--flag", "value", "--help"], "", &long).expect("Scan failed.");
		assert_eq!(parsed.opts, opts(&[("--flag", "value"), ("--help", "")]));

		// Only the first = splits.
		let parsed = scan(&["--flag=a=b"], "", &long).expect("Scan failed.");
		assert_eq!(parsed.opts, opts(&[("--flag", "a=b")]));

		// An empty inline argument counts as no argument.
		let parsed = scan(&["--help="], "", &long).expect("Scan failed.");
		assert_eq!(parsed.opts, opts(&[("--help", "")]));
		let parsed = scan(&["--flag=", "value"], "", &long).expect("Scan failed.");
		assert_eq!(parsed.opts, opts(&[("--flag", "value")]));

		assert_eq!(
			scan(&["--flag=x"], "", &["flag"]),
			Err(GetoptError::UnexpectedArgument {
				option: "--flag".to_owned(),
				argument: "x".to_owned(),
			}),
		);
	}

	#[test]
	fn t_scan_missing() {
		assert_eq!(
			scan(&["-x"], "x:", &[]),
			Err(GetoptError::MissingArgument {
				option: "-x".to_owned(),
				found: Found::End,
			}),
		);
		assert_eq!(
			scan(&["--flag"], "", &["flag="]),
			Err(GetoptError::MissingArgument {
				option: "--flag".to_owned(),
				found: Found::End,
			}),
		);
		assert_eq!(
			scan(&["-x", "--", "y"], "x:", &[]),
			Err(GetoptError::MissingArgument {
				option: "-x".to_owned(),
				found: Found::Separator,
			}),
		);
		assert_eq!(
			scan(&["-x", "-v"], "vx:", &[]),
			Err(GetoptError::MissingArgument {
				option: "-x".to_owned(),
				found: Found::Token("-v".to_owned()),
			}),
		);

		// Option-looking arguments are refused even if they aren't options.
		let err = scan(&["-x", "-5"], "x:", &[]).expect_err("Scan passed.");
		assert_eq!(err.kind(), ErrorKind::MissingArgument);

		// An empty argument is still an argument.
		let parsed = scan(&["-x", ""], "x:", &[]).expect("Scan failed.");
		assert_eq!(parsed.opts, opts(&[("-x", "")]));
	}

	#[test]
	fn t_scan_unknown() {
		assert_eq!(
			scan(&["-z"], "x", &[]),
			Err(GetoptError::UnknownOption("-z".to_owned())),
		);
		assert_eq!(
			scan(&["-xz"], "x", &[]),
			Err(GetoptError::UnknownOption("-z".to_owned())),
		);
		assert_eq!(
			scan(&["--nope"], "x", &["help"]),
			Err(GetoptError::UnknownOption("--nope".to_owned())),
		);
		assert_eq!(
			scan(&["--nope=1"], "x", &["help"]),
			Err(GetoptError::UnknownOption("--nope=1".to_owned())),
		);
		assert_eq!(
			scan(&["-"], "x", &[]),
			Err(GetoptError::UnknownOption("-".to_owned())),
		);

		// No abbreviations.
		assert_eq!(
			scan(&["--hel"], "", &["help"]),
			Err(GetoptError::UnknownOption("--hel".to_owned())),
		);
	}
}
