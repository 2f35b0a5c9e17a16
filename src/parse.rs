/*!
# Getopt: Entry Points.
*/

use crate::{
	compile_long,
	compile_short,
	GetoptError,
	Parsed,
	scan::Scanner,
};



/// # Parse Options.
///
/// Parse `args` according to the `short` and `long` option descriptors,
/// returning the recognized options and leftover arguments.
///
/// `short` is a string of flag characters, each optionally followed by `:`
/// to require an argument, e.g. `"hvx:r"`. `long` is a list of flag names,
/// each optionally followed by `=` to require an argument, e.g.
/// `["help", "flag="]`. Either may be empty; use `None::<&str>` if you have
/// no long options at all.
///
/// Option recognition stops at `--` (which is dropped) or at the first
/// argument that isn't an option or option argument (which is kept). Either
/// way, everything after that point is returned as-is.
///
/// This never panics. Mistakes in the descriptors themselves are returned as
/// errors too; see [`GetoptError::is_spec_defect`].
///
/// ## Examples
///
/// ```
/// use getopt::OptArg;
///
/// let (args, opts) = getopt::getopt(
///     ["-h", "-v", "-x", "asdf", "-r", "--flag=arg", "--", "-x", "qwe"],
///     "hvx:r",
///     ["help", "flag="],
/// ).unwrap().into_parts();
///
/// assert_eq!(args, ["-x", "qwe"]);
/// assert_eq!(opts, [
///     OptArg::new("-h", ""),
///     OptArg::new("-v", ""),
///     OptArg::new("-x", "asdf"),
///     OptArg::new("-r", ""),
///     OptArg::new("--flag", "arg"),
/// ]);
/// ```
///
/// ## Errors
///
/// Returns an error if either descriptor declares the same flag twice, or
/// if `args` contains unknown options or missing/unexpected arguments.
pub fn getopt<A, S, L, S2>(args: A, short: &str, long: L)
-> Result<Parsed, GetoptError>
where
	A: IntoIterator<Item=S>,
	S: Into<String>,
	L: IntoIterator<Item=S2>,
	S2: AsRef<str>,
{
	let shorts = compile_short(short)?;
	let longs = compile_long(long)?;
	Scanner::new(&shorts, &longs).scan(args.into_iter().map(Into::<String>::into))
}

#[track_caller]
/// # Parse Options (Strict).
///
/// This works just like [`getopt`], except mistakes in the option
/// descriptors — which are hard-coded by the program, not supplied by the
/// user — trigger a panic instead of an error.
///
/// ## Examples
///
/// ```should_panic
/// // Oops, -h is declared twice!
/// let _res = getopt::getopt_strict(["-h"], "hh", None::<&str>);
/// ```
///
/// ## Errors
///
/// Returns an error if `args` contains unknown options or missing/unexpected
/// arguments.
///
/// ## Panics
///
/// Panics if either descriptor declares the same flag twice.
pub fn getopt_strict<A, S, L, S2>(args: A, short: &str, long: L)
-> Result<Parsed, GetoptError>
where
	A: IntoIterator<Item=S>,
	S: Into<String>,
	L: IntoIterator<Item=S2>,
	S2: AsRef<str>,
{
	strict(getopt(args, short, long))
}



#[derive(Debug, Clone, Default, Eq, PartialEq)]
/// # Option Descriptors.
///
/// This is a reusable, builder-style alternative to calling [`getopt`]
/// directly. It only stores the descriptors; they are compiled afresh every
/// time something is parsed.
///
/// ## Examples
///
/// ```
/// use getopt::{Getopt, OptArg};
///
/// let opts = Getopt::new("hvx:")
///     .with_long("help")
///     .with_long("output=");
///
/// let parsed = opts.parse(["-v", "--output", "out.txt", "in.txt"]).unwrap();
/// assert_eq!(parsed.args(), ["in.txt"]);
/// assert_eq!(parsed.opts(), [
///     OptArg::new("-v", ""),
///     OptArg::new("--output", "out.txt"),
/// ]);
/// ```
pub struct Getopt {
	/// # Short Descriptor.
	short: String,

	/// # Long Descriptor.
	long: Vec<String>,
}

impl Getopt {
	#[must_use]
	/// # New.
	///
	/// Start with a short option descriptor like `"hvx:r"`.
	pub fn new<S: Into<String>>(short: S) -> Self {
		Self {
			short: short.into(),
			long: Vec::new(),
		}
	}

	#[must_use]
	/// # With Long Option.
	///
	/// Add a long option like `"help"` or `"flag="`.
	pub fn with_long<S: Into<String>>(mut self, long: S) -> Self {
		self.long.push(long.into());
		self
	}

	#[must_use]
	/// # With Long Options.
	///
	/// Add any number of long options.
	pub fn with_longs<I, S>(mut self, long: I) -> Self
	where I: IntoIterator<Item=S>, S: Into<String> {
		self.long.extend(long.into_iter().map(Into::<String>::into));
		self
	}

	#[must_use]
	/// # Short Descriptor.
	pub fn short(&self) -> &str { &self.short }

	#[must_use]
	/// # Long Descriptor.
	pub fn long(&self) -> &[String] { &self.long }

	/// # Parse.
	///
	/// See [`getopt`] for details.
	///
	/// ## Errors
	///
	/// Returns an error if the descriptors declare the same flag twice, or if
	/// `args` contains unknown options or missing/unexpected arguments.
	pub fn parse<A, S>(&self, args: A) -> Result<Parsed, GetoptError>
	where A: IntoIterator<Item=S>, S: Into<String> {
		getopt(args, &self.short, &self.long)
	}

	#[track_caller]
	/// # Parse (Strict).
	///
	/// See [`getopt_strict`] for details.
	///
	/// ## Errors
	///
	/// Returns an error if `args` contains unknown options or
	/// missing/unexpected arguments.
	///
	/// ## Panics
	///
	/// Panics if the descriptors declare the same flag twice.
	pub fn parse_strict<A, S>(&self, args: A) -> Result<Parsed, GetoptError>
	where A: IntoIterator<Item=S>, S: Into<String> {
		strict(self.parse(args))
	}

	/// # Parse Environment Arguments.
	///
	/// Parse [`std::env::args_os`], skipping the first (command path) entry.
	///
	/// ## Errors
	///
	/// In addition to the usual [`Getopt::parse`] errors, this returns
	/// [`GetoptError::InvalidUtf8`] if any argument isn't valid UTF-8.
	pub fn parse_env(&self) -> Result<Parsed, GetoptError> {
		self.parse(env_args()?)
	}
}



/// # Environment Arguments.
///
/// Collect [`std::env::args_os`] as strings, skipping the first entry.
fn env_args() -> Result<Vec<String>, GetoptError> {
	std::env::args_os()
		.skip(1)
		.map(|a| a.into_string().map_err(GetoptError::InvalidUtf8))
		.collect()
}

#[track_caller]
#[expect(clippy::panic_in_result_fn, reason = "Specification defects are programmer errors.")]
/// # Strict Result.
///
/// Panic on specification defects, pass everything else through.
fn strict(res: Result<Parsed, GetoptError>) -> Result<Parsed, GetoptError> {
	match res {
		Err(e) if e.is_spec_defect() => panic!("invalid option specification: {e}"),
		res => res,
	}
}
