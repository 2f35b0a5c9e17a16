/*!
# Getopt: Parse Results.
*/

use std::fmt;



#[derive(Debug, Clone, Default, Eq, Hash, PartialEq)]
/// # Parsed Option.
///
/// A recognized flag — `-x`, `--flag`, etc. — along with its argument.
/// Flags that take no argument have an empty one.
pub struct OptArg {
	/// # Flag.
	pub option: String,

	/// # Argument.
	pub argument: String,
}

impl fmt::Display for OptArg {
	/// # Display.
	///
	/// Render the option the way it could have been typed.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.argument.is_empty() { f.write_str(&self.option) }
		else if self.option.starts_with("--") {
			write!(f, "{}={}", self.option, self.argument)
		}
		else { write!(f, "{} {}", self.option, self.argument) }
	}
}

impl OptArg {
	#[must_use]
	/// # New.
	pub fn new<S1, S2>(option: S1, argument: S2) -> Self
	where S1: Into<String>, S2: Into<String> {
		Self {
			option: option.into(),
			argument: argument.into(),
		}
	}

	#[must_use]
	/// # Option.
	pub fn opt(&self) -> &str { &self.option }

	#[must_use]
	/// # Argument.
	pub fn arg(&self) -> &str { &self.argument }

	#[must_use]
	/// # Has Argument?
	pub fn has_argument(&self) -> bool { ! self.argument.is_empty() }
}



#[derive(Debug, Clone, Default, Eq, PartialEq)]
/// # Parse Result.
///
/// This holds the recognized options in the order they were encountered
/// alongside the leftover (positional) arguments.
///
/// ## Examples
///
/// ```
/// let parsed = getopt::getopt(["-v", "file.txt"], "v", None::<&str>).unwrap();
/// let (args, opts) = parsed.into_parts();
/// assert_eq!(args, ["file.txt"]);
/// assert_eq!(opts, [getopt::OptArg::new("-v", "")]);
/// ```
pub struct Parsed {
	/// # Leftover Arguments.
	pub args: Vec<String>,

	/// # Options.
	pub opts: Vec<OptArg>,
}

impl Parsed {
	#[must_use]
	/// # Leftover Arguments.
	pub fn args(&self) -> &[String] { &self.args }

	#[must_use]
	/// # Options.
	pub fn opts(&self) -> &[OptArg] { &self.opts }

	#[must_use]
	/// # Into Parts.
	///
	/// Split into leftover arguments and options.
	pub fn into_parts(self) -> (Vec<String>, Vec<OptArg>) { (self.args, self.opts) }
}
