/*!
# Getopt: Errors.

Every failure aborts the parse; there are no partial results. The variants
fall into two camps:

* Specification defects, i.e. mistakes in the option declarations the
  program itself supplied ([`GetoptError::DuplicateOption`]);
* Usage errors, i.e. bad input from whoever ran the program (everything
  else).

Use [`GetoptError::is_spec_defect`] or [`GetoptError::kind`] to tell them
apart.
*/

use std::{
	ffi::OsString,
	fmt,
};
use thiserror::Error;



#[derive(Debug, Clone, Eq, PartialEq, Error)]
/// # Error!
pub enum GetoptError {
	/// # Duplicate Option.
	///
	/// The same flag was declared more than once in the short or long
	/// option descriptor.
	#[error("option {0} is declared more than once")]
	DuplicateOption(String),

	/// # Unknown Option.
	///
	/// An argument looked like an option but matched no declared flag.
	#[error("unknown option: {0}")]
	UnknownOption(String),

	/// # Missing Argument.
	///
	/// An argument-taking flag was not followed by a usable argument.
	#[error("expected an argument for {option}, got {found}")]
	MissingArgument {
		/// # The flag.
		option: String,

		/// # What turned up instead.
		found: Found,
	},

	/// # Unexpected Argument.
	///
	/// A long option that takes no argument was given one via `=`.
	#[error("option {option} does not take an argument, got {argument:?}")]
	UnexpectedArgument {
		/// # The flag.
		option: String,

		/// # The inline argument.
		argument: String,
	},

	/// # Invalid UTF-8.
	///
	/// An environment argument could not be converted to a `String`. The
	/// raw value is kept in case you want to dig deeper.
	#[error("argument is not valid UTF-8: {0:?}")]
	InvalidUtf8(OsString),
}

impl GetoptError {
	#[must_use]
	/// # Kind.
	///
	/// Return the data-less [`ErrorKind`] for this error, handy for
	/// matching.
	pub const fn kind(&self) -> ErrorKind {
		match self {
			Self::DuplicateOption(_) => ErrorKind::DuplicateOption,
			Self::UnknownOption(_) => ErrorKind::UnknownOption,
			Self::MissingArgument { .. } => ErrorKind::MissingArgument,
			Self::UnexpectedArgument { .. } => ErrorKind::UnexpectedArgument,
			Self::InvalidUtf8(_) => ErrorKind::InvalidUtf8,
		}
	}

	#[must_use]
	/// # Specification Defect?
	///
	/// Returns `true` if the error stems from the option declarations rather
	/// than the arguments being parsed.
	pub const fn is_spec_defect(&self) -> bool { self.kind().is_spec_defect() }

	#[must_use]
	/// # Option.
	///
	/// Return the offending flag, if any.
	pub fn option(&self) -> Option<&str> {
		match self {
			Self::DuplicateOption(s)
				| Self::UnknownOption(s)
				| Self::MissingArgument { option: s, .. }
				| Self::UnexpectedArgument { option: s, .. } => Some(s),
			Self::InvalidUtf8(_) => None,
		}
	}

	#[must_use]
	/// # Exit code.
	///
	/// Usage errors map to `1`. Specification defects map to `101`, the
	/// same status a panicking program exits with.
	pub const fn exit_code(&self) -> i32 {
		if self.is_spec_defect() { 101 }
		else { 1 }
	}

	#[must_use]
	/// # As Str.
	///
	/// Return a generic description of the error kind.
	pub const fn as_str(&self) -> &'static str { self.kind().as_str() }
}



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # Error Kind.
///
/// This is the data-less counterpart to [`GetoptError`].
pub enum ErrorKind {
	/// # Duplicate Option.
	DuplicateOption,

	/// # Unknown Option.
	UnknownOption,

	/// # Missing Argument.
	MissingArgument,

	/// # Unexpected Argument.
	UnexpectedArgument,

	/// # Invalid UTF-8.
	InvalidUtf8,
}

impl AsRef<str> for ErrorKind {
	#[inline]
	fn as_ref(&self) -> &str { self.as_str() }
}

impl fmt::Display for ErrorKind {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl ErrorKind {
	#[must_use]
	/// # Specification Defect?
	pub const fn is_spec_defect(self) -> bool {
		matches!(self, Self::DuplicateOption)
	}

	#[must_use]
	/// # As Str.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::DuplicateOption => "Duplicate option declaration.",
			Self::UnknownOption => "Unknown option.",
			Self::MissingArgument => "Missing option argument.",
			Self::UnexpectedArgument => "Unexpected option argument.",
			Self::InvalidUtf8 => "Invalid UTF-8.",
		}
	}
}



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Found Instead.
///
/// This describes what occupied the spot where a
/// [`GetoptError::MissingArgument`] argument should have been.
pub enum Found {
	/// # The arguments ran out.
	End,

	/// # The `--` separator.
	Separator,

	/// # An option-looking argument.
	Token(String),

	/// # More short flags in the same cluster.
	///
	/// Argument-taking short flags can only appear at the end of a cluster
	/// like `-abc`; this holds whatever followed.
	Stacked(String),
}

impl fmt::Display for Found {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::End => f.write_str("end of args"),
			Self::Separator => f.write_str("--"),
			Self::Token(s) => write!(f, "{s:?}"),
			Self::Stacked(s) => write!(f, "stacked flags {s:?}"),
		}
	}
}
