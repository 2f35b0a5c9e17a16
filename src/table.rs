/*!
# Getopt: Option Tables.

This module turns the short and long option descriptors into lookup tables.
Tables are built fresh for every parse; nothing is cached between calls.
*/

use crate::GetoptError;
use std::{
	borrow::Borrow,
	cmp::Ordering,
	collections::BTreeSet,
};
use tracing::debug;



#[derive(Debug, Clone, Default, Eq, PartialEq)]
/// # Compiled Option Table.
///
/// This maps canonical flags — `-h`, `--flag`, etc. — to whether or not
/// they require an argument.
///
/// Tables are built with [`compile_short`] or [`compile_long`].
///
/// ## Examples
///
/// ```
/// let shorts = getopt::compile_short("hx:").unwrap();
/// assert_eq!(shorts.takes_argument("-h"), Some(false));
/// assert_eq!(shorts.takes_argument("-x"), Some(true));
/// assert_eq!(shorts.takes_argument("-z"), None);
/// ```
pub struct OptTable(BTreeSet<Decl>);

impl OptTable {
	#[must_use]
	/// # Takes Argument?
	///
	/// Returns `Some(true)` if `flag` requires an argument, `Some(false)` if
	/// it doesn't, or `None` if it isn't declared at all.
	pub fn takes_argument(&self, flag: &str) -> Option<bool> {
		self.0.get(flag).map(Decl::takes_argument)
	}

	#[must_use]
	/// # Contains?
	pub fn contains(&self, flag: &str) -> bool { self.0.contains(flag) }

	#[must_use]
	/// # Length.
	pub fn len(&self) -> usize { self.0.len() }

	#[must_use]
	/// # Is Empty?
	pub fn is_empty(&self) -> bool { self.0.is_empty() }

	/// # Iterate.
	///
	/// Return an iterator of flag/takes-argument pairs, ordered by flag.
	pub fn iter(&self) -> impl Iterator<Item=(&str, bool)> {
		self.0.iter().map(|d| (d.as_str(), d.takes_argument()))
	}

	/// # Insert.
	///
	/// Add a declaration, returning an error if the flag is already present.
	fn insert(&mut self, decl: Decl) -> Result<(), GetoptError> {
		if self.0.contains(decl.as_str()) {
			let flag = decl.into_string();
			debug!(option = %flag, "duplicate option declaration");
			Err(GetoptError::DuplicateOption(flag))
		}
		else {
			self.0.insert(decl);
			Ok(())
		}
	}
}



#[derive(Debug, Clone)]
/// # Declaration.
///
/// For equality/ordering purposes only the flag is compared; the variant is
/// irrelevant.
enum Decl {
	/// # Flag without argument.
	Switch(String),

	/// # Flag requiring an argument.
	WithArgument(String),
}

impl Borrow<str> for Decl {
	#[inline]
	fn borrow(&self) -> &str { self.as_str() }
}

impl Eq for Decl {}

impl Ord for Decl {
	#[inline]
	fn cmp(&self, other: &Self) -> Ordering { self.as_str().cmp(other.as_str()) }
}

impl PartialEq for Decl {
	#[inline]
	fn eq(&self, other: &Self) -> bool { self.as_str() == other.as_str() }
}

impl PartialOrd for Decl {
	#[inline]
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl Decl {
	/// # New.
	fn new(flag: String, argument: bool) -> Self {
		if argument { Self::WithArgument(flag) }
		else { Self::Switch(flag) }
	}

	/// # As String Slice.
	fn as_str(&self) -> &str {
		match self { Self::Switch(s) | Self::WithArgument(s) => s }
	}

	/// # Into String.
	fn into_string(self) -> String {
		match self { Self::Switch(s) | Self::WithArgument(s) => s }
	}

	/// # Takes Argument?
	const fn takes_argument(&self) -> bool { matches!(self, Self::WithArgument(_)) }
}



/// # Compile Short Options.
///
/// Each character in `desc` declares a flag `-<char>`; a character followed
/// by `:` requires an argument. For example, `"hx:r"` declares `-h`, `-x`
/// (with argument) and `-r`.
///
/// Colons with no flag character before them, e.g. a leading `:`, are
/// skipped.
///
/// ## Errors
///
/// Returns [`GetoptError::DuplicateOption`] if a character is declared more
/// than once.
pub fn compile_short(desc: &str) -> Result<OptTable, GetoptError> {
	let mut out = OptTable::default();
	let mut chars = desc.chars().peekable();
	while let Some(c) = chars.next() {
		if c == ':' { continue; }
		let argument = chars.peek() == Some(&':');
		out.insert(Decl::new(format!("-{c}"), argument))?;
	}

	debug!(count = out.len(), "compiled short options");
	Ok(out)
}

/// # Compile Long Options.
///
/// Each entry declares a flag `--<entry>`; an entry ending with `=` requires
/// an argument. For example, `["help", "flag="]` declares `--help` and
/// `--flag` (with argument).
///
/// Empty entries are ignored, and an empty list simply yields an empty
/// table.
///
/// ## Errors
///
/// Returns [`GetoptError::DuplicateOption`] if a name is declared more than
/// once.
pub fn compile_long<I, S>(desc: I) -> Result<OptTable, GetoptError>
where I: IntoIterator<Item=S>, S: AsRef<str> {
	let mut out = OptTable::default();
	for entry in desc {
		let entry = entry.as_ref();
		let (name, argument) = entry.strip_suffix('=')
			.map_or((entry, false), |name| (name, true));
		if name.is_empty() { continue; }
		out.insert(Decl::new(format!("--{name}"), argument))?;
	}

	debug!(count = out.len(), "compiled long options");
	Ok(out)
}
