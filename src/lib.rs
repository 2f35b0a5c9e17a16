/*!
# Getopt

This crate provides traditional getopt-style option parsing: single-dash
short options that can be clustered (`-abc`), double-dash long options
(`--flag`, `--flag=value`), and the `--` end-of-options separator.

Accepted options are declared with two descriptors:

* A string of short flag characters, each optionally followed by `:` to
  require an argument, e.g. `"hvx:r"`;
* A list of long flag names, each optionally followed by `=` to require an
  argument, e.g. `["help", "flag="]`;

Parsing returns the recognized options — [`OptArg`] — in the order they
were encountered, plus any leftover arguments. Option recognition stops at
`--` or at the first argument that isn't an option. There's no
abbreviation of long options, no optional arguments, and no reordering of
positional arguments.

Errors come in two flavors: specification defects (a flag declared twice)
and usage errors (unknown options, missing or unexpected arguments). Use
[`getopt`] to get both back as [`GetoptError`] values, or
[`getopt_strict`] to panic on the former.



## Example

```
use getopt::GetoptError;

fn usage() -> &'static str { "Usage: program [-hv] [-x VALUE] FILE..." }

let res = getopt::getopt(
    ["-v", "-x", "asdf", "one.txt", "two.txt"],
    "hvx:",
    ["help", "version"],
);

match res {
    Ok(parsed) => {
        for opt in parsed.opts() {
            match opt.opt() {
                "-h" | "--help" => println!("{}", usage()),
                "-v" | "--version" => println!("Version 0.1"),
                "-x" => println!("X is {}", opt.arg()),
                _ => unreachable!(),
            }
        }
        assert_eq!(parsed.args(), ["one.txt", "two.txt"]);
    },
    Err(e) if e.is_spec_defect() => panic!("{e}"),
    Err(e) => {
        eprintln!("{e}\n{}", usage());
        std::process::exit(e.exit_code());
    },
}
```



## Logging

Compilation, scanning and failures emit [`tracing`](https://crates.io/crates/tracing)
events at the `debug` and `trace` levels. Nothing is printed unless the
program installs a subscriber.
*/

#![forbid(unsafe_code)]

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::allow_attributes,
	clippy::clone_on_ref_ptr,
	clippy::create_dir,
	clippy::filetype_is_file,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::impl_trait_in_params,
	clippy::lossy_float_literal,
	clippy::missing_assert_message,
	clippy::missing_docs_in_private_items,
	clippy::needless_raw_strings,
	clippy::panic_in_result_fn,
	clippy::pub_without_shorthand,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::string_to_string,
	clippy::todo,
	clippy::undocumented_unsafe_blocks,
	clippy::unneeded_field_pattern,
	clippy::unseparated_literal_suffix,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
)]

#![cfg_attr(docsrs, feature(doc_cfg))]



mod error;
mod optarg;
mod parse;
mod scan;
mod table;

pub use error::{
	ErrorKind,
	Found,
	GetoptError,
};
pub use optarg::{
	OptArg,
	Parsed,
};
pub use parse::{
	getopt,
	getopt_strict,
	Getopt,
};
pub use table::{
	compile_long,
	compile_short,
	OptTable,
};
