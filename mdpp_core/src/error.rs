use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum MdppError {
	#[error(transparent)]
	#[diagnostic(code(mdpp::io_error))]
	Io(#[from] std::io::Error),

	#[error("unable to read included file `{}`: {source}", path.display())]
	#[diagnostic(
		code(mdpp::unresolvable_include),
		help("relative include paths are resolved against the directory of the including file")
	)]
	ReadInclude {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("cyclic include of `{}` (chain: {chain})", path.display())]
	#[diagnostic(
		code(mdpp::cyclic_include),
		help("remove the `!INCLUDE` directive that points back to one of its ancestors")
	)]
	CyclicInclude { path: PathBuf, chain: String },

	#[error("include of `{}` exceeds the maximum nesting depth of {limit}", path.display())]
	#[diagnostic(
		code(mdpp::include_depth_exceeded),
		help("raise `include.max_depth` in mdpp.toml or flatten the include chain")
	)]
	IncludeDepthExceeded { path: PathBuf, limit: usize },

	#[error("include of `{}` requests a depth shift of {shift}, more than the limit of {limit}", path.display())]
	#[diagnostic(
		code(mdpp::invalid_depth_shift),
		help("markdown has six heading levels, so a shift above {limit} cannot be represented")
	)]
	InvalidDepthShift {
		path: PathBuf,
		shift: usize,
		limit: usize,
	},

	#[error("malformed include argument `{entry}`: {reason}")]
	#[diagnostic(
		code(mdpp::malformed_argument),
		help("arguments are written as `{{key: value, other: value}}`")
	)]
	MalformedArgument { entry: String, reason: String },

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(mdpp::config_parse),
		help("check that mdpp.toml is valid TOML with an optional [include] section")
	)]
	ConfigParse(String),
}

pub type MdppResult<T> = Result<T, MdppError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
