use std::path::Path;
use std::path::PathBuf;

use crate::ArgumentMap;
use crate::Directive;
use crate::MdppError;
use crate::MdppResult;
use crate::ResolveOptions;
use crate::headings::MAX_HEADING_LEVEL;
use crate::headings::shift_headings;
use crate::transform::terminate_like;

/// The largest depth shift a directive may request. Shifting a level 1
/// heading further would leave the levels markdown can express.
pub const MAX_DEPTH_SHIFT: usize = MAX_HEADING_LEVEL - 1;

/// Expands `!INCLUDE` directives into the lines of the files they reference.
///
/// Relative paths are resolved against the directory of the file containing
/// the directive, at every nesting level. Each call reads files fresh; nothing
/// is cached between calls.
#[derive(Debug, Clone, Default)]
pub struct IncludeResolver {
	options: ResolveOptions,
}

impl IncludeResolver {
	pub fn new(options: ResolveOptions) -> Self {
		Self { options }
	}

	pub fn options(&self) -> &ResolveOptions {
		&self.options
	}

	/// Resolve `directive`, found in a file located in `base_dir`, into the
	/// lines that replace it.
	///
	/// Failures are logged and produce an empty replacement, so a broken
	/// include removes itself from the output instead of aborting the build.
	pub fn resolve(&self, directive: &Directive, base_dir: &Path) -> Vec<String> {
		self.resolve_or_empty(directive, base_dir, &mut Vec::new(), 0)
	}

	/// Like [`IncludeResolver::resolve`] but returns the failure of the
	/// directive itself as an error. Failures of nested directives still
	/// degrade to empty replacements.
	pub fn try_resolve(&self, directive: &Directive, base_dir: &Path) -> MdppResult<Vec<String>> {
		self.resolve_in(directive, base_dir, &mut Vec::new(), 0)
	}

	pub(crate) fn resolve_or_empty(
		&self,
		directive: &Directive,
		base_dir: &Path,
		chain: &mut Vec<PathBuf>,
		depth: usize,
	) -> Vec<String> {
		match self.resolve_in(directive, base_dir, chain, depth) {
			Ok(lines) => lines,
			Err(error) => {
				tracing::warn!(directive = %directive.path, "{error}");
				Vec::new()
			}
		}
	}

	/// `chain` holds the canonical paths of every file currently being
	/// expanded, outermost first.
	fn resolve_in(
		&self,
		directive: &Directive,
		base_dir: &Path,
		chain: &mut Vec<PathBuf>,
		depth: usize,
	) -> MdppResult<Vec<String>> {
		let path = directive.target(base_dir);

		if depth >= self.options.max_depth {
			return Err(MdppError::IncludeDepthExceeded {
				path,
				limit: self.options.max_depth,
			});
		}

		if directive.depth_shift > MAX_DEPTH_SHIFT {
			return Err(MdppError::InvalidDepthShift {
				path,
				shift: directive.depth_shift,
				limit: MAX_DEPTH_SHIFT,
			});
		}

		let arguments = match &directive.arguments {
			Some(raw) => ArgumentMap::parse(raw, self.options.arguments)?,
			None => ArgumentMap::default(),
		};

		let content = std::fs::read_to_string(&path).map_err(|source| {
			MdppError::ReadInclude {
				path: path.clone(),
				source,
			}
		})?;

		let canonical = std::fs::canonicalize(&path).unwrap_or_else(|_| path.clone());
		if chain.contains(&canonical) {
			return Err(MdppError::CyclicInclude {
				chain: describe_chain(chain, &canonical),
				path,
			});
		}

		let nested_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
		let mut expanded = Vec::new();

		chain.push(canonical);
		for line in content.split_inclusive('\n') {
			match Directive::parse(line) {
				Some(nested) => {
					let included = self.resolve_or_empty(&nested, &nested_dir, chain, depth + 1);
					expanded.extend(terminate_like(included, line));
				}
				None => expanded.push(line.to_string()),
			}
		}
		chain.pop();

		let lines: Vec<String> = shift_headings(expanded, directive.depth_shift)
			.iter()
			.map(|line| arguments.substitute(line))
			.collect();

		tracing::debug!(
			path = %path.display(),
			depth,
			lines = lines.len(),
			"resolved include"
		);

		Ok(lines)
	}
}

fn describe_chain(chain: &[PathBuf], repeated: &Path) -> String {
	chain
		.iter()
		.map(PathBuf::as_path)
		.chain(std::iter::once(repeated))
		.map(|path| path.display().to_string())
		.collect::<Vec<_>>()
		.join(" -> ")
}
