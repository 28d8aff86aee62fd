use std::path::Path;
use std::path::PathBuf;

use crate::Directive;
use crate::IncludeResolver;
use crate::MdppError;
use crate::MdppResult;

/// Priority of the include transform. Lower runs first; includes must be
/// expanded before any other transform sees the document.
pub const INCLUDE_PRIORITY: u32 = 0;

/// The edit a [`Transform`] applies to its line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum TransformOperation {
	/// Replace the line with the transform's data.
	Swap,
}

/// A pending edit to a document, recorded during a scan and applied once the
/// scan is complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transform {
	/// Zero-based index of the directive line in the scanned document.
	pub line: usize,
	pub operation: TransformOperation,
	/// Lines that replace the directive. Empty when the include failed.
	pub data: Vec<String>,
}

impl IncludeResolver {
	/// Scan a top-level document and record a swap for every include
	/// directive. `base_dir` is the directory relative includes are resolved
	/// against.
	pub fn transform<S: AsRef<str>>(&self, lines: &[S], base_dir: &Path) -> Vec<Transform> {
		self.transform_in(lines, base_dir, &mut Vec::new())
	}

	fn transform_in<S: AsRef<str>>(
		&self,
		lines: &[S],
		base_dir: &Path,
		chain: &mut Vec<PathBuf>,
	) -> Vec<Transform> {
		lines
			.iter()
			.enumerate()
			.filter_map(|(line, text)| {
				let directive = Directive::parse(text.as_ref())?;
				let data = self.resolve_or_empty(&directive, base_dir, chain, 0);
				Some(Transform {
					line,
					operation: TransformOperation::Swap,
					data: terminate_like(data, text.as_ref()),
				})
			})
			.collect()
	}

	/// Expand every include directive in `content`, resolving relative paths
	/// against `base_dir`.
	pub fn expand_str(&self, content: &str, base_dir: &Path) -> String {
		let lines = split_lines(content);
		let transforms = self.transform(&lines, base_dir);
		apply_transforms(lines, &transforms).concat()
	}

	/// Read the document at `path` and expand its include directives.
	/// Relative includes are resolved against the document's directory, and
	/// an include that leads back to the document itself is rejected as a
	/// cycle.
	pub fn expand_file(&self, path: &Path) -> MdppResult<String> {
		let content = std::fs::read_to_string(path).map_err(|source| {
			MdppError::ReadInclude {
				path: path.to_path_buf(),
				source,
			}
		})?;
		let canonical = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
		let base_dir = path.parent().unwrap_or_else(|| Path::new(""));

		let lines = split_lines(&content);
		let transforms = self.transform_in(&lines, base_dir, &mut vec![canonical]);
		tracing::debug!(
			path = %path.display(),
			directives = transforms.len(),
			"expanded document"
		);

		Ok(apply_transforms(lines, &transforms).concat())
	}
}

/// Split text into lines, keeping each line's terminator.
pub fn split_lines(content: &str) -> Vec<String> {
	content.split_inclusive('\n').map(str::to_string).collect()
}

/// End the last of `lines` with the terminator of the directive line they
/// replace, so an included file without a final newline does not run into the
/// line that follows the directive.
pub(crate) fn terminate_like(mut lines: Vec<String>, directive_line: &str) -> Vec<String> {
	let terminator = if directive_line.ends_with("\r\n") {
		"\r\n"
	} else if directive_line.ends_with('\n') {
		"\n"
	} else {
		return lines;
	};

	if let Some(last) = lines.last_mut() {
		if !last.ends_with('\n') {
			last.push_str(terminator);
		}
	}

	lines
}

/// Apply recorded transforms to `lines`.
///
/// Transforms are applied from the last line to the first so the indices of
/// records not yet applied stay valid. Records pointing past the end of the
/// document are ignored.
pub fn apply_transforms(mut lines: Vec<String>, transforms: &[Transform]) -> Vec<String> {
	let mut ordered: Vec<&Transform> = transforms.iter().collect();
	ordered.sort_by(|a, b| b.line.cmp(&a.line));

	for transform in ordered {
		if transform.line >= lines.len() {
			tracing::warn!(line = transform.line, "transform is out of range");
			continue;
		}

		match transform.operation {
			TransformOperation::Swap => {
				lines.splice(transform.line..=transform.line, transform.data.iter().cloned());
			}
		}
	}

	lines
}
