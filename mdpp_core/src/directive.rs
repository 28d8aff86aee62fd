use std::path::Path;
use std::path::PathBuf;

use crate::patterns::INCLUDE;

/// A parsed `!INCLUDE` directive.
///
/// ```text
/// !INCLUDE "path/to/file" [, shift_count] [{key1: val1, key2: val2}]
/// ```
///
/// The path may be wrapped in double or single quotes. The directive must
/// occupy the whole line; directive syntax embedded mid-line is plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
	/// The referenced file, exactly as written between the quotes.
	pub path: String,
	/// Number of levels every heading in the included content is demoted by.
	pub depth_shift: usize,
	/// Raw text between the argument braces, if a block was given.
	pub arguments: Option<String>,
}

impl Directive {
	/// Match a single line against the directive syntax.
	///
	/// Returns `None` when the line is not an include directive.
	pub fn parse(line: &str) -> Option<Self> {
		let captures = INCLUDE.captures(line)?;
		let path = captures.get(1).or_else(|| captures.get(2))?.as_str();
		// Only overflow can fail here; saturate so the resolver reports it.
		let depth_shift = match captures.get(3) {
			Some(shift) => shift.as_str().parse().unwrap_or(usize::MAX),
			None => 0,
		};

		Some(Self {
			path: path.to_string(),
			depth_shift,
			arguments: captures.get(4).map(|args| args.as_str().to_string()),
		})
	}

	/// Returns the path this directive refers to when written inside a file
	/// located in `base_dir`. Absolute paths are returned unchanged.
	pub fn target(&self, base_dir: &Path) -> PathBuf {
		let path = Path::new(&self.path);
		if path.is_absolute() {
			path.to_path_buf()
		} else {
			base_dir.join(path)
		}
	}
}

/// Returns `true` when `line` is an include directive.
pub fn is_directive(line: &str) -> bool {
	INCLUDE.is_match(line)
}
