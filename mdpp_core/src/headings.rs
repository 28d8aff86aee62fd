use crate::patterns::TITLE;

/// The deepest heading level markdown can express.
pub const MAX_HEADING_LEVEL: usize = 6;

/// The heading role a single line plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingKind {
	/// Not part of a heading marker.
	Plain,
	/// A line introduced by one or more `#` characters.
	Atx,
	/// A `===` underline, making the previous line a level 1 heading.
	SetextPrimary,
	/// A `---` underline, making the previous line a level 2 heading.
	SetextSecondary,
}

/// Classify every line of a buffer.
///
/// A run of `=` or `-` only counts as a Setext underline when the line before
/// it is plain text. Otherwise it is a thematic break and stays plain.
pub fn classify<S: AsRef<str>>(lines: &[S]) -> Vec<HeadingKind> {
	let mut kinds: Vec<HeadingKind> = Vec::with_capacity(lines.len());

	for (index, line) in lines.iter().enumerate() {
		let trimmed = line.as_ref().trim_end();
		let kind = if !TITLE.is_match(trimmed) {
			HeadingKind::Plain
		} else if trimmed.starts_with('#') {
			HeadingKind::Atx
		} else if !has_heading_text(lines, &kinds, index) {
			HeadingKind::Plain
		} else if trimmed.starts_with('=') {
			HeadingKind::SetextPrimary
		} else {
			HeadingKind::SetextSecondary
		};
		kinds.push(kind);
	}

	kinds
}

fn has_heading_text<S: AsRef<str>>(lines: &[S], kinds: &[HeadingKind], index: usize) -> bool {
	let Some(previous) = index.checked_sub(1) else {
		return false;
	};

	kinds[previous] == HeadingKind::Plain && !lines[previous].as_ref().trim().is_empty()
}

/// Demote every heading in `lines` by `shift` levels.
///
/// - ATX headings gain `shift` extra `#` characters, up to
///   [`MAX_HEADING_LEVEL`] in total.
/// - A `===` underline becomes `---` for the first unit of shift.
/// - A `---` underline folds into its text line, which becomes `### text`.
///   This is the deepest level Setext can reach so any remaining shift is
///   dropped.
pub fn shift_headings(lines: Vec<String>, shift: usize) -> Vec<String> {
	if shift == 0 {
		return lines;
	}

	let kinds = classify(&lines);
	let mut output: Vec<String> = Vec::with_capacity(lines.len());

	for (line, kind) in lines.into_iter().zip(kinds) {
		match kind {
			HeadingKind::Plain => output.push(line),
			HeadingKind::Atx => {
				let level = line.chars().take_while(|c| *c == '#').count();
				let extra = shift.min(MAX_HEADING_LEVEL.saturating_sub(level));
				tracing::trace!(shift, extra, "shifting atx heading");
				output.push(format!("{}{line}", "#".repeat(extra)));
			}
			HeadingKind::SetextPrimary | HeadingKind::SetextSecondary => {
				shift_setext(&mut output, line, kind, shift);
			}
		}
	}

	output
}

/// Apply `shift` units to a Setext underline. The heading text is the last
/// line already pushed to `output`.
fn shift_setext(
	output: &mut Vec<String>,
	mut underline: String,
	mut kind: HeadingKind,
	shift: usize,
) {
	for _ in 0..shift {
		if kind == HeadingKind::SetextPrimary {
			tracing::trace!("demoting setext level 1 underline");
			underline = underline.replace('=', "-");
			kind = HeadingKind::SetextSecondary;
			continue;
		}

		if let Some(text) = output.pop() {
			tracing::trace!("folding setext level 2 heading into atx level 3");
			output.push(format!("### {text}"));
			return;
		}
	}

	output.push(underline);
}
