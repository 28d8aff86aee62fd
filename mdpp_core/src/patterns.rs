use std::sync::LazyLock;

use regex::Regex;

/// Matches a complete `!INCLUDE` line.
///
/// Groups: `1` double-quoted path, `2` single-quoted path, `3` optional
/// depth shift, `4` optional argument text between the braces.
pub(crate) static INCLUDE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(
		r#"^\s*!INCLUDE\s+(?:"([^"]+)"|'([^']+)')(?:\s*,\s*(\d+))?(?:\s*\{(.*?)\})?\s*$"#,
	)
	.expect("include pattern is valid")
});

/// Matches a line that may belong to a heading: an ATX marker or a Setext
/// underline.
pub(crate) static TITLE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^(?:#+.*|={3,}|-{3,})$").expect("title pattern is valid"));

/// Matches a `{{ key }}` placeholder, capturing the key without its padding.
pub(crate) static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"\{\{\s*([^{}]*?)\s*\}\}").expect("placeholder pattern is valid")
});
