use std::collections::HashMap;

use regex::Captures;
use serde::Deserialize;

use crate::MdppError;
use crate::MdppResult;
use crate::patterns::PLACEHOLDER;

/// How argument entries without a `key: value` shape are treated.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ArgumentPolicy {
	/// Skip malformed entries and log a warning.
	#[default]
	Lenient,
	/// Fail the whole directive on the first malformed entry.
	Strict,
}

/// Template arguments attached to a directive, keyed by name.
///
/// Later occurrences of a key replace earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMap {
	values: HashMap<String, String>,
}

impl ArgumentMap {
	/// Parse the text found between the argument braces, e.g.
	/// `name: value, other: value2`.
	///
	/// Each comma separated entry is split on its first colon and both halves
	/// are trimmed. Blank entries (such as a trailing comma) are ignored.
	pub fn parse(raw: &str, policy: ArgumentPolicy) -> MdppResult<Self> {
		let mut values = HashMap::new();

		for entry in raw.split(',') {
			match parse_entry(entry) {
				Ok(None) => {}
				Ok(Some((key, value))) => {
					values.insert(key.to_string(), value.to_string());
				}
				Err(error) if policy == ArgumentPolicy::Lenient => {
					tracing::warn!("skipping include argument: {error}");
				}
				Err(error) => return Err(error),
			}
		}

		Ok(Self { values })
	}

	pub fn get(&self, key: &str) -> Option<&str> {
		self.values.get(key).map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Replace every `{{ key }}` placeholder in `line` with its value.
	///
	/// The line is scanned once, so placeholders that appear inside a
	/// substituted value are kept as written. Placeholders without a matching
	/// key are left verbatim.
	pub fn substitute(&self, line: &str) -> String {
		if self.is_empty() || !line.contains("{{") {
			return line.to_string();
		}

		PLACEHOLDER
			.replace_all(line, |captures: &Captures<'_>| {
				match self.get(&captures[1]) {
					Some(value) => value.to_string(),
					None => captures[0].to_string(),
				}
			})
			.into_owned()
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ArgumentMap {
	fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
		Self {
			values: iter
				.into_iter()
				.map(|(key, value)| (key.into(), value.into()))
				.collect(),
		}
	}
}

fn parse_entry(entry: &str) -> MdppResult<Option<(&str, &str)>> {
	if entry.trim().is_empty() {
		return Ok(None);
	}

	let Some((key, value)) = entry.split_once(':') else {
		return Err(MdppError::MalformedArgument {
			entry: entry.trim().to_string(),
			reason: "missing `:` between key and value".to_string(),
		});
	};

	let key = key.trim();
	if key.is_empty() {
		return Err(MdppError::MalformedArgument {
			entry: entry.trim().to_string(),
			reason: "the key is empty".to_string(),
		});
	}

	Ok(Some((key, value.trim())))
}
