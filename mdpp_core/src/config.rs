use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::ArgumentPolicy;
use crate::MdppError;
use crate::MdppResult;

/// Default maximum include nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] = ["mdpp.toml", ".mdpp.toml", ".config/mdpp.toml"];

/// Configuration loaded from an `mdpp.toml` file.
///
/// ```toml
/// [include]
/// max_depth = 16
/// arguments = "strict"
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct MdppConfig {
	/// Settings for `!INCLUDE` directive resolution.
	#[serde(default)]
	pub include: IncludeConfig,
}

/// The `[include]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct IncludeConfig {
	/// Maximum nesting depth. An include nested deeper than this contributes
	/// nothing and is reported.
	#[serde(default = "default_max_depth")]
	pub max_depth: usize,
	/// Whether malformed `{key: value}` entries are skipped or fail the
	/// directive.
	#[serde(default)]
	pub arguments: ArgumentPolicy,
}

impl Default for IncludeConfig {
	fn default() -> Self {
		Self {
			max_depth: DEFAULT_MAX_DEPTH,
			arguments: ArgumentPolicy::default(),
		}
	}
}

fn default_max_depth() -> usize {
	DEFAULT_MAX_DEPTH
}

/// Options consumed by the include resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveOptions {
	pub max_depth: usize,
	pub arguments: ArgumentPolicy,
}

impl Default for ResolveOptions {
	fn default() -> Self {
		Self {
			max_depth: DEFAULT_MAX_DEPTH,
			arguments: ArgumentPolicy::default(),
		}
	}
}

impl From<&IncludeConfig> for ResolveOptions {
	fn from(config: &IncludeConfig) -> Self {
		Self {
			max_depth: config.max_depth,
			arguments: config.arguments,
		}
	}
}

impl MdppConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no config file exists.
	pub fn load(root: &Path) -> MdppResult<Option<MdppConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		let content = std::fs::read_to_string(&config_path)?;
		let config: MdppConfig =
			toml::from_str(&content).map_err(|e| MdppError::ConfigParse(e.to_string()))?;

		tracing::debug!(path = %config_path.display(), "loaded config");
		Ok(Some(config))
	}

	pub fn resolve_options(&self) -> ResolveOptions {
		ResolveOptions::from(&self.include)
	}
}
