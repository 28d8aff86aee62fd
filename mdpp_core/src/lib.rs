//! `mdpp_core` is the core library for the mdpp markdown preprocessor. It
//! expands `!INCLUDE` directives: the referenced file is read, its own
//! directives are expanded recursively, its headings are optionally demoted to
//! fit under the including document, and `{{ key }}` placeholders are filled
//! from the directive's arguments.
//!
//! ## Directive Syntax
//!
//! ```text
//! !INCLUDE "path/to/file.md"
//! !INCLUDE 'chapters/intro.md', 1
//! !INCLUDE "card.md", 2 {name: World, role: maintainer}
//! ```
//!
//! The directive must be the whole line. Relative paths are resolved against
//! the directory of the file that contains the directive.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Document line
//!   → Directive matcher (recognizes `!INCLUDE`, extracts path, shift, arguments)
//!   → Include resolver (reads the file, expands nested directives)
//!   → Heading shifter (demotes ATX and Setext headings by the shift count)
//!   → Argument substitution (replaces `{{ key }}` placeholders)
//!   → Transform record (line number + replacement lines)
//! ```
//!
//! ## Modules
//!
//! - [`config`] — Configuration loading from `mdpp.toml`.
//! - [`headings`] — Heading classification and shifting.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use mdpp_core::IncludeResolver;
//! use mdpp_core::ResolveOptions;
//!
//! let resolver = IncludeResolver::new(ResolveOptions::default());
//! let expanded = resolver.expand_file(Path::new("docs/index.md")).unwrap();
//! print!("{expanded}");
//! ```

pub use arguments::*;
pub use config::*;
pub use directive::*;
pub use error::*;
pub use resolver::*;
pub use transform::*;

mod arguments;
pub mod config;
mod directive;
#[allow(unused_assignments)]
mod error;
pub mod headings;
pub(crate) mod patterns;
mod resolver;
mod transform;
