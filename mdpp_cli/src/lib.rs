use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Expand `!INCLUDE` directives in markdown documents.",
	long_about = "mdpp is a markdown preprocessor that stitches documents together from \
	              smaller files.\n\nA line such as `!INCLUDE \"chapter.md\", 1 {name: World}` is \
	              replaced by the contents of chapter.md, with nested includes expanded, \
	              headings demoted by one level, and `{{ name }}` placeholders filled \
	              in.\n\nQuick start:\n  mdpp expand index.md -o book.md  Write the expanded \
	              document\n  mdpp check index.md book.md      Verify the output is up to date"
)]
pub struct MdppCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Path to the project root directory, where `mdpp.toml` is looked up.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Expand all include directives in a document.
	///
	/// Relative include paths are resolved against the directory of the file
	/// that contains the directive. Includes that cannot be read are reported
	/// as warnings and removed from the output.
	Expand {
		/// The markdown document to expand.
		input: PathBuf,

		/// Write the expanded document to this file instead of stdout.
		#[arg(long, short)]
		output: Option<PathBuf>,
	},
	/// Check that a previously expanded document is up to date.
	///
	/// Expands the input document and compares the result with the expected
	/// file. Exits with a non-zero status code when they differ, which makes
	/// it suitable for CI pipelines.
	Check {
		/// The markdown document to expand.
		input: PathBuf,

		/// The file holding the previously expanded output.
		expected: PathBuf,

		/// Show a line diff between the expected file and the fresh
		/// expansion.
		#[arg(long, default_value_t = false)]
		diff: bool,
	},
}
