use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use mdpp_cli::Commands;
use mdpp_cli::MdppCli;
use mdpp_core::IncludeResolver;
use mdpp_core::MdppConfig;
use mdpp_core::ResolveOptions;
use owo_colors::OwoColorize;
use similar::ChangeTag;
use similar::TextDiff;
use tracing_subscriber::EnvFilter;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = MdppCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	// --verbose shows every resolved include, otherwise RUST_LOG or warnings
	// only.
	let filter = if args.verbose {
		EnvFilter::new("debug")
	} else {
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
	};
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.init();

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	let result = match &args.command {
		Some(Commands::Expand { input, output }) => run_expand(&args, input, output.as_deref()),
		Some(Commands::Check {
			input,
			expected,
			diff,
		}) => run_check(&args, input, expected, *diff),
		None => {
			eprintln!("No subcommand specified. Run `mdpp --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		// Try to render through miette for rich diagnostics with help text
		// and error codes.
		match e.downcast::<mdpp_core::MdppError>() {
			Ok(mdpp_err) => {
				let report: miette::Report = (*mdpp_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

fn resolve_root(args: &MdppCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn load_resolver(args: &MdppCli) -> Result<IncludeResolver, Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let options = MdppConfig::load(&root)?
		.map_or_else(ResolveOptions::default, |config| config.resolve_options());

	Ok(IncludeResolver::new(options))
}

fn run_expand(
	args: &MdppCli,
	input: &Path,
	output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
	let resolver = load_resolver(args)?;
	let expanded = resolver.expand_file(input)?;

	match output {
		Some(path) => {
			std::fs::write(path, &expanded)?;
			if args.verbose {
				eprintln!("Wrote {}", path.display());
			}
		}
		None => print!("{expanded}"),
	}

	Ok(())
}

fn run_check(
	args: &MdppCli,
	input: &Path,
	expected: &Path,
	diff: bool,
) -> Result<(), Box<dyn std::error::Error>> {
	let resolver = load_resolver(args)?;
	let expanded = resolver.expand_file(input)?;
	let current = std::fs::read_to_string(expected)?;

	if current == expanded {
		println!("{} is up to date.", expected.display());
		return Ok(());
	}

	eprintln!(
		"{} {} is out of date with {}",
		colored!("stale:", red),
		expected.display(),
		input.display()
	);
	if diff {
		print_diff(&current, &expanded);
	}
	eprintln!("\nRun `mdpp expand` to regenerate it.");
	process::exit(1);
}

/// Print a unified diff between two strings, colorized.
fn print_diff(current: &str, expected: &str) {
	let diff = TextDiff::from_lines(current, expected);
	for change in diff.iter_all_changes() {
		match change.tag() {
			ChangeTag::Delete => {
				eprint!("  {}", colored!(format!("-{change}"), red));
			}
			ChangeTag::Insert => {
				eprint!("  {}", colored!(format!("+{change}"), green));
			}
			ChangeTag::Equal => {
				eprint!("   {change}");
			}
		}
	}
}
