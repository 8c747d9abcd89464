//! CLI entry point for estructura

use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use estructura::output::{DEFAULT_OUTPUT, DEFAULT_ROOT, DEFAULT_TITLE};
use estructura::{EstructuraError, ReportConfig, WalkerConfig, generate_report};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode, is_terminal: bool) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            is_terminal
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "estructura")]
#[command(about = "Write an indented outline of a directory tree to a text file")]
#[command(version)]
#[command(
    after_help = "Exit status is 0 on success and 1 on any error. A missing PATH is reported \
on stderr and counts as an error."
)]
struct Args {
    /// Directory to describe
    #[arg(default_value = DEFAULT_ROOT)]
    path: PathBuf,

    /// File to write the outline to (overwritten)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Title written above the outline
    #[arg(short, long, default_value = DEFAULT_TITLE)]
    title: String,

    /// Also skip entries matching NAME or glob pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore", value_name = "PATTERN")]
    ignore: Vec<String>,

    /// Do not skip the built-in names (.git, node_modules, build, ...)
    #[arg(long = "no-default-ignores")]
    no_default_ignores: bool,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// Do not descend into a symlinked directory that loops back to an ancestor
    #[arg(long = "guard-cycles")]
    guard_cycles: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

impl Args {
    fn report_config(&self) -> ReportConfig {
        let base = if self.no_default_ignores {
            WalkerConfig::empty()
        } else {
            WalkerConfig::default()
        };
        let walker = WalkerConfig {
            ignore_patterns: self.ignore.clone(),
            max_depth: self.level,
            guard_cycles: self.guard_cycles,
            ..base
        };
        ReportConfig {
            root: self.path.clone(),
            output: self.output.clone(),
            title: self.title.clone(),
            walker,
        }
    }
}

/// Print a status line with an optional colored marker.
fn print_status(
    stream: &mut StandardStream,
    marker: &str,
    color: Color,
    message: &str,
) -> std::io::Result<()> {
    stream.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(stream, "{}", marker)?;
    stream.reset()?;
    writeln!(stream, " {}", message)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = args.report_config();

    let choice = |is_terminal| {
        if should_use_color(args.color, is_terminal) {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        }
    };

    match generate_report(&config) {
        Ok(summary) => {
            log::debug!("{} entries written", summary.total());
            let mut stdout = StandardStream::stdout(choice(std::io::stdout().is_terminal()));
            let message = format!(
                "Archivo '{}' creado correctamente.",
                config.output.display()
            );
            if let Err(e) = print_status(&mut stdout, "✅", Color::Green, &message) {
                eprintln!("estructura: error writing output: {}", e);
                process::exit(1);
            }
        }
        Err(e @ EstructuraError::RootNotFound { .. }) => {
            let mut stderr = StandardStream::stderr(choice(std::io::stderr().is_terminal()));
            if let Err(err) = print_status(&mut stderr, "❌", Color::Red, &format!("ERROR: {}", e)) {
                eprintln!("estructura: error writing output: {}", err);
            }
            process::exit(1);
        }
        Err(e) => {
            eprintln!("estructura: {}", e);
            process::exit(1);
        }
    }
}
