//! restyle - style a source file from the command line
//!
//! Reads a file, styles all of it and prints it colourised, or lists
//! the emitted spans.

use std::env;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;

use tracing_subscriber::EnvFilter;

use restyle::terminal::{self, StyledWriter};
use restyle::{Config, Result, RestyleError, SourceBuffer};

/// Parsed command line
#[derive(Debug, Default)]
struct Options {
    config: Option<PathBuf>,
    profile: Option<String>,
    spans: bool,
    file: Option<PathBuf>,
}

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Log to stderr, filtered by RESTYLE_LOG (default `warn`)
fn init_tracing() {
    let filter = EnvFilter::try_from_env("RESTYLE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    let Some(options) = parse_args(&args)? else {
        return Ok(());
    };
    let Some(file) = options.file else {
        print_usage();
        return Err(RestyleError::Message("no input file".to_string()));
    };

    let mut config = match &options.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };
    if let Some(profile) = options.profile {
        config.profile = Some(profile);
    }
    let restyler = config.restyler()?;

    let mut buffer = SourceBuffer::from_file(&file)?;
    let spans = restyler.restyle_all(&mut buffer);
    tracing::debug!(file = %file.display(), spans = spans.len(), "styled");

    let stdout = io::stdout();
    if options.spans {
        terminal::write_span_listing(&mut stdout.lock(), &spans)?;
    } else {
        let chars: Vec<char> = buffer.text().chars().collect();
        let colored = use_color(stdout.is_terminal(), env::var_os("NO_COLOR").is_some());
        let mut writer = StyledWriter::new(stdout.lock(), colored);
        terminal::render(&mut writer, &chars, &restyle::syntax::coalesce(&spans))?;
    }

    Ok(())
}

/// Parse arguments; `None` when the request was fully handled (help, version)
fn parse_args(args: &[String]) -> Result<Option<Options>> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(None);
            }
            "--version" | "-V" => {
                print_version();
                return Ok(None);
            }
            "--spans" | "-s" => options.spans = true,
            "--config" | "-c" => {
                let path = iter.next().ok_or_else(|| missing_value(arg))?;
                options.config = Some(PathBuf::from(path));
            }
            "--profile" | "-p" => {
                let name = iter.next().ok_or_else(|| missing_value(arg))?;
                options.profile = Some(name.clone());
            }
            _ if arg.starts_with('-') => {
                return Err(RestyleError::Message(format!("unknown option: {}", arg)));
            }
            _ => {
                if options.file.is_some() {
                    return Err(RestyleError::Message(format!("unexpected argument: {}", arg)));
                }
                options.file = Some(PathBuf::from(arg));
            }
        }
    }

    Ok(Some(options))
}

/// Colour only a terminal, and never when NO_COLOR is set
fn use_color(is_terminal: bool, no_color: bool) -> bool {
    is_terminal && !no_color
}

fn missing_value(option: &str) -> RestyleError {
    RestyleError::Message(format!("{} needs a value", option))
}

fn print_usage() {
    println!("restyle {} - incremental lexical classifier", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: restyle [OPTIONS] FILE");
    println!();
    println!("Options:");
    println!("  -c, --config FILE     Read settings from FILE instead of ~/.restyle.toml");
    println!("  -p, --profile NAME    Use the built-in keyword profile NAME (csharp, none)");
    println!("  -s, --spans           List spans as `start length style` instead of colouring");
    println!("  -h, --help            Show this help message");
    println!("  -V, --version         Show version information");
    println!();
    println!("Output is coloured only on a terminal; set NO_COLOR to disable it.");
    println!("Set RESTYLE_LOG (e.g. RESTYLE_LOG=debug) to see scope decisions on stderr.");
}

fn print_version() {
    println!("restyle {}", env!("CARGO_PKG_VERSION"));
}
