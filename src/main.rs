//! px2-syntax - highlight px2 source in the terminal

use std::env;
use std::fs;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use px2_syntax::config::Config;
use px2_syntax::render::{render_source, write_token_listing};
use px2_syntax::scanner::Scanner;
use px2_syntax::syntax::SyntaxEngine;
use px2_syntax::{Result, SyntaxError};

/// The single buffer this host opens
const BUFFER: usize = 0;

/// Parsed command line
#[derive(Debug, Default)]
struct Options {
    file: Option<PathBuf>,
    config: Option<PathBuf>,
    tokens: bool,
    no_color: bool,
}

fn main() {
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Log to stderr, only when RUST_LOG is set
fn init_tracing() {
    if env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn run(args: &[String]) -> Result<()> {
    let Some(options) = parse_args(args)? else {
        return Ok(());
    };
    let Some(path) = options.file else {
        print_usage();
        return Err(SyntaxError::Message("no input file".to_string()));
    };

    let config = match &options.config {
        Some(config_path) => Config::from_file(config_path)?,
        None => Config::load(),
    };

    let mut engine = SyntaxEngine::new(config.category_table()?);
    engine.enabled = config.enabled;
    engine.open_buffer(BUFFER);
    engine.install(BUFFER);

    let source = fs::read_to_string(&path)?;
    let lexemes = Scanner::new(&source).scan_all();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if options.tokens {
        return write_token_listing(&mut out, &lexemes, &engine);
    }

    let theme = config.theme()?;
    let color = config.color && !options.no_color && io::stdout().is_terminal();
    let spans = engine.highlight(BUFFER, lexemes.iter().map(|l| l.token));
    render_source(&mut out, &source, &spans, &theme, color)
}

/// Parse arguments; `None` means the request was fully handled (help/version)
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
            "--tokens" | "-t" => options.tokens = true,
            "--no-color" => options.no_color = true,
            "--config" | "-c" => {
                let path = iter
                    .next()
                    .ok_or_else(|| SyntaxError::Message(format!("{} needs a path", arg)))?;
                options.config = Some(PathBuf::from(path));
            }
            other if other.starts_with('-') => {
                return Err(SyntaxError::Message(format!("unknown option: {}", other)));
            }
            file => {
                if options.file.is_some() {
                    return Err(SyntaxError::Message(format!("unexpected argument: {}", file)));
                }
                options.file = Some(PathBuf::from(file));
            }
        }
    }

    Ok(Some(options))
}

fn print_usage() {
    println!("px2-syntax {} - px2 syntax highlighter", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: px2-syntax [OPTIONS] FILE");
    println!();
    println!("Options:");
    println!("  -t, --tokens         List tokens with their category and role");
    println!("  -c, --config PATH    Read settings from PATH instead of ~/.px2-syntax.toml");
    println!("      --no-color       Write the source without styling");
    println!("  -h, --help           Show this help message");
    println!("  -V, --version        Show version information");
    println!();
    println!("Set RUST_LOG=debug to trace engine installation.");
}

fn print_version() {
    println!("px2-syntax {}", env!("CARGO_PKG_VERSION"));
}
