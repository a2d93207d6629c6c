//! Squawk CLI entry point.

use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use squawk_foundation::Roster;
use squawk_parser::{MessageParser, ParserConfig, SenderPolicy};
use squawk_runtime::{Console, roster_file};
use tracing_subscriber::EnvFilter;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    roster: Option<PathBuf>,
    batch: Option<PathBuf>,
    json: bool,
    policy: SenderPolicy,
    verbose: bool,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();
    let mut args = args.into_iter().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-v" | "--verbose" => config.verbose = true,
            "--json" => config.json = true,
            "-r" | "--roster" => {
                let path = args.next().ok_or("--roster requires a file")?;
                config.roster = Some(PathBuf::from(path));
            }
            "-b" | "--batch" => {
                let path = args.next().ok_or("--batch requires a file")?;
                config.batch = Some(PathBuf::from(path));
            }
            "-p" | "--policy" => {
                let name = args.next().ok_or("--policy requires a value")?;
                config.policy = name.parse()?;
            }
            other => return Err(format!("unknown option: {other}").into()),
        }
    }

    Ok(config)
}

fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("squawk {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging(config.verbose);

    let roster = match &config.roster {
        Some(path) => roster_file::load(path)?,
        None => Roster::new(),
    };
    let parser = MessageParser::standard()
        .with_config(ParserConfig::default().with_sender_policy(config.policy));

    if let Some(batch) = &config.batch {
        return run_batch(batch, &roster, &parser, config.json);
    }

    let mut console = Console::new()?.with_roster(roster).with_parser(parser);
    console.run()?;
    Ok(())
}

/// Parses every non-blank line of `path` (`-` for stdin) and prints one
/// result per line.
fn run_batch(
    path: &Path,
    roster: &Roster,
    parser: &MessageParser,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        text
    } else {
        fs::read_to_string(path)
            .map_err(|e| format!("failed to read '{}': {e}", path.display()))?
    };

    for line in text.lines().filter(|line| !line.trim().is_empty()) {
        let message = parser.parse(line, roster)?;
        match (message, json) {
            (Some(message), true) => println!("{}", serde_json::to_string(&message)?),
            (None, true) => println!("null"),
            (Some(message), false) => println!("{message}"),
            (None, false) => println!("(no message)"),
        }
    }

    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mSquawk\x1b[0m - Radio transmission parser

\x1b[1mUSAGE:\x1b[0m
    squawk [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help           Print help information
    -V, --version        Print version information
    -r, --roster FILE    Load callsigns from FILE (.json or snapshot)
    -b, --batch FILE     Parse each line of FILE and exit (- for stdin)
        --json           Print batch results as JSON lines
    -p, --policy NAME    Sender policy: optional, fallback or required
    -v, --verbose        Log at debug level (RUST_LOG overrides)

\x1b[1mEXAMPLES:\x1b[0m
    squawk -r roster.json                  Start the console
    squawk -r roster.json -b calls.txt     Parse a file of transmissions
    echo 'Tower GHI789 roger' | squawk -r roster.json -b - --json

\x1b[1mCONSOLE COMMANDS:\x1b[0m
    :help                Show all commands
    :add NAME [as KIND]  Register a callsign
    :tokens TEXT         Show tokenization
    Ctrl+D               Exit"
    );
}
