//! Command-line interface for XProtocol files
//!
//! Usage:
//!   xprot inspect `<path>` [--format `<format>`] [--config `<yaml>`] [--verbose]
//!   xprot formats
use clap::{Arg, ArgAction, ArgMatches, Command};
use siemens_xprotocol::xprotocol::config::ParserConfig;
use siemens_xprotocol::xprotocol::processor::{
    available_formats, process_file_with_config, ProcessingSpec,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = Command::new("xprot")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting Siemens XProtocol files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log parser progress to stderr"),
        )
        .subcommand(
            Command::new("inspect")
                .about("Tokenize or parse a file and print the result")
                .arg(
                    Arg::new("path")
                        .help("Path to the XProtocol file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'token-simple', 'ast-treeviz')")
                        .default_value("ast-treeviz"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("YAML file with parser limits"),
                ),
        )
        .subcommand(Command::new("formats").about("List available output formats"))
        .get_matches();

    init_tracing(matches.get_flag("verbose"));

    match matches.subcommand() {
        Some(("inspect", inspect_matches)) => handle_inspect_command(inspect_matches),
        Some(("formats", _)) => handle_formats_command(),
        _ => unreachable!(),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn fail(message: String) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

/// Handle the inspect command
fn handle_inspect_command(matches: &ArgMatches) {
    let (Some(path), Some(format)) = (
        matches.get_one::<String>("path"),
        matches.get_one::<String>("format"),
    ) else {
        fail("missing path or format".to_string());
    };

    let config = match matches.get_one::<String>("config") {
        Some(config_path) => ParserConfig::load(config_path).unwrap_or_else(|e| fail(e.to_string())),
        None => ParserConfig::default(),
    };
    debug!(path = %path, format = %format, max_depth = config.max_depth, "inspecting file");

    let spec = ProcessingSpec::from_string(format).unwrap_or_else(|e| fail(e.to_string()));
    let output =
        process_file_with_config(path, &spec, &config).unwrap_or_else(|e| fail(e.to_string()));

    print!("{}", output);
}

/// Handle the formats command
fn handle_formats_command() {
    println!("Available output formats:\n");
    for format in available_formats() {
        println!("  {}", format);
    }
}
