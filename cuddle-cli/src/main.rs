//! Command-line interface for cuddle
//!
//! Usage:
//!   cuddle annotate `<path>` [--format `<format>`]   - Print the annotations of one run
//!   cuddle show `<path>`                             - Print the document in colour
//!   cuddle view `<path>`                             - Browse the annotated document
//!   cuddle watch `<path>`                            - Re-run on every change
//!   cuddle list-formats                              - List output formats
//!
//! Global options: `--config <file>`, `--tab-size <n>`, `--lenient`, `--verbose`.

mod cli;
mod error;
mod paint;
mod session;
mod show;
mod viewer;
mod watch;

use clap::ArgMatches;
use cuddle::formats::FormatRegistry;
use cuddle::render::Palette;
use error::CliError;
use session::Session;
use std::io;
use std::path::{Path, PathBuf};

fn main() {
    let matches = cli::command().get_matches();
    let Some((name, sub)) = matches.subcommand() else {
        return;
    };

    init_logging(sub.get_flag("verbose"));

    if let Err(err) = run(name, sub) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(name: &str, matches: &ArgMatches) -> Result<(), CliError> {
    if name == "list-formats" {
        handle_list_formats_command();
        return Ok(());
    }

    let session = Session::from_matches(matches)?;
    let path = matches
        .get_one::<PathBuf>("path")
        .expect("path is required for document commands");

    match name {
        "annotate" => {
            let format = matches
                .get_one::<String>("format")
                .map(String::as_str)
                .unwrap_or("tag");
            handle_annotate_command(&session, path, format)
        }
        "show" => handle_show_command(&session, path),
        "view" => viewer::viewer_main::run_viewer(session, path),
        "watch" => watch::run_watch(session, path),
        _ => unreachable!("clap rejects unknown subcommands"),
    }
}

/// Handle the annotate command
fn handle_annotate_command(session: &Session, path: &Path, format: &str) -> Result<(), CliError> {
    let registry = FormatRegistry::with_defaults();
    let document = session.open(path)?;
    let output = registry.serialize(&document.analysis, format)?;
    if output.ends_with('\n') {
        print!("{output}");
    } else {
        println!("{output}");
    }
    Ok(())
}

/// Handle the show command
fn handle_show_command(session: &Session, path: &Path) -> Result<(), CliError> {
    let document = session.open(path)?;
    let lines = paint::paint(
        &document.text,
        &document.analysis,
        &Palette::standard(),
        document.tab_size,
    );
    show::write_painted(&mut io::stdout().lock(), &lines)?;
    Ok(())
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available formats:\n");

    for formatter in registry.formatters() {
        println!("  {}", formatter.name());
        println!("    {}", formatter.description());
        println!();
    }
}
