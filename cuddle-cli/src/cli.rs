// Command-line definition, shared with build.rs for shell completions.
// No inner doc comments here: build.rs pulls this file in with `include!`.

use clap::{Arg, ArgAction, Command, ValueHint};

/// The full `cuddle` command tree.
pub fn command() -> Command {
    Command::new("cuddle")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Highlight indentation-delimited blocks in plain-text documents")
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Layer a TOML configuration file over the built-in defaults")
                .value_parser(clap::value_parser!(std::path::PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("tab-size")
                .long("tab-size")
                .global(true)
                .help("Columns a tab counts for (default: editor.tab_size, or 4)")
                .value_parser(clap::value_parser!(u64).range(1..=64)),
        )
        .arg(
            Arg::new("lenient")
                .long("lenient")
                .global(true)
                .help("Close blocks on dedent without requiring a closing line")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .help("Log pipeline stages to stderr")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("annotate")
                .about("Analyze a document once and print the result")
                .arg(path_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (see list-formats)")
                        .default_value("tag"),
                ),
        )
        .subcommand(
            Command::new("show")
                .about("Print the document with blocks coloured in the terminal")
                .arg(path_arg()),
        )
        .subcommand(
            Command::new("view")
                .about("Browse the annotated document interactively")
                .arg(path_arg()),
        )
        .subcommand(
            Command::new("watch")
                .about("Re-analyze the document whenever it changes")
                .arg(path_arg()),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
}

fn path_arg() -> Arg {
    Arg::new("path")
        .help("Path to the document")
        .required(true)
        .index(1)
        .value_parser(clap::value_parser!(std::path::PathBuf))
        .value_hint(ValueHint::FilePath)
}
