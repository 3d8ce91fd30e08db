//! Command-line interface for kensa
//! This binary turns logged GraphQL operations into field trees and inspects their tokens.
//!
//! Usage:
//!   kensa tree [`<path>`] [--format `<format>`] [--config `<file>`]  - Print the query tree
//!   kensa tokens [`<path>`]                                       - Print classified tokens
//!   kensa list-formats                                          - List output formats
//!
//! Without a path (or with `-`) the query is read from stdin. Set `RUST_LOG=debug` to see the
//! parser's log output.

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use config::ConfigError;
use kensa::kensa::config::Loader;
use kensa::kensa::formats::{FormatError, FormatRegistry};
use kensa::kensa::lexing::{skip_leading_keyword, tokenize};
use kensa::{ParseError, QueryTreeParser};
use std::io::{self, Read};
use thiserror::Error;

#[derive(Error, Debug)]
enum CliError {
    #[error("reading input: {0}")]
    Io(#[from] io::Error),
    #[error("loading config: {0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Parse(#[from] ParseError),
    #[error("{0}")]
    Format(#[from] FormatError),
}

fn path_arg() -> Arg {
    Arg::new("path")
        .help("File containing the query (stdin when omitted or '-')")
        .index(1)
}

fn keep_keyword_arg() -> Arg {
    Arg::new("keep-keyword")
        .long("keep-keyword")
        .help("Do not treat the first run as the operation keyword")
        .action(ArgAction::SetTrue)
}

fn main() {
    env_logger::init();

    let matches = Command::new("kensa")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect GraphQL operations logged by Kensa")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("tree")
                .about("Parse a query and print its field tree")
                .arg(path_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (see list-formats); defaults to the configured one"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("TOML file layered over the built-in defaults"),
                )
                .arg(
                    Arg::new("max-depth")
                        .long("max-depth")
                        .help("Maximum selection nesting")
                        .value_parser(value_parser!(u64)),
                )
                .arg(keep_keyword_arg()),
        )
        .subcommand(
            Command::new("tokens")
                .about("Print the classified tokens of a query")
                .arg(path_arg())
                .arg(keep_keyword_arg()),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    let result = match matches.subcommand() {
        Some(("tree", tree_matches)) => handle_tree_command(tree_matches),
        Some(("tokens", tokens_matches)) => handle_tokens_command(tokens_matches),
        Some(("list-formats", _)) => {
            handle_list_formats_command();
            Ok(())
        }
        _ => unreachable!(),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn read_source(matches: &ArgMatches) -> Result<String, CliError> {
    match matches.get_one::<String>("path").map(String::as_str) {
        None | Some("-") => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

/// Handle the tree command
fn handle_tree_command(matches: &ArgMatches) -> Result<(), CliError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if matches.get_flag("keep-keyword") {
        loader = loader.set_override("parser.skip_leading_keyword", false)?;
    }
    if let Some(max_depth) = matches.get_one::<u64>("max-depth") {
        loader = loader.set_override("parser.max_depth", *max_depth)?;
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    let config = loader.build()?;

    let source = read_source(matches)?;
    let tree = QueryTreeParser::new(config.parse_options()).parse(&source)?;
    let output = FormatRegistry::with_defaults().serialize(&tree, &config.output.format)?;

    print!("{}", output);
    Ok(())
}

/// Handle the tokens command
fn handle_tokens_command(matches: &ArgMatches) -> Result<(), CliError> {
    let source = read_source(matches)?;
    let mut tokens = tokenize(&source);
    if !matches.get_flag("keep-keyword") {
        if let Some((keyword, _)) = skip_leading_keyword(&mut tokens) {
            println!("# keyword: {}", keyword);
        }
    }

    for (token, span) in &tokens {
        println!("{:<10} {}..{}\t{}", token.kind(), span.start, span.end, token);
    }
    Ok(())
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available formats:\n");
    for formatter in registry.formatters() {
        println!("  {}", formatter.name());
        println!("    {}", formatter.description());
    }
}
