//! Command-line interface for moka
//!
//! Usage:
//!   moka tokens --rules `<file.lex>`... `<source>` [--strip-whitespace] [--format `<format>`]
//!   moka grammar `<file.lang>`... [--format `<format>`]
//!
//! Global options: `--config <file>` layers a TOML file over the defaults, `-v` enables debug
//! logging. `RUST_LOG` overrides both.

use anyhow::{bail, Context};
use clap::{Arg, ArgAction, ArgMatches, Command};
use moka::moka::config::{Loader, MokaConfig};
use moka::{sort_by_priority, GrammarFile, LexFile, Lexer, RuleMerger, Token};
use serde::Serialize;
use std::path::Path;
use std::str::FromStr;

const FORMATS: [&str; 3] = ["text", "json", "yaml"];

fn main() {
    let matches = Command::new("moka")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Tokenize sources and expand grammar rules defined by moka rule files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("TOML configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Print debug information to stderr"),
        )
        .subcommand(
            Command::new("tokens")
                .about("Tokenize a source file with lexical rule files")
                .arg(
                    Arg::new("rules")
                        .long("rules")
                        .short('r')
                        .required(true)
                        .action(ArgAction::Append)
                        .help("Lexical rule file (PRIORITY : KIND : REGEX per line)"),
                )
                .arg(
                    Arg::new("source")
                        .help("Source file to tokenize")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("strip-whitespace")
                        .long("strip-whitespace")
                        .action(ArgAction::SetTrue)
                        .help("Skip whitespace between tokens"),
                )
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("grammar")
                .about("Expand and merge grammar rule files")
                .arg(
                    Arg::new("files")
                        .help("Grammar rule files")
                        .required(true)
                        .num_args(1..)
                        .index(1),
                )
                .arg(format_arg()),
        )
        .get_matches();

    let config = match load_config(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };
    init_logging(&config);

    let result = match matches.subcommand() {
        Some(("tokens", tokens_matches)) => handle_tokens_command(tokens_matches, &config),
        Some(("grammar", grammar_matches)) => handle_grammar_command(grammar_matches),
        _ => unreachable!(),
    };

    if let Err(e) = result {
        log::error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .short('f')
        .value_parser(FORMATS)
        .default_value("text")
        .help("Output format")
}

fn load_config(matches: &ArgMatches) -> anyhow::Result<MokaConfig> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if matches.get_flag("verbose") {
        loader = loader.set_override("log.level", "debug")?;
    }
    loader.build().context("failed to load configuration")
}

fn init_logging(config: &MokaConfig) {
    let level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.log.level.clone());
    let level = log::LevelFilter::from_str(&level).unwrap_or(log::LevelFilter::Warn);

    // Only fails when a logger is already installed
    let _ = simplelog::TermLogger::init(
        level,
        simplelog::ConfigBuilder::new()
            .set_time_format_custom(&[])
            .build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Never,
    );
}

/// Handle the tokens command
fn handle_tokens_command(matches: &ArgMatches, config: &MokaConfig) -> anyhow::Result<()> {
    let mut rules = Vec::new();
    for path in matches.get_many::<String>("rules").into_iter().flatten() {
        let source = read(path)?;
        let file = LexFile::parse(file_name(path), &source)?;
        rules.extend(file.into_rules());
    }
    if config.lexer.sort_by_priority {
        sort_by_priority(&mut rules);
    }

    let mut lexer = Lexer::from_config(rules, &config.lexer);
    if matches.get_flag("strip-whitespace") {
        lexer.set_strip_whitespace(true);
    }

    let path = required(matches, "source")?;
    let source = read(path)?;
    let tokens = lexer.process(&source, Some(file_name(path).as_str()))?;

    let format = required(matches, "format")?;
    print!("{}", render_tokens(&tokens, format)?);
    Ok(())
}

/// Handle the grammar command
fn handle_grammar_command(matches: &ArgMatches) -> anyhow::Result<()> {
    let mut merger = RuleMerger::new();
    let mut failures = 0;
    for path in matches.get_many::<String>("files").into_iter().flatten() {
        let source = read(path)?;
        let file = GrammarFile::parse(file_name(path), &source);
        for (line, err) in file.errors() {
            eprintln!("{}:{}: {}", path, line, err);
        }
        failures += file.errors().len();
        merger.extend(file.into_rules());
    }

    let format = required(matches, "format")?;
    let output = match format.as_str() {
        "text" => format!("{}\n", merger),
        other => serialize(merger.rules(), other)?,
    };
    print!("{}", output);

    if failures > 0 {
        bail!("{} malformed rule(s) skipped", failures);
    }
    Ok(())
}

fn render_tokens(tokens: &[Token], format: &str) -> anyhow::Result<String> {
    match format {
        "text" => Ok(tokens.iter().map(|token| format!("{}\n", token)).collect()),
        other => serialize(tokens, other),
    }
}

fn serialize<T: Serialize + ?Sized>(value: &T, format: &str) -> anyhow::Result<String> {
    match format {
        "json" => Ok(serde_json::to_string_pretty(value)? + "\n"),
        "yaml" => Ok(serde_yaml::to_string(value)?),
        other => bail!("unknown format '{}'", other),
    }
}

fn required<'a>(matches: &'a ArgMatches, id: &str) -> anyhow::Result<&'a String> {
    matches
        .get_one::<String>(id)
        .with_context(|| format!("missing argument '{}'", id))
}

fn read(path: &str) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path))
}

fn file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}
