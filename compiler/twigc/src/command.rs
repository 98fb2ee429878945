//! Command handlers for the `twig` CLI.
//!
//! Handlers take source text and return what the CLI prints, so they can be
//! driven from tests without touching the process.

use std::fmt::Write;

use tracing::debug;
use twig_ir::dump;

use crate::{Config, Error};

pub const USAGE: &str = "\
Usage: twig <command> [options]

Commands:
  run <file>      Evaluate a program and print its value
  parse <file>    Print the syntax tree
  lex <file>      Print one token per line
  help            Show this message

Options for `run`:
  -d, --dump-tree     Print the syntax tree before evaluating
  --no-prelude        Do not bind the native prelude
  --max-depth=<n>     Limit nested function calls (default 10000)
";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Run { path: String, config: Config },
    Parse { path: String },
    Lex { path: String },
    Help,
}

impl Command {
    /// Parse the arguments after the program name.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, Error> {
        let Some((command, rest)) = args.split_first() else {
            return Ok(Command::Help);
        };
        match command.as_ref() {
            "run" => {
                let (paths, flags): (Vec<&str>, Vec<&str>) = rest
                    .iter()
                    .map(AsRef::as_ref)
                    .partition(|arg| !arg.starts_with('-'));
                let path = single_path("run", &paths)?;
                let config = Config::from_args(&flags)?;
                Ok(Command::Run { path, config })
            }
            "parse" => Ok(Command::Parse {
                path: plain_path("parse", rest)?,
            }),
            "lex" => Ok(Command::Lex {
                path: plain_path("lex", rest)?,
            }),
            "help" | "-h" | "--help" => Ok(Command::Help),
            other => Err(Error::Usage(format!("unknown command `{other}`"))),
        }
    }

    /// The source file the command reads, if any.
    pub fn path(&self) -> Option<&str> {
        match self {
            Command::Run { path, .. } | Command::Parse { path } | Command::Lex { path } => {
                Some(path)
            }
            Command::Help => None,
        }
    }
}

fn single_path(command: &str, paths: &[&str]) -> Result<String, Error> {
    match paths {
        [path] => Ok((*path).to_owned()),
        [] => Err(Error::Usage(format!("`{command}` expects a file path"))),
        [_, extra, ..] => Err(Error::Usage(format!("unexpected argument `{extra}`"))),
    }
}

/// A path with no flags allowed alongside it.
fn plain_path<S: AsRef<str>>(command: &str, rest: &[S]) -> Result<String, Error> {
    let args: Vec<&str> = rest.iter().map(AsRef::as_ref).collect();
    if let Some(flag) = args.iter().find(|arg| arg.starts_with('-')) {
        return Err(Error::Usage(format!("unknown flag `{flag}`")));
    }
    single_path(command, &args)
}

/// Read a source file.
pub fn load_source(path: &str) -> Result<String, Error> {
    let source = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_owned(),
        source,
    })?;
    debug!(path, bytes = source.len(), "loaded source");
    Ok(source)
}

/// Run `command` against already loaded `source`.
pub fn execute(command: &Command, source: &str) -> Result<String, Error> {
    match command {
        Command::Run { config, .. } => run_source(source, config),
        Command::Parse { .. } => parse_source(source),
        Command::Lex { .. } => lex_source(source),
        Command::Help => Ok(USAGE.to_owned()),
    }
}

/// Evaluate `source` and render its value on one line.
pub fn run_source(source: &str, config: &Config) -> Result<String, Error> {
    let tree = twig_parse::parse(source)?;
    let mut output = String::new();
    if config.dump_tree {
        output.push_str(&dump(&tree));
    }
    let mut interp = config.interpreter();
    let value = interp.run(&tree)?;
    let _ = writeln!(output, "{value}");
    Ok(output)
}

/// The tree dump of `source`.
pub fn parse_source(source: &str) -> Result<String, Error> {
    let tree = twig_parse::parse(source)?;
    Ok(dump(&tree))
}

/// One `line KIND text` row per token, `EOF` included.
pub fn lex_source(source: &str) -> Result<String, Error> {
    let mut output = String::new();
    for token in twig_lexer::tokenize(source)? {
        let _ = write!(output, "{} {}", token.line, token.kind.name());
        if let Some(text) = token.text.as_deref() {
            let _ = write!(output, " {text}");
        }
        output.push('\n');
    }
    Ok(output)
}
