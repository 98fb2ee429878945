//! Twig CLI

use std::io::IsTerminal;

use twig_diagnostic::ColorMode;
use twigc::{execute, load_source, Command, USAGE};

fn main() {
    twigc::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let command = match Command::from_args(&args) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            eprint!("{USAGE}");
            std::process::exit(1);
        }
    };

    let Some(path) = command.path() else {
        print!("{USAGE}");
        return;
    };

    let source = match load_source(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    match execute(&command, &source) {
        Ok(output) => print!("{output}"),
        Err(err) => {
            let is_tty = std::io::stderr().is_terminal();
            eprint!("{}", err.render(&source, path, ColorMode::Auto, is_tty));
            std::process::exit(1);
        }
    }
}
