//! Twig driver.
//!
//! Loads source files, runs them through the lexer, parser and evaluator, and
//! renders values or diagnostics for the `twig` binary.

mod command;
mod config;
mod error;

pub use command::{
    execute, lex_source, load_source, parse_source, run_source, Command, USAGE,
};
pub use config::Config;
pub use error::Error;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `TWIG_LOG=twig_eval=debug` (or `RUST_LOG`), and set
/// `TWIG_LOG_TREE=1` for indented span output.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if a filter is set
        let Ok(directives) = std::env::var("TWIG_LOG").or_else(|_| std::env::var("RUST_LOG"))
        else {
            return;
        };
        let filter = EnvFilter::new(directives);

        if std::env::var("TWIG_LOG_TREE").is_ok_and(|v| v == "1") {
            tracing_subscriber::registry()
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
