//! Settings for `twig run`.

use twig_eval::{Interpreter, DEFAULT_MAX_CALL_DEPTH};

use crate::Error;

/// How a program is run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Print the syntax tree before evaluating.
    pub dump_tree: bool,
    /// Bind the native prelude in the global scope.
    pub prelude: bool,
    pub max_call_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            dump_tree: false,
            prelude: true,
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
        }
    }
}

impl Config {
    /// Build a config from `run` flags. Unknown flags are usage errors.
    pub fn from_args<S: AsRef<str>>(flags: &[S]) -> Result<Self, Error> {
        let mut config = Config::default();
        for flag in flags {
            let flag = flag.as_ref();
            if flag == "-d" || flag == "--dump-tree" {
                config.dump_tree = true;
            } else if flag == "--no-prelude" {
                config.prelude = false;
            } else if let Some(depth) = flag.strip_prefix("--max-depth=") {
                config.max_call_depth = depth.parse().map_err(|_| {
                    Error::Usage(format!("`--max-depth` expects a number, found `{depth}`"))
                })?;
            } else {
                return Err(Error::Usage(format!("unknown flag `{flag}`")));
            }
        }
        Ok(config)
    }

    /// An interpreter configured for this run.
    pub fn interpreter<'ast>(&self) -> Interpreter<'ast> {
        Interpreter::builder()
            .prelude(self.prelude)
            .max_call_depth(self.max_call_depth)
            .build()
    }
}
