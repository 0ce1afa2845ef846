pub mod count;

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use dialr_common::config::{Config, CountMethod, DEFAULT_INPUT};

#[derive(Parser)]
#[command(name = "dialr")]
#[command(about = "Counts how often a safe dial points at zero.")]
pub struct CommandLine {
    /// Rotation list, one `L<clicks>` or `R<clicks>` per line
    #[arg(default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// `landing` counts rotations ending on zero, `passing` counts every click on zero
    #[arg(short, long, default_value_t = CountMethod::Landing)]
    pub method: CountMethod,

    /// More log output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        Config {
            input: self.input.clone(),
            method: self.method,
        }
    }
}
