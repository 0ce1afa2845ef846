use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// File read when no input path is given on the command line.
pub const DEFAULT_INPUT: &str = "input1.txt";

/// What counts towards the password.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CountMethod {
    /// Count rotations that leave the dial resting on zero.
    #[default]
    Landing,
    /// Count every single click that points the dial at zero.
    Passing,
}

impl FromStr for CountMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "landing" | "land" => Ok(CountMethod::Landing),
            "passing" | "pass" | "click" => Ok(CountMethod::Passing),
            _ => Err(format!("invalid count method: {s}")),
        }
    }
}

impl fmt::Display for CountMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountMethod::Landing => f.write_str("landing"),
            CountMethod::Passing => f.write_str("passing"),
        }
    }
}

pub struct Config {
    /// Rotation list, one `<direction><clicks>` per line.
    pub input: PathBuf,
    pub method: CountMethod,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            method: CountMethod::default(),
        }
    }
}
