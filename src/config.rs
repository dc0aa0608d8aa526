//! Command line configuration of the simulator binary.
use crate::error::Error;

use std::ffi::OsString;
use std::path::PathBuf;

/// The command file read, if none is given on the command line.
pub const DEFAULT_INPUT: &str = "input.txt";
/// The listing file written, if none is given on the command line.
pub const DEFAULT_OUTPUT: &str = "output.txt";

/// The files the simulator works on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The command stream.
    pub input: PathBuf,
    /// The destination of the listings.
    pub output: PathBuf,
}
impl Config {
    /// Build the configuration from the command line arguments (without the
    /// program name): `[INPUT [OUTPUT]]`.
    pub fn from_args<I>(args: I) -> Result<Self, Error>
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::into);
        let input = args.next().map_or_else(|| DEFAULT_INPUT.into(), PathBuf::from);
        let output = args.next().map_or_else(|| DEFAULT_OUTPUT.into(), PathBuf::from);

        let extra = args.count();
        if extra > 0 {
            return Err(Error::Usage(format!(
                "{extra} unexpected argument(s), usage: memsim [INPUT [OUTPUT]]"
            )));
        }
        Ok(Self { input, output })
    }
}
impl Default for Config {
    fn default() -> Self {
        Self {
            input: DEFAULT_INPUT.into(),
            output: DEFAULT_OUTPUT.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, Error};

    #[test]
    fn defaults() {
        let config = Config::from_args(Vec::<String>::new()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.input.to_str(), Some("input.txt"));
        assert_eq!(config.output.to_str(), Some("output.txt"));
    }

    #[test]
    fn positional_paths() {
        let config = Config::from_args(["commands.txt"]).unwrap();
        assert_eq!(config.input.to_str(), Some("commands.txt"));
        assert_eq!(config.output.to_str(), Some("output.txt"));

        let config = Config::from_args(["in", "out"]).unwrap();
        assert_eq!(config.input.to_str(), Some("in"));
        assert_eq!(config.output.to_str(), Some("out"));
    }

    #[test]
    fn too_many_arguments() {
        assert!(matches!(
            Config::from_args(["a", "b", "c"]),
            Err(Error::Usage(_))
        ));
    }
}
