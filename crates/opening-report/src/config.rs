//! Report configuration from environment variables.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_SEARCH_DEPTH: usize = 3;
const DEFAULT_SEARCH_TOLERANCE: usize = 1;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("PGN_FILE not set and no path argument given")]
    MissingPgnFile,

    #[error("{name} must be an integer, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },

    #[error("ELO_LOWER and ELO_UPPER must be set together")]
    IncompleteEloRange,

    #[error("ELO_LOWER ({lower}) must be below ELO_UPPER ({upper})")]
    InvertedEloRange { lower: i32, upper: i32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// PGN file to read
    pub pgn_file: PathBuf,

    /// Plies in the searched opening line
    pub search_depth: usize,

    /// Minimum games a line needs to be considered
    pub search_tolerance: usize,

    /// Exclusive bounds on the rating gap, when both are set
    pub elo_range: Option<(i32, i32)>,

    /// Opening line to report win counts for
    pub opening_moves: Option<Vec<String>>,
}

impl Config {
    /// Load configuration from the environment. `path_arg` overrides PGN_FILE.
    pub fn from_env(path_arg: Option<String>) -> Result<Self, ConfigError> {
        Self::from_lookup(path_arg, |name| env::var(name).ok())
    }

    fn from_lookup<F>(path_arg: Option<String>, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let pgn_file = path_arg
            .or_else(|| lookup("PGN_FILE"))
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
            .ok_or(ConfigError::MissingPgnFile)?;

        let search_depth =
            parse_var(&lookup, "SEARCH_DEPTH")?.unwrap_or(DEFAULT_SEARCH_DEPTH);
        let search_tolerance =
            parse_var(&lookup, "SEARCH_TOLERANCE")?.unwrap_or(DEFAULT_SEARCH_TOLERANCE);

        let elo_range = match (
            parse_var::<i32, _>(&lookup, "ELO_LOWER")?,
            parse_var::<i32, _>(&lookup, "ELO_UPPER")?,
        ) {
            (Some(lower), Some(upper)) if lower >= upper => {
                return Err(ConfigError::InvertedEloRange { lower, upper })
            }
            (Some(lower), Some(upper)) => Some((lower, upper)),
            (None, None) => None,
            _ => return Err(ConfigError::IncompleteEloRange),
        };

        let opening_moves = lookup("OPENING_MOVES")
            .map(|moves| moves.split_whitespace().map(String::from).collect::<Vec<_>>())
            .filter(|moves| !moves.is_empty());

        Ok(Self {
            pgn_file,
            search_depth,
            search_tolerance,
            elo_range,
            opening_moves,
        })
    }
}

fn parse_var<T, F>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
    }
}
