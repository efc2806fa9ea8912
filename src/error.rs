use std::path::PathBuf;

use thiserror::Error;

/// Result type for fixture operations
pub type Result<T> = std::result::Result<T, FixtureError>;

/// Errors that can occur while evaluating fixture operations
#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("length {len} exceeds sequence of {available} elements")]
    OutOfBounds { len: usize, available: usize },

    #[error("overflow: {lhs} {op} {rhs} does not fit in i32")]
    Overflow { op: char, lhs: i32, rhs: i32 },

    #[error("division by zero: {dividend} / 0")]
    DivisionByZero { dividend: i32 },

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read config '{}'", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config '{}'", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
