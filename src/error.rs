use std::path::PathBuf;

/// Errors produced by the game core. All variants are recoverable: a failed
/// operation leaves the board and game state unchanged, and the caller
/// decides whether to retry with different arguments.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid board dimensions {rows}x{cols} (minimum {min_rows}x{min_cols})")]
    InvalidDimensions {
        rows: usize,
        cols: usize,
        min_rows: usize,
        min_cols: usize,
    },

    #[error("win length {win_length} out of range [{min}, {max}]")]
    InvalidWinLength {
        win_length: usize,
        min: usize,
        max: usize,
    },

    #[error("column {col} out of range (board has {cols} columns)")]
    InvalidColumn { col: usize, cols: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("game is already over")]
    GameOver,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
