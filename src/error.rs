use std::path::PathBuf;

/// Reasons a move request is not legal in the current position.
///
/// `GameState::apply_move` ignores illegal requests; this type is what the
/// legality query reports so a front end can pre-filter input or explain a
/// rejected click.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("the game is over")]
    GameOver,

    #[error("({row}, {col}) is off the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },
}

/// Errors from retracting a move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UndoError {
    #[error("nothing to undo")]
    NothingToUndo,
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
