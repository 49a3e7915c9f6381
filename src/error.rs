use std::path::PathBuf;

/// Errors from checked board transitions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is off the board")]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("the game is already over")]
    GameOver,
}

/// Errors from reading a board in text form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardParseError {
    #[error("expected 6 rows, found {0}")]
    RowCount(usize),

    #[error("row {row} has {width} cells, expected 7")]
    RowWidth { row: usize, width: usize },

    #[error("unknown symbol '{symbol}' at row {row}, column {col}")]
    UnknownSymbol { row: usize, col: usize, symbol: char },

    #[error("column {0} has a piece resting above an empty cell")]
    FloatingPiece(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm '{0}' (expected minimax, alpha-beta, expectiminimax or expectiminimax-pruned)")]
pub struct ParseAlgorithmError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown side '{0}' (expected a or b)")]
pub struct ParseSideError(pub String);

/// Errors that can occur while playing out a game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("{agent} selected illegal column {action}: {source}")]
    IllegalAction {
        agent: String,
        action: usize,
        source: MoveError,
    },

    #[error("{agent} returned no column although the board has room")]
    NoAction { agent: String },
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
