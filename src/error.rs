use thiserror::Error;

/// Errors raised while building a grid from outside input.
///
/// The traversal engine itself never fails on a grid; these only come from
/// construction and parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("maze is empty")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged { row: usize, expected: usize, found: usize },

    #[error("cell ({row}, {col}) is outside the grid")]
    OutOfBounds { row: usize, col: usize },

    #[error("unknown cell token {token:?} at row {row}, col {col}")]
    UnknownToken { row: usize, col: usize, token: String },

    #[error("maze has no {0} cell")]
    MissingMarker(&'static str),
}
