//! Error types for the chess-core library.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChessCoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Depth {depth} exceeds the {max}-ply move grid")]
    DepthOutOfRange { depth: usize, max: usize },

    #[error("Invalid SAN '{san}' at ply {ply}")]
    InvalidSan { ply: usize, san: String },

    #[error("Illegal move '{san}' at ply {ply}")]
    IllegalMove { ply: usize, san: String },
}
