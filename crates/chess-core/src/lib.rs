//! Chess game statistics over PGN text.
//!
//! [`pgn`] turns PGN text into fixed-shape [`GameRecord`]s; [`opening_search`]
//! and [`stats`] answer questions about them; [`positions`] counts legal move
//! sequences.

pub mod error;
pub mod game_record;
pub mod opening_search;
pub mod pgn;
pub mod positions;
pub mod stats;

pub use error::ChessCoreError;
pub use game_record::{GameRecord, Tag};
pub use opening_search::{search, SearchResult};
pub use pgn::{parse_pgn, read_pgn, read_pgn_file};
