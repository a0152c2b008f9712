//! PGN parsing utilities: a line-oriented, regex-based reader.
//!
//! Games are blocks of `[Tag "value"]` lines followed by movetext, separated
//! by blank lines. Malformed content never fails the parse; it degrades to
//! the record placeholders.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::ChessCoreError;
use crate::game_record::{GameRecord, Tag, MAX_ROUNDS};

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\[([a-zA-Z]+)\s+"(.*)"\]"#).expect("valid tag pattern"));

static MOVE_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.$").expect("valid move number pattern"));

static TRAILING_RESULT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*(1-0|0-1|1/2-1/2)\s*$").expect("valid result pattern")
});

/// Parse PGN text held in memory.
pub fn parse_pgn(text: &str) -> Vec<GameRecord> {
    let lines: Vec<&str> = text.lines().collect();
    parse_lines(&lines)
}

/// Parse PGN text from any buffered reader.
pub fn read_pgn<R: BufRead>(reader: R) -> Result<Vec<GameRecord>, ChessCoreError> {
    let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
    Ok(parse_lines(&lines))
}

/// Parse a PGN file from disk.
pub fn read_pgn_file<P: AsRef<Path>>(path: P) -> Result<Vec<GameRecord>, ChessCoreError> {
    let file = File::open(path.as_ref())?;
    let games = read_pgn(BufReader::new(file))?;
    debug!(path = %path.as_ref().display(), games = games.len(), "Read PGN file");
    Ok(games)
}

fn parse_lines<S: AsRef<str>>(lines: &[S]) -> Vec<GameRecord> {
    let games: Vec<GameRecord> = GameBlocks { lines, pos: 0 }.collect();
    debug!(lines = lines.len(), games = games.len(), "Parsed PGN");
    games
}

/// Walks the lines one game block at a time.
struct GameBlocks<'a, S> {
    lines: &'a [S],
    pos: usize,
}

impl<S: AsRef<str>> GameBlocks<'_, S> {
    fn current(&self) -> Option<&str> {
        self.lines.get(self.pos).map(AsRef::as_ref)
    }

    fn skip_blank(&mut self) {
        while self.current().is_some_and(|line| line.trim().is_empty()) {
            self.pos += 1;
        }
    }

    fn read_tags(&mut self, record: &mut GameRecord) {
        while let Some(line) = self.current().filter(|line| line.starts_with('[')) {
            if let Some(cap) = TAG_RE.captures(line.trim()) {
                if let Some(tag) = Tag::from_key(&cap[1].to_lowercase()) {
                    record.set_tag(tag, &cap[2]);
                }
            }
            self.pos += 1;
        }
    }

    fn read_movetext(&mut self) -> String {
        let mut parts = Vec::new();
        while let Some(line) = self
            .current()
            .filter(|line| !line.starts_with('[') && !line.trim().is_empty())
        {
            parts.push(line.trim().to_string());
            self.pos += 1;
        }
        parts.join(" ")
    }
}

impl<S: AsRef<str>> Iterator for GameBlocks<'_, S> {
    type Item = GameRecord;

    fn next(&mut self) -> Option<GameRecord> {
        self.skip_blank();
        self.current()?;

        let mut record = GameRecord::new();
        self.read_tags(&mut record);
        self.skip_blank();
        let movetext = self.read_movetext();
        fill_plies(&mut record, &movetext);
        Some(record)
    }
}

fn is_move_number(token: &str) -> bool {
    MOVE_NUMBER_RE.is_match(token)
}

/// Assign movetext tokens to the ply grid.
///
/// Each move-number marker opens a round; the next token goes to white and
/// the one after to black, unless either is itself a marker. Any other token
/// is skipped.
fn fill_plies(record: &mut GameRecord, movetext: &str) {
    let movetext = TRAILING_RESULT_RE.replace(movetext, "");
    let mut tokens = movetext.split_whitespace().peekable();
    let mut round = 0;

    while round < MAX_ROUNDS {
        let Some(token) = tokens.next() else { break };
        if !is_move_number(token) {
            continue;
        }
        for side in 0..2 {
            if let Some(san) = tokens.next_if(|next| !is_move_number(next)) {
                record.set_ply(round * 2 + side, san);
            }
        }
        round += 1;
    }
}
