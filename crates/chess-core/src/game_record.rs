//! Fixed-shape game record: seven tags plus a 20-round move grid.

use std::borrow::Cow;

use serde::ser::{Serialize, SerializeMap, Serializer};

pub const MAX_ROUNDS: usize = 20;
pub const MAX_PLIES: usize = MAX_ROUNDS * 2;

/// Value of a tag that was absent from the source.
pub const UNKNOWN_TAG: &str = "?";
/// Value of a ply with no recorded move.
pub const NO_MOVE: &str = "-";

pub const WHITE_WIN: &str = "1-0";
pub const BLACK_WIN: &str = "0-1";
pub const DRAW: &str = "1/2-1/2";

/// The tags a record keeps. Everything else in the tag block is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Event,
    White,
    Black,
    Result,
    WhiteElo,
    BlackElo,
    Opening,
}

impl Tag {
    pub const ALL: [Tag; 7] = [
        Tag::Event,
        Tag::White,
        Tag::Black,
        Tag::Result,
        Tag::WhiteElo,
        Tag::BlackElo,
        Tag::Opening,
    ];

    /// Lowercase key used in the flat record.
    pub fn key(self) -> &'static str {
        match self {
            Tag::Event => "event",
            Tag::White => "white",
            Tag::Black => "black",
            Tag::Result => "result",
            Tag::WhiteElo => "whiteelo",
            Tag::BlackElo => "blackelo",
            Tag::Opening => "opening",
        }
    }

    /// Look up a tag by its lowercase key.
    pub fn from_key(key: &str) -> Option<Tag> {
        Tag::ALL.into_iter().find(|tag| tag.key() == key)
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Field name of a 0-based ply: `w1`, `b1`, `w2`, ...
pub fn ply_key(index: usize) -> String {
    let round = index / 2 + 1;
    if index % 2 == 0 {
        format!("w{round}")
    } else {
        format!("b{round}")
    }
}

fn ply_index(key: &str) -> Option<usize> {
    let (side, digits) = key.split_at_checked(1)?;
    let round: usize = digits.parse().ok()?;
    if !(1..=MAX_ROUNDS).contains(&round) || round.to_string() != digits {
        return None;
    }
    match side {
        "w" => Some((round - 1) * 2),
        "b" => Some((round - 1) * 2 + 1),
        _ => None,
    }
}

/// One parsed game. Always holds exactly 7 tags and `MAX_PLIES` plies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    tags: [String; 7],
    plies: Vec<String>,
}

impl Default for GameRecord {
    fn default() -> Self {
        Self {
            tags: std::array::from_fn(|_| UNKNOWN_TAG.to_string()),
            plies: vec![NO_MOVE.to_string(); MAX_PLIES],
        }
    }
}

impl GameRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tag(&self, tag: Tag) -> &str {
        &self.tags[tag.index()]
    }

    pub fn set_tag(&mut self, tag: Tag, value: impl Into<String>) {
        self.tags[tag.index()] = value.into();
    }

    pub fn result(&self) -> &str {
        self.tag(Tag::Result)
    }

    pub fn opening(&self) -> &str {
        self.tag(Tag::Opening)
    }

    /// Move at a 0-based ply. Plies past the grid read as `NO_MOVE`.
    pub fn ply(&self, index: usize) -> &str {
        self.plies.get(index).map_or(NO_MOVE, String::as_str)
    }

    /// Record a move. Plies past the grid are dropped.
    pub fn set_ply(&mut self, index: usize, san: impl Into<String>) {
        if let Some(slot) = self.plies.get_mut(index) {
            *slot = san.into();
        }
    }

    pub fn plies(&self) -> &[String] {
        &self.plies
    }

    /// Number of plies actually recorded (up to the first empty one).
    pub fn ply_count(&self) -> usize {
        self.plies.iter().take_while(|san| *san != NO_MOVE).count()
    }

    /// True when the game's first `prefix.len()` plies equal `prefix`.
    pub fn matches_prefix<S: AsRef<str>>(&self, prefix: &[S]) -> bool {
        prefix.len() <= MAX_PLIES
            && prefix
                .iter()
                .zip(&self.plies)
                .all(|(expected, played)| expected.as_ref() == played)
    }

    /// Flat-key lookup: a tag key (`"opening"`) or a ply key (`"b7"`).
    pub fn field(&self, key: &str) -> Option<&str> {
        if let Some(tag) = Tag::from_key(key) {
            return Some(self.tag(tag));
        }
        ply_index(key).map(|index| self.ply(index))
    }

    /// All 47 fields in canonical order: tags, then `w1, b1, ..., w20, b20`.
    pub fn fields(&self) -> impl Iterator<Item = (Cow<'static, str>, &str)> + '_ {
        let tags = Tag::ALL
            .into_iter()
            .map(|tag| (Cow::Borrowed(tag.key()), self.tag(tag)));
        let plies = self
            .plies
            .iter()
            .enumerate()
            .map(|(index, san)| (Cow::Owned(ply_key(index)), san.as_str()));
        tags.chain(plies)
    }
}

impl Serialize for GameRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Tag::ALL.len() + MAX_PLIES))?;
        for (key, value) in self.fields() {
            map.serialize_entry(key.as_ref(), value)?;
        }
        map.end()
    }
}
