//! Leaderboard model and its plain-text format
//!
//! The text format is one `<name> <score>` pair per line. Parsing is
//! whitespace-driven: tokens are read two at a time until the input runs out
//! or a pair is malformed, at which point the rest is discarded.

use std::fmt;

use crate::types::LEADERBOARD_SIZE;

/// One leaderboard entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScore {
    pub name: String,
    pub score: u32,
}

impl HighScore {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

impl fmt::Display for HighScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.score)
    }
}

/// Top scores, kept sorted descending and capped at [`LEADERBOARD_SIZE`]
/// once anything is inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaderboard {
    entries: Vec<HighScore>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the text format.
    ///
    /// Parsing stops silently at the first pair whose score is missing or not
    /// a non-negative integer; everything before it is kept. The result is
    /// sorted descending by score but not truncated, matching what was read.
    pub fn parse(text: &str) -> Self {
        let mut entries = Vec::new();
        let mut tokens = text.split_whitespace();
        while let Some(name) = tokens.next() {
            let Some(score) = tokens.next().and_then(|s| s.parse::<u32>().ok()) else {
                break;
            };
            entries.push(HighScore::new(name, score));
        }
        let mut board = Self { entries };
        board.sort();
        board
    }

    /// Render the text format, one line per entry in current order
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(&entry.to_string());
            out.push('\n');
        }
        out
    }

    pub fn entries(&self) -> &[HighScore] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lowest score currently on the board
    pub fn lowest(&self) -> Option<u32> {
        self.entries.iter().map(|e| e.score).min()
    }

    /// Whether `score` earns a place: the board has a free slot, or the score
    /// strictly beats the lowest entry. Ties with the lowest do not qualify.
    pub fn qualifies(&self, score: u32) -> bool {
        if self.entries.len() < LEADERBOARD_SIZE {
            return true;
        }
        self.lowest().is_some_and(|lowest| score > lowest)
    }

    /// Insert an entry if it qualifies, then re-sort and truncate.
    ///
    /// Returns false (leaving the board unchanged) if it does not qualify.
    pub fn insert(&mut self, entry: HighScore) -> bool {
        if !self.qualifies(entry.score) {
            return false;
        }
        self.entries.push(entry);
        self.sort();
        self.entries.truncate(LEADERBOARD_SIZE);
        true
    }

    /// Stable descending sort; equal scores keep their relative order.
    fn sort(&mut self) {
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_board() -> Leaderboard {
        Leaderboard::parse("ann 500\nbob 400\ncid 300\ndee 200\neve 100\n")
    }

    #[test]
    fn parse_sorts_descending() {
        let board = Leaderboard::parse("low 10\nhigh 900\nmid 300\n");
        let scores: Vec<u32> = board.entries().iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![900, 300, 10]);
        assert_eq!(board.entries()[0].name, "high");
    }

    #[test]
    fn parse_accepts_any_whitespace() {
        let board = Leaderboard::parse("  ann\t12   bob\n\n7 ");
        assert_eq!(board.len(), 2);
        assert_eq!(board.entries()[1], HighScore::new("bob", 7));
    }

    #[test]
    fn parse_stops_at_first_malformed_pair() {
        let board = Leaderboard::parse("ann 50\nbob lots\ncid 70\n");
        assert_eq!(board.entries(), &[HighScore::new("ann", 50)]);

        let board = Leaderboard::parse("ann 50\ndangling");
        assert_eq!(board.len(), 1);

        let board = Leaderboard::parse("neg -5\n");
        assert!(board.is_empty());
    }

    #[test]
    fn to_text_writes_one_pair_per_line() {
        let board = Leaderboard::parse("b 2 a 3");
        assert_eq!(board.to_text(), "a 3\nb 2\n");
    }

    #[test]
    fn qualifies_with_free_slot() {
        let board = Leaderboard::parse("a 100");
        assert!(board.qualifies(0));
    }

    #[test]
    fn full_board_requires_beating_lowest() {
        let board = full_board();
        assert!(!board.qualifies(50));
        assert!(!board.qualifies(100));
        assert!(board.qualifies(101));
    }

    #[test]
    fn insert_keeps_top_five() {
        let mut board = full_board();
        assert!(board.insert(HighScore::new("new", 350)));
        assert_eq!(board.len(), LEADERBOARD_SIZE);
        let names: Vec<&str> = board.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["ann", "bob", "new", "cid", "dee"]);
    }

    #[test]
    fn insert_below_lowest_is_rejected() {
        let mut board = full_board();
        let before = board.clone();
        assert!(!board.insert(HighScore::new("late", 40)));
        assert_eq!(board, before);
    }

    #[test]
    fn equal_scores_keep_insertion_order() {
        let mut board = Leaderboard::parse("first 100");
        board.insert(HighScore::new("second", 100));
        assert_eq!(board.entries()[0].name, "first");
        assert_eq!(board.entries()[1].name, "second");
    }
}
