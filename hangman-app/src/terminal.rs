use std::io::Write;

use hangman_core::{DEFAULT_MISS_LIMIT, Renderer};
use hangman_types::{SessionState, display_word};
use tracing::warn;

const GALLOWS_WIDTH: usize = 9;
const GALLOWS_HEIGHT: usize = 7;

/// Drawing strokes, one per miss when the limit is the default.
const GALLOWS_PARTS: [&[(usize, usize, char)]; DEFAULT_MISS_LIMIT as usize] = [
    // base
    &[(6, 0, '='), (6, 1, '='), (6, 2, '='), (6, 3, '='), (6, 4, '=')],
    // pole
    &[(1, 2, '|'), (2, 2, '|'), (3, 2, '|'), (4, 2, '|'), (5, 2, '|')],
    // beam
    &[(0, 2, '+'), (0, 3, '-'), (0, 4, '-'), (0, 5, '-'), (0, 6, '-'), (0, 7, '+')],
    // brace
    &[(1, 3, '/')],
    // rope
    &[(1, 7, '|')],
    // head
    &[(2, 7, 'O')],
    // body
    &[(3, 7, '|')],
    &[(3, 6, '/')],
    &[(3, 8, '\\')],
    &[(4, 6, '/')],
    &[(4, 8, '\\')],
];

/// ASCII gallows for `misses` out of `miss_limit`, scaled so the figure is
/// complete exactly at the limit.
pub fn gallows(misses: u32, miss_limit: u32) -> String {
    let total = GALLOWS_PARTS.len();
    let stage = if miss_limit == 0 || misses >= miss_limit {
        total
    } else {
        misses as usize * total / miss_limit as usize
    };

    let mut grid = [[' '; GALLOWS_WIDTH]; GALLOWS_HEIGHT];
    for part in &GALLOWS_PARTS[..stage] {
        for &(row, col, c) in *part {
            grid[row][col] = c;
        }
    }

    grid.iter()
        .map(|row| row.iter().collect::<String>().trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the game as plain text lines.
pub struct TerminalRenderer<W> {
    out: W,
    miss_limit: u32,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, miss_limit: u32) -> Self {
        Self { out, miss_limit }
    }

    pub fn say(&mut self, message: &str) {
        if let Err(e) = writeln!(self.out, "{}", message) {
            warn!("Failed to write to terminal: {}", e);
        }
    }

    pub fn prompt(&mut self, message: &str) {
        let result = write!(self.out, "{}\n> ", message).and_then(|_| self.out.flush());
        if let Err(e) = result {
            warn!("Failed to write to terminal: {}", e);
        }
    }

    pub fn output(&self) -> &W {
        &self.out
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn on_progress_changed(&mut self, revealed: &[char]) {
        self.say(&format!("Word: {}", display_word(revealed)));
    }

    fn on_miss_changed(&mut self, miss_count: u32) {
        let drawing = gallows(miss_count, self.miss_limit);
        self.say(&drawing);
        self.say(&format!("Misses: {}/{}", miss_count, self.miss_limit));
    }

    fn on_outcome(&mut self, state: SessionState, revealed_word: Option<&str>) {
        match (state, revealed_word) {
            (SessionState::Won, _) => self.say("Winner!"),
            (SessionState::Lost, Some(word)) => self.say(&format!("The word was {}", word)),
            (SessionState::Lost, None) => self.say("Out of guesses!"),
            (SessionState::AwaitingGuess, _) => {}
        }
    }
}
