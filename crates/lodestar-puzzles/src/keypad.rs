//! Codes typed through a chain of robot-operated keypads.
//!
//! A human presses keys on a directional keypad. Each of `robots`
//! directional keypads in between is operated by a robot arm steered from
//! the keypad before it, and the last robot types on a numeric keypad.
//! Every arm starts on `A`.

use std::collections::HashMap;

use log::debug;

use lodestar_core::{Dir, Point};
use lodestar_paths::MemoTable;

use crate::error::PuzzleError;

const NUMERIC_ROWS: [&str; 4] = ["789", "456", "123", " 0A"];
const DIRECTIONAL_ROWS: [&str; 2] = [" ^A", "<v>"];

/// Key layout of a keypad. A space in the layout marks the gap no arm may
/// pass over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keypad {
    keys: HashMap<char, Point>,
    gap: Option<Point>,
}

impl Keypad {
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut keys = HashMap::new();
        let mut gap = None;
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let p = Point::new(x as i32, y as i32);
                if ch == ' ' {
                    gap = Some(p);
                } else {
                    keys.insert(ch, p);
                }
            }
        }
        Self { keys, gap }
    }

    /// `789 / 456 / 123 / _0A`
    pub fn numeric() -> Self {
        Self::from_rows(&NUMERIC_ROWS)
    }

    /// `_^A / <v>`
    pub fn directional() -> Self {
        Self::from_rows(&DIRECTIONAL_ROWS)
    }

    pub fn position(&self, key: char) -> Option<Point> {
        self.keys.get(&key).copied()
    }

    pub fn gap(&self) -> Option<Point> {
        self.gap
    }

    fn key(&self, key: char) -> Result<Point, PuzzleError> {
        self.position(key)
            .ok_or_else(|| PuzzleError::Invalid(format!("no key \u{201c}{key}\u{201d} on keypad")))
    }

    /// Candidate press sequences moving the arm from `from` to `to` and
    /// pressing it, each ending in `A`.
    ///
    /// Only the two L-shaped moves are considered, since fewer direction
    /// changes never cost more upstream. A move whose corner is the gap is
    /// dropped.
    pub fn routes(&self, from: char, to: char) -> Result<Vec<String>, PuzzleError> {
        let (a, b) = (self.key(from)?, self.key(to)?);
        let d = b - a;
        let horizontal = run(if d.x > 0 { Dir::Right } else { Dir::Left }, d.x);
        let vertical = run(if d.y > 0 { Dir::Down } else { Dir::Up }, d.y);

        let mut out = Vec::with_capacity(2);
        if self.gap != Some(Point::new(b.x, a.y)) {
            out.push(format!("{horizontal}{vertical}A"));
        }
        if self.gap != Some(Point::new(a.x, b.y)) {
            let seq = format!("{vertical}{horizontal}A");
            if !out.contains(&seq) {
                out.push(seq);
            }
        }
        Ok(out)
    }
}

fn run(dir: Dir, len: i32) -> String {
    std::iter::repeat_n(dir.arrow(), len.unsigned_abs() as usize).collect()
}

/// Minimum human key presses to type codes through a keypad chain.
#[derive(Debug, Clone)]
pub struct KeypadChain {
    numeric: Keypad,
    directional: Keypad,
    robots: usize,
    /// Presses for moving from one key to another and pressing it, on the
    /// directional keypad at a given depth.
    memo: MemoTable<(char, char, usize), u64>,
}

impl KeypadChain {
    /// A chain with `robots` robot-operated directional keypads between the
    /// human and the numeric keypad.
    pub fn new(robots: usize) -> Self {
        Self::with_keypads(Keypad::numeric(), Keypad::directional(), robots)
    }

    pub fn with_keypads(numeric: Keypad, directional: Keypad, robots: usize) -> Self {
        Self {
            numeric,
            directional,
            robots,
            memo: MemoTable::new(),
        }
    }

    pub fn robots(&self) -> usize {
        self.robots
    }

    pub fn memo_len(&self) -> usize {
        self.memo.len()
    }

    /// Presses needed to move the arm on the directional keypad at `depth`
    /// from `from` to `to` and press it. Depth 0 is the human's own keypad.
    fn move_cost(&mut self, from: char, to: char, depth: usize) -> Result<u64, PuzzleError> {
        if depth == 0 {
            return Ok(1);
        }
        let key = (from, to, depth);
        if let Some(n) = self.memo.get(&key) {
            return Ok(n);
        }
        let routes = self.directional.routes(from, to)?;
        let mut best = u64::MAX;
        for route in routes {
            best = best.min(self.sequence_cost(&route, depth - 1)?);
        }
        Ok(self.memo.insert(key, best))
    }

    /// Presses needed to type `seq` on the directional keypad at `depth`.
    fn sequence_cost(&mut self, seq: &str, depth: usize) -> Result<u64, PuzzleError> {
        let mut prev = 'A';
        let mut total = 0;
        for key in seq.chars() {
            total += self.move_cost(prev, key, depth)?;
            prev = key;
        }
        Ok(total)
    }

    /// Fewest human presses to type `code` on the numeric keypad.
    pub fn presses(&mut self, code: &str) -> Result<u64, PuzzleError> {
        let mut prev = 'A';
        let mut total = 0;
        for key in code.chars() {
            let routes = self.numeric.routes(prev, key)?;
            let mut best = u64::MAX;
            for route in routes {
                best = best.min(self.sequence_cost(&route, self.robots)?);
            }
            total += best;
            prev = key;
        }
        debug!("keypad: {code} takes {total} presses through {} robots", self.robots);
        Ok(total)
    }

    /// Presses times the numeric part of the code, leading zeros ignored.
    pub fn complexity(&mut self, code: &str) -> Result<u64, PuzzleError> {
        let digits: String = code.chars().filter(char::is_ascii_digit).collect();
        let value = digits
            .parse::<u64>()
            .map_err(|_| PuzzleError::Invalid(format!("code {code} has no numeric part")))?;
        Ok(self.presses(code)? * value)
    }

    /// Sum of [`complexity`](Self::complexity) over one code per line.
    pub fn total_complexity(&mut self, codes: &str) -> Result<u64, PuzzleError> {
        let mut total = 0;
        for code in codes.lines().map(str::trim).filter(|l| !l.is_empty()) {
            total += self.complexity(code)?;
        }
        Ok(total)
    }
}
