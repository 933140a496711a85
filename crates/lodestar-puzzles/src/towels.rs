//! Arranging striped towels into requested designs.

use log::debug;

use lodestar_paths::count_splits;

use crate::error::PuzzleError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Towels {
    patterns: Vec<String>,
    designs: Vec<String>,
}

impl Towels {
    /// Parse a comma-separated pattern list, a blank line, then one design
    /// per line.
    pub fn parse(s: &str) -> Result<Self, PuzzleError> {
        let s = s.trim();
        let (head, tail) = s
            .split_once("\n\n")
            .ok_or_else(|| PuzzleError::Invalid("missing blank line after towel patterns".into()))?;
        let patterns: Vec<String> = head
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(String::from)
            .collect();
        if patterns.is_empty() {
            return Err(PuzzleError::Invalid("no towel patterns".into()));
        }
        let designs = tail
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect();
        Ok(Self { patterns, designs })
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn designs(&self) -> &[String] {
        &self.designs
    }

    /// Number of ways to lay out `design` from the available patterns.
    pub fn arrangements(&self, design: &str) -> u64 {
        count_splits(design, &self.patterns)
    }

    /// Number of designs that can be made at all.
    pub fn possible_designs(&self) -> usize {
        let n = self
            .designs
            .iter()
            .filter(|d| self.arrangements(d) > 0)
            .count();
        debug!("towels: {n} of {} designs possible", self.designs.len());
        n
    }

    /// Sum of [`arrangements`](Self::arrangements) over every design.
    pub fn total_arrangements(&self) -> u64 {
        self.designs.iter().map(|d| self.arrangements(d)).sum()
    }
}
