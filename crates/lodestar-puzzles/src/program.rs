//! A three-bit computer: three registers, eight instructions, and a search
//! for the value of register A that makes a program print itself.

use std::fmt;

use log::{debug, trace};

use lodestar_core::{ParseError, parse_numbers};
use lodestar_paths::SearchError;

use crate::error::PuzzleError;

/// Upper bound on executed instructions before a run is declared stuck.
pub const MAX_STEPS: usize = 1 << 20;

/// Instruction set, decoded from a 3-bit opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// `A = A >> combo`
    Adv,
    /// `B ^= literal`
    Bxl,
    /// `B = combo % 8`
    Bst,
    /// Jump to `literal` unless `A == 0`.
    Jnz,
    /// `B ^= C`; the operand is read but ignored.
    Bxc,
    /// Output `combo % 8`.
    Out,
    /// `B = A >> combo`
    Bdv,
    /// `C = A >> combo`
    Cdv,
}

impl TryFrom<u8> for Op {
    type Error = PuzzleError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Ok(match code {
            0 => Op::Adv,
            1 => Op::Bxl,
            2 => Op::Bst,
            3 => Op::Jnz,
            4 => Op::Bxc,
            5 => Op::Out,
            6 => Op::Bdv,
            7 => Op::Cdv,
            _ => return Err(PuzzleError::Invalid(format!("opcode {code} is not 3-bit"))),
        })
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Op::Adv => "adv",
            Op::Bxl => "bxl",
            Op::Bst => "bst",
            Op::Jnz => "jnz",
            Op::Bxc => "bxc",
            Op::Out => "out",
            Op::Bdv => "bdv",
            Op::Cdv => "cdv",
        };
        f.write_str(name)
    }
}

/// Registers and output after the program halted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub registers: [u64; 3],
    pub output: Vec<u8>,
}

impl Run {
    /// Output values joined with commas.
    pub fn output_string(&self) -> String {
        join(&self.output)
    }
}

fn join(values: &[u8]) -> String {
    values
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// `a >> by`, zero once every bit is shifted out.
#[inline]
fn shr(a: u64, by: u64) -> u64 {
    u32::try_from(by)
        .ok()
        .and_then(|s| a.checked_shr(s))
        .unwrap_or(0)
}

/// Operands 0 to 3 stand for themselves, 4 to 6 for registers A to C.
/// Operand 7 is reserved.
fn combo(operand: u8, reg: &[u64; 3]) -> Result<u64, PuzzleError> {
    match operand {
        0..=3 => Ok(operand as u64),
        4..=6 => Ok(reg[operand as usize - 4]),
        _ => Err(PuzzleError::Invalid(format!(
            "reserved combo operand {operand}"
        ))),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Computer {
    registers: [u64; 3],
    program: Vec<u8>,
}

impl Computer {
    pub fn new(registers: [u64; 3], program: Vec<u8>) -> Result<Self, PuzzleError> {
        if let Some(&bad) = program.iter().find(|&&v| v > 7) {
            return Err(PuzzleError::Invalid(format!("program value {bad} is not 3-bit")));
        }
        Ok(Self { registers, program })
    }

    /// Parse the `Register A: ...` lines followed by a `Program: ...` line.
    pub fn parse(s: &str) -> Result<Self, PuzzleError> {
        let mut registers: [Option<u64>; 3] = [None; 3];
        let mut program = None;
        for line in s.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let (label, value) = line
                .split_once(':')
                .ok_or_else(|| PuzzleError::Invalid(format!("unlabelled line {line:?}")))?;
            let slot = match label.trim() {
                "Register A" => 0,
                "Register B" => 1,
                "Register C" => 2,
                "Program" => {
                    program = Some(parse_numbers::<u8>(value)?);
                    continue;
                }
                other => return Err(PuzzleError::Invalid(format!("unknown label {other:?}"))),
            };
            let value = value.trim();
            registers[slot] = Some(
                value
                    .parse()
                    .map_err(|_| ParseError::InvalidNumber(value.to_string()))?,
            );
        }
        let mut regs = [0; 3];
        for (i, (reg, name)) in registers.into_iter().zip(['A', 'B', 'C']).enumerate() {
            regs[i] = reg.ok_or_else(|| PuzzleError::Invalid(format!("register {name} missing")))?;
        }
        let program = program.ok_or_else(|| PuzzleError::Invalid("program missing".into()))?;
        Self::new(regs, program)
    }

    pub fn registers(&self) -> [u64; 3] {
        self.registers
    }

    pub fn program(&self) -> &[u8] {
        &self.program
    }

    /// Run with the registers as parsed.
    pub fn run(&self) -> Result<Run, PuzzleError> {
        self.run_from(self.registers)
    }

    /// Run with register A replaced by `a`.
    pub fn run_with_a(&self, a: u64) -> Result<Run, PuzzleError> {
        let [_, b, c] = self.registers;
        self.run_from([a, b, c])
    }

    /// Execute until the instruction pointer leaves the program.
    ///
    /// Combo operand 7 is reserved and fails the run, as does exceeding
    /// [`MAX_STEPS`].
    fn run_from(&self, mut reg: [u64; 3]) -> Result<Run, PuzzleError> {
        let mut output = Vec::new();
        let mut ip = 0;
        let mut steps = 0;
        while ip + 1 < self.program.len() {
            steps += 1;
            if steps > MAX_STEPS {
                return Err(PuzzleError::Invalid(format!(
                    "program still running after {MAX_STEPS} steps"
                )));
            }
            let op = Op::try_from(self.program[ip])?;
            let literal = self.program[ip + 1];
            match op {
                Op::Adv => reg[0] = shr(reg[0], combo(literal, &reg)?),
                Op::Bxl => reg[1] ^= literal as u64,
                Op::Bst => reg[1] = combo(literal, &reg)? % 8,
                Op::Jnz => {
                    if reg[0] != 0 {
                        ip = literal as usize;
                        continue;
                    }
                }
                Op::Bxc => reg[1] ^= reg[2],
                Op::Out => output.push((combo(literal, &reg)? % 8) as u8),
                Op::Bdv => reg[1] = shr(reg[0], combo(literal, &reg)?),
                Op::Cdv => reg[2] = shr(reg[0], combo(literal, &reg)?),
            }
            ip += 2;
        }
        trace!("program: halted after {steps} steps");
        Ok(Run {
            registers: reg,
            output,
        })
    }

    /// Smallest value of register A for which the program outputs a copy of
    /// itself.
    ///
    /// The program is assumed to print one value per loop and drop the low
    /// three bits of A each pass, so A is built one octal digit at a time
    /// from the most significant end: a prefix survives only if its output
    /// equals the matching suffix of the program. Digits are tried in
    /// ascending order, so the first full match is the smallest.
    pub fn smallest_quine(&self) -> Result<u64, PuzzleError> {
        let mut tried = 0;
        let found = self.extend_quine(0, 1, &mut tried)?;
        debug!("program: quine search tried {tried} prefixes");
        found.ok_or(PuzzleError::Search(SearchError::NoPath))
    }

    fn extend_quine(
        &self,
        prefix: u64,
        len: usize,
        tried: &mut usize,
    ) -> Result<Option<u64>, PuzzleError> {
        let target = &self.program[self.program.len().saturating_sub(len)..];
        for digit in 0..8 {
            let Some(a) = prefix.checked_mul(8).map(|p| p + digit) else {
                break;
            };
            *tried += 1;
            if self.run_with_a(a)?.output != target {
                continue;
            }
            if len >= self.program.len() {
                return Ok(Some(a));
            }
            if let Some(found) = self.extend_quine(a, len + 1, tried)? {
                return Ok(Some(found));
            }
        }
        Ok(None)
    }
}

impl fmt::Display for Computer {
    /// Disassembly, one instruction per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pair in self.program.chunks_exact(2) {
            match Op::try_from(pair[0]) {
                Ok(op) => writeln!(f, "{op} {}", pair[1])?,
                Err(_) => writeln!(f, "??? {}", pair[1])?,
            }
        }
        Ok(())
    }
}
