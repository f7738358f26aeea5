//! Program synthesis on a two-cell tape.
//!
//! Tape index 0 holds the value being printed, tape index 1 is scratch space
//! for loop counters. Every fragment leaves the pointer on the value cell and
//! the scratch cell at zero.

use crate::brainfuck;
use crate::decompose::{Decomposition, decompose};
use crate::error::{Error, Result};
use std::iter;

/// Delta magnitude above which rebuilding the value from zero is considered.
pub const FLIP_THRESHOLD: i64 = 10;

/// The cell the tape pointer currently rests on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Value,
    Scratch,
}

impl Cell {
    fn seek(self, target: Cell) -> &'static str {
        match (self, target) {
            (Cell::Value, Cell::Scratch) => ">",
            (Cell::Scratch, Cell::Value) => "<",
            _ => "",
        }
    }
}

fn push_run(code: &mut String, amount: i64) {
    let symbol = if amount < 0 { '-' } else { '+' };
    code.extend(iter::repeat_n(symbol, amount.unsigned_abs() as usize));
}

/// Emits `d` starting and ending on the value cell.
fn push_decomposition(code: &mut String, d: Decomposition) {
    if d.is_flat() {
        push_run(code, d.step + d.remainder);
        return;
    }
    code.push_str(Cell::Value.seek(Cell::Scratch));
    push_run(code, d.loops);
    code.push_str("[<");
    push_run(code, d.step);
    code.push_str(">-]");
    code.push_str(Cell::Scratch.seek(Cell::Value));
    push_run(code, d.remainder);
}

/// Generates the code that moves the value cell by `delta` to reach `target`.
///
/// Returns the fragment and the cell the pointer ends on. The caller is
/// responsible for the output instruction.
pub fn synthesize_delta(delta: i64, target: i64, cell: Cell) -> (String, Cell) {
    let mut code = String::from(cell.seek(Cell::Value));
    if delta == 0 {
        return (code, Cell::Value);
    }

    if target < -delta && delta.abs() > FLIP_THRESHOLD {
        // Zero the cell and build the target directly.
        let previous = target - delta;
        code.push_str(if previous < 0 { "[+]" } else { "[-]" });
        let d = decompose(target);
        log::trace!("rebuild {target} from zero as {d:?}");
        push_decomposition(&mut code, d);
    } else {
        let d = decompose(delta);
        log::trace!("apply delta {delta} as {d:?}");
        push_decomposition(&mut code, d);
    }
    (code, Cell::Value)
}

/// Differences between consecutive codes, the first taken against zero.
pub fn deltas(codes: &[i32]) -> Vec<i64> {
    codes
        .iter()
        .scan(0i64, |previous, &code| {
            let code = i64::from(code);
            let delta = code - *previous;
            *previous = code;
            Some(delta)
        })
        .collect()
}

/// Builds a program that prints `codes` in order.
pub fn synthesize(codes: &[i32]) -> String {
    let (program, _) = deltas(codes).into_iter().zip(codes).fold(
        (String::new(), Cell::default()),
        |(mut program, cell), (delta, &code)| {
            let (fragment, cell) = synthesize_delta(delta, i64::from(code), cell);
            program.push_str(&fragment);
            program.push('.');
            (program, cell)
        },
    );
    log::debug!(
        "synthesized {} symbols for {} codes",
        program.len(),
        codes.len()
    );
    program
}

/// The Unicode scalar values of `text`.
pub fn text_codes(text: &str) -> Vec<i32> {
    text.chars().map(|c| u32::from(c) as i32).collect()
}

pub fn synthesize_text(text: &str) -> String {
    synthesize(&text_codes(text))
}

/// Checks that `program` prints exactly `codes`.
pub fn verify(codes: &[i32], program: &str, step_limit: Option<u64>) -> Result<()> {
    let output = brainfuck::execute(program, step_limit)?;
    if output.len() != codes.len() {
        return Err(Error::OutputLength {
            expected: codes.len(),
            found: output.len(),
        });
    }
    match iter::zip(codes, &output)
        .enumerate()
        .find(|(_, (expected, found))| i64::from(**expected) != **found)
    {
        Some((index, (&expected, &found))) => Err(Error::OutputMismatch {
            index,
            expected: i64::from(expected),
            found,
        }),
        None => Ok(()),
    }
}
