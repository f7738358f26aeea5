//! Reference interpreter for generated programs.
//!
//! Cells are unbounded signed integers rather than wrapping bytes so that any
//! character code, including negative ones, can be read back exactly.

use crate::error::{Error, Result};
use std::iter::Peekable;

#[derive(Debug, PartialEq, Clone)]
pub enum BaseInst {
    Inc(i64),
    Shift(i32),
    Output,
    Block(Vec<BaseInst>),
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Inst {
    Inc(i64),
    Shift(i32),
    Output,
    /// Jumps past the matching `Close` when the current cell is zero.
    Open(usize),
    /// Jumps back to the matching `Open` when the current cell is nonzero.
    Close(usize),
}

/// State left behind by a finished run.
#[derive(Debug, Clone, Default)]
pub struct Execution {
    pub output: Vec<i64>,
    pub data: Vec<i64>,
    pub dp: usize,
    pub steps: u64,
}

pub fn parse(code: &str) -> Result<Vec<BaseInst>> {
    fn parse_block<I: Iterator<Item = (usize, char)>>(
        iter: &mut I,
        open: Option<usize>,
    ) -> Result<Vec<BaseInst>> {
        let mut prog = Vec::new();
        while let Some((offset, ch)) = iter.next() {
            match ch {
                '+' => prog.push(BaseInst::Inc(1)),
                '-' => prog.push(BaseInst::Inc(-1)),
                '>' => prog.push(BaseInst::Shift(1)),
                '<' => prog.push(BaseInst::Shift(-1)),
                '.' => prog.push(BaseInst::Output),
                ',' => {
                    return Err(Error::Unsupported {
                        instruction: ch,
                        offset,
                    });
                }
                '[' => prog.push(BaseInst::Block(parse_block(iter, Some(offset))?)),
                ']' => {
                    return match open {
                        Some(_) => Ok(prog),
                        None => Err(Error::UnmatchedClose(offset)),
                    };
                }
                _ => continue,
            }
        }
        match open {
            Some(offset) => Err(Error::UnmatchedOpen(offset)),
            None => Ok(prog),
        }
    }
    parse_block(&mut code.char_indices(), None)
}

pub fn compress(prog: Vec<BaseInst>) -> Vec<BaseInst> {
    fn compress_block(block: Vec<BaseInst>) -> Vec<BaseInst> {
        let mut iter = block.into_iter().peekable();
        let mut compressed = Vec::with_capacity(iter.size_hint().0);
        while let Some(inst) = iter.next() {
            match inst {
                BaseInst::Inc(mut val) => {
                    while let Some(BaseInst::Inc(next)) = iter.peek() {
                        val += *next;
                        iter.next();
                    }
                    if val != 0 {
                        compressed.push(BaseInst::Inc(val));
                    }
                }
                BaseInst::Shift(mut off) => {
                    while let Some(BaseInst::Shift(next)) = iter.peek() {
                        off += *next;
                        iter.next();
                    }
                    if off != 0 {
                        compressed.push(BaseInst::Shift(off));
                    }
                }
                BaseInst::Block(inner) => {
                    compressed.push(BaseInst::Block(compress_block(inner)));
                }
                other => compressed.push(other),
            }
        }
        compressed
    }
    compress_block(prog)
}

pub fn flatten(prog: Vec<BaseInst>) -> Vec<Inst> {
    fn flatten_block<I: Iterator<Item = BaseInst>>(iter: &mut Peekable<I>, flat: &mut Vec<Inst>) {
        while let Some(inst) = iter.next() {
            match inst {
                BaseInst::Inc(inc) => flat.push(Inst::Inc(inc)),
                BaseInst::Shift(arg) => flat.push(Inst::Shift(arg)),
                BaseInst::Output => flat.push(Inst::Output),
                BaseInst::Block(block) => {
                    let open = flat.len();
                    flat.push(Inst::Open(0));
                    flatten_block(&mut block.into_iter().peekable(), flat);
                    let close = flat.len();
                    flat.push(Inst::Close(open));
                    flat[open] = Inst::Open(close);
                }
            }
        }
    }
    let mut flat = Vec::new();
    flatten_block(&mut prog.into_iter().peekable(), &mut flat);
    flat
}

/// Runs `prog` on a tape that grows to the right on demand.
///
/// `step_limit` bounds the number of executed instructions.
pub fn run(prog: &[Inst], step_limit: Option<u64>) -> Result<Execution> {
    let mut data = vec![0i64; 1];
    let mut dp: usize = 0;
    let mut ip: usize = 0;
    let mut output = Vec::new();
    let mut steps = 0u64;
    while ip < prog.len() {
        if step_limit.is_some_and(|limit| steps >= limit) {
            return Err(Error::StepLimit(steps));
        }
        steps += 1;
        match prog[ip] {
            Inst::Inc(inc) => data[dp] = data[dp].wrapping_add(inc),
            Inst::Shift(arg) => {
                dp = dp
                    .checked_add_signed(arg as isize)
                    .ok_or(Error::TapeUnderflow)?;
                if dp >= data.len() {
                    data.resize(dp + 1, 0);
                }
            }
            Inst::Output => output.push(data[dp]),
            Inst::Open(close) => {
                if data[dp] == 0 {
                    ip = close;
                }
            }
            Inst::Close(open) => {
                if data[dp] != 0 {
                    ip = open;
                }
            }
        }
        ip += 1;
    }
    Ok(Execution {
        output,
        data,
        dp,
        steps,
    })
}

pub fn compile(code: &str) -> Result<Vec<Inst>> {
    let prog = parse(code)?;
    Ok(flatten(compress(prog)))
}

/// Compiles and runs `code`, returning the printed values.
pub fn execute(code: &str, step_limit: Option<u64>) -> Result<Vec<i64>> {
    let prog = compile(code)?;
    let execution = run(&prog, step_limit)?;
    log::debug!(
        "executed {} instructions in {} steps, {} values printed",
        prog.len(),
        execution.steps,
        execution.output.len()
    );
    Ok(execution.output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compress_merges_runs() {
        let prog = compress(parse("+++--><<[->+<]").unwrap());
        assert_eq!(
            prog,
            vec![
                BaseInst::Inc(1),
                BaseInst::Shift(-1),
                BaseInst::Block(vec![
                    BaseInst::Inc(-1),
                    BaseInst::Shift(1),
                    BaseInst::Inc(1),
                    BaseInst::Shift(-1),
                ]),
            ]
        );
    }

    #[test]
    fn comments_are_skipped() {
        assert_eq!(parse("a+b").unwrap(), vec![BaseInst::Inc(1)]);
    }

    #[test]
    fn flatten_links_brackets() {
        let flat = compile("[[-]>]").unwrap();
        assert_eq!(
            flat,
            vec![
                Inst::Open(5),
                Inst::Open(3),
                Inst::Inc(-1),
                Inst::Close(1),
                Inst::Shift(1),
                Inst::Close(0),
            ]
        );
    }

    #[test]
    fn multiplication_loop() {
        assert_eq!(
            execute(">++++++++[<+++++++++>-]<.", None).unwrap(),
            vec![72]
        );
    }

    #[test]
    fn cells_hold_negative_values() {
        assert_eq!(execute("---.+++++.", None).unwrap(), vec![-3, 2]);
    }

    #[test]
    fn tape_state_is_reported() {
        let execution = run(&compile(">>+++<").unwrap(), None).unwrap();
        assert_eq!(execution.data, vec![0, 0, 3]);
        assert_eq!(execution.dp, 1);
    }

    #[test]
    fn unmatched_brackets() {
        assert!(matches!(parse("+[>+"), Err(Error::UnmatchedOpen(1))));
        assert!(matches!(parse("+]"), Err(Error::UnmatchedClose(1))));
    }

    #[test]
    fn input_is_rejected() {
        assert!(matches!(
            parse("+,"),
            Err(Error::Unsupported {
                instruction: ',',
                offset: 1
            })
        ));
    }

    #[test]
    fn underflow_is_an_error() {
        assert!(matches!(execute("<", None), Err(Error::TapeUnderflow)));
    }

    #[test]
    fn step_limit_stops_infinite_loops() {
        assert!(matches!(execute("+[]", Some(1000)), Err(Error::StepLimit(1000))));
    }
}
