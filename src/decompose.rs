//! Multiplicative decompositions of cell deltas.
//!
//! A value `n` is reached either by a flat run of `|n|` increments or by a loop
//! that adds `step` to the value cell `loops` times, followed by a flat
//! `remainder`. The cost of each shape is approximated by the sum of the
//! magnitudes involved, which is the number of `+`/`-` symbols it emits.

/// Smallest loop count the factor search will try.
pub const MIN_FACTOR: i64 = 3;

/// Symbols a loop spends on its own scaffolding: `[`, `]`, the two pointer
/// moves inside the body and the counter decrement. A flat run avoids all of
/// them, so it is allowed to be this much more expensive than a loop.
pub const LOOP_OVERHEAD: i64 = 5;

/// `loops` iterations adding `step`, then a flat `remainder`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decomposition {
    pub loops: i64,
    pub step: i64,
    pub remainder: i64,
}

impl Decomposition {
    /// The value this decomposition builds from zero.
    pub fn value(&self) -> i64 {
        self.loops * self.step + self.remainder
    }

    /// A single iteration needs no loop at all.
    pub fn is_flat(&self) -> bool {
        self.loops == 1
    }

    pub fn cost(&self) -> i64 {
        self.loops.abs() + self.step.abs() + self.remainder.abs()
    }
}

/// Returns the factor pair of `n` whose factors are closest to each other.
///
/// The first element is the largest divisor of `n` in
/// `MIN_FACTOR..=isqrt(|n|)` and is always positive; the second keeps the sign
/// of `n`. When no such divisor exists the trivial pair `(1, n)` is returned.
pub fn factor_pair(n: i64) -> (i64, i64) {
    let root = n.unsigned_abs().isqrt() as i64;
    (MIN_FACTOR..=root)
        .rev()
        .find(|d| n % d == 0)
        .map_or((1, n), |d| (d, n / d))
}

fn nearest_root(magnitude: i64) -> i64 {
    let root = magnitude.isqrt();
    let below = (root * root - magnitude).abs();
    let above = ((root + 1) * (root + 1) - magnitude).abs();
    if below > above { root + 1 } else { root }
}

/// Picks the cheaper of the square-root and factor-pair loops for `n`.
pub fn decompose(n: i64) -> Decomposition {
    let sign = if n > 0 { 1 } else { -1 };
    let magnitude = n.abs();
    let root = nearest_root(magnitude);
    let square = Decomposition {
        loops: root,
        step: sign * root,
        remainder: sign * (magnitude - root * root),
    };

    let (loops, step) = factor_pair(n);
    let factored = Decomposition {
        loops,
        step,
        remainder: 0,
    };

    if factored.cost() <= square.cost()
        || (factored.is_flat() && factored.cost() - LOOP_OVERHEAD <= square.cost())
    {
        factored
    } else {
        square
    }
}
