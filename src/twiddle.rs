//! Twiddle-factor classification: the first of the two micro-optimizer
//! passes fused into the butterfly emitter. A twiddle value that
//! collapses to 0, +1 or -1 under size-derived tolerances lets the
//! emitter skip a multiply (or the whole term) instead of printing a
//! literal.

use std::f64::consts::PI;

/// Which of the five symbolic buckets a twiddle value falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TwiddleClass {
    Zero,
    PlusOne,
    MinusOne,
    Pos,
    Neg,
}

/// Classification tolerances, derived once per generator run from `n`.
///
/// These are *not* arbitrary epsilons: `eps` is half the smallest
/// nonzero sine magnitude that can occur in a radix-2 FFT of size `n`,
/// and `eps_one`/`eps_minus_one` are the matching bound for the twiddle
/// closest to +-1 short of being exactly it. Changing the derivation
/// changes which values fold and silently changes the emitted program.
#[derive(Debug, Clone, Copy)]
pub struct Thresholds {
    pub eps: f64,
    pub eps_one: f64,
    pub eps_minus_one: f64,
}

impl Thresholds {
    /// Builds the thresholds for an `n`-point transform.
    ///
    /// `n < 2` never drives a butterfly stage (there are none), so the
    /// values returned here are unused placeholders in that case.
    pub fn new(n: u32) -> Self {
        if n < 2 {
            return Thresholds {
                eps: 0.0,
                eps_one: 1.0,
                eps_minus_one: -1.0,
            };
        }
        let half = (n / 2) as f64;
        let eps = 0.5 * (PI / half).sin();
        let eps_one = 1.0 - 0.5 * (1.0 - (PI / half).cos());
        Thresholds {
            eps,
            eps_one,
            eps_minus_one: -eps_one,
        }
    }
}

/// Classifies `w` (a cosine or sine value) against `t`.
pub fn classify(w: f64, t: &Thresholds) -> TwiddleClass {
    if w.abs() <= t.eps {
        TwiddleClass::Zero
    } else if w >= t.eps_one {
        TwiddleClass::PlusOne
    } else if w <= t.eps_minus_one {
        TwiddleClass::MinusOne
    } else if w > 0.0 {
        TwiddleClass::Pos
    } else {
        TwiddleClass::Neg
    }
}

#[cfg(test)]
#[path = "twiddle_tests.rs"]
mod tests;
