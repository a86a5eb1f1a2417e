//! Shared plumbing for the two emission passes (permutation, butterfly):
//! a thin writer plus the sign/literal rendering rules used to fold
//! constant twiddle values into terse C-family expressions.

pub mod butterfly;
pub mod permute;

use std::io::{self, Write};

/// The algebraic sign with which a term contributes to a sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Plus,
    Minus,
}

/// A single summand of a `tr`/`ti` expression: a sign, an optional
/// literal coefficient (`None` means the coefficient folded to unit
/// magnitude), and the variable text it multiplies (e.g. `"xr[3]"`).
pub struct Term {
    pub sign: Sign,
    pub lit: Option<f64>,
    pub var: String,
}

impl Term {
    pub fn new(sign: Sign, lit: Option<f64>, var: String) -> Self {
        Term { sign, lit, var }
    }

    /// The term's magnitude text, without a leading sign: `"xr[3]"` or
    /// `"1.2345678901234e-1*xr[3]"`.
    fn magnitude(&self) -> String {
        match self.lit {
            Some(v) => format!("{}*{}", format_literal(v), self.var),
            None => self.var.clone(),
        }
    }
}

/// Formats a literal with at least 14 significant decimal digits in
/// scientific notation, per the output grammar's contract.
pub fn format_literal(v: f64) -> String {
    format!("{:.13e}", v)
}

/// Joins zero, one, or two terms into a single expression, folding the
/// leading sign into a unary minus when there's only one term and
/// rendering the second term's sign as an infix `+`/`-` otherwise.
/// Returns `None` when both terms are absent (the sum is exactly zero).
pub fn assemble_sum(term1: Option<Term>, term2: Option<Term>) -> Option<String> {
    match (term1, term2) {
        (None, None) => None,
        (Some(t), None) | (None, Some(t)) => {
            let mag = t.magnitude();
            Some(match t.sign {
                Sign::Plus => mag,
                Sign::Minus => format!("-{}", mag),
            })
        }
        (Some(a), Some(b)) => {
            let lead = match a.sign {
                Sign::Plus => String::new(),
                Sign::Minus => "-".to_string(),
            };
            let op = match b.sign {
                Sign::Plus => "+",
                Sign::Minus => "-",
            };
            Some(format!("{}{} {} {}", lead, a.magnitude(), op, b.magnitude()))
        }
    }
}

/// Append-only sink the two emission passes write statements to.
pub struct Emitter<W: Write> {
    out: W,
}

impl<W: Write> Emitter<W> {
    pub fn new(out: W) -> Self {
        Emitter { out }
    }

    pub fn line(&mut self, s: &str) -> io::Result<()> {
        writeln!(self.out, "{}", s)
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }
}
