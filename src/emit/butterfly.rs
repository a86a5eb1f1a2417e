//! Emits the butterfly network: the `log2(n)` stages of the decimated
//! Cooley-Tukey recursion, with twiddle values constant-folded and
//! statements whose result is provably zero elided.

use std::io::Write;

use crate::emit::{assemble_sum, Emitter, Sign, Term};
use crate::twiddle::{self, Thresholds, TwiddleClass};
use crate::zeroimag::ZeroImagTracker;

/// Writes every butterfly statement for an `n`-point transform.
///
/// Each pass multiplies `x[jj]` by the twiddle `wr +/- i*wi` (the sign
/// on the imaginary half flips between forward and inverse transforms),
/// then combines it with `x[ii]`:
///
/// ```text
/// t       = x[jj] * twiddle
/// x[jj]   = x[ii] - t
/// x[ii]  += t
/// ```
pub fn emit<W: Write>(
    emitter: &mut Emitter<W>,
    n: usize,
    inverse: bool,
    real_out: bool,
    symm_out: bool,
    nzi: &mut ZeroImagTracker,
) -> std::io::Result<()> {
    let thresholds = Thresholds::new(n as u32);
    let half = n / 2;

    // Sign attached to the cross (xi*wi / xr*wi) terms: the inverse
    // transform uses the conjugate twiddle, flipping both.
    let xi_wi_sign = if inverse { Sign::Minus } else { Sign::Plus };
    let xr_wi_sign = if inverse { Sign::Plus } else { Sign::Minus };

    let mut k = 1;
    while k < n {
        let istep = 2 * k;
        let last_stage = istep == n;

        for m in 0..k {
            let theta = 2.0 * std::f64::consts::PI * m as f64 / istep as f64;
            let wr = theta.cos();
            let wi = theta.sin();
            let wr_class = twiddle::classify(wr, &thresholds);
            let wi_class = twiddle::classify(wi, &thresholds);

            let mut i = m;
            while i < n {
                let ii = i;
                let jj = i + k;

                // `nzi[ii]`/`nzi[jj]` feed both this butterfly's tr/ti
                // construction and the suppression checks below;
                // snapshot them before either gets mutated.
                let ii_was_zero = nzi.is_zero(ii);
                let jj_was_zero = nzi.is_zero(jj);

                let xr_jj = format!("xr[{jj}]");
                let xi_jj = format!("xi[{jj}]");

                let tr_t1 = term(wr_class, wr, xr_jj.clone(), Sign::Plus);
                let tr_t2 = if jj_was_zero {
                    None
                } else {
                    term(wi_class, wi, xi_jj.clone(), xi_wi_sign)
                };
                let tr = assemble_sum(tr_t1, tr_t2);

                let ti_t1 = term(wi_class, wi, xr_jj, xr_wi_sign);
                let ti_t2 = if jj_was_zero {
                    None
                } else {
                    term(wr_class, wr, xi_jj, Sign::Plus)
                };
                let ti = assemble_sum(ti_t1, ti_t2);

                let suppress_upper = symm_out && last_stage && jj != half;

                // `tr`/`ti` are the caller-declared scalars: compute each
                // once into the named temporary, then reference the bare
                // variable everywhere below, rather than re-embedding the
                // expression text (which would silently re-read whatever
                // xr[jj]/xi[jj] were overwritten to by the xr[jj]=/xi[jj]=
                // line just above the xr[ii]+=/xi[ii]+= line).
                if let Some(expr) = &tr {
                    emitter.line(&format!("tr = {expr};"))?;
                }
                if let Some(expr) = &ti {
                    emitter.line(&format!("ti = {expr};"))?;
                }

                if !suppress_upper {
                    match &tr {
                        Some(_) => emitter.line(&format!("xr[{jj}] = xr[{ii}] - tr;"))?,
                        None => emitter.line(&format!("xr[{jj}] = xr[{ii}];"))?,
                    }
                }

                let emit_imag_jj = !(real_out && last_stage) && !suppress_upper;
                if emit_imag_jj {
                    match &ti {
                        Some(_) => emitter.line(&format!("xi[{jj}] = xi[{ii}] - ti;"))?,
                        None if ii_was_zero && last_stage => {
                            emitter.line(&format!("xi[{jj}] = 0.0;"))?
                        }
                        None if ii_was_zero => {}
                        None => emitter.line(&format!("xi[{jj}] = xi[{ii}];"))?,
                    }
                }

                if tr.is_some() {
                    emitter.line(&format!("xr[{ii}] += tr;"))?;
                }
                if ti.is_some() {
                    if ii_was_zero {
                        emitter.line(&format!("xi[{ii}] = ti;"))?;
                    } else {
                        emitter.line(&format!("xi[{ii}] += ti;"))?;
                    }
                }

                // xi[jj] stays provably zero only if xi[ii] was zero and
                // no ti term contributes; same rule for xi[ii] itself.
                if !(ii_was_zero && ti.is_none()) {
                    nzi.set_nonzero(jj);
                    nzi.set_nonzero(ii);
                }

                i += istep;
            }
        }

        k = istep;
    }

    Ok(())
}

/// Builds the signed, possibly-literal term for a twiddle-scaled
/// variable reference, folding `{0, +1, -1}` twiddle classes away.
/// `raw` is the underlying cosine/sine value, used as the literal
/// magnitude when `class` doesn't collapse to one of the folded forms.
fn term(class: TwiddleClass, raw: f64, var: String, base_sign: Sign) -> Option<Term> {
    match class {
        TwiddleClass::Zero => None,
        TwiddleClass::PlusOne => Some(Term::new(base_sign, None, var)),
        TwiddleClass::MinusOne => Some(Term::new(flip(base_sign), None, var)),
        TwiddleClass::Pos => Some(Term::new(base_sign, Some(raw), var)),
        TwiddleClass::Neg => Some(Term::new(flip(base_sign), Some(-raw), var)),
    }
}

fn flip(s: Sign) -> Sign {
    match s {
        Sign::Plus => Sign::Minus,
        Sign::Minus => Sign::Plus,
    }
}

#[cfg(test)]
#[path = "butterfly_tests.rs"]
mod tests;
