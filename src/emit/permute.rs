//! Emits the Hermitian fill-ins and the bit-reversal swap/copy
//! statements built by `planner::build`.

use std::io::Write;

use crate::emit::Emitter;
use crate::planner::PlannerResult;

/// Writes the fill-ins (if any) and then every swap record, followed by
/// the blank line that separates the permutation phase from the
/// butterflies.
pub fn emit<W: Write>(
    emitter: &mut Emitter<W>,
    plan: &PlannerResult,
    n: usize,
    real_in: bool,
) -> std::io::Result<()> {
    for &i in &plan.fills {
        emitter.line(&format!("xr[{i}] = xr[{}];", n - i))?;
        if !real_in {
            emitter.line(&format!("xi[{i}] = -xi[{}];", n - i))?;
        }
    }

    for r in &plan.records {
        if r.use_symm {
            emit_symmetric(emitter, r, real_in)?;
        } else {
            emit_swap(emitter, r, real_in)?;
        }
    }

    emitter.blank()
}

fn emit_swap<W: Write>(
    emitter: &mut Emitter<W>,
    r: &crate::planner::SwapRecord,
    real_in: bool,
) -> std::io::Result<()> {
    let (m, mr) = (r.m, r.mr);
    emitter.line(&format!("tr = xr[{m}];"))?;
    emitter.line(&format!("xr[{m}] = xr[{mr}];"))?;
    emitter.line(&format!("xr[{mr}] = tr;"))?;
    if !real_in {
        emitter.line(&format!("ti = xi[{m}];"))?;
        emitter.line(&format!("xi[{m}] = xi[{mr}];"))?;
        emitter.line(&format!("xi[{mr}] = ti;"))?;
    }
    Ok(())
}

fn emit_symmetric<W: Write>(
    emitter: &mut Emitter<W>,
    r: &crate::planner::SwapRecord,
    real_in: bool,
) -> std::io::Result<()> {
    let (m, mr, m_src, mr_src) = (r.m, r.mr, r.m_src, r.mr_src);

    emitter.line(&format!("xr[{mr}] = xr[{m_src}];"))?;
    emitter.line(&format!("xr[{m}] = xr[{mr_src}];"))?;

    if !real_in {
        let neg_for_mr = r.m != r.m_src; // original m exceeded n/2
        let neg_for_m = r.mr != r.mr_src; // original mr exceeded n/2

        let rhs1 = if neg_for_mr {
            format!("-xi[{m_src}]")
        } else {
            format!("xi[{m_src}]")
        };
        let rhs2 = if neg_for_m {
            format!("-xi[{mr_src}]")
        } else {
            format!("xi[{mr_src}]")
        };

        emitter.line(&format!("xi[{mr}] = {rhs1};"))?;
        emitter.line(&format!("xi[{m}] = {rhs2};"))?;
    }
    Ok(())
}
