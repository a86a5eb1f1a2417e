//! Builds the bit-reversal swap list and, under the input-symmetry
//! optimization, reorders it so a Hermitian fill-in is never clobbered
//! before it's read.

/// One entry in the reordered permutation list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapRecord {
    pub m: usize,
    pub mr: usize,
    /// Source index to read from for the `m`-side write. Equal to `m`
    /// unless `use_symm` applies.
    pub m_src: usize,
    /// Source index to read from for the `mr`-side write. Equal to
    /// `mr` unless `use_symm` applies.
    pub mr_src: usize,
    pub use_symm: bool,
}

/// Output of the planner: the ordered swap/copy records plus the list
/// of upper-half indices that the bit-reversal never touches and that
/// must be Hermitian-filled from their lower-half mirror before any
/// swap runs.
#[derive(Debug, Clone)]
pub struct PlannerResult {
    pub records: Vec<SwapRecord>,
    pub fills: Vec<usize>,
}

/// Builds the permutation plan for an `n`-point transform.
pub fn build(n: usize, symm_in: bool) -> PlannerResult {
    let mut records: Vec<SwapRecord> = Vec::new();
    let mut touched = vec![false; n];

    let mut mr: usize = 0;
    for m in 1..n {
        // Gold-Rader recurrence for the next bit-reversed index.
        let mut k = n;
        loop {
            k /= 2;
            if mr + k <= n - 1 {
                break;
            }
        }
        mr = (mr % k) + k;

        if mr <= m {
            continue;
        }

        touched[m] = true;
        touched[mr] = true;

        let half = n / 2;
        if !symm_in || (m <= half && mr <= half) {
            records.push(SwapRecord {
                m,
                mr,
                m_src: m,
                mr_src: mr,
                use_symm: false,
            });
            continue;
        }

        let m_src = if m > half { n - m } else { m };
        let mr_src = if mr > half { n - mr } else { mr };

        let mut needed = Vec::with_capacity(2);
        if m > half {
            needed.push(m_src);
        }
        if mr > half {
            needed.push(mr_src);
        }

        let earliest = records
            .iter()
            .position(|r| needed.contains(&r.m) || needed.contains(&r.mr));

        let record = SwapRecord {
            m,
            mr,
            m_src,
            mr_src,
            use_symm: true,
        };

        match earliest {
            Some(p) if p > 0 => records.insert(p, record),
            _ => records.push(record),
        }
    }

    let mut fills = Vec::new();
    if symm_in {
        let half = n / 2;
        for i in (half + 1)..n {
            if i < touched.len() && !touched[i] {
                fills.push(i);
            }
        }
    }

    PlannerResult { records, fills }
}

#[cfg(test)]
#[path = "planner_tests.rs"]
mod tests;
