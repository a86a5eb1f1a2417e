//! Library surface for the FFT/IFFT source-code generator: given a
//! validated `Config`, writes unrolled, constant-folded C-family
//! statements to any `Write` sink.

pub mod config;
pub mod emit;
pub mod error;
pub mod license;
pub mod planner;
pub mod twiddle;
pub mod zeroimag;

use std::io::Write;

use config::Config;
use error::GenError;
use zeroimag::ZeroImagTracker;

/// Runs one generation pass, writing the emitted statements to `out`.
pub fn run<W: Write>(config: &Config, out: W) -> Result<(), GenError> {
    let mut emitter = emit::Emitter::new(out);

    if config.license {
        for line in license::BANNER.lines() {
            emitter.line(line)?;
        }
        emitter.blank()?;
    }

    let n = config.n as usize;
    if n <= 1 {
        return Ok(());
    }

    let plan = planner::build(n, config.symm_in);
    emit::permute::emit(&mut emitter, &plan, n, config.real_in)?;

    let mut nzi = ZeroImagTracker::new(n, config.real_in);
    emit::butterfly::emit(
        &mut emitter,
        n,
        config.inverse,
        config.real_out,
        config.symm_out,
        &mut nzi,
    )?;

    Ok(())
}
