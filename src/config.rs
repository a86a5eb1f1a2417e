//! Command-line surface and the validated, immutable configuration it
//! produces.

use clap::Parser;

use crate::error::GenError;

/// Generate unrolled, constant-folded FFT/IFFT source code.
///
/// Short and long option pairing mirrors the tool this crate is modeled
/// on; in particular `-s` is the *output* symmetry flag and `-m` is the
/// *input* symmetry flag. That pairing looks backwards at a glance, but
/// it's load-bearing for anyone already scripting against it.
#[derive(Parser, Debug)]
#[command(name = "fftgen", version, about)]
pub struct Cli {
    /// Number of data points. Must be a power of two.
    #[arg(short = 'n', long = "points")]
    pub points: u32,

    /// Generate an inverse FFT. The result must be divided by `points`
    /// by the caller.
    #[arg(short = 'i', long = "inverse")]
    pub inverse: bool,

    /// Assume the input imaginary values are all zero.
    #[arg(short = 'r', long = "real-in-opt")]
    pub real_in: bool,

    /// Assume the output imaginary values are all zero.
    #[arg(short = 'o', long = "real-out-opt")]
    pub real_out: bool,

    /// Assume the output is Hermitian-symmetric about n/2; the upper
    /// half is not computed.
    #[arg(short = 's', long = "symm-out-opt")]
    pub symm_out: bool,

    /// Assume the input is Hermitian-symmetric about n/2; the upper
    /// half need not be initialized by the caller.
    #[arg(short = 'm', long = "symm-in-opt")]
    pub symm_in: bool,

    /// Emit a GPLv3 license banner before the generated code.
    #[arg(short = 'l', long = "license")]
    pub license: bool,

    /// Increase diagnostic verbosity. Can be repeated.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Validated, immutable configuration for one generator run.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    pub n: u32,
    pub inverse: bool,
    pub real_in: bool,
    pub real_out: bool,
    pub symm_in: bool,
    pub symm_out: bool,
    pub license: bool,
    pub verbose: u8,
}

impl Config {
    /// Validates `n` and bundles the flags into an immutable `Config`.
    ///
    /// No cross-flag validation is performed: combinations that don't
    /// make much sense (e.g. `real_out` without `inverse`) are accepted
    /// without complaint, same as the tool this crate is modeled on.
    pub fn from_cli(cli: Cli) -> Result<Self, GenError> {
        if cli.points == 0 {
            return Err(GenError::MissingPoints);
        }
        if !cli.points.is_power_of_two() {
            return Err(GenError::NotPowerOfTwo(cli.points));
        }
        Ok(Config {
            n: cli.points,
            inverse: cli.inverse,
            real_in: cli.real_in,
            real_out: cli.real_out,
            symm_in: cli.symm_in,
            symm_out: cli.symm_out,
            license: cli.license,
            verbose: cli.verbose,
        })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
