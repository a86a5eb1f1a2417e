use std::io::{self, BufWriter};
use std::process::ExitCode;

use clap::Parser;

use fftgen::config::{Cli, Config};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match try_main(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("fftgen: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::new().filter_level(level).init();
}

fn try_main(cli: Cli) -> anyhow::Result<()> {
    let config = Config::from_cli(cli)?;
    log::debug!("running with {config:?}");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    fftgen::run(&config, &mut out)?;
    Ok(())
}
