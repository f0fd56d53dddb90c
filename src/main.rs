use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use quake_sqrt::harness::{Harness, HarnessConfig, NativeLibrary, DEFAULT_SAMPLES, LIBRARY_ENV};

#[derive(Parser, Debug)]
#[command(name = "quake-sqrt")]
#[command(about = "Times f32::sqrt against the Quake III fast inverse square root")]
#[command(version)]
struct Cli {
    /// Number of random inputs in [0, 10000)
    #[arg(long, default_value_t = DEFAULT_SAMPLES)]
    samples: usize,

    /// Seed for input generation (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Shared library exporting `Q_rsqrt`
    #[arg(long, env = LIBRARY_ENV)]
    library: Option<PathBuf>,

    /// Exit without waiting for Enter
    #[arg(long)]
    no_pause: bool,
}

fn init_logger() {
    let env = env_logger::Env::new()
        .filter_or("QRSQRT_LOG", "info")
        .write_style("QRSQRT_LOG_STYLE");
    env_logger::init_from_env(env);
}

fn pause() -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "Press Enter to exit")?;
    stdout.flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger();

    let path = NativeLibrary::locate(cli.library.as_deref())
        .context("resolving the Q_rsqrt shared library")?;
    let external = NativeLibrary::load(&path).context("loading the Q_rsqrt shared library")?;

    let config = HarnessConfig {
        samples: cli.samples,
        seed: cli.seed,
    };
    info!("Running {} samples", config.samples);
    let report = Harness::new(config, external).run()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report.write_to(&mut out)?;
    out.flush()?;
    drop(out);
    report.warn_non_finite();

    if !cli.no_pause {
        pause()?;
    }
    Ok(())
}
