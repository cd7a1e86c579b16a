use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use capsweep_cli::output::confirmation_message;
use capsweep_lib::constants::{BITS_PER_KB, DEFAULT_OUTPUT_PATH};
use capsweep_lib::{export, SweepConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Capacity sweep dataset generator")]
struct Cli {
    /// Destination CSV file. The parent directory must already exist.
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Number of evenly spaced sample points.
    #[arg(long)]
    samples: Option<usize>,

    /// First sample point in KB (inclusive).
    #[arg(long = "start-kb")]
    start_kb: Option<f64>,

    /// Last sample point in KB (inclusive).
    #[arg(long = "end-kb")]
    end_kb: Option<f64>,

    /// Offset subtracted from the floored log term.
    #[arg(long)]
    offset: Option<f64>,
}

impl Cli {
    fn sweep_config(&self) -> SweepConfig {
        let mut config = SweepConfig::default();
        if let Some(samples) = self.samples {
            config.samples = samples;
        }
        if let Some(start_kb) = self.start_kb {
            config.start_bits = start_kb * BITS_PER_KB;
        }
        if let Some(end_kb) = self.end_kb {
            config.end_bits = end_kb * BITS_PER_KB;
        }
        if let Some(offset) = self.offset {
            config.offset = offset;
        }
        config
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    handle_export(&cli)
}

fn handle_export(cli: &Cli) -> Result<()> {
    let config = cli.sweep_config();
    tracing::debug!(?config, "resolved sweep configuration");

    export(&config, &cli.output).with_context(|| {
        format!(
            "failed to write capacity table to {}",
            cli.output.display()
        )
    })?;

    println!("{}", confirmation_message(&cli.output));
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
