use std::path::PathBuf;

use clap::Parser;

/// Render every image of a sprite sheet into a decorated panel PNG.
#[derive(Parser, Debug)]
#[command(name = "panelkit-demo", version)]
pub struct Cli {
    /// JSON panel configuration.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Extra resource directory, searched after the configured ones.
    #[arg(long = "resources", value_name = "DIR")]
    pub resources: Vec<PathBuf>,

    /// Sheet to load, e.g. `leds.png`.
    #[arg(long)]
    pub sheet: String,

    /// Keep only entries carrying this tag.
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Decoration framing each image.
    #[arg(long)]
    pub decoration: Option<String>,

    /// Images per row.
    #[arg(long, default_value_t = 8)]
    pub columns: usize,

    #[arg(long, short, default_value = "panel.png")]
    pub output: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Default log filter when `RUST_LOG` is unset.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
