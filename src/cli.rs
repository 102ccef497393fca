//! Command-line argument parsing for the key state viewer

use clap::Parser;
use std::path::PathBuf;

use crate::config::TrackerConfig;

/// Show which keys are held down, polled once per frame
#[derive(Parser, Debug)]
#[command(name = "keystate", version, about = "Polled keyboard state viewer")]
pub struct CliArgs {
    /// Comma-separated key names to watch (e.g. "w,a,s,d,space")
    #[arg(short, long, value_name = "NAMES", value_delimiter = ',')]
    pub keys: Vec<String>,

    /// Cancel default handling of key events (Escape no longer closes the window)
    #[arg(short, long)]
    pub suppress_default: bool,

    /// Read configuration from this file instead of the user config dir
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print every known key name with its code and exit
    #[arg(long)]
    pub list: bool,
}

impl CliArgs {
    /// Overlay command-line options on a loaded config
    pub fn apply_to(&self, config: &mut TrackerConfig) {
        if !self.keys.is_empty() {
            config.watch = self
                .keys
                .iter()
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty())
                .collect();
        }
        if self.suppress_default {
            config.suppress_default_behavior = true;
        }
    }
}
