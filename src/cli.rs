// cli.rs - Command-line interface for the headless motion runner
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "procedural-motion")]
#[command(about = "Headless waypoint patrol and orbit camera simulation", long_about = None)]
pub struct Cli {
    /// JSON configuration file, defaults are used when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Simulated seconds
    #[arg(long, default_value_t = 10.0)]
    pub duration: f32,

    /// Ticks per simulated second
    #[arg(long, default_value_t = 60.0)]
    pub fps: f32,

    /// Seed for waypoint selection, random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Mouse wheel delta applied on the first frame
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub scroll: f32,

    /// Pinch delta applied on the first frame
    #[arg(long, allow_hyphen_values = true)]
    pub pinch: Option<f32>,

    /// Write every frame sample as JSON lines
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only print the final summary
    #[arg(long = "quiet", default_value = "false")]
    pub quiet: bool,
}

impl Cli {
    pub fn frame_count(&self) -> usize {
        (self.duration * self.fps).round().max(0.0) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["procedural-motion"]);
        assert_eq!(cli.duration, 10.0);
        assert_eq!(cli.fps, 60.0);
        assert_eq!(cli.frame_count(), 600);
        assert!(cli.config.is_none());
        assert!(!cli.quiet);
    }

    #[test]
    fn test_negative_scroll() {
        let cli = Cli::parse_from(["procedural-motion", "--scroll", "-0.5", "--seed", "4"]);
        assert_eq!(cli.scroll, -0.5);
        assert_eq!(cli.seed, Some(4));
    }
}
