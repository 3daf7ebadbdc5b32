use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{ensure, Context, Result};
use clap::Parser;

use procedural_motion::cli::Cli;
use procedural_motion::{FixedStepClock, FrameSample, MotionConfig, MotionScene, ZoomInput};

fn load_config(cli: &Cli) -> Result<MotionConfig> {
    match &cli.config {
        Some(path) => MotionConfig::load(path)
            .with_context(|| format!("loading configuration from {}", path.display())),
        None => Ok(MotionConfig::default()),
    }
}

fn write_samples(path: &std::path::Path, samples: &[FrameSample]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for sample in samples {
        serde_json::to_writer(&mut writer, sample)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    ensure!(cli.fps > 0.0, "--fps must be positive, got {}", cli.fps);
    ensure!(cli.duration >= 0.0, "--duration must not be negative, got {}", cli.duration);

    let config = load_config(&cli)?;
    let seed = cli.seed.unwrap_or_else(rand::random);
    log::info!("Running {:.1}s at {} fps, seed {}", cli.duration, cli.fps, seed);

    let mut scene = MotionScene::new(&config, seed).context("building motion scene")?;
    let mut clock = FixedStepClock::new(cli.fps);
    let first_input = ZoomInput {
        scroll: cli.scroll,
        pinch: cli.pinch,
    };

    let samples = scene.run(&mut clock, cli.frame_count(), |frame| {
        if frame.number == 0 {
            first_input
        } else {
            ZoomInput::default()
        }
    });

    if let Some(path) = &cli.output {
        write_samples(path, &samples)?;
        log::info!("Wrote {} samples to {}", samples.len(), path.display());
    }

    if !cli.quiet {
        let every = (cli.fps.round() as usize).max(1);
        for sample in samples.iter().step_by(every) {
            println!(
                "t={:6.2}s  patrol {:>28}  target {:?}  camera {:>28}",
                sample.time,
                format!("{:.2}", sample.patrol_position),
                sample.patrol_target,
                format!("{:.2}", sample.camera_position),
            );
        }
    }

    let retargets = samples.iter().filter(|s| s.retargeted).count();
    println!("{} frames, {} destination changes", samples.len(), retargets);
    if let Some(last) = samples.last() {
        println!(
            "final patrol position {:.2}, camera position {:.2}, zoom radius {:?}",
            last.patrol_position, last.camera_position, last.zoom_radius
        );
    }

    Ok(())
}
