//! holoexpo - native landing page for a tech event
//!
//! Main executable: windowed page by default, fixed-step headless runner
//! with `--headless`.

mod config;
mod content;
mod headless;
mod page;
mod scene;

use anyhow::Result;
use config::LandingConfig;
use headless::{HeadlessConfig, PointerPath};
use holoexpo_core::Viewport;
use page::{LandingPage, PageAction};
use std::{env, path::PathBuf};
use tracing::info;
use winit::event_loop::{ControlFlow, EventLoop};

fn main() -> Result<()> {
    // Initialize tracing with WARN level by default (can be overridden via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    info!("Starting holoexpo v{}", env!("CARGO_PKG_VERSION"));

    let cli = CliOptions::parse(env::args().skip(1));
    let landing = match &cli.config {
        Some(path) => LandingConfig::load_from_path(path),
        None => LandingConfig::load(),
    };

    if let Some(path) = &cli.save_config {
        landing.save_to_path(path)?;
        info!("Wrote landing config to {}", path.display());
        return Ok(());
    }

    if cli.headless {
        let report = headless::run(HeadlessConfig {
            landing,
            width: cli.resolution.0,
            height: cli.resolution.1,
            frames: cli.frames,
            pointer_path: cli.pointer_path,
            resize: cli.resize_at,
            metrics_out: cli.metrics_out.clone(),
            record_out: cli.record_out.clone(),
        })?;
        info!(frames = report.frames, result = ?report.result, "headless run complete");
        if !report.failures.is_empty() {
            anyhow::bail!("headless run failed {} checks", report.failures.len());
        }
        return Ok(());
    }

    if cli.metrics_out.is_some() || cli.record_out.is_some() || cli.resize_at.is_some() {
        tracing::warn!("--metrics-out/--record-out/--resize-at have no effect without --headless");
    }

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut page = Some(LandingPage::new(&event_loop, landing, cli.resolution)?);

    event_loop.run(move |event, elwt| {
        let action = match page.as_mut() {
            Some(current) => current.handle_event(&event, elwt),
            None => PageAction::Quit,
        };
        if let PageAction::Quit = action {
            if page.take().is_some() {
                info!("Closing landing page");
            }
            elwt.exit();
        }
    })?;

    info!("holoexpo shutting down");
    Ok(())
}

#[derive(Debug, Clone)]
struct CliOptions {
    headless: bool,
    frames: u64,
    resolution: (u32, u32),
    config: Option<PathBuf>,
    save_config: Option<PathBuf>,
    metrics_out: Option<PathBuf>,
    record_out: Option<PathBuf>,
    pointer_path: PointerPath,
    resize_at: Option<(u64, Viewport)>,
}

fn parse_resolution(raw: &str) -> Option<(u32, u32)> {
    let (w, h) = raw.split_once('x')?;
    match (w.parse::<u32>(), h.parse::<u32>()) {
        (Ok(width), Ok(height)) if width > 0 && height > 0 => Some((width, height)),
        _ => None,
    }
}

impl CliOptions {
    fn parse<I: Iterator<Item = String>>(mut args: I) -> Self {
        let mut opts = CliOptions {
            headless: false,
            frames: 600,
            resolution: (1280, 720),
            config: None,
            save_config: None,
            metrics_out: None,
            record_out: None,
            pointer_path: PointerPath::Circle,
            resize_at: None,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--headless" => opts.headless = true,
                "--frames" => {
                    if let Some(raw) = args.next() {
                        match raw.parse::<u64>() {
                            Ok(value) => opts.frames = value,
                            Err(err) => {
                                tracing::error!(%err, value = %raw, "--frames must be an integer");
                            }
                        }
                    } else {
                        tracing::error!("--frames requires an integer");
                    }
                }
                "--resolution" => {
                    if let Some(raw) = args.next() {
                        match parse_resolution(&raw) {
                            Some(resolution) => opts.resolution = resolution,
                            None => {
                                tracing::error!(value = %raw, "--resolution must be like 1280x720");
                            }
                        }
                    } else {
                        tracing::error!("--resolution requires a value like 1280x720");
                    }
                }
                "--config" => {
                    if let Some(path) = args.next() {
                        opts.config = Some(PathBuf::from(path));
                    } else {
                        tracing::error!("--config requires a file path");
                    }
                }
                "--save-config" => {
                    if let Some(path) = args.next() {
                        opts.save_config = Some(PathBuf::from(path));
                    } else {
                        tracing::error!("--save-config requires a file path");
                    }
                }
                "--metrics-out" => {
                    if let Some(path) = args.next() {
                        opts.metrics_out = Some(PathBuf::from(path));
                    } else {
                        tracing::error!("--metrics-out requires a file path");
                    }
                }
                "--record-out" => {
                    if let Some(path) = args.next() {
                        opts.record_out = Some(PathBuf::from(path));
                    } else {
                        tracing::error!("--record-out requires a file path");
                    }
                }
                "--pointer-path" => {
                    if let Some(raw) = args.next() {
                        match PointerPath::parse(&raw) {
                            Some(path) => opts.pointer_path = path,
                            None => {
                                tracing::error!(value = %raw, "--pointer-path must be circle or none");
                            }
                        }
                    } else {
                        tracing::error!("--pointer-path requires circle or none");
                    }
                }
                "--resize-at" => {
                    if let Some(raw) = args.next() {
                        let parsed = raw.split_once(':').and_then(|(frame, size)| {
                            let frame = frame.parse::<u64>().ok()?;
                            let (w, h) = parse_resolution(size)?;
                            Some((frame, Viewport::new(w as f32, h as f32)))
                        });
                        match parsed {
                            Some(resize) => opts.resize_at = Some(resize),
                            None => {
                                tracing::error!(value = %raw, "--resize-at must be like 120:800x600");
                            }
                        }
                    } else {
                        tracing::error!("--resize-at requires a value like 120:800x600");
                    }
                }
                other => {
                    tracing::warn!(arg = %other, "Ignoring unknown argument");
                }
            }
        }

        opts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliOptions {
        CliOptions::parse(args.iter().map(|arg| arg.to_string()))
    }

    #[test]
    fn defaults() {
        let opts = parse(&[]);
        assert!(!opts.headless);
        assert_eq!(opts.frames, 600);
        assert_eq!(opts.resolution, (1280, 720));
        assert_eq!(opts.pointer_path, PointerPath::Circle);
    }

    #[test]
    fn parses_headless_flags() {
        let opts = parse(&[
            "--headless",
            "--frames",
            "90",
            "--resolution",
            "1500x800",
            "--pointer-path",
            "none",
            "--resize-at",
            "45:300x200",
            "--metrics-out",
            "out/report.json",
        ]);
        assert!(opts.headless);
        assert_eq!(opts.frames, 90);
        assert_eq!(opts.resolution, (1500, 800));
        assert_eq!(opts.pointer_path, PointerPath::None);
        assert_eq!(opts.resize_at, Some((45, Viewport::new(300.0, 200.0))));
        assert_eq!(opts.metrics_out, Some(PathBuf::from("out/report.json")));
    }

    #[test]
    fn bad_values_keep_defaults() {
        let opts = parse(&["--frames", "lots", "--resolution", "0x10", "--resize-at", "soon"]);
        assert_eq!(opts.frames, 600);
        assert_eq!(opts.resolution, (1280, 720));
        assert_eq!(opts.resize_at, None);
    }
}
