//! Headless frame driver
//!
//! Runs the simulation at a fixed frame rate with an autopilot tapping in place
//! of a player, logs what happens, and prints a JSON summary at the end.

mod autopilot;
mod error;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use game_core::{Config, Crash, Events, Game, Score, Snapshot};

use autopilot::Autopilot;
use error::HeadlessError;

const DEFAULT_FRAMES: u64 = 3600;
const DEFAULT_SEED: u64 = 12345;
const DEFAULT_DT: f32 = 1.0 / 60.0;

/// Command line options
#[derive(Debug, Clone, PartialEq)]
struct Args {
    frames: u64,
    seed: u64,
    dt: f32,
    config: Option<PathBuf>,
    /// Print every frame's snapshot as a JSON line
    trace: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            frames: DEFAULT_FRAMES,
            seed: DEFAULT_SEED,
            dt: DEFAULT_DT,
            config: None,
            trace: false,
        }
    }
}

impl Args {
    fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self, HeadlessError> {
        let mut parsed = Args::default();
        let mut args = args.into_iter();

        while let Some(flag) = args.next() {
            let mut value = || {
                args.next()
                    .ok_or_else(|| HeadlessError::Args(format!("{} needs a value", flag)))
            };
            match flag.as_str() {
                "--frames" => parsed.frames = parse_value("--frames", &value()?)?,
                "--seed" => parsed.seed = parse_value("--seed", &value()?)?,
                "--dt" => parsed.dt = parse_value("--dt", &value()?)?,
                "--config" => parsed.config = Some(PathBuf::from(value()?)),
                "--trace" => parsed.trace = true,
                other => return Err(HeadlessError::Args(format!("unknown flag {}", other))),
            }
        }

        Ok(parsed)
    }
}

fn parse_value<T: std::str::FromStr>(flag: &str, raw: &str) -> Result<T, HeadlessError> {
    raw.parse()
        .map_err(|_| HeadlessError::Args(format!("invalid value {:?} for {}", raw, flag)))
}

/// Load a JSON config; missing fields keep their defaults
fn load_config(path: &Path) -> Result<Config, HeadlessError> {
    let text = std::fs::read_to_string(path)?;
    let config: Config = serde_json::from_str(&text)?;
    Ok(config)
}

/// One JSON line per frame for external renderers and replay tools
fn trace_line(frame: u64, snapshot: &Snapshot) -> Result<String, HeadlessError> {
    let mut value = serde_json::to_value(snapshot)?;
    value["frame"] = serde_json::json!(frame);
    Ok(serde_json::to_string(&value)?)
}

/// Totals collected over a run
#[derive(Debug, Default)]
struct RunSummary {
    frames: u64,
    attempts: u32,
    jumps: u32,
    points: u32,
    ceiling_crashes: u32,
    ground_crashes: u32,
    pipe_crashes: u32,
    best_score: u32,
}

impl RunSummary {
    fn record(&mut self, events: &Events, score: Score) {
        self.frames += 1;
        if events.jumped {
            self.jumps += 1;
        }
        if events.restarted {
            self.attempts += 1;
        }
        self.points += events.scored;
        match events.crashed {
            Some(Crash::Ceiling) => self.ceiling_crashes += 1,
            Some(Crash::Ground) => self.ground_crashes += 1,
            Some(Crash::Pipe) => self.pipe_crashes += 1,
            None => {}
        }
        self.best_score = score.best;
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "frames": self.frames,
            "attempts": self.attempts,
            "jumps": self.jumps,
            "points": self.points,
            "crashes": {
                "ceiling": self.ceiling_crashes,
                "ground": self.ground_crashes,
                "pipe": self.pipe_crashes,
            },
            "best_score": self.best_score,
        })
    }
}

fn run() -> Result<(), HeadlessError> {
    let args = Args::parse(std::env::args().skip(1))?;
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => Config::new(),
    };

    let mut game = Game::new(config, args.seed)?;
    let mut pilot = Autopilot::new(&game.config);
    let mut summary = RunSummary {
        attempts: 1,
        ..RunSummary::default()
    };

    log::info!(
        "Running {} frames at {:.4}s (seed {})",
        args.frames,
        args.dt,
        args.seed
    );

    for frame in 0..args.frames {
        if pilot.should_activate(&game.snapshot()) {
            game.on_activate();
        }

        // The first display callback has no measured interval yet
        let elapsed = if frame == 0 { None } else { Some(args.dt) };
        let events = game.on_frame(elapsed);

        if let Some(crash) = events.crashed {
            log::info!(
                "Attempt {} ended at frame {} ({:?}), score {}",
                summary.attempts,
                frame,
                crash,
                game.score.current
            );
        }
        summary.record(&game.events, game.score());

        if args.trace {
            println!("{}", trace_line(frame, &game.snapshot())?);
        }
    }

    println!("{}", summary.to_json());
    Ok(())
}

fn main() -> ExitCode {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_defaults() {
        assert_eq!(Args::parse(Vec::new()).unwrap(), Args::default());
    }

    #[test]
    fn test_parse_flags() {
        let parsed = Args::parse(args(&[
            "--frames", "120", "--seed", "9", "--dt", "0.02", "--config", "tune.json", "--trace",
        ]))
        .unwrap();
        assert_eq!(parsed.frames, 120);
        assert_eq!(parsed.seed, 9);
        assert_eq!(parsed.dt, 0.02);
        assert_eq!(parsed.config, Some(PathBuf::from("tune.json")));
        assert!(parsed.trace);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            Args::parse(args(&["--frames", "many"])),
            Err(HeadlessError::Args(_))
        ));
        assert!(matches!(
            Args::parse(args(&["--seed"])),
            Err(HeadlessError::Args(_))
        ));
        assert!(matches!(
            Args::parse(args(&["--fast"])),
            Err(HeadlessError::Args(_))
        ));
    }

    #[test]
    fn test_partial_json_config_keeps_defaults() {
        let config: Config = serde_json::from_str(r#"{ "gravity": 1200.0 }"#).unwrap();
        assert_eq!(config.gravity, 1200.0);
        assert_eq!(config.jump_impulse, Config::new().jump_impulse);
        assert_eq!(config.speed_curve, Config::new().speed_curve);
    }

    #[test]
    fn test_trace_line_carries_snapshot_fields() {
        let game = Game::new(Config::new(), 42).unwrap();
        let snapshot = game.snapshot();

        let line = trace_line(7, &snapshot).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();

        assert!(!line.contains('\n'));
        assert_eq!(value["frame"], serde_json::json!(7));
        assert_eq!(value["bird_x"], serde_json::json!(100.0));
        assert_eq!(value["score"], serde_json::json!(0));
        assert_eq!(value["game_over"], serde_json::json!(false));
        assert_eq!(
            value["gap_offset"].as_f64().unwrap() as f32,
            snapshot.gap_offset
        );
    }

    #[test]
    fn test_summary_records_events() {
        let mut summary = RunSummary::default();
        let mut score = Score::new();
        score.increment();
        let events = Events {
            jumped: true,
            scored: 1,
            crashed: Some(Crash::Pipe),
            ..Events::default()
        };

        summary.record(&events, score);

        assert_eq!(summary.frames, 1);
        assert_eq!(summary.jumps, 1);
        assert_eq!(summary.points, 1);
        assert_eq!(summary.pipe_crashes, 1);
        assert_eq!(summary.best_score, 1);
        assert_eq!(summary.to_json()["crashes"]["pipe"], serde_json::json!(1));
    }

    #[test]
    fn test_autopilot_run_keeps_playing() {
        let mut game = Game::new(Config::new(), 4).unwrap();
        let mut pilot = Autopilot::new(&game.config);
        let mut summary = RunSummary::default();

        for frame in 0..1200 {
            if pilot.should_activate(&game.snapshot()) {
                game.on_activate();
            }
            let elapsed = if frame == 0 { None } else { Some(DEFAULT_DT) };
            game.on_frame(elapsed);
            summary.record(&game.events, game.score());
        }

        assert_eq!(summary.frames, 1200);
        assert!(summary.jumps > 0, "Autopilot should tap");
        assert_eq!(summary.ceiling_crashes, 0, "Flaps never overshoot the ceiling");
    }
}
