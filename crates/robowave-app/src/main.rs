//! robowave: headless runner for the ROBOWAVE simulation.
//!
//! Usage:
//!   robowave play --level 2 --seed 7 --frames 20000 --scores-dir scores
//!   robowave play --level-file my_level.json --realtime
//!   robowave tutorial
//!   robowave scores --level 2 --scores-dir scores

use std::path::PathBuf;
use std::process;

use log::error;

use robowave_core::config::LevelDefinition;
use robowave_sim::engine::{SimConfig, SimulationEngine};
use robowave_sim::leaderboard::{FileScoreStore, Leaderboard};

use robowave_app::game_loop::spawn_game_loop;
use robowave_app::session::{run_headless, run_realtime, RunSummary, Stage};

const DEFAULT_FRAMES: u64 = 72 * 60 * 5;
const DEFAULT_SCORES_DIR: &str = "robowave-scores";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "play" => cmd_play(&args[2..], false),
        "tutorial" => cmd_play(&args[2..], true),
        "scores" => cmd_scores(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "robowave: ROBOWAVE arcade shooter simulation\n\
         \n\
         Commands:\n\
         \n\
         play      Play a level with the autopilot\n\
         \n\
           --level <N>          Built-in level id (default: 1)\n\
           --level-file <path>  Level definition JSON (overrides --level)\n\
           --seed <N>           RNG seed (default: 42)\n\
           --frames <N>         Frame limit (default: 21600)\n\
           --scores-dir <path>  Leaderboard directory (default: robowave-scores)\n\
           --realtime           Run on the 72 Hz frame loop instead of flat out\n\
         \n\
         tutorial  Play the tutorial with the autopilot (same options)\n\
         \n\
         scores    Print a level's leaderboard\n\
         \n\
           --level <N>          Level id (default: 1)\n\
           --scores-dir <path>  Leaderboard directory (default: robowave-scores)\n"
    );
}

fn flag_value<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == name)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn parse_flag<T: std::str::FromStr>(args: &[String], name: &str, default: T) -> T {
    match flag_value(args, name) {
        None => default,
        Some(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                eprintln!("Error: invalid value `{raw}` for {name}");
                process::exit(1);
            }
        },
    }
}

fn scores_dir(args: &[String]) -> PathBuf {
    PathBuf::from(flag_value(args, "--scores-dir").unwrap_or(DEFAULT_SCORES_DIR))
}

fn load_level_file(path: &str) -> LevelDefinition {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: cannot read {path}: {e}");
            process::exit(1);
        }
    };
    match LevelDefinition::from_json(&text) {
        Ok(level) => level,
        Err(e) => {
            error!("{path}: {e}");
            process::exit(1);
        }
    }
}

fn cmd_play(args: &[String], tutorial: bool) {
    let seed: u64 = parse_flag(args, "--seed", 42);
    let frames: u64 = parse_flag(args, "--frames", DEFAULT_FRAMES);
    let mut level: u32 = parse_flag(args, "--level", 1);
    let dir = scores_dir(args);

    let custom = flag_value(args, "--level-file").map(load_level_file);
    if let Some(definition) = &custom {
        level = definition.id;
    }
    let stage = if tutorial {
        Stage::Tutorial
    } else {
        Stage::Level(level)
    };

    let build = move || {
        let config = SimConfig {
            seed,
            ..Default::default()
        };
        let mut engine =
            SimulationEngine::new(config, Leaderboard::new(Box::new(FileScoreStore::new(dir))));
        if let Some(definition) = custom {
            engine.register_level(definition);
        }
        engine
    };

    let summary = if args.iter().any(|a| a == "--realtime") {
        let handle = match spawn_game_loop(build) {
            Ok(handle) => handle,
            Err(e) => {
                eprintln!("Error: cannot start frame loop: {e}");
                process::exit(1);
            }
        };
        run_realtime(handle, stage, frames)
    } else {
        let mut engine = build();
        Some(run_headless(&mut engine, stage, frames))
    };

    match summary {
        Some(summary) => print_summary(&summary),
        None => {
            eprintln!("Error: no frame was simulated");
            process::exit(1);
        }
    }
}

fn print_summary(summary: &RunSummary) {
    println!(
        "{}: {:?} after {} frames ({:.1}s simulated)",
        summary.stage.as_deref().unwrap_or("-"),
        summary.phase,
        summary.frames,
        summary.simulated_secs
    );
    println!(
        "  score {}  kills {}  hits {}/{} shots  health {:.0}",
        summary.score.score,
        summary.score.kills,
        summary.score.hits,
        summary.score.shots_fired,
        summary.health
    );
}

fn cmd_scores(args: &[String]) {
    let level: u32 = parse_flag(args, "--level", 1);
    let board = Leaderboard::new(Box::new(FileScoreStore::new(scores_dir(args))));
    let entries = board.load_top_scores(level);

    if entries.is_empty() {
        println!("level {level}: no scores yet");
        return;
    }
    println!("level {level}:");
    for (rank, entry) in entries.iter().enumerate() {
        println!("  {:>3}. {:>8}  {}", rank + 1, entry.score, entry.timestamp);
    }
}
