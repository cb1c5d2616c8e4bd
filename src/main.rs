//! Table Pong headless demo
//!
//! Runs a fixed-timestep match with the idle AI driving both paddles until
//! one side reaches the point target, then shows the watch for a few cities.
//! Usage: `table-pong [--seed N] [--points N] [--json]`

use std::time::{SystemTime, UNIX_EPOCH};

use table_pong::config::{ExitRule, MatchConfig};
use table_pong::consts::SIM_DT;
use table_pong::sim::{GameEvent, MatchState, TickInput, tick};
use table_pong::watch::{ClockTime, Watch};

/// Backstop so a degenerate match cannot spin forever
const MAX_TICKS: u64 = 10_000_000;

struct Args {
    seed: u64,
    points: u32,
    json: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        seed: unix_seconds(),
        points: 5,
        json: false,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--seed" => {
                let value = iter.next().ok_or("--seed needs a value")?;
                args.seed = value.parse().map_err(|_| format!("bad seed: {value}"))?;
            }
            "--points" => {
                let value = iter.next().ok_or("--points needs a value")?;
                args.points = value.parse().map_err(|_| format!("bad points: {value}"))?;
            }
            "--json" => args.json = true,
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok(args)
}

fn unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

fn main() {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("usage: table-pong [--seed N] [--points N] [--json]");
            std::process::exit(2);
        }
    };

    let config = MatchConfig {
        exit_rule: ExitRule::Score,
        ..Default::default()
    };
    let mut state = match MatchState::new(&config, args.seed) {
        Ok(state) => state,
        Err(error) => {
            log::error!("invalid match configuration: {error}");
            std::process::exit(1);
        }
    };

    log::info!("match seed {}, first to {} points", args.seed, args.points);

    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };
    while state.player1.score < args.points
        && state.player2.score < args.points
        && state.time_ticks < MAX_TICKS
    {
        for event in tick(&mut state, &input, SIM_DT) {
            match event {
                GameEvent::PointScored { side, score } => {
                    log::info!(
                        "tick {}: point for {side:?} ({score})",
                        state.time_ticks
                    );
                }
                GameEvent::PaddleBounce { side } => {
                    log::debug!("tick {}: paddle bounce {side:?}", state.time_ticks);
                }
                GameEvent::WallBounce { edge } => {
                    log::debug!("tick {}: wall bounce {edge:?}", state.time_ticks);
                }
                GameEvent::BallExit { .. } => {}
            }
        }
    }

    println!(
        "final score after {} ticks: left {} - right {}",
        state.time_ticks, state.player1.score, state.player2.score
    );

    if args.json {
        match serde_json::to_string_pretty(&state) {
            Ok(json) => println!("{json}"),
            Err(error) => log::error!("state dump failed: {error}"),
        }
    }

    show_watches();
}

/// Print hand angles for a few cities at the current UTC time of day
fn show_watches() {
    let day_seconds = unix_seconds() % 86_400;
    let now = ClockTime::new(
        (day_seconds / 3600) as u32,
        (day_seconds / 60 % 60) as u32,
        (day_seconds % 60) as u32,
    );
    println!(
        "watch reference {:02}:{:02}:{:02} UTC",
        now.hours(),
        now.minutes(),
        now.seconds()
    );

    for name in ["Oporto", "Tokyo", "New York"] {
        let watch = Watch::new(name);
        let angles = watch.hand_angles(now);
        println!(
            "  {:>10}: hour {:+.3} rad, minute {:+.3} rad, second {:+.3} rad",
            name, angles.hour, angles.minute, angles.second
        );
    }
}
