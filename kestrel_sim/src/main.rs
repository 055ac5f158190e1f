//! # Kestrel Autonomous Runner
//!
//! Builds an autonomous routine for a given match context and ticks it to
//! completion against the simulated robot at the 50 Hz control rate,
//! standing in for the on-robot scheduler's match-phase driver.

use std::process;

use clap::{Parser, ValueEnum};
use tracing::{Level, error, info};
use tracing_subscriber::EnvFilter;

use kestrel_auton::command::CommandSlot;
use kestrel_auton::error::RoutineError;
use kestrel_auton::routine::{bump_side_fetch, center_charge_balance};
use kestrel_common::consts;
use kestrel_common::context::{Alliance, MatchContext, SpeedProfile};
use kestrel_common::geom::Pose2d;
use kestrel_sim::SimRobot;
use kestrel_sim::paths::SimTrajectories;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RoutineChoice {
    /// Score the preload, fetch the midfield piece over the bump.
    BumpFetch,
    /// Score the preload, mount and hold the charge station.
    CenterBalance,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AllianceArg {
    Blue,
    Red,
}

impl From<AllianceArg> for Alliance {
    fn from(arg: AllianceArg) -> Self {
        match arg {
            AllianceArg::Blue => Alliance::Blue,
            AllianceArg::Red => Alliance::Red,
        }
    }
}

/// Kestrel autonomous simulation runner
#[derive(Parser, Debug)]
#[command(name = "kestrel_sim")]
#[command(version)]
#[command(about = "Runs an autonomous routine against the simulated robot")]
struct Args {
    /// Routine to run.
    #[arg(value_enum, default_value = "bump-fetch")]
    routine: RoutineChoice,

    /// Alliance color (selects path variants and mirroring).
    #[arg(long, value_enum, default_value = "blue")]
    alliance: AllianceArg,

    /// Use the fast speed profile (skips settle dwells).
    #[arg(long)]
    fast: bool,

    /// Cycle budget - 750 cycles = the 15 s autonomous period.
    #[arg(long, default_value_t = 750)]
    max_cycles: u64,

    /// Enable verbose logging (DEBUG level).
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format.
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();
    setup_tracing(&args);

    info!("Kestrel runner v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&args) {
        error!("FATAL: {e}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), RoutineError> {
    let robot = SimRobot::new();
    let paths = SimTrajectories::new();
    let context = MatchContext {
        alliance: args.alliance.into(),
        speed_profile: if args.fast {
            SpeedProfile::Fast
        } else {
            SpeedProfile::Normal
        },
        starting_pose: Pose2d::default(),
    };

    let handles = robot.handles();
    let routine = match args.routine {
        RoutineChoice::BumpFetch => bump_side_fetch(&context, &handles, &paths)?,
        RoutineChoice::CenterBalance => center_charge_balance(&context, &handles, &paths)?,
    };

    let mut slot = CommandSlot::from_command(routine);
    slot.start();

    let mut cycles = 0u64;
    while slot.is_running() && cycles < args.max_cycles {
        slot.tick();
        robot.step(consts::CYCLE_TIME_S);
        cycles += 1;
    }

    if slot.is_running() {
        info!("Autonomous period over with the routine still running; interrupting");
        slot.interrupt();
    }

    let pose = robot.drive.pose();
    info!(
        "Routine {:?} done after {} cycles ({:.1}s): pose x={:.2}m y={:.2}m heading={:.1}deg",
        args.routine,
        cycles,
        cycles as f64 * consts::CYCLE_TIME_S,
        pose.x_meters,
        pose.y_meters,
        pose.heading_degrees
    );
    Ok(())
}

fn setup_tracing(args: &Args) {
    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if args.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
