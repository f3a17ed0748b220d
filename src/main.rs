//! Neon Survival headless entry point
//!
//! Runs an autopilot session for a fixed number of frames and prints the
//! final snapshot as JSON.
//!
//! Usage: `neon-survival [seed] [tuning.json|classic|powerups] [frames]`

#[cfg(not(target_arch = "wasm32"))]
use neon_survival::{
    Tuning,
    audio::{LogAudio, dispatch},
    sim::{GameEvent, GameState, TickInput, tick},
};

#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_SEED: u64 = 12345;
/// One minute of play at 60 Hz
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_FRAMES: u64 = 3600;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Neon Survival (headless) starting...");

    let args: Vec<String> = std::env::args().skip(1).collect();

    let seed = match args.first().map(|s| s.parse::<u64>()) {
        None => DEFAULT_SEED,
        Some(Ok(seed)) => seed,
        Some(Err(e)) => {
            log::error!("Invalid seed {:?}: {}", args[0], e);
            std::process::exit(2);
        }
    };

    let tuning = match args.get(1) {
        None => Tuning::default(),
        Some(arg) => match Tuning::from_arg(arg) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::error!("Failed to load tuning: {}", e);
                std::process::exit(2);
            }
        },
    };

    let frames = match args.get(2).map(|s| s.parse::<u64>()) {
        None => DEFAULT_FRAMES,
        Some(Ok(frames)) => frames,
        Some(Err(e)) => {
            log::error!("Invalid frame count {:?}: {}", args[2], e);
            std::process::exit(2);
        }
    };

    let mut state = GameState::with_tuning(seed, tuning);
    let mut audio = LogAudio::new();
    let input = TickInput {
        autopilot: true,
        ..Default::default()
    };

    let mut kills = 0u64;
    let mut defeats = 0u32;
    for _ in 0..frames {
        let events = tick(&mut state, &input);
        for event in &events {
            match event {
                GameEvent::EnemyDestroyed { .. } => kills += 1,
                GameEvent::GameOver { .. } => defeats += 1,
                _ => {}
            }
        }
        dispatch(&events, &mut audio);
    }

    log::info!(
        "Ran {} frames: {} kills, {} defeats, {} sound cues, final score {}",
        frames,
        kills,
        defeats,
        audio.played,
        state.session.score
    );

    match serde_json::to_string_pretty(&state.snapshot()) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            log::error!("Failed to serialize snapshot: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser hosts drive `sim::FixedStep` directly; there is no CLI here
}
