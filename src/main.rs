//! Fathom headless runner
//!
//! Plays an autopilot session at a fixed timestep and prints the session
//! summary as JSON.
//!
//! Usage: `fathom [AREA] [SECONDS] [SETTINGS.json] [BUCKET_LEVEL]`
//!
//! Bucket levels run 1 (5 kg) to 5 (bottomless).

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    if let Err(e) = headless::run(std::env::args().skip(1).collect()) {
        eprintln!("fathom: {e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The web host embeds the library directly
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use fathom::consts::*;
    use fathom::sim::{AreaPreset, BucketTier, GameEvent, HookState, TickInput, World};
    use fathom::{ConfigError, SimSettings};

    /// Default session length (seconds)
    const DEFAULT_SECONDS: f32 = 120.0;

    pub fn run(args: Vec<String>) -> Result<(), ConfigError> {
        let preset = match args.first() {
            Some(name) => AreaPreset::from_str(name)
                .ok_or_else(|| ConfigError::UnknownArea(name.clone()))?,
            None => AreaPreset::default(),
        };
        let seconds = match args.get(1) {
            Some(s) => s
                .parse::<f32>()
                .ok()
                .filter(|s| s.is_finite() && *s > 0.0)
                .ok_or_else(|| ConfigError::Argument(format!("invalid session length '{s}'")))?,
            None => DEFAULT_SECONDS,
        };
        let settings = match args.get(2) {
            Some(path) => SimSettings::load(path)?,
            None => SimSettings::default(),
        };
        let bucket = match args.get(3) {
            Some(level) => level
                .parse::<u8>()
                .ok()
                .and_then(BucketTier::from_level)
                .ok_or_else(|| ConfigError::Argument(format!("invalid bucket level '{level}'")))?,
            None => BucketTier::default(),
        };

        log::info!("Fathom starting in {} for {seconds}s", preset.as_str());
        let mut world = World::new(preset.config(), settings)?;
        world.set_storage_tier(bucket);

        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };
        let ticks = (seconds / SIM_DT).ceil() as u64;
        let mut sold = 0.0;

        for _ in 0..ticks {
            let report = world.advance(SIM_DT, &input);
            for event in &report.events {
                match event {
                    GameEvent::Catch(info) => log::info!(
                        "[{:>6.1}s] {} ({:.2}kg, {:.0}g)",
                        world.time_secs(),
                        info.name,
                        info.weight,
                        info.value
                    ),
                    GameEvent::DepthLimitReached { depth_meters } => {
                        log::debug!("Depth limit hit at {depth_meters:.1}m")
                    }
                    _ => {}
                }
            }

            // Sell at the dock once the bucket is full
            if world.storage().is_full() && report.hook_state == HookState::Ready {
                sold += world.empty_storage();
                log::info!("Bucket full, sold {sold:.2}kg so far");
            }
        }

        log::info!(
            "Deepest generation: terrain {:.0}px, creatures {:.0}px, {} live",
            world.generated_terrain_depth(),
            world.generated_creature_depth(),
            world.live_creature_count()
        );

        let summary = world.destroy();
        println!("{}", serde_json::to_string_pretty(&summary)?);
        Ok(())
    }
}
