//! Side Scroller entry point
//!
//! Headless run: loads settings, builds a world, and lets the demo player
//! drive it. Frames go to the log or to stdout as JSON lines.
//!
//! Usage: `side-scroller [SETTINGS.json]`

use std::path::PathBuf;

use side_scroller::platform::{Autopilot, FrameSink, JsonSink, LogSink};
use side_scroller::sim::World;
use side_scroller::{Game, OutputFormat, Settings};

fn run_with<S: FrameSink>(settings: &Settings, world: World, sink: S) {
    let (home_x, _) = world.tuning.player_start;
    let pilot = Autopilot::new(settings.max_ticks, world.tuning.screen_width, home_x);
    let mut game = Game::new(world, pilot, sink);
    let last = game.run(settings.realtime);
    for line in last.hud_lines().iter().take(2) {
        log::info!("{}", line);
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let settings = Settings::load_or_default(path.as_deref());
    let seed = settings.resolve_seed();
    log::info!(
        "Side Scroller starting (seed {}, output {})",
        seed,
        settings.output.as_str()
    );

    let world = World::with_tuning(seed, settings.tuning.clone());
    match settings.output {
        OutputFormat::Log => run_with(&settings, world, LogSink::new(settings.log_every)),
        OutputFormat::Json => {
            let stdout = std::io::stdout().lock();
            run_with(&settings, world, JsonSink::new(std::io::BufWriter::new(stdout)));
        }
    }
}
