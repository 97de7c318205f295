//! Headless walk-through of the alert readout.
//!
//! Usage: `alert_demo [config.json] [output_dir]`
//!
//! Builds a small seeded colony, runs a few seconds of ticks while trouble
//! develops (a colonist collapses, a fire starts, a brawler picks up a gun),
//! prints the banner stack after each step, clicks through the culprits of
//! the most urgent alert, and flushes the message log to JSONL.

use std::path::PathBuf;

use bevy_app::App;
use bevy_ecs::message::Messages;
use colony_alerts::alerts::AlertRegistry;
use colony_alerts::config::AlertsConfig;
use colony_alerts::ecs::spawn::{down_pawn, spawn_fire};
use colony_alerts::ecs::{
    AlertClick, AlertReadout, CameraFocus, Cell, Equipment, GameClock, MessageLog, Pawn,
    SoundQueue, TraitKind, Traits, Weapon, run_for_seconds,
};
use colony_alerts::error::Result;
use colony_alerts::flush::flush_messages_to_jsonl;
use colony_alerts::scenario::ColonyScenario;

const SEED: u64 = 42;

fn print_readout(app: &App, heading: &str) {
    let readout = app.world().resource::<AlertReadout>();
    println!("-- {heading} ({} active)", readout.banners.len());
    for banner in &readout.banners {
        println!(
            "   [{:<8}] {:<32} x={:>7.1} y={:>6.1}",
            banner.priority, banner.label, banner.rect.x, banner.rect.y
        );
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let config = args
        .next()
        .map(PathBuf::from)
        .map_or_else(AlertsConfig::default, |path| AlertsConfig::load_or_default(&path));
    let output_dir = args
        .next()
        .map_or_else(|| PathBuf::from("output"), PathBuf::from);

    tracing::info!(seed = SEED, "Starting alert demo");

    let mut scenario = ColonyScenario::with_config(SEED, config);
    let colonists = scenario.populate(4);
    let mut app = scenario.build();

    run_for_seconds(&mut app, 2.0);
    print_readout(&app, "settled in");

    // Trouble, one step at a time
    down_pawn(app.world_mut(), colonists[0]);
    run_for_seconds(&mut app, 1.0);
    print_readout(&app, "a colonist collapsed");

    spawn_fire(app.world_mut(), Cell::new(20, 20));
    spawn_fire(app.world_mut(), Cell::new(21, 20));
    run_for_seconds(&mut app, 1.0);
    print_readout(&app, "fire in the base");

    app.world_mut().entity_mut(colonists[1]).insert((
        Traits(vec![TraitKind::Brawler]),
        Equipment {
            primary: Some(Weapon::ranged("revolver")),
        },
    ));
    run_for_seconds(&mut app, 1.0);
    print_readout(&app, "a brawler found a revolver");

    // Click through the most urgent alert's culprits
    let top = app
        .world()
        .resource::<AlertReadout>()
        .banners
        .first()
        .map(|b| b.key);
    if let Some(key) = top {
        let time = app.world().resource::<GameClock>().alert_time();
        let info = app
            .world()
            .resource::<AlertRegistry>()
            .info_text(key, app.world(), &time)?;
        println!("-- hover {key}:\n{info}");

        for _ in 0..3 {
            app.world_mut()
                .resource_mut::<Messages<AlertClick>>()
                .write(AlertClick::primary(key));
            run_for_seconds(&mut app, 0.1);
            let focus = app.world().resource::<CameraFocus>();
            let name = focus
                .selected
                .and_then(|e| app.world().get::<Pawn>(e))
                .map_or("(not a pawn)", |p| p.label_short());
            println!("   click -> {:?} at {:?}: {name}", focus.selected, focus.position);
        }
    }

    let cues: Vec<_> = app.world_mut().resource_mut::<SoundQueue>().drain().collect();
    for (frame, cue) in &cues {
        println!("   frame {frame}: play {}", cue.asset_name());
    }
    let bells = cues.len();
    let log = app.world().resource::<MessageLog>();
    println!("-- {bells} bell(s), {} message(s)", log.len());
    for message in &log.messages {
        println!("   [{:?}] {}", message.severity, message.text);
    }

    let path = flush_messages_to_jsonl(log, &output_dir)?;
    tracing::info!(path = %path.display(), "Demo complete");
    Ok(())
}
