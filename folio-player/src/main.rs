//! Headless demo: loads configuration, runs a testimonial carousel through a
//! scripted session on the tokio clock, and logs what the track does.

use std::time::Duration;

use anyhow::Context;
use folio_config::{ConfigLoad, ConfigLoader, ConfigSource, telemetry};
use folio_core::carousel::TrackMetrics;
use folio_player::{HeadlessSurface, TrackProbe, Viewport, spawn_carousel};
use tokio::time::sleep;
use tracing::{info, warn};

const TESTIMONIALS: &[&str] = &[
    "Delivered the redesign two weeks early and the handoff docs were spotless.",
    "Our conversion rate jumped after the new landing page went live.",
    "Clear communication from kickoff to launch. Would hire again.",
    "Turned a vague brief into a portfolio we are proud to show clients.",
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let ConfigLoad { config, warnings } = ConfigLoader::new()
        .load()
        .context("failed to load folio configuration")?;
    telemetry::init_tracing(&config.logging)?;

    match &config.metadata.source {
        ConfigSource::Default => info!("using built-in configuration defaults"),
        ConfigSource::EnvPath(path) | ConfigSource::File(path) => {
            info!(path = %path.display(), "loaded configuration file")
        }
        ConfigSource::EnvInline => info!("loaded configuration from FOLIO_CONFIG_JSON"),
    }
    if !config.metadata.overrides.is_empty() {
        info!(overrides = ?config.metadata.overrides, "applied environment overrides");
    }
    for warning in &warnings.items {
        warn!(hint = warning.hint.as_deref().unwrap_or(""), "{}", warning.message);
    }

    let viewport = Viewport::new(Some(TrackMetrics::new(360.0, 24.0)));
    let probe = TrackProbe::default();
    let items: Vec<String> = TESTIMONIALS.iter().map(|s| s.to_string()).collect();

    let surface_viewport = viewport.clone();
    let surface_probe = probe.clone();
    let Some(carousel) = spawn_carousel(items, config.carousel, move |notifier| {
        HeadlessSurface::new(surface_viewport, notifier).with_probe(surface_probe)
    }) else {
        info!("no testimonials to show; carousel disabled");
        return Ok(());
    };

    let settings = config.carousel;
    let handle = carousel.handle().clone();

    // Let the timer drive a couple of steps.
    sleep(settings.auto_advance_interval() * 2 + settings.transition_duration()).await;

    handle.next();
    sleep(settings.transition_duration() + Duration::from_millis(50)).await;

    handle.pointer_enter();
    info!("pointer over carousel; auto-advance paused");
    sleep(settings.auto_advance_interval() + Duration::from_millis(500)).await;
    handle.pointer_leave();

    viewport.set_metrics(Some(TrackMetrics::new(280.0, 16.0)));
    for _ in 0..5 {
        handle.resized();
        sleep(Duration::from_millis(20)).await;
    }
    sleep(settings.resize_quiet_period() + Duration::from_millis(50)).await;

    handle.jump_to(0);
    sleep(settings.transition_duration() + Duration::from_millis(50)).await;

    if let Some(status) = handle.status().await {
        let track = probe.snapshot();
        info!(
            index = status.normalized_index,
            offset = track.offset,
            animations = track.animations_finished,
            "carousel state before shutdown"
        );
    }

    drop(handle);
    carousel.shutdown().await;
    Ok(())
}
