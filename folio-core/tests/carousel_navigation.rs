//! Scenario coverage for the carousel state machine: navigation, the
//! animation lock, wraparound snaps, auto-advance bouncing, and timers.

use std::time::Duration;

use folio_core::carousel::{
    CarouselController, DropReason, Navigation, Phase, TrackMetrics,
};
use folio_core::error::CarouselError;
use folio_core::settings::CarouselSettings;
use folio_core::Direction;

#[path = "support/mod.rs"]
mod support;

use support::{
    ManualScheduler, RecordingSurface, carousel, carousel_with, settle,
};

const STRIDE: f32 = 320.0;

#[test]
fn empty_item_list_never_activates() {
    let result = CarouselController::new(
        Vec::<usize>::new(),
        RecordingSurface::measured(300.0, 20.0),
        ManualScheduler::default(),
        CarouselSettings::default(),
    );
    assert!(matches!(result, Err(CarouselError::NoItems)));
}

#[test]
fn init_rests_on_first_real_item_without_animation() {
    let carousel = carousel(3);

    assert_eq!(carousel.position(), 3);
    assert_eq!(carousel.phase(), Phase::Idle);
    assert_eq!(carousel.normalized_index(), 0);
    assert_eq!(carousel.surface().last_offset(), Some(-3.0 * STRIDE));
    assert!(!carousel.surface().last_was_animated());
    assert_eq!(carousel.surface().active_indicator(), Some(0));

    assert!(carousel.is_auto_advancing());
    assert_eq!(carousel.scheduler().live_timers(), 1);
    assert_eq!(
        carousel.scheduler().periods,
        vec![Duration::from_millis(2_000)]
    );
}

#[test]
fn next_moves_one_slot_and_locks() {
    let mut carousel = carousel(3);

    let outcome = carousel.next();

    assert_eq!(outcome, Navigation::Started { from: 3, to: 4 });
    assert_eq!(carousel.position(), 4);
    assert!(carousel.is_transitioning());
    assert_eq!(carousel.direction(), Direction::Forward);
    assert_eq!(carousel.surface().last_offset(), Some(-4.0 * STRIDE));
    assert!(carousel.surface().last_was_animated());
}

#[test]
fn animated_translation_carries_configured_transition() {
    let settings = CarouselSettings {
        transition_ms: 450,
        ..CarouselSettings::default()
    };
    let mut carousel = carousel_with(4, settings);
    carousel.previous();

    let (_, transition) = carousel.surface().translations.last().copied().unwrap();
    let transition = transition.expect("animated move");
    assert_eq!(transition.duration, Duration::from_millis(450));
    assert_eq!(transition.easing, settings.easing);
}

#[test]
fn requests_during_transition_are_dropped_not_queued() {
    let mut carousel = carousel(3);
    carousel.next();

    let before = (carousel.position(), carousel.direction(), carousel.phase());
    assert_eq!(carousel.previous(), Navigation::Dropped(DropReason::Transitioning));
    assert_eq!(carousel.next(), Navigation::Dropped(DropReason::Transitioning));
    assert_eq!(carousel.jump_to(0), Navigation::Dropped(DropReason::Transitioning));
    assert_eq!(
        carousel.auto_advance(),
        Navigation::Dropped(DropReason::Transitioning)
    );
    assert_eq!(
        (carousel.position(), carousel.direction(), carousel.phase()),
        before
    );

    // Nothing was queued: settling leaves the track where the first move put it.
    assert_eq!(settle(&mut carousel), Some(4));
    assert_eq!(carousel.phase(), Phase::Idle);
}

#[test]
fn three_nexts_overrun_then_snap_to_last_real_item() {
    let mut carousel = carousel(3);
    let mut trail = vec![carousel.position()];

    for _ in 0..3 {
        assert!(carousel.next().is_started());
        trail.push(carousel.position());
        settle(&mut carousel);
    }

    assert_eq!(trail, vec![3, 4, 5, 6]);
    assert_eq!(carousel.position(), 5);
    assert_eq!(carousel.normalized_index(), 2);
    // The snap is rendered without animation.
    assert_eq!(carousel.surface().last_offset(), Some(-5.0 * STRIDE));
    assert!(!carousel.surface().last_was_animated());
}

#[test]
fn previous_from_first_item_snaps_back_to_band_start() {
    let mut carousel = carousel(3);

    assert_eq!(carousel.previous(), Navigation::Started { from: 3, to: 2 });
    assert_eq!(carousel.direction(), Direction::Backward);
    assert_eq!(carousel.normalized_index(), 2);

    assert_eq!(settle(&mut carousel), Some(3));
    assert_eq!(carousel.normalized_index(), 0);
    assert!(!carousel.surface().last_was_animated());
}

#[test]
fn jump_to_maps_logical_index_into_band() {
    let mut carousel = carousel(3);

    assert_eq!(carousel.jump_to(2), Navigation::Started { from: 3, to: 5 });
    assert_eq!(carousel.direction(), Direction::Forward);
    settle(&mut carousel);

    assert_eq!(carousel.jump_to(0), Navigation::Started { from: 5, to: 3 });
    assert_eq!(carousel.direction(), Direction::Backward);
    settle(&mut carousel);

    assert_eq!(carousel.position(), 3);
    assert_eq!(carousel.normalized_index(), 0);
    assert_eq!(carousel.surface().active_indicator(), Some(0));
}

#[test]
fn jump_to_out_of_range_or_current_item_is_ignored() {
    let mut carousel = carousel(3);
    let translations = carousel.surface().translations.len();

    assert_eq!(carousel.jump_to(3), Navigation::Dropped(DropReason::OutOfRange));
    assert_eq!(
        carousel.jump_to(usize::MAX),
        Navigation::Dropped(DropReason::OutOfRange)
    );
    assert_eq!(carousel.jump_to(0), Navigation::Dropped(DropReason::AlreadyThere));

    assert_eq!(carousel.position(), 3);
    assert_eq!(carousel.phase(), Phase::Idle);
    assert_eq!(carousel.surface().translations.len(), translations);
}

#[test]
fn auto_advance_sweeps_forward_then_bounces() {
    let mut carousel = carousel(3);
    let mut trail = Vec::new();

    for _ in 0..6 {
        assert!(carousel.auto_advance().is_started());
        settle(&mut carousel);
        trail.push((carousel.position(), carousel.direction()));
    }

    use Direction::{Backward, Forward};
    assert_eq!(
        trail,
        vec![
            (4, Forward),
            (5, Forward),
            (4, Backward),
            (3, Backward),
            (4, Forward),
            (5, Forward),
        ]
    );
}

#[test]
fn single_item_carousel_stays_on_its_only_item() {
    let mut carousel = carousel(1);
    assert_eq!(carousel.position(), 1);

    for _ in 0..4 {
        assert!(carousel.auto_advance().is_started());
        assert_eq!(settle(&mut carousel), Some(1));
        assert_eq!(carousel.normalized_index(), 0);
    }

    carousel.next();
    assert_eq!(settle(&mut carousel), Some(1));
}

#[test]
fn stray_transition_end_is_ignored() {
    let mut carousel = carousel(2);
    let calls = carousel.surface().translations.len();

    assert_eq!(carousel.transition_finished(), None);
    assert_eq!(carousel.surface().translations.len(), calls);
}

#[test]
fn unmeasurable_track_turns_navigation_into_no_op() {
    let mut carousel = CarouselController::new(
        vec!['a', 'b'],
        RecordingSurface::unmeasured(),
        ManualScheduler::default(),
        CarouselSettings::default(),
    )
    .unwrap();

    // Initial render skipped positioning but still lit the indicator.
    assert!(carousel.surface().translations.is_empty());
    assert_eq!(carousel.surface().active_indicator(), Some(0));

    assert_eq!(
        carousel.next(),
        Navigation::Dropped(DropReason::MeasurementUnavailable)
    );
    assert_eq!(carousel.position(), 2);
    assert_eq!(carousel.phase(), Phase::Idle);

    // Zero width counts as unavailable too.
    carousel.surface_mut().metrics = Some(TrackMetrics::new(0.0, 16.0));
    assert!(!carousel.on_resize());

    // Layout arrives: the next natural event goes through.
    carousel.surface_mut().metrics = Some(TrackMetrics::new(100.0, f32::NAN));
    assert!(carousel.on_resize());
    assert_eq!(carousel.surface().last_offset(), Some(-200.0));
    assert!(carousel.next().is_started());
}

#[test]
fn resize_rerenders_current_position_with_new_width() {
    let mut carousel = carousel(3);
    carousel.jump_to(1);
    settle(&mut carousel);

    carousel.surface_mut().metrics = Some(TrackMetrics::new(200.0, 10.0));
    assert!(carousel.on_resize());

    assert_eq!(carousel.position(), 4);
    assert_eq!(carousel.surface().last_offset(), Some(-4.0 * 210.0));
    assert!(!carousel.surface().last_was_animated());
}

#[test]
fn resize_mid_transition_is_applied_after_settling() {
    let mut carousel = carousel(3);
    carousel.next();
    let calls = carousel.surface().translations.len();

    carousel.surface_mut().metrics = Some(TrackMetrics::new(100.0, 0.0));
    assert!(!carousel.on_resize());
    assert_eq!(carousel.surface().translations.len(), calls);
    assert!(carousel.is_transitioning());

    settle(&mut carousel);
    assert_eq!(carousel.surface().translations.len(), calls + 1);
    assert_eq!(carousel.surface().last_offset(), Some(-400.0));
    assert!(!carousel.surface().last_was_animated());
}

#[test]
fn pause_then_resume_leaves_exactly_one_timer() {
    let mut carousel = carousel(3);

    carousel.pause();
    assert_eq!(carousel.scheduler().live_timers(), 0);
    carousel.pause();
    assert_eq!(carousel.scheduler().live_timers(), 0);

    carousel.resume();
    assert_eq!(carousel.scheduler().live_timers(), 1);
    carousel.resume();
    assert_eq!(carousel.scheduler().live_timers(), 1);
    assert!(carousel.is_auto_advancing());
}

#[test]
fn user_input_restarts_a_running_timer_only() {
    let mut carousel = carousel(3);
    let first = *carousel.scheduler().live.iter().next().unwrap();

    carousel.next();
    let live: Vec<u64> = carousel.scheduler().live.iter().copied().collect();
    assert_eq!(live.len(), 1);
    assert_ne!(live[0], first, "timer should have been rescheduled");
    settle(&mut carousel);

    // Hovered: clicking must not sneak the timer back in.
    carousel.pause();
    carousel.previous();
    assert_eq!(carousel.scheduler().live_timers(), 0);
    settle(&mut carousel);

    // Timer ticks never restart themselves.
    carousel.resume();
    let before = carousel.scheduler().periods.len();
    carousel.auto_advance();
    assert_eq!(carousel.scheduler().periods.len(), before);
}

#[test]
fn restart_on_input_can_be_disabled() {
    let settings = CarouselSettings {
        restart_auto_advance_on_input: false,
        ..CarouselSettings::default()
    };
    let mut carousel = carousel_with(3, settings);
    carousel.next();
    assert_eq!(carousel.scheduler().periods.len(), 1);
    assert_eq!(carousel.scheduler().cancelled, 0);
}

#[test]
fn teardown_cancels_timer_and_deactivates() {
    let mut carousel = carousel(3);
    carousel.teardown();

    assert!(!carousel.is_active());
    assert_eq!(carousel.scheduler().live_timers(), 0);
    assert_eq!(carousel.next(), Navigation::Dropped(DropReason::Inactive));
    assert_eq!(carousel.auto_advance(), Navigation::Dropped(DropReason::Inactive));
    assert!(!carousel.on_resize());

    carousel.resume();
    assert_eq!(carousel.scheduler().live_timers(), 0);
}

#[test]
fn completion_after_teardown_draws_nothing() {
    let mut carousel = carousel(3);
    assert!(carousel.next().is_started());
    carousel.teardown();

    let drawn = carousel.surface().translations.len();
    let highlighted = carousel.surface().highlighted.len();
    assert_eq!(carousel.transition_finished(), None);
    assert_eq!(carousel.surface().translations.len(), drawn);
    assert_eq!(carousel.surface().highlighted.len(), highlighted);
}
