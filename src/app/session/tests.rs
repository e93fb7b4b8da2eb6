use super::*;
use crate::shared::{CursorMode, HeadlessOverlay, OverlaySnapshot, SurfaceClick, TracerOptions};
use route_metrics::GeoPoint;

fn p(lat: f64, lng: f64) -> GeoPoint {
    GeoPoint::new(lat, lng).expect("gültiger Testpunkt")
}

fn active_session(overlay: &mut HeadlessOverlay) -> DrawingSession<'_, HeadlessOverlay> {
    let mut session = DrawingSession::new(overlay, &TracerOptions::default());
    session.enter().expect("enter aus Idle");
    session
}

// ── enter / exit ──

#[test]
fn test_enter_subscribes_and_sets_crosshair() {
    let mut overlay = HeadlessOverlay::new();
    let session = active_session(&mut overlay);
    assert_eq!(session.state(), SessionState::Active);
    assert!(session.is_subscribed());
    assert!(session.overlay().is_subscribed());
    assert_eq!(session.overlay().cursor_mode(), CursorMode::Crosshair);
}

#[test]
fn test_enter_twice_is_rejected() {
    let mut overlay = HeadlessOverlay::new();
    let mut session = active_session(&mut overlay);
    let err = session.enter().unwrap_err();
    assert!(matches!(err, SessionError::InvalidState { operation: "enter", .. }));
    assert_eq!(session.overlay().subscription_count(), 1);
}

#[test]
fn test_exit_from_active_is_rejected() {
    let mut overlay = HeadlessOverlay::new();
    let mut session = active_session(&mut overlay);
    assert!(session.exit().is_err());
    assert_eq!(session.state(), SessionState::Active);
}

#[test]
fn test_drop_releases_subscription() {
    let mut overlay = HeadlessOverlay::new();
    {
        let mut session = active_session(&mut overlay);
        session.add_point(p(0.0, 0.0)).unwrap();
    }
    assert!(!overlay.is_subscribed());
    assert_eq!(overlay.marker_count(), 0);
    assert_eq!(overlay.cursor_mode(), CursorMode::Default);
}

// ── add_point / handle_click ──

#[test]
fn test_add_point_draws_marker_and_line_from_second_point() {
    let mut overlay = HeadlessOverlay::new();
    let mut session = active_session(&mut overlay);

    session.add_point(p(0.0, 0.0)).unwrap();
    assert_eq!(session.overlay().marker_count(), 1);
    assert!(session.overlay().line().is_none());

    session.add_point(p(0.0, 1.0)).unwrap();
    session.add_point(p(1.0, 1.0)).unwrap();
    assert_eq!(session.overlay().marker_count(), 3);
    assert_eq!(session.overlay().line_count(), 1);
    assert_eq!(
        session.overlay().line().unwrap(),
        &[p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0)]
    );
}

#[test]
fn test_chrome_click_is_ignored_and_counted() {
    let mut overlay = HeadlessOverlay::new();
    let mut session = active_session(&mut overlay);

    let outcome = session.handle_click(SurfaceClick::on_chrome(1.0, 1.0)).unwrap();
    assert_eq!(outcome, ClickOutcome::Ignored);
    assert_eq!(session.ignored_clicks(), 1);
    assert_eq!(session.point_count(), 0);
    assert_eq!(session.overlay().marker_count(), 0);

    let outcome = session.handle_click(SurfaceClick::on_map(1.0, 1.0)).unwrap();
    assert_eq!(outcome, ClickOutcome::Added { index: 0 });
    assert_eq!(session.ignored_clicks(), 1);
}

#[test]
fn test_invalid_click_leaves_sequence_unchanged() {
    let mut overlay = HeadlessOverlay::new();
    let mut session = active_session(&mut overlay);
    session.add_point(p(10.0, 10.0)).unwrap();

    let err = session
        .handle_click(SurfaceClick::on_map(f64::NAN, 10.0))
        .unwrap_err();
    assert!(matches!(err, SessionError::InvalidPoint { .. }));
    let err = session.add_coordinates(91.0, 0.0).unwrap_err();
    assert!(matches!(err, SessionError::InvalidPoint { .. }));

    assert_eq!(session.point_count(), 1);
    assert_eq!(session.overlay().marker_count(), 1);
}

#[test]
fn test_click_outside_active_state_is_rejected() {
    let mut overlay = HeadlessOverlay::new();
    let mut session = DrawingSession::new(&mut overlay, &TracerOptions::default());
    let err = session.handle_click(SurfaceClick::on_map(1.0, 1.0)).unwrap_err();
    assert!(matches!(err, SessionError::InvalidState { .. }));
}

// ── undo / clear ──

#[test]
fn test_undo_after_add_restores_previous_state() {
    for prior in 0..4 {
        let mut overlay = HeadlessOverlay::new();
        let mut session = active_session(&mut overlay);
        for i in 0..prior {
            session.add_point(p(i as f64 * 0.01, (i % 2) as f64 * 0.01)).unwrap();
        }
        let points_before = session.points().clone();
        let overlay_before = session.overlay().snapshot();

        session.add_point(p(45.0, 45.0)).unwrap();
        let removed = session.undo().unwrap();

        assert_eq!(removed.map(|tp| tp.point), Some(p(45.0, 45.0)));
        assert_eq!(session.points(), &points_before, "prior = {prior}");
        assert_eq!(session.overlay().snapshot(), overlay_before, "prior = {prior}");
    }
}

#[test]
fn test_undo_to_single_point_removes_line() {
    let mut overlay = HeadlessOverlay::new();
    let mut session = active_session(&mut overlay);
    session.add_point(p(0.0, 0.0)).unwrap();
    session.add_point(p(0.0, 1.0)).unwrap();

    session.undo().unwrap();
    assert_eq!(session.overlay().line_count(), 0);
    assert_eq!(session.overlay().marker_positions(), vec![p(0.0, 0.0)]);
}

#[test]
fn test_undo_on_empty_sequence_is_noop() {
    let mut overlay = HeadlessOverlay::new();
    let mut session = active_session(&mut overlay);
    let draws_before = session.overlay().draw_calls();
    assert_eq!(session.undo().unwrap(), None);
    assert_eq!(session.overlay().draw_calls(), draws_before);
}

#[test]
fn test_clear_empties_sequence_and_overlay_but_stays_active() {
    let mut overlay = HeadlessOverlay::new();
    let mut session = active_session(&mut overlay);
    for i in 0..5 {
        session.add_point(p(i as f64, 0.0)).unwrap();
    }

    session.clear().unwrap();
    assert!(session.points().is_empty());
    assert_eq!(session.overlay().snapshot(), OverlaySnapshot::default());
    assert_eq!(session.state(), SessionState::Active);

    // Weiterzeichnen nach clear
    session.add_point(p(1.0, 1.0)).unwrap();
    assert_eq!(session.point_count(), 1);
}

// ── complete / cancel ──

#[test]
fn test_complete_with_one_point_fails_without_transition() {
    let mut overlay = HeadlessOverlay::new();
    let mut session = active_session(&mut overlay);
    session.add_point(p(0.0, 0.0)).unwrap();

    let err = session.complete().unwrap_err();
    assert_eq!(err, SessionError::InsufficientPoints { count: 1 });
    assert_eq!(session.state(), SessionState::Active);
    assert!(session.last_outcome().is_none());
}

#[test]
fn test_complete_returns_exact_coordinates_and_metrics() {
    let mut overlay = HeadlessOverlay::new();
    let mut session = active_session(&mut overlay);
    let input = [p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0)];
    for point in input {
        session.add_point(point).unwrap();
    }

    let completion = session.complete().unwrap();
    assert_eq!(completion.coordinates, input.to_vec());
    assert_eq!(completion.metrics.corner_count, 1);
    assert!(completion.metrics.length_m > 0.0);
    assert_eq!(session.state(), SessionState::Completed);
    assert_eq!(
        session.last_outcome(),
        Some(&SessionOutcome::Completed(completion))
    );
    // Strecke bleibt bis exit() sichtbar
    assert_eq!(session.overlay().marker_count(), 3);
    assert_eq!(session.overlay().cursor_mode(), CursorMode::Default);
}

#[test]
fn test_mutations_after_complete_are_rejected() {
    let mut overlay = HeadlessOverlay::new();
    let mut session = active_session(&mut overlay);
    session.add_point(p(0.0, 0.0)).unwrap();
    session.add_point(p(0.0, 1.0)).unwrap();
    session.complete().unwrap();

    assert!(session.add_point(p(2.0, 2.0)).is_err());
    assert!(session.undo().is_err());
    assert!(session.clear().is_err());
    assert!(session.complete().is_err());
    assert_eq!(session.point_count(), 2);
}

#[test]
fn test_exit_after_complete_tears_down() {
    let mut overlay = HeadlessOverlay::new();
    let mut session = active_session(&mut overlay);
    session.add_point(p(0.0, 0.0)).unwrap();
    session.add_point(p(0.0, 1.0)).unwrap();
    session.complete().unwrap();

    session.exit().unwrap();
    assert_eq!(session.state(), SessionState::Idle);
    assert!(!session.is_subscribed());
    assert!(!session.overlay().is_subscribed());
    assert_eq!(session.overlay().snapshot(), OverlaySnapshot::default());

    // Neuer Durchlauf mit derselben Session
    session.enter().unwrap();
    assert!(session.points().is_empty());
}

#[test]
fn test_cancel_discards_everything() {
    let mut overlay = HeadlessOverlay::new();
    let mut session = active_session(&mut overlay);
    session.add_point(p(0.0, 0.0)).unwrap();
    session.add_point(p(0.0, 1.0)).unwrap();

    session.cancel().unwrap();
    assert_eq!(session.state(), SessionState::Idle);
    assert!(session.points().is_empty());
    assert!(!session.overlay().is_subscribed());
    assert_eq!(session.overlay().snapshot(), OverlaySnapshot::default());
    assert_eq!(session.last_outcome(), Some(&SessionOutcome::Cancelled));
}

// ── Höhenwerte ──

#[test]
fn test_apply_elevations_fills_only_missing_values() {
    let mut overlay = HeadlessOverlay::new();
    let mut session = active_session(&mut overlay);
    session.add_point_with_elevation(p(0.0, 0.0), 500.0).unwrap();
    session.add_point(p(0.0, 0.01)).unwrap();
    session.add_point(p(0.0, 0.02)).unwrap();

    let source = |point: GeoPoint| Some(if point.lng() > 0.015 { 300.0 } else { 200.0 });
    let filled = session.apply_elevations(&source).unwrap();
    assert_eq!(filled, 2);

    let elevations: Vec<_> = session.points().as_slice().iter().map(|tp| tp.elevation_m).collect();
    assert_eq!(elevations, vec![Some(500.0), Some(200.0), Some(300.0)]);
}

#[test]
fn test_set_elevation_out_of_range() {
    let mut overlay = HeadlessOverlay::new();
    let mut session = active_session(&mut overlay);
    session.add_point(p(0.0, 0.0)).unwrap();
    let err = session.set_elevation(4, Some(1.0)).unwrap_err();
    assert_eq!(err, SessionError::PointIndexOutOfRange { index: 4, len: 1 });
}

#[test]
fn test_status_text_follows_progress() {
    let mut overlay = HeadlessOverlay::new();
    let mut session = DrawingSession::new(&mut overlay, &TracerOptions::default());
    assert_eq!(session.status_text(), "Zeichenmodus starten");
    session.enter().unwrap();
    assert_eq!(session.status_text(), "Startpunkt auf der Karte klicken");
    session.add_point(p(0.0, 0.0)).unwrap();
    assert_eq!(session.status_text(), "Nächsten Punkt klicken (mind. 2 Punkte)");
}
