//! Lifecycle-Übergänge der Zeichen-Session (enter/complete/cancel/exit).

use route_metrics::compute_metrics;

use super::state::{DrawingSession, SessionError, SessionOutcome, SessionState};
use crate::app::completion::RouteCompletion;
use crate::shared::{CursorMode, RenderSync};

impl<R: RenderSync + ?Sized> DrawingSession<'_, R> {
    /// `Idle → Active`: verwirft alte Punkte und meldet sich für Klicks an.
    pub fn enter(&mut self) -> Result<(), SessionError> {
        self.ensure_state("enter", &[SessionState::Idle])?;

        self.points.clear();
        self.clear_overlay();
        if self.subscription.is_none() {
            self.subscription = Some(self.overlay.subscribe_surface_clicks());
        }
        self.overlay.set_cursor_mode(CursorMode::Crosshair);
        self.state = SessionState::Active;
        log::info!("Zeichenmodus gestartet");
        Ok(())
    }

    /// `Active → Completed`: berechnet die Metriken genau einmal.
    ///
    /// Bei weniger als zwei Punkten bleibt die Session unverändert aktiv.
    pub fn complete(&mut self) -> Result<RouteCompletion, SessionError> {
        self.ensure_state("complete", &[SessionState::Active])?;

        if self.points.len() < 2 {
            log::info!(
                "Abschluss abgelehnt: {} Punkt(e) erfasst",
                self.points.len()
            );
            return Err(SessionError::InsufficientPoints {
                count: self.points.len(),
            });
        }

        let snapshot = self.points.snapshot();
        let metrics = compute_metrics(&snapshot, &self.policy)?;
        let coordinates = snapshot.iter().map(|tp| tp.point).collect();
        let completion = RouteCompletion::new(coordinates, metrics);

        self.overlay.set_cursor_mode(CursorMode::Default);
        self.state = SessionState::Completed;
        self.last_outcome = Some(SessionOutcome::Completed(completion.clone()));
        log::info!(
            "Strecke abgeschlossen: {} Punkte, {:.1} m, {} Kurven",
            completion.point_count(),
            completion.metrics.length_m,
            completion.metrics.corner_count
        );
        Ok(completion)
    }

    /// `Active → Idle`: verwirft alles, keine Metriken.
    pub fn cancel(&mut self) -> Result<(), SessionError> {
        self.ensure_state("cancel", &[SessionState::Active])?;

        let discarded = self.points.len();
        self.teardown();
        self.last_outcome = Some(SessionOutcome::Cancelled);
        log::info!("Zeichnen abgebrochen, {} Punkt(e) verworfen", discarded);
        Ok(())
    }

    /// `Idle/Completed → Idle`: gibt das Klick-Abonnement frei.
    pub fn exit(&mut self) -> Result<(), SessionError> {
        self.ensure_state("exit", &[SessionState::Idle, SessionState::Completed])?;

        let was_completed = self.state == SessionState::Completed;
        self.teardown();
        if was_completed {
            log::info!("Zeichenmodus nach Abschluss verlassen");
        }
        Ok(())
    }

    /// Gemeinsamer Abbau für `cancel()` und `exit()`.
    fn teardown(&mut self) {
        self.points.clear();
        self.clear_overlay();
        self.release_subscription();
        self.overlay.set_cursor_mode(CursorMode::Default);
        self.state = SessionState::Idle;
    }

    fn release_subscription(&mut self) {
        if let Some(handle) = self.subscription.take() {
            self.overlay.unsubscribe(handle);
        }
    }
}

impl<R: RenderSync + ?Sized> Drop for DrawingSession<'_, R> {
    fn drop(&mut self) {
        if self.state == SessionState::Active {
            self.clear_overlay();
            self.overlay.set_cursor_mode(CursorMode::Default);
        }
        self.release_subscription();
    }
}
