//! Punkt-Erfassung (add/undo/clear) und Overlay-Synchronisation.

use route_metrics::{GeoPoint, TrackPoint};

use super::state::{ClickOutcome, DrawingSession, SessionError, SessionState};
use crate::app::elevation::ElevationSource;
use crate::shared::{RenderSync, SurfaceClick};

impl<R: RenderSync + ?Sized> DrawingSession<'_, R> {
    /// Verarbeitet einen aufgelösten Klick des Renderers.
    ///
    /// Chrome-Klicks werden verworfen und gezählt; Kartenklicks werden
    /// validiert und angehängt.
    pub fn handle_click(&mut self, click: SurfaceClick) -> Result<ClickOutcome, SessionError> {
        self.ensure_state("handle_click", &[SessionState::Active])?;

        if click.is_chrome_click {
            self.ignored_clicks += 1;
            if self.log_ignored_clicks {
                log::debug!(
                    "Chrome-Klick ignoriert bei ({:.6}, {:.6}), gesamt: {}",
                    click.lat,
                    click.lng,
                    self.ignored_clicks
                );
            }
            return Ok(ClickOutcome::Ignored);
        }

        let point = GeoPoint::new(click.lat, click.lng).map_err(|e| {
            log::warn!("Klick verworfen: {}", e);
            SessionError::from(e)
        })?;
        let index = self.add_point(point)?;
        Ok(ClickOutcome::Added { index })
    }

    /// Hängt einen Punkt ohne Höhendaten an. Gibt den Index zurück.
    pub fn add_point(&mut self, point: GeoPoint) -> Result<usize, SessionError> {
        self.push_track_point(TrackPoint::new(point))
    }

    /// Hängt einen Punkt mit Höhenwert der externen Höhenquelle an.
    pub fn add_point_with_elevation(
        &mut self,
        point: GeoPoint,
        elevation_m: f64,
    ) -> Result<usize, SessionError> {
        self.push_track_point(TrackPoint::with_elevation(point, elevation_m))
    }

    /// Validiert rohe Koordinaten und hängt sie an.
    pub fn add_coordinates(&mut self, lat: f64, lng: f64) -> Result<usize, SessionError> {
        self.ensure_state("add_point", &[SessionState::Active])?;
        let point = GeoPoint::new(lat, lng)?;
        self.add_point(point)
    }

    fn push_track_point(&mut self, track_point: TrackPoint) -> Result<usize, SessionError> {
        self.ensure_state("add_point", &[SessionState::Active])?;

        let index = self.points.push(track_point);
        self.markers.push(self.overlay.draw_marker(track_point.point));
        if self.points.len() >= 2 {
            self.redraw_line();
        }

        log::debug!(
            "Punkt {} erfasst: ({:.6}, {:.6})",
            index,
            track_point.point.lat(),
            track_point.point.lng()
        );
        Ok(index)
    }

    /// Entfernt den letzten Punkt und zeichnet das Overlay komplett neu.
    ///
    /// Auf leerer Sequenz ein No-op (`Ok(None)`).
    pub fn undo(&mut self) -> Result<Option<TrackPoint>, SessionError> {
        self.ensure_state("undo", &[SessionState::Active])?;

        let removed = self.points.pop();
        if removed.is_some() {
            self.redraw_all();
            log::debug!("Letzten Punkt entfernt, verbleibend: {}", self.points.len());
        }
        Ok(removed)
    }

    /// Leert die Sequenz und das Overlay. Die Session bleibt aktiv.
    pub fn clear(&mut self) -> Result<(), SessionError> {
        self.ensure_state("clear", &[SessionState::Active])?;

        self.points.clear();
        self.clear_overlay();
        log::debug!("Alle Punkte verworfen");
        Ok(())
    }

    /// Setzt den Höhenwert eines bereits erfassten Punkts.
    pub fn set_elevation(
        &mut self,
        index: usize,
        elevation_m: Option<f64>,
    ) -> Result<(), SessionError> {
        self.ensure_state("set_elevation", &[SessionState::Active])?;

        if self.points.set_elevation(index, elevation_m) {
            Ok(())
        } else {
            Err(SessionError::PointIndexOutOfRange {
                index,
                len: self.points.len(),
            })
        }
    }

    /// Füllt fehlende Höhenwerte aus einer externen Quelle.
    ///
    /// Vorhandene Werte bleiben unverändert. Gibt die Anzahl gefüllter Punkte zurück.
    pub fn apply_elevations(&mut self, source: &dyn ElevationSource) -> Result<usize, SessionError> {
        self.ensure_state("apply_elevations", &[SessionState::Active])?;

        let mut filled = 0;
        for tp in self.points.iter_mut().filter(|tp| tp.elevation_m.is_none()) {
            if let Some(elevation) = source.elevation_at(tp.point).filter(|e| e.is_finite()) {
                tp.elevation_m = Some(elevation);
                filled += 1;
            }
        }
        log::debug!("Höhenwerte nachgetragen: {} von {}", filled, self.points.len());
        Ok(filled)
    }

    // ── Overlay-Synchronisation ─────────────────────────────────────

    /// Ersetzt die Verbindungslinie durch eine Linie über die volle Sequenz.
    fn redraw_line(&mut self) {
        if let Some(old) = self.line.take() {
            self.overlay.remove_line(old);
        }
        let positions = self.points.positions();
        self.line = Some(self.overlay.draw_line(&positions));
    }

    /// Zeichnet Marker und Linie vollständig aus der kanonischen Sequenz neu.
    pub(super) fn redraw_all(&mut self) {
        self.clear_overlay();
        for point in self.points.positions() {
            self.markers.push(self.overlay.draw_marker(point));
        }
        if self.points.len() >= 2 {
            self.redraw_line();
        }
    }

    /// Entfernt alle Marker und Linien dieser Session.
    pub(super) fn clear_overlay(&mut self) {
        self.overlay.clear_all();
        self.markers.clear();
        self.line = None;
    }
}
