//! In-Memory-Overlay ohne Grafik-Backend.
//!
//! Implementiert `RenderSync` über geordnete Maps. Dient Hosts ohne Karte
//! (Batch-Import, Server) und den Tests als Beobachtungspunkt für den
//! sichtbaren Zustand.

use indexmap::{IndexMap, IndexSet};
use route_metrics::GeoPoint;

use super::render_sync::{
    CursorMode, LineHandle, MarkerHandle, RenderSync, SubscriptionHandle,
};

/// Sichtbarer Zustand des Overlays, ohne Handles (für Vergleiche).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverlaySnapshot {
    /// Marker-Positionen in Zeichenreihenfolge
    pub markers: Vec<GeoPoint>,
    /// Punkte der Verbindungslinie, falls vorhanden
    pub line: Option<Vec<GeoPoint>>,
}

/// Headless-Implementierung des Render-Sync-Vertrags.
#[derive(Debug, Default)]
pub struct HeadlessOverlay {
    markers: IndexMap<MarkerHandle, GeoPoint>,
    lines: IndexMap<LineHandle, Vec<GeoPoint>>,
    subscriptions: IndexSet<SubscriptionHandle>,
    cursor: CursorMode,
    next_id: u64,
    draw_calls: usize,
}

impl HeadlessOverlay {
    /// Erstellt ein leeres Overlay.
    pub fn new() -> Self {
        Self::default()
    }

    fn next_handle_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Marker-Positionen in Zeichenreihenfolge.
    pub fn marker_positions(&self) -> Vec<GeoPoint> {
        self.markers.values().copied().collect()
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Aktuelle Verbindungslinie.
    pub fn line(&self) -> Option<&[GeoPoint]> {
        self.lines.values().last().map(Vec::as_slice)
    }

    /// Anzahl gleichzeitig gehaltener Linien (nach Vertrag höchstens 1).
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Gibt zurück, ob mindestens ein Klick-Abonnement besteht.
    pub fn is_subscribed(&self) -> bool {
        !self.subscriptions.is_empty()
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn cursor_mode(&self) -> CursorMode {
        self.cursor
    }

    /// Anzahl aller `draw_marker`/`draw_line`-Aufrufe seit Erstellung.
    pub fn draw_calls(&self) -> usize {
        self.draw_calls
    }

    /// Sichtbarer Zustand ohne Handles.
    pub fn snapshot(&self) -> OverlaySnapshot {
        OverlaySnapshot {
            markers: self.marker_positions(),
            line: self.line().map(<[GeoPoint]>::to_vec),
        }
    }
}

impl RenderSync for HeadlessOverlay {
    fn draw_marker(&mut self, point: GeoPoint) -> MarkerHandle {
        let handle = MarkerHandle(self.next_handle_id());
        self.markers.insert(handle, point);
        self.draw_calls += 1;
        handle
    }

    fn draw_line(&mut self, points: &[GeoPoint]) -> LineHandle {
        let handle = LineHandle(self.next_handle_id());
        self.lines.clear();
        self.lines.insert(handle, points.to_vec());
        self.draw_calls += 1;
        handle
    }

    fn remove_line(&mut self, handle: LineHandle) {
        self.lines.shift_remove(&handle);
    }

    fn clear_all(&mut self) {
        self.markers.clear();
        self.lines.clear();
    }

    fn subscribe_surface_clicks(&mut self) -> SubscriptionHandle {
        let handle = SubscriptionHandle(self.next_handle_id());
        self.subscriptions.insert(handle);
        handle
    }

    fn unsubscribe(&mut self, handle: SubscriptionHandle) {
        self.subscriptions.shift_remove(&handle);
    }

    fn set_cursor_mode(&mut self, mode: CursorMode) {
        self.cursor = mode;
    }
}
