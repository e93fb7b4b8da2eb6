//! Render-Sync-Vertrag zwischen Zeichen-Session und Karten-Renderer.
//!
//! Der Renderer (Kachelkarte, Marker, Polyline) liegt außerhalb dieser Crate.
//! Die Session ruft nur diese Schnittstelle auf und zeichnet nach jeder
//! Mutation aus der kanonischen Punktfolge neu.

use route_metrics::GeoPoint;

/// Handle eines gezeichneten Markers (vom Renderer vergeben).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerHandle(pub u64);

/// Handle der gezeichneten Verbindungslinie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineHandle(pub u64);

/// Handle eines Klick-Abonnements. Gehört der Session, die es erworben hat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionHandle(pub u64);

/// Cursor-Darstellung über der Karte (rein kosmetisch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorMode {
    #[default]
    Default,
    Crosshair,
}

/// Aufgelöster Klick des Renderers.
///
/// `is_chrome_click` unterscheidet Klicks auf UI-Elemente über der Karte
/// (Buttons, Panels) von Klicks auf die Kartenfläche. Die Session vertraut
/// diesem Flag; wie es ermittelt wird (Hit-Test, Z-Order, Event-Phase),
/// ist Sache des Renderers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceClick {
    pub lat: f64,
    pub lng: f64,
    pub is_chrome_click: bool,
}

impl SurfaceClick {
    /// Klick auf die Kartenfläche
    pub fn on_map(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            is_chrome_click: false,
        }
    }

    /// Klick auf ein UI-Element über der Karte
    pub fn on_chrome(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            is_chrome_click: true,
        }
    }
}

/// Fähigkeiten, die die Session vom Karten-Renderer benötigt.
pub trait RenderSync {
    /// Zeichnet einen Marker an `point`.
    fn draw_marker(&mut self, point: GeoPoint) -> MarkerHandle;

    /// Zeichnet die Verbindungslinie durch alle `points`.
    ///
    /// Ersetzt eine vorhandene Linie, hängt nie an.
    fn draw_line(&mut self, points: &[GeoPoint]) -> LineHandle;

    /// Entfernt die Linie mit diesem Handle (unbekannte Handles: No-op).
    fn remove_line(&mut self, handle: LineHandle);

    /// Entfernt alle Marker und Linien.
    fn clear_all(&mut self);

    /// Meldet die Session für Kartenklicks an.
    fn subscribe_surface_clicks(&mut self) -> SubscriptionHandle;

    /// Gibt ein Abonnement wieder frei.
    fn unsubscribe(&mut self, handle: SubscriptionHandle);

    /// Cursor umschalten (best effort).
    fn set_cursor_mode(&mut self, _mode: CursorMode) {}
}
