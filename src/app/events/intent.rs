use crate::shared::SurfaceClick;

/// Eingaben aus UI/Renderer ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawingIntent {
    /// Zeichen-Button umgeschaltet (startet bzw. bricht ab / verlässt)
    DrawModeToggled,
    /// Aufgelöster Klick des Renderers (Karte oder UI-Chrome)
    SurfaceClicked { click: SurfaceClick },
    /// Letzten Punkt zurücknehmen
    UndoRequested,
    /// Alle Punkte verwerfen, weiterzeichnen
    ClearRequested,
    /// Strecke abschließen
    FinishRequested,
    /// Escape: Zeichnen abbrechen
    CancelRequested,
    /// Zeichenmodus verlassen (nach Abschluss)
    ExitRequested,
    /// Höhenwert für einen erfassten Punkt eingetroffen
    ElevationReceived {
        index: usize,
        elevation_m: Option<f64>,
    },
}
