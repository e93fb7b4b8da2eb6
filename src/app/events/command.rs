use crate::shared::SurfaceClick;

/// Mutierende Schritte auf der Zeichen-Session, zentral ausgeführt.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawingCommand {
    /// Zeichenmodus betreten
    EnterDrawMode,
    /// Klick an die Session weiterreichen (Chrome-Filter dort)
    HandleSurfaceClick { click: SurfaceClick },
    /// Letzten Punkt entfernen
    UndoLastPoint,
    /// Sequenz leeren
    ClearPoints,
    /// Metriken berechnen und abschließen
    CompleteRoute,
    /// Erfassung verwerfen
    CancelDrawing,
    /// Zeichenmodus verlassen
    ExitDrawMode,
    /// Höhenwert setzen
    SetElevation {
        index: usize,
        elevation_m: Option<f64>,
    },
}
