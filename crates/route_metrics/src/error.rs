use thiserror::Error;

/// Fehler der Metrik-Engine.
///
/// Alle Varianten sind lokal und behebbar; die Engine paniked nie.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MetricsError {
    /// Koordinate nicht endlich oder außerhalb [-90,90] / [-180,180]
    #[error("ungültiger Punkt: lat={lat}, lng={lng}")]
    InvalidPoint { lat: f64, lng: f64 },
    /// Weniger als zwei Punkte, keine Strecke auswertbar
    #[error("mindestens 2 Punkte erforderlich, vorhanden: {count}")]
    InsufficientPoints { count: usize },
}
