//! Übergabevertrag einer abgeschlossenen Strecke an Persistenz und Anzeige.

use route_metrics::{BandLimits, GeoPoint, RouteMetrics, TwistinessBand};
use serde::{Deserialize, Serialize};

/// Abgeschlossene Strecke: Koordinaten plus einmalig berechnete Metriken.
///
/// Serialisiert flach als
/// `{ coordinates: [{lat,lng}], length_m, corner_count, twistiness, ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteCompletion {
    /// Erfasste Punkte in Klick-Reihenfolge
    pub coordinates: Vec<GeoPoint>,
    #[serde(flatten)]
    pub metrics: RouteMetrics,
}

/// Aufbereitete Kurzfassung für Listen-/Detailansichten.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSummary {
    /// Länge in km, auf 2 Nachkommastellen gerundet
    pub length_km: f64,
    pub corner_count: u32,
    pub band: TwistinessBand,
    /// Anstieg in ganzen Metern
    pub elevation_gain_m: f64,
    /// Abstieg in ganzen Metern
    pub elevation_loss_m: f64,
}

impl RouteCompletion {
    pub fn new(coordinates: Vec<GeoPoint>, metrics: RouteMetrics) -> Self {
        Self {
            coordinates,
            metrics,
        }
    }

    pub fn point_count(&self) -> usize {
        self.coordinates.len()
    }

    /// Kurvigkeits-Stufe der Strecke.
    pub fn band(&self, limits: &BandLimits) -> TwistinessBand {
        TwistinessBand::classify(self.metrics.twistiness, limits)
    }

    /// Kurzfassung für die Anzeige.
    pub fn summary(&self, limits: &BandLimits) -> RouteSummary {
        RouteSummary {
            length_km: (self.metrics.length_m / 10.0).round() / 100.0,
            corner_count: self.metrics.corner_count,
            band: self.band(limits),
            elevation_gain_m: self.metrics.elevation_gain_m.round(),
            elevation_loss_m: self.metrics.elevation_loss_m.round(),
        }
    }

    /// JSON-Payload für den Persistenz-Kollaborateur.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl std::fmt::Display for RouteSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.2} km · {} Kurven · {} · +{:.0} m / -{:.0} m",
            self.length_km, self.corner_count, self.band, self.elevation_gain_m, self.elevation_loss_m
        )
    }
}
