//! Zentrale Metrik-Berechnung: `TrackPoint`-Snapshot → `RouteMetrics`.

use serde::{Deserialize, Serialize};

use crate::elevation::summarize_elevation;
use crate::geo::{EARTH_RADIUS_M, GeoPoint, TrackPoint, haversine_distance};
use crate::turns::{DEFAULT_CORNER_THRESHOLD_DEG, count_corners, turn_angles};
use crate::MetricsError;

/// Policy-Konstanten der Auswertung.
///
/// Die Defaults entsprechen dem Verhalten ohne Konfiguration (15°, 6 371 km).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsPolicy {
    /// Betrag des Abbiegewinkels, ab dem (exklusiv) ein Vertex als Kurve zählt
    pub corner_threshold_deg: f64,
    /// Erdradius für Haversine in Metern
    pub earth_radius_m: f64,
}

impl Default for MetricsPolicy {
    fn default() -> Self {
        Self {
            corner_threshold_deg: DEFAULT_CORNER_THRESHOLD_DEG,
            earth_radius_m: EARTH_RADIUS_M,
        }
    }
}

/// Kennzahlen einer abgeschlossenen Strecke. Wird einmal pro Abschluss erzeugt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteMetrics {
    pub length_m: f64,
    pub corner_count: u32,
    /// Summe |Abbiegewinkel| in Radiant pro Meter
    pub twistiness: f64,
    pub elevation_gain_m: f64,
    pub elevation_loss_m: f64,
    pub max_elevation_m: f64,
    pub min_elevation_m: f64,
}

/// Länge jedes Segments `i → i+1` in Metern.
pub fn segment_lengths(points: &[GeoPoint], earth_radius_m: f64) -> Vec<f64> {
    points
        .windows(2)
        .map(|w| haversine_distance(w[0], w[1], earth_radius_m))
        .collect()
}

/// Berechnet alle Kennzahlen für einen Snapshot mit mindestens zwei Punkten.
///
/// Einzige Vorbedingung ist die Punktanzahl; jede andere Eingabe liefert ein
/// endliches (ggf. nullwertiges) Ergebnis.
pub fn compute_metrics(
    points: &[TrackPoint],
    policy: &MetricsPolicy,
) -> Result<RouteMetrics, MetricsError> {
    if points.len() < 2 {
        return Err(MetricsError::InsufficientPoints {
            count: points.len(),
        });
    }

    let positions: Vec<GeoPoint> = points.iter().map(|tp| tp.point).collect();

    let length_m: f64 = segment_lengths(&positions, policy.earth_radius_m)
        .into_iter()
        .sum();

    let turns = turn_angles(&positions);
    let corner_count = count_corners(&turns, policy.corner_threshold_deg);
    let total_turn_rad: f64 = turns.iter().map(|t| t.abs().to_radians()).sum();
    let twistiness = if length_m > 0.0 {
        total_turn_rad / length_m
    } else {
        0.0
    };

    let elevation = summarize_elevation(points.iter().map(|tp| tp.elevation_m));

    let metrics = RouteMetrics {
        length_m,
        corner_count,
        twistiness,
        elevation_gain_m: elevation.gain_m,
        elevation_loss_m: elevation.loss_m,
        max_elevation_m: elevation.max_m,
        min_elevation_m: elevation.min_m,
    };

    log::debug!(
        "Metriken berechnet: {} Punkte, {:.1} m, {} Kurven, Twistiness {:.6}",
        points.len(),
        metrics.length_m,
        metrics.corner_count,
        metrics.twistiness
    );

    Ok(metrics)
}
