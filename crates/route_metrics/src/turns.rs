//! Peilungen, Abbiegewinkel und Kurvenzählung.
//!
//! Aufeinanderfolgende identische Punkte werden vor der Auswertung
//! zusammengefasst: ein Duplikat hat keine Richtung und darf den
//! Abbiegewinkel am echten Knick nicht verfälschen.

use crate::GeoPoint;
use crate::geo::initial_bearing_deg;

/// Standard-Schwelle für eine Kurve in Grad (Betrag des Abbiegewinkels).
pub const DEFAULT_CORNER_THRESHOLD_DEG: f64 = 15.0;

/// Entfernt direkt aufeinanderfolgende identische Punkte.
pub(crate) fn dedup_consecutive(points: &[GeoPoint]) -> Vec<GeoPoint> {
    let mut out: Vec<GeoPoint> = Vec::with_capacity(points.len());
    for &p in points {
        if out.last() != Some(&p) {
            out.push(p);
        }
    }
    out
}

/// Peilung jedes Segments `i → i+1` in Grad [0, 360).
///
/// Segmente der Länge 0 (Duplikate) sind nicht enthalten.
pub fn bearings(points: &[GeoPoint]) -> Vec<f64> {
    dedup_consecutive(points)
        .windows(2)
        .map(|w| initial_bearing_deg(w[0], w[1]))
        .collect()
}

/// Vorzeichenbehafteter Abbiegewinkel pro Innen-Vertex in Grad, Bereich (-180, 180].
///
/// Positiv = Rechtskurve (Peilung nimmt zu), negativ = Linkskurve.
pub fn turn_angles(points: &[GeoPoint]) -> Vec<f64> {
    bearings(points)
        .windows(2)
        .map(|w| normalize_turn_deg(w[1] - w[0]))
        .collect()
}

/// Anzahl der Innen-Vertices mit |Abbiegewinkel| > `threshold_deg`.
pub fn count_corners(turns_deg: &[f64], threshold_deg: f64) -> u32 {
    let count = turns_deg.iter().filter(|t| t.abs() > threshold_deg).count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Normalisiert eine Winkeldifferenz auf (-180, 180].
pub(crate) fn normalize_turn_deg(deg: f64) -> f64 {
    let a = deg % 360.0;
    if a <= -180.0 {
        a + 360.0
    } else if a > 180.0 {
        a - 360.0
    } else {
        a
    }
}
