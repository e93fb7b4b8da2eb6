//! Schnittstelle zur externen Höhenquelle.
//!
//! Die Crate sampelt selbst keine Höhen; sie nimmt Werte eines Terrain-
//! bzw. Höhendienstes entgegen und hängt sie an die erfassten Punkte.

use route_metrics::GeoPoint;

/// Liefert die Geländehöhe (Meter) für einen Punkt, `None` wenn unbekannt.
pub trait ElevationSource {
    fn elevation_at(&self, point: GeoPoint) -> Option<f64>;
}

impl<F> ElevationSource for F
where
    F: Fn(GeoPoint) -> Option<f64>,
{
    fn elevation_at(&self, point: GeoPoint) -> Option<f64> {
        self(point)
    }
}
