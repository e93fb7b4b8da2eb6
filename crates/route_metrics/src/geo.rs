//! Geographische Grundtypen und Kugel-Geometrie.
//!
//! Alle Berechnungen nutzen das sphärische Erdmodell (Haversine).

use serde::{Deserialize, Serialize};

use crate::MetricsError;

/// Mittlerer Erdradius in Metern (sphärisches Modell).
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Validierte geographische Koordinate in Grad.
///
/// Kann nur über [`GeoPoint::new`] erzeugt werden und ist danach unveränderlich.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGeoPoint")]
pub struct GeoPoint {
    lat: f64,
    lng: f64,
}

/// Unvalidierte Wire-Form für die Deserialisierung.
#[derive(Deserialize)]
struct RawGeoPoint {
    lat: f64,
    lng: f64,
}

impl TryFrom<RawGeoPoint> for GeoPoint {
    type Error = MetricsError;

    fn try_from(raw: RawGeoPoint) -> Result<Self, Self::Error> {
        GeoPoint::new(raw.lat, raw.lng)
    }
}

impl GeoPoint {
    /// Erstellt einen Punkt. Schlägt fehl bei NaN/Inf oder außerhalb des Wertebereichs.
    pub fn new(lat: f64, lng: f64) -> Result<Self, MetricsError> {
        if Self::is_valid(lat, lng) {
            Ok(Self { lat, lng })
        } else {
            Err(MetricsError::InvalidPoint { lat, lng })
        }
    }

    /// Prüft Endlichkeit und Wertebereich ohne einen Punkt zu erzeugen.
    pub fn is_valid(lat: f64, lng: f64) -> bool {
        lat.is_finite()
            && lng.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lng)
    }

    /// Breitengrad in Grad
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Längengrad in Grad
    pub fn lng(&self) -> f64 {
        self.lng
    }
}

/// Erfasster Punkt mit optionalem Höhenwert aus einer externen Quelle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackPoint {
    /// Position
    pub point: GeoPoint,
    /// Höhe in Metern, `None` = keine Höhendaten
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation_m: Option<f64>,
}

impl TrackPoint {
    /// Punkt ohne Höhendaten.
    pub fn new(point: GeoPoint) -> Self {
        Self {
            point,
            elevation_m: None,
        }
    }

    /// Punkt mit Höhenwert. Nicht-endliche Werte werden als "keine Daten" gespeichert.
    pub fn with_elevation(point: GeoPoint, elevation_m: f64) -> Self {
        Self {
            point,
            elevation_m: elevation_m.is_finite().then_some(elevation_m),
        }
    }
}

impl From<GeoPoint> for TrackPoint {
    fn from(point: GeoPoint) -> Self {
        Self::new(point)
    }
}

/// Großkreis-Distanz zwischen zwei Punkten in Metern (Haversine).
///
/// Identische Punkte liefern exakt 0.
pub fn haversine_distance(a: GeoPoint, b: GeoPoint, earth_radius_m: f64) -> f64 {
    if a == b {
        return 0.0;
    }
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlng = (b.lng - a.lng).to_radians();

    let sin_dlat = (dlat / 2.0).sin();
    let sin_dlng = (dlng / 2.0).sin();

    let h = sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlng * sin_dlng;
    // Rundungsfehler können h minimal über 1 heben
    2.0 * earth_radius_m * h.clamp(0.0, 1.0).sqrt().asin()
}

/// Anfangs-Peilung von `a` nach `b` in Grad, normalisiert auf [0, 360).
pub fn initial_bearing_deg(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlng = (b.lng - a.lng).to_radians();

    let y = dlng.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlng.cos();
    normalize_bearing_deg(y.atan2(x).to_degrees())
}

/// Normalisiert einen Winkel auf [0, 360).
pub(crate) fn normalize_bearing_deg(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid kann für winzige negative Werte exakt 360.0 liefern
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}
