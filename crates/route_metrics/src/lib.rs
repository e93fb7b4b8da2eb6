//! Metrik-Engine für gezeichnete Routen.
//!
//! Reine Funktionen ohne Zustand und ohne I/O:
//! - `geo`: GeoPoint, Haversine-Distanz, Peilung (Forward-Azimuth)
//! - `turns`: Abbiegewinkel pro Innen-Vertex und Kurvenzählung
//! - `elevation`: Anstieg/Abstieg/Extrema aus optionalen Höhenwerten
//! - `metrics`: `RouteMetrics` und die zentrale `compute_metrics`-Funktion
//! - `band`: Einordnung der Twistiness in Kurvigkeits-Stufen

pub mod band;
pub mod elevation;
mod error;
pub mod geo;
pub mod metrics;
pub mod turns;

pub use band::{BandLimits, TwistinessBand};
pub use elevation::{ElevationSummary, summarize_elevation};
pub use error::MetricsError;
pub use geo::{EARTH_RADIUS_M, GeoPoint, TrackPoint, haversine_distance, initial_bearing_deg};
pub use metrics::{MetricsPolicy, RouteMetrics, compute_metrics, segment_lengths};
pub use turns::{DEFAULT_CORNER_THRESHOLD_DEG, bearings, count_corners, turn_angles};
