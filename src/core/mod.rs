//! Core-Domänentypen: Punkte und die erfasste Punktfolge.

pub mod point_sequence;

pub use point_sequence::PointSequence;
pub use route_metrics::{GeoPoint, TrackPoint};
