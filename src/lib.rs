//! Route Tracer Library.
//! Interaktive Erfassung von Strecken auf einer Karte mit anschließender
//! Metrik-Berechnung (Länge, Kurven, Kurvigkeit, Höhenprofil).

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    ClickOutcome, DrawingCommand, DrawingController, DrawingIntent, DrawingSession,
    ElevationSource, RouteCompletion, RouteSummary, SessionError, SessionOutcome, SessionState,
};
pub use core::{GeoPoint, PointSequence, TrackPoint};
pub use route_metrics::{
    BandLimits, MetricsError, MetricsPolicy, RouteMetrics, TwistinessBand, compute_metrics,
};
pub use shared::{
    CursorMode, HeadlessOverlay, OverlaySnapshot, RenderSync, SurfaceClick, TracerOptions,
};
