//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält den Render-Sync-Vertrag zum Karten-Renderer, eine Headless-
//! Implementierung davon und die Laufzeit-Optionen.

mod headless_overlay;
pub mod options;
mod render_sync;

pub use headless_overlay::{HeadlessOverlay, OverlaySnapshot};
pub use options::TracerOptions;
pub use render_sync::{
    CursorMode, LineHandle, MarkerHandle, RenderSync, SubscriptionHandle, SurfaceClick,
};
