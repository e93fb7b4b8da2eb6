//! Zustands-Definitionen der Zeichen-Session.

use route_metrics::{BandLimits, MetricsError, MetricsPolicy};
use thiserror::Error;

use crate::app::completion::RouteCompletion;
use crate::core::PointSequence;
use crate::shared::{LineHandle, MarkerHandle, RenderSync, SubscriptionHandle, TracerOptions};

/// Phase der Zeichen-Session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Zeichenmodus aus, kein Abonnement
    #[default]
    Idle,
    /// Punkte werden erfasst
    Active,
    /// Strecke abgeschlossen, Metriken berechnet; wartet auf `exit()`
    Completed,
}

/// Ergebnis der zuletzt beendeten Erfassung.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    /// Abgeschlossen mit Koordinaten und Metriken
    Completed(RouteCompletion),
    /// Abgebrochen, alle Punkte verworfen
    Cancelled,
}

/// Rückgabe von `handle_click`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Punkt an Position `index` angehängt
    Added { index: usize },
    /// Klick auf UI-Chrome, verworfen
    Ignored,
}

/// Fehler der Zeichen-Session. Alle Fehler lassen den Zustand unverändert.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("ungültiger Punkt: lat={lat}, lng={lng}")]
    InvalidPoint { lat: f64, lng: f64 },
    #[error("Abschluss nicht möglich: {count} Punkt(e), mindestens 2 erforderlich")]
    InsufficientPoints { count: usize },
    #[error("'{operation}' ist im Zustand {state:?} nicht erlaubt")]
    InvalidState {
        operation: &'static str,
        state: SessionState,
    },
    #[error("Punktindex {index} existiert nicht (Länge {len})")]
    PointIndexOutOfRange { index: usize, len: usize },
}

impl From<MetricsError> for SessionError {
    fn from(err: MetricsError) -> Self {
        match err {
            MetricsError::InvalidPoint { lat, lng } => Self::InvalidPoint { lat, lng },
            MetricsError::InsufficientPoints { count } => Self::InsufficientPoints { count },
        }
    }
}

/// Zeichen-Session: besitzt die Punktfolge und treibt das Overlay.
///
/// Der Renderer wird exklusiv geliehen (`&mut`) und überlebt die Session.
/// Damit kann pro Renderer höchstens eine Session existieren.
pub struct DrawingSession<'a, R: RenderSync + ?Sized> {
    pub(super) overlay: &'a mut R,
    pub(super) state: SessionState,
    pub(super) points: PointSequence,
    /// Klick-Abonnement, gehalten von `enter()` bis `exit()`/`cancel()`
    pub(super) subscription: Option<SubscriptionHandle>,
    /// Aktuelle Verbindungslinie (nur bei ≥ 2 Punkten)
    pub(super) line: Option<LineHandle>,
    /// Ein Marker pro Punkt, gleiche Reihenfolge
    pub(super) markers: Vec<MarkerHandle>,
    pub(super) policy: MetricsPolicy,
    pub(super) band_limits: BandLimits,
    pub(super) log_ignored_clicks: bool,
    /// Anzahl verworfener Chrome-Klicks seit Erstellung
    pub(super) ignored_clicks: u64,
    pub(super) last_outcome: Option<SessionOutcome>,
}

impl<'a, R: RenderSync + ?Sized> DrawingSession<'a, R> {
    /// Erstellt eine Session im Zustand `Idle`.
    pub fn new(overlay: &'a mut R, options: &TracerOptions) -> Self {
        Self {
            overlay,
            state: SessionState::Idle,
            points: PointSequence::new(),
            subscription: None,
            line: None,
            markers: Vec::new(),
            policy: options.metrics_policy(),
            band_limits: options.band_limits,
            log_ignored_clicks: options.log_ignored_clicks,
            ignored_clicks: 0,
            last_outcome: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == SessionState::Active
    }

    /// Read-only Sicht auf die erfassten Punkte.
    pub fn points(&self) -> &PointSequence {
        &self.points
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Anzahl verworfener Chrome-Klicks (Beobachtungspunkt für Tests/Telemetrie).
    pub fn ignored_clicks(&self) -> u64 {
        self.ignored_clicks
    }

    /// Hält die Session ein Klick-Abonnement?
    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn policy(&self) -> &MetricsPolicy {
        &self.policy
    }

    pub fn band_limits(&self) -> &BandLimits {
        &self.band_limits
    }

    /// Ergebnis der zuletzt beendeten Erfassung.
    pub fn last_outcome(&self) -> Option<&SessionOutcome> {
        self.last_outcome.as_ref()
    }

    /// Read-only Zugriff auf den Renderer (z.B. für Headless-Auswertung).
    pub fn overlay(&self) -> &R {
        &*self.overlay
    }

    /// Statustext für die umgebende UI.
    pub fn status_text(&self) -> &'static str {
        match (self.state, self.points.len()) {
            (SessionState::Idle, _) => "Zeichenmodus starten",
            (SessionState::Active, 0) => "Startpunkt auf der Karte klicken",
            (SessionState::Active, 1) => "Nächsten Punkt klicken (mind. 2 Punkte)",
            (SessionState::Active, _) => {
                "Weitere Punkte klicken, Abschließen speichert, Escape bricht ab"
            }
            (SessionState::Completed, _) => "Strecke abgeschlossen",
        }
    }

    /// Prüft, ob `operation` im aktuellen Zustand erlaubt ist.
    pub(super) fn ensure_state(
        &self,
        operation: &'static str,
        allowed: &[SessionState],
    ) -> Result<(), SessionError> {
        if allowed.contains(&self.state) {
            Ok(())
        } else {
            log::warn!("'{}' im Zustand {:?} abgelehnt", operation, self.state);
            Err(SessionError::InvalidState {
                operation,
                state: self.state,
            })
        }
    }
}
