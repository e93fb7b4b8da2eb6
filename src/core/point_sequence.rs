//! Geordnete Punktfolge einer laufenden Erfassung.

use route_metrics::{GeoPoint, TrackPoint};

/// Erfasste Punkte in Klick-Reihenfolge.
///
/// Duplikate sind erlaubt. Gehört exklusiv einer `DrawingSession`;
/// nach außen gehen nur Snapshots (`snapshot`, `positions`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointSequence {
    points: Vec<TrackPoint>,
}

impl PointSequence {
    /// Erstellt eine leere Sequenz.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Hängt einen Punkt an und gibt seinen Index zurück.
    pub fn push(&mut self, point: TrackPoint) -> usize {
        self.points.push(point);
        self.points.len() - 1
    }

    /// Entfernt den letzten Punkt.
    pub fn pop(&mut self) -> Option<TrackPoint> {
        self.points.pop()
    }

    /// Leert die Sequenz.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Read-only Sicht auf alle Punkte.
    pub fn as_slice(&self) -> &[TrackPoint] {
        &self.points
    }

    /// Unabhängige Kopie für die Metrik-Berechnung.
    pub fn snapshot(&self) -> Vec<TrackPoint> {
        self.points.clone()
    }

    /// Nur die Positionen, in Erfassungsreihenfolge.
    pub fn positions(&self) -> Vec<GeoPoint> {
        self.points.iter().map(|tp| tp.point).collect()
    }

    /// Setzt den Höhenwert eines Punkts. `false` wenn der Index nicht existiert.
    pub fn set_elevation(&mut self, index: usize, elevation_m: Option<f64>) -> bool {
        match self.points.get_mut(index) {
            Some(tp) => {
                tp.elevation_m = elevation_m.filter(|e| e.is_finite());
                true
            }
            None => false,
        }
    }

    /// Mutable Iteration über alle Punkte (für das Nachtragen von Höhen).
    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, TrackPoint> {
        self.points.iter_mut()
    }
}
