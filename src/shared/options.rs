//! Zentrale Konfiguration für den Route-Tracer.
//!
//! `TracerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use route_metrics::{BandLimits, MetricsPolicy};
use serde::{Deserialize, Serialize};

// ── Metriken ────────────────────────────────────────────────────────

/// Abbiegewinkel (Grad), ab dem ein Innen-Vertex als Kurve zählt.
pub const CORNER_THRESHOLD_DEG: f64 = route_metrics::DEFAULT_CORNER_THRESHOLD_DEG;
/// Erdradius für Haversine (Meter).
pub const EARTH_RADIUS_M: f64 = route_metrics::EARTH_RADIUS_M;

// ── Twistiness-Stufen ───────────────────────────────────────────────

/// Ab diesem Wert (rad/km) gilt eine Strecke als "Moderately Curvy".
pub const MODERATELY_CURVY_FROM: f64 = 0.5;
/// Ab diesem Wert (rad/km) gilt eine Strecke als "Very Curvy".
pub const VERY_CURVY_FROM: f64 = 2.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `route_tracer.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TracerOptions {
    /// Kurven-Schwelle in Grad
    pub corner_threshold_deg: f64,
    /// Erdradius in Metern
    pub earth_radius_m: f64,
    /// Grenzwerte der Kurvigkeits-Stufen
    #[serde(default = "default_band_limits")]
    pub band_limits: BandLimits,
    /// Ignorierte UI-Klicks auf Debug-Level loggen
    #[serde(default = "default_log_ignored_clicks")]
    pub log_ignored_clicks: bool,
}

impl Default for TracerOptions {
    fn default() -> Self {
        Self {
            corner_threshold_deg: CORNER_THRESHOLD_DEG,
            earth_radius_m: EARTH_RADIUS_M,
            band_limits: default_band_limits(),
            log_ignored_clicks: true,
        }
    }
}

/// Serde-Default für `band_limits` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_band_limits() -> BandLimits {
    BandLimits {
        moderately_curvy_from: MODERATELY_CURVY_FROM,
        very_curvy_from: VERY_CURVY_FROM,
    }
}

fn default_log_ignored_clicks() -> bool {
    true
}

impl TracerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("route_tracer"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("route_tracer.toml")
    }

    /// Policy für die Metrik-Engine.
    ///
    /// Ungültige Werte (nicht endlich, Radius ≤ 0) fallen auf die Defaults zurück.
    pub fn metrics_policy(&self) -> MetricsPolicy {
        let defaults = MetricsPolicy::default();
        let corner_threshold_deg =
            if self.corner_threshold_deg.is_finite() && self.corner_threshold_deg >= 0.0 {
                self.corner_threshold_deg
            } else {
                log::warn!(
                    "Ungültige Kurven-Schwelle {}, verwende {}",
                    self.corner_threshold_deg,
                    defaults.corner_threshold_deg
                );
                defaults.corner_threshold_deg
            };
        let earth_radius_m = if self.earth_radius_m.is_finite() && self.earth_radius_m > 0.0 {
            self.earth_radius_m
        } else {
            log::warn!(
                "Ungültiger Erdradius {}, verwende {}",
                self.earth_radius_m,
                defaults.earth_radius_m
            );
            defaults.earth_radius_m
        };
        MetricsPolicy {
            corner_threshold_deg,
            earth_radius_m,
        }
    }
}
