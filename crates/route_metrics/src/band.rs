//! Kurvigkeits-Stufen für die Anzeige der Twistiness.

use serde::{Deserialize, Serialize};

/// Grenzwerte der Stufen in Radiant pro Kilometer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandLimits {
    /// Ab diesem Wert gilt eine Strecke als "Moderately Curvy"
    pub moderately_curvy_from: f64,
    /// Ab diesem Wert gilt eine Strecke als "Very Curvy"
    pub very_curvy_from: f64,
}

impl Default for BandLimits {
    fn default() -> Self {
        Self {
            moderately_curvy_from: 0.5,
            very_curvy_from: 2.0,
        }
    }
}

/// Kurvigkeits-Stufe einer Strecke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TwistinessBand {
    Mellow,
    ModeratelyCurvy,
    VeryCurvy,
}

impl TwistinessBand {
    /// Ordnet eine Twistiness (rad/m, wie in `RouteMetrics`) einer Stufe zu.
    pub fn classify(twistiness_rad_per_m: f64, limits: &BandLimits) -> Self {
        let per_km = twistiness_rad_per_m * 1000.0;
        if per_km >= limits.very_curvy_from {
            Self::VeryCurvy
        } else if per_km >= limits.moderately_curvy_from {
            Self::ModeratelyCurvy
        } else {
            Self::Mellow
        }
    }

    /// Anzeigename
    pub fn label(&self) -> &'static str {
        match self {
            Self::Mellow => "Mellow",
            Self::ModeratelyCurvy => "Moderately Curvy",
            Self::VeryCurvy => "Very Curvy",
        }
    }
}

impl std::fmt::Display for TwistinessBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_uses_per_km_limits() {
        let limits = BandLimits::default();
        assert_eq!(TwistinessBand::classify(0.0, &limits), TwistinessBand::Mellow);
        assert_eq!(
            TwistinessBand::classify(0.0006, &limits),
            TwistinessBand::ModeratelyCurvy
        );
        assert_eq!(
            TwistinessBand::classify(0.0031, &limits),
            TwistinessBand::VeryCurvy
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(TwistinessBand::ModeratelyCurvy.to_string(), "Moderately Curvy");
        assert_eq!(TwistinessBand::VeryCurvy.label(), "Very Curvy");
    }
}
