//! Höhenprofil-Auswertung aus optionalen Höhenwerten pro Punkt.
//!
//! Die Werte stammen von einer externen Höhenquelle; hier wird nur aggregiert.

use serde::{Deserialize, Serialize};

/// Aggregierte Höhenkennzahlen einer Strecke.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ElevationSummary {
    /// Summe aller positiven Höhendifferenzen
    pub gain_m: f64,
    /// Summe aller negativen Höhendifferenzen (als Betrag)
    pub loss_m: f64,
    /// Höchster Wert
    pub max_m: f64,
    /// Niedrigster Wert
    pub min_m: f64,
}

/// Wertet die vorhandenen Höhenwerte in Erfassungsreihenfolge aus.
///
/// Punkte ohne Daten werden übersprungen; Differenzen entstehen zwischen
/// aufeinanderfolgenden Punkten *mit* Daten. Ohne jegliche Daten: alles 0.
pub fn summarize_elevation<I>(elevations: I) -> ElevationSummary
where
    I: IntoIterator<Item = Option<f64>>,
{
    let mut values = elevations
        .into_iter()
        .flatten()
        .filter(|e| e.is_finite());

    let Some(first) = values.next() else {
        return ElevationSummary::default();
    };

    let mut summary = ElevationSummary {
        gain_m: 0.0,
        loss_m: 0.0,
        max_m: first,
        min_m: first,
    };
    let mut previous = first;
    for value in values {
        let delta = value - previous;
        if delta > 0.0 {
            summary.gain_m += delta;
        } else {
            summary.loss_m += -delta;
        }
        summary.max_m = summary.max_m.max(value);
        summary.min_m = summary.min_m.min(value);
        previous = value;
    }
    summary
}
