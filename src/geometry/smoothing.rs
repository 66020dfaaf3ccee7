//! Zirkulärer gleitender Mittelwert für geschlossene Kurven.

use glam::DVec2;

use crate::core::TrackError;

/// Glättet eine geschlossene Polyline per zirkulärem gleitendem Mittelwert.
///
/// Jeder Ausgabe-Punkt ist das ungewichtete Mittel der `window` Punkte um
/// ihn herum; die Indizes laufen über beide Enden hinweg (die letzten
/// `(window-1)/2` Punkte gehen gedanklich dem ersten voraus). Dadurch
/// entsteht an der Nahtstelle des Rundkurses weder eine Unstetigkeit noch
/// ein Schrumpf-Artefakt.
///
/// `window` muss ungerade sein und darf die Punktanzahl nicht überschreiten.
pub fn smooth_closed(points: &[DVec2], window: usize) -> Result<Vec<DVec2>, TrackError> {
    let n = points.len();
    if window % 2 == 0 {
        return Err(TrackError::InvalidParameter {
            stage: "smoother",
            reason: format!("Fenster-Breite {window} ist nicht ungerade"),
        });
    }
    if window > n {
        return Err(TrackError::InvalidParameter {
            stage: "smoother",
            reason: format!("Fenster-Breite {window} überschreitet die Punktanzahl {n}"),
        });
    }

    let half = (window as isize - 1) / 2;
    let mut result = Vec::with_capacity(n);
    for i in 0..n as isize {
        let mut sum = DVec2::ZERO;
        for offset in -half..=half {
            let idx = (i + offset).rem_euclid(n as isize) as usize;
            sum += points[idx];
        }
        result.push(sum / window as f64);
    }
    Ok(result)
}
