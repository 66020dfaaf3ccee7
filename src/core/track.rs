//! Ergebnis-Bündel der Pipeline: Mittellinie plus linker/rechter Fahrbahnrand.

use glam::DVec2;

/// Achsenparallele Bounding-Box der Strecke.
///
/// Wird dem nachgelagerten Renderer für eine equal-aspect Ansicht übergeben.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackBounds {
    pub min: DVec2,
    pub max: DVec2,
}

/// Drei gleich lange Polylinien: Mittellinie, linker und rechter Rand.
///
/// Invariante: an jedem Index liegen beide Ränder im Abstand `width / 2`
/// zur Mittellinie, und die Verbindung links–rechts steht senkrecht auf
/// der lokalen Tangente.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackCurves {
    pub centerline: Vec<DVec2>,
    pub left_edge: Vec<DVec2>,
    pub right_edge: Vec<DVec2>,
}

impl TrackCurves {
    /// Anzahl der Punkte je Kurve.
    pub fn point_count(&self) -> usize {
        self.centerline.len()
    }

    /// Start-/Ziel-Punkt (Index 0 der Mittellinie).
    pub fn start_finish(&self) -> Option<DVec2> {
        self.centerline.first().copied()
    }

    /// Rundenlänge entlang der Mittellinie.
    pub fn lap_length(&self) -> f64 {
        self.centerline
            .windows(2)
            .map(|w| w[0].distance(w[1]))
            .sum()
    }

    /// Bounding-Box über alle drei Kurven.
    pub fn bounds(&self) -> Option<TrackBounds> {
        let mut points = self
            .centerline
            .iter()
            .chain(&self.left_edge)
            .chain(&self.right_edge);
        let first = *points.next()?;
        let (min, max) = points.fold((first, first), |(lo, hi), &p| (lo.min(p), hi.max(p)));
        Some(TrackBounds { min, max })
    }
}
