//! Segment-Primitive der Strecke: Gerade, kubische Bézier-Kurve, Kreisbogen.

use glam::DVec2;

use super::error::TrackError;

/// Beschreibung eines Strecken-Segments.
///
/// Jede Variante erzeugt beim Sampling genau `samples` Punkte vom
/// Start- bis zum End-Parameter (beide einschließlich).
#[derive(Debug, Clone, PartialEq)]
pub enum TrackSegment {
    /// Gerade von `start` nach `end`
    Line {
        start: DVec2,
        end: DVec2,
        samples: usize,
    },
    /// Kubische Bézier-Kurve mit vier Kontrollpunkten
    Bezier {
        p0: DVec2,
        p1: DVec2,
        p2: DVec2,
        p3: DVec2,
        samples: usize,
    },
    /// Kreisbogen um `center`. `end_angle` darf unter `start_angle` liegen
    /// (rückwärts laufender Bogen) oder 2π überschreiten (voller Umlauf).
    Arc {
        center: DVec2,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        samples: usize,
    },
}

impl TrackSegment {
    /// Anzahl der Sample-Punkte dieser Variante.
    pub fn sample_count(&self) -> usize {
        match *self {
            TrackSegment::Line { samples, .. }
            | TrackSegment::Bezier { samples, .. }
            | TrackSegment::Arc { samples, .. } => samples,
        }
    }

    /// End-Punkt des Segments in geschlossener Form (ohne Sampling).
    ///
    /// Wird beim Verketten von Layouts benutzt: der Start des Folge-Segments
    /// übernimmt exakt diesen Wert, damit die Stöße per Konstruktion dicht sind.
    pub fn end_point(&self) -> DVec2 {
        match *self {
            TrackSegment::Line { end, .. } => end,
            TrackSegment::Bezier { p3, .. } => p3,
            TrackSegment::Arc {
                center,
                radius,
                end_angle,
                ..
            } => center + radius * DVec2::new(end_angle.cos(), end_angle.sin()),
        }
    }

    /// Erzeugt die Sample-Punkte des Segments.
    ///
    /// Schlägt fehl bei `samples < 2` sowie bei nicht-positivem Bogenradius.
    pub fn sample(&self) -> Result<Vec<DVec2>, TrackError> {
        let samples = self.sample_count();
        if samples < 2 {
            return Err(TrackError::InvalidParameter {
                stage: "segment-builder",
                reason: format!("Sample-Anzahl {samples} ist zu klein (mindestens 2)"),
            });
        }

        match *self {
            TrackSegment::Line { start, end, .. } => Ok(sample_line(start, end, samples)),
            TrackSegment::Bezier { p0, p1, p2, p3, .. } => {
                Ok(sample_bezier(p0, p1, p2, p3, samples))
            }
            TrackSegment::Arc {
                center,
                radius,
                start_angle,
                end_angle,
                ..
            } => {
                if radius <= 0.0 || radius.is_nan() {
                    return Err(TrackError::InvalidParameter {
                        stage: "segment-builder",
                        reason: format!("Bogenradius {radius} ist nicht positiv"),
                    });
                }
                Ok(sample_arc(center, radius, start_angle, end_angle, samples))
            }
        }
    }
}

/// Punkte einer Geraden bei gleichmäßigem Parameter `t = i/(n-1)`.
fn sample_line(start: DVec2, end: DVec2, samples: usize) -> Vec<DVec2> {
    (0..samples)
        .map(|i| start.lerp(end, i as f64 / (samples - 1) as f64))
        .collect()
}

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
fn cubic_bezier(p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2, t: f64) -> DVec2 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p0 + 3.0 * inv2 * t * p1 + 3.0 * inv * t2 * p2 + t2 * t * p3
}

fn sample_bezier(p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2, samples: usize) -> Vec<DVec2> {
    (0..samples)
        .map(|i| cubic_bezier(p0, p1, p2, p3, i as f64 / (samples - 1) as f64))
        .collect()
}

/// Bogenpunkte bei gleichmäßig verteilten Winkeln zwischen `a0` und `a1`.
fn sample_arc(center: DVec2, radius: f64, a0: f64, a1: f64, samples: usize) -> Vec<DVec2> {
    (0..samples)
        .map(|i| {
            let a = a0 + (a1 - a0) * i as f64 / (samples - 1) as f64;
            center + radius * DVec2::new(a.cos(), a.sin())
        })
        .collect()
}
