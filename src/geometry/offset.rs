//! Tangenten-Schätzung und Parallelkurven (Fahrbahnränder).

use glam::DVec2;

use crate::core::TrackError;

/// Einheits-Tangenten einer geschlossenen Polyline.
///
/// Zentrale Differenzen mit Index-Wrap an beiden Enden:
/// `t[i] = (p[i+1] − p[i−1]) / 2` mit Indizes modulo n.
///
/// Schlägt fehl, wenn eine Differenz die Länge null hat (zusammenfallende
/// Nachbarpunkte machen die Richtung unbestimmt).
pub fn closed_tangents(points: &[DVec2]) -> Result<Vec<DVec2>, TrackError> {
    let n = points.len();
    if n < 3 {
        return Err(TrackError::InvalidParameter {
            stage: "offset-generator",
            reason: format!("{n} Punkte reichen für keine Tangenten-Schätzung (mindestens 3)"),
        });
    }

    let mut tangents = Vec::with_capacity(n);
    for i in 0..n {
        let next = points[(i + 1) % n];
        let prev = points[(i + n - 1) % n];
        let diff = (next - prev) / 2.0;
        let length = diff.length();
        if length < f64::EPSILON {
            return Err(TrackError::DegenerateInput {
                stage: "offset-generator",
                reason: format!("Tangente an Index {i} hat Länge null (zusammenfallende Nachbarpunkte)"),
            });
        }
        tangents.push(diff / length);
    }
    Ok(tangents)
}

/// Berechnet linken und rechten Fahrbahnrand im Abstand `width / 2` zur
/// Mittellinie.
///
/// Die Normale ist die um 90° gedrehte Tangente `(-t.y, t.x)`;
/// links = Mittellinie + Normale·w/2, rechts = Mittellinie − Normale·w/2.
/// An jedem Index sind beide Ränder gleich weit entfernt und die
/// Verbindung links–rechts steht senkrecht auf der Tangente.
pub fn offset_edges(
    centerline: &[DVec2],
    width: f64,
) -> Result<(Vec<DVec2>, Vec<DVec2>), TrackError> {
    if width <= 0.0 || width.is_nan() {
        return Err(TrackError::InvalidParameter {
            stage: "offset-generator",
            reason: format!("Fahrbahn-Breite {width} ist nicht positiv"),
        });
    }

    let tangents = closed_tangents(centerline)?;
    let half = width / 2.0;
    let mut left = Vec::with_capacity(centerline.len());
    let mut right = Vec::with_capacity(centerline.len());
    for (p, tangent) in centerline.iter().zip(&tangents) {
        let normal = DVec2::new(-tangent.y, tangent.x);
        left.push(*p + normal * half);
        right.push(*p - normal * half);
    }
    Ok((left, right))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Dicht gesampelter Kreis (gegen den Uhrzeigersinn).
    fn circle(radius: f64, count: usize) -> Vec<DVec2> {
        (0..count)
            .map(|i| {
                let a = std::f64::consts::TAU * i as f64 / count as f64;
                radius * DVec2::new(a.cos(), a.sin())
            })
            .collect()
    }

    #[test]
    fn test_tangents_are_unit_and_perpendicular_to_radius() {
        let points = circle(5.0, 360);
        let tangents = closed_tangents(&points).expect("Tangenten erwartet");

        for (p, t) in points.iter().zip(&tangents) {
            assert_relative_eq!(t.length(), 1.0, epsilon = 1e-9);
            // Beim Kreis steht die Tangente senkrecht auf dem Radius
            assert!(p.dot(*t).abs() < 1e-3);
        }
    }

    #[test]
    fn test_tangents_reject_coincident_difference_neighbors() {
        // Im 3er-Ring [A, B, A] sind Vorgänger und Nachfolger von B identisch
        let degenerate = vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(0.0, 0.0),
        ];
        let err = closed_tangents(&degenerate).expect_err("Fehler erwartet");
        assert!(matches!(err, TrackError::DegenerateInput { .. }));
    }

    #[test]
    fn test_offset_equidistant_and_perpendicular() {
        let points = circle(5.0, 360);
        let (left, right) = offset_edges(&points, 1.0).expect("Ränder erwartet");
        let tangents = closed_tangents(&points).expect("Tangenten erwartet");

        for i in 0..points.len() {
            assert_relative_eq!(left[i].distance(points[i]), 0.5, epsilon = 1e-6);
            assert_relative_eq!(right[i].distance(points[i]), 0.5, epsilon = 1e-6);
            let chord = left[i] - right[i];
            assert!(chord.dot(tangents[i]).abs() < 1e-9);
        }
    }

    #[test]
    fn test_offset_circle_radii() {
        // Gegen den Uhrzeigersinn zeigt die Normale `(-t.y, t.x)` zum
        // Zentrum: der linke Rand ist der innere.
        let points = circle(5.0, 360);
        let (left, right) = offset_edges(&points, 1.0).expect("Ränder erwartet");

        for i in 0..points.len() {
            assert_relative_eq!(left[i].length(), 4.5, epsilon = 1e-3);
            assert_relative_eq!(right[i].length(), 5.5, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_non_positive_width_rejected() {
        let points = circle(1.0, 16);
        let err = offset_edges(&points, 0.0).expect_err("Fehler erwartet");
        assert!(matches!(err, TrackError::InvalidParameter { .. }));
    }
}
