//! Bogenlängen-Berechnung und Arc-Length-Resampling von Polylinien.

use glam::DVec2;

use crate::core::TrackError;

/// Approximierte Länge einer Polyline.
pub fn polyline_length(points: &[DVec2]) -> f64 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Kumulative Bogenlängen entlang einer Polyline (`result[0] == 0`).
pub fn cumulative_lengths(points: &[DVec2]) -> Vec<f64> {
    let mut lengths = Vec::with_capacity(points.len());
    let mut cumulative = 0.0;
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            cumulative += points[i - 1].distance(*p);
        }
        lengths.push(cumulative);
    }
    lengths
}

/// Verteilt `count` Punkte mit gleichmäßigem Bogenlängen-Abstand entlang
/// der Polyline.
///
/// x und y werden unabhängig stückweise linear gegen die kumulative
/// Bogenlänge interpoliert. Erster und letzter Ausgabe-Punkt sind exakt
/// die Eingabe-Endpunkte; die Ausgabe läuft monoton an der Eingabe entlang.
///
/// Schlägt fehl bei weniger als 2 Eingabe-Punkten oder `count < 2`
/// (ein einzelner Punkt kann das Intervall `[0, Gesamtlänge]` nicht
/// einschließlich beider Enden abdecken) sowie bei Gesamtlänge null.
pub fn resample_uniform(points: &[DVec2], count: usize) -> Result<Vec<DVec2>, TrackError> {
    if points.len() < 2 {
        return Err(TrackError::InvalidParameter {
            stage: "resampler",
            reason: format!(
                "Polyline mit {} Punkten kann nicht resampelt werden (mindestens 2)",
                points.len()
            ),
        });
    }
    if count < 2 {
        return Err(TrackError::InvalidParameter {
            stage: "resampler",
            reason: format!("Ziel-Anzahl {count} ist zu klein (mindestens 2)"),
        });
    }

    let lengths = cumulative_lengths(points);
    let total = *lengths.last().unwrap();
    if total <= 0.0 {
        return Err(TrackError::DegenerateInput {
            stage: "resampler",
            reason: "Gesamtlänge der Polyline ist null (alle Punkte fallen zusammen)".into(),
        });
    }

    let mut result = Vec::with_capacity(count);
    result.push(points[0]);

    for step in 1..count - 1 {
        let target = total * step as f64 / (count - 1) as f64;
        let idx = lengths
            .partition_point(|&len| len < target)
            .clamp(1, lengths.len() - 1);

        let len_before = lengths[idx - 1];
        let len_after = lengths[idx];
        let frac = if len_after > len_before {
            (target - len_before) / (len_after - len_before)
        } else {
            0.0
        };
        result.push(points[idx - 1].lerp(points[idx], frac));
    }

    result.push(points[points.len() - 1]);
    Ok(result)
}
