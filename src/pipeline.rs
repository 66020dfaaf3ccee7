//! Pipeline-Orchestrierung: Segmente → Pfad → Resampling → Glättung → Ränder.
//!
//! Der Datenfluss ist strikt vorwärts gerichtet; jede Stufe validiert ihre
//! Eingaben selbst und ein Fehler bricht den gesamten Lauf ab.

use glam::DVec2;

use crate::core::{TrackCurves, TrackError, TrackSegment};
use crate::geometry::{offset_edges, polyline_length, resample_uniform, smooth_closed};
use crate::shared::options::{GeneratorOptions, SEGMENT_JOINT_TOLERANCE};

/// Verkettet Segment-Punktläufe in Reihenfolge zu einer offenen Polyline.
///
/// Stöße werden weder dedupliziert noch repariert — benachbarte Segmente
/// teilen ihre Endpunkte per Konstruktion der Kontrollpunkte. Klafft ein
/// Stoß weiter als [`SEGMENT_JOINT_TOLERANCE`], wird gewarnt und trotzdem
/// fortgefahren.
pub fn assemble_path(parts: &[Vec<DVec2>]) -> Vec<DVec2> {
    for (i, pair) in parts.windows(2).enumerate() {
        let (Some(end), Some(start)) = (pair[0].last(), pair[1].first()) else {
            continue;
        };
        let gap = end.distance(*start);
        if gap > SEGMENT_JOINT_TOLERANCE {
            log::warn!(
                "Stoß zwischen Segment {} und {} klafft {:.6} Einheiten",
                i,
                i + 1,
                gap
            );
        }
    }
    parts.iter().flatten().copied().collect()
}

/// Führt die komplette Pipeline aus: Segment-Sampling, Verkettung,
/// Arc-Length-Resampling, zirkuläre Glättung, Parallelkurven.
pub fn build_track(
    segments: &[TrackSegment],
    options: &GeneratorOptions,
) -> Result<TrackCurves, TrackError> {
    let mut parts = Vec::with_capacity(segments.len());
    for segment in segments {
        parts.push(segment.sample()?);
    }
    log::debug!("{} Segmente gesampelt", parts.len());

    let path = assemble_path(&parts);
    log::debug!(
        "Roh-Pfad: {} Punkte, Länge {:.3}",
        path.len(),
        polyline_length(&path)
    );

    let centerline = resample_uniform(&path, options.resample_count)?;
    let centerline = smooth_closed(&centerline, options.smoothing_window)?;
    let (left_edge, right_edge) = offset_edges(&centerline, options.track_width)?;

    let curves = TrackCurves {
        centerline,
        left_edge,
        right_edge,
    };
    log::info!(
        "Strecke erzeugt: {} Punkte je Kurve, Rundenlänge {:.3}",
        curves.point_count(),
        curves.lap_length()
    );
    Ok(curves)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble_concatenates_in_order() {
        let parts = vec![
            vec![DVec2::new(0.0, 0.0), DVec2::new(1.0, 0.0)],
            vec![DVec2::new(1.0, 0.0), DVec2::new(1.0, 1.0)],
        ];
        let path = assemble_path(&parts);
        assert_eq!(path.len(), 4);
        assert!(path[1].distance(path[2]) < 1e-12);
        assert!(path[3].distance(DVec2::new(1.0, 1.0)) < 1e-12);
    }

    #[test]
    fn test_assemble_keeps_gaps_unrepaired() {
        // Klaffende Stöße werden gewarnt, aber nie verschoben
        let parts = vec![
            vec![DVec2::new(0.0, 0.0), DVec2::new(1.0, 0.0)],
            vec![DVec2::new(2.0, 0.0), DVec2::new(3.0, 0.0)],
        ];
        let path = assemble_path(&parts);
        assert_eq!(path.len(), 4);
        assert!((path[1].distance(path[2]) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_build_track_propagates_stage_errors() {
        let segments = vec![TrackSegment::Line {
            start: DVec2::ZERO,
            end: DVec2::new(10.0, 0.0),
            samples: 50,
        }];
        let options = GeneratorOptions {
            resample_count: 100,
            smoothing_window: 40, // gerade → Smoother lehnt ab
            track_width: 0.55,
        };
        let err = build_track(&segments, &options).expect_err("Fehler erwartet");
        assert!(matches!(err, TrackError::InvalidParameter { .. }));
    }

    #[test]
    fn test_build_track_empty_segment_list_fails() {
        let options = GeneratorOptions::default();
        let err = build_track(&[], &options).expect_err("Fehler erwartet");
        assert!(matches!(err, TrackError::InvalidParameter { .. }));
    }
}
