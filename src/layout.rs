//! Eingebautes Streckenlayout: ein Monaco-inspirierter Stadtkurs.
//!
//! Die Kontrollpunkte sind Design-Konstanten in Welteinheiten. Jedes
//! Segment beginnt am per [`TrackSegment::end_point`] berechneten
//! Endpunkt seines Vorgängers, damit die Stöße per Konstruktion dicht
//! sind — der Assembler prüft oder repariert nichts.

use glam::DVec2;

use crate::core::TrackSegment;

/// Segment-Liste des Stadtkurses, beginnend an Start/Ziel auf der
/// Hafengerade und am Ende wieder dorthin zurückführend.
pub fn street_circuit() -> Vec<TrackSegment> {
    // Start/Ziel an der Hafengerade
    let a = DVec2::new(0.0, 0.0);
    let b = DVec2::new(6.5, 0.2);

    // 1) Hafengerade
    let harbor_straight = TrackSegment::Line {
        start: a,
        end: b,
        samples: 90,
    };

    // 2) Schnelle Rechts zur Tunnel-Einfahrt
    let tunnel_approach = TrackSegment::Bezier {
        p0: b,
        p1: DVec2::new(7.3, 0.3),
        p2: DVec2::new(8.2, 1.0),
        p3: DVec2::new(8.0, 2.1),
        samples: 120,
    };

    // 3) Tunnel: langer, sanfter Linksbogen
    let tunnel = TrackSegment::Arc {
        center: DVec2::new(6.0, 2.5),
        radius: 2.2,
        start_angle: -0.15,
        end_angle: 2.35,
        samples: 180,
    };
    let c = tunnel.end_point();

    // 4) Schikane nach dem Tunnel (S-Form aus zwei Béziers)
    let chicane_a = TrackSegment::Bezier {
        p0: c,
        p1: c + DVec2::new(-1.0, 0.2),
        p2: c + DVec2::new(-1.3, -0.8),
        p3: c + DVec2::new(-2.2, -0.6),
        samples: 80,
    };
    let d = chicane_a.end_point();
    let chicane_b = TrackSegment::Bezier {
        p0: d,
        p1: d + DVec2::new(-0.8, 0.5),
        p2: d + DVec2::new(-0.2, 1.0),
        p3: d + DVec2::new(-1.0, 1.4),
        samples: 80,
    };
    let e = chicane_b.end_point();

    // 5) Schwung am Wasser
    let waterfront = TrackSegment::Bezier {
        p0: e,
        p1: e + DVec2::new(-1.5, 0.6),
        p2: e + DVec2::new(-3.2, 0.2),
        p3: DVec2::new(0.9, 2.7),
        samples: 160,
    };
    let f = waterfront.end_point();

    // 6) Enge Haarnadel: sehr kleiner Radius, rückwärts laufende Winkel
    let hairpin = TrackSegment::Arc {
        center: f + DVec2::new(0.6, 0.2),
        radius: 0.55,
        start_angle: 205.0_f64.to_radians(),
        end_angle: 30.0_f64.to_radians(),
        samples: 160,
    };
    let g = hairpin.end_point();

    // 7) Anstieg zum Casino
    let casino_climb = TrackSegment::Bezier {
        p0: g,
        p1: g + DVec2::new(0.3, 1.0),
        p2: g + DVec2::new(1.8, 1.7),
        p3: DVec2::new(2.8, 3.7),
        samples: 140,
    };
    let h = casino_climb.end_point();

    // 8) Enges Geschlängel bergab, zurück zur Hafengerade
    let descent = TrackSegment::Bezier {
        p0: h,
        p1: h + DVec2::new(1.0, -0.2),
        p2: h + DVec2::new(1.3, -1.5),
        p3: DVec2::new(2.1, 1.4),
        samples: 160,
    };
    let i = descent.end_point();
    let finale = TrackSegment::Bezier {
        p0: i,
        p1: i + DVec2::new(-0.1, -1.2),
        p2: i + DVec2::new(-2.2, -1.7),
        p3: a,
        samples: 180,
    };

    vec![
        harbor_straight,
        tunnel_approach,
        tunnel,
        chicane_a,
        chicane_b,
        waterfront,
        hairpin,
        casino_climb,
        descent,
        finale,
    ]
}
