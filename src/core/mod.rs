//! Core-Domänentypen: Segmente, Fehler-Taxonomie, Ergebnis-Kurven.

pub mod error;
pub mod segment;
pub mod track;

pub use error::TrackError;
pub use segment::TrackSegment;
pub use track::{TrackBounds, TrackCurves};
