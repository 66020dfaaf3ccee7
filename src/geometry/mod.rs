//! Reine Geometrie-Funktionen der Pipeline.
//!
//! Layer-neutral: kann von `pipeline`, `layout` und Tests importiert
//! werden, ohne Zirkel-Abhängigkeiten zu erzeugen.

pub mod offset;
pub mod polyline;
pub mod smoothing;

pub use offset::{closed_tangents, offset_edges};
pub use polyline::{cumulative_lengths, polyline_length, resample_uniform};
pub use smoothing::smooth_closed;
