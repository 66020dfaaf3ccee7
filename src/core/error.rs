//! Fehler-Taxonomie der Track-Pipeline.

use thiserror::Error;

/// Fehler beim Erzeugen einer Strecke.
///
/// Jede Pipeline-Stufe validiert ihre Eingaben sofort und bricht den
/// gesamten Lauf ab; Teilergebnisse gibt es nicht.
#[derive(Debug, Error)]
pub enum TrackError {
    /// Ein Aufruf-Parameter verletzt den Kontrakt einer Stufe.
    #[error("ungültiger Parameter ({stage}): {reason}")]
    InvalidParameter {
        /// Pipeline-Stufe, die die Verletzung festgestellt hat
        stage: &'static str,
        reason: String,
    },

    /// Die Eingabe-Geometrie ist degeneriert (zusammenfallende Punkte).
    #[error("degenerierte Eingabe ({stage}): {reason}")]
    DegenerateInput {
        /// Pipeline-Stufe, die die Degeneration festgestellt hat
        stage: &'static str,
        reason: String,
    },
}
