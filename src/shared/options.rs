//! Zentrale Konfiguration des Strecken-Generators.
//!
//! `GeneratorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Pipeline ────────────────────────────────────────────────────────

/// Punktanzahl der resampelten Mittellinie.
pub const RESAMPLE_COUNT: usize = 1800;
/// Fenster-Breite der zirkulären Glättung (muss ungerade sein).
pub const SMOOTHING_WINDOW: usize = 41;
/// Fahrbahn-Breite in Welteinheiten.
pub const TRACK_WIDTH: f64 = 0.55;
/// Ab diesem Stoß-Abstand zwischen zwei Segmenten wird gewarnt.
pub const SEGMENT_JOINT_TOLERANCE: f64 = 1e-6;

/// Alle zur Laufzeit änderbaren Generator-Optionen.
/// Wird als `street_circuit_gen.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorOptions {
    /// Punktanzahl der resampelten Mittellinie
    pub resample_count: usize,
    /// Fenster-Breite der zirkulären Glättung (ungerade)
    pub smoothing_window: usize,
    /// Fahrbahn-Breite in Welteinheiten
    pub track_width: f64,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            resample_count: RESAMPLE_COUNT,
            smoothing_window: SMOOTHING_WINDOW,
            track_width: TRACK_WIDTH,
        }
    }
}

impl GeneratorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("street_circuit_gen"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("street_circuit_gen.toml")
    }
}
