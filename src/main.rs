//! Street-Circuit-Generator.
//!
//! Erzeugt die Mittellinie und die Fahrbahnränder eines Monaco-inspirierten
//! Stadtkurses und meldet die Kennzahlen im Log — das Zeichnen der Kurven
//! übernimmt ein nachgelagerter Renderer.

use anyhow::Context;
use street_circuit_gen::{build_track, street_circuit, GeneratorOptions};

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!(
        "Street-Circuit-Generator v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    // Optionen aus TOML laden (oder Standardwerte)
    let config_path = GeneratorOptions::config_path();
    let options = GeneratorOptions::load_from_file(&config_path);

    let segments = street_circuit();
    let curves =
        build_track(&segments, &options).context("Strecken-Generierung fehlgeschlagen")?;

    if let Some(start) = curves.start_finish() {
        log::info!("Start/Ziel bei ({:.3}, {:.3})", start.x, start.y);
    }
    if let Some(bounds) = curves.bounds() {
        log::info!(
            "Ausdehnung: x ∈ [{:.2}, {:.2}], y ∈ [{:.2}, {:.2}]",
            bounds.min.x,
            bounds.max.x,
            bounds.min.y,
            bounds.max.y
        );
    }

    Ok(())
}
