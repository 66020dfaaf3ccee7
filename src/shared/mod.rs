//! Geteilte, layer-neutrale Bausteine (Konfiguration).

pub mod options;

pub use options::GeneratorOptions;
