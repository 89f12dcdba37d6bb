// crates/relpack-core/src/errors.rs
use thiserror::Error;

/// Error genérico del núcleo de relpack.
///
/// Hoy solo lo produce la carga de assets; el empaquetado lo envuelve en
/// `PackageError::Core`.
#[derive(Debug, Error)]
pub enum CoreError {
  #[error("asset error: {0}")]
  Asset(#[from] std::io::Error),

  #[error("invalid asset: {0}")]
  InvalidAsset(String),
}
