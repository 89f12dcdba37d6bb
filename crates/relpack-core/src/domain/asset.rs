use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::CoreError;

/// Archivo binario adjunto a un release (portada) o a una pista (audio).
///
/// Conserva el nombre original del archivo porque de él se derivan la
/// extensión dentro del paquete y la columna `Filename` del CSV.
/// Los bytes se comparten (`Arc`) para que clonar un release completo,
/// o moverlo a un hilo de ensamblado, no copie el audio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryAsset {
  /// Nombre original, por ejemplo `"glow_master_v3.wav"`.
  pub file_name: String,

  /// Contenido completo del archivo.
  pub data: Arc<[u8]>,
}

impl BinaryAsset {
  pub fn new(file_name: impl Into<String>, data: impl Into<Arc<[u8]>>) -> Self {
    Self { file_name: file_name.into(), data: data.into() }
  }

  /// Lee un archivo del disco de forma asíncrona.
  ///
  /// El nombre del asset es el último componente de la ruta.
  pub async fn from_path(path: &Path) -> Result<Self, CoreError> {
    let file_name = path
      .file_name()
      .and_then(|n| n.to_str())
      .ok_or_else(|| CoreError::InvalidAsset(format!("path without file name: {}", path.display())))?
      .to_string();

    let data = tokio::fs::read(path).await?;
    debug!(path = %path.display(), size = data.len(), "asset loaded");
    Ok(Self::new(file_name, data))
  }

  /// Texto tras el último `.` del nombre original.
  ///
  /// Un nombre sin punto se devuelve entero, igual que hace la convención de
  /// nombres del paquete (`artwork.<ext>`).
  pub fn extension(&self) -> &str {
    self.file_name.rsplit('.').next().unwrap_or(&self.file_name)
  }

  pub fn bytes(&self) -> &[u8] {
    &self.data
  }

  pub fn len(&self) -> usize {
    self.data.len()
  }

  pub fn is_empty(&self) -> bool {
    self.data.is_empty()
  }
}
