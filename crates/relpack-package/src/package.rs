use std::path::{Path, PathBuf};

use relpack_core::domain::{BinaryAsset, Release, Track};
use tracing::info;

use crate::error::PackageError;

/// Paquete ZIP listo para descargar.
#[derive(Debug, Clone)]
pub struct ExportedPackage {
  /// `<título>_release.zip`
  pub file_name: String,
  pub bytes: Vec<u8>,
  /// Nombres de las entradas, en el orden en que se escribieron.
  pub entries: Vec<String>,
  /// `false` si no había plantilla o si rellenarla falló.
  pub workbook_included: bool,
}

impl ExportedPackage {
  /// Guarda el ZIP en `dir` con su nombre de descarga.
  pub async fn save_to(&self, dir: &Path) -> Result<PathBuf, PackageError> {
    save_bytes(dir, &self.file_name, &self.bytes).await
  }
}

/// Un único archivo exportado (la plantilla rellenada suelta).
#[derive(Debug, Clone)]
pub struct ExportedFile {
  pub file_name: String,
  pub bytes: Vec<u8>,
}

impl ExportedFile {
  pub async fn save_to(&self, dir: &Path) -> Result<PathBuf, PackageError> {
    save_bytes(dir, &self.file_name, &self.bytes).await
  }
}

/// Resultado de importar un paquete. Los avisos no impiden usar el modelo.
#[derive(Debug, Clone)]
pub struct ImportedPackage {
  pub release: Release,
  pub tracks: Vec<Track>,
  pub warnings: Vec<String>,
}

/// Carga un archivo local (portada o audio) para adjuntarlo al modelo.
pub async fn load_asset(path: &Path) -> Result<BinaryAsset, PackageError> {
  Ok(BinaryAsset::from_path(path).await?)
}

async fn save_bytes(dir: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf, PackageError> {
  let path = dir.join(file_name);
  relpack_fs::atomic_write(&path, bytes).await?;
  info!(path = %path.display(), size = bytes.len(), "package saved");
  Ok(path)
}
