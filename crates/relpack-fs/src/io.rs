use std::fs;
use std::io::{self as stdio, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::io::AsyncWriteExt;

#[derive(Debug, Error)]
pub enum FsError {
  #[error("io error: {0}")]
  Io(#[from] stdio::Error),

  #[error("invalid target path: {0}")]
  InvalidPath(PathBuf),
}

/// Ruta temporal junto al destino: `<nombre>.<ext>.tmp`.
///
/// Se conserva la extensión original para que dos destinos que sólo difieren
/// en la extensión (`a.zip`, `a.xlsx`) no compartan el mismo temporal.
pub fn unique_tmp_path(path: &Path) -> Result<PathBuf, FsError> {
  let file_name = path.file_name().ok_or_else(|| FsError::InvalidPath(path.to_path_buf()))?;
  let mut tmp_name = file_name.to_os_string();
  tmp_name.push(".tmp");
  Ok(path.with_file_name(tmp_name))
}

/// Escritura atómica síncrona de texto (usada por el backend de configuración).
pub fn atomic_write_str(path: &Path, contents: &str) -> Result<(), FsError> {
  let tmp_path = unique_tmp_path(path)?;

  {
    let mut tmp_file = fs::File::create(&tmp_path)?;
    tmp_file.write_all(contents.as_bytes())?;
    tmp_file.sync_all()?;
  }

  fs::rename(&tmp_path, path)?;
  Ok(())
}

/// Escritura atómica asíncrona de bytes (archivos ZIP, libros xlsx).
///
/// Crea el directorio padre si no existe. El destino sólo aparece cuando el
/// contenido completo ya está en disco.
pub async fn atomic_write(path: &Path, contents: &[u8]) -> Result<(), FsError> {
  if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
    tokio::fs::create_dir_all(parent).await?;
  }

  let tmp_path = unique_tmp_path(path)?;

  {
    let mut tmp_file = tokio::fs::File::create(&tmp_path).await?;
    tmp_file.write_all(contents).await?;
    tmp_file.sync_all().await?;
  }

  tokio::fs::rename(&tmp_path, path).await?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn atomic_write_str_replaces_content() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("relpack.toml");

    atomic_write_str(&path, "a = 1\n").unwrap();
    atomic_write_str(&path, "a = 2\n").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "a = 2\n");
    assert!(!dir.path().join("relpack.toml.tmp").exists());
  }

  #[tokio::test]
  async fn atomic_write_creates_parent_dirs() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out").join("Nights_release.zip");

    atomic_write(&path, b"PK").await.unwrap();

    assert_eq!(fs::read(&path).unwrap(), b"PK");
  }

  #[test]
  fn tmp_path_keeps_extension() {
    let tmp = unique_tmp_path(Path::new("/tmp/a.zip")).unwrap();
    assert_eq!(tmp, PathBuf::from("/tmp/a.zip.tmp"));
  }
}
