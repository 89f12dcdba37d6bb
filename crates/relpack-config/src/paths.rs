use directories::ProjectDirs;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
  #[error("toml error: {0}")]
  Toml(#[from] toml::de::Error),
  #[error("fs error: {0}")]
  Fs(#[from] relpack_fs::FsError),
  #[error("directories error: could not determine home directory")]
  Directories,
  #[error("other: {0}")]
  Other(String),
}

/// Directorios de trabajo de relpack.
///
/// `exports_dir` es el destino por defecto de los paquetes exportados cuando
/// la sección `[package]` no define `output_dir`.
#[derive(Debug, Clone)]
pub struct RelpackPaths {
  pub base_dir: PathBuf,
  pub config_dir: PathBuf,
  pub data_dir: PathBuf,
  pub exports_dir: PathBuf,
}

impl RelpackPaths {
  pub fn new() -> Result<Self, ConfigError> {
    let (config_dir, data_dir, base_dir);

    if let Ok(env_base) = std::env::var("RELPACK_BASE_DIR") {
      let base = PathBuf::from(env_base);
      base_dir = base.clone();
      config_dir = base.join("config");
      data_dir = base.join("data");
    } else {
      let proj_dirs = ProjectDirs::from("com", "relpack", "relpack").ok_or(ConfigError::Directories)?;
      base_dir = proj_dirs.config_dir().to_path_buf();
      config_dir = proj_dirs.config_dir().to_path_buf();
      data_dir = proj_dirs.data_dir().to_path_buf();
    }

    let exports_dir = data_dir.join("exports");

    std::fs::create_dir_all(&config_dir)?;
    std::fs::create_dir_all(&data_dir)?;
    std::fs::create_dir_all(&exports_dir)?;

    Ok(Self { base_dir, config_dir, data_dir, exports_dir })
  }

  pub fn detect() -> Result<Self, ConfigError> {
    Self::new()
  }

  /// Construye los paths bajo un directorio explícito, sin mirar el entorno.
  pub fn under(base: impl Into<PathBuf>) -> Result<Self, ConfigError> {
    let base_dir = base.into();
    let config_dir = base_dir.join("config");
    let data_dir = base_dir.join("data");
    let exports_dir = data_dir.join("exports");

    std::fs::create_dir_all(&config_dir)?;
    std::fs::create_dir_all(&exports_dir)?;

    Ok(Self { base_dir, config_dir, data_dir, exports_dir })
  }

  pub fn config_file(&self) -> PathBuf {
    self.config_dir.join("relpack.toml")
  }
}
