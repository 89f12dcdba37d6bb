use relpack_config::{CONFIG_BACKEND, ConfigBackend, ConfigError, PATHS, TomlConfigBackend};
use relpack_core::ValidationConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const SECTION: &str = "package";

/// Sección `[package]` de `relpack.toml`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PackageConfig {
  /// Exigir portada y audio de todas las pistas para exportar.
  #[serde(default = "default_assets_mandatory")]
  pub assets_mandatory: bool,

  /// Plantilla `.xlsx` a rellenar. Sin ella el paquete no lleva hoja de cálculo.
  #[serde(default)]
  pub template_path: Option<PathBuf>,

  /// Carpeta destino de los paquetes exportados.
  #[serde(default)]
  pub output_dir: Option<PathBuf>,
}

fn default_assets_mandatory() -> bool {
  true
}

impl Default for PackageConfig {
  fn default() -> Self {
    PackageConfig { assets_mandatory: default_assets_mandatory(), template_path: None, output_dir: None }
  }
}

impl PackageConfig {
  pub fn load() -> Result<Self, ConfigError> {
    Self::load_from(&CONFIG_BACKEND)
  }

  /// Lee la sección y la vuelve a escribir, de modo que los valores por
  /// defecto quedan visibles en el archivo.
  pub fn load_from(backend: &TomlConfigBackend) -> Result<Self, ConfigError> {
    let cfg = backend.load_section_with_default(SECTION)?;
    backend.save_section(SECTION, &cfg)?;
    Ok(cfg)
  }

  pub fn save(&self) -> Result<(), ConfigError> {
    CONFIG_BACKEND.save_section(SECTION, self)
  }

  pub fn validation(&self) -> ValidationConfig {
    ValidationConfig { assets_mandatory: self.assets_mandatory }
  }

  pub fn resolved_output_dir(&self) -> PathBuf {
    self.output_dir.clone().unwrap_or_else(|| PATHS.exports_dir.clone())
  }
}
