use crate::paths::{ConfigError, RelpackPaths};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use toml_edit::{DocumentMut, Item};
use tracing::debug;

pub trait ConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError>;
  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError>;
}

pub struct TomlConfigBackend {
  paths: RelpackPaths,
}

impl TomlConfigBackend {
  pub fn new(paths: RelpackPaths) -> Self {
    Self { paths }
  }

  pub fn paths(&self) -> &RelpackPaths {
    &self.paths
  }

  /// Igual que `load_section`, pero un archivo o sección ausente dan `T::default()`.
  pub fn load_section_with_default<T>(&self, section: &str) -> Result<T, ConfigError>
  where
    T: DeserializeOwned + Default,
  {
    let path = self.paths.config_file();
    let Some(content) = read_optional(&path)? else {
      debug!(path = %path.display(), section, "config file missing, using defaults");
      return Ok(T::default());
    };

    let root: toml::Value = toml::from_str(&content)?;
    match root.get(section) {
      Some(table) => decode_section(section, table),
      None => Ok(T::default()),
    }
  }
}

impl ConfigBackend for TomlConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError> {
    let path = self.paths.config_file();
    let root: toml::Value = toml::from_str(&fs::read_to_string(&path)?)?;

    let table = root
      .get(section)
      .ok_or_else(|| ConfigError::Other(format!("missing section [{section}] in {}", path.display())))?;
    decode_section(section, table)
  }

  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError> {
    let path = self.paths.config_file();

    let mut doc = match read_optional(&path)? {
      Some(content) => content
        .parse::<DocumentMut>()
        .map_err(|e| ConfigError::Other(format!("parse {}: {e}", path.display())))?,
      None => DocumentMut::new(),
    };

    let encoded = toml::to_string(value).map_err(|e| ConfigError::Other(format!("encode section [{section}]: {e}")))?;
    let item: Item = encoded
      .parse::<DocumentMut>()
      .map_err(|e| ConfigError::Other(format!("reparse section [{section}]: {e}")))?
      .into_item();

    // el resto del documento (otras secciones, comentarios) no se toca
    doc[section] = item;

    relpack_fs::atomic_write_str(&path, &doc.to_string())?;
    debug!(path = %path.display(), section, "config section saved");
    Ok(())
  }
}

fn read_optional(path: &Path) -> Result<Option<String>, ConfigError> {
  match fs::read_to_string(path) {
    Ok(content) => Ok(Some(content)),
    Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
    Err(e) => Err(e.into()),
  }
}

fn decode_section<T: DeserializeOwned>(section: &str, table: &toml::Value) -> Result<T, ConfigError> {
  table
    .clone()
    .try_into()
    .map_err(|e| ConfigError::Other(format!("decode section [{section}]: {e}")))
}
