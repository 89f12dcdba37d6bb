use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::asset::BinaryAsset;

/// Representa un lanzamiento musical listo para distribuir.
///
/// Agrupa la información editorial que la hoja de entrega repite en cada fila
/// de pista: título, artistas, sello, fechas, líneas ℗/© y derechos
/// territoriales.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Release {
  /// Título oficial del lanzamiento.
  pub title: String,

  /// Versión o mezcla del álbum (`"Deluxe"`, `"Extended Mixes"`…).
  pub mix_version: Option<String>,

  /// Artistas principales. El índice 0 es obligatorio para exportar.
  pub artists: Vec<String>,

  pub featured_artists: Vec<String>,

  /// Remixers a nivel de álbum; viajan en la columna `Album Other Artist`.
  pub remixers: Vec<String>,

  /// Fecha de publicación. `None` sólo mientras el formulario está incompleto.
  pub release_date: Option<NaiveDate>,

  /// Fecha de la publicación original cuando se trata de una reedición.
  pub original_release_date: Option<NaiveDate>,

  pub is_re_release: bool,

  pub label_name: String,

  /// Etiqueta hoja de la taxonomía de géneros (ver [`crate::domain::genres`]).
  pub album_genre: String,

  pub catalog_number: Option<String>,

  /// Código de barras (UPC/EAN).
  pub upc: Option<String>,

  /// Línea de copyright de la obra gráfica/editorial (`© 2025 Jane`).
  pub album_c_line: String,

  /// Línea de copyright del fonograma (`℗ 2025 Indie Co`).
  pub album_p_line: String,

  /// Distribución mundial; si es `true` se ignoran `territory_mode` y `territories`.
  pub is_worldwide: bool,

  pub territory_mode: TerritoryMode,

  /// Nombres de país (no códigos ISO).
  pub territories: Vec<String>,

  pub artwork: Option<BinaryAsset>,
}

impl Release {
  /// Primer artista si no está vacío.
  pub fn primary_artist(&self) -> Option<&str> {
    self.artists.first().map(String::as_str).filter(|a| !a.is_empty())
  }
}

impl Default for Release {
  /// Estado inicial de un formulario vacío: mundial, sin fecha y con una
  /// casilla de artista en blanco.
  fn default() -> Self {
    Self {
      title: String::new(),
      mix_version: None,
      artists: vec![String::new()],
      featured_artists: Vec::new(),
      remixers: Vec::new(),
      release_date: None,
      original_release_date: None,
      is_re_release: false,
      label_name: String::new(),
      album_genre: String::new(),
      catalog_number: None,
      upc: None,
      album_c_line: String::new(),
      album_p_line: String::new(),
      is_worldwide: true,
      territory_mode: TerritoryMode::Include,
      territories: Vec::new(),
      artwork: None,
    }
  }
}

/// Cómo interpretar la lista de territorios cuando el release no es mundial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TerritoryMode {
  /// Sólo se distribuye en los territorios listados.
  #[default]
  Include,
  /// Se distribuye en todo el mundo salvo en los territorios listados.
  Exclude,
}

/// Error producido cuando una cadena no es un modo de territorio válido.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid territory mode: {input}")]
pub struct TerritoryModeParseError {
  pub input: String,
}

impl FromStr for TerritoryMode {
  type Err = TerritoryModeParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "include" => Ok(TerritoryMode::Include),
      "exclude" => Ok(TerritoryMode::Exclude),
      _ => Err(TerritoryModeParseError { input: s.to_string() }),
    }
  }
}

impl fmt::Display for TerritoryMode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      TerritoryMode::Include => write!(f, "include"),
      TerritoryMode::Exclude => write!(f, "exclude"),
    }
  }
}
