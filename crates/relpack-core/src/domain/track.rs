use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::domain::asset::BinaryAsset;
use crate::domain::contributor::Contributor;

/// Una pista dentro del release, con sus créditos y derechos.
///
/// Los créditos se agrupan en tres bloques que la hoja de entrega separa en
/// columnas distintas: interpretación (`performers`), autoría
/// (`composition`) y producción/ingeniería (`production`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
  pub title: String,

  /// Versión de la pista (`"Radio Edit"`, `"Extended Mix"`…).
  pub mix_version: Option<String>,

  /// Artistas principales. El índice 0 es obligatorio para exportar.
  pub artists: Vec<String>,
  pub featured_artists: Vec<String>,
  pub remixers: Vec<String>,

  /// Intérpretes (vocalista, guitarra, programación, otros).
  pub performers: Vec<Contributor>,
  /// Autores (compositor, letrista, songwriter, otros).
  pub composition: Vec<Contributor>,
  /// Producción e ingeniería (productor, mezcla, mastering, otros).
  pub production: Vec<Contributor>,

  pub publishers: Vec<String>,

  /// Etiqueta hoja de la taxonomía de géneros.
  pub track_genre: String,

  pub isrc_code: Option<String>,
  pub secondary_isrc: Option<String>,

  /// Mezcla Dolby Atmos disponible. No viaja en el CSV.
  pub dolby_atmos: bool,

  pub language: Language,
  pub explicit_content: ExplicitContent,
  pub lyrics: Option<String>,

  pub audio_file: Option<BinaryAsset>,
}

impl Track {
  pub fn primary_artist(&self) -> Option<&str> {
    self.artists.first().map(String::as_str).filter(|a| !a.is_empty())
  }

  /// Contenido explícito efectivo: una pista instrumental nunca es explícita.
  pub fn effective_explicit_content(&self) -> ExplicitContent {
    if self.language.is_instrumental() { ExplicitContent::No } else { self.explicit_content }
  }
}

impl Default for Track {
  fn default() -> Self {
    Self {
      title: String::new(),
      mix_version: None,
      artists: vec![String::new()],
      featured_artists: Vec::new(),
      remixers: Vec::new(),
      performers: vec![Contributor::placeholder()],
      composition: vec![Contributor::placeholder()],
      production: vec![Contributor::placeholder()],
      publishers: Vec::new(),
      track_genre: String::new(),
      isrc_code: None,
      secondary_isrc: None,
      dolby_atmos: false,
      language: Language::default(),
      explicit_content: ExplicitContent::default(),
      lyrics: None,
      audio_file: None,
    }
  }
}

/// Idioma de la letra.
///
/// Los valores conocidos son los que ofrece el editor; cualquier otro texto
/// se conserva como [`Language::Custom`], así que parsear nunca falla.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
  #[default]
  English,
  Spanish,
  French,
  German,
  Italian,
  Portuguese,
  /// Sin letra. Fuerza `ExplicitContent::No`.
  Instrumental,
  /// La opción genérica "Other" del editor.
  Other,
  Custom(String),
}

impl Language {
  pub fn is_instrumental(&self) -> bool {
    matches!(self, Language::Instrumental)
  }
}

impl FromStr for Language {
  type Err = std::convert::Infallible;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let normalized = s.trim().to_lowercase();

    let lang = match normalized.as_str() {
      "english" => Language::English,
      "spanish" => Language::Spanish,
      "french" => Language::French,
      "german" => Language::German,
      "italian" => Language::Italian,
      "portuguese" => Language::Portuguese,
      "instrumental" => Language::Instrumental,
      "other" => Language::Other,
      _ => Language::Custom(s.trim().to_string()),
    };

    Ok(lang)
  }
}

impl fmt::Display for Language {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Language::English => write!(f, "English"),
      Language::Spanish => write!(f, "Spanish"),
      Language::French => write!(f, "French"),
      Language::German => write!(f, "German"),
      Language::Italian => write!(f, "Italian"),
      Language::Portuguese => write!(f, "Portuguese"),
      Language::Instrumental => write!(f, "Instrumental"),
      Language::Other => write!(f, "Other"),
      Language::Custom(s) => write!(f, "{s}"),
    }
  }
}

/// Aviso de contenido explícito.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExplicitContent {
  #[default]
  No,
  Yes,
  /// Versión editada ("clean") de una pista explícita.
  Cleaned,
}

impl ExplicitContent {
  /// Valor de la columna `Explict Content` de la hoja de entrega.
  pub fn sheet_flag(self) -> &'static str {
    match self {
      ExplicitContent::No => "N",
      ExplicitContent::Yes => "Y",
      ExplicitContent::Cleaned => "Cleaned",
    }
  }

  /// Inverso de [`ExplicitContent::sheet_flag`]; cualquier valor desconocido es `No`.
  pub fn from_sheet_flag(flag: &str) -> Self {
    match flag {
      "Y" => ExplicitContent::Yes,
      "Cleaned" => ExplicitContent::Cleaned,
      _ => ExplicitContent::No,
    }
  }
}
