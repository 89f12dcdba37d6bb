//! Comprobaciones de completitud del modelo.
//!
//! Hay dos niveles: la validación de exportación bloquea la acción de
//! exportar; la de importación sólo produce avisos que el llamador muestra
//! después de aplicar el import.

use serde::{Deserialize, Serialize};

use crate::domain::{Release, Track};

/// Configuración de validación, fijada al construir el [`Validator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
  /// Portada y audio de cada pista obligatorios para exportar.
  pub assets_mandatory: bool,
}

impl Default for ValidationConfig {
  fn default() -> Self {
    Self { assets_mandatory: true }
  }
}

/// Assets ausentes. Índices de pista 0-based.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MissingAssets {
  pub artwork: bool,
  pub audio_tracks: Vec<usize>,
}

impl MissingAssets {
  pub fn is_empty(&self) -> bool {
    !self.artwork && self.audio_tracks.is_empty()
  }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
  config: ValidationConfig,
}

impl Validator {
  pub fn new(config: ValidationConfig) -> Self {
    Self { config }
  }

  pub fn config(&self) -> ValidationConfig {
    self.config
  }

  /// Problemas que impiden exportar. Vacío = se puede exportar.
  pub fn validate_for_export(&self, release: &Release, tracks: &[Track]) -> Vec<String> {
    let mut issues = Vec::new();

    if release.title.is_empty() {
      issues.push("Release title is required".to_string());
    }
    if release.primary_artist().is_none() {
      issues.push("At least one release artist is required".to_string());
    }
    if release.release_date.is_none() {
      issues.push("Release date is required".to_string());
    }
    if release.label_name.is_empty() {
      issues.push("Label name is required".to_string());
    }
    if release.album_genre.is_empty() {
      issues.push("Album genre is required".to_string());
    }
    if release.album_c_line.is_empty() {
      issues.push("Album C Line is required".to_string());
    }
    if release.album_p_line.is_empty() {
      issues.push("Album P Line is required".to_string());
    }

    for (index, track) in tracks.iter().enumerate() {
      let n = index + 1;

      if track.title.is_empty() {
        issues.push(format!("Track {n}: Title is required"));
      }
      if track.primary_artist().is_none() {
        issues.push(format!("Track {n}: At least one artist is required"));
      }
      if track.track_genre.is_empty() {
        issues.push(format!("Track {n}: Genre is required"));
      }

      if !track.performers.iter().any(|c| c.is_credited()) {
        issues.push(format!("Track {n}: At least one performer with role is required"));
      }
      if !track.composition.iter().any(|c| c.is_credited()) {
        issues.push(format!("Track {n}: At least one composer/writer with role is required"));
      }
      if !track.production.iter().any(|c| c.is_credited()) {
        issues.push(format!("Track {n}: At least one producer/engineer with role is required"));
      }
    }

    issues.extend(self.asset_issues(release, tracks));
    issues
  }

  /// Avisos tras importar un paquete. No bloquean el import.
  pub fn validate_imported(&self, release: &Release, tracks: &[Track]) -> Vec<String> {
    let mut warnings = Vec::new();

    if release.title.is_empty() {
      warnings.push("Release title is missing".to_string());
    }
    if release.primary_artist().is_none() {
      warnings.push("At least one release artist is required".to_string());
    }
    if release.label_name.is_empty() {
      warnings.push("Label name is missing".to_string());
    }
    if release.album_genre.is_empty() {
      warnings.push("Album genre is missing".to_string());
    }

    if tracks.is_empty() {
      warnings.push("No tracks found in import".to_string());
    }

    for (index, track) in tracks.iter().enumerate() {
      let n = index + 1;

      if track.title.is_empty() {
        warnings.push(format!("Track {n}: Title is missing"));
      }
      if track.primary_artist().is_none() {
        warnings.push(format!("Track {n}: At least one artist is required"));
      }
      if track.track_genre.is_empty() {
        warnings.push(format!("Track {n}: Genre is missing"));
      }
    }

    warnings
  }

  /// Assets que faltan según la configuración. Con assets opcionales nunca
  /// falta nada.
  pub fn missing_assets(&self, release: &Release, tracks: &[Track]) -> MissingAssets {
    if !self.config.assets_mandatory {
      return MissingAssets::default();
    }

    MissingAssets {
      artwork: release.artwork.is_none(),
      audio_tracks: tracks.iter().enumerate().filter(|(_, t)| t.audio_file.is_none()).map(|(i, _)| i).collect(),
    }
  }

  fn asset_issues(&self, release: &Release, tracks: &[Track]) -> Vec<String> {
    let missing = self.missing_assets(release, tracks);
    let mut issues = Vec::new();

    if missing.artwork {
      issues.push("Release artwork is required".to_string());
    }

    match missing.audio_tracks.as_slice() {
      [] => {}
      [single] => issues.push(format!("Track {} is missing an audio file", single + 1)),
      many => {
        let numbers = many.iter().map(|i| (i + 1).to_string()).collect::<Vec<_>>().join(", ");
        issues.push(format!("Tracks {numbers} are missing audio files"));
      }
    }

    issues
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::{BinaryAsset, Contributor};
  use chrono::NaiveDate;

  fn nights() -> Release {
    Release {
      title: "Nights".into(),
      artists: vec!["Jane".into()],
      release_date: NaiveDate::from_ymd_opt(2025, 3, 1),
      label_name: "Indie Co".into(),
      album_genre: "House".into(),
      album_c_line: "© 2025 Jane".into(),
      album_p_line: "℗ 2025 Indie Co".into(),
      is_worldwide: true,
      ..Release::default()
    }
  }

  fn glow() -> Track {
    Track {
      title: "Glow".into(),
      artists: vec!["Jane".into()],
      track_genre: "Tech House".into(),
      performers: vec![Contributor::new("Jane", ["Vocalist"])],
      composition: vec![Contributor::new("Jane", ["Composer"])],
      production: vec![Contributor::new("Bob", ["Producer"])],
      ..Track::default()
    }
  }

  fn optional_assets() -> Validator {
    Validator::new(ValidationConfig { assets_mandatory: false })
  }

  #[test]
  fn scenario_release_is_valid() {
    assert!(optional_assets().validate_for_export(&nights(), &[glow()]).is_empty());
  }

  #[test]
  fn empty_release_lists_every_field() {
    let issues = optional_assets().validate_for_export(&Release::default(), &[Track::default()]);

    assert_eq!(
      issues,
      vec![
        "Release title is required",
        "At least one release artist is required",
        "Release date is required",
        "Label name is required",
        "Album genre is required",
        "Album C Line is required",
        "Album P Line is required",
        "Track 1: Title is required",
        "Track 1: At least one artist is required",
        "Track 1: Genre is required",
        "Track 1: At least one performer with role is required",
        "Track 1: At least one composer/writer with role is required",
        "Track 1: At least one producer/engineer with role is required",
      ]
    );
  }

  #[test]
  fn contributor_without_role_does_not_count() {
    let mut track = glow();
    track.production = vec![Contributor::new("Bob", Vec::<String>::new()), Contributor::placeholder()];

    let issues = optional_assets().validate_for_export(&nights(), &[track]);
    assert_eq!(issues, vec!["Track 1: At least one producer/engineer with role is required"]);
  }

  #[test]
  fn mandatory_assets_are_reported() {
    let validator = Validator::new(ValidationConfig { assets_mandatory: true });
    let mut with_audio = glow();
    with_audio.audio_file = Some(BinaryAsset::new("glow.wav", vec![0u8; 4]));

    let issues = validator.validate_for_export(&nights(), &[glow(), with_audio.clone(), glow()]);
    assert_eq!(issues, vec!["Release artwork is required", "Tracks 1, 3 are missing audio files"]);

    let mut release = nights();
    release.artwork = Some(BinaryAsset::new("cover.jpg", vec![0u8; 4]));
    let issues = validator.validate_for_export(&release, &[glow(), with_audio]);
    assert_eq!(issues, vec!["Track 1 is missing an audio file"]);
  }

  #[test]
  fn optional_assets_never_missing() {
    assert!(optional_assets().missing_assets(&Release::default(), &[Track::default()]).is_empty());
  }

  #[test]
  fn imported_warnings() {
    let warnings = optional_assets().validate_imported(&Release::default(), &[]);
    assert_eq!(
      warnings,
      vec![
        "Release title is missing",
        "At least one release artist is required",
        "Label name is missing",
        "Album genre is missing",
        "No tracks found in import",
      ]
    );

    let mut track = glow();
    track.track_genre.clear();
    let warnings = optional_assets().validate_imported(&nights(), &[track]);
    assert_eq!(warnings, vec!["Track 1: Genre is missing"]);
  }
}
