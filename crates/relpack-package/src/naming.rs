//! Nombres de las entradas del paquete y de los archivos descargables.

use once_cell::sync::Lazy;
use regex::Regex;

use relpack_core::domain::BinaryAsset;

pub const METADATA_ENTRY: &str = "metadata.csv";

static ARTWORK_ENTRY: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"(?i)^artwork\.(jpg|jpeg|png|gif|webp)$").expect("valid artwork pattern"));

static AUDIO_ENTRY: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"(?i)^\d+_.*\.(wav|mp3|flac|aiff|m4a)$").expect("valid audio pattern"));

/// Sustituye todo lo que no sea `[A-Za-z0-9]` por `_`.
pub fn sanitize_title(title: &str) -> String {
  title.chars().map(|c| if c.is_ascii_alphanumeric() { c } else { '_' }).collect()
}

pub fn package_file_name(release_title: &str) -> String {
  format!("{}_release.zip", sanitize_title(release_title))
}

pub fn workbook_entry_name(release_title: &str) -> String {
  format!("{}_metadata.xlsx", sanitize_title(release_title))
}

pub fn artwork_entry_name(artwork: &BinaryAsset) -> String {
  format!("artwork.{}", artwork.extension())
}

/// `NN_<título>.<ext>`, con `index` 0-based.
pub fn audio_entry_name(index: usize, track_title: &str, audio: &BinaryAsset) -> String {
  format!("{:02}_{}.{}", index + 1, sanitize_title(track_title), audio.extension())
}

pub fn is_artwork_entry(name: &str) -> bool {
  ARTWORK_ENTRY.is_match(name)
}

pub fn is_audio_entry(name: &str) -> bool {
  AUDIO_ENTRY.is_match(name)
}
