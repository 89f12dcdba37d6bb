//! `metadata.csv`: one row per track, release fields repeated on every row.

use std::collections::HashMap;

use chrono::NaiveDate;
use csv::{QuoteStyle, ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use relpack_core::domain::{ExplicitContent, Language, Release, Track};
use relpack_core::ports::{CellValue, SheetRow};
use tracing::{debug, warn};

use crate::columns::{self, *};
use crate::contributor::{
  COMPOSITION, PERFORMERS, PRODUCTION, decode_bucketed, decode_remixers, encode_bucketed, encode_remixers, join_pipe,
  split_pipe,
};
use crate::error::CodecError;
use crate::territory::{decode_territories, encode_territories};

const SHEET_DATE: &str = "%d/%m/%Y";
const ISO_DATE: &str = "%Y-%m-%d";

/// Result of decoding a `metadata.csv`. Assets are never part of the CSV.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedMetadata {
  pub release: Release,
  pub tracks: Vec<Track>,
}

/// Header name → column position, built from the first record.
#[derive(Debug, Clone, Default)]
pub struct HeaderIndex {
  positions: HashMap<String, usize>,
}

impl HeaderIndex {
  /// A repeated header resolves to its last occurrence.
  pub fn from_record(record: &StringRecord) -> Self {
    let positions = record.iter().enumerate().map(|(i, name)| (name.to_string(), i)).collect();
    Self { positions }
  }

  pub fn position(&self, header: &str) -> Option<usize> {
    self.positions.get(header).copied()
  }

  /// Raw cell value; empty when the header or the cell is missing.
  pub fn get<'r>(&self, record: &'r StringRecord, header: &str) -> &'r str {
    self.position(header).and_then(|i| record.get(i)).unwrap_or("")
  }

  /// Cell value, `None` when empty.
  pub fn optional(&self, record: &StringRecord, header: &str) -> Option<String> {
    Some(self.get(record, header)).filter(|v| !v.is_empty()).map(str::to_string)
  }

  pub fn len(&self) -> usize {
    self.positions.len()
  }

  pub fn is_empty(&self) -> bool {
    self.positions.is_empty()
  }
}

/// Encodes the release as CSV text: header row, then one row per track.
///
/// Cells are quoted only when they contain a comma, a quote or a line break.
/// Records end with CRLF.
pub fn encode_metadata_csv(release: &Release, tracks: &[Track]) -> Result<String, CodecError> {
  let mut writer =
    WriterBuilder::new().quote_style(QuoteStyle::Necessary).terminator(Terminator::CRLF).from_writer(Vec::new());

  writer.write_record(HEADERS)?;
  for row in sheet_rows(release, tracks) {
    writer.write_record(&row)?;
  }

  let bytes = writer.into_inner().map_err(|e| CodecError::Encoding(e.to_string()))?;
  String::from_utf8(bytes).map_err(|e| CodecError::Encoding(e.to_string()))
}

/// Decodes CSV text produced by [`encode_metadata_csv`] or by hand from the
/// same template.
///
/// Release fields come from the first data row only. Columns may be missing
/// or reordered; a missing column reads as empty.
pub fn decode_metadata_csv(text: &str) -> Result<DecodedMetadata, CodecError> {
  let text = text.trim_start_matches('\u{feff}');
  let mut reader = ReaderBuilder::new().has_headers(false).flexible(true).from_reader(text.as_bytes());

  let mut records = Vec::new();
  for result in reader.records() {
    let record = result?;
    if record.iter().all(|field| field.trim().is_empty()) {
      continue;
    }
    records.push(record);
  }

  let (header, rows) = records.split_first().ok_or(CodecError::NoDataRows)?;
  let first = rows.first().ok_or(CodecError::NoDataRows)?;
  let index = HeaderIndex::from_record(header);

  let release = decode_release(&index, first);
  let tracks: Vec<Track> = rows.iter().map(|row| decode_track(&index, row)).collect();

  debug!(columns = index.len(), tracks = tracks.len(), "metadata csv decoded");
  Ok(DecodedMetadata { release, tracks })
}

/// The same projection as the CSV, placed at template coordinates.
///
/// Rows start at [`WORKBOOK_FIRST_ROW`]. Disc and track numbers are written as
/// numbers; everything else as text, blanks included so stale template cells
/// are cleared.
pub fn workbook_rows(release: &Release, tracks: &[Track]) -> Vec<SheetRow> {
  sheet_rows(release, tracks)
    .into_iter()
    .enumerate()
    .map(|(index, values)| {
      let mut cells: Vec<(u32, CellValue)> = values
        .into_iter()
        .enumerate()
        .map(|(position, value)| {
          let cell = match HEADERS[position] {
            columns::DISC_NUMBER => CellValue::Number(1.0),
            columns::TRACK_NUMBER => CellValue::Number((index + 1) as f64),
            _ => CellValue::Text(value),
          };
          (workbook_column(position), cell)
        })
        .collect();

      cells.push((WORKBOOK_RESERVED_COLUMN, CellValue::Text(String::new())));
      cells.sort_by_key(|(column, _)| *column);

      SheetRow { row: WORKBOOK_FIRST_ROW + index as u32, cells }
    })
    .collect()
}

pub fn format_date(date: Option<NaiveDate>) -> String {
  date.map(|d| d.format(SHEET_DATE).to_string()).unwrap_or_default()
}

/// Accepts `D/M/YYYY` (zero padding optional) and ISO `YYYY-MM-DD`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
  let value = value.trim();
  if value.is_empty() {
    return None;
  }

  let parsed = NaiveDate::parse_from_str(value, SHEET_DATE).or_else(|_| NaiveDate::parse_from_str(value, ISO_DATE));
  match parsed {
    Ok(date) => Some(date),
    Err(err) => {
      warn!(value, error = %err, "unparseable date in metadata csv");
      None
    }
  }
}

struct RowBuilder {
  cells: Vec<String>,
}

impl RowBuilder {
  fn new() -> Self {
    Self { cells: vec![String::new(); COLUMN_COUNT] }
  }

  fn set(&mut self, header: &str, value: impl Into<String>) {
    if let Some(position) = columns::position(header) {
      self.cells[position] = value.into();
    }
  }
}

fn sheet_rows(release: &Release, tracks: &[Track]) -> Vec<Vec<String>> {
  let territories = encode_territories(release.is_worldwide, release.territory_mode, &release.territories);
  let album_other_artist = encode_remixers(&release.remixers);
  let release_date = format_date(release.release_date);
  let original_release_date = format_date(release.original_release_date);
  let album_artist = join_pipe(&release.artists);
  let album_featured = join_pipe(&release.featured_artists);

  tracks
    .iter()
    .enumerate()
    .map(|(index, track)| {
      let mut row = RowBuilder::new();

      row.set(DISC_NUMBER, "1");
      row.set(TRACK_NUMBER, (index + 1).to_string());
      row.set(TITLE_TYPE, "SINGLE");
      row.set(CAT_NUMBER, release.catalog_number.clone().unwrap_or_default());
      row.set(LABEL_NAME, &release.label_name);
      row.set(UPC, release.upc.clone().unwrap_or_default());
      row.set(RELEASE_DATE, &release_date);
      row.set(ORIGINAL_RELEASE_DATE, &original_release_date);
      row.set(ALBUM_ARTIST, &album_artist);
      row.set(ALBUM_FEATURED_ARTIST, &album_featured);
      row.set(ALBUM_OTHER_ARTIST, &album_other_artist);
      row.set(ALBUM_TITLE, &release.title);
      row.set(ALBUM_MIX_VERSION, release.mix_version.clone().unwrap_or_default());

      row.set(TRACK_ARTIST, join_pipe(&track.artists));
      row.set(TRACK_FEATURED_ARTIST, join_pipe(&track.featured_artists));

      let credits = [
        (&track.performers, &PERFORMERS),
        (&track.composition, &COMPOSITION),
        (&track.production, &PRODUCTION),
      ];
      for (contributors, set) in credits {
        for (column, value) in encode_bucketed(contributors, set) {
          row.set(column, value);
        }
      }

      row.set(TRACK_TITLE, &track.title);
      row.set(MIX_VERSION, track.mix_version.clone().unwrap_or_default());
      row.set(REMIXER, join_pipe(&track.remixers));
      row.set(ISRC_CODE, track.isrc_code.clone().unwrap_or_default());
      row.set(SECONDARY_ISRC_CODE, track.secondary_isrc.clone().unwrap_or_default());
      row.set(LANGUAGE, track.language.to_string());
      row.set(SUB_GENRE, &track.track_genre);
      row.set(PUBLISHER, join_pipe(&track.publishers));
      row.set(FILENAME, track.audio_file.as_ref().map(|a| a.file_name.clone()).unwrap_or_default());
      row.set(EXPLICIT_CONTENT, track.effective_explicit_content().sheet_flag());
      row.set(MUST_REMAIN_BUNDLED, "N");
      row.set(ALBUM_C_LINE, &release.album_c_line);
      row.set(ALBUM_P_LINE, &release.album_p_line);
      row.set(TERRITORY, &territories.included);
      row.set(EXCLUDED_TERRITORY, &territories.excluded);
      row.set(ALBUM_GENRE, &release.album_genre);
      row.set(GENRE, &track.track_genre);
      row.set(FEATURED_PRIMARY_ON_SPOTIFY, "N");
      row.set(REMIXER_PRIMARY_ON_SPOTIFY, "N");
      row.set(LYRICS, track.lyrics.clone().unwrap_or_default());

      row.cells
    })
    .collect()
}

fn or_blank_artist(artists: Vec<String>) -> Vec<String> {
  if artists.is_empty() { vec![String::new()] } else { artists }
}

fn decode_release(index: &HeaderIndex, row: &StringRecord) -> Release {
  let territory = decode_territories(index.get(row, TERRITORY), index.get(row, EXCLUDED_TERRITORY));
  let original_release_date = index.get(row, ORIGINAL_RELEASE_DATE);

  Release {
    title: index.get(row, ALBUM_TITLE).to_string(),
    mix_version: index.optional(row, ALBUM_MIX_VERSION),
    artists: or_blank_artist(split_pipe(index.get(row, ALBUM_ARTIST))),
    featured_artists: split_pipe(index.get(row, ALBUM_FEATURED_ARTIST)),
    remixers: decode_remixers(index.get(row, ALBUM_OTHER_ARTIST)),
    release_date: parse_date(index.get(row, RELEASE_DATE)),
    original_release_date: parse_date(original_release_date),
    is_re_release: !original_release_date.is_empty(),
    label_name: index.get(row, LABEL_NAME).to_string(),
    album_genre: index.get(row, ALBUM_GENRE).to_string(),
    catalog_number: index.optional(row, CAT_NUMBER),
    upc: index.optional(row, UPC),
    album_c_line: index.get(row, ALBUM_C_LINE).to_string(),
    album_p_line: index.get(row, ALBUM_P_LINE).to_string(),
    is_worldwide: territory.is_worldwide,
    territory_mode: territory.mode,
    territories: territory.territories,
    artwork: None,
  }
}

fn decode_track(index: &HeaderIndex, row: &StringRecord) -> Track {
  let language = match index.get(row, LANGUAGE).trim() {
    "" => Language::English,
    value => value.parse().unwrap_or_default(),
  };

  let explicit_content = if language.is_instrumental() {
    ExplicitContent::No
  } else {
    ExplicitContent::from_sheet_flag(index.get(row, EXPLICIT_CONTENT))
  };

  let track_genre = match index.get(row, SUB_GENRE) {
    "" => index.get(row, GENRE),
    sub_genre => sub_genre,
  };

  let cell = |column: &str| index.get(row, column);

  Track {
    title: index.get(row, TRACK_TITLE).to_string(),
    mix_version: index.optional(row, MIX_VERSION),
    artists: or_blank_artist(split_pipe(index.get(row, TRACK_ARTIST))),
    featured_artists: split_pipe(index.get(row, TRACK_FEATURED_ARTIST)),
    remixers: split_pipe(index.get(row, REMIXER)),
    performers: decode_bucketed(&PERFORMERS, cell),
    composition: decode_bucketed(&COMPOSITION, cell),
    production: decode_bucketed(&PRODUCTION, cell),
    publishers: split_pipe(index.get(row, PUBLISHER)),
    track_genre: track_genre.to_string(),
    isrc_code: index.optional(row, ISRC_CODE),
    secondary_isrc: index.optional(row, SECONDARY_ISRC_CODE),
    dolby_atmos: false,
    language,
    explicit_content,
    lyrics: index.optional(row, LYRICS),
    audio_file: None,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use relpack_core::domain::{BinaryAsset, Contributor, TerritoryMode};

  fn nights() -> Release {
    Release {
      title: "Nights".into(),
      artists: vec!["Jane".into()],
      release_date: NaiveDate::from_ymd_opt(2025, 3, 1),
      label_name: "Indie Co".into(),
      album_genre: "House".into(),
      album_c_line: "© 2025 Jane".into(),
      album_p_line: "℗ 2025 Indie Co".into(),
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

  fn parse(text: &str) -> (HeaderIndex, Vec<StringRecord>) {
    let mut reader = ReaderBuilder::new().has_headers(false).flexible(true).from_reader(text.as_bytes());
    let mut records: Vec<StringRecord> = reader.records().map(Result::unwrap).collect();
    let header = records.remove(0);
    (HeaderIndex::from_record(&header), records)
  }

  #[test]
  fn scenario_encodes_expected_columns() {
    let mut track = glow();
    track.audio_file = Some(BinaryAsset::new("glow_master.wav", vec![0u8; 2]));

    let text = encode_metadata_csv(&nights(), &[track]).unwrap();
    let (index, rows) = parse(&text);
    assert_eq!(rows.len(), 1);
    let row = &rows[0];

    assert_eq!(index.get(row, TERRITORY), "");
    assert_eq!(index.get(row, EXCLUDED_TERRITORY), "");
    assert_eq!(index.get(row, VOCALIST), "Jane");
    assert_eq!(index.get(row, COMPOSER), "Jane");
    assert_eq!(index.get(row, PRODUCER), "Bob");
    assert_eq!(index.get(row, RELEASE_DATE), "01/03/2025");
    assert_eq!(index.get(row, TITLE_TYPE), "SINGLE");
    assert_eq!(index.get(row, FILENAME), "glow_master.wav");
    assert_eq!(index.get(row, EXPLICIT_CONTENT), "N");
    assert_eq!(index.get(row, MUST_REMAIN_BUNDLED), "N");
    assert_eq!(index.get(row, SUB_GENRE), "Tech House");
    assert_eq!(index.get(row, GENRE), "Tech House");
    assert_eq!(index.get(row, DURATION), "");
    assert_eq!(row.len(), COLUMN_COUNT);
  }

  #[test]
  fn header_and_record_framing() {
    let text = encode_metadata_csv(&nights(), &[glow()]).unwrap();

    assert!(text.starts_with("Disc Number,Track Number,Title Type,"));
    assert!(text.contains(",\"Must Remain Bundled/\nNot for Individual Sale\","));
    assert!(text.ends_with("\r\n"));
    assert_eq!(text.matches("\r\n").count(), 2);
  }

  #[test]
  fn special_characters_are_quoted() {
    let mut track = glow();
    track.title = "Title, \"Quoted\" \n text".into();

    let text = encode_metadata_csv(&nights(), &[track]).unwrap();
    assert!(text.contains(",\"Title, \"\"Quoted\"\" \n text\","));
    assert!(text.contains(",Nights,"));

    let decoded = decode_metadata_csv(&text).unwrap();
    assert_eq!(decoded.tracks[0].title, "Title, \"Quoted\" \n text");
  }

  #[test]
  fn full_release_round_trips() {
    let release = Release {
      title: "Nights".into(),
      mix_version: Some("Deluxe".into()),
      artists: vec!["Jane".into(), "Bob".into()],
      featured_artists: vec!["Feat".into()],
      remixers: vec!["DJ A".into(), "DJ B".into()],
      release_date: NaiveDate::from_ymd_opt(2025, 3, 1),
      original_release_date: NaiveDate::from_ymd_opt(2020, 1, 2),
      is_re_release: true,
      label_name: "Indie Co".into(),
      album_genre: "House".into(),
      catalog_number: Some("CAT-001".into()),
      upc: Some("123456789012".into()),
      album_c_line: "© 2025 Jane".into(),
      album_p_line: "℗ 2025 Indie Co".into(),
      is_worldwide: false,
      territory_mode: TerritoryMode::Include,
      territories: vec!["United States".into(), "Cuba".into()],
      artwork: None,
    };

    let track = Track {
      title: "Glow".into(),
      mix_version: Some("Extended".into()),
      artists: vec!["Jane".into()],
      featured_artists: vec!["Feat".into()],
      remixers: vec!["DJ A".into()],
      performers: vec![
        Contributor::new("Jane", ["Vocalist", "Guitar"]),
        Contributor::new("Bob", ["Programming", "Backing Vocals"]),
      ],
      composition: vec![Contributor::new("Jane", ["Composer", "Lyricist"])],
      production: vec![Contributor::new("Bob", ["Producer"]), Contributor::new("Ann", ["Mixer"])],
      publishers: vec!["Indie Pub".into()],
      track_genre: "Tech House".into(),
      isrc_code: Some("USRC17607839".into()),
      secondary_isrc: Some("USRC17607840".into()),
      dolby_atmos: false,
      language: Language::Spanish,
      explicit_content: ExplicitContent::Yes,
      lyrics: Some("Line one, \"two\"\nline three".into()),
      audio_file: None,
    };

    let second = Track { title: "Fade".into(), explicit_content: ExplicitContent::Cleaned, ..track.clone() };
    let tracks = vec![track, second];

    let text = encode_metadata_csv(&release, &tracks).unwrap();
    let decoded = decode_metadata_csv(&text).unwrap();

    assert_eq!(decoded.release, release);
    assert_eq!(decoded.tracks, tracks);
  }

  #[test]
  fn instrumental_is_never_explicit() {
    let track = Track { language: Language::Instrumental, explicit_content: ExplicitContent::Yes, ..glow() };
    let text = encode_metadata_csv(&nights(), &[track]).unwrap();
    let (index, rows) = parse(&text);
    assert_eq!(index.get(&rows[0], EXPLICIT_CONTENT), "N");

    let text = "Track Title,Language,Explict Content\nGlow,Instrumental,Y\n";
    let decoded = decode_metadata_csv(text).unwrap();
    assert_eq!(decoded.tracks[0].explicit_content, ExplicitContent::No);
  }

  #[test]
  fn decode_tolerates_partial_headers_and_blank_records() {
    let text = concat!(
      "\u{feff}Album Title,Track Title,Language,Genre\n",
      "\nNights,Glow,,House\r\n",
      ",,,\r\rSecond,Echo,Klingon,Techno",
    );
    let decoded = decode_metadata_csv(text).unwrap();

    assert_eq!(decoded.release.title, "Nights");
    assert_eq!(decoded.release.artists, vec![String::new()]);
    assert!(decoded.release.is_worldwide);
    assert!(!decoded.release.is_re_release);
    assert_eq!(decoded.release.release_date, None);

    assert_eq!(decoded.tracks.len(), 2);
    assert_eq!(decoded.tracks[0].language, Language::English);
    assert_eq!(decoded.tracks[0].track_genre, "House");
    assert_eq!(decoded.tracks[0].performers, vec![Contributor::placeholder()]);
    assert_eq!(decoded.tracks[1].language, Language::Custom("Klingon".into()));
  }

  #[test]
  fn missing_data_rows() {
    assert!(matches!(decode_metadata_csv(""), Err(CodecError::NoDataRows)));
    assert!(matches!(decode_metadata_csv("Album Title,Track Title\r\n,\r\n"), Err(CodecError::NoDataRows)));
  }

  #[test]
  fn dates() {
    let date = NaiveDate::from_ymd_opt(2025, 3, 1);
    assert_eq!(parse_date("01/03/2025"), date);
    assert_eq!(parse_date("1/3/2025"), date);
    assert_eq!(parse_date("2025-03-01"), date);
    assert_eq!(parse_date("next friday"), None);
    assert_eq!(format_date(date), "01/03/2025");
    assert_eq!(format_date(None), "");
  }

  #[test]
  fn workbook_rows_use_template_coordinates() {
    let rows = workbook_rows(&nights(), &[glow(), glow()]);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].row, 5);

    let cells: HashMap<u32, CellValue> = rows[1].cells.iter().cloned().collect();
    assert_eq!(cells.len(), WORKBOOK_COLUMN_COUNT as usize);
    assert_eq!(cells[&1], CellValue::Number(1.0));
    assert_eq!(cells[&2], CellValue::Number(2.0));
    assert_eq!(cells[&3], CellValue::from("SINGLE"));
    assert_eq!(cells[&46], CellValue::from(""));
    assert_eq!(cells[&47], CellValue::from(""));
    assert_eq!(cells[&48], CellValue::from("Tech House"));
    assert_eq!(cells[&52], CellValue::from(""));
  }
}
