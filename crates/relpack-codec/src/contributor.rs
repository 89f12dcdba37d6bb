//! Contributor columns.
//!
//! Each credit block is spread over three fixed-role columns and an "Other"
//! column. A fixed-role column holds pipe-separated names; the "Other" column
//! holds `name|role` pairs separated by `||`.

use indexmap::IndexMap;
use relpack_core::domain::Contributor;

use crate::columns;

/// A fixed-role column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
  pub column: &'static str,
  pub role: &'static str,
}

/// The columns one credit block is encoded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketSet {
  pub buckets: [Bucket; 3],
  pub other_column: &'static str,
}

impl BucketSet {
  /// Whether `role` has its own column in this set.
  pub fn is_bucket_role(&self, role: &str) -> bool {
    self.buckets.iter().any(|b| b.role == role)
  }
}

pub const PERFORMERS: BucketSet = BucketSet {
  buckets: [
    Bucket { column: columns::VOCALIST, role: "Vocalist" },
    Bucket { column: columns::PROGRAMMING, role: "Programming" },
    Bucket { column: columns::GUITAR, role: "Guitar" },
  ],
  other_column: columns::PERFORMER_OTHER,
};

pub const COMPOSITION: BucketSet = BucketSet {
  buckets: [
    Bucket { column: columns::COMPOSER, role: "Composer" },
    Bucket { column: columns::LYRICIST, role: "Lyricist" },
    Bucket { column: columns::SONGWRITER, role: "Songwriter" },
  ],
  other_column: columns::SONGWRITER_OTHER,
};

pub const PRODUCTION: BucketSet = BucketSet {
  buckets: [
    Bucket { column: columns::PRODUCER, role: "Producer" },
    Bucket { column: columns::MIX_ENGINEER, role: "Mixer" },
    Bucket { column: columns::MASTERING_ENGINEER, role: "Mastering Engineer" },
  ],
  other_column: columns::PE_OTHER,
};

pub const REMIXER_ROLE: &str = "Remixer";

/// Encodes a credit block as `(column, value)` pairs: the three bucket
/// columns in set order, then the "Other" column.
///
/// Contributors without a name are skipped.
pub fn encode_bucketed(contributors: &[Contributor], set: &BucketSet) -> Vec<(&'static str, String)> {
  let named = || contributors.iter().filter(|c| !c.name.is_empty());

  let mut cells: Vec<(&'static str, String)> = set
    .buckets
    .iter()
    .map(|bucket| {
      let names = named().filter(|c| c.has_role(bucket.role)).map(|c| c.name.as_str());
      (bucket.column, names.collect::<Vec<_>>().join("|"))
    })
    .collect();

  let other = named()
    .flat_map(|c| c.roles.iter().filter(move |r| !set.is_bucket_role(r)).map(move |r| format!("{}|{}", c.name, r)))
    .collect::<Vec<_>>()
    .join("||");
  cells.push((set.other_column, other));

  cells
}

/// Rebuilds a credit block from its columns.
///
/// `cell` returns the raw value of a column (empty when absent). Names are
/// merged in first-seen order. An empty block decodes to a single
/// placeholder, which is what an untouched editor form holds.
pub fn decode_bucketed<'a, F>(set: &BucketSet, cell: F) -> Vec<Contributor>
where
  F: Fn(&str) -> &'a str,
{
  let mut merged: IndexMap<String, Contributor> = IndexMap::new();

  let mut credit = |name: String, role: &str| {
    merged.entry(name.clone()).or_insert_with(|| Contributor::new(name, Vec::<String>::new())).add_role(role);
  };

  for bucket in &set.buckets {
    for name in split_pipe(cell(bucket.column)) {
      credit(name, bucket.role);
    }
  }

  for (name, role) in split_pairs(cell(set.other_column)) {
    credit(name, &role);
  }

  if merged.is_empty() {
    return vec![Contributor::placeholder()];
  }
  merged.into_values().collect()
}

/// Release-level remixers as `name|Remixer` pairs.
pub fn encode_remixers(remixers: &[String]) -> String {
  remixers.iter().filter(|r| !r.is_empty()).map(|r| format!("{r}|{REMIXER_ROLE}")).collect::<Vec<_>>().join("||")
}

/// Remixer names from `Album Other Artist`; pairs with any other role are ignored.
pub fn decode_remixers(cell: &str) -> Vec<String> {
  split_pairs(cell).into_iter().filter(|(_, role)| role == REMIXER_ROLE).map(|(name, _)| name).collect()
}

/// Joins non-empty names with `|`.
pub fn join_pipe<S: AsRef<str>>(items: &[S]) -> String {
  items.iter().map(AsRef::<str>::as_ref).filter(|s| !s.is_empty()).collect::<Vec<_>>().join("|")
}

/// Splits on `|`, trimming and dropping empty entries.
pub fn split_pipe(cell: &str) -> Vec<String> {
  cell.split('|').map(str::trim).filter(|s| !s.is_empty()).map(str::to_string).collect()
}

/// Well-formed `name|role` pairs of a `||`-separated cell. Entries with more
/// or fewer than two parts, or an empty part, are dropped.
fn split_pairs(cell: &str) -> Vec<(String, String)> {
  if cell.is_empty() {
    return Vec::new();
  }

  cell
    .split("||")
    .filter_map(|entry| {
      let parts: Vec<&str> = entry.split('|').map(str::trim).collect();
      match parts.as_slice() {
        [name, role] if !name.is_empty() && !role.is_empty() => Some((name.to_string(), role.to_string())),
        _ => None,
      }
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  fn lookup(cells: &[(&'static str, String)]) -> HashMap<&'static str, String> {
    cells.iter().cloned().collect()
  }

  #[test]
  fn bucket_and_other_columns() {
    let performers = vec![
      Contributor::new("Jane", ["Vocalist", "Guitar", "Cool Role"]),
      Contributor::new("Bob", ["Guitar"]),
      Contributor::new("", ["Vocalist"]),
    ];

    let cells = lookup(&encode_bucketed(&performers, &PERFORMERS));
    assert_eq!(cells["Vocalist"], "Jane");
    assert_eq!(cells["Programming"], "");
    assert_eq!(cells["Guitar"], "Jane|Bob");
    assert_eq!(cells["Performer Other"], "Jane|Cool Role");
  }

  #[test]
  fn roles_are_complete_after_round_trip() {
    let performers = vec![Contributor::new("Jane", ["Vocalist", "Guitar", "Cool Role"])];
    let cells = lookup(&encode_bucketed(&performers, &PERFORMERS));

    let decoded = decode_bucketed(&PERFORMERS, |col| cells.get(col).map(String::as_str).unwrap_or(""));
    assert_eq!(decoded.len(), 1);
    assert_eq!(decoded[0].name, "Jane");

    let mut roles = decoded[0].roles.clone();
    roles.sort();
    assert_eq!(roles, vec!["Cool Role", "Guitar", "Vocalist"]);
  }

  #[test]
  fn mix_engineer_column_maps_to_mixer_role() {
    let cells = HashMap::from([("Mix Engineer", "Ann"), ("PE Other", "Ann|Recording||broken||x|y|z||Tom|")]);
    let decoded = decode_bucketed(&PRODUCTION, |col| cells.get(col).copied().unwrap_or(""));

    assert_eq!(decoded, vec![Contributor::new("Ann", ["Mixer", "Recording"])]);
  }

  #[test]
  fn empty_block_decodes_to_placeholder() {
    let decoded = decode_bucketed(&COMPOSITION, |_| "");
    assert_eq!(decoded, vec![Contributor::placeholder()]);
  }

  #[test]
  fn remixers_only_keep_remixer_role() {
    let remixers = vec!["DJ A".to_string(), String::new(), "DJ B".to_string()];
    let cell = encode_remixers(&remixers);
    assert_eq!(cell, "DJ A|Remixer||DJ B|Remixer");

    assert_eq!(decode_remixers(&format!("{cell}||Someone|Producer")), vec!["DJ A", "DJ B"]);
  }

  #[test]
  fn pipe_helpers() {
    assert_eq!(join_pipe(&["Jane", "", "Bob"]), "Jane|Bob");
    assert_eq!(split_pipe(" Jane || Bob |"), vec!["Jane", "Bob"]);
    assert!(split_pipe("").is_empty());
  }
}
