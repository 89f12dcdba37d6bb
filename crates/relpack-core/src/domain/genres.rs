//! Taxonomía jerárquica de géneros (hasta tres niveles:
//! Género > Subgénero > Sub-subgénero).
//!
//! Sólo las hojas son seleccionables: `Release::album_genre` y
//! `Track::track_genre` guardan la etiqueta de una hoja.

use serde::Serialize;

/// Nodo del árbol de géneros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenreNode {
  pub id: &'static str,
  pub label: &'static str,
  pub children: &'static [GenreNode],
  /// Términos extra para búsqueda (`"dnb"`, `"prog rock"`…).
  pub search_terms: &'static [&'static str],
}

impl GenreNode {
  pub fn is_leaf(&self) -> bool {
    self.children.is_empty()
  }
}

// Se expande a literales de struct para que los `&[...]` anidados se
// promuevan a `'static`.
macro_rules! genre {
  ($id:literal, $label:literal) => {
    GenreNode { id: $id, label: $label, children: &[], search_terms: &[] }
  };
  ($id:literal, $label:literal, aka: [$($term:literal),* $(,)?]) => {
    GenreNode { id: $id, label: $label, children: &[], search_terms: &[$($term),*] }
  };
  ($id:literal, $label:literal, children: [$($child:expr),* $(,)?]) => {
    GenreNode { id: $id, label: $label, children: &[$($child),*], search_terms: &[] }
  };
}

pub static GENRES: &[GenreNode] = &[
  genre!("rock", "Rock", children: [
    genre!("rock-alternative", "Alternative Rock"),
    genre!("rock-classic", "Classic Rock"),
    genre!("rock-hard", "Hard Rock"),
    genre!("rock-indie", "Indie Rock"),
    genre!("rock-progressive", "Progressive Rock", aka: ["prog rock"]),
    genre!("rock-psychedelic", "Psychedelic Rock", aka: ["psych rock"]),
    genre!("rock-punk", "Punk Rock"),
    genre!("rock-soft", "Soft Rock"),
  ]),
  genre!("electronic", "Electronic", children: [
    genre!("electronic-ambient", "Ambient", children: [
      genre!("electronic-ambient-dark", "Dark Ambient"),
      genre!("electronic-ambient-drone", "Drone"),
    ]),
    genre!("electronic-breakbeat", "Breakbeat"),
    genre!("electronic-downtempo", "Downtempo"),
    genre!("electronic-drum-bass", "Drum & Bass", aka: ["dnb", "d&b"]),
    genre!("electronic-dubstep", "Dubstep"),
    genre!("electronic-edm", "EDM", aka: ["electronic dance music"]),
    genre!("electronic-garage", "Garage", aka: ["uk garage", "ukg"]),
    genre!("electronic-house", "House", children: [
      genre!("electronic-house-deep", "Deep House"),
      genre!("electronic-house-electro", "Electro House"),
      genre!("electronic-house-future", "Future House"),
      genre!("electronic-house-progressive", "Progressive House", aka: ["prog house"]),
      genre!("electronic-house-tech", "Tech House"),
      genre!("electronic-house-tropical", "Tropical House"),
    ]),
    genre!("electronic-idm", "IDM", aka: ["intelligent dance music"]),
    genre!("electronic-jungle", "Jungle"),
    genre!("electronic-techno", "Techno", children: [
      genre!("electronic-techno-acid", "Acid Techno"),
      genre!("electronic-techno-detroit", "Detroit Techno"),
      genre!("electronic-techno-hard", "Hard Techno"),
      genre!("electronic-techno-minimal", "Minimal Techno"),
    ]),
    genre!("electronic-trance", "Trance", children: [
      genre!("electronic-trance-progressive", "Progressive Trance"),
      genre!("electronic-trance-psytrance", "Psytrance", aka: ["psychedelic trance"]),
      genre!("electronic-trance-uplifting", "Uplifting Trance"),
    ]),
  ]),
  genre!("pop", "Pop", children: [
    genre!("pop-contemporary", "Contemporary Pop"),
    genre!("pop-dance", "Dance Pop"),
    genre!("pop-electro", "Electropop"),
    genre!("pop-indie", "Indie Pop"),
    genre!("pop-kpop", "K-Pop", aka: ["korean pop"]),
    genre!("pop-synth", "Synthpop"),
    genre!("pop-teen", "Teen Pop"),
  ]),
  genre!("hip-hop", "Hip-Hop/Rap", children: [
    genre!("hip-hop-alternative", "Alternative Hip-Hop"),
    genre!("hip-hop-conscious", "Conscious Hip-Hop"),
    genre!("hip-hop-drill", "Drill"),
    genre!("hip-hop-grime", "Grime"),
    genre!("hip-hop-trap", "Trap"),
    genre!("hip-hop-uk", "UK Hip-Hop"),
    genre!("hip-hop-underground", "Underground Hip-Hop"),
  ]),
  genre!("rb-soul", "R&B/Soul", children: [
    genre!("rb-contemporary", "Contemporary R&B"),
    genre!("rb-funk", "Funk"),
    genre!("rb-neo-soul", "Neo-Soul"),
    genre!("rb-soul-classic", "Soul"),
  ]),
  genre!("metal", "Metal", children: [
    genre!("metal-black", "Black Metal"),
    genre!("metal-death", "Death Metal"),
    genre!("metal-doom", "Doom Metal"),
    genre!("metal-heavy", "Heavy Metal"),
    genre!("metal-metalcore", "Metalcore"),
    genre!("metal-power", "Power Metal"),
    genre!("metal-progressive", "Progressive Metal", aka: ["prog metal"]),
    genre!("metal-thrash", "Thrash Metal"),
  ]),
  genre!("dance", "Dance", children: [
    genre!("dance-club", "Club Dance"),
    genre!("dance-euro", "Eurodance"),
    genre!("dance-freestyle", "Freestyle"),
    genre!("dance-hardcore", "Hardcore"),
    genre!("dance-hardstyle", "Hardstyle"),
  ]),
  genre!("jazz", "Jazz", children: [
    genre!("jazz-bebop", "Bebop"),
    genre!("jazz-contemporary", "Contemporary Jazz"),
    genre!("jazz-fusion", "Jazz Fusion"),
    genre!("jazz-latin", "Latin Jazz"),
    genre!("jazz-smooth", "Smooth Jazz"),
    genre!("jazz-swing", "Swing"),
  ]),
  genre!("classical", "Classical", children: [
    genre!("classical-baroque", "Baroque"),
    genre!("classical-chamber", "Chamber Music"),
    genre!("classical-contemporary", "Contemporary Classical"),
    genre!("classical-opera", "Opera"),
    genre!("classical-romantic", "Romantic"),
    genre!("classical-symphony", "Symphony"),
  ]),
  genre!("country", "Country", children: [
    genre!("country-alternative", "Alternative Country", aka: ["alt-country"]),
    genre!("country-bluegrass", "Bluegrass"),
    genre!("country-contemporary", "Contemporary Country"),
    genre!("country-outlaw", "Outlaw Country"),
    genre!("country-traditional", "Traditional Country"),
  ]),
  genre!("folk", "Folk", children: [
    genre!("folk-americana", "Americana"),
    genre!("folk-contemporary", "Contemporary Folk"),
    genre!("folk-indie", "Indie Folk"),
    genre!("folk-traditional", "Traditional Folk"),
  ]),
  genre!("blues", "Blues", children: [
    genre!("blues-chicago", "Chicago Blues"),
    genre!("blues-contemporary", "Contemporary Blues"),
    genre!("blues-delta", "Delta Blues"),
    genre!("blues-electric", "Electric Blues"),
  ]),
  genre!("reggae", "Reggae", children: [
    genre!("reggae-dancehall", "Dancehall"),
    genre!("reggae-dub", "Dub"),
    genre!("reggae-roots", "Roots Reggae"),
    genre!("reggae-ska", "Ska"),
  ]),
  genre!("latin", "Latin", children: [
    genre!("latin-bachata", "Bachata"),
    genre!("latin-flamenco", "Flamenco"),
    genre!("latin-reggaeton", "Reggaeton"),
    genre!("latin-salsa", "Salsa"),
    genre!("latin-tango", "Tango"),
  ]),
  genre!("world", "World", children: [
    genre!("world-african", "African"),
    genre!("world-asian", "Asian"),
    genre!("world-celtic", "Celtic"),
    genre!("world-middle-eastern", "Middle Eastern"),
  ]),
  genre!("alternative", "Alternative", children: [
    genre!("alternative-emo", "Emo"),
    genre!("alternative-grunge", "Grunge"),
    genre!("alternative-post-rock", "Post-Rock"),
    genre!("alternative-shoegaze", "Shoegaze"),
  ]),
  genre!("punk", "Punk", children: [
    genre!("punk-hardcore", "Hardcore Punk"),
    genre!("punk-pop", "Pop Punk"),
    genre!("punk-post", "Post-Punk"),
    genre!("punk-ska", "Ska Punk"),
  ]),
];

const PATH_SEPARATOR: &str = " > ";

/// Nodo aplanado para búsqueda.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlatGenre {
  pub id: &'static str,
  pub label: &'static str,
  pub path: Vec<&'static str>,
  /// `"Electronic > House > Tech House"`.
  pub full_path: String,
  /// Etiqueta y ruta en minúsculas más los términos extra del nodo.
  pub search_terms: Vec<String>,
}

/// Hoja seleccionable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectableGenre {
  pub id: &'static str,
  pub label: &'static str,
  pub full_path: String,
}

/// Ancestro (o el propio nodo) en la ruta de un resultado de búsqueda.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreSelection {
  /// Profundidad, empezando en 1.
  pub level: usize,
  pub id: &'static str,
  pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreMatch {
  pub genre: &'static GenreNode,
  pub path: Vec<&'static str>,
  pub parent_selections: Vec<GenreSelection>,
}

/// Todos los nodos del árbol en preorden.
pub fn flatten_genres() -> Vec<FlatGenre> {
  fn walk(nodes: &'static [GenreNode], parent: &[&'static str], out: &mut Vec<FlatGenre>) {
    for node in nodes {
      let mut path = parent.to_vec();
      path.push(node.label);
      let full_path = path.join(PATH_SEPARATOR);

      let mut search_terms = vec![node.label.to_lowercase()];
      search_terms.extend(node.search_terms.iter().map(|t| t.to_string()));
      search_terms.push(full_path.to_lowercase());

      out.push(FlatGenre { id: node.id, label: node.label, path: path.clone(), full_path, search_terms });
      walk(node.children, &path, out);
    }
  }

  let mut out = Vec::new();
  walk(GENRES, &[], &mut out);
  out
}

/// Sólo las hojas, que son las únicas etiquetas válidas para un release o pista.
pub fn selectable_genres() -> Vec<SelectableGenre> {
  flatten_genres()
    .into_iter()
    .filter(|g| find_node(GENRES, g.id).is_some_and(GenreNode::is_leaf))
    .map(|g| SelectableGenre { id: g.id, label: g.label, full_path: g.full_path })
    .collect()
}

fn find_node(nodes: &'static [GenreNode], id: &str) -> Option<&'static GenreNode> {
  nodes.iter().find_map(|n| if n.id == id { Some(n) } else { find_node(n.children, id) })
}

/// Busca un género por etiqueta, sin distinguir mayúsculas.
///
/// Acepta tanto `"Tech House"` como `"Electronic > House > Tech House"`; en el
/// segundo caso sólo cuenta el último segmento. Devuelve la primera
/// coincidencia en preorden.
pub fn find_genre_by_label(label: &str) -> Option<GenreMatch> {
  let needle = label.rsplit(PATH_SEPARATOR).next().unwrap_or(label).trim().to_lowercase();
  if needle.is_empty() {
    return None;
  }

  fn search(
    nodes: &'static [GenreNode],
    needle: &str,
    path: &mut Vec<&'static str>,
    parents: &mut Vec<GenreSelection>,
  ) -> Option<GenreMatch> {
    for node in nodes {
      path.push(node.label);
      parents.push(GenreSelection { level: parents.len() + 1, id: node.id, label: node.label });

      if node.label.to_lowercase() == needle {
        return Some(GenreMatch { genre: node, path: path.clone(), parent_selections: parents.clone() });
      }

      if let Some(found) = search(node.children, needle, path, parents) {
        return Some(found);
      }

      path.pop();
      parents.pop();
    }
    None
  }

  search(GENRES, &needle, &mut Vec::new(), &mut Vec::new())
}
