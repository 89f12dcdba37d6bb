use serde::{Deserialize, Serialize};

/// Persona acreditada en una pista junto con los roles que desempeña.
///
/// El nombre es la clave de deduplicación: un mismo nombre puede acumular
/// roles que llegan desde varias columnas del CSV (`Vocalist`, `Guitar`,
/// `Performer Other`…). Los roles se comportan como un conjunto que conserva
/// el orden de inserción.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Contributor {
  pub name: String,
  pub roles: Vec<String>,
}

impl Contributor {
  pub fn new<I, S>(name: impl Into<String>, roles: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    let mut contributor = Self { name: name.into(), roles: Vec::new() };
    for role in roles {
      contributor.add_role(role);
    }
    contributor
  }

  /// Entrada vacía que los formularios usan como fila inicial.
  pub fn placeholder() -> Self {
    Self::default()
  }

  /// Añade un rol; repetir un rol existente no tiene efecto.
  pub fn add_role(&mut self, role: impl Into<String>) {
    let role = role.into();
    if !self.has_role(&role) {
      self.roles.push(role);
    }
  }

  pub fn has_role(&self, role: &str) -> bool {
    self.roles.iter().any(|r| r == role)
  }

  /// Tiene nombre y al menos un rol: lo mínimo que exige la exportación.
  pub fn is_credited(&self) -> bool {
    !self.name.is_empty() && !self.roles.is_empty()
  }
}
