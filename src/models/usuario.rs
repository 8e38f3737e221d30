use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Fixed rejection message when either creation field is missing.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Nombre y edad son requeridos";

/// A user record held by the in-memory collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usuario {
    pub id: i32,
    pub nombre: String,
    pub edad: i32,
}

/// Data for a record that has not been assigned an id yet.
///
/// Only constructible through [`NewUsuario::try_new`], so a value of this
/// type always carries a non-empty name and a present age.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUsuario {
    nombre: String,
    edad: i32,
}

impl NewUsuario {
    /// Checks presence of both fields.
    ///
    /// An empty name counts as missing. So does an age of zero.
    pub fn try_new(nombre: Option<String>, edad: Option<i32>) -> AppResult<Self> {
        let nombre = nombre.filter(|n| !n.is_empty());
        let edad = edad.filter(|e| *e != 0);

        match (nombre, edad) {
            (Some(nombre), Some(edad)) => Ok(Self { nombre, edad }),
            (None, _) => Err(AppError::validation("nombre", REQUIRED_FIELDS_MESSAGE)),
            (_, None) => Err(AppError::validation("edad", REQUIRED_FIELDS_MESSAGE)),
        }
    }

    pub fn nombre(&self) -> &str {
        &self.nombre
    }

    pub fn edad(&self) -> i32 {
        self.edad
    }

    /// Attaches the id assigned by the collection.
    pub(crate) fn into_usuario(self, id: i32) -> Usuario {
        Usuario {
            id,
            nombre: self.nombre,
            edad: self.edad,
        }
    }
}

/// Listing predicates. Every `None` imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsuarioFilter {
    /// Case-insensitive substring of the name
    pub nombre: Option<String>,
    /// Inclusive lower age bound
    pub edad_min: Option<i32>,
    /// Inclusive upper age bound
    pub edad_max: Option<i32>,
}

impl UsuarioFilter {
    pub fn is_empty(&self) -> bool {
        self.nombre.is_none() && self.edad_min.is_none() && self.edad_max.is_none()
    }

    /// Returns true when the record satisfies every supplied predicate.
    pub fn matches(&self, usuario: &Usuario) -> bool {
        if let Some(ref part) = self.nombre
            && !usuario
                .nombre
                .to_lowercase()
                .contains(&part.to_lowercase())
        {
            return false;
        }
        if let Some(min) = self.edad_min
            && usuario.edad < min
        {
            return false;
        }
        if let Some(max) = self.edad_max
            && usuario.edad > max
        {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ana() -> Usuario {
        Usuario {
            id: 4,
            nombre: "Ana García".to_string(),
            edad: 22,
        }
    }

    #[test]
    fn test_try_new_accepts_present_fields() {
        let new = NewUsuario::try_new(Some("Zoe".to_string()), Some(40)).unwrap();
        assert_eq!(new.nombre(), "Zoe");
        assert_eq!(new.edad(), 40);
    }

    #[test]
    fn test_try_new_rejects_empty_name() {
        let err = NewUsuario::try_new(Some(String::new()), Some(40)).unwrap_err();
        assert!(matches!(
            err,
            AppError::Validation { ref field, ref reason }
                if field == "nombre" && reason == REQUIRED_FIELDS_MESSAGE
        ));
    }

    #[test]
    fn test_try_new_rejects_missing_or_zero_age() {
        for edad in [None, Some(0)] {
            let err = NewUsuario::try_new(Some("Zoe".to_string()), edad).unwrap_err();
            assert!(matches!(err, AppError::Validation { ref field, .. } if field == "edad"));
        }
    }

    #[test]
    fn test_try_new_accepts_negative_age() {
        // Only absence is rejected, not range
        assert!(NewUsuario::try_new(Some("Zoe".to_string()), Some(-1)).is_ok());
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = UsuarioFilter::default();
        assert!(filter.is_empty());
        assert!(filter.matches(&ana()));
    }

    #[test]
    fn test_name_filter_is_case_insensitive() {
        let filter = UsuarioFilter {
            nombre: Some("GARCÍA".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&ana()));

        let filter = UsuarioFilter {
            nombre: Some("smith".to_string()),
            ..Default::default()
        };
        assert!(!filter.matches(&ana()));
    }

    #[test]
    fn test_age_bounds_are_inclusive() {
        let filter = UsuarioFilter {
            edad_min: Some(22),
            edad_max: Some(22),
            ..Default::default()
        };
        assert!(filter.matches(&ana()));

        let filter = UsuarioFilter {
            edad_min: Some(23),
            ..Default::default()
        };
        assert!(!filter.matches(&ana()));

        let filter = UsuarioFilter {
            edad_max: Some(21),
            ..Default::default()
        };
        assert!(!filter.matches(&ana()));
    }
}
